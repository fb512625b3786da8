//! Single-owner access control.
//!
//! The account passed to [`Ownable::constructor`] becomes the owner and is
//! the only one allowed through [`Ownable::only_owner`]. [`CounterFactory`]
//! uses it to guard implementation updates, so the owner of the factory is in
//! control of the code every counter proxy runs.
//!
//! [`CounterFactory`]: crate::factory::CounterFactory
use alloc::{vec, vec::Vec};

use alloy_primitives::Address;
pub use sol::*;
use stylus_sdk::{
    call::MethodError, evm, msg, prelude::*, storage::StorageAddress,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when ownership gets transferred between accounts.
        ///
        /// * `previous_owner` - Address of the previous owner.
        /// * `new_owner` - Address of the new owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
    }

    sol! {
        /// The caller account is not authorized to perform an operation.
        ///
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableUnauthorizedAccount(address account);
        /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
        ///
        /// * `owner` - Account that's not allowed to become the owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableInvalidOwner(address owner);
    }
}

/// An error that occurred in the implementation of an [`Ownable`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(OwnableUnauthorizedAccount),
    /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
    InvalidOwner(OwnableInvalidOwner),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`Ownable`] contract.
#[storage]
pub struct Ownable {
    /// The current owner of this contract.
    pub(crate) owner: StorageAddress,
}

/// Interface for an [`Ownable`] contract.
pub trait IOwnable {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Returns the address of the current owner.
    #[must_use]
    fn owner(&self) -> Address;

    /// Transfers ownership of the contract to `new_owner`.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::InvalidOwner`] - If `new_owner` is the [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error>;

    /// Leaves the contract without owner, which disables every owner-only
    /// function for good.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn renounce_ownership(&mut self) -> Result<(), Self::Error>;
}

impl Ownable {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `initial_owner` - The initial owner of this contract.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If initial owner is [`Address::ZERO`].
    pub fn constructor(&mut self, initial_owner: Address) -> Result<(), Error> {
        if initial_owner.is_zero() {
            return Err(Error::InvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }
        self._transfer_ownership(initial_owner);
        Ok(())
    }

    /// Returns the address of the current owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    /// See [`IOwnable::transfer_ownership`].
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::InvalidOwner`] - If `new_owner` is the [`Address::ZERO`].
    pub fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Error> {
        self.only_owner()?;

        if new_owner.is_zero() {
            return Err(Error::InvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }

        self._transfer_ownership(new_owner);

        Ok(())
    }

    /// See [`IOwnable::renounce_ownership`].
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    pub fn renounce_ownership(&mut self) -> Result<(), Error> {
        self.only_owner()?;
        self._transfer_ownership(Address::ZERO);
        Ok(())
    }

    /// Checks if the [`msg::sender`] is set as the owner.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If called by any account other than
    ///   the owner.
    pub fn only_owner(&self) -> Result<(), Error> {
        let account = msg::sender();
        if self.owner() != account {
            return Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account },
            ));
        }

        Ok(())
    }

    /// Transfers ownership without access restriction.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn _transfer_ownership(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);
        evm::log(OwnershipTransferred { previous_owner, new_owner });
    }
}

#[cfg(test)]
mod tests {
    use motsu::prelude::*;
    use stylus_sdk::{alloy_primitives::Address, prelude::*};

    use super::*;

    unsafe impl TopLevelStorage for Ownable {}

    #[public]
    impl Ownable {
        fn init(&mut self, initial_owner: Address) -> Result<(), Error> {
            self.constructor(initial_owner)
        }

        #[selector(name = "owner")]
        fn get_owner(&self) -> Address {
            self.owner()
        }

        #[selector(name = "transferOwnership")]
        fn transfer(&mut self, new_owner: Address) -> Result<(), Error> {
            self.transfer_ownership(new_owner)
        }

        #[selector(name = "renounceOwnership")]
        fn renounce(&mut self) -> Result<(), Error> {
            self.renounce_ownership()
        }
    }

    #[motsu::test]
    fn constructor_sets_owner(contract: Contract<Ownable>, alice: Address) {
        contract.sender(alice).init(alice).motsu_unwrap();

        assert_eq!(contract.sender(alice).get_owner(), alice);
        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: alice,
        });
    }

    #[motsu::test]
    fn constructor_rejects_zero_owner(
        contract: Contract<Ownable>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            .init(Address::ZERO)
            .motsu_expect_err("should reject zero owner");
        assert!(matches!(
            err,
            Error::InvalidOwner(OwnableInvalidOwner { owner })
                if owner.is_zero()
        ));
    }

    #[motsu::test]
    fn only_owner_can_transfer(
        contract: Contract<Ownable>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).init(alice).motsu_unwrap();

        let err = contract.sender(bob).transfer(bob).motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == bob
        ));

        contract.sender(alice).transfer(bob).motsu_unwrap();
        assert_eq!(contract.sender(alice).get_owner(), bob);
        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: alice,
            new_owner: bob,
        });
    }

    #[motsu::test]
    fn transfer_to_zero_reverts(contract: Contract<Ownable>, alice: Address) {
        contract.sender(alice).init(alice).motsu_unwrap();

        let err =
            contract.sender(alice).transfer(Address::ZERO).motsu_unwrap_err();
        assert!(matches!(err, Error::InvalidOwner(_)));
        assert_eq!(contract.sender(alice).get_owner(), alice);
    }

    #[motsu::test]
    fn renounce_clears_owner(
        contract: Contract<Ownable>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).init(alice).motsu_unwrap();

        let err = contract.sender(bob).renounce().motsu_unwrap_err();
        assert!(matches!(err, Error::UnauthorizedAccount(_)));

        contract.sender(alice).renounce().motsu_unwrap();
        assert_eq!(contract.sender(alice).get_owner(), Address::ZERO);
    }
}
