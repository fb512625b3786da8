//! Owner-restricted counter meant to live behind a beacon proxy.
//!
//! [`Counter`] is the single storage layout shared by every version of the
//! counter implementation. `CounterV1` exposes [`Counter::up`] and
//! [`Counter::down`]; `CounterV2` adds [`Counter::reset`] and ownership
//! management on top of the very same fields, which is what lets an existing
//! proxy keep its owner, name and value across a beacon update.
//!
//! The owner check of every mutating function runs before any other check.
use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{Address, U256};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageString, StorageU256},
};

use crate::utils::initializable::{self, AlreadyInitialized, Initializable};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when ownership of a counter changes hands.
        ///
        /// * `previous_owner` - Address of the previous owner.
        /// * `new_owner` - Address of the new owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
    }

    sol! {
        /// The caller is not the owner of the counter.
        ///
        /// * `caller` - Account that attempted the call.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error NotOwner(address caller);

        /// The counter is at zero and cannot be decremented.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error Down();

        /// The counter is already at zero and cannot be reset.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error Reset();

        /// The counter reached [`alloy_primitives::U256::MAX`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ValueOverflow();

        /// [`alloy_primitives::Address::ZERO`] cannot own a counter.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error NewOwnerCannotBeAddressZero();
    }
}

/// An error that occurred in the implementation of a [`Counter`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller is not the owner of the counter.
    NotOwner(NotOwner),
    /// The counter is at zero and cannot be decremented.
    Down(Down),
    /// The counter is already at zero and cannot be reset.
    Reset(Reset),
    /// The counter reached [`U256::MAX`].
    ValueOverflow(ValueOverflow),
    /// [`Address::ZERO`] cannot own a counter.
    NewOwnerCannotBeAddressZero(NewOwnerCannotBeAddressZero),
    /// The counter is already initialized.
    AlreadyInitialized(AlreadyInitialized),
}

impl From<initializable::Error> for Error {
    fn from(e: initializable::Error) -> Self {
        match e {
            initializable::Error::AlreadyInitialized(e) => {
                Error::AlreadyInitialized(e)
            }
        }
    }
}

impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a [`Counter`].
///
/// The field order is the storage layout of every counter version and must
/// never change.
#[storage]
pub struct Counter {
    initializable: Initializable,
    owner: StorageAddress,
    name: StorageString,
    value: StorageU256,
}

impl Counter {
    /// Sets up a freshly created proxy.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Display name of the counter.
    /// * `owner` - Account allowed to mutate the counter.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyInitialized`] - If the storage was already
    ///   initialized, or belongs to an implementation contract.
    /// * [`Error::NewOwnerCannotBeAddressZero`] - If `owner` is
    ///   [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn initialize(
        &mut self,
        name: String,
        owner: Address,
    ) -> Result<(), Error> {
        self.initializable.initialize()?;

        if owner.is_zero() {
            return Err(NewOwnerCannotBeAddressZero {}.into());
        }

        self.name.set_str(name);
        self._transfer_ownership(owner);
        Ok(())
    }

    /// Locks this storage against [`Self::initialize`].
    ///
    /// Called from the constructor of implementation contracts, so the
    /// implementation itself keeps a zero owner, an empty name and a zero
    /// value forever.
    pub fn disable_initializers(&mut self) {
        self.initializable.disable_initializers();
    }

    /// Returns the owner of the counter.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    /// Returns the display name of the counter.
    #[must_use]
    pub fn name(&self) -> String {
        self.name.get_string()
    }

    /// Returns the current value of the counter.
    #[must_use]
    pub fn value(&self) -> U256 {
        self.value.get()
    }

    /// Increments the counter by one.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOwner`] - If not called by the owner.
    /// * [`Error::ValueOverflow`] - If the value is [`U256::MAX`].
    pub fn up(&mut self) -> Result<(), Error> {
        self.only_owner()?;

        let value = self
            .value
            .get()
            .checked_add(U256::from(1))
            .ok_or(ValueOverflow {})?;
        self.value.set(value);
        Ok(())
    }

    /// Decrements the counter by one.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOwner`] - If not called by the owner.
    /// * [`Error::Down`] - If the value is zero.
    pub fn down(&mut self) -> Result<(), Error> {
        self.only_owner()?;

        let value = self.value.get();
        if value.is_zero() {
            return Err(Down {}.into());
        }
        self.value.set(value - U256::from(1));
        Ok(())
    }

    /// Sets the counter back to zero.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOwner`] - If not called by the owner.
    /// * [`Error::Reset`] - If the value is already zero.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.only_owner()?;

        if self.value.get().is_zero() {
            return Err(Reset {}.into());
        }
        self.value.set(U256::ZERO);
        Ok(())
    }

    /// Hands the counter over to `new_owner`.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOwner`] - If not called by the owner.
    /// * [`Error::NewOwnerCannotBeAddressZero`] - If `new_owner` is
    ///   [`Address::ZERO`]. Use [`Self::renounce_ownership`] instead.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Error> {
        self.only_owner()?;

        if new_owner.is_zero() {
            return Err(NewOwnerCannotBeAddressZero {}.into());
        }
        self._transfer_ownership(new_owner);
        Ok(())
    }

    /// Leaves the counter without an owner. Nobody can mutate it afterwards.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOwner`] - If not called by the owner.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn renounce_ownership(&mut self) -> Result<(), Error> {
        self.only_owner()?;
        self._transfer_ownership(Address::ZERO);
        Ok(())
    }

    /// Checks that [`msg::sender`] owns the counter.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOwner`] - If called by any other account.
    pub fn only_owner(&self) -> Result<(), Error> {
        let caller = msg::sender();
        if self.owner.get() != caller {
            return Err(NotOwner { caller }.into());
        }
        Ok(())
    }

    fn _transfer_ownership(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);
        evm::log(OwnershipTransferred { previous_owner, new_owner });
    }
}
