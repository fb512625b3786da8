//! Factory of beacon-proxied counters.
//!
//! [`CounterFactory`] is the beacon of every proxy it creates: each proxy
//! embeds the factory address and asks it for the current implementation on
//! every call. [`CounterFactory::update`] therefore upgrades all counters at
//! once, while each proxy keeps its own storage.
//!
//! Creating a counter re-enters the factory (the new proxy queries
//! `implementation()` while being initialized), so contracts exposing
//! [`CounterFactory::create`] must be built with the `reentrant` feature.
use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{Address, U256};
pub use sol::*;
use stylus_sdk::{
    call::{Call, MethodError},
    contract,
    deploy::RawDeploy,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageVec},
};

use crate::{
    access::ownable::{self, Ownable},
    proxy::beacon::{BeaconProxyCode, IBeacon},
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when a new counter proxy is created.
        ///
        /// * `proxy` - Address of the new proxy.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event ProxyCreated(address proxy);

        /// Emitted when the implementation every proxy delegates to changes.
        ///
        /// * `implementation` - Address of the new implementation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event ImplementationChanged(address indexed implementation);
    }

    sol! {
        /// The `implementation` of the beacon is invalid.
        ///
        /// * `implementation` - Address of the invalid implementation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error BeaconInvalidImplementation(address implementation);

        /// No counter was created at `index`.
        ///
        /// * `index` - Requested index.
        /// * `length` - Number of counters created so far.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error CounterIndexOutOfBounds(uint256 index, uint256 length);

        /// Deploying the proxy code failed.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ProxyDeploymentFailed();

        /// The freshly deployed `proxy` rejected its initialization.
        ///
        /// * `proxy` - Address of the proxy.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ProxyInitializationFailed(address proxy);
    }
}

/// An error that occurred in the implementation of a [`CounterFactory`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(ownable::OwnableUnauthorizedAccount),
    /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
    InvalidOwner(ownable::OwnableInvalidOwner),
    /// The `implementation` of the beacon is invalid.
    InvalidImplementation(BeaconInvalidImplementation),
    /// No counter was created at the requested index.
    IndexOutOfBounds(CounterIndexOutOfBounds),
    /// Deploying the proxy code failed.
    DeploymentFailed(ProxyDeploymentFailed),
    /// The freshly deployed proxy rejected its initialization.
    InitializationFailed(ProxyInitializationFailed),
}

impl From<ownable::Error> for Error {
    fn from(e: ownable::Error) -> Self {
        match e {
            ownable::Error::UnauthorizedAccount(e) => {
                Error::UnauthorizedAccount(e)
            }
            ownable::Error::InvalidOwner(e) => Error::InvalidOwner(e),
        }
    }
}

impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

pub use initializer::ICounterInitializer;

mod initializer {
    #![allow(missing_docs)]
    #![cfg_attr(coverage_nightly, coverage(off))]

    use alloc::vec;

    use stylus_sdk::prelude::sol_interface;

    sol_interface! {
        /// Initialization entry point of every counter version.
        interface ICounterInitializer {
            function initialize(string calldata name, address owner) external;
        }
    }
}

/// State of a [`CounterFactory`] contract.
#[storage]
pub struct CounterFactory {
    /// Owner allowed to update the implementation.
    pub ownable: Ownable,
    implementation: StorageAddress,
    counters: StorageVec<StorageAddress>,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for CounterFactory {}

impl CounterFactory {
    /// Constructor.
    ///
    /// Stylus constructors run inside the `StylusDeployer`, which is then
    /// [`msg::sender`], so the deploying account passes itself as
    /// `initial_owner`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `implementation` - Implementation the proxies delegate to.
    /// * `initial_owner` - Account allowed to update the implementation.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `initial_owner` is [`Address::ZERO`].
    /// * [`Error::InvalidImplementation`] - If `implementation` has no code.
    ///
    /// # Events
    ///
    /// * [`ownable::OwnershipTransferred`].
    /// * [`ImplementationChanged`].
    pub fn constructor(
        &mut self,
        implementation: Address,
        initial_owner: Address,
    ) -> Result<(), Error> {
        self.ownable.constructor(initial_owner)?;
        self._set_implementation(implementation)
    }

    /// Points every proxy at `new_implementation`.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::InvalidImplementation`] - If `new_implementation` has no
    ///   code.
    ///
    /// # Events
    ///
    /// * [`ImplementationChanged`].
    pub fn update(&mut self, new_implementation: Address) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self._set_implementation(new_implementation)
    }

    /// Deploys a new counter proxy owned by [`msg::sender`] and returns its
    /// address.
    ///
    /// Nothing is written to the factory's storage before the proxy is
    /// initialized, since initialization re-enters the factory.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Display name of the new counter.
    ///
    /// # Errors
    ///
    /// * [`Error::DeploymentFailed`] - If the proxy could not be deployed.
    /// * [`Error::InitializationFailed`] - If the proxy rejected
    ///   `initialize`.
    ///
    /// # Events
    ///
    /// * [`ProxyCreated`].
    #[allow(deprecated)]
    pub fn create(&mut self, name: String) -> Result<Address, Error> {
        let code = BeaconProxyCode::new(contract::address()).init_code();

        // SAFETY: the init code only copies the runtime into memory, it makes
        // no call that could observe the factory's storage cache.
        let proxy = unsafe { RawDeploy::new().deploy(&code, U256::ZERO) }
            .map_err(|_| ProxyDeploymentFailed {})?;

        let owner = msg::sender();
        ICounterInitializer::new(proxy)
            .initialize(Call::new_in(self), name, owner)
            .map_err(|_| ProxyInitializationFailed { proxy })?;

        self.counters.push(proxy);
        evm::log(ProxyCreated { proxy });

        Ok(proxy)
    }

    /// Returns the counter created at `index`, in creation order.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfBounds`] - If fewer than `index + 1` counters were
    ///   created.
    pub fn get_counter(&self, index: U256) -> Result<Address, Error> {
        self.counters.get(index).ok_or_else(|| {
            CounterIndexOutOfBounds {
                index,
                length: U256::from(self.counters.len()),
            }
            .into()
        })
    }

    /// Returns how many counters were created.
    #[must_use]
    pub fn counter_count(&self) -> U256 {
        U256::from(self.counters.len())
    }

    /// Returns the owner of the factory.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn _set_implementation(
        &mut self,
        new_implementation: Address,
    ) -> Result<(), Error> {
        if !new_implementation.has_code() {
            return Err(BeaconInvalidImplementation {
                implementation: new_implementation,
            }
            .into());
        }

        self.implementation.set(new_implementation);
        evm::log(ImplementationChanged { implementation: new_implementation });

        Ok(())
    }
}

impl IBeacon for CounterFactory {
    type Error = Error;

    fn implementation(&self) -> Result<Address, Self::Error> {
        Ok(self.implementation.get())
    }
}
