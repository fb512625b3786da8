//! Beacon proxy pattern.
//!
//! A beacon is a contract answering `implementation()`. Beacon proxies ask it
//! on every call where to delegate, so one update of the beacon upgrades all
//! of its proxies.
use alloy_primitives::Address;

pub mod code;

pub use code::BeaconProxyCode;

/// This is the interface that a beacon proxy expects of its beacon.
pub trait IBeacon {
    /// The error type associated to this beacon trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Must return an address that can be used as a delegate call target.
    ///
    /// [`CounterFactory`] will check that this address is a contract.
    ///
    /// [`CounterFactory`]: crate::factory::CounterFactory
    ///
    /// # Errors
    ///
    /// * [`Self::Error`] - If the beacon cannot provide an implementation.
    fn implementation(&self) -> Result<Address, Self::Error>;
}
