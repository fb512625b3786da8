//! Proxy patterns used to put counters behind a shared, upgradeable
//! implementation.
pub mod beacon;
