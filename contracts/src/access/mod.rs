//! Access control used by the factory.
pub mod ownable;
