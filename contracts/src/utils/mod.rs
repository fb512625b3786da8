//! Common Smart Contracts utilities.
pub mod initializable;

pub use initializable::Initializable;
