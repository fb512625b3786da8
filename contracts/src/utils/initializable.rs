//! One-shot initialization guard for contracts that sit behind a proxy.
//!
//! Proxies never run the constructor of the code they delegate to, so a
//! proxied contract sets itself up through an `initialize` function instead.
//! [`Initializable`] makes sure that function succeeds at most once per
//! storage, and lets an implementation lock its own storage at deployment
//! with [`Initializable::disable_initializers`].
use alloc::{vec, vec::Vec};

pub use sol::*;
use stylus_sdk::{call::MethodError, prelude::*, storage::StorageBool};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// The contract is already initialized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AlreadyInitialized();
    }
}

/// An [`Initializable`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The contract is already initialized.
    AlreadyInitialized(AlreadyInitialized),
}

impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`Initializable`] contract.
#[storage]
pub struct Initializable {
    initialized: StorageBool,
}

impl Initializable {
    /// Marks the storage as initialized.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyInitialized`] - If called a second time, or after
    ///   [`Self::disable_initializers`].
    pub fn initialize(&mut self) -> Result<(), Error> {
        if self.initialized.get() {
            return Err(AlreadyInitialized {}.into());
        }
        self.initialized.set(true);
        Ok(())
    }

    /// Locks the storage so that [`Self::initialize`] always fails.
    ///
    /// Meant for the constructor of an implementation contract.
    pub fn disable_initializers(&mut self) {
        self.initialized.set(true);
    }

    /// Whether [`Self::initialize`] has already been consumed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }
}
