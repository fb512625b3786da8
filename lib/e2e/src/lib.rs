#![doc = include_str!("../README.md")]
mod account;
mod constructor;
mod deploy;
mod error;
mod event;
mod project;
mod receipt;
mod system;

pub use account::Account;
pub use constructor::{AbiTypeToString, Constructor};
pub use deploy::Deployer;
pub use e2e_proc::test;
pub use error::Revert;
pub use event::{decode_events, EventExt};
pub use receipt::Receipt;
pub use system::{Wallet, DEPLOYER_ADDRESS, RPC_URL};
#[doc(hidden)]
pub use stylus_sdk;

/// This macro provides a shorthand for broadcasting the transaction to the
/// network.
///
/// See: <https://alloy-rs.github.io/alloy/alloy_contract/struct.CallBuilder.html#method.send>
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn counts_up(alice: Account) -> eyre::Result<()> {
///     let contract = CounterV1::new(proxy, &alice.wallet);
///     let _ = watch!(contract.up())?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// This macro provides a shorthand for broadcasting the transaction
/// to the network, and then waiting for the given number of confirmations.
///
/// See: <https://alloy-rs.github.io/alloy/alloy_provider/heart/struct.PendingTransactionBuilder.html#method.watch>
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $crate::send!($e)?.watch().await
    };
}

/// This macro provides a shorthand for broadcasting the transaction
/// to the network, and then waiting for its receipt.
///
/// See: <https://alloy-rs.github.io/alloy/alloy_provider/heart/struct.PendingTransactionBuilder.html#method.get_receipt>
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $crate::send!($e)?.get_receipt().await
    };
}
