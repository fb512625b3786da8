use alloy::{primitives::Address, rpc::types::TransactionReceipt};

/// Receipt of a contract deployment.
#[derive(Clone, Debug)]
pub struct Receipt {
    /// Receipt of the deployment transaction.
    pub inner: TransactionReceipt,
    /// Address of the deployed contract.
    pub contract_address: Address,
}
