use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::Context;

/// Name of the environment variable holding the node's rpc endpoint.
pub const RPC_URL: &str = "RPC_URL";

/// Name of the environment variable holding the address of the
/// `StylusDeployer` contract, used to deploy contracts with constructors.
pub const DEPLOYER_ADDRESS: &str = "DEPLOYER_ADDRESS";

/// Convenience type alias that represents an Ethereum wallet: an `alloy`
/// provider with the recommended fillers and a `WalletFiller`.
pub type Wallet = DynProvider;

/// Load the `name` environment variable.
pub(crate) fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Load and parse the rpc endpoint from the environment.
pub(crate) fn rpc_url() -> eyre::Result<Url> {
    env(RPC_URL)?
        .parse()
        .wrap_err(format!("failed to parse {RPC_URL} into a URL"))
}

/// Build a [`Wallet`] for `signer` connected to `url`.
pub(crate) fn wallet(signer: &PrivateKeySigner, url: Url) -> Wallet {
    ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer.clone()))
        .on_http(url)
        .erased()
}
