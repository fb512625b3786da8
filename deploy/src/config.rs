//! Script configuration, read from the environment.
use alloy::primitives::{address, Address};
use eyre::{bail, Context};
use serde::Deserialize;

/// Canonical address of the `StylusDeployer` contract.
pub const DEFAULT_DEPLOYER_ADDRESS: Address =
    address!("0x6ac4839Bfe169CadBBFbDE3f29bd8459037Bf64e");

/// Name given to the counter created by the v1 flow.
pub const DEFAULT_COUNTER_NAME: &str = "MyCounter";

/// Settings of the deployment scripts.
///
/// Every field maps to the upper-cased environment variable of the same
/// name, e.g. `rpc_url` to `RPC_URL`.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Endpoint of the node.
    pub rpc_url: String,
    /// Hex-encoded key of the deploying account.
    pub private_key: String,
    /// `StylusDeployer` running the contracts' constructors.
    #[serde(default = "default_deployer_address")]
    pub deployer_address: Address,
    /// Name of the counter created by the v1 flow.
    #[serde(default = "default_counter_name")]
    pub counter_name: String,
    /// Whether deployed contracts get verified.
    #[serde(default = "default_verify")]
    pub verify: bool,
    /// Factory upgraded by the v2 flow.
    pub factory_address: Option<Address>,
    /// Proxy exercised by the v2 flow.
    pub proxy_counter_address: Option<Address>,
}

fn default_deployer_address() -> Address {
    DEFAULT_DEPLOYER_ADDRESS
}

fn default_counter_name() -> String {
    DEFAULT_COUNTER_NAME.to_owned()
}

fn default_verify() -> bool {
    true
}

/// Contracts the v2 flow operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct V2Addresses {
    /// The factory, acting as beacon.
    pub factory: Address,
    /// The counter proxy created by the v1 flow.
    pub proxy: Address,
}

impl Config {
    /// Loads the configuration from the process environment, after merging
    /// in a `.env` file when there is one.
    ///
    /// # Errors
    ///
    /// If a required variable is missing or a value doesn't parse.
    pub fn from_env() -> eyre::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Loads the configuration from `vars`.
    ///
    /// # Errors
    ///
    /// If a required variable is missing or a value doesn't parse.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> eyre::Result<Self> {
        envy::from_iter(vars).wrap_err("failed to parse environment variables")
    }

    /// Resolves the v2 flow addresses: the environment wins over the
    /// addresses compiled into the script.
    ///
    /// # Errors
    ///
    /// If an address is still zero after resolution.
    pub fn v2_addresses(
        &self,
        factory: Address,
        proxy: Address,
    ) -> eyre::Result<V2Addresses> {
        Ok(V2Addresses {
            factory: resolve(self.factory_address, factory, "FACTORY_ADDRESS")?,
            proxy: resolve(
                self.proxy_counter_address,
                proxy,
                "PROXY_COUNTER_ADDRESS",
            )?,
        })
    }
}

fn resolve(
    from_env: Option<Address>,
    fallback: Address,
    name: &str,
) -> eyre::Result<Address> {
    let address = from_env.unwrap_or(fallback);
    if address.is_zero() {
        bail!("{name} is not set, export it or fill in the script constant");
    }
    Ok(address)
}
