//! Upgrades the counters of a factory deployed by `deploy-v1` to `CounterV2`.
use alloy::primitives::Address;
use counter_deploy::{
    config::Config,
    flows::{self, Session},
    verify,
};

/// Factory deployed by `deploy-v1`. `FACTORY_ADDRESS` takes precedence.
const FACTORY_ADDRESS: Address = Address::ZERO;
/// Proxy printed by `deploy-v1`. `PROXY_COUNTER_ADDRESS` takes precedence.
const PROXY_COUNTER_ADDRESS: Address = Address::ZERO;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    counter_deploy::init_logger();

    let config = Config::from_env()?;
    let addresses =
        config.v2_addresses(FACTORY_ADDRESS, PROXY_COUNTER_ADDRESS)?;
    let workspace_root = std::env::current_dir()?;
    let verifier = verify::from_config(&config, &workspace_root);

    let session = Session::new(&config, verifier.as_ref(), &workspace_root)?;
    flows::deploy_v2(&session, addresses).await?;

    Ok(())
}
