//! Deploys `CounterV1` behind a fresh factory and creates a first counter.
use counter_deploy::{
    config::Config,
    flows::{self, Session},
    verify,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    counter_deploy::init_logger();

    let config = Config::from_env()?;
    let workspace_root = std::env::current_dir()?;
    let verifier = verify::from_config(&config, &workspace_root);

    let session = Session::new(&config, verifier.as_ref(), &workspace_root)?;
    flows::deploy_v1(&session).await?;

    Ok(())
}
