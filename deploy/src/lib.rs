//! Scripts deploying and upgrading the beacon counter contracts.
//!
//! Both binaries read their [`config::Config`] from the environment (and an
//! optional `.env` file), and expect the wasm binaries to be built already:
//!
//! ```bash
//! cargo build --release --target wasm32-unknown-unknown
//! cargo run -p counter-deploy --bin deploy-v1
//! ```
//!
//! They must be run from the workspace root.
pub mod abi;
pub mod config;
pub mod flows;
pub mod verify;

/// Installs the global logger, honouring `RUST_LOG` and defaulting to
/// `info`.
pub fn init_logger() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
}
