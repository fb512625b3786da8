#![cfg(feature = "e2e")]

use std::{path::Path, sync::Mutex};

use alloy::primitives::{Address, U256};
use counter_deploy::{
    abi::{CounterFactory, CounterV2},
    config::{Config, V2Addresses},
    flows::{self, Session, COUNTER_FACTORY, COUNTER_V1, COUNTER_V2},
    verify::{VerificationRequest, Verifier},
};
use e2e::{Account, DEPLOYER_ADDRESS};
use eyre::{bail, ContextCompat, Result};

/// Records every request, and fails on the `fail_at`-th one when set.
#[derive(Default)]
struct RecordingVerifier {
    requests: Mutex<Vec<VerificationRequest>>,
    fail_at: Option<usize>,
}

impl RecordingVerifier {
    fn failing_at(index: usize) -> Self {
        Self { fail_at: Some(index), ..Self::default() }
    }

    fn requests(&self) -> Vec<VerificationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Verifier for RecordingVerifier {
    fn verify(&self, request: &VerificationRequest) -> Result<()> {
        let Ok(mut requests) = self.requests.lock() else {
            bail!("verifier lock poisoned");
        };
        let index = requests.len();
        requests.push(request.clone());

        if self.fail_at == Some(index) {
            bail!("verification of {} failed", request.contract);
        }
        Ok(())
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("deploy crate should live inside the workspace")
}

fn config(account: &Account) -> Result<Config> {
    let deployer = std::env::var(DEPLOYER_ADDRESS)?;
    Config::from_vars([
        ("RPC_URL".to_owned(), account.url().to_owned()),
        ("PRIVATE_KEY".to_owned(), account.pk()),
        ("DEPLOYER_ADDRESS".to_owned(), deployer),
        ("COUNTER_NAME".to_owned(), "FlowCounter".to_owned()),
    ])
}

#[e2e::test]
async fn v1_then_v2_flow(alice: Account) -> Result<()> {
    let config = config(&alice)?;
    let verifier = RecordingVerifier::default();
    let session = Session::new(&config, &verifier, workspace_root())?;

    let proxy = flows::deploy_v1(&session).await?;

    let requests = verifier.requests();
    assert_eq!(requests.len(), 2);
    let (implementation, factory) = (&requests[0], &requests[1]);
    assert_eq!(implementation.contract, COUNTER_V1.identifier());
    assert!(implementation.constructor_args.is_empty());
    assert_eq!(factory.contract, COUNTER_FACTORY.identifier());
    assert_eq!(
        factory.constructor_args,
        vec![implementation.address.to_string(), alice.address().to_string()]
    );

    let contract = CounterFactory::new(factory.address, &alice.wallet);
    assert_eq!(contract.getCounter(U256::ZERO).call().await?.counter, proxy);

    let addresses = V2Addresses { factory: factory.address, proxy };
    let impl_v2 = flows::deploy_v2(&session, addresses).await?;

    let requests = verifier.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].contract, COUNTER_V2.identifier());
    assert_eq!(requests[2].address, impl_v2);

    assert_eq!(
        contract.implementation().call().await?.implementation,
        impl_v2
    );
    let counter = CounterV2::new(proxy, &alice.wallet);
    assert_eq!(counter.value().call().await?.value, U256::ZERO);

    Ok(())
}

#[e2e::test]
async fn failed_verification_aborts_before_create(
    alice: Account,
) -> Result<()> {
    let config = config(&alice)?;
    let verifier = RecordingVerifier::failing_at(1);
    let session = Session::new(&config, &verifier, workspace_root())?;

    let err = flows::deploy_v1(&session)
        .await
        .expect_err("the factory verification fails");
    assert!(format!("{err:#}").contains("CounterFactory"));

    let factory = verifier
        .requests()
        .last()
        .map(|request| request.address)
        .context("the factory should have been submitted")?;
    assert_ne!(factory, Address::ZERO);

    let contract = CounterFactory::new(factory, &alice.wallet);
    assert_eq!(contract.counterCount().call().await?.count, U256::ZERO);

    Ok(())
}
