#![allow(dead_code)]
use alloy::primitives::{Address, U256};
use e2e::{constructor, decode_events, receipt, watch, Account};
use eyre::{Context, ContextCompat, Result};

use crate::abi::CounterFactory;

/// Contracts deployed by [`deploy_factory`].
pub struct Deployed {
    pub impl_v1: Address,
    pub factory: Address,
}

/// Contracts and counters left by [`update_implementation`].
pub struct Updated {
    pub impl_v2: Address,
    pub factory: Address,
    pub counter1: Address,
    pub counter2: Address,
}

/// Deploys the implementation of the counter version `name`, e.g.
/// `counter-v1`.
pub async fn deploy_implementation(
    account: &Account,
    name: &str,
) -> Result<Address> {
    Ok(account
        .as_deployer()
        .with_contract_name(name)
        .with_constructor(constructor!())
        .deploy()
        .await
        .wrap_err(format!("failed to deploy {name}"))?
        .contract_address)
}

/// Deploys `CounterV1` and a factory pointing at it, both owned by `owner`.
pub async fn deploy_factory(owner: &Account) -> Result<Deployed> {
    let impl_v1 = deploy_implementation(owner, "counter-v1").await?;
    let factory = owner
        .as_deployer()
        .with_constructor(constructor!(impl_v1, owner.address()))
        .deploy()
        .await
        .wrap_err("failed to deploy counter-factory")?
        .contract_address;

    Ok(Deployed { impl_v1, factory })
}

/// Creates a counter named `name` owned by `account`, and returns the
/// proxy address taken from the `ProxyCreated` event.
pub async fn create_counter(
    factory: Address,
    account: &Account,
    name: &str,
) -> Result<Address> {
    let contract = CounterFactory::new(factory, &account.wallet);
    let receipt = receipt!(contract.create(name.to_owned()))?;

    decode_events::<CounterFactory::ProxyCreated>(&receipt)
        .first()
        .map(|event| event.proxy)
        .context("ProxyCreated should be emitted")
}

/// `owner` creates "ProxyCounter1", then `alice` creates "ProxyCounter2".
pub async fn create_counters(
    factory: Address,
    owner: &Account,
    alice: &Account,
) -> Result<(Address, Address)> {
    let counter1 = create_counter(factory, owner, "ProxyCounter1").await?;
    let counter2 = create_counter(factory, alice, "ProxyCounter2").await?;
    Ok((counter1, counter2))
}

/// Creates both counters, counts the first one up to ten, then points the
/// factory at a fresh `CounterV2`.
pub async fn update_implementation(
    owner: &Account,
    alice: &Account,
) -> Result<Updated> {
    let Deployed { factory, .. } = deploy_factory(owner).await?;
    let (counter1, counter2) = create_counters(factory, owner, alice).await?;

    let counter = crate::abi::CounterV1::new(counter1, &owner.wallet);
    for _ in 0..10 {
        watch!(counter.up())?;
    }

    let impl_v2 = deploy_implementation(owner, "counter-v2").await?;
    let contract = CounterFactory::new(factory, &owner.wallet);
    watch!(contract.update(impl_v2))?;

    assert_eq!(contract.counterCount().call().await?.count, U256::from(2));

    Ok(Updated { impl_v2, factory, counter1, counter2 })
}
