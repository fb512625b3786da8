#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec::Vec};

use beacon_counter_stylus::{
    access::ownable::{self, IOwnable},
    factory::{self, CounterFactory as Factory},
    proxy::beacon::IBeacon,
};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    prelude::*,
};

#[entrypoint]
#[storage]
struct CounterFactory {
    factory: Factory,
}

#[public]
#[implements(IOwnable<Error = ownable::Error>, IBeacon<Error = factory::Error>)]
impl CounterFactory {
    #[constructor]
    fn constructor(
        &mut self,
        implementation: Address,
        initial_owner: Address,
    ) -> Result<(), factory::Error> {
        self.factory.constructor(implementation, initial_owner)
    }

    fn update(
        &mut self,
        new_implementation: Address,
    ) -> Result<(), factory::Error> {
        self.factory.update(new_implementation)
    }

    fn create(&mut self, name: String) -> Result<Address, factory::Error> {
        self.factory.create(name)
    }

    fn get_counter(&self, index: U256) -> Result<Address, factory::Error> {
        self.factory.get_counter(index)
    }

    fn counter_count(&self) -> U256 {
        self.factory.counter_count()
    }
}

#[public]
impl IOwnable for CounterFactory {
    type Error = ownable::Error;

    fn owner(&self) -> Address {
        self.factory.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        self.factory.ownable.transfer_ownership(new_owner)
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        self.factory.ownable.renounce_ownership()
    }
}

#[public]
impl IBeacon for CounterFactory {
    type Error = factory::Error;

    fn implementation(&self) -> Result<Address, Self::Error> {
        self.factory.implementation()
    }
}
