#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec::Vec};

use beacon_counter_stylus::counter::{self, Counter};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    prelude::*,
};

#[entrypoint]
#[storage]
struct CounterV1 {
    counter: Counter,
}

#[public]
impl CounterV1 {
    /// Locks the implementation's own storage, only proxies get initialized.
    #[constructor]
    fn constructor(&mut self) {
        self.counter.disable_initializers();
    }

    fn initialize(
        &mut self,
        name: String,
        owner: Address,
    ) -> Result<(), counter::Error> {
        self.counter.initialize(name, owner)
    }

    fn owner(&self) -> Address {
        self.counter.owner()
    }

    fn name(&self) -> String {
        self.counter.name()
    }

    fn value(&self) -> U256 {
        self.counter.value()
    }

    fn up(&mut self) -> Result<(), counter::Error> {
        self.counter.up()
    }

    fn down(&mut self) -> Result<(), counter::Error> {
        self.counter.down()
    }
}
