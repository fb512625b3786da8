/*!
# Beacon Counter for Stylus

Building blocks for an upgradeable counter system written in Rust for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction).

A [`CounterFactory`] acts as the beacon of many lightweight proxies. Every
proxy delegates to the single implementation address the factory points to,
so calling [`CounterFactory::update`] upgrades all of them at once, while each
proxy keeps its own [`Counter`] storage.

## Usage

Compose the storage components in a contract crate and expose the methods
you need:

```ignore
use beacon_counter_stylus::counter::{self, Counter};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct CounterV1 {
    counter: Counter,
}

#[public]
impl CounterV1 {
    #[constructor]
    fn constructor(&mut self) {
        self.counter.disable_initializers();
    }

    fn up(&mut self) -> Result<(), counter::Error> {
        self.counter.up()
    }
}
```

[`CounterFactory`]: crate::factory::CounterFactory
[`CounterFactory::update`]: crate::factory::CounterFactory::update
[`Counter`]: crate::counter::Counter
*/

#![allow(clippy::module_name_repetitions)]
#![cfg_attr(not(any(test, feature = "std")), no_std, no_main)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod access;
pub mod counter;
pub mod factory;
pub mod proxy;
pub mod utils;
