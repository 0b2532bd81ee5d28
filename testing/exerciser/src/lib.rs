#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

//! Randomized exerciser for the Autonity protocol and AMM contracts.

mod client;
pub use client::ChainClient;

pub mod config;
pub use config::ClientConfig;

pub mod contracts;

mod driver;
pub use driver::{Driver, DriverConfig};

mod error;
pub use error::{is_revert, RevertError};

mod ledger;
pub use ledger::BondingLedger;

mod stats;
pub use stats::Stats;

pub mod tasks;
pub use tasks::{build_registry, Task, TaskFn, TaskRegistry};
