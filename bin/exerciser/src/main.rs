#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

//! Exerciser - randomized transaction traffic against Autonity contracts.

mod cli;

use std::time::Duration;

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use autonity_testing_exerciser::{build_registry, ChainClient, ClientConfig, Driver, DriverConfig};
use clap::Parser;
use cli::Args;
use eyre::{Result, WrapErr};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignores errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    cli::init_tracing(args.verbose);

    let registry = build_registry();

    if args.list {
        for task in registry.all() {
            match &task.description {
                Some(description) => println!("{} - {}", task.name, description),
                None => println!("{}", task.name),
            }
        }
        return Ok(());
    }

    let private_key = std::env::var("SENDER_PRIVATE_KEY")
        .wrap_err("SENDER_PRIVATE_KEY environment variable must be set")?;
    let signer: PrivateKeySigner =
        private_key.parse().wrap_err("Invalid SENDER_PRIVATE_KEY")?;

    let own_validator: Address =
        args.own_validator.parse().wrap_err("Invalid own validator address")?;
    let recipient: Address = args.recipient.parse().wrap_err("Invalid recipient address")?;
    let pool_pair: Option<Address> = args
        .pool_pair
        .as_ref()
        .map(|s| s.parse())
        .transpose()
        .wrap_err("Invalid pool pair address")?;

    if pool_pair.is_none() {
        tracing::warn!("No POOL_PAIR_ADDRESS set - the remove_liquidity task will be skipped");
    }

    let config = ClientConfig {
        recipient,
        own_validator,
        pool_pair,
        receipt_timeout: Duration::from_secs(args.receipt_timeout_secs),
    };
    let client = ChainClient::connect(&args.rpc_url, signer, config).await?;
    tracing::info!(
        sender = ?client.sender(),
        chain_id = client.chain_id(),
        rpc_url = args.rpc_url.as_str(),
        "Connected"
    );

    let driver_config = DriverConfig {
        interval: Duration::from_secs(args.interval_secs),
        max_iterations: args.iterations,
    };
    let mut driver = match args.seed {
        Some(seed) => Driver::with_seed(registry, driver_config, seed),
        None => Driver::new(registry, driver_config),
    };

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        signal_token.cancel();
    });

    driver.run(&client, shutdown).await
}
