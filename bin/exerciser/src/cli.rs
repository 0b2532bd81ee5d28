//! CLI argument parsing and tracing setup.

use autonity_testing_exerciser::config::DEFAULT_RPC_URL;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Randomized exerciser for the Autonity protocol and AMM contracts.
#[derive(Parser, Debug)]
#[command(name = "exerciser")]
#[command(about = "Randomized transaction traffic against Autonity contracts")]
pub(crate) struct Args {
    /// HTTP RPC endpoint of the Autonity network.
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Address of the sender's own validator, targeted by the governance
    /// tasks.
    #[arg(long, env = "OWN_VALIDATOR_ADDRESS")]
    pub own_validator: String,

    /// Recipient address for the transfer and approve tasks.
    #[arg(long, env = "RECIPIENT_ADDRESS")]
    pub recipient: String,

    /// NTN/USDC pool-share token address. The remove_liquidity task is
    /// skipped while unset.
    #[arg(long, env = "POOL_PAIR_ADDRESS")]
    pub pool_pair: Option<String>,

    /// Pause between task iterations, in seconds.
    #[arg(long, default_value = "1")]
    pub interval_secs: u64,

    /// Upper bound on waiting for a transaction receipt, in seconds.
    #[arg(long, default_value = "60")]
    pub receipt_timeout_secs: u64,

    /// Stop after this many iterations instead of running until killed.
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Seed for the task-selection RNG, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// List the registered tasks without executing them.
    #[arg(long)]
    pub list: bool,

    /// Verbose output (can be repeated for more verbosity).
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Initialize tracing with the specified verbosity level.
pub(crate) fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "exerciser=info,autonity_testing_exerciser=info",
        1 => "exerciser=debug,autonity_testing_exerciser=debug",
        _ => "exerciser=trace,autonity_testing_exerciser=trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
