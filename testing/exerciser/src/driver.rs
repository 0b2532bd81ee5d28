//! Random task selection loop.

use std::sync::Arc;
use std::time::Duration;

use eyre::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::client::ChainClient;
use crate::error::is_revert;
use crate::ledger::BondingLedger;
use crate::stats::Stats;
use crate::tasks::TaskRegistry;

/// Configuration for the execution driver.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Pause between iterations.
    pub interval: Duration,
    /// Iteration bound; `None` runs until shutdown.
    pub max_iterations: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(1), max_iterations: None }
    }
}

/// Selects tasks uniformly at random and executes them against the client.
///
/// Contract reverts are logged and suppressed; any other task error stops
/// the loop and propagates. The driver owns the bonding ledger and the
/// selection RNG, so runs are reproducible under a fixed seed.
#[derive(Debug)]
pub struct Driver {
    registry: TaskRegistry,
    ledger: BondingLedger,
    rng: StdRng,
    config: DriverConfig,
    stats: Arc<Stats>,
}

impl Driver {
    /// Creates a driver seeded from OS entropy.
    pub fn new(registry: TaskRegistry, config: DriverConfig) -> Self {
        Self::with_rng(registry, config, StdRng::from_os_rng())
    }

    /// Creates a driver with a deterministic seed, for reproducible runs.
    pub fn with_seed(registry: TaskRegistry, config: DriverConfig, seed: u64) -> Self {
        Self::with_rng(registry, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(registry: TaskRegistry, config: DriverConfig, rng: StdRng) -> Self {
        Self { registry, ledger: BondingLedger::new(), rng, config, stats: Arc::new(Stats::new()) }
    }

    /// Returns a shared handle to the statistics collector.
    pub fn stats(&self) -> Arc<Stats> {
        Arc::clone(&self.stats)
    }

    /// The bonding ledger shared with the staking tasks.
    pub fn ledger(&self) -> &BondingLedger {
        &self.ledger
    }

    /// Runs the selection loop until the iteration bound is reached or
    /// shutdown is signaled.
    pub async fn run(&mut self, client: &ChainClient, shutdown: CancellationToken) -> Result<()> {
        ensure!(!self.registry.is_empty(), "Task registry is empty");

        info!(
            tasks = self.registry.len(),
            interval_secs = self.config.interval.as_secs_f64(),
            "Starting exerciser loop"
        );

        let mut iterations = 0u64;
        loop {
            if let Some(max) = self.config.max_iterations {
                if iterations >= max {
                    info!(iterations, "Iteration bound reached, stopping");
                    break;
                }
            }
            if shutdown.is_cancelled() {
                info!("Shutdown signal received");
                break;
            }

            let idx = self.rng.random_range(0..self.registry.len());
            let task = &self.registry.all()[idx];
            info!(task = task.name.as_str(), "Executing task");

            match (task.run)(client, &self.ledger).await {
                Ok(()) => self.stats.record_completed(),
                Err(e) if is_revert(&e) => {
                    self.stats.record_reverted();
                    warn!(task = task.name.as_str(), error = %e, "Contract execution reverted");
                }
                Err(e) => return Err(e.wrap_err(format!("Task {} failed", task.name))),
            }
            iterations += 1;

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = sleep(self.config.interval) => {}
            }
        }

        info!(
            completed = self.stats.completed(),
            reverted = self.stats.reverted(),
            "Exerciser loop stopped"
        );
        Ok(())
    }
}
