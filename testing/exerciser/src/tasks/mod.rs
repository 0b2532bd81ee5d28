//! Task definitions and the task registry.

mod amm;
mod staking;
mod token;

use std::{future::Future, pin::Pin};

use alloy_primitives::U256;
use eyre::Result;

use crate::{BondingLedger, ChainClient};

/// A task function bound at invocation time to the shared client and the
/// bonding ledger.
pub type TaskFn = Box<
    dyn for<'a> Fn(
            &'a ChainClient,
            &'a BondingLedger,
        ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
        + Send
        + Sync,
>;

/// A single registered task.
pub struct Task {
    /// Task name (logged on every selection).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The operation to run.
    pub run: TaskFn,
}

impl Task {
    pub(crate) fn new(name: &str, description: &str, run: TaskFn) -> Self {
        Self { name: name.to_string(), description: Some(description.to_string()), run }
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered, append-only collection of tasks.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task; registration order is preserved.
    pub fn register(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// The full ordered sequence of registered tasks.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no tasks are registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Helper macro for boxing task functions.
macro_rules! task_fn {
    ($f:expr) => {
        Box::new(|client: &crate::ChainClient, ledger: &crate::BondingLedger| {
            Box::pin($f(client, ledger))
        })
    };
}
pub(crate) use task_fn;

/// Builds the full task registry by explicit construction, in a fixed
/// registration order.
pub fn build_registry() -> TaskRegistry {
    let mut registry = TaskRegistry::new();
    for task in token::tasks() {
        registry.register(task);
    }
    for task in staking::tasks() {
        registry.register(task);
    }
    for task in amm::tasks() {
        registry.register(task);
    }
    registry
}

/// 0.1 token in base units for the given decimals.
pub(crate) fn tenth_token(decimals: u8) -> U256 {
    U256::from(10).pow(U256::from(decimals)) / U256::from(10)
}

/// 1 token in base units for the given decimals.
pub(crate) fn one_token(decimals: u8) -> U256 {
    U256::from(10).pow(U256::from(decimals))
}
