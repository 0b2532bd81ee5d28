//! Offline tests for the driver loop: selection determinism, revert
//! suppression, and fatal-error propagation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::Address;
use alloy_provider::RootProvider;
use alloy_signer_local::PrivateKeySigner;
use autonity_testing_exerciser::{
    ChainClient, ClientConfig, Driver, DriverConfig, RevertError, Task, TaskRegistry,
};
use tokio_util::sync::CancellationToken;

fn offline_client() -> ChainClient {
    // Points at a dead endpoint; synthetic tasks never touch the network.
    let provider = RootProvider::new_http("http://localhost:8545".parse().unwrap());
    let signer: PrivateKeySigner =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            .parse()
            .expect("Valid test private key");
    let config = ClientConfig {
        recipient: Address::repeat_byte(0x01),
        own_validator: Address::repeat_byte(0x02),
        pool_pair: None,
        receipt_timeout: Duration::from_secs(1),
    };
    ChainClient::from_parts(provider, signer, 65_100_004, config)
}

fn recording_task(name: &str, log: Arc<Mutex<Vec<String>>>) -> Task {
    let recorded = name.to_string();
    Task {
        name: name.to_string(),
        description: None,
        run: Box::new(move |_client, _ledger| {
            let log = Arc::clone(&log);
            let recorded = recorded.clone();
            Box::pin(async move {
                log.lock().unwrap().push(recorded);
                Ok(())
            })
        }),
    }
}

fn reverting_task(name: &str) -> Task {
    Task {
        name: name.to_string(),
        description: None,
        run: Box::new(|_client, _ledger| {
            Box::pin(async {
                Err(eyre::Report::new(RevertError::Rejected {
                    message: "execution reverted: mock".to_string(),
                }))
            })
        }),
    }
}

fn failing_task(name: &str) -> Task {
    Task {
        name: name.to_string(),
        description: None,
        run: Box::new(|_client, _ledger| Box::pin(async { Err(eyre::eyre!("RPC unreachable")) })),
    }
}

fn recording_registry(log: Arc<Mutex<Vec<String>>>) -> TaskRegistry {
    let mut registry = TaskRegistry::new();
    for name in ["alpha", "beta", "gamma", "delta"] {
        registry.register(recording_task(name, Arc::clone(&log)));
    }
    registry
}

fn fast_config(max_iterations: u64) -> DriverConfig {
    DriverConfig { interval: Duration::ZERO, max_iterations: Some(max_iterations) }
}

#[tokio::test]
async fn seeded_selection_is_deterministic() {
    let client = offline_client();

    let first = Arc::new(Mutex::new(Vec::new()));
    let mut driver = Driver::with_seed(recording_registry(Arc::clone(&first)), fast_config(25), 7);
    driver.run(&client, CancellationToken::new()).await.unwrap();

    let second = Arc::new(Mutex::new(Vec::new()));
    let mut driver =
        Driver::with_seed(recording_registry(Arc::clone(&second)), fast_config(25), 7);
    driver.run(&client, CancellationToken::new()).await.unwrap();

    let first = first.lock().unwrap().clone();
    let second = second.lock().unwrap().clone();
    assert_eq!(first.len(), 25);
    assert_eq!(first, second);
}

#[tokio::test]
async fn revert_does_not_stop_the_loop() {
    let client = offline_client();

    let mut registry = TaskRegistry::new();
    registry.register(reverting_task("always_reverts"));
    let mut driver = Driver::with_seed(registry, fast_config(3), 0);
    let stats = driver.stats();

    driver.run(&client, CancellationToken::new()).await.unwrap();

    assert_eq!(stats.reverted(), 3);
    assert_eq!(stats.completed(), 0);
}

#[tokio::test]
async fn fatal_error_stops_the_loop() {
    let client = offline_client();

    let mut registry = TaskRegistry::new();
    registry.register(failing_task("boom"));
    let mut driver = Driver::with_seed(registry, fast_config(5), 0);
    let stats = driver.stats();

    let err = driver.run(&client, CancellationToken::new()).await.unwrap_err();

    assert!(err.to_string().contains("Task boom failed"));
    assert_eq!(stats.completed(), 0);
    assert_eq!(stats.reverted(), 0);
}

#[tokio::test]
async fn cancelled_token_stops_before_any_task_runs() {
    let client = offline_client();

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut driver = Driver::with_seed(recording_registry(Arc::clone(&log)), fast_config(100), 0);

    let shutdown = CancellationToken::new();
    shutdown.cancel();
    driver.run(&client, shutdown).await.unwrap();

    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn iteration_bound_limits_the_run() {
    let client = offline_client();

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut driver = Driver::with_seed(recording_registry(Arc::clone(&log)), fast_config(5), 42);
    driver.run(&client, CancellationToken::new()).await.unwrap();

    assert_eq!(log.lock().unwrap().len(), 5);
}

#[tokio::test]
async fn empty_registry_is_rejected() {
    let client = offline_client();

    let mut driver = Driver::new(TaskRegistry::new(), DriverConfig::default());
    assert!(driver.run(&client, CancellationToken::new()).await.is_err());
}
