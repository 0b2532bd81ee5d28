//! Staking and validator governance tasks.

use alloy_primitives::U256;
use eyre::{ensure, Result};
use rand::Rng;
use tracing::debug;

use crate::client::ChainClient;
use crate::config::AUTONITY_CONTRACT_ADDRESS;
use crate::contracts::IAutonity;
use crate::ledger::BondingLedger;
use crate::tasks::{task_fn, tenth_token, Task};

/// Commission rates are expressed in basis points.
const MAX_COMMISSION_RATE: u64 = 10_000;

pub(crate) fn tasks() -> Vec<Task> {
    vec![
        Task::new("bond", "Bonds 0.1 NTN to a random validator", task_fn!(bond)),
        Task::new("unbond", "Unbonds a previously recorded stake", task_fn!(unbond)),
        Task::new(
            "change_commission_rate",
            "Sets the own validator's commission to a random rate",
            task_fn!(change_commission_rate),
        ),
        Task::new("pause_validator", "Pauses the sender's validator", task_fn!(pause_validator)),
        Task::new(
            "activate_validator",
            "Activates the sender's validator",
            task_fn!(activate_validator),
        ),
    ]
}

/// Bonds 0.1 NTN to a validator drawn uniformly at random from the current
/// validator set, recording the stake so a later unbond can reverse it.
async fn bond(client: &ChainClient, ledger: &BondingLedger) -> Result<()> {
    let validators =
        client.view(AUTONITY_CONTRACT_ADDRESS, IAutonity::getValidatorsCall {}).await?;
    ensure!(!validators.is_empty(), "Validator set is empty");
    let validator = validators[rand::rng().random_range(0..validators.len())];

    let decimals = client.view(AUTONITY_CONTRACT_ADDRESS, IAutonity::decimalsCall {}).await?;
    let amount = tenth_token(decimals);

    client.submit(AUTONITY_CONTRACT_ADDRESS, IAutonity::bondCall { validator, amount }).await?;
    ledger.record(validator, amount);
    Ok(())
}

/// Unbonds a stake recorded by an earlier bond, drawn at random from the
/// ledger. No transaction is submitted while the ledger is empty.
async fn unbond(client: &ChainClient, ledger: &BondingLedger) -> Result<()> {
    let Some((validator, amount)) = ledger.pick() else {
        debug!("No recorded stakes to unbond");
        return Ok(());
    };
    client
        .submit(AUTONITY_CONTRACT_ADDRESS, IAutonity::unbondCall { validator, amount })
        .await?;
    Ok(())
}

/// Sets the own validator's commission to a rate drawn uniformly from
/// [0, 10000] basis points.
async fn change_commission_rate(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    let rate = U256::from(rand::rng().random_range(0..=MAX_COMMISSION_RATE));
    client
        .submit(
            AUTONITY_CONTRACT_ADDRESS,
            IAutonity::changeCommissionRateCall { validator: client.own_validator(), rate },
        )
        .await?;
    Ok(())
}

/// Pauses the sender's validator.
async fn pause_validator(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    client
        .submit(
            AUTONITY_CONTRACT_ADDRESS,
            IAutonity::pauseValidatorCall { validator: client.own_validator() },
        )
        .await?;
    Ok(())
}

/// Activates the sender's validator.
async fn activate_validator(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    client
        .submit(
            AUTONITY_CONTRACT_ADDRESS,
            IAutonity::activateValidatorCall { validator: client.own_validator() },
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use alloy_primitives::Address;
    use alloy_provider::RootProvider;
    use alloy_signer_local::PrivateKeySigner;

    use super::*;
    use crate::config::ClientConfig;

    fn offline_client() -> ChainClient {
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

    #[tokio::test]
    async fn unbond_with_empty_ledger_submits_nothing() {
        // The client points at a dead endpoint, so any RPC attempt would
        // error; an empty ledger must return before reaching the network.
        let client = offline_client();
        let ledger = BondingLedger::new();

        unbond(&client, &ledger).await.unwrap();
        assert!(ledger.is_empty());
    }
}
