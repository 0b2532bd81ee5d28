//! NTN token tasks.

use eyre::Result;

use crate::client::ChainClient;
use crate::config::AUTONITY_CONTRACT_ADDRESS;
use crate::contracts::IAutonity;
use crate::ledger::BondingLedger;
use crate::tasks::{task_fn, tenth_token, Task};

pub(crate) fn tasks() -> Vec<Task> {
    vec![
        Task::new(
            "transfer",
            "Transfers 0.1 NTN to the configured recipient",
            task_fn!(transfer),
        ),
        Task::new(
            "approve",
            "Approves the configured recipient to spend 0.1 NTN",
            task_fn!(approve),
        ),
    ]
}

/// Transfers 0.1 NTN to the recipient configured at startup.
async fn transfer(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    let decimals = client.view(AUTONITY_CONTRACT_ADDRESS, IAutonity::decimalsCall {}).await?;
    let amount = tenth_token(decimals);
    client
        .submit(
            AUTONITY_CONTRACT_ADDRESS,
            IAutonity::transferCall { recipient: client.recipient(), amount },
        )
        .await?;
    Ok(())
}

/// Grants the recipient a 0.1 NTN spending allowance.
async fn approve(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    let decimals = client.view(AUTONITY_CONTRACT_ADDRESS, IAutonity::decimalsCall {}).await?;
    let amount = tenth_token(decimals);
    client
        .submit(
            AUTONITY_CONTRACT_ADDRESS,
            IAutonity::approveCall { spender: client.recipient(), amount },
        )
        .await?;
    Ok(())
}
