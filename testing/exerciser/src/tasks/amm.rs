//! UniswapV2 swap and liquidity tasks.
//!
//! Every router call is preceded by the required allowance, submitted and
//! confirmed as its own transaction before the main action goes out.

use alloy_primitives::U256;
use eyre::Result;
use tracing::debug;

use crate::client::ChainClient;
use crate::config::{AUTONITY_CONTRACT_ADDRESS, UNISWAP_ROUTER_ADDRESS, USDC_ADDRESS};
use crate::contracts::{IAutonity, IERC20, IUniswapV2Router02};
use crate::ledger::BondingLedger;
use crate::tasks::{one_token, task_fn, tenth_token, Task};

pub(crate) fn tasks() -> Vec<Task> {
    vec![
        Task::new(
            "swap_exact_tokens_for_tokens",
            "Swaps 0.1 USDC for NTN through the router",
            task_fn!(swap_exact_tokens_for_tokens),
        ),
        Task::new(
            "add_liquidity",
            "Adds 1 NTN and 0.1 USDC to the liquidity pool",
            task_fn!(add_liquidity),
        ),
        Task::new(
            "remove_liquidity",
            "Withdraws the entire NTN/USDC liquidity position",
            task_fn!(remove_liquidity),
        ),
    ]
}

/// Swaps 0.1 USDC for NTN with no minimum output.
async fn swap_exact_tokens_for_tokens(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    let usdc_decimals = client.view(USDC_ADDRESS, IERC20::decimalsCall {}).await?;
    let amount_in = tenth_token(usdc_decimals);
    client
        .submit(
            USDC_ADDRESS,
            IERC20::approveCall { spender: UNISWAP_ROUTER_ADDRESS, amount: amount_in },
        )
        .await?;

    let deadline = client.router_deadline().await?;
    client
        .submit(
            UNISWAP_ROUTER_ADDRESS,
            IUniswapV2Router02::swapExactTokensForTokensCall {
                amountIn: amount_in,
                amountOutMin: U256::ZERO,
                path: vec![USDC_ADDRESS, AUTONITY_CONTRACT_ADDRESS],
                to: client.sender(),
                deadline,
            },
        )
        .await?;
    Ok(())
}

/// Deposits 1 NTN and 0.1 USDC into the pool.
async fn add_liquidity(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    let ntn_decimals = client.view(AUTONITY_CONTRACT_ADDRESS, IAutonity::decimalsCall {}).await?;
    let ntn_amount = one_token(ntn_decimals);
    client
        .submit(
            AUTONITY_CONTRACT_ADDRESS,
            IAutonity::approveCall { spender: UNISWAP_ROUTER_ADDRESS, amount: ntn_amount },
        )
        .await?;

    let usdc_decimals = client.view(USDC_ADDRESS, IERC20::decimalsCall {}).await?;
    let usdc_amount = tenth_token(usdc_decimals);
    client
        .submit(
            USDC_ADDRESS,
            IERC20::approveCall { spender: UNISWAP_ROUTER_ADDRESS, amount: usdc_amount },
        )
        .await?;

    let deadline = client.router_deadline().await?;
    client
        .submit(
            UNISWAP_ROUTER_ADDRESS,
            IUniswapV2Router02::addLiquidityCall {
                tokenA: AUTONITY_CONTRACT_ADDRESS,
                tokenB: USDC_ADDRESS,
                amountADesired: ntn_amount,
                amountBDesired: usdc_amount,
                amountAMin: U256::ZERO,
                amountBMin: U256::ZERO,
                to: client.sender(),
                deadline,
            },
        )
        .await?;
    Ok(())
}

/// Withdraws the sender's entire pool-share balance. No transaction is
/// submitted while the pair address is unconfigured or the balance is zero.
async fn remove_liquidity(client: &ChainClient, _ledger: &BondingLedger) -> Result<()> {
    let Some(pair) = client.pool_pair() else {
        debug!("Pool pair address not configured, skipping");
        return Ok(());
    };

    let liquidity = client.view(pair, IERC20::balanceOfCall { owner: client.sender() }).await?;
    if liquidity.is_zero() {
        debug!("No pool shares held, skipping");
        return Ok(());
    }

    client
        .submit(pair, IERC20::approveCall { spender: UNISWAP_ROUTER_ADDRESS, amount: liquidity })
        .await?;

    let deadline = client.router_deadline().await?;
    client
        .submit(
            UNISWAP_ROUTER_ADDRESS,
            IUniswapV2Router02::removeLiquidityCall {
                tokenA: AUTONITY_CONTRACT_ADDRESS,
                tokenB: USDC_ADDRESS,
                liquidity,
                amountAMin: U256::ZERO,
                amountBMin: U256::ZERO,
                to: client.sender(),
                deadline,
            },
        )
        .await?;
    Ok(())
}
