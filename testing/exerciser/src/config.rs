//! Exerciser configuration and Autonity network constants.

use std::time::Duration;

use alloy_primitives::{address, Address};

/// Default HTTP RPC endpoint: the public Piccadilly testnet provider.
pub const DEFAULT_RPC_URL: &str = "https://rpc1.piccadilly.autonity.org";

/// The Autonity protocol contract. It is itself the NTN ERC-20 token.
pub const AUTONITY_CONTRACT_ADDRESS: Address =
    address!("bd770416a3345f91e4b34576cb804a576fa48eb1");

/// USDC token contract on Piccadilly.
pub const USDC_ADDRESS: Address = address!("3a60c03a86eeae30501ce1af04a6c04cf0188700");

/// Wrapped ATN token contract on Piccadilly.
pub const WATN_ADDRESS: Address = address!("ce17e51ce4f0417a1ab31a3c5d6831ff3bbfa1d2");

/// UniswapV2 router deployed on Piccadilly.
pub const UNISWAP_ROUTER_ADDRESS: Address =
    address!("374b9eaca19203ace83ef549c16890f545a1237b");

/// Addresses and limits the client carries into every task invocation.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Recipient of the transfer and approve tasks.
    pub recipient: Address,
    /// The sender's own validator, targeted by the governance tasks.
    pub own_validator: Address,
    /// NTN/USDC pool-share token. The reference deployment leaves this
    /// unresolved; the remove_liquidity task is skipped while it is unset.
    pub pool_pair: Option<Address>,
    /// Upper bound on waiting for a transaction receipt.
    pub receipt_timeout: Duration,
}

impl ClientConfig {
    /// Default receipt timeout in seconds.
    pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 60;

    /// Creates a config with the default receipt timeout.
    pub fn new(recipient: Address, own_validator: Address, pool_pair: Option<Address>) -> Self {
        Self {
            recipient,
            own_validator,
            pool_pair,
            receipt_timeout: Duration::from_secs(Self::DEFAULT_RECEIPT_TIMEOUT_SECS),
        }
    }
}
