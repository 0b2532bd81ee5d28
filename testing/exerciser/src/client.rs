//! Shared handle to an Autonity RPC endpoint.

use std::time::Duration;

use alloy_consensus::{SignableTransaction, TxEip1559, TxEnvelope};
use alloy_eips::{eip2718::Encodable2718, BlockNumberOrTag};
use alloy_network::TxSignerSync;
use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolCall;
use eyre::{Result, WrapErr};
use tokio::time::{sleep, timeout};

use crate::config::ClientConfig;
use crate::error::{classify_rpc_error, RevertError};

/// Seconds added to the latest block timestamp for router deadlines.
const ROUTER_DEADLINE_SECS: u64 = 10;

/// Interval between receipt polls.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Long-lived client carrying the provider, the default signing identity,
/// and the exerciser addresses.
///
/// Constructed once at startup and read-only afterwards; every task submits
/// its transactions through this handle.
#[derive(Debug)]
pub struct ChainClient {
    provider: RootProvider,
    signer: PrivateKeySigner,
    chain_id: u64,
    config: ClientConfig,
}

impl ChainClient {
    /// Connects to an HTTP RPC endpoint and fetches its chain id.
    pub async fn connect(
        rpc_url: &str,
        signer: PrivateKeySigner,
        config: ClientConfig,
    ) -> Result<Self> {
        let url: url::Url = rpc_url.parse().wrap_err("Invalid RPC URL")?;
        let provider = RootProvider::new_http(url);
        let chain_id = provider.get_chain_id().await.wrap_err("Failed to fetch chain id")?;
        Ok(Self { provider, signer, chain_id, config })
    }

    /// Builds a client from existing parts without touching the network.
    pub fn from_parts(
        provider: RootProvider,
        signer: PrivateKeySigner,
        chain_id: u64,
        config: ClientConfig,
    ) -> Self {
        Self { provider, signer, chain_id, config }
    }

    /// The default sending address derived from the private key.
    pub fn sender(&self) -> Address {
        self.signer.address()
    }

    /// Recipient of the transfer and approve tasks.
    pub fn recipient(&self) -> Address {
        self.config.recipient
    }

    /// The sender's own validator address.
    pub fn own_validator(&self) -> Address {
        self.config.own_validator
    }

    /// NTN/USDC pool-share token address, if configured.
    pub fn pool_pair(&self) -> Option<Address> {
        self.config.pool_pair
    }

    /// Chain id reported by the endpoint at connect time.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Executes a read-only contract call and decodes its return value.
    pub async fn view<C: SolCall>(&self, contract: Address, call: C) -> Result<C::Return> {
        let tx = TransactionRequest {
            to: Some(contract.into()),
            input: Bytes::from(call.abi_encode()).into(),
            ..Default::default()
        };
        let data = self.provider.call(tx).await.map_err(classify_rpc_error)?;
        C::abi_decode_returns(&data).wrap_err("Failed to decode call return data")
    }

    /// Signs, submits, and confirms a contract call, returning the receipt.
    ///
    /// Gas is estimated up front, so a node-side revert surfaces before
    /// anything is sent; a confirmed-but-failed receipt surfaces afterwards.
    /// Both are reported as [`RevertError`].
    pub async fn submit<C: SolCall>(
        &self,
        contract: Address,
        call: C,
    ) -> Result<TransactionReceipt> {
        let calldata = Bytes::from(call.abi_encode());

        let nonce = self
            .provider
            .get_transaction_count(self.sender())
            .block_id(BlockNumberOrTag::Latest.into())
            .await
            .wrap_err("Failed to get nonce")?;
        let gas_price =
            self.provider.get_gas_price().await.wrap_err("Failed to get gas price")?;

        let request = TransactionRequest {
            from: Some(self.sender()),
            to: Some(contract.into()),
            input: calldata.clone().into(),
            ..Default::default()
        };
        let gas_limit =
            self.provider.estimate_gas(request).await.map_err(classify_rpc_error)?;

        let mut tx = TxEip1559 {
            chain_id: self.chain_id,
            nonce,
            gas_limit,
            max_fee_per_gas: gas_price * 2,
            max_priority_fee_per_gas: 1_000_000,
            to: contract.into(),
            value: U256::ZERO,
            access_list: Default::default(),
            input: calldata.into(),
        };
        let signature = self.signer.sign_transaction_sync(&mut tx)?;
        let envelope = TxEnvelope::Eip1559(tx.into_signed(signature));

        let mut raw_tx = Vec::new();
        envelope.encode_2718(&mut raw_tx);
        let tx_hash = keccak256(&raw_tx);

        let _ = self
            .provider
            .send_raw_transaction(&raw_tx)
            .await
            .map_err(classify_rpc_error)?;
        tracing::debug!(%tx_hash, nonce, "Transaction submitted");

        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.status() {
            return Err(RevertError::confirmed(tx_hash).into());
        }

        tracing::debug!(
            %tx_hash,
            block_number = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "Transaction confirmed"
        );
        Ok(receipt)
    }

    /// Returns "latest block timestamp + 10s", the router deadline policy,
    /// read fresh from the chain at call time.
    pub async fn router_deadline(&self) -> Result<U256> {
        let latest = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await
            .wrap_err("Failed to fetch latest block")?
            .ok_or_else(|| eyre::eyre!("No latest block"))?;
        Ok(U256::from(latest.header.timestamp + ROUTER_DEADLINE_SECS))
    }

    /// Polls for a transaction receipt until the configured timeout.
    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<TransactionReceipt> {
        timeout(self.config.receipt_timeout, async {
            loop {
                if let Some(receipt) = self.provider.get_transaction_receipt(tx_hash).await? {
                    return Ok::<_, eyre::Error>(receipt);
                }
                sleep(RECEIPT_POLL_INTERVAL).await;
            }
        })
        .await
        .wrap_err("Receipt wait timed out")?
        .wrap_err("Failed to get transaction receipt")
    }
}
