/// Minimal query interface against the Solana cluster.
///
/// The swap builder only needs four operations: a shallow account lookup,
/// the on-chain clock, a recent blockhash and a raw broadcast. They are kept
/// behind a trait so the assembler tests run against an in-memory mock.
/// Network failures are propagated unchanged and never retried here.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_sdk::{
    clock::Clock, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, sysvar,
    transaction::Transaction,
};

use crate::config::MAINNET_RPC_URL;
use crate::errors::SwapError;
use crate::logger::{log, LogTag};

/// Shallow view of an on-chain account: enough to decide existence,
/// emptiness and ownership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub owner: Pubkey,
    pub data_len: usize,
}

/// Query interface consumed by the swap assembler
#[async_trait]
pub trait SwapRpc: Send + Sync {
    /// Owner and data length of an account, or None when it does not exist
    async fn account_summary(&self, address: &Pubkey)
        -> Result<Option<AccountSummary>, SwapError>;

    /// Current on-chain time in unix seconds (clock sysvar)
    async fn current_time(&self) -> Result<u64, SwapError>;

    /// A fresh recent blockhash for sealing a transaction
    async fn latest_blockhash(&self) -> Result<Hash, SwapError>;

    /// Broadcast a signed transaction, returning its signature string
    async fn send_transaction(
        &self,
        transaction: &Transaction,
        skip_preflight: bool,
    ) -> Result<String, SwapError>;
}

/// Live implementation over the nonblocking Solana RPC client
pub struct SolanaRpc {
    client: RpcClient,
}

impl SolanaRpc {
    pub fn new(url: &str) -> Self {
        Self {
            client: RpcClient::new(url.to_string()),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(MAINNET_RPC_URL)
    }
}

#[async_trait]
impl SwapRpc for SolanaRpc {
    async fn account_summary(
        &self,
        address: &Pubkey,
    ) -> Result<Option<AccountSummary>, SwapError> {
        // Finalized commitment: account creation decisions must not flip on
        // a rollback after the transaction is built
        let response = self
            .client
            .get_account_with_commitment(address, CommitmentConfig::finalized())
            .await?;
        Ok(response.value.map(|account| AccountSummary {
            owner: account.owner,
            data_len: account.data.len(),
        }))
    }

    async fn current_time(&self) -> Result<u64, SwapError> {
        let data = self.client.get_account_data(&sysvar::clock::id()).await?;
        let clock: Clock = bincode::deserialize(&data).map_err(|e| {
            SwapError::InvalidResponse(format!("malformed clock sysvar account: {}", e))
        })?;
        u64::try_from(clock.unix_timestamp).map_err(|_| {
            SwapError::InvalidResponse(format!(
                "clock sysvar returned negative time: {}",
                clock.unix_timestamp
            ))
        })
    }

    async fn latest_blockhash(&self) -> Result<Hash, SwapError> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn send_transaction(
        &self,
        transaction: &Transaction,
        skip_preflight: bool,
    ) -> Result<String, SwapError> {
        let config = RpcSendTransactionConfig {
            skip_preflight,
            ..RpcSendTransactionConfig::default()
        };
        let signature = self
            .client
            .send_transaction_with_config(transaction, config)
            .await?;
        log(
            LogTag::Rpc,
            "BROADCAST",
            &format!("transaction sent: {}", signature),
        );
        Ok(signature.to_string())
    }
}
