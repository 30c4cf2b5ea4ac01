use alloy_network::{AnyNetwork, EthereumWallet, ReceiptResponse};
use alloy_primitives::{Address, TxHash};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_serde::WithOtherFields;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use url::Url;

use crate::{Wallet, WalletConnection, WalletError};

/// Wallet backed by a local private-key signer and an HTTP provider.
///
/// Constructing one without a key yields an "unavailable" wallet that fails
/// capability detection instead of erroring at every call site, mirroring a
/// missing injected provider in the browser setup.
#[derive(Clone, Debug)]
pub struct LocalWallet {
    inner: Option<Backend>,
}

#[derive(Clone, Debug)]
struct Backend {
    provider: DynProvider<AnyNetwork>,
    address: Address,
}

impl LocalWallet {
    pub fn new(rpc_url: Url, signer: Option<PrivateKeySigner>) -> Self {
        let inner = signer.map(|signer| {
            let address = signer.address();
            let provider = ProviderBuilder::<_, _, AnyNetwork>::default()
                .wallet(EthereumWallet::from(signer))
                .connect_http(rpc_url)
                .erased();
            Backend { provider, address }
        });
        Self { inner }
    }

    fn backend(&self) -> Result<&Backend, WalletError> {
        self.inner.as_ref().ok_or(WalletError::Unavailable)
    }
}

#[async_trait]
impl Wallet for LocalWallet {
    fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    async fn request_account(&self) -> Result<WalletConnection, WalletError> {
        let backend = self.backend()?;
        let chain_id = backend.provider.get_chain_id().await?;
        debug!(address = %backend.address, chain_id, "wallet connected");
        Ok(WalletConnection { address: backend.address, chain_id })
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let backend = self.backend()?;
        let pending = backend.provider.send_transaction(WithOtherFields::new(tx)).await?;
        let hash = *pending.tx_hash();
        debug!(%hash, "transaction accepted into the pending pool");
        Ok(hash)
    }

    async fn await_confirmation(&self, hash: TxHash) -> Result<(), WalletError> {
        let backend = self.backend()?;
        let receipt = PendingTransactionBuilder::new(backend.provider.root().clone(), hash)
            .get_receipt()
            .await?;
        if !receipt.status() {
            return Err(WalletError::Transaction(format!("transaction {hash:#x} reverted")));
        }
        debug!(%hash, "transaction confirmed");
        Ok(())
    }
}
