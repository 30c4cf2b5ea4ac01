//! # Wallet collaborator for the Alive On Base registrar
//!
//! The registration flow never talks to a signing backend directly; it goes
//! through the [`Wallet`] trait, which models the three capabilities the flow
//! needs from a wallet:
//!
//! 1. capability detection (is a signing identity configured at all),
//! 2. account access (may suspend awaiting approval, may be rejected),
//! 3. transaction submission and confirmation.
//!
//! [`LocalWallet`] implements the trait over an HTTP provider with a local
//! private-key signer. Other backends (hardware, browser bridge) plug in
//! behind the same trait.

#[macro_use]
extern crate tracing;

mod error;
mod local;

pub use error::WalletError;
pub use local::LocalWallet;

use alloy_primitives::{Address, ChainId, TxHash};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Information about an active wallet connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    pub address: Address,
    pub chain_id: ChainId,
}

/// A signing backend capable of producing and submitting transactions.
#[async_trait]
pub trait Wallet {
    /// Whether a signing identity is present. When this returns `false`,
    /// callers must not attempt any network call.
    fn is_available(&self) -> bool;

    /// Requests access to the active account.
    ///
    /// May suspend indefinitely on the wallet's side and may be rejected by
    /// the user.
    async fn request_account(&self) -> Result<WalletConnection, WalletError>;

    /// Signs and submits the transaction, returning its hash once it has
    /// been accepted into the pending pool.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError>;

    /// Waits until the transaction is included in a mined block.
    ///
    /// Unbounded; no timeout is imposed here. A reverted receipt is an
    /// error.
    async fn await_confirmation(&self, hash: TxHash) -> Result<(), WalletError>;
}
