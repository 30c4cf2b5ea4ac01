use alloy_provider::PendingTransactionError;
use alloy_transport::TransportError;

/// Errors produced by a wallet collaborator.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No signing identity is configured.
    #[error("no wallet available")]
    Unavailable,
    /// The user or the backend refused the account request.
    #[error("wallet connection rejected")]
    ConnectionRejected,
    /// The transaction was rejected, reverted or dropped.
    #[error("transaction rejected or failed: {0}")]
    Transaction(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Pending(#[from] PendingTransactionError),
}
