use thiserror::Error;

/// User-visible failure categories of the registration flow.
///
/// Every collaborator failure is folded into one of these; none propagate
/// past the controller and none are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// No wallet capability is present in the environment.
    #[error("install MetaMask or a Base wallet")]
    NoWallet,
    /// The account request was rejected or failed.
    #[error("wallet connection failed")]
    ConnectionFailed,
    /// Mint was invoked without a registrable handle.
    #[error("enter a name first")]
    EmptyHandle,
    /// The transaction was rejected, reverted or never confirmed.
    #[error("transaction failed or cancelled")]
    TransactionFailed,
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The registry contract address is a required deploy-time input.
    #[error("registry contract address is not configured")]
    UnsetContract,
}
