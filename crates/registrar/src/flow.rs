//! Registration flow controller.
//!
//! One controller instance owns the whole user-visible state record
//! (account, raw input, preview, attempt status). The connect and mint
//! sub-flows write to it through `&mut self` and share a single status
//! channel; there is no other writer.

use alive_wallet::{Wallet, WalletError};
use alloy_primitives::{Address, TxHash, TxKind, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;
use url::Url;

use crate::{
    config::RegistrarConfig,
    contract::registerCall,
    error::FlowError,
    handle::{Handle, PLACEHOLDER},
};

/// Lifecycle of the current registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttemptStatus {
    #[default]
    Idle,
    /// Waiting for the wallet to approve and sign the transaction.
    AwaitingWalletConfirmation,
    /// Accepted into the pending pool, waiting for inclusion in a block.
    Submitted,
    Succeeded,
    Failed(FlowError),
}

impl AttemptStatus {
    /// True while a mint attempt is in flight; gates a second submission.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::AwaitingWalletConfirmation | Self::Submitted)
    }
}

/// One user-initiated mint action. Superseded at the start of the next one.
#[derive(Debug, Clone)]
pub struct RegistrationAttempt {
    pub handle: Handle,
    pub fee_wei: U256,
    pub tx_hash: Option<TxHash>,
}

/// Shareable referral URL parameterized by the registering account.
pub fn referral_link(base: &Url, account: Address) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("ref", &account.to_string());
    url
}

/// Drives wallet connection and handle registration against the external
/// registry contract.
pub struct Registrar<W> {
    wallet: W,
    config: RegistrarConfig,
    name: String,
    account: Option<Address>,
    preview: Option<Handle>,
    status: AttemptStatus,
    attempt: Option<RegistrationAttempt>,
    referral: Option<Url>,
}

impl<W: Wallet> Registrar<W> {
    pub fn new(config: RegistrarConfig, wallet: W) -> Self {
        Self {
            wallet,
            config,
            name: String::new(),
            account: None,
            preview: None,
            status: AttemptStatus::Idle,
            attempt: None,
            referral: None,
        }
    }

    pub fn status(&self) -> &AttemptStatus {
        &self.status
    }

    /// The connected account. Never cleared once set.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn attempt(&self) -> Option<&RegistrationAttempt> {
        self.attempt.as_ref()
    }

    pub fn referral_link(&self) -> Option<&Url> {
        self.referral.as_ref()
    }

    /// Replaces the raw name input. Sanitization happens on [`preview`] and
    /// again at submit time; the live input is authoritative.
    ///
    /// [`preview`]: Self::preview
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.to_owned();
    }

    /// Sanitizes the current input and stores it as the displayed preview.
    /// Returns the qualified name, or `None` when nothing survives
    /// sanitization.
    pub fn preview(&mut self) -> Option<String> {
        let handle = Handle::sanitize(&self.name);
        let qualified = handle.qualified();
        self.preview = (!handle.is_empty()).then_some(handle);
        qualified
    }

    /// The currently displayed preview text, falling back to the
    /// placeholder example.
    pub fn preview_text(&self) -> String {
        self.preview
            .as_ref()
            .and_then(Handle::qualified)
            .unwrap_or_else(|| PLACEHOLDER.to_owned())
    }

    /// Connect sub-flow: request account access from the wallet.
    ///
    /// Stores the account on success. On rejection or any collaborator
    /// error no partial state is retained.
    pub async fn connect(&mut self) -> &AttemptStatus {
        if !self.wallet.is_available() {
            self.status = AttemptStatus::Failed(FlowError::NoWallet);
            return &self.status;
        }
        match self.wallet.request_account().await {
            Ok(connection) => {
                debug!(address = %connection.address, "wallet connected");
                self.account = Some(connection.address);
            }
            Err(err) => {
                debug!(%err, "wallet connection failed");
                self.status = AttemptStatus::Failed(FlowError::ConnectionFailed);
            }
        }
        &self.status
    }

    /// Mint sub-flow: sanitize the live input, submit `register(handle)`
    /// with the fixed fee attached, and wait for confirmation.
    ///
    /// A no-op while a previous attempt is still in flight. Always lands in
    /// a stable state (`Succeeded` or `Failed`); collaborator errors are
    /// folded into the status and never propagate.
    pub async fn mint(&mut self) -> &AttemptStatus {
        if self.status.is_busy() {
            trace!("mint ignored, attempt already in flight");
            return &self.status;
        }

        let handle = Handle::sanitize(&self.name);
        if handle.is_empty() {
            self.status = AttemptStatus::Failed(FlowError::EmptyHandle);
            return &self.status;
        }

        self.status = AttemptStatus::AwaitingWalletConfirmation;
        self.attempt = Some(RegistrationAttempt {
            handle: handle.clone(),
            fee_wei: self.config.fee_wei,
            tx_hash: None,
        });

        let connection = match self.wallet.request_account().await {
            Ok(connection) => connection,
            Err(err) => return self.fail(err),
        };
        // Mint without a prior connect adopts the signing identity, so the
        // referral link is always parameterized by the submitting account.
        if self.account.is_none() {
            self.account = Some(connection.address);
        }

        let calldata = registerCall { name: handle.as_str().to_owned() }.abi_encode();
        let tx = TransactionRequest {
            to: Some(TxKind::Call(self.config.contract)),
            value: Some(self.config.fee_wei),
            input: TransactionInput::new(calldata.into()),
            ..Default::default()
        };

        let hash = match self.wallet.send_transaction(tx).await {
            Ok(hash) => hash,
            Err(err) => return self.fail(err),
        };
        debug!(%hash, %handle, "registration submitted");
        if let Some(attempt) = self.attempt.as_mut() {
            attempt.tx_hash = Some(hash);
        }
        self.status = AttemptStatus::Submitted;

        match self.wallet.await_confirmation(hash).await {
            Ok(()) => {
                debug!(%handle, "registration confirmed");
                if self.config.referral
                    && let Some(account) = self.account
                {
                    self.referral = Some(referral_link(&self.config.referral_base, account));
                }
                self.preview = Some(handle);
                self.status = AttemptStatus::Succeeded;
            }
            Err(err) => return self.fail(err),
        }
        &self.status
    }

    fn fail(&mut self, err: WalletError) -> &AttemptStatus {
        debug!(%err, "registration attempt failed");
        let reason = match err {
            WalletError::Unavailable => FlowError::NoWallet,
            _ => FlowError::TransactionFailed,
        };
        self.status = AttemptStatus::Failed(reason);
        &self.status
    }
}
