//! Validation and submission of the NFT transfer form.
//!
//! Submitting resolves the recipient first and only then asks the wallet to
//! transfer. Everything that can go wrong ends up as a [`TransferError`] whose
//! display text is what the dialog shows.

use api::account::ChainUser;
use api::transfer::TransferRequest;
use api::transfer::TransferResponse;
use api::ApiError;
use dioxus_logger::tracing;

pub const INVALID_USER: &str = "Invalid user. Please try again.";

pub const RECIPIENT_RULES: &str =
    "Recipient's name must be 4-12 characters and only contain the numbers 1-5 or lowercase letters a-z";

const MIN_ACCOUNT_LEN: usize = 4;
const MAX_ACCOUNT_LEN: usize = 12;

/// Result of running a field's validity predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub error_message: String,
}

/// Checks a recipient against the chain's account-name rules.
///
/// The message is returned whether or not the check passes; callers decide
/// when to show it.
pub fn check_recipient(input: &str) -> FieldCheck {
    let len = input.chars().count();
    let is_valid = (MIN_ACCOUNT_LEN..=MAX_ACCOUNT_LEN).contains(&len)
        && input
            .chars()
            .all(|c| c.is_ascii_lowercase() || ('1'..='5').contains(&c) || c == '.');

    FieldCheck {
        is_valid,
        error_message: RECIPIENT_RULES.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("Invalid user. Please try again.")]
    UnknownRecipient,

    /// The wallet refused the transfer.
    #[error("{0}")]
    Rejected(String),

    /// A lookup or transfer call failed outright.
    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Preconditions not met. Nothing was sent and nothing is shown.
    Skipped,
    /// The signing prompt was closed. Nothing is shown.
    Dismissed,
    Failed(TransferError),
    Transferred { transaction_id: Option<String> },
}

/// The remote side of a transfer.
pub trait TransferBackend {
    async fn lookup_user(&self, account: &str) -> Result<Option<ChainUser>, ApiError>;

    async fn transfer(&self, request: TransferRequest) -> Result<TransferResponse, ApiError>;
}

/// Talks to the `api` server functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerBackend;

impl TransferBackend for ServerBackend {
    async fn lookup_user(&self, account: &str) -> Result<Option<ChainUser>, ApiError> {
        api::get_user_by_chain_account(account.to_string()).await
    }

    async fn transfer(&self, request: TransferRequest) -> Result<TransferResponse, ApiError> {
        api::transfer(request).await
    }
}

/// A snapshot of the form taken when Transfer is pressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferDraft {
    pub recipient: String,
    pub memo: String,
    pub asset_id: String,
    /// The last result of the recipient predicate.
    pub is_valid: bool,
}

impl TransferDraft {
    pub fn is_submittable(&self) -> bool {
        let len = self.recipient.chars().count();
        (MIN_ACCOUNT_LEN..=MAX_ACCOUNT_LEN).contains(&len) && self.is_valid
    }

    /// Runs the lookup-then-transfer sequence.
    ///
    /// `sender` is the signed-in actor; an empty sender is sent when there is none.
    pub async fn submit<B: TransferBackend>(
        &self,
        backend: &B,
        sender: Option<&str>,
    ) -> SubmitOutcome {
        if !self.is_submittable() {
            tracing::debug!("transfer skipped: recipient {:?} not valid", self.recipient);
            return SubmitOutcome::Skipped;
        }

        match self.try_submit(backend, sender).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("transfer of asset {} failed: {}", self.asset_id, e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn try_submit<B: TransferBackend>(
        &self,
        backend: &B,
        sender: Option<&str>,
    ) -> Result<SubmitOutcome, TransferError> {
        let user = backend
            .lookup_user(&self.recipient)
            .await
            .map_err(|e| TransferError::Backend(e.to_string()))?
            .ok_or(TransferError::UnknownRecipient)?;

        let request = TransferRequest {
            sender: sender.unwrap_or_default().to_string(),
            recipient: self.recipient.clone(),
            asset_id: self.asset_id.clone(),
            memo: self.memo.clone(),
        };

        tracing::info!(
            "submitting transfer of asset {} to {} ({})",
            request.asset_id,
            request.recipient,
            user.display_name()
        );
        let response = backend
            .transfer(request)
            .await
            .map_err(|e| TransferError::Backend(e.to_string()))?;

        if response.success {
            return Ok(SubmitOutcome::Transferred {
                transaction_id: response.transaction_id,
            });
        }
        if response.is_cancelled() {
            tracing::info!("transfer of asset {} dismissed in wallet", self.asset_id);
            return Ok(SubmitOutcome::Dismissed);
        }
        Err(TransferError::Rejected(response.error.unwrap_or_default()))
    }
}

/// Applies an outcome to the dialog.
///
/// A completed transfer refreshes the page and then closes the dialog. A
/// failure returns the text to display.
pub fn settle(
    outcome: SubmitOutcome,
    on_refresh: impl FnOnce(),
    on_close: impl FnOnce(),
) -> Option<String> {
    match outcome {
        SubmitOutcome::Transferred { .. } => {
            on_refresh();
            on_close();
            None
        }
        SubmitOutcome::Failed(e) => Some(e.to_string()),
        SubmitOutcome::Skipped | SubmitOutcome::Dismissed => None,
    }
}
