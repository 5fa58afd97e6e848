//! Request and response types for NFT transfers.

use serde::Deserialize;
use serde::Serialize;

/// Error text the wallet reports when the user dismisses its signing prompt.
pub const MODAL_CLOSED: &str = "Modal closed";

/// The contract that owns NFTs on Proton.
pub const ATOMIC_ASSETS_CONTRACT: &str = "atomicassets";

/// A single-asset transfer from `sender` to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// The signing account. Empty when no session is active.
    pub sender: String,
    pub recipient: String,
    pub asset_id: String,
    pub memo: String,
}

impl TransferRequest {
    /// Builds the `atomicassets::transfer` action for this request.
    pub fn to_action(&self) -> serde_json::Value {
        serde_json::json!({
            "account": ATOMIC_ASSETS_CONTRACT,
            "name": "transfer",
            "authorization": [{
                "actor": self.sender,
                "permission": "active",
            }],
            "data": {
                "from": self.sender,
                "to": self.recipient,
                "asset_ids": [self.asset_id],
                "memo": self.memo,
            },
        })
    }
}

/// Outcome of a transfer as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransferResponse {
    pub fn succeeded(transaction_id: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            error: Some(error.into()),
        }
    }

    /// True when the failure only means the signing prompt was closed.
    pub fn is_cancelled(&self) -> bool {
        !self.success
            && self
                .error
                .as_deref()
                .is_some_and(|e| e.contains(MODAL_CLOSED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_carries_a_single_asset() {
        let request = TransferRequest {
            sender: "alice".into(),
            recipient: "bob".into(),
            asset_id: "4398046511104".into(),
            memo: "gift".into(),
        };
        let action = request.to_action();
        assert_eq!(action["account"], "atomicassets");
        assert_eq!(action["name"], "transfer");
        assert_eq!(action["authorization"][0]["actor"], "alice");
        assert_eq!(action["data"]["to"], "bob");
        assert_eq!(action["data"]["asset_ids"], serde_json::json!(["4398046511104"]));
        assert_eq!(action["data"]["memo"], "gift");
    }

    #[test]
    fn cancellation_is_detected_by_substring() {
        assert!(TransferResponse::failed("Modal closed").is_cancelled());
        assert!(TransferResponse::failed("Error: Modal closed by user").is_cancelled());
        assert!(!TransferResponse::failed("assertion failure").is_cancelled());
        assert!(!TransferResponse::succeeded("abc").is_cancelled());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let response: TransferResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.transaction_id, None);
        assert_eq!(response.error, None);
    }
}
