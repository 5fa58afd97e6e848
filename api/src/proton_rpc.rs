//! HTTP clients for the Proton chain API, the AtomicAssets API and the wallet signer.

use std::time::Duration;

use dioxus_logger::tracing;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::account::ChainUser;
use crate::assets::AtomicAsset;
use crate::assets::AtomicResponse;
use crate::assets::OwnedAsset;
use crate::prefs::chain_endpoints::ChainEndpoints;
use crate::transfer::TransferRequest;
use crate::transfer::TransferResponse;

/// Reported when no signer url is configured.
pub const NO_WALLET_SESSION: &str = "Wallet session unavailable";

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

async fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceCell<reqwest::Client> = OnceCell::const_new();
    const TIMEOUT: Duration = Duration::from_secs(30);

    CLIENT
        .get_or_init(|| async {
            reqwest::Client::builder()
                .timeout(TIMEOUT)
                .build()
                .unwrap_or_default()
        })
        .await
}

async fn read_json<T: serde::de::DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, RpcError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RpcError::Status {
            url: url.to_string(),
            status,
            body,
        });
    }
    response.json::<T>().await.map_err(|e| RpcError::Malformed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Deserialize, Debug)]
struct TableRows<T> {
    rows: Vec<T>,
}

/// Looks up `account` in the `eosio.proton::usersinfo` table.
///
/// Returns `Ok(None)` when the account has no row.
pub async fn get_user_by_chain_account(
    endpoints: &ChainEndpoints,
    account: &str,
) -> Result<Option<ChainUser>, RpcError> {
    let url = format!("{}/v1/chain/get_table_rows", endpoints.chain);
    let query = serde_json::json!({
        "json": true,
        "code": "eosio.proton",
        "scope": "eosio.proton",
        "table": "usersinfo",
        "lower_bound": account,
        "upper_bound": account,
        "limit": 1,
    });

    let response = http_client()
        .await
        .post(&url)
        .json(&query)
        .send()
        .await
        .map_err(|source| RpcError::Transport {
            url: url.clone(),
            source,
        })?;

    let table: TableRows<ChainUser> = read_json(&url, response).await?;
    Ok(first_matching_row(table.rows, account))
}

// Bounds on name keys are inclusive, but a node that ignores them returns
// the next row instead, so the account is compared explicitly.
fn first_matching_row(rows: Vec<ChainUser>, account: &str) -> Option<ChainUser> {
    rows.into_iter().find(|user| user.acc == account)
}

/// Lists the NFTs `owner` holds, newest first.
pub async fn owned_assets(
    endpoints: &ChainEndpoints,
    owner: &str,
) -> Result<Vec<OwnedAsset>, RpcError> {
    const PAGE_LIMIT: &str = "1000";

    let url = format!("{}/atomicassets/v1/assets", endpoints.atomic_assets);
    let response = http_client()
        .await
        .get(&url)
        .query(&[
            ("owner", owner),
            ("limit", PAGE_LIMIT),
            ("order", "desc"),
            ("sort", "transferred"),
        ])
        .send()
        .await
        .map_err(|source| RpcError::Transport {
            url: url.clone(),
            source,
        })?;

    let body: AtomicResponse<Vec<AtomicAsset>> = read_json(&url, response).await?;
    if !body.success {
        return Err(RpcError::Malformed {
            url,
            reason: body.message.unwrap_or_else(|| "success: false".to_string()),
        });
    }

    Ok(body
        .data
        .unwrap_or_default()
        .into_iter()
        .map(OwnedAsset::from)
        .collect())
}

#[derive(Deserialize, Debug, Default)]
struct SignerReply {
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Hands the transfer action to the wallet signer and reports its verdict.
///
/// Wallet-side rejections, including a dismissed signing prompt, come back
/// as `TransferResponse::failed`; only transport problems are errors.
pub async fn push_transfer(
    endpoints: &ChainEndpoints,
    request: &TransferRequest,
) -> Result<TransferResponse, RpcError> {
    let Some(signer) = endpoints.signer.as_deref() else {
        tracing::warn!("transfer requested but PROTON_SIGNER_URL is not set");
        return Ok(TransferResponse::failed(NO_WALLET_SESSION));
    };

    let payload = serde_json::json!({
        "chain": endpoints.chain,
        "actions": [request.to_action()],
    });

    let response = http_client()
        .await
        .post(signer)
        .json(&payload)
        .send()
        .await
        .map_err(|source| RpcError::Transport {
            url: signer.to_string(),
            source,
        })?;

    let status = response.status();
    let text = response.text().await.map_err(|source| RpcError::Transport {
        url: signer.to_string(),
        source,
    })?;

    Ok(signer_verdict(status, &text))
}

fn signer_verdict(status: reqwest::StatusCode, body: &str) -> TransferResponse {
    let reply: SignerReply = serde_json::from_str(body).unwrap_or_default();

    if let Some(error) = reply.error {
        return TransferResponse::failed(error);
    }
    match (status.is_success(), reply.transaction_id) {
        (true, Some(id)) => TransferResponse::succeeded(id),
        (true, None) => TransferResponse::failed("Signer returned no transaction id"),
        (false, _) if body.trim().is_empty() => TransferResponse::failed(status.to_string()),
        (false, _) => TransferResponse::failed(body.trim()),
    }
}
