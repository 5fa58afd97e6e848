//! This crate contains all shared fullstack server functions.

pub mod account;
pub mod assets;
pub mod prefs;
#[cfg(not(target_arch = "wasm32"))]
pub mod proton_rpc;
pub mod transfer;

use account::ChainUser;
use assets::OwnedAsset;
use dioxus::prelude::*;
use prefs::user_prefs::UserPrefs;
use transfer::TransferRequest;
use transfer::TransferResponse;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// The actor the wallet session is signed in as, if any.
#[post("/api/session")]
pub async fn session() -> Result<Option<String>, ApiError> {
    Ok(prefs::user_prefs::session_actor())
}

/// Resolves a chain account name to its registered user.
///
/// `Ok(None)` means the account is not registered.
#[post("/api/get_user_by_chain_account")]
pub async fn get_user_by_chain_account(account: String) -> Result<Option<ChainUser>, ApiError> {
    let endpoints = prefs::chain_endpoints::ChainEndpoints::from_env();

    match proton_rpc::get_user_by_chain_account(&endpoints, &account).await {
        Ok(user) => {
            dioxus_logger::tracing::debug!("lookup {}: found={}", account, user.is_some());
            Ok(user)
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("lookup {} failed: {}", account, e);
            Err(e.into())
        }
    }
}

#[post("/api/owned_assets")]
pub async fn owned_assets(owner: String) -> Result<Vec<OwnedAsset>, ApiError> {
    let endpoints = prefs::chain_endpoints::ChainEndpoints::from_env();

    let assets = proton_rpc::owned_assets(&endpoints, &owner).await?;
    dioxus_logger::tracing::info!("{} owns {} assets", owner, assets.len());
    Ok(assets)
}

/// Transfers one NFT through the wallet session.
///
/// Wallet rejections are reported in the response, not as errors.
#[post("/api/transfer")]
pub async fn transfer(request: TransferRequest) -> Result<TransferResponse, ApiError> {
    let endpoints = prefs::chain_endpoints::ChainEndpoints::from_env();

    let response = proton_rpc::push_transfer(&endpoints, &request).await?;
    if response.success {
        dioxus_logger::tracing::info!(
            "transferred asset {} from {} to {}: tx {:?}",
            request.asset_id,
            request.sender,
            request.recipient,
            response.transaction_id
        );
    } else {
        dioxus_logger::tracing::warn!(
            "transfer of asset {} to {} not completed: {:?}",
            request.asset_id,
            request.recipient,
            response.error
        );
    }
    Ok(response)
}
