use super::chain_endpoints::ChainEndpoints;
use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    endpoints: ChainEndpoints,
}

impl UserPrefs {
    pub fn endpoints(&self) -> &ChainEndpoints {
        &self.endpoints
    }
}

/// The account the wallet session is signed in as, read from `PROTON_ACTOR`.
///
/// Returns `None` when no session is configured.
pub fn session_actor() -> Option<String> {
    env::var("PROTON_ACTOR")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
