pub mod chain_endpoints;
pub mod user_prefs;
