use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// The Proton network the app talks to.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ProtonNetwork {
    #[default]
    Mainnet,
    Testnet,
}

impl ProtonNetwork {
    pub fn default_chain_endpoint(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://proton.greymass.com",
            Self::Testnet => "https://protontestnet.greymass.com",
        }
    }

    pub fn default_atomic_assets_endpoint(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://proton.api.atomicassets.io",
            Self::Testnet => "https://test.proton.api.atomicassets.io",
        }
    }
}

/// Where the chain, asset and signing services live.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChainEndpoints {
    pub network: ProtonNetwork,
    pub chain: String,
    pub atomic_assets: String,
    pub signer: Option<String>,
}

impl ChainEndpoints {
    /// Reads endpoints from environment variables, falling back to the
    /// defaults of the selected network.
    ///
    /// # Environment Variables
    /// - `PROTON_NETWORK`: "mainnet" or "testnet" (case-insensitive).
    /// - `PROTON_CHAIN_ENDPOINT`: chain API base url.
    /// - `ATOMIC_ASSETS_ENDPOINT`: AtomicAssets API base url.
    /// - `PROTON_SIGNER_URL`: wallet signer url. Transfers are refused without it.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let network = var("PROTON_NETWORK")
            .and_then(|s| ProtonNetwork::from_str(s.trim()).ok())
            .unwrap_or_default();

        let non_empty = |key: &str| {
            var(key)
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            network,
            chain: non_empty("PROTON_CHAIN_ENDPOINT")
                .unwrap_or_else(|| network.default_chain_endpoint().to_string()),
            atomic_assets: non_empty("ATOMIC_ASSETS_ENDPOINT")
                .unwrap_or_else(|| network.default_atomic_assets_endpoint().to_string()),
            signer: non_empty("PROTON_SIGNER_URL"),
        }
    }
}

impl Default for ChainEndpoints {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn endpoints_from(pairs: &[(&str, &str)]) -> ChainEndpoints {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ChainEndpoints::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_mainnet_without_signer() {
        let endpoints = endpoints_from(&[]);
        assert_eq!(endpoints.network, ProtonNetwork::Mainnet);
        assert_eq!(endpoints.chain, "https://proton.greymass.com");
        assert_eq!(endpoints.atomic_assets, "https://proton.api.atomicassets.io");
        assert_eq!(endpoints.signer, None);
    }

    #[test]
    fn network_selects_its_default_endpoints() {
        let endpoints = endpoints_from(&[("PROTON_NETWORK", "TestNet")]);
        assert!(endpoints.network.is_testnet());
        assert_eq!(endpoints.chain, "https://protontestnet.greymass.com");
        assert_eq!(
            endpoints.atomic_assets,
            "https://test.proton.api.atomicassets.io"
        );
    }

    #[test]
    fn overrides_are_trimmed_and_blank_values_ignored() {
        let endpoints = endpoints_from(&[
            ("PROTON_NETWORK", "bogus"),
            ("PROTON_CHAIN_ENDPOINT", " http://localhost:8888/ "),
            ("ATOMIC_ASSETS_ENDPOINT", "   "),
            ("PROTON_SIGNER_URL", "http://localhost:9000/sign"),
        ]);
        assert!(endpoints.network.is_mainnet());
        assert_eq!(endpoints.chain, "http://localhost:8888");
        assert_eq!(endpoints.atomic_assets, "https://proton.api.atomicassets.io");
        assert_eq!(endpoints.signer.as_deref(), Some("http://localhost:9000/sign"));
    }
}
