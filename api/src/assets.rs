//! NFTs owned by an account, as listed by the AtomicAssets API.

use serde::Deserialize;
use serde::Serialize;

/// One NFT instance held by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedAsset {
    pub asset_id: String,
    /// Mint sequence number within the template, as a display label.
    pub template_mint: String,
    pub name: String,
    pub collection_name: String,
    pub template_id: Option<String>,
}

/// All assets of one template held by an account.
///
/// `asset_ids` and `template_mints` are index-aligned, which is the shape the
/// transfer dialog takes them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateHolding {
    pub template_id: Option<String>,
    pub name: String,
    pub collection_name: String,
    pub asset_ids: Vec<String>,
    pub template_mints: Vec<String>,
}

impl TemplateHolding {
    pub fn len(&self) -> usize {
        self.asset_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asset_ids.is_empty()
    }
}

/// Groups assets by template, keeping the order in which templates first appear.
///
/// Assets without a template are grouped by collection and name instead.
pub fn group_by_template(assets: Vec<OwnedAsset>) -> Vec<TemplateHolding> {
    let mut holdings: Vec<TemplateHolding> = Vec::new();

    for asset in assets {
        let existing = holdings.iter_mut().find(|h| match (&h.template_id, &asset.template_id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => h.collection_name == asset.collection_name && h.name == asset.name,
            _ => false,
        });

        match existing {
            Some(holding) => {
                holding.asset_ids.push(asset.asset_id);
                holding.template_mints.push(asset.template_mint);
            }
            None => holdings.push(TemplateHolding {
                template_id: asset.template_id,
                name: asset.name,
                collection_name: asset.collection_name,
                asset_ids: vec![asset.asset_id],
                template_mints: vec![asset.template_mint],
            }),
        }
    }

    holdings
}

/// The envelope AtomicAssets wraps every response in.
#[derive(Deserialize, Debug)]
pub(crate) struct AtomicResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AtomicAsset {
    asset_id: String,
    #[serde(default)]
    template_mint: serde_json::Value,
    #[serde(default)]
    name: Option<String>,
    collection: AtomicCollection,
    #[serde(default)]
    template: Option<AtomicTemplate>,
}

#[derive(Deserialize, Debug)]
struct AtomicCollection {
    collection_name: String,
}

#[derive(Deserialize, Debug)]
struct AtomicTemplate {
    template_id: String,
}

impl From<AtomicAsset> for OwnedAsset {
    fn from(asset: AtomicAsset) -> Self {
        // template_mint arrives as a string, but older deployments send a number.
        let template_mint = match asset.template_mint {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        };
        Self {
            asset_id: asset.asset_id,
            template_mint,
            name: asset.name.unwrap_or_default(),
            collection_name: asset.collection.collection_name,
            template_id: asset.template.map(|t| t.template_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn asset(id: &str, mint: &str, template: Option<&str>) -> OwnedAsset {
        OwnedAsset {
            asset_id: id.to_string(),
            template_mint: mint.to_string(),
            name: "Card".to_string(),
            collection_name: "cards".to_string(),
            template_id: template.map(str::to_string),
        }
    }

    #[test]
    fn groups_keep_first_seen_order_and_aligned_mints() {
        let holdings = group_by_template(vec![
            asset("10", "1", Some("7")),
            asset("11", "5", Some("8")),
            asset("12", "2", Some("7")),
            asset("13", "", None),
        ]);

        assert_eq!(holdings.len(), 3);
        assert_eq!(holdings[0].template_id.as_deref(), Some("7"));
        assert_eq!(holdings[0].asset_ids, vec!["10", "12"]);
        assert_eq!(holdings[0].template_mints, vec!["1", "2"]);
        assert_eq!(holdings[1].asset_ids, vec!["11"]);
        assert_eq!(holdings[2].template_id, None);
        assert_eq!(holdings[2].len(), 1);
    }

    #[test]
    fn parses_atomic_assets_listing() {
        let body = json!({
            "success": true,
            "data": [
                {
                    "asset_id": "4398046511104",
                    "template_mint": "3",
                    "name": "Genesis",
                    "collection": { "collection_name": "protonpunks" },
                    "template": { "template_id": "21" }
                },
                {
                    "asset_id": "4398046511105",
                    "template_mint": 4,
                    "collection": { "collection_name": "protonpunks" },
                    "template": null
                }
            ],
            "query_time": 1700000000000u64
        });

        let response: AtomicResponse<Vec<AtomicAsset>> = serde_json::from_value(body).unwrap();
        assert!(response.success);
        let assets: Vec<OwnedAsset> = response
            .data
            .unwrap()
            .into_iter()
            .map(OwnedAsset::from)
            .collect();

        assert_eq!(assets[0].template_mint, "3");
        assert_eq!(assets[0].template_id.as_deref(), Some("21"));
        assert_eq!(assets[1].template_mint, "4");
        assert_eq!(assets[1].name, "");
        assert_eq!(assets[1].template_id, None);
    }
}
