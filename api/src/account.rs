//! Proton account records as stored in the `eosio.proton` users table.

use serde::Deserialize;
use serde::Serialize;

/// A registered Proton user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainUser {
    /// The chain account name, e.g. `alice`.
    pub acc: String,
    /// Display name chosen by the user. May be empty.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub verified: bool,
}

impl ChainUser {
    /// The display name if set, otherwise the account name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.acc
        } else {
            &self.name
        }
    }
}

// The users table stores flags as 0/1.
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_users_info_row() {
        let row = json!({
            "acc": "alice",
            "name": "Alice",
            "avatar": "",
            "verified": 1,
            "date": 1600000000,
            "kyc": []
        });
        let user: ChainUser = serde_json::from_value(row).unwrap();
        assert_eq!(user.acc, "alice");
        assert!(user.verified);
        assert_eq!(user.display_name(), "Alice");
    }

    #[test]
    fn display_name_falls_back_to_account() {
        let user: ChainUser = serde_json::from_value(json!({ "acc": "bob.x" })).unwrap();
        assert!(!user.verified);
        assert_eq!(user.display_name(), "bob.x");
    }
}
