//! Version ledger document published by resonite-version-monitor
//!
//! The document maps branch names to the builds seen on that branch:
//!
//! ```json
//! {
//!   "public":   [{ "gameVersion": "2026.2.1.1", "manifestId": "1111111111111111111" }],
//!   "headless": [{ "gameVersion": "2026.2.1.2", "manifestId": "3333333333333333333" }]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::version::error::LedgerError;
use crate::version::game_version::{GameVersion, parse_version};

/// A single build listed on a branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub game_version: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub manifest_id: Option<String>,
}

/// A (version, manifest) pair picked from the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerMatch {
    pub version: String,
    pub manifest_id: Option<String>,
}

/// Parsed ledger document, branch order preserved as received
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    branches: IndexMap<String, serde_json::Value>,
}

impl Ledger {
    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        let branches = serde_json::from_str(json)?;
        Ok(Self { branches })
    }

    /// Branch names in document order
    pub fn branch_names(&self) -> Vec<String> {
        self.branches.keys().cloned().collect()
    }

    /// Decode the entries listed for `branch`.
    ///
    /// Branches are decoded lazily so that unrelated top-level metadata keys do
    /// not make the whole document unusable.
    pub fn branch(&self, branch: &str) -> Result<Vec<LedgerEntry>, LedgerError> {
        let value = self
            .branches
            .get(branch)
            .ok_or_else(|| LedgerError::BranchNotFound {
                branch: branch.to_string(),
                available: self.branch_names(),
            })?;

        Ok(Vec::<LedgerEntry>::deserialize(value)?)
    }

    /// First entry whose game version equals `version` exactly.
    pub fn find_exact(
        &self,
        branch: &str,
        version: &str,
    ) -> Result<Option<LedgerMatch>, LedgerError> {
        let entries = self.branch(branch)?;

        Ok(entries
            .into_iter()
            .find(|entry| entry.game_version.as_deref() == Some(version))
            .and_then(LedgerEntry::into_match))
    }

    /// Entry with the highest valid game version; the first one wins on ties.
    pub fn find_latest(&self, branch: &str) -> Result<Option<LedgerMatch>, LedgerError> {
        let entries = self.branch(branch)?;

        let latest = entries
            .into_iter()
            .filter_map(|entry| {
                let parsed = parse_version(entry.game_version.as_deref()?)?;
                Some((parsed, entry))
            })
            .fold(None::<(GameVersion, LedgerEntry)>, |best, candidate| match best {
                Some(best) if candidate.0 <= best.0 => Some(best),
                _ => Some(candidate),
            });

        Ok(latest.and_then(|(_, entry)| entry.into_match()))
    }
}

impl LedgerEntry {
    fn into_match(self) -> Option<LedgerMatch> {
        Some(LedgerMatch {
            version: self.game_version?,
            manifest_id: self.manifest_id,
        })
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
