//! Dotted numeric game versions such as `2026.2.1.10`

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Less,
    Equal,
    Greater,
    /// At least one side is not a valid version
    Incomparable,
}

/// A parsed game version.
///
/// Components are compared as integers, left to right. A shorter version is
/// treated as if padded with trailing zeros, so `1.2` equals `1.2.0.0`.
#[derive(Debug, Clone)]
pub struct GameVersion {
    components: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid game version: '{0}'")]
pub struct InvalidVersion(pub String);

impl GameVersion {
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl FromStr for GameVersion {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| {
                // u64::from_str accepts a leading '+', which is not part of the grammar
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| InvalidVersion(s.to_string()))?;

        Ok(Self { components })
    }
}

impl Ord for GameVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for GameVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GameVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for GameVersion {}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Parse a version string, returning `None` for anything outside the grammar.
pub fn parse_version(version: &str) -> Option<GameVersion> {
    version.parse().ok()
}

/// Compare two version strings.
pub fn compare_versions(a: &str, b: &str) -> CompareResult {
    let (Some(a), Some(b)) = (parse_version(a), parse_version(b)) else {
        return CompareResult::Incomparable;
    };

    match a.cmp(&b) {
        Ordering::Less => CompareResult::Less,
        Ordering::Equal => CompareResult::Equal,
        Ordering::Greater => CompareResult::Greater,
    }
}

/// Compact build identifier: the version with its separators removed.
pub fn build_id(version: &str) -> String {
    version.replace('.', "")
}
