use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::errors::FinderError;

pub const DEFAULT_SORT_KEY: &str = "download_count";
pub const DEFAULT_FIELDS: &str = "name,download_count,url";
pub const DEFAULT_SEPARATOR: &str = ";";

/// Mod identifier as a canonical decimal string, so ids of any length are
/// passed to the catalog unchanged apart from leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModId(String);

impl ModId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ModId {
    type Err = FinderError;

    /// Accepts ASCII digits only; signs, spaces and the empty string are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FinderError::InvalidModId(raw.to_string()));
        }
        let trimmed = raw.trim_start_matches('0');
        let canonical = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self(canonical.to_string()))
    }
}

impl From<u64> for ModId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ModId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings for one export run, built once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub mod_id: ModId,
    pub logs_enabled: bool,
    /// Field to sort by (descending). Empty means keep the catalog order.
    pub sort_key: String,
    pub selected_fields: Vec<String>,
    /// `None` writes to stdout.
    pub output_path: Option<PathBuf>,
    pub separator: String,
}

impl FinderConfig {
    pub fn new(mod_id: ModId) -> Self {
        Self {
            mod_id,
            logs_enabled: false,
            sort_key: DEFAULT_SORT_KEY.to_string(),
            selected_fields: split_fields(DEFAULT_FIELDS),
            output_path: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn sort_key(&self) -> Option<&str> {
        if self.sort_key.is_empty() {
            None
        } else {
            Some(&self.sort_key)
        }
    }
}

/// Splits a `--data` value into column names. No trimming is applied.
pub fn split_fields(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}
