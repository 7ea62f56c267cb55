// src/types/ids.rs
use super::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a Workshop item, as it appears in its links.
///
/// Stored verbatim: leading zeros are kept and the digit count is not bounded,
/// so the value round-trips into the exported files unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PublishedFileId(String);

impl PublishedFileId {
    /// Parses user-supplied text (e.g. a `--select` argument) into an ID.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim();

        if cleaned.is_empty() {
            return Err(ValidationError::InvalidId(
                "ID cannot be empty".to_string(),
            ));
        }

        if !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidId(format!(
                "ID must contain only digits: {}",
                cleaned
            )));
        }

        Ok(Self(cleaned.to_string()))
    }

    /// Wraps digits captured by the link patterns; caller guarantees `\d+`.
    pub(crate) fn from_digits(digits: &str) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the game expects for this item, e.g. `123.sbm`.
    pub fn mod_file_name(&self) -> String {
        format!("{}{}", self.0, crate::constants::MOD_FILE_EXTENSION)
    }
}

impl fmt::Display for PublishedFileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PublishedFileId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
