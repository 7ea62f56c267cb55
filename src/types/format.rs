// src/types/format.rs
use super::ValidationError;
use crate::constants::EXPORT_FILE_STEM;
use std::fmt;
use std::str::FromStr;

/// The two flat text layouts a selection can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// `<ModItem>` blocks, ready to paste into a world's mod list
    #[default]
    Xml,
    /// Comma-separated table with a header row
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }

    /// Upper-case label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Xml => "XML",
            Self::Csv => "CSV",
        }
    }

    /// `steam_mods.xml` or `steam_mods.csv`.
    pub fn default_filename(self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            other => Err(ValidationError::UnknownFormat(other.to_string())),
        }
    }
}
