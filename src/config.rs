// src/config.rs
use crate::constants::DEFAULT_BASE_URL;
use crate::controller::Destination;
use crate::error::AppError;
use crate::types::{ExportFormat, PublishedFileId};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use url::Url;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Saved Workshop subscriptions page (HTML), or '-' to read from stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Xml)]
    pub format: ExportFormat,

    /// Output file or directory (defaults to steam_mods.<format> in the current directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Copy the export to the clipboard
    #[arg(short = 'b', long, default_value_t = false)]
    pub clipboard: bool,

    /// Pipe mode - write the export to stdout
    #[arg(short, long, default_value_t = false, conflicts_with = "interactive")]
    pub pipe: bool,

    /// Base URL used to resolve relative links in the page (empty to disable)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Start with every item deselected
    #[arg(long, default_value_t = false)]
    pub select_none: bool,

    /// Select items by published file ID (comma-separated or repeated)
    #[arg(long, value_name = "ID", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Deselect items by published file ID (comma-separated or repeated)
    #[arg(long, value_name = "ID", value_delimiter = ',')]
    pub deselect: Vec<String>,

    /// Print the checklist instead of exporting
    #[arg(short, long, default_value_t = false)]
    pub list: bool,

    /// Print the checklist as JSON
    #[arg(long, default_value_t = false, requires = "list")]
    pub json: bool,

    /// Only list items whose title or ID contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Pick items in an interactive checklist session
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Where the page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_arg(arg: &str) -> Self {
        if arg.is_empty() || arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Reads the whole page. Invalid UTF-8 is replaced rather than rejected.
    pub fn read_to_string(&self) -> Result<String, AppError> {
        let (bytes, path) = match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|source| AppError::InputRead {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                (buf, PathBuf::from("<stdin>"))
            }
            Self::File(path) => {
                let buf = std::fs::read(path).map_err(|source| AppError::InputRead {
                    path: path.clone(),
                    source,
                })?;
                (buf, path.clone())
            }
        };

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Resolved export configuration, validated and ready to drive the controller.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: InputSource,
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub clipboard: bool,
    pub pipe: bool,
    pub base_url: Option<Url>,
    pub select_none: bool,
    pub select: Vec<PublishedFileId>,
    pub deselect: Vec<PublishedFileId>,
    pub list: bool,
    pub json: bool,
    pub filter: Option<String>,
    pub interactive: bool,
    pub verbose: bool,
}

impl ExportConfig {
    /// Validates command-line input into a configuration.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let input = InputSource::from_arg(&cli.input);

        if cli.interactive && input == InputSource::Stdin {
            return Err(AppError::InvalidArguments(
                "interactive mode reads commands from stdin; pass the page as a file".to_string(),
            ));
        }

        let base_url = match cli.base_url.trim() {
            "" => None,
            raw => Some(Url::parse(raw).map_err(|source| AppError::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            })?),
        };

        Ok(ExportConfig {
            input,
            format: cli.format,
            output: cli.output.filter(|o| !o.is_empty()).map(PathBuf::from),
            clipboard: cli.clipboard,
            pipe: cli.pipe,
            base_url,
            select_none: cli.select_none,
            select: parse_ids(&cli.select)?,
            deselect: parse_ids(&cli.deselect)?,
            list: cli.list,
            json: cli.json,
            filter: cli.filter,
            interactive: cli.interactive,
            verbose: cli.verbose,
        })
    }

    /// A file is written when asked for explicitly, or when no other
    /// destination was requested.
    pub fn wants_download(&self) -> bool {
        self.output.is_some() || (!self.clipboard && !self.pipe)
    }

    /// One-shot destinations in delivery order: stdout, file, clipboard.
    pub fn destinations(&self) -> Vec<Destination> {
        let mut destinations = Vec::with_capacity(3);
        if self.pipe {
            destinations.push(Destination::Stdout);
        }
        if self.wants_download() {
            destinations.push(Destination::File);
        }
        if self.clipboard {
            destinations.push(Destination::Clipboard);
        }
        destinations
    }

    pub fn has_selection_overrides(&self) -> bool {
        self.select_none || !self.select.is_empty() || !self.deselect.is_empty()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            format: ExportFormat::Xml,
            output: None,
            clipboard: false,
            pipe: false,
            base_url: Url::parse(DEFAULT_BASE_URL).ok(),
            select_none: false,
            select: Vec::new(),
            deselect: Vec::new(),
            list: false,
            json: false,
            filter: None,
            interactive: false,
            verbose: false,
        }
    }
}

fn parse_ids(raw: &[String]) -> Result<Vec<PublishedFileId>, AppError> {
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| PublishedFileId::parse(s).map_err(AppError::from))
        .collect()
}
