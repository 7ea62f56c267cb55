// src/lib.rs
//! workshop-export library: turns a saved Steam Workshop subscriptions page
//! into an XML or CSV mod list.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ExportConfig`
//! - **Domain types**: `Entry`, `PublishedFileId`, `ExportFormat`
//! - **Scraping**: `NodeSource`, `HtmlPage`, `collect_entries`, `extract_published_file_id`
//! - **Selection**: `SelectionStore`, `ExporterController`
//! - **Serialization**: `render`, `render_xml`, `render_csv`
//! - **Output**: `Sink`, `SinkProvider`, `SystemSinks`, clipboard strategies

pub mod collect;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod extract;
pub mod interactive;
pub mod notice;
pub mod output;
pub mod selection;
pub mod serialize;
pub mod source;
pub mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig, InputSource};

// --- Domain Types ---
pub use crate::types::{Entry, ExportFormat, PublishedFileId};

// --- Scraping ---
pub use crate::collect::{collect_entries, entries_from_nodes};
pub use crate::extract::extract_published_file_id;
pub use crate::source::{discover_nodes, CandidateNode, HtmlPage, NodeSource};

// --- Selection & Control ---
pub use crate::controller::{ActionOutcome, Destination, ExporterController};
pub use crate::notice::{Notice, NoticeBoard, NoticeLevel};
pub use crate::selection::{SelectionCount, SelectionStore};

// --- Serialization ---
pub use crate::serialize::{escape_csv_field, escape_xml, render, render_csv, render_xml};

// --- Output ---
pub use crate::output::{
    ClipboardSink, ClipboardStrategy, Delivery, FileSink, Sink, SinkProvider, StdoutSink,
    SystemSinks,
};

// --- Front-ends ---
pub use crate::interactive::{run_session, write_checklist};
