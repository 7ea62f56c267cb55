// src/output/sink.rs
//! The sink capability and its file and stdout implementations.

use super::clipboard::ClipboardSink;
use super::paths::resolve_output_path;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// An output destination for a rendered payload.
pub trait Sink {
    /// Short description for logs and messages.
    fn describe(&self) -> String;

    /// Writes the payload and returns the number of bytes delivered.
    fn write(&self, content: &str) -> Result<usize, AppError>;
}

/// Builds the sinks the controller writes to.
pub trait SinkProvider {
    /// File sink for a download named `filename`.
    fn download(&self, filename: &str) -> Box<dyn Sink>;
    fn clipboard(&self) -> Box<dyn Sink>;
    fn stdout(&self) -> Box<dyn Sink>;
}

/// Saves the payload as a file, the CLI's equivalent of a browser download.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, content: &str) -> Result<usize, AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| AppError::OutputWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, content).map_err(|source| AppError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(content.len())
    }
}

/// Pipe mode: prints the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn describe(&self) -> String {
        "stdout".to_string()
    }

    fn write(&self, content: &str) -> Result<usize, AppError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(content.len())
    }
}

/// Real sinks: files on disk, the system clipboard, stdout.
#[derive(Debug, Clone, Default)]
pub struct SystemSinks {
    output: Option<PathBuf>,
    one_shot: bool,
}

impl SystemSinks {
    /// `output` is the user's `--output` value: a file, a directory, or
    /// nothing for the working directory.
    pub fn new(output: Option<PathBuf>) -> Self {
        Self {
            output,
            one_shot: false,
        }
    }

    /// The process exits right after delivering, so clipboard contents must
    /// outlive it.
    pub fn one_shot(mut self) -> Self {
        self.one_shot = true;
        self
    }
}

impl SinkProvider for SystemSinks {
    fn download(&self, filename: &str) -> Box<dyn Sink> {
        Box::new(FileSink::new(resolve_output_path(
            self.output.as_deref(),
            filename,
        )))
    }

    fn clipboard(&self) -> Box<dyn Sink> {
        if self.one_shot {
            Box::new(ClipboardSink::outliving_process())
        } else {
            Box::new(ClipboardSink::new())
        }
    }

    fn stdout(&self) -> Box<dyn Sink> {
        Box::new(StdoutSink)
    }
}
