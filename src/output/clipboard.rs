// src/output/clipboard.rs
//! Clipboard sink with native-first, command-fallback strategies.
//!
//! The native clipboard (`arboard`) is preferred whenever it can be opened.
//! Otherwise the platform's clipboard command is used. Detection happens on
//! every write, so a clipboard that appears mid-session is picked up.
//!
//! On Linux the process that sets the clipboard owns it, and the text is gone
//! once that process exits. A sink that must outlive its process (a one-shot
//! run) therefore tries `wl-copy`/`xclip` first, which keep serving the text,
//! and holds a native selection until another application takes it over.

use super::sink::Sink;
use crate::error::AppError;
use std::io::Write;
use std::process::{Command, Stdio};

/// One way of putting text on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStrategy {
    /// In-process clipboard access through `arboard`.
    Native,
    /// Pipe the text into an external program such as `wl-copy`.
    Command { program: String, args: Vec<String> },
}

impl ClipboardStrategy {
    pub fn command(program: &str, args: &[&str]) -> Self {
        Self::Command {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Strategies usable right now, most preferred first.
    ///
    /// `outlive_process` puts the platform command ahead of the native
    /// clipboard where native contents die with the process.
    pub fn detect(outlive_process: bool) -> Vec<Self> {
        let mut strategies = Vec::with_capacity(2);

        match arboard::Clipboard::new() {
            Ok(_) => strategies.push(Self::Native),
            Err(e) => log::debug!("Native clipboard unavailable: {}", e),
        }

        if let Some(command) = Self::platform_command() {
            if outlive_process && cfg!(target_os = "linux") {
                strategies.insert(0, command);
            } else {
                strategies.push(command);
            }
        }

        strategies
    }

    #[cfg(target_os = "linux")]
    fn platform_command() -> Option<Self> {
        let is_wayland = std::env::var("WAYLAND_DISPLAY").is_ok()
            || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland");

        if is_wayland {
            Some(Self::command("wl-copy", &[]))
        } else {
            Some(Self::command("xclip", &["-selection", "clipboard"]))
        }
    }

    #[cfg(target_os = "macos")]
    fn platform_command() -> Option<Self> {
        Some(Self::command("pbcopy", &[]))
    }

    #[cfg(target_os = "windows")]
    fn platform_command() -> Option<Self> {
        Some(Self::command("clip", &[]))
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    fn platform_command() -> Option<Self> {
        None
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Native => "native clipboard",
            Self::Command { program, .. } => program.as_str(),
        }
    }

    fn copy(&self, content: &str, outlive_process: bool) -> Result<(), AppError> {
        match self {
            Self::Native => copy_native(content, outlive_process),
            Self::Command { program, args } => copy_with_command(program, args, content),
        }
    }
}

/// Plain-text clipboard sink.
#[derive(Debug, Clone, Default)]
pub struct ClipboardSink {
    /// Fixed strategies; `None` means detect on each write.
    strategies: Option<Vec<ClipboardStrategy>>,
    /// The copied text must stay available after this process exits.
    outlive_process: bool,
}

impl ClipboardSink {
    /// Sink for a long-running session that keeps the clipboard alive itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink for a run that exits right after copying.
    pub fn outliving_process() -> Self {
        Self {
            strategies: None,
            outlive_process: true,
        }
    }

    /// A sink that only ever tries `strategies`, in order.
    pub fn with_strategies(strategies: Vec<ClipboardStrategy>) -> Self {
        Self {
            strategies: Some(strategies),
            outlive_process: false,
        }
    }

    /// The strategies a write would try, in order.
    pub fn strategies(&self) -> Vec<ClipboardStrategy> {
        match &self.strategies {
            Some(fixed) => fixed.clone(),
            None => ClipboardStrategy::detect(self.outlive_process),
        }
    }
}

impl Sink for ClipboardSink {
    fn describe(&self) -> String {
        "clipboard".to_string()
    }

    fn write(&self, content: &str) -> Result<usize, AppError> {
        let strategies = self.strategies();

        if strategies.is_empty() {
            return Err(AppError::Clipboard(
                "Clipboard not supported on this platform".to_string(),
            ));
        }

        let mut failures = Vec::new();
        for strategy in &strategies {
            match strategy.copy(content, self.outlive_process) {
                Ok(()) => {
                    log::info!("Content copied to clipboard using {}", strategy.name());
                    return Ok(content.len());
                }
                Err(e) => {
                    log::debug!("{} failed: {}", strategy.name(), e);
                    failures.push(format!("{}: {}", strategy.name(), e));
                }
            }
        }

        Err(AppError::Clipboard(failures.join("; ")))
    }
}

#[cfg(target_os = "linux")]
fn copy_native(content: &str, outlive_process: bool) -> Result<(), AppError> {
    use arboard::SetExtLinux;

    let mut clipboard = arboard::Clipboard::new()?;
    if outlive_process {
        log::info!("Holding the clipboard until another application takes it over");
        clipboard.set().wait().text(content)?;
    } else {
        clipboard.set_text(content)?;
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn copy_native(content: &str, _outlive_process: bool) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(content)?;
    Ok(())
}

/// Spawns `program`, feeds `content` on stdin and waits for a clean exit.
///
/// Output streams are not captured: `xclip` and `wl-copy` leave a background
/// process serving the selection, and it would hold captured pipes open.
fn copy_with_command(program: &str, args: &[String], content: &str) -> Result<(), AppError> {
    log::debug!("Attempting to copy with {}", program);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| AppError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Clipboard(format!("{} exited with {}", program, status)))
    }
}
