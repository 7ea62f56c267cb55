// src/notice.rs
//! Transient user-facing notices.
//!
//! A notice replaces the previous one and clears itself after
//! [`NOTICE_LIFETIME`]. Nothing here blocks or fails.

use crate::constants::NOTICE_LIFETIME;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    posted_at: Instant,
}

impl Notice {
    pub fn is_live_at(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.posted_at) < lifetime
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Holds the most recent notice.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    latest: Option<Notice>,
    lifetime: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_LIFETIME)
    }
}

impl NoticeBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            latest: None,
            lifetime,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.post_at(NoticeLevel::Info, message, Instant::now());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.post_at(NoticeLevel::Warning, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.post_at(NoticeLevel::Error, message, Instant::now());
    }

    pub fn post_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::debug!("Notice ({:?}): {}", level, message);
        self.latest = Some(Notice {
            level,
            message,
            posted_at: now,
        });
    }

    /// The notice still visible at `now`, if any.
    pub fn current_at(&self, now: Instant) -> Option<&Notice> {
        self.latest
            .as_ref()
            .filter(|n| n.is_live_at(now, self.lifetime))
    }

    /// The last notice regardless of expiry. One-shot front-ends print this
    /// once after an action.
    pub fn latest(&self) -> Option<&Notice> {
        self.latest.as_ref()
    }

    /// Removes and returns the live notice so it is shown only once.
    pub fn take_current(&mut self) -> Option<Notice> {
        let now = Instant::now();
        match &self.latest {
            Some(n) if n.is_live_at(now, self.lifetime) => self.latest.take(),
            _ => None,
        }
    }
}
