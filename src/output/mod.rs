// src/output/mod.rs
//! Output sinks: where a rendered payload goes.
//!
//! A [`Sink`] is the only abstraction the controller sees. Concrete sinks are
//! built by a [`SinkProvider`], so tests can swap in recording fakes while the
//! binary uses [`SystemSinks`].

mod clipboard;
mod paths;
mod sink;
mod types;
mod writer;

pub use clipboard::{ClipboardSink, ClipboardStrategy};
pub use paths::{looks_like_dir_hint, resolve_output_path};
pub use sink::{FileSink, Sink, SinkProvider, StdoutSink, SystemSinks};
pub use types::Delivery;
pub use writer::deliver;
