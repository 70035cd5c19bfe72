// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! Publishing rendered documents to the outside world.
//!
//! The render layer stays headless: it hands a finished document to a
//! [`DocumentSink`] and never touches a browser, file, or process
//! primitive itself. Sink failures are non-fatal to the caller — the
//! wizard surfaces them as a toast and moves on.

use std::fmt;
use std::path::PathBuf;

pub mod browser;

pub use browser::BrowserSink;

/// Narrow interface for "open/store this rendered document somewhere".
pub trait DocumentSink {
    /// Publishes a standalone HTML document under the person's display
    /// name. Fire-and-forget: a successful return means the hand-off
    /// happened, not that the external viewer finished.
    fn publish(&self, display_name: &str, html: &str) -> Result<(), ExportError>;
}

#[derive(Debug)]
pub enum ExportError {
    Write { path: PathBuf, source: std::io::Error },
    Spawn { command: String, source: std::io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { path, source } => {
                write!(f, "failed writing export to {}: {source}", path.display())
            }
            Self::Spawn { command, source } => {
                write!(f, "failed launching '{command}': {source}")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } | Self::Spawn { source, .. } => Some(source),
        }
    }
}
