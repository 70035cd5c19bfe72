// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use super::{DocumentSink, ExportError};

/// Publishes documents by writing a temp file and launching the system
/// browser on it.
///
/// The opener is resolved once at construction: `FOLIO_BROWSER` wins,
/// otherwise the platform default (`open` on macOS, `xdg-open`
/// elsewhere). The child process is detached and never awaited.
#[derive(Debug, Clone)]
pub struct BrowserSink {
    opener: String,
}

impl BrowserSink {
    pub fn from_env() -> Self {
        let opener = env::var("FOLIO_BROWSER")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_opener().to_owned());
        Self { opener }
    }

    pub fn with_opener(opener: impl Into<String>) -> Self {
        Self { opener: opener.into() }
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }
}

impl Default for BrowserSink {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DocumentSink for BrowserSink {
    fn publish(&self, display_name: &str, html: &str) -> Result<(), ExportError> {
        let path = export_file_path(display_name);
        fs::write(&path, html)
            .map_err(|source| ExportError::Write { path: path.clone(), source })?;

        Command::new(&self.opener)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| ExportError::Spawn { command: self.opener.clone(), source })
    }
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn export_file_path(display_name: &str) -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let slug = file_slug(display_name);
    env::temp_dir().join(format!("folio-{slug}-{}-{millis}.html", std::process::id()))
}

/// Lowercased alphanumeric-and-dash rendition of the display name,
/// safe to embed in a file name.
fn file_slug(display_name: &str) -> String {
    let mut slug = String::with_capacity(display_name.len());
    for ch in display_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if (ch == ' ' || ch == '-' || ch == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "portfolio".to_owned()
    } else {
        slug.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{file_slug, BrowserSink};

    #[test]
    fn slug_is_filename_safe() {
        assert_eq!(file_slug("Ada Lovelace"), "ada-lovelace");
        assert_eq!(file_slug("  <???>  "), "portfolio");
        assert_eq!(file_slug("a--b"), "a-b");
        assert_eq!(file_slug(""), "portfolio");
    }

    #[test]
    fn opener_override_wins() {
        let sink = BrowserSink::with_opener("my-browser");
        assert_eq!(sink.opener(), "my-browser");
    }
}
