// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! Folio — terminal portfolio wizard with HTML template export.
//!
//! The crate is a single-crate layout: `model` holds the portfolio
//! data, `ops` is its only write path, `render` turns a model into one
//! of three HTML templates, `export` publishes rendered documents, and
//! `tui` is the interactive wizard shell.

pub mod export;
pub mod model;
pub mod ops;
pub mod render;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
