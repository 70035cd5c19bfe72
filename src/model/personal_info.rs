// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

/// Free-text identity fields shown in every template header.
///
/// No field is required for the model to be valid; templates render a
/// placeholder (or omit the row) when a field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub bio: String,
}

impl PersonalInfo {
    /// Display name with the template placeholder fallback.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Your Name"
        } else {
            &self.name
        }
    }

    /// Professional title with the template placeholder fallback.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Your Professional Title"
        } else {
            &self.title
        }
    }

    pub fn has_links(&self) -> bool {
        !self.github.is_empty() || !self.linkedin.is_empty() || !self.website.is_empty()
    }
}
