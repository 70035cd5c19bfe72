// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use super::ids::EntryId;

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    id: EntryId,
    institution: String,
    degree: String,
    field: String,
    start_date: String,
    end_date: String,
    gpa: Option<String>,
    achievements: Vec<String>,
}

impl Education {
    pub fn new(id: EntryId, institution: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            id,
            institution: institution.into(),
            degree: degree.into(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
            achievements: Vec::new(),
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn set_start_date(&mut self, start_date: impl Into<String>) {
        self.start_date = start_date.into();
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn set_end_date(&mut self, end_date: impl Into<String>) {
        self.end_date = end_date.into();
    }

    pub fn gpa(&self) -> Option<&str> {
        self.gpa.as_deref()
    }

    pub fn set_gpa(&mut self, gpa: Option<String>) {
        self.gpa = gpa;
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn set_achievements(&mut self, achievements: Vec<String>) {
        self.achievements = achievements;
    }
}
