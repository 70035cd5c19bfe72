// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use super::ids::EntryId;

/// One work-experience entry.
///
/// Invariant: a current position never carries an end date. The setters
/// below enforce this so the templates can trust `end_date` to be empty
/// whenever `current` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    id: EntryId,
    company: String,
    position: String,
    location: String,
    start_date: String,
    end_date: String,
    current: bool,
    description: String,
    achievements: Vec<String>,
}

impl Experience {
    pub fn new(id: EntryId, company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            company: company.into(),
            position: position.into(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
            achievements: Vec::new(),
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
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
        if !self.current {
            self.end_date = end_date.into();
        }
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn set_current(&mut self, current: bool) {
        self.current = current;
        if current {
            self.end_date.clear();
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn set_achievements(&mut self, achievements: Vec<String>) {
        self.achievements = achievements;
    }

    /// "Present" for current positions, otherwise the stored end date.
    pub fn end_date_label(&self) -> &str {
        if self.current {
            "Present"
        } else {
            &self.end_date
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Experience;
    use crate::model::EntryId;

    fn entry() -> Experience {
        Experience::new(EntryId::new("x1").expect("id"), "Acme", "Engineer")
    }

    #[test]
    fn current_clears_end_date() {
        let mut exp = entry();
        exp.set_end_date("2024-01");
        exp.set_current(true);
        assert_eq!(exp.end_date(), "");
        assert_eq!(exp.end_date_label(), "Present");
    }

    #[test]
    fn end_date_is_ignored_while_current() {
        let mut exp = entry();
        exp.set_current(true);
        exp.set_end_date("2024-01");
        assert_eq!(exp.end_date(), "");

        exp.set_current(false);
        exp.set_end_date("2024-01");
        assert_eq!(exp.end_date(), "2024-01");
        assert_eq!(exp.end_date_label(), "2024-01");
    }
}
