// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! Draft entries — the uncommitted state a section editor accumulates
//! before an add action.
//!
//! All four collections share one commit sequence: check the required
//! fields, synthesize a fresh id, build the entry (applying the
//! text-splitting rules), append at the tail. [`commit_draft`] is that
//! sequence; the per-collection drafts only say which fields are
//! required and how an entry is assembled.

use crate::model::{
    Education, EntryId, EntryIdSource, Experience, Project, Skill, SkillCategory, SkillLevel,
};

use super::{append_entry, split_achievements, split_technologies};

/// Uncommitted input for one collection entry.
pub trait EntryDraft {
    type Entry;

    /// True when every required field is non-blank after trimming.
    fn is_complete(&self) -> bool;

    /// Assembles the entry under the given fresh id.
    fn build(&self, id: EntryId) -> Self::Entry;
}

/// Commits `draft` against the current collection value.
///
/// Returns the new collection with exactly one entry appended, or
/// `None` when the draft is incomplete — in which case nothing changes
/// and no error is surfaced (the add simply does not occur).
pub fn commit_draft<D>(
    draft: &D,
    existing: &[D::Entry],
    ids: &mut EntryIdSource,
) -> Option<Vec<D::Entry>>
where
    D: EntryDraft,
    D::Entry: Clone,
{
    if !draft.is_complete() {
        return None;
    }
    Some(append_entry(existing, draft.build(ids.next_id())))
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

impl EntryDraft for SkillDraft {
    type Entry = Skill;

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }

    fn build(&self, id: EntryId) -> Skill {
        Skill::new(id, self.name.clone(), self.level, self.category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Comma-separated; split on build.
    pub technologies: String,
    pub link: String,
    pub github: String,
    pub featured: bool,
}

impl EntryDraft for ProjectDraft {
    type Entry = Project;

    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    fn build(&self, id: EntryId) -> Project {
        let mut project = Project::new(id, self.title.clone(), self.description.clone());
        project.set_technologies(split_technologies(&self.technologies));
        project.set_link(optional(&self.link));
        project.set_github(optional(&self.github));
        project.set_featured(self.featured);
        project
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    /// One achievement per line; split on build.
    pub achievements: String,
}

impl EntryDraft for ExperienceDraft {
    type Entry = Experience;

    fn is_complete(&self) -> bool {
        !self.company.trim().is_empty() && !self.position.trim().is_empty()
    }

    fn build(&self, id: EntryId) -> Experience {
        let mut experience = Experience::new(id, self.company.clone(), self.position.clone());
        experience.set_location(self.location.clone());
        experience.set_start_date(self.start_date.clone());
        experience.set_end_date(self.end_date.clone());
        // Ordering matters: marking current drops any end date above.
        experience.set_current(self.current);
        experience.set_description(self.description.clone());
        experience.set_achievements(split_achievements(&self.achievements));
        experience
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    /// One achievement per line; split on build.
    pub achievements: String,
}

impl EntryDraft for EducationDraft {
    type Entry = Education;

    fn is_complete(&self) -> bool {
        !self.institution.trim().is_empty() && !self.degree.trim().is_empty()
    }

    fn build(&self, id: EntryId) -> Education {
        let mut education = Education::new(id, self.institution.clone(), self.degree.clone());
        education.set_field(self.field.clone());
        education.set_start_date(self.start_date.clone());
        education.set_end_date(self.end_date.clone());
        education.set_gpa(optional(&self.gpa));
        education.set_achievements(split_achievements(&self.achievements));
        education
    }
}
