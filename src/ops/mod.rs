// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! Mutation operations for the portfolio model.
//!
//! Every write — add, inline edit, remove, template switch — computes a
//! full replacement value for exactly one top-level field and funnels it
//! through [`update_field`], which returns a new model and leaves the
//! input untouched. The field/value pairing is a typed union, so a
//! section editor cannot replace a field with a wrongly shaped value.

use crate::model::{
    Education, EntryId, Experience, PersonalInfo, PortfolioData, Project, Skill, TemplateKind,
};

pub mod draft;

pub use draft::{
    commit_draft, EducationDraft, EntryDraft, ExperienceDraft, ProjectDraft, SkillDraft,
};

/// A full replacement value for one top-level field of [`PortfolioData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioField {
    PersonalInfo(PersonalInfo),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Template(TemplateKind),
}

impl PortfolioField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PersonalInfo(_) => "personal_info",
            Self::Skills(_) => "skills",
            Self::Projects(_) => "projects",
            Self::Experience(_) => "experience",
            Self::Education(_) => "education",
            Self::Template(_) => "template",
        }
    }
}

/// Returns a new model equal to `data` in every field except the one
/// named by `field`, which takes the carried value.
///
/// The payload is never validated here — editors are responsible for
/// producing well-formed values. No side effects; replacing a field
/// with an equal value yields an equal model.
pub fn update_field(data: &PortfolioData, field: PortfolioField) -> PortfolioData {
    let mut next = data.clone();
    match field {
        PortfolioField::PersonalInfo(personal_info) => next.set_personal_info(personal_info),
        PortfolioField::Skills(skills) => next.set_skills(skills),
        PortfolioField::Projects(projects) => next.set_projects(projects),
        PortfolioField::Experience(experience) => next.set_experience(experience),
        PortfolioField::Education(education) => next.set_education(education),
        PortfolioField::Template(template) => next.set_template(template),
    }
    next
}

/// An element of one of the four entry collections.
pub trait Entry {
    fn entry_id(&self) -> &EntryId;
}

impl Entry for Skill {
    fn entry_id(&self) -> &EntryId {
        self.id()
    }
}

impl Entry for Project {
    fn entry_id(&self) -> &EntryId {
        self.id()
    }
}

impl Entry for Experience {
    fn entry_id(&self) -> &EntryId {
        self.id()
    }
}

impl Entry for Education {
    fn entry_id(&self) -> &EntryId {
        self.id()
    }
}

/// New collection with `entry` appended at the tail; prior entries and
/// their order are untouched. New entries always sort last.
pub fn append_entry<T: Clone>(existing: &[T], entry: T) -> Vec<T> {
    let mut next = Vec::with_capacity(existing.len() + 1);
    next.extend_from_slice(existing);
    next.push(entry);
    next
}

/// New collection without the entry matching `id`. Removing an unknown
/// id is a no-op, not an error.
pub fn remove_entry<T: Entry + Clone>(existing: &[T], id: &EntryId) -> Vec<T> {
    existing.iter().filter(|entry| entry.entry_id() != id).cloned().collect()
}

/// New collection in which the entry matching `id` is replaced by a
/// fresh copy run through `patch`; every other entry passes through
/// unchanged and order is preserved. An unknown id is a no-op.
pub fn patch_entry<T, F>(existing: &[T], id: &EntryId, patch: F) -> Vec<T>
where
    T: Entry + Clone,
    F: FnOnce(&mut T),
{
    let mut patch = Some(patch);
    existing
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if entry.entry_id() == id {
                if let Some(patch) = patch.take() {
                    patch(&mut entry);
                }
            }
            entry
        })
        .collect()
}

/// Splits a comma-separated technology list: each piece trimmed, empty
/// pieces dropped.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Splits a multi-line achievements entry: lines that are empty after
/// trimming are dropped, surviving lines are kept as typed (untrimmed).
pub fn split_achievements(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests;
