// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use super::education::Education;
use super::experience::Experience;
use super::ids::EntryId;
use super::project::Project;
use super::skill::{Skill, SkillCategory, SkillLevel};

pub(crate) fn eid(value: &str) -> EntryId {
    EntryId::new(value).expect("entry id")
}

pub(crate) fn skill(id: &str, name: &str, level: u8, category: SkillCategory) -> Skill {
    Skill::new(eid(id), name, SkillLevel::clamped(level), category)
}

pub(crate) fn project(id: &str, title: &str, description: &str) -> Project {
    Project::new(eid(id), title, description)
}

pub(crate) fn experience(id: &str, company: &str, position: &str) -> Experience {
    Experience::new(eid(id), company, position)
}

pub(crate) fn education(id: &str, institution: &str, degree: &str) -> Education {
    Education::new(eid(id), institution, degree)
}
