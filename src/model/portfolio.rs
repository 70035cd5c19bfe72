// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use super::education::Education;
use super::experience::Experience;
use super::personal_info::PersonalInfo;
use super::project::Project;
use super::skill::Skill;
use super::template::TemplateKind;

/// The top-level record the wizard runs against.
///
/// Exactly six fields; collection order is insertion order and doubles
/// as display order. Fields are read-only from outside the crate — the
/// single write path is [`crate::ops::update_field`], which replaces one
/// whole field on a fresh copy and never mutates in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioData {
    personal_info: PersonalInfo,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    experience: Vec<Experience>,
    education: Vec<Education>,
    template: TemplateKind,
}

impl PortfolioData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub(crate) fn set_personal_info(&mut self, personal_info: PersonalInfo) {
        self.personal_info = personal_info;
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub(crate) fn set_skills(&mut self, skills: Vec<Skill>) {
        self.skills = skills;
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub(crate) fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub(crate) fn set_experience(&mut self, experience: Vec<Experience>) {
        self.experience = experience;
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub(crate) fn set_education(&mut self, education: Vec<Education>) {
        self.education = education;
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub(crate) fn set_template(&mut self, template: TemplateKind) {
        self.template = template;
    }

    /// True when nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }
}
