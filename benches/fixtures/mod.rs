// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use folio::model::{
    Education, EntryId, Experience, PersonalInfo, PortfolioData, Project, Skill, SkillCategory,
    SkillLevel,
};
use folio::ops::{update_field, PortfolioField};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Empty,
    Small,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

fn eid(value: String) -> EntryId {
    EntryId::new(value).expect("entry id")
}

fn skills(count: usize) -> Vec<Skill> {
    let categories = [SkillCategory::Technical, SkillCategory::Soft, SkillCategory::Language];
    (0..count)
        .map(|i| {
            Skill::new(
                eid(format!("s{i}")),
                format!("Skill {i}"),
                SkillLevel::clamped((i % 5 + 1) as u8),
                categories[i % categories.len()],
            )
        })
        .collect()
}

fn projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|i| {
            let mut project = Project::new(
                eid(format!("p{i}")),
                format!("Project {i}"),
                "Purpose, scope, and a couple of implementation notes.",
            );
            project.set_technologies(vec![
                "Rust".to_owned(),
                "TypeScript".to_owned(),
                format!("Framework {i}"),
            ]);
            project.set_featured(i % 4 == 0);
            if i % 2 == 0 {
                project.set_github(Some(format!("https://github.com/x/project-{i}")));
            }
            project
        })
        .collect()
}

fn experience(count: usize) -> Vec<Experience> {
    (0..count)
        .map(|i| {
            let mut entry =
                Experience::new(eid(format!("x{i}")), format!("Company {i}"), "Engineer");
            entry.set_location("Remote".to_owned());
            entry.set_start_date(format!("20{:02}-01", 10 + i % 10));
            entry.set_end_date(format!("20{:02}-01", 12 + i % 10));
            entry.set_description("Owned a slice of the product.".to_owned());
            entry.set_achievements(vec![
                "Shipped a major release".to_owned(),
                "Cut costs measurably".to_owned(),
            ]);
            entry
        })
        .collect()
}

fn education(count: usize) -> Vec<Education> {
    (0..count)
        .map(|i| {
            let mut entry =
                Education::new(eid(format!("e{i}")), format!("University {i}"), "BSc");
            entry.set_field("Computer Science".to_owned());
            entry.set_start_date("2015-09".to_owned());
            entry.set_end_date("2019-06".to_owned());
            entry
        })
        .collect()
}

pub fn portfolio(case: Case) -> PortfolioData {
    let (skill_count, project_count, exp_count, edu_count) = match case {
        Case::Empty => return PortfolioData::new(),
        Case::Small => (5, 2, 2, 1),
        Case::Large => (60, 25, 15, 6),
    };

    let mut info = PersonalInfo::default();
    info.name = "Ada Lovelace".to_owned();
    info.title = "Engineer".to_owned();
    info.email = "ada@example.com".to_owned();
    info.bio = "A short professional summary for benchmarking.".to_owned();

    let data = update_field(&PortfolioData::new(), PortfolioField::PersonalInfo(info));
    let data = update_field(&data, PortfolioField::Skills(skills(skill_count)));
    let data = update_field(&data, PortfolioField::Projects(projects(project_count)));
    let data = update_field(&data, PortfolioField::Experience(experience(exp_count)));
    update_field(&data, PortfolioField::Education(education(edu_count)))
}
