// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use crate::model::fixtures::{eid, skill};
use crate::model::{
    EntryIdSource, PersonalInfo, PortfolioData, SkillCategory, SkillLevel, TemplateKind,
};

use super::{
    append_entry, commit_draft, patch_entry, remove_entry, split_achievements,
    split_technologies, update_field, EducationDraft, EntryDraft, ExperienceDraft, PortfolioField,
    ProjectDraft, SkillDraft,
};

fn model_with_skills() -> PortfolioData {
    let skills = vec![
        skill("s1", "Rust", 5, SkillCategory::Technical),
        skill("s2", "Mentoring", 3, SkillCategory::Soft),
        skill("s3", "Spanish", 2, SkillCategory::Language),
    ];
    update_field(&PortfolioData::new(), PortfolioField::Skills(skills))
}

#[test]
fn update_field_replaces_exactly_one_field() {
    let base = model_with_skills();
    let mut info = PersonalInfo::default();
    info.name = "Ada Lovelace".to_owned();

    let next = update_field(&base, PortfolioField::PersonalInfo(info.clone()));

    assert_eq!(next.personal_info(), &info);
    assert_eq!(next.skills(), base.skills());
    assert_eq!(next.projects(), base.projects());
    assert_eq!(next.experience(), base.experience());
    assert_eq!(next.education(), base.education());
    assert_eq!(next.template(), base.template());
}

#[test]
fn update_field_does_not_touch_the_input_model() {
    let base = model_with_skills();
    let before = base.clone();

    let _ = update_field(&base, PortfolioField::Skills(Vec::new()));

    assert_eq!(base, before);
}

#[test]
fn update_field_is_idempotent_for_equal_payloads() {
    let base = model_with_skills();
    let payload = PortfolioField::Template(TemplateKind::Creative);

    let once = update_field(&base, payload.clone());
    let twice = update_field(&once, payload);

    assert_eq!(once, twice);
}

#[test]
fn field_names_are_stable() {
    assert_eq!(PortfolioField::Skills(Vec::new()).name(), "skills");
    assert_eq!(PortfolioField::Template(TemplateKind::Modern).name(), "template");
}

#[test]
fn append_entry_keeps_prior_order() {
    let existing = vec![
        skill("s1", "Rust", 5, SkillCategory::Technical),
        skill("s2", "Go", 3, SkillCategory::Technical),
    ];
    let appended = append_entry(&existing, skill("s3", "C", 4, SkillCategory::Technical));

    assert_eq!(appended.len(), 3);
    assert_eq!(appended[0].name(), "Rust");
    assert_eq!(appended[1].name(), "Go");
    assert_eq!(appended[2].name(), "C");
}

#[test]
fn remove_entry_drops_exactly_the_matching_id() {
    let model = model_with_skills();

    let removed = remove_entry(model.skills(), &eid("s2"));

    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].name(), "Rust");
    assert_eq!(removed[1].name(), "Spanish");
}

#[test]
fn remove_entry_with_unknown_id_is_a_noop() {
    let model = model_with_skills();

    let removed = remove_entry(model.skills(), &eid("missing"));

    assert_eq!(removed, model.skills());
}

#[test]
fn patch_entry_overwrites_one_field_and_preserves_order() {
    let model = model_with_skills();

    let patched = patch_entry(model.skills(), &eid("s2"), |entry| {
        entry.set_level(SkillLevel::MAX);
    });

    assert_eq!(patched.len(), 3);
    assert_eq!(patched[1].name(), "Mentoring");
    assert_eq!(patched[1].level(), SkillLevel::MAX);
    assert_eq!(patched[1].category(), SkillCategory::Soft);
    assert_eq!(patched[0], model.skills()[0]);
    assert_eq!(patched[2], model.skills()[2]);
}

#[test]
fn patch_entry_with_unknown_id_is_a_noop() {
    let model = model_with_skills();

    let patched = patch_entry(model.skills(), &eid("missing"), |entry| {
        entry.set_name("changed");
    });

    assert_eq!(patched, model.skills());
}

#[test]
fn commit_refuses_blank_required_fields() {
    let mut ids = EntryIdSource::new();
    let model = model_with_skills();

    let draft = SkillDraft { name: "   ".to_owned(), ..SkillDraft::default() };
    assert_eq!(commit_draft(&draft, model.skills(), &mut ids), None);

    let draft = ProjectDraft {
        title: "Site".to_owned(),
        description: String::new(),
        ..ProjectDraft::default()
    };
    assert_eq!(commit_draft(&draft, &[], &mut ids), None);

    let draft = ExperienceDraft { company: "Acme".to_owned(), ..ExperienceDraft::default() };
    assert_eq!(commit_draft(&draft, &[], &mut ids), None);

    let draft = EducationDraft { degree: "BSc".to_owned(), ..EducationDraft::default() };
    assert_eq!(commit_draft(&draft, &[], &mut ids), None);
}

#[test]
fn commit_appends_exactly_one_entry_with_a_fresh_id() {
    let mut ids = EntryIdSource::new();
    let model = model_with_skills();

    let draft = SkillDraft { name: "Kubernetes".to_owned(), ..SkillDraft::default() };
    let skills = commit_draft(&draft, model.skills(), &mut ids).expect("commit");

    assert_eq!(skills.len(), model.skills().len() + 1);
    assert_eq!(&skills[..3], model.skills());

    let added = skills.last().expect("appended entry");
    assert_eq!(added.name(), "Kubernetes");
    assert_eq!(added.level(), SkillLevel::default());
    assert_eq!(added.category(), SkillCategory::Technical);
    assert!(model.skills().iter().all(|s| s.id() != added.id()));
}

#[test]
fn project_draft_splits_technologies_and_drops_empty_links() {
    let mut ids = EntryIdSource::new();
    let draft = ProjectDraft {
        title: "Tracker".to_owned(),
        description: "A tracker".to_owned(),
        technologies: "React, TypeScript, Node.js".to_owned(),
        link: String::new(),
        github: "https://github.com/x/tracker".to_owned(),
        featured: true,
    };

    let projects = commit_draft(&draft, &[], &mut ids).expect("commit");
    let project = &projects[0];

    assert_eq!(project.technologies(), ["React", "TypeScript", "Node.js"]);
    assert_eq!(project.link(), None);
    assert_eq!(project.github(), Some("https://github.com/x/tracker"));
    assert_eq!(project.image(), None);
    assert!(project.featured());
}

#[test]
fn experience_draft_forces_empty_end_date_while_current() {
    let mut ids = EntryIdSource::new();
    let draft = ExperienceDraft {
        company: "Acme".to_owned(),
        position: "Engineer".to_owned(),
        end_date: "2024-05".to_owned(),
        current: true,
        achievements: "Shipped v2\n\nHalved build times\n".to_owned(),
        ..ExperienceDraft::default()
    };

    let entries = commit_draft(&draft, &[], &mut ids).expect("commit");
    let entry = &entries[0];

    assert!(entry.current());
    assert_eq!(entry.end_date(), "");
    assert_eq!(entry.achievements(), ["Shipped v2", "Halved build times"]);
}

#[test]
fn education_draft_keeps_optional_gpa_only_when_present() {
    let mut ids = EntryIdSource::new();

    let draft = EducationDraft {
        institution: "MIT".to_owned(),
        degree: "BSc".to_owned(),
        gpa: String::new(),
        ..EducationDraft::default()
    };
    let entries = commit_draft(&draft, &[], &mut ids).expect("commit");
    assert_eq!(entries[0].gpa(), None);

    let draft = EducationDraft { gpa: "3.9".to_owned(), ..draft };
    let entries = commit_draft(&draft, &[], &mut ids).expect("commit");
    assert_eq!(entries[0].gpa(), Some("3.9"));
}

#[test]
fn skill_draft_build_keeps_the_name_as_typed() {
    let draft = SkillDraft { name: "  Rust  ".to_owned(), ..SkillDraft::default() };
    assert!(draft.is_complete());
    assert_eq!(draft.build(eid("s9")).name(), "  Rust  ");
}

#[test]
fn split_technologies_trims_and_drops_empty_pieces() {
    assert_eq!(
        split_technologies("React, TypeScript, Node.js"),
        ["React", "TypeScript", "Node.js"]
    );
    assert_eq!(split_technologies("a,, b ,"), ["a", "b"]);
    assert!(split_technologies("").is_empty());
    assert!(split_technologies(" , ,").is_empty());
}

#[test]
fn split_achievements_drops_blank_lines_but_keeps_lines_untrimmed() {
    assert_eq!(split_achievements("First\n\nSecond\n"), ["First", "Second"]);
    assert_eq!(split_achievements("  padded  \n   \nlast"), ["  padded  ", "last"]);
    assert!(split_achievements("").is_empty());
    assert!(split_achievements(" \n\t\n").is_empty());
}
