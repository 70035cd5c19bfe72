// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! End-to-end checks over the public surface: build a model through the
//! ops layer, render it, and verify the exported document shape.

use folio::model::{EntryIdSource, PortfolioData, TemplateKind};
use folio::ops::{commit_draft, update_field, PortfolioField, ProjectDraft, SkillDraft};
use folio::render::{render_document, render_template};

fn populated_portfolio() -> PortfolioData {
    let mut ids = EntryIdSource::new();
    let data = PortfolioData::new();

    let mut info = data.personal_info().clone();
    info.name = "Grace Hopper".to_owned();
    info.title = "Rear Admiral of Software".to_owned();
    info.github = "https://github.com/grace".to_owned();
    let data = update_field(&data, PortfolioField::PersonalInfo(info));

    let draft = SkillDraft { name: "COBOL".to_owned(), ..SkillDraft::default() };
    let skills = commit_draft(&draft, data.skills(), &mut ids).expect("skill commit");
    let data = update_field(&data, PortfolioField::Skills(skills));

    let draft = ProjectDraft {
        title: "Compiler".to_owned(),
        description: "The first of its kind.".to_owned(),
        technologies: "A-0, FLOW-MATIC".to_owned(),
        ..ProjectDraft::default()
    };
    let projects = commit_draft(&draft, data.projects(), &mut ids).expect("project commit");
    update_field(&data, PortfolioField::Projects(projects))
}

#[test]
fn document_embeds_the_selected_template_fragment() {
    let data = populated_portfolio();

    for template in TemplateKind::ALL {
        let data = update_field(&data, PortfolioField::Template(template));
        let document = render_document(&data);

        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<title>Grace Hopper - Portfolio</title>"));
        assert!(document.contains(&render_template(&data)));
    }
}

#[test]
fn empty_portfolio_exports_placeholders_without_sections() {
    let document = render_document(&PortfolioData::new());
    assert!(document.contains("<title>Your Name - Portfolio</title>"));
    assert!(!document.contains("<section"));
}

#[test]
fn unknown_template_name_exports_the_modern_document() {
    let data = populated_portfolio();
    let fallback = update_field(
        &data,
        PortfolioField::Template(TemplateKind::from_name("holographic")),
    );
    let modern = update_field(&data, PortfolioField::Template(TemplateKind::Modern));

    assert_eq!(render_document(&fallback), render_document(&modern));
}

#[test]
fn draft_splitting_flows_into_the_rendered_markup() {
    let data = populated_portfolio();
    let html = render_template(&data);

    assert!(html.contains("A-0"));
    assert!(html.contains("FLOW-MATIC"));
    assert!(html.contains("COBOL"));
}
