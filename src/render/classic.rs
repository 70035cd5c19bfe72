// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use crate::model::PortfolioData;

use super::html::{escape_text, push_achievement_items, push_external_link};

const SECTION_HEADING: &str =
    r#"class="text-2xl font-bold text-gray-800 mb-4 border-b-2 border-gray-300 pb-2""#;

/// Traditional letterhead layout: summary first, competencies with
/// percentage bars, experience before projects, closing contact block.
pub fn render_classic(data: &PortfolioData) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="min-h-screen bg-gray-50">"#);
    push_header(&mut out, data);
    out.push_str(r#"<div class="container mx-auto px-6 py-12"><div class="max-w-4xl mx-auto">"#);
    push_summary(&mut out, data);
    push_skills(&mut out, data);
    push_experience(&mut out, data);
    push_projects(&mut out, data);
    push_education(&mut out, data);
    push_contact(&mut out, data);
    out.push_str("</div></div></div>");
    out
}

fn push_header(out: &mut String, data: &PortfolioData) {
    let info = data.personal_info();
    out.push_str(
        r#"<header class="bg-white shadow-sm border-b-2 border-gray-800"><div class="container mx-auto px-6 py-12"><div class="max-w-4xl mx-auto text-center">"#,
    );
    let _ = write!(
        out,
        r#"<h1 class="text-4xl font-bold text-gray-800 mb-2">{}</h1><p class="text-xl text-gray-600 mb-6">{}</p>"#,
        escape_text(info.display_name()),
        escape_text(info.display_title()),
    );
    out.push_str(r#"<div class="flex flex-wrap justify-center gap-6 text-sm">"#);
    for value in [&info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            let _ = write!(out, "<span>{}</span>", escape_text(value));
        }
    }
    out.push_str("</div></div></div></header>");
}

fn push_summary(out: &mut String, data: &PortfolioData) {
    let bio = &data.personal_info().bio;
    if bio.is_empty() {
        return;
    }

    let _ = write!(
        out,
        r#"<section class="mb-12"><h2 {SECTION_HEADING}>Professional Summary</h2><p class="text-gray-700 leading-relaxed">{}</p></section>"#,
        escape_text(bio),
    );
}

fn push_skills(out: &mut String, data: &PortfolioData) {
    if data.skills().is_empty() {
        return;
    }

    let _ = write!(
        out,
        r#"<section class="mb-12"><h2 {SECTION_HEADING}>Core Competencies</h2><div class="grid grid-cols-2 md:grid-cols-3 gap-4">"#,
    );
    for skill in data.skills() {
        let _ = write!(
            out,
            r#"<div class="text-gray-700"><span class="font-medium">{}</span><div class="flex items-center mt-1"><div class="flex-1 bg-gray-200 rounded-full h-2 mr-2"><div class="bg-gray-700 h-2 rounded-full" style="width: {}%"></div></div><span class="text-xs text-gray-500">{}/5</span></div></div>"#,
            escape_text(skill.name()),
            skill.level().percent(),
            skill.level(),
        );
    }
    out.push_str("</div></section>");
}

fn push_experience(out: &mut String, data: &PortfolioData) {
    if data.experience().is_empty() {
        return;
    }

    let _ = write!(
        out,
        r#"<section class="mb-12"><h2 {SECTION_HEADING}>Professional Experience</h2><div class="space-y-8">"#,
    );
    for exp in data.experience() {
        out.push_str(r#"<div class="border-l-4 border-gray-300 pl-6">"#);
        let _ = write!(
            out,
            r#"<h3 class="text-lg font-bold text-gray-800">{}</h3><p class="font-semibold text-gray-700">{}</p><p class="text-sm text-gray-500 mb-3">{} | {} - {}</p>"#,
            escape_text(exp.position()),
            escape_text(exp.company()),
            escape_text(exp.location()),
            escape_text(exp.start_date()),
            escape_text(exp.end_date_label()),
        );
        if !exp.description().is_empty() {
            let _ = write!(
                out,
                r#"<p class="text-gray-700 mb-3">{}</p>"#,
                escape_text(exp.description()),
            );
        }
        if !exp.achievements().is_empty() {
            out.push_str(r#"<ul class="space-y-1 text-sm">"#);
            push_achievement_items(out, "text-gray-500 mr-3", exp.achievements());
            out.push_str("</ul>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
}

fn push_projects(out: &mut String, data: &PortfolioData) {
    if data.projects().is_empty() {
        return;
    }

    let _ = write!(
        out,
        r#"<section class="mb-12"><h2 {SECTION_HEADING}>Notable Projects</h2><div class="space-y-6">"#,
    );
    for project in data.projects() {
        out.push_str(r#"<div class="bg-white p-6 border border-gray-200 rounded">"#);
        let _ = write!(
            out,
            r#"<h3 class="text-lg font-bold text-gray-800 mb-2">{}</h3><p class="text-gray-700 mb-3">{}</p>"#,
            escape_text(project.title()),
            escape_text(project.description()),
        );
        if !project.technologies().is_empty() {
            let joined = project.technologies().join(", ");
            let _ = write!(
                out,
                r#"<p class="text-sm text-gray-600 mb-3"><strong>Technologies:</strong> {}</p>"#,
                escape_text(&joined),
            );
        }
        out.push_str(r#"<div class="flex space-x-4 text-sm">"#);
        if let Some(link) = project.link() {
            push_external_link(
                out,
                "text-gray-700 hover:text-gray-900 underline",
                link,
                "View Project",
            );
        }
        if let Some(github) = project.github() {
            push_external_link(
                out,
                "text-gray-700 hover:text-gray-900 underline",
                github,
                "Source Code",
            );
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div></section>");
}

fn push_education(out: &mut String, data: &PortfolioData) {
    if data.education().is_empty() {
        return;
    }

    let _ = write!(
        out,
        r#"<section class="mb-12"><h2 {SECTION_HEADING}>Education</h2><div class="space-y-6">"#,
    );
    for edu in data.education() {
        out.push_str(r#"<div class="border-l-4 border-gray-300 pl-6">"#);
        let _ = write!(
            out,
            r#"<h3 class="text-lg font-bold text-gray-800">{}</h3><p class="font-semibold text-gray-700">{}</p>"#,
            escape_text(edu.degree()),
            escape_text(edu.institution()),
        );
        out.push_str(r#"<p class="text-sm text-gray-500 mb-3">"#);
        if !edu.field().is_empty() {
            let _ = write!(out, "{} | ", escape_text(edu.field()));
        }
        let _ = write!(out, "{} - {}", escape_text(edu.start_date()), escape_text(edu.end_date()));
        if let Some(gpa) = edu.gpa() {
            let _ = write!(out, " | GPA: {}", escape_text(gpa));
        }
        out.push_str("</p>");
        if !edu.achievements().is_empty() {
            out.push_str(r#"<ul class="space-y-1 text-sm">"#);
            push_achievement_items(out, "text-gray-500 mr-3", edu.achievements());
            out.push_str("</ul>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
}

fn push_contact(out: &mut String, data: &PortfolioData) {
    let info = data.personal_info();
    if !info.has_links() {
        return;
    }

    let _ = write!(
        out,
        r#"<section class="mb-12"><h2 {SECTION_HEADING}>Contact &amp; Links</h2><div class="grid grid-cols-1 md:grid-cols-2 gap-4">"#,
    );
    let class = "flex items-center space-x-2 text-gray-700 hover:text-gray-900";
    if !info.github.is_empty() {
        push_external_link(out, class, &info.github, "GitHub Profile");
    }
    if !info.linkedin.is_empty() {
        push_external_link(out, class, &info.linkedin, "LinkedIn Profile");
    }
    if !info.website.is_empty() {
        push_external_link(out, class, &info.website, "Personal Website");
    }
    out.push_str("</div></section>");
}
