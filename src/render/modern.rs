// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use crate::model::{PortfolioData, SkillLevel};

use super::html::{
    escape_attr, escape_text, push_achievement_items, push_external_link, push_tech_pills,
};

/// Clean, minimalist layout: gradient hero, card grids, dark footer.
pub fn render_modern(data: &PortfolioData) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="min-h-screen bg-white">"#);
    push_header(&mut out, data);
    out.push_str(r#"<div class="container mx-auto px-6 py-16"><div class="max-w-6xl mx-auto">"#);
    push_skills(&mut out, data);
    push_projects(&mut out, data);
    push_experience(&mut out, data);
    push_education(&mut out, data);
    out.push_str("</div></div>");
    push_footer(&mut out, data);
    out.push_str("</div>");
    out
}

fn push_header(out: &mut String, data: &PortfolioData) {
    let info = data.personal_info();
    out.push_str(
        r#"<header class="bg-gradient-to-r from-blue-600 to-purple-600 text-white py-16"><div class="container mx-auto px-6"><div class="max-w-4xl mx-auto text-center">"#,
    );
    let _ = write!(
        out,
        r#"<h1 class="text-5xl font-bold mb-4">{}</h1><p class="text-xl mb-6 text-blue-100">{}</p>"#,
        escape_text(info.display_name()),
        escape_text(info.display_title()),
    );
    if !info.bio.is_empty() {
        let _ = write!(
            out,
            r#"<p class="text-lg max-w-2xl mx-auto mb-8 text-blue-50">{}</p>"#,
            escape_text(&info.bio),
        );
    }

    out.push_str(r#"<div class="flex flex-wrap justify-center gap-6">"#);
    if !info.email.is_empty() {
        let _ = write!(
            out,
            r#"<a href="mailto:{}" class="hover:text-blue-200 transition-colors">{}</a>"#,
            escape_attr(&info.email),
            escape_text(&info.email),
        );
    }
    if !info.phone.is_empty() {
        let _ = write!(out, "<span>{}</span>", escape_text(&info.phone));
    }
    if !info.location.is_empty() {
        let _ = write!(out, "<span>{}</span>", escape_text(&info.location));
    }
    out.push_str("</div>");

    if info.has_links() {
        out.push_str(r#"<div class="flex justify-center space-x-4 mt-6">"#);
        let class = "p-2 bg-white/20 rounded-full hover:bg-white/30 transition-colors";
        if !info.github.is_empty() {
            push_external_link(out, class, &info.github, "GitHub");
        }
        if !info.linkedin.is_empty() {
            push_external_link(out, class, &info.linkedin, "LinkedIn");
        }
        if !info.website.is_empty() {
            push_external_link(out, class, &info.website, "Website");
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div></header>");
}

fn push_skills(out: &mut String, data: &PortfolioData) {
    if data.skills().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-16"><h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">Skills &amp; Expertise</h2><div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">"#,
    );
    for skill in data.skills() {
        let _ = write!(
            out,
            r#"<div class="bg-white p-6 rounded-xl shadow-md border border-gray-100"><div class="flex items-center justify-between mb-3"><h3 class="font-semibold text-gray-800">{}</h3><span class="px-2 py-1 text-xs rounded-full {}">{}</span></div>{}</div>"#,
            escape_text(skill.name()),
            category_badge_class(skill),
            skill.category(),
            level_dots(skill.level()),
        );
    }
    out.push_str("</div></section>");
}

fn category_badge_class(skill: &crate::model::Skill) -> &'static str {
    use crate::model::SkillCategory;
    match skill.category() {
        SkillCategory::Technical => "bg-blue-100 text-blue-800",
        SkillCategory::Soft => "bg-green-100 text-green-800",
        SkillCategory::Language => "bg-purple-100 text-purple-800",
    }
}

fn level_dots(level: SkillLevel) -> String {
    let mut dots = String::from(r#"<div class="flex space-x-1">"#);
    for i in 1..=5u8 {
        let fill = if i <= level.get() { "bg-blue-600" } else { "bg-gray-200" };
        let _ = write!(dots, r#"<div class="w-2 h-2 rounded-full {fill}"></div>"#);
    }
    dots.push_str("</div>");
    dots
}

fn push_projects(out: &mut String, data: &PortfolioData) {
    if data.projects().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-16"><h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">Featured Projects</h2><div class="grid grid-cols-1 md:grid-cols-2 gap-8">"#,
    );
    for project in data.projects() {
        out.push_str(
            r#"<div class="bg-white rounded-xl shadow-lg border border-gray-100 overflow-hidden"><div class="p-6">"#,
        );
        let _ = write!(
            out,
            r#"<div class="flex items-center justify-between mb-4"><h3 class="text-xl font-bold text-gray-800">{}</h3>{}</div>"#,
            escape_text(project.title()),
            if project.featured() {
                r#"<span class="text-yellow-500" title="Featured">&#9733;</span>"#
            } else {
                ""
            },
        );
        let _ = write!(
            out,
            r#"<p class="text-gray-600 mb-4">{}</p>"#,
            escape_text(project.description()),
        );
        if !project.technologies().is_empty() {
            out.push_str(r#"<div class="flex flex-wrap gap-2 mb-4">"#);
            push_tech_pills(
                out,
                "px-3 py-1 bg-blue-100 text-blue-800 text-sm rounded-full",
                project.technologies(),
            );
            out.push_str("</div>");
        }
        out.push_str(r#"<div class="flex space-x-4">"#);
        if let Some(link) = project.link() {
            push_external_link(
                out,
                "text-blue-600 hover:text-blue-800 transition-colors",
                link,
                "Live Demo",
            );
        }
        if let Some(github) = project.github() {
            push_external_link(
                out,
                "text-gray-600 hover:text-gray-800 transition-colors",
                github,
                "Code",
            );
        }
        out.push_str("</div></div></div>");
    }
    out.push_str("</div></section>");
}

fn push_experience(out: &mut String, data: &PortfolioData) {
    if data.experience().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-16"><h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">Professional Experience</h2><div class="space-y-8">"#,
    );
    for exp in data.experience() {
        out.push_str(r#"<div class="bg-white p-8 rounded-xl shadow-lg border border-gray-100">"#);
        let _ = write!(
            out,
            r#"<h3 class="text-xl font-bold text-gray-800">{}</h3><p class="text-lg text-blue-600 font-semibold">{}</p><p class="text-gray-500 mb-4">{} &middot; {} - {}</p>"#,
            escape_text(exp.position()),
            escape_text(exp.company()),
            escape_text(exp.location()),
            escape_text(exp.start_date()),
            escape_text(exp.end_date_label()),
        );
        if !exp.description().is_empty() {
            let _ = write!(
                out,
                r#"<p class="text-gray-600 mb-4">{}</p>"#,
                escape_text(exp.description()),
            );
        }
        if !exp.achievements().is_empty() {
            out.push_str(
                r#"<h4 class="font-semibold text-gray-800 mb-2">Key Achievements:</h4><ul class="space-y-2">"#,
            );
            push_achievement_items(out, "text-blue-600 mr-3", exp.achievements());
            out.push_str("</ul>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
}

fn push_education(out: &mut String, data: &PortfolioData) {
    if data.education().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-16"><h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">Education</h2><div class="space-y-6">"#,
    );
    for edu in data.education() {
        out.push_str(r#"<div class="bg-white p-6 rounded-xl shadow-lg border border-gray-100">"#);
        let _ = write!(
            out,
            r#"<h3 class="text-xl font-bold text-gray-800">{}</h3><p class="text-lg text-blue-600 font-semibold">{}</p>"#,
            escape_text(edu.degree()),
            escape_text(edu.institution()),
        );
        out.push_str(r#"<p class="text-gray-500 mb-4">"#);
        if !edu.field().is_empty() {
            let _ = write!(out, "{} &middot; ", escape_text(edu.field()));
        }
        let _ = write!(
            out,
            "{} - {}",
            escape_text(edu.start_date()),
            escape_text(edu.end_date()),
        );
        if let Some(gpa) = edu.gpa() {
            let _ = write!(out, " &middot; GPA: {}", escape_text(gpa));
        }
        out.push_str("</p>");
        if !edu.achievements().is_empty() {
            out.push_str(
                r#"<h4 class="font-semibold text-gray-800 mb-2">Achievements &amp; Honors:</h4><ul class="space-y-1">"#,
            );
            push_achievement_items(out, "text-blue-600 mr-3", edu.achievements());
            out.push_str("</ul>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
}

fn push_footer(out: &mut String, data: &PortfolioData) {
    let _ = write!(
        out,
        r#"<footer class="bg-gray-900 text-white py-8"><div class="container mx-auto px-6 text-center"><p class="text-gray-400">&copy; {}. All rights reserved.</p><p class="text-sm text-gray-500 mt-2">Generated with Folio</p></div></footer>"#,
        escape_text(data.personal_info().display_name()),
    );
}
