// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use crate::model::PortfolioData;

use super::html::{
    escape_attr, escape_text, push_achievement_items, push_external_link, push_tech_pills,
};

/// Gradient card colors cycled by entry index.
const CARD_GRADIENTS: [&str; 6] = [
    "bg-gradient-to-r from-orange-400 to-pink-400",
    "bg-gradient-to-r from-purple-400 to-blue-400",
    "bg-gradient-to-r from-green-400 to-cyan-400",
    "bg-gradient-to-r from-yellow-400 to-orange-400",
    "bg-gradient-to-r from-pink-400 to-purple-400",
    "bg-gradient-to-r from-blue-400 to-indigo-400",
];

fn card_gradient(index: usize) -> &'static str {
    CARD_GRADIENTS[index % CARD_GRADIENTS.len()]
}

/// Vibrant layout: layered gradient hero, color-cycled skill cards,
/// timeline experience, gradient footer.
pub fn render_creative(data: &PortfolioData) -> String {
    let mut out = String::new();
    out.push_str(
        r#"<div class="min-h-screen bg-gradient-to-br from-orange-50 via-pink-50 to-purple-50">"#,
    );
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
        r#"<header class="relative overflow-hidden"><div class="absolute inset-0 bg-gradient-to-r from-orange-500 via-pink-500 to-purple-500"></div><div class="absolute inset-0 bg-black/20"></div><div class="relative container mx-auto px-6 py-20 text-white text-center">"#,
    );
    let _ = write!(
        out,
        r#"<h1 class="text-6xl font-bold mb-4">{}</h1><p class="text-2xl mb-6">{}</p>"#,
        escape_text(info.display_name()),
        escape_text(info.display_title()),
    );
    if !info.bio.is_empty() {
        let _ = write!(
            out,
            r#"<p class="text-lg max-w-2xl mx-auto mb-8">{}</p>"#,
            escape_text(&info.bio),
        );
    }
    out.push_str(r#"<div class="flex flex-wrap justify-center gap-4">"#);
    if !info.email.is_empty() {
        let _ = write!(
            out,
            r#"<a href="mailto:{}" class="bg-white/20 px-4 py-2 rounded-full hover:bg-white/30 transition-colors">{}</a>"#,
            escape_attr(&info.email),
            escape_text(&info.email),
        );
    }
    for value in [&info.phone, &info.location] {
        if !value.is_empty() {
            let _ = write!(
                out,
                r#"<span class="bg-white/20 px-4 py-2 rounded-full">{}</span>"#,
                escape_text(value),
            );
        }
    }
    let class = "bg-white/20 px-4 py-2 rounded-full hover:bg-white/30 transition-colors";
    if !info.github.is_empty() {
        push_external_link(out, class, &info.github, "GitHub");
    }
    if !info.linkedin.is_empty() {
        push_external_link(out, class, &info.linkedin, "LinkedIn");
    }
    if !info.website.is_empty() {
        push_external_link(out, class, &info.website, "Website");
    }
    out.push_str("</div></div></header>");
}

fn push_skills(out: &mut String, data: &PortfolioData) {
    if data.skills().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-20"><h2 class="text-4xl font-bold text-gray-800 mb-12 text-center">Skills &amp; Superpowers</h2><div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">"#,
    );
    for (index, skill) in data.skills().iter().enumerate() {
        let _ = write!(
            out,
            r#"<div class="p-6 rounded-2xl text-white {}"><h3 class="font-bold text-lg mb-2">{}</h3><div class="flex items-center space-x-2"><div class="flex-1 bg-white/30 rounded-full h-2"><div class="bg-white h-2 rounded-full" style="width: {}%"></div></div><span class="text-sm font-medium">{}/5</span></div></div>"#,
            card_gradient(index),
            escape_text(skill.name()),
            skill.level().percent(),
            skill.level(),
        );
    }
    out.push_str("</div></section>");
}

fn push_projects(out: &mut String, data: &PortfolioData) {
    if data.projects().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-20"><h2 class="text-4xl font-bold text-gray-800 mb-12 text-center">Creative Showcase</h2><div class="grid grid-cols-1 md:grid-cols-2 gap-8">"#,
    );
    for project in data.projects() {
        out.push_str(r#"<div class="bg-white rounded-2xl shadow-xl overflow-hidden"><div class="p-8">"#);
        let _ = write!(
            out,
            r#"<div class="flex items-center justify-between mb-4"><h3 class="text-2xl font-bold text-gray-800">{}</h3>{}</div>"#,
            escape_text(project.title()),
            if project.featured() {
                r#"<span class="text-pink-500" title="Featured">&#9733;</span>"#
            } else {
                ""
            },
        );
        let _ = write!(
            out,
            r#"<p class="text-gray-600 mb-6">{}</p>"#,
            escape_text(project.description()),
        );
        if !project.technologies().is_empty() {
            out.push_str(r#"<div class="flex flex-wrap gap-2 mb-6">"#);
            push_tech_pills(
                out,
                "px-3 py-1 bg-gradient-to-r from-orange-100 to-pink-100 text-gray-700 text-sm rounded-full",
                project.technologies(),
            );
            out.push_str("</div>");
        }
        out.push_str(r#"<div class="flex space-x-3">"#);
        if let Some(link) = project.link() {
            push_external_link(
                out,
                "bg-gradient-to-r from-orange-500 to-pink-500 text-white px-4 py-2 rounded-full hover:shadow-lg transition-all",
                link,
                "Live Demo",
            );
        }
        if let Some(github) = project.github() {
            push_external_link(
                out,
                "bg-gray-100 text-gray-700 px-4 py-2 rounded-full hover:bg-gray-200 transition-colors",
                github,
                "Source",
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
        r#"<section class="mb-20"><h2 class="text-4xl font-bold text-gray-800 mb-12 text-center">Professional Journey</h2><div class="relative"><div class="absolute left-1/2 transform -translate-x-1/2 h-full w-1 bg-gradient-to-b from-orange-400 to-purple-400 rounded-full"></div><div class="space-y-12">"#,
    );
    for exp in data.experience() {
        out.push_str(
            r#"<div class="relative"><div class="absolute left-1/2 transform -translate-x-1/2 w-6 h-6 bg-gradient-to-r from-orange-400 to-purple-400 rounded-full border-4 border-white shadow-lg"></div><div class="bg-white p-8 rounded-2xl shadow-xl max-w-lg mx-auto mt-10">"#,
        );
        let _ = write!(
            out,
            r#"<h3 class="text-xl font-bold text-gray-800">{}</h3><p class="text-lg font-semibold bg-gradient-to-r from-orange-500 to-purple-500 bg-clip-text text-transparent">{}</p><p class="text-gray-500 mb-4">{} &middot; {} - {}</p>"#,
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
            out.push_str(r#"<ul class="space-y-2">"#);
            push_achievement_items(out, "text-pink-500 mr-3", exp.achievements());
            out.push_str("</ul>");
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div></div></section>");
}

fn push_education(out: &mut String, data: &PortfolioData) {
    if data.education().is_empty() {
        return;
    }

    out.push_str(
        r#"<section class="mb-20"><h2 class="text-4xl font-bold text-gray-800 mb-12 text-center">Academic Excellence</h2><div class="space-y-8">"#,
    );
    for edu in data.education() {
        out.push_str(
            r#"<div class="bg-white p-8 rounded-2xl shadow-xl border-l-4 border-orange-400">"#,
        );
        let _ = write!(
            out,
            r#"<h3 class="text-xl font-bold text-gray-800">{}</h3><p class="text-lg font-semibold bg-gradient-to-r from-orange-500 to-purple-500 bg-clip-text text-transparent">{}</p>"#,
            escape_text(edu.degree()),
            escape_text(edu.institution()),
        );
        out.push_str(r#"<p class="text-gray-500 mb-4">"#);
        if !edu.field().is_empty() {
            let _ = write!(out, "{} &middot; ", escape_text(edu.field()));
        }
        let _ = write!(out, "{} - {}", escape_text(edu.start_date()), escape_text(edu.end_date()));
        if let Some(gpa) = edu.gpa() {
            let _ = write!(out, " &middot; GPA: {}", escape_text(gpa));
        }
        out.push_str("</p>");
        if !edu.achievements().is_empty() {
            out.push_str(r#"<ul class="space-y-1">"#);
            push_achievement_items(out, "text-pink-500 mr-3", edu.achievements());
            out.push_str("</ul>");
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
}

fn push_footer(out: &mut String, data: &PortfolioData) {
    let _ = write!(
        out,
        r#"<footer class="bg-gradient-to-r from-orange-500 via-pink-500 to-purple-500 text-white py-12"><div class="container mx-auto px-6 text-center"><p class="text-lg">Let&#39;s create something amazing together</p><p class="text-white/80 mt-2">&copy; {}</p></div></footer>"#,
        escape_text(data.personal_info().display_name()),
    );
}

#[cfg(test)]
mod tests {
    use super::{card_gradient, render_creative, CARD_GRADIENTS};
    use crate::model::fixtures::skill;
    use crate::model::{PortfolioData, SkillCategory};
    use crate::ops::{update_field, PortfolioField};

    #[test]
    fn gradient_cycle_wraps_by_index() {
        assert_eq!(card_gradient(0), CARD_GRADIENTS[0]);
        assert_eq!(card_gradient(6), CARD_GRADIENTS[0]);
        assert_eq!(card_gradient(8), CARD_GRADIENTS[2]);
    }

    #[test]
    fn empty_model_has_no_sections() {
        let html = render_creative(&PortfolioData::new());
        assert!(!html.contains("<section"));
    }

    #[test]
    fn skills_cycle_through_the_palette_in_order() {
        let skills = (0..7)
            .map(|i| skill(&format!("s{i}"), &format!("Skill {i}"), 3, SkillCategory::Technical))
            .collect();
        let model = update_field(&PortfolioData::new(), PortfolioField::Skills(skills));

        let html = render_creative(&model);
        let first = html.find(CARD_GRADIENTS[1]).expect("second gradient");
        let again = html.rfind(CARD_GRADIENTS[0]).expect("wrapped gradient");
        assert!(first < again);
    }
}
