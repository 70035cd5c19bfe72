// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! HTML rendering for portfolios.
//!
//! Each template is a pure function from the model to a markup
//! fragment; nothing is retained between invocations. All three share
//! one omission rule: a section renders only when its backing data is
//! present, so an empty collection never produces an empty heading.

use std::fmt::Write as _;

use crate::model::{PortfolioData, TemplateKind};

pub mod classic;
pub mod creative;
mod html;
pub mod modern;

pub use classic::render_classic;
pub use creative::render_creative;
pub use modern::render_modern;

/// Fixed style preamble embedded in every exported document.
const STYLE_PREAMBLE: &str = r#"<script src="https://cdn.tailwindcss.com"></script>
<style>
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap');
body { font-family: 'Inter', sans-serif; }
</style>"#;

/// Renders the fragment for the model's selected template.
///
/// Selection is a pure lookup; `TemplateKind` is always one of the
/// three known renderers (unrecognized names are resolved to modern at
/// the string boundary, see [`TemplateKind::from_name`]).
pub fn render_template(data: &PortfolioData) -> String {
    match data.template() {
        TemplateKind::Modern => render_modern(data),
        TemplateKind::Classic => render_classic(data),
        TemplateKind::Creative => render_creative(data),
    }
}

/// Wraps the rendered fragment into a standalone HTML document with the
/// fixed style preamble — the payload handed to the export sink.
pub fn render_document(data: &PortfolioData) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(
        out,
        "<title>{} - Portfolio</title>",
        html::escape_text(data.personal_info().display_name()),
    );
    out.push_str(STYLE_PREAMBLE);
    out.push_str("\n</head>\n<body>\n");
    out.push_str(&render_template(data));
    out.push_str("\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{render_document, render_template};
    use crate::model::fixtures::skill;
    use crate::model::{PortfolioData, SkillCategory, TemplateKind};
    use crate::ops::{update_field, PortfolioField};

    fn with_template(data: &PortfolioData, template: TemplateKind) -> PortfolioData {
        update_field(data, PortfolioField::Template(template))
    }

    #[rstest]
    #[case(TemplateKind::Modern)]
    #[case(TemplateKind::Classic)]
    #[case(TemplateKind::Creative)]
    fn empty_skills_omit_the_section_everywhere(#[case] template: TemplateKind) {
        let model = with_template(&PortfolioData::new(), template);
        let html = render_template(&model);
        assert!(!html.contains("Skills"));
        assert!(!html.contains("Competencies"));
    }

    #[rstest]
    #[case("sparkly")]
    #[case("")]
    #[case("MODERN")]
    fn unrecognized_template_names_render_as_modern(#[case] name: &str) {
        let skills = vec![skill("s1", "Rust", 4, SkillCategory::Technical)];
        let model = update_field(&PortfolioData::new(), PortfolioField::Skills(skills));

        let fallback = with_template(&model, TemplateKind::from_name(name));
        let modern = with_template(&model, TemplateKind::Modern);
        assert_eq!(render_template(&fallback), render_template(&modern));
    }

    #[test]
    fn each_template_renders_distinct_markup() {
        let skills = vec![skill("s1", "Rust", 4, SkillCategory::Technical)];
        let model = update_field(&PortfolioData::new(), PortfolioField::Skills(skills));

        let modern = render_template(&with_template(&model, TemplateKind::Modern));
        let classic = render_template(&with_template(&model, TemplateKind::Classic));
        let creative = render_template(&with_template(&model, TemplateKind::Creative));
        assert_ne!(modern, classic);
        assert_ne!(classic, creative);
        assert_ne!(modern, creative);
    }

    #[test]
    fn document_wraps_fragment_with_title_and_preamble() {
        let mut info = crate::model::PersonalInfo::default();
        info.name = "Ada Lovelace".to_owned();
        let model = update_field(&PortfolioData::new(), PortfolioField::PersonalInfo(info));

        let doc = render_document(&model);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Ada Lovelace - Portfolio</title>"));
        assert!(doc.contains("cdn.tailwindcss.com"));
        assert!(doc.contains(&render_template(&model)));
        assert!(doc.trim_end().ends_with("</html>"));
    }
}
