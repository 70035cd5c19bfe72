// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

/// Escapes user text for an HTML text position.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes user text for a double-quoted attribute value.
pub(crate) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<a href="..." target="_blank" rel="noopener noreferrer">label</a>`
/// with the given class list.
pub(crate) fn push_external_link(out: &mut String, class: &str, href: &str, label: &str) {
    let _ = write!(
        out,
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{class}">{}</a>"#,
        escape_attr(href),
        escape_text(label),
    );
}

/// One `<span>` pill per technology, in order.
pub(crate) fn push_tech_pills(out: &mut String, class: &str, technologies: &[String]) {
    for tech in technologies {
        let _ = write!(out, r#"<span class="{class}">{}</span>"#, escape_text(tech));
    }
}

/// `<li>` bullet rows for achievement lists.
pub(crate) fn push_achievement_items(out: &mut String, bullet_class: &str, items: &[String]) {
    for item in items {
        let _ = write!(
            out,
            r#"<li class="flex items-start"><span class="{bullet_class}">&bull;</span><span class="text-gray-600">{}</span></li>"#,
            escape_text(item),
        );
    }
}
