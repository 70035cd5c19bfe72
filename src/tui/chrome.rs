// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

/// Layout, title, footer, progress, and style helpers used by TUI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Form,
    Entries,
    Preview,
}

fn panel_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

/// "Step 2 of 6: Skills" header plus the clickable-looking step strip.
fn progress_lines(step: Step) -> Vec<Line<'static>> {
    let index = step.index();
    let percent = ((index + 1) * 100 + Step::COUNT / 2) / Step::COUNT;

    let headline = Line::from(vec![
        Span::styled(
            format!("Step {} of {}: {}", index + 1, Step::COUNT, step.title()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {percent}% Complete"), Style::default().fg(Color::DarkGray)),
    ]);

    let mut strip = Vec::<Span<'static>>::new();
    for (i, candidate) in Step::ALL.into_iter().enumerate() {
        let style = if i <= index {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        strip.push(Span::styled(format!("{} {}", i + 1, candidate.title()), style));
        if i + 1 < Step::COUNT {
            strip.push(Span::raw("  "));
        }
    }

    vec![headline, Line::from(strip)]
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, keys: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(format!("{label} "), Style::default().fg(FOOTER_LABEL_COLOR)));
    spans.push(Span::styled(keys.to_owned(), Style::default().fg(FOOTER_KEY_COLOR)));
}

fn footer_line(app: &App, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    if let Some(editing) = &app.editing {
        push_footer_entry(&mut spans, "COMMIT", "Enter");
        push_footer_entry(&mut spans, "CANCEL", "Esc");
        if editing.multiline {
            push_footer_entry(&mut spans, "NEW LINE", "Ctrl-n");
        }
    } else if compact {
        push_footer_entry(&mut spans, "STEP", "[]");
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    } else {
        match app.focus {
            Focus::Form => {
                push_footer_entry(&mut spans, "FIELD", "jk");
                if app.step == Step::Template {
                    push_footer_entry(&mut spans, "APPLY", "Enter");
                } else {
                    push_footer_entry(&mut spans, "EDIT", "Enter");
                }
                if app.step.is_collection() {
                    push_footer_entry(&mut spans, "ADD", "a");
                }
            }
            Focus::Entries => {
                push_footer_entry(&mut spans, "ENTRY", "jk");
                push_footer_entry(&mut spans, "REMOVE", "x");
                if app.step == Step::Skills {
                    push_footer_entry(&mut spans, "RENAME", "e");
                    push_footer_entry(&mut spans, "LEVEL", "+-");
                    push_footer_entry(&mut spans, "CATEGORY", "c");
                }
                if app.step == Step::Projects {
                    push_footer_entry(&mut spans, "FEATURED", "f");
                }
            }
            Focus::Preview => {
                push_footer_entry(&mut spans, "SCROLL", "jk");
            }
        }
        push_footer_entry(&mut spans, "PANE", "Tab");
        push_footer_entry(&mut spans, "STEP", "[] 1-6");
        push_footer_entry(&mut spans, "PREVIEW", "p");
        push_footer_entry(&mut spans, "OPEN", "o");
        push_footer_entry(&mut spans, "YANK", "y");
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    }

    if let Some(toast) = &app.toast {
        spans.push(Span::styled(
            format!("  {}", toast.message),
            Style::default().fg(Color::Yellow),
        ));
    } else if !compact {
        spans.push(Span::styled(
            format!("  {FOOTER_BRAND}"),
            Style::default().fg(FOOTER_BRAND_COLOR),
        ));
    }

    Line::from(spans)
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < 100
}

/// "▰▰▰▱▱" meter for a 1..=5 level.
fn level_meter(level: SkillLevel) -> String {
    let filled = usize::from(level.get());
    let mut meter = String::new();
    for i in 1..=5 {
        meter.push(if i <= filled { '▰' } else { '▱' });
    }
    meter
}

fn toggle_mark(on: bool) -> &'static str {
    if on {
        "◼"
    } else {
        "◻"
    }
}

fn skill_entry_label(skill: &Skill) -> String {
    format!(
        "{} {}  {} ({})",
        level_meter(skill.level()),
        skill.level().label(),
        skill.name(),
        skill.category(),
    )
}

fn project_entry_label(project: &Project) -> String {
    let star = if project.featured() { "★ " } else { "" };
    if project.technologies().is_empty() {
        format!("{star}{}", project.title())
    } else {
        format!("{star}{}  [{}]", project.title(), project.technologies().join(", "))
    }
}

fn experience_entry_label(exp: &Experience) -> String {
    format!(
        "{} @ {}  ({} - {})",
        exp.position(),
        exp.company(),
        exp.start_date(),
        exp.end_date_label(),
    )
}

fn education_entry_label(edu: &Education) -> String {
    format!("{}, {}", edu.degree(), edu.institution())
}

/// Centered popup rect used by the help overlay.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn help_lines() -> Vec<&'static str> {
    vec![
        "Folio — portfolio wizard",
        "",
        "Steps",
        "  ] / [        next / previous step (next at the last step opens the preview)",
        "  1-6          jump to a step",
        "",
        "Form pane",
        "  j / k        move between fields",
        "  Enter        edit the selected field (commit with Enter, cancel with Esc)",
        "  Space        flip a checkbox field",
        "  h / l        adjust level or category fields",
        "  a            add the drafted entry to the portfolio",
        "  Ctrl-n       insert a new line while editing an achievements field",
        "",
        "Entries pane",
        "  j / k        select an entry",
        "  x            remove the selected entry",
        "  e            rename the selected skill",
        "  + / -        adjust the selected skill's level",
        "  c            cycle the selected skill's category",
        "  f            toggle featured on the selected project",
        "",
        "Preview & export",
        "  p            show/hide the HTML preview pane",
        "  j / k        scroll the preview when focused",
        "  o            open the exported document in the browser",
        "  y            yank the exported document to the clipboard",
        "",
        "  Tab / S-Tab  cycle panes",
        "  ?            toggle this help",
        "  q            quit",
    ]
}
