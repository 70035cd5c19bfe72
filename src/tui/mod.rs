// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

//! Terminal UI.
//!
//! The interactive wizard shell (ratatui + crossterm): six form steps
//! over one in-memory [`PortfolioData`], a live HTML preview pane, and
//! browser/clipboard export. Editors hold drafts only; every committed
//! change goes through [`crate::ops::update_field`].

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::export::{BrowserSink, DocumentSink};
use crate::model::{
    Education, EntryId, EntryIdSource, Experience, PersonalInfo, PortfolioData, Project, Skill,
    SkillCategory, SkillLevel, TemplateKind,
};
use crate::ops::{
    commit_draft, patch_entry, remove_entry, update_field, EducationDraft, ExperienceDraft,
    PortfolioField, ProjectDraft, SkillDraft,
};
use crate::render::{render_document, render_template};

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅵 🅾 🅻 🅸 🅾 ";
const TOAST_TTL: Duration = Duration::from_secs(4);
const FIELD_LABEL_WIDTH: usize = 14;

/// One wizard step; the order here is the wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PersonalInfo,
    Skills,
    Projects,
    Experience,
    Education,
    Template,
}

impl Step {
    pub const ALL: [Self; 6] = [
        Self::PersonalInfo,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Education,
        Self::Template,
    ];
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::Skills => 1,
            Self::Projects => 2,
            Self::Experience => 3,
            Self::Education => 4,
            Self::Template => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Template => "Template",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Steps that edit one of the four entry collections.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Skills | Self::Projects | Self::Experience | Self::Education)
    }
}

/// Runs the interactive wizard against an empty portfolio.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_portfolio(PortfolioData::new())
}

pub fn run_with_portfolio(data: PortfolioData) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(data);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Multiline,
    Toggle,
    Level,
    Category,
}

struct FieldSpec {
    label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
}

const fn text_field(label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec { label, placeholder, kind: FieldKind::Text }
}

const PERSONAL_FIELDS: [FieldSpec; 9] = [
    text_field("Name", "Ada Lovelace"),
    text_field("Title", "Software Engineer"),
    text_field("Email", "ada@example.com"),
    text_field("Phone", "+1 555 0100"),
    text_field("Location", "London, UK"),
    text_field("Website", "https://example.com"),
    text_field("LinkedIn", "https://linkedin.com/in/ada"),
    text_field("GitHub", "https://github.com/ada"),
    text_field("Bio", "A short professional summary"),
];

const SKILL_FIELDS: [FieldSpec; 3] = [
    text_field("Name", "React, JavaScript, ..."),
    FieldSpec { label: "Level", placeholder: "", kind: FieldKind::Level },
    FieldSpec { label: "Category", placeholder: "", kind: FieldKind::Category },
];

const PROJECT_FIELDS: [FieldSpec; 6] = [
    text_field("Title", "My Awesome Project"),
    text_field("Description", "Purpose and key features"),
    text_field("Technologies", "React, TypeScript, Node.js"),
    text_field("Live URL", "https://myproject.com"),
    text_field("GitHub", "https://github.com/user/project"),
    FieldSpec { label: "Featured", placeholder: "", kind: FieldKind::Toggle },
];

const EXPERIENCE_FIELDS: [FieldSpec; 8] = [
    text_field("Company", "Acme Corp"),
    text_field("Position", "Senior Engineer"),
    text_field("Location", "Remote"),
    text_field("Start date", "2021-03"),
    text_field("End date", "2024-05"),
    FieldSpec { label: "Current", placeholder: "", kind: FieldKind::Toggle },
    text_field("Description", "What the role covered"),
    FieldSpec {
        label: "Achievements",
        placeholder: "One per line (Ctrl-n)",
        kind: FieldKind::Multiline,
    },
];

const EDUCATION_FIELDS: [FieldSpec; 7] = [
    text_field("Institution", "MIT"),
    text_field("Degree", "BSc Computer Science"),
    text_field("Field", "Computer Science"),
    text_field("Start date", "2017-09"),
    text_field("End date", "2021-06"),
    text_field("GPA", "3.9"),
    FieldSpec {
        label: "Achievements",
        placeholder: "One per line (Ctrl-n)",
        kind: FieldKind::Multiline,
    },
];

fn fields_for(step: Step) -> &'static [FieldSpec] {
    match step {
        Step::PersonalInfo => &PERSONAL_FIELDS,
        Step::Skills => &SKILL_FIELDS,
        Step::Projects => &PROJECT_FIELDS,
        Step::Experience => &EXPERIENCE_FIELDS,
        Step::Education => &EDUCATION_FIELDS,
        Step::Template => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditTarget {
    Field(usize),
    SkillRename(EntryId),
}

#[derive(Debug, Clone)]
struct EditSession {
    target: EditTarget,
    buffer: String,
    multiline: bool,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    data: PortfolioData,
    ids: EntryIdSource,
    step: Step,
    focus: Focus,
    field_cursor: usize,
    entries_state: ListState,
    editing: Option<EditSession>,
    skill_draft: SkillDraft,
    project_draft: ProjectDraft,
    experience_draft: ExperienceDraft,
    education_draft: EducationDraft,
    show_preview: bool,
    preview_scroll: u16,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    sink: BrowserSink,
    should_quit: bool,
}

impl App {
    fn new(data: PortfolioData) -> Self {
        Self {
            data,
            ids: EntryIdSource::new(),
            step: Step::PersonalInfo,
            focus: Focus::Form,
            field_cursor: 0,
            entries_state: ListState::default(),
            editing: None,
            skill_draft: SkillDraft::default(),
            project_draft: ProjectDraft::default(),
            experience_draft: ExperienceDraft::default(),
            education_draft: EducationDraft::default(),
            show_preview: false,
            preview_scroll: 0,
            show_help: false,
            help_scroll: 0,
            toast: None,
            sink: BrowserSink::from_env(),
            should_quit: false,
        }
    }

    /// The single write path into the model.
    fn apply(&mut self, field: PortfolioField) {
        self.data = update_field(&self.data, field);
        self.ensure_entry_selection();
    }

    // Step controller. Transitions never touch the model.

    fn step_next(&mut self) {
        match self.step.next() {
            Some(next) => self.enter_step(next),
            None => {
                // Last step: surface the preview instead of advancing.
                self.show_preview = true;
                self.focus = Focus::Preview;
            }
        }
    }

    fn step_prev(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.enter_step(prev);
        }
    }

    fn step_jump(&mut self, index: usize) {
        if let Some(step) = Step::from_index(index) {
            self.enter_step(step);
        }
    }

    fn enter_step(&mut self, step: Step) {
        self.step = step;
        self.field_cursor = 0;
        self.focus = Focus::Form;
        self.editing = None;
        self.ensure_entry_selection();
    }

    fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
        if !self.show_preview && self.focus == Focus::Preview {
            self.focus = Focus::Form;
        }
    }

    fn available_panes(&self) -> Vec<Focus> {
        let mut panes = vec![Focus::Form];
        if self.step.is_collection() && self.entry_count() > 0 {
            panes.push(Focus::Entries);
        }
        if self.show_preview {
            panes.push(Focus::Preview);
        }
        panes
    }

    fn cycle_focus(&mut self, forward: bool) {
        let panes = self.available_panes();
        let current = panes.iter().position(|pane| *pane == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % panes.len()
        } else {
            (current + panes.len() - 1) % panes.len()
        };
        self.focus = panes[next];
    }

    // Field access for the active step's form.

    fn field_value(&self, index: usize) -> String {
        match self.step {
            Step::PersonalInfo => {
                let info = self.data.personal_info();
                match index {
                    0 => info.name.clone(),
                    1 => info.title.clone(),
                    2 => info.email.clone(),
                    3 => info.phone.clone(),
                    4 => info.location.clone(),
                    5 => info.website.clone(),
                    6 => info.linkedin.clone(),
                    7 => info.github.clone(),
                    _ => info.bio.clone(),
                }
            }
            Step::Skills => match index {
                0 => self.skill_draft.name.clone(),
                1 => format!(
                    "{} {}",
                    level_meter(self.skill_draft.level),
                    self.skill_draft.level.label()
                ),
                _ => self.skill_draft.category.label().to_owned(),
            },
            Step::Projects => match index {
                0 => self.project_draft.title.clone(),
                1 => self.project_draft.description.clone(),
                2 => self.project_draft.technologies.clone(),
                3 => self.project_draft.link.clone(),
                4 => self.project_draft.github.clone(),
                _ => toggle_mark(self.project_draft.featured).to_owned(),
            },
            Step::Experience => match index {
                0 => self.experience_draft.company.clone(),
                1 => self.experience_draft.position.clone(),
                2 => self.experience_draft.location.clone(),
                3 => self.experience_draft.start_date.clone(),
                4 => self.experience_draft.end_date.clone(),
                5 => toggle_mark(self.experience_draft.current).to_owned(),
                6 => self.experience_draft.description.clone(),
                _ => self.experience_draft.achievements.clone(),
            },
            Step::Education => match index {
                0 => self.education_draft.institution.clone(),
                1 => self.education_draft.degree.clone(),
                2 => self.education_draft.field.clone(),
                3 => self.education_draft.start_date.clone(),
                4 => self.education_draft.end_date.clone(),
                5 => self.education_draft.gpa.clone(),
                _ => self.education_draft.achievements.clone(),
            },
            Step::Template => String::new(),
        }
    }

    fn set_field_text(&mut self, index: usize, value: String) {
        match self.step {
            Step::PersonalInfo => {
                let mut info = self.data.personal_info().clone();
                match index {
                    0 => info.name = value,
                    1 => info.title = value,
                    2 => info.email = value,
                    3 => info.phone = value,
                    4 => info.location = value,
                    5 => info.website = value,
                    6 => info.linkedin = value,
                    7 => info.github = value,
                    _ => info.bio = value,
                }
                self.apply(PortfolioField::PersonalInfo(info));
            }
            Step::Skills => {
                if index == 0 {
                    self.skill_draft.name = value;
                }
            }
            Step::Projects => match index {
                0 => self.project_draft.title = value,
                1 => self.project_draft.description = value,
                2 => self.project_draft.technologies = value,
                3 => self.project_draft.link = value,
                4 => self.project_draft.github = value,
                _ => {}
            },
            Step::Experience => match index {
                0 => self.experience_draft.company = value,
                1 => self.experience_draft.position = value,
                2 => self.experience_draft.location = value,
                3 => self.experience_draft.start_date = value,
                4 => self.experience_draft.end_date = value,
                6 => self.experience_draft.description = value,
                7 => self.experience_draft.achievements = value,
                _ => {}
            },
            Step::Education => match index {
                0 => self.education_draft.institution = value,
                1 => self.education_draft.degree = value,
                2 => self.education_draft.field = value,
                3 => self.education_draft.start_date = value,
                4 => self.education_draft.end_date = value,
                5 => self.education_draft.gpa = value,
                6 => self.education_draft.achievements = value,
                _ => {}
            },
            Step::Template => {}
        }
    }

    fn toggle_field(&mut self, index: usize) {
        match self.step {
            Step::Projects if index == 5 => {
                self.project_draft.featured = !self.project_draft.featured;
            }
            Step::Experience if index == 5 => {
                self.experience_draft.current = !self.experience_draft.current;
            }
            _ => {}
        }
    }

    fn adjust_field(&mut self, index: usize, up: bool) {
        if self.step != Step::Skills {
            return;
        }
        match index {
            1 => {
                self.skill_draft.level = if up {
                    self.skill_draft.level.up()
                } else {
                    self.skill_draft.level.down()
                };
            }
            2 => self.skill_draft.category = self.skill_draft.category.cycle(),
            _ => {}
        }
    }

    // Draft commit + entry list operations.

    fn add_draft_entry(&mut self) {
        match self.step {
            Step::Skills => {
                if let Some(skills) =
                    commit_draft(&self.skill_draft, self.data.skills(), &mut self.ids)
                {
                    self.apply(PortfolioField::Skills(skills));
                    self.skill_draft = SkillDraft::default();
                    self.set_toast("Added skill");
                }
            }
            Step::Projects => {
                if let Some(projects) =
                    commit_draft(&self.project_draft, self.data.projects(), &mut self.ids)
                {
                    self.apply(PortfolioField::Projects(projects));
                    self.project_draft = ProjectDraft::default();
                    self.set_toast("Added project");
                }
            }
            Step::Experience => {
                if let Some(experience) =
                    commit_draft(&self.experience_draft, self.data.experience(), &mut self.ids)
                {
                    self.apply(PortfolioField::Experience(experience));
                    self.experience_draft = ExperienceDraft::default();
                    self.set_toast("Added experience");
                }
            }
            Step::Education => {
                if let Some(education) =
                    commit_draft(&self.education_draft, self.data.education(), &mut self.ids)
                {
                    self.apply(PortfolioField::Education(education));
                    self.education_draft = EducationDraft::default();
                    self.set_toast("Added education");
                }
            }
            Step::PersonalInfo | Step::Template => {}
        }
    }

    fn entry_count(&self) -> usize {
        match self.step {
            Step::Skills => self.data.skills().len(),
            Step::Projects => self.data.projects().len(),
            Step::Experience => self.data.experience().len(),
            Step::Education => self.data.education().len(),
            Step::PersonalInfo | Step::Template => 0,
        }
    }

    fn entry_labels(&self) -> Vec<String> {
        match self.step {
            Step::Skills => self.data.skills().iter().map(skill_entry_label).collect(),
            Step::Projects => self.data.projects().iter().map(project_entry_label).collect(),
            Step::Experience => {
                self.data.experience().iter().map(experience_entry_label).collect()
            }
            Step::Education => self.data.education().iter().map(education_entry_label).collect(),
            Step::PersonalInfo | Step::Template => Vec::new(),
        }
    }

    fn selected_entry_id(&self) -> Option<EntryId> {
        let index = self.entries_state.selected()?;
        match self.step {
            Step::Skills => self.data.skills().get(index).map(|entry| entry.id().clone()),
            Step::Projects => self.data.projects().get(index).map(|entry| entry.id().clone()),
            Step::Experience => self.data.experience().get(index).map(|entry| entry.id().clone()),
            Step::Education => self.data.education().get(index).map(|entry| entry.id().clone()),
            Step::PersonalInfo | Step::Template => None,
        }
    }

    fn ensure_entry_selection(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            self.entries_state.select(None);
            if self.focus == Focus::Entries {
                self.focus = Focus::Form;
            }
            return;
        }
        let selected = self.entries_state.selected().unwrap_or(0).min(count - 1);
        self.entries_state.select(Some(selected));
    }

    fn select_entry_prev(&mut self) {
        let Some(selected) = self.entries_state.selected() else {
            return;
        };
        self.entries_state.select(Some(selected.saturating_sub(1)));
    }

    fn select_entry_next(&mut self) {
        let count = self.entry_count();
        let Some(selected) = self.entries_state.selected() else {
            return;
        };
        if selected + 1 < count {
            self.entries_state.select(Some(selected + 1));
        }
    }

    fn remove_selected_entry(&mut self) {
        let Some(id) = self.selected_entry_id() else {
            return;
        };
        match self.step {
            Step::Skills => {
                let skills = remove_entry(self.data.skills(), &id);
                self.apply(PortfolioField::Skills(skills));
                self.set_toast("Removed skill");
            }
            Step::Projects => {
                let projects = remove_entry(self.data.projects(), &id);
                self.apply(PortfolioField::Projects(projects));
                self.set_toast("Removed project");
            }
            Step::Experience => {
                let experience = remove_entry(self.data.experience(), &id);
                self.apply(PortfolioField::Experience(experience));
                self.set_toast("Removed experience");
            }
            Step::Education => {
                let education = remove_entry(self.data.education(), &id);
                self.apply(PortfolioField::Education(education));
                self.set_toast("Removed education");
            }
            Step::PersonalInfo | Step::Template => {}
        }
    }

    fn adjust_selected_skill_level(&mut self, up: bool) {
        if self.step != Step::Skills {
            return;
        }
        let Some(id) = self.selected_entry_id() else {
            return;
        };
        let skills = patch_entry(self.data.skills(), &id, |skill| {
            let level = if up { skill.level().up() } else { skill.level().down() };
            skill.set_level(level);
        });
        self.apply(PortfolioField::Skills(skills));
    }

    fn cycle_selected_skill_category(&mut self) {
        if self.step != Step::Skills {
            return;
        }
        let Some(id) = self.selected_entry_id() else {
            return;
        };
        let skills = patch_entry(self.data.skills(), &id, |skill| {
            skill.set_category(skill.category().cycle());
        });
        self.apply(PortfolioField::Skills(skills));
    }

    fn toggle_selected_project_featured(&mut self) {
        if self.step != Step::Projects {
            return;
        }
        let Some(id) = self.selected_entry_id() else {
            return;
        };
        let projects = patch_entry(self.data.projects(), &id, Project::toggle_featured);
        self.apply(PortfolioField::Projects(projects));
    }

    fn start_rename_selected_skill(&mut self) {
        if self.step != Step::Skills {
            return;
        }
        let Some(index) = self.entries_state.selected() else {
            return;
        };
        let Some(skill) = self.data.skills().get(index) else {
            return;
        };
        self.editing = Some(EditSession {
            target: EditTarget::SkillRename(skill.id().clone()),
            buffer: skill.name().to_owned(),
            multiline: false,
        });
    }

    fn apply_template(&mut self, template: TemplateKind) {
        self.apply(PortfolioField::Template(template));
        self.set_toast(format!("Template: {}", template.label()));
    }

    // Editing.

    fn start_edit_field(&mut self, index: usize) {
        let Some(spec) = fields_for(self.step).get(index) else {
            return;
        };
        match spec.kind {
            FieldKind::Text | FieldKind::Multiline => {
                self.editing = Some(EditSession {
                    target: EditTarget::Field(index),
                    buffer: self.field_value(index),
                    multiline: spec.kind == FieldKind::Multiline,
                });
            }
            FieldKind::Toggle => self.toggle_field(index),
            FieldKind::Level | FieldKind::Category => self.adjust_field(index, true),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                editing.buffer.pop();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if editing.multiline {
                    editing.buffer.push('\n');
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editing.buffer.push(ch);
            }
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let Some(editing) = self.editing.take() else {
            return;
        };
        match editing.target {
            EditTarget::Field(index) => self.set_field_text(index, editing.buffer),
            EditTarget::SkillRename(id) => {
                let skills = patch_entry(self.data.skills(), &id, |skill| {
                    skill.set_name(editing.buffer.clone());
                });
                self.apply(PortfolioField::Skills(skills));
            }
        }
    }

    // Export & clipboard.

    fn export_to_browser(&mut self) {
        let html = render_document(&self.data);
        let name = self.data.personal_info().display_name().to_owned();
        match self.sink.publish(&name, &html) {
            Ok(()) => self.set_toast("Opened portfolio export in browser"),
            Err(err) => self.set_toast(format!("Export failed: {err}")),
        }
    }

    fn yank_document(&mut self) {
        let html = render_document(&self.data);
        match copy_to_clipboard(&html) {
            Ok(backend) => self.set_toast(format!("Yanked portfolio HTML ({backend})")),
            Err(err) => self.set_toast(format!("Clipboard error: {err}")),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast =
            Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }

    fn expire_toast(&mut self) {
        if matches!(&self.toast, Some(toast) if Instant::now() >= toast.expires_at) {
            self.toast = None;
        }
    }

    // Key routing.

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_event(key) {
            self.should_quit = true;
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return false;
        }

        if self.editing.is_some() {
            self.handle_edit_key(key);
            return false;
        }

        self.handle_browse_key(key.code)
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Char('[') => self.step_prev(),
            KeyCode::Char(']') => self.step_next(),
            KeyCode::Char(digit @ '1'..='6') => {
                self.step_jump(digit as usize - '1' as usize);
            }
            KeyCode::Char('p') => self.toggle_preview(),
            KeyCode::Char('o') => self.export_to_browser(),
            KeyCode::Char('y') => self.yank_document(),
            _ => match self.focus {
                Focus::Form => self.handle_form_key(code),
                Focus::Entries => self.handle_entries_key(code),
                Focus::Preview => self.handle_preview_key(code),
            },
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        if self.step == Step::Template {
            self.handle_template_key(code);
            return;
        }

        let field_count = fields_for(self.step).len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.field_cursor = self.field_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.field_cursor + 1 < field_count {
                    self.field_cursor += 1;
                }
            }
            KeyCode::Enter => self.start_edit_field(self.field_cursor),
            KeyCode::Char(' ') => self.toggle_field(self.field_cursor),
            KeyCode::Left | KeyCode::Char('h') => self.adjust_field(self.field_cursor, false),
            KeyCode::Right | KeyCode::Char('l') => self.adjust_field(self.field_cursor, true),
            KeyCode::Char('a') => self.add_draft_entry(),
            _ => {}
        }
    }

    fn handle_template_key(&mut self, code: KeyCode) {
        let count = TemplateKind::ALL.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.field_cursor = self.field_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.field_cursor + 1 < count {
                    self.field_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(template) = TemplateKind::ALL.get(self.field_cursor) {
                    self.apply_template(*template);
                }
            }
            _ => {}
        }
    }

    fn handle_entries_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_entry_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_entry_next(),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected_entry(),
            KeyCode::Char('e') => self.start_rename_selected_skill(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_selected_skill_level(true),
            KeyCode::Char('-') => self.adjust_selected_skill_level(false),
            KeyCode::Char('c') => self.cycle_selected_skill_category(),
            KeyCode::Char('f') => self.toggle_selected_project_featured(),
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
            KeyCode::PageUp => self.preview_scroll = self.preview_scroll.saturating_sub(10),
            KeyCode::PageDown => self.preview_scroll = self.preview_scroll.saturating_add(10),
            KeyCode::Home => self.preview_scroll = 0,
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    app.expire_toast();

    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let progress_area = layout[0];
    let main_area = layout[1];
    let status_area = layout[2];

    frame.render_widget(Paragraph::new(Text::from(progress_lines(app.step))), progress_area);

    let (form_area, preview_area) = if app.show_preview {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_area);
        (panes[0], Some(panes[1]))
    } else {
        (main_area, None)
    };

    if app.step.is_collection() {
        let fields_height = fields_for(app.step).len() as u16 + 2;
        let column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(fields_height), Constraint::Min(0)])
            .split(form_area);
        draw_form(frame, app, column[0]);
        draw_entries(frame, app, column[1]);
    } else {
        draw_form(frame, app, form_area);
    }

    if let Some(preview_area) = preview_area {
        draw_preview(frame, app, preview_area);
    }

    let compact = footer_uses_compact_mode(area);
    frame.render_widget(Paragraph::new(footer_line(app, compact)), status_area);

    if app.show_help {
        draw_help(frame, app, area);
    }
}

fn draw_form(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Form;

    if app.step == Step::Template {
        draw_template_picker(frame, app, area, focused);
        return;
    }

    let tail = if app.step.is_collection() { Some("— draft") } else { None };
    let title = view_title(app.step.title(), tail);

    let mut lines = Vec::<Line<'static>>::new();
    for (index, spec) in fields_for(app.step).iter().enumerate() {
        lines.push(form_field_line(app, index, spec, focused));
    }

    let form = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(panel_border_style(focused)),
    );
    frame.render_widget(form, area);
}

fn form_field_line(app: &App, index: usize, spec: &FieldSpec, focused: bool) -> Line<'static> {
    let row_bg = if focused && app.field_cursor == index {
        Some(Color::Rgb(40, 40, 40))
    } else {
        None
    };
    let with_bg = |style: Style| match row_bg {
        Some(bg) => style.bg(bg),
        None => style,
    };

    let label = Span::styled(
        format!("{:<FIELD_LABEL_WIDTH$}", spec.label),
        with_bg(Style::default().fg(Color::Gray)),
    );

    let editing_here = matches!(
        &app.editing,
        Some(EditSession { target: EditTarget::Field(editing_index), .. })
            if *editing_index == index
    );

    let value_span = if editing_here {
        let buffer = app
            .editing
            .as_ref()
            .map(|editing| editing.buffer.replace('\n', " ⏎ "))
            .unwrap_or_default();
        Span::styled(format!("{buffer}▌"), with_bg(Style::default().fg(Color::Yellow)))
    } else {
        let value = app.field_value(index).replace('\n', " ⏎ ");
        if value.is_empty() {
            Span::styled(
                spec.placeholder.to_owned(),
                with_bg(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
            )
        } else {
            Span::styled(value, with_bg(Style::default().fg(Color::White)))
        }
    };

    Line::from(vec![label, value_span])
}

fn draw_template_picker(frame: &mut Frame<'_>, app: &App, area: Rect, focused: bool) {
    let title = view_title("Template", Some(app.data.template().name()));

    let mut lines = Vec::<Line<'static>>::new();
    for (index, template) in TemplateKind::ALL.into_iter().enumerate() {
        let active = app.data.template() == template;
        let marker = toggle_mark(active);
        let row_bg = if focused && app.field_cursor == index {
            Some(Color::Rgb(40, 40, 40))
        } else {
            None
        };
        let with_bg = |style: Style| match row_bg {
            Some(bg) => style.bg(bg),
            None => style,
        };
        let name_style = if active {
            with_bg(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            with_bg(Style::default().fg(Color::White))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), with_bg(Style::default().fg(Color::White))),
            Span::styled(format!("{:<10}", template.label()), name_style),
            Span::styled(template.blurb().to_owned(), with_bg(Style::default().fg(Color::DarkGray))),
        ]));
    }

    let picker = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(panel_border_style(focused)),
    );
    frame.render_widget(picker, area);
}

fn draw_entries(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Entries;
    let labels = app.entry_labels();
    let title = view_title("Entries", Some(&format!("({})", labels.len())));

    let renaming = matches!(
        &app.editing,
        Some(EditSession { target: EditTarget::SkillRename(_), .. })
    );
    let selected = app.entries_state.selected();
    let items = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let text = if renaming && selected == Some(index) {
                let buffer = app
                    .editing
                    .as_ref()
                    .map(|editing| editing.buffer.clone())
                    .unwrap_or_default();
                format!("{buffer}▌")
            } else {
                label
            };
            ListItem::new(Line::from(text))
        })
        .collect::<Vec<_>>();

    let highlight = if focused {
        Style::default().bg(Color::Rgb(40, 40, 40)).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(panel_border_style(focused)),
        )
        .highlight_style(highlight);
    frame.render_stateful_widget(list, area, &mut app.entries_state);
}

fn draw_preview(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == Focus::Preview;
    let title = view_title("Preview", Some(app.data.template().name()));

    let preview = Paragraph::new(render_template(&app.data))
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(panel_border_style(focused)),
        );
    frame.render_widget(preview, area);
}

fn draw_help(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let popup = centered_rect(area, 70, 80);
    frame.render_widget(Clear, popup);

    let text = help_lines().join("\n");
    let help = Paragraph::new(text)
        .scroll((app.help_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(view_title("Help", None)));
    frame.render_widget(help, popup);
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// A filled-in sample portfolio for `--demo` runs.
pub fn demo_portfolio() -> PortfolioData {
    fn eid(value: &str) -> EntryId {
        EntryId::new(value).expect("entry id")
    }

    let mut info = PersonalInfo::default();
    info.name = "Ada Lovelace".to_owned();
    info.title = "Systems Engineer".to_owned();
    info.email = "ada@example.com".to_owned();
    info.location = "London, UK".to_owned();
    info.github = "https://github.com/ada".to_owned();
    info.bio = "Engineer with a taste for analytical machines and clean abstractions."
        .to_owned();

    let skills = vec![
        Skill::new(eid("demo-s1"), "Rust", SkillLevel::MAX, SkillCategory::Technical),
        Skill::new(eid("demo-s2"), "TypeScript", SkillLevel::clamped(4), SkillCategory::Technical),
        Skill::new(eid("demo-s3"), "Mentoring", SkillLevel::clamped(4), SkillCategory::Soft),
        Skill::new(eid("demo-s4"), "French", SkillLevel::clamped(2), SkillCategory::Language),
    ];

    let mut tracker = Project::new(
        eid("demo-p1"),
        "Orbit Tracker",
        "Real-time satellite pass predictions with a shareable dashboard.",
    );
    tracker.set_technologies(vec!["Rust".to_owned(), "WebAssembly".to_owned()]);
    tracker.set_github(Some("https://github.com/ada/orbit-tracker".to_owned()));
    tracker.set_featured(true);

    let mut notes = Project::new(
        eid("demo-p2"),
        "Margin Notes",
        "A tiny annotation layer for long-form reading.",
    );
    notes.set_technologies(vec!["TypeScript".to_owned(), "SQLite".to_owned()]);
    notes.set_link(Some("https://margin-notes.example.com".to_owned()));

    let mut current_role = Experience::new(eid("demo-x1"), "Analytical Engines Ltd", "Staff Engineer");
    current_role.set_location("London, UK".to_owned());
    current_role.set_start_date("2022-01".to_owned());
    current_role.set_current(true);
    current_role.set_description("Own the computation core and its public API.".to_owned());
    current_role.set_achievements(vec![
        "Cut end-to-end latency by 40%".to_owned(),
        "Led a team of five through two major releases".to_owned(),
    ]);

    let mut prior_role = Experience::new(eid("demo-x2"), "Difference Works", "Software Engineer");
    prior_role.set_location("Cambridge, UK".to_owned());
    prior_role.set_start_date("2019-06".to_owned());
    prior_role.set_end_date("2021-12".to_owned());
    prior_role.set_description("Built data pipelines for tabulation workloads.".to_owned());

    let mut degree = Education::new(eid("demo-e1"), "University of London", "BSc Mathematics");
    degree.set_field("Mathematics".to_owned());
    degree.set_start_date("2015-09".to_owned());
    degree.set_end_date("2019-06".to_owned());
    degree.set_gpa(Some("3.9".to_owned()));
    degree.set_achievements(vec!["First-class honours".to_owned()]);

    let data = PortfolioData::new();
    let data = update_field(&data, PortfolioField::PersonalInfo(info));
    let data = update_field(&data, PortfolioField::Skills(skills));
    let data = update_field(&data, PortfolioField::Projects(vec![tracker, notes]));
    let data = update_field(&data, PortfolioField::Experience(vec![current_role, prior_role]));
    let data = update_field(&data, PortfolioField::Education(vec![degree]));
    update_field(&data, PortfolioField::Template(TemplateKind::Modern))
}
