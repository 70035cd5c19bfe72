// SPDX-FileCopyrightText: 2026 The Folio Authors
// SPDX-License-Identifier: MIT

use super::ids::EntryId;

/// One project entry.
///
/// `image` is carried for forward compatibility but no template renders
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: EntryId,
    title: String,
    description: String,
    technologies: Vec<String>,
    link: Option<String>,
    github: Option<String>,
    image: Option<String>,
    featured: bool,
}

impl Project {
    pub fn new(id: EntryId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            technologies: Vec::new(),
            link: None,
            github: None,
            image: None,
            featured: false,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn set_technologies(&mut self, technologies: Vec<String>) {
        self.technologies = technologies;
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn set_link(&mut self, link: Option<String>) {
        self.link = link;
    }

    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    pub fn set_github(&mut self, github: Option<String>) {
        self.github = github;
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    pub fn featured(&self) -> bool {
        self.featured
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    pub fn toggle_featured(&mut self) {
        self.featured = !self.featured;
    }
}
