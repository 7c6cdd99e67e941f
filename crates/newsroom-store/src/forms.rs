//! Form payloads accepted by the store.
//!
//! Each draft is validated before any permission check touches the store,
//! matching how the admin forms block submission on missing fields.

use newsroom_types::{Role, SiteSettings};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Article editor contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        Ok(())
    }
}

/// Category dialog contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    /// Falls back to the default color when absent.
    pub color: Option<String>,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::CategoryNameRequired);
        }
        Ok(())
    }
}

/// User dialog contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name_and_email(&self.name, &self.email)
    }
}

/// Profile settings contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

impl ProfileUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name_and_email(&self.name, &self.email)
    }
}

fn require_name_and_email(name: &str, email: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(ValidationError::NameAndEmailRequired);
    }
    Ok(())
}

pub(crate) fn validate_site_settings(settings: &SiteSettings) -> Result<(), ValidationError> {
    if settings.site_name.trim().is_empty() || settings.contact_email.trim().is_empty() {
        return Err(ValidationError::SiteNameAndEmailRequired);
    }
    Ok(())
}
