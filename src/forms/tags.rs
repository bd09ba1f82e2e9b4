use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{NewTag, UpdateTag};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, sanitize_inline_text};

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The payload did not include `tag_name`.
    #[error("tag name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("tag name cannot be empty")]
    EmptyName,
}

/// JSON body accepted when creating or renaming a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct TagForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub tag_name: Option<String>,
}

impl TagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        let name = self.sanitized_name()?;
        Ok(NewTag::new(name))
    }

    /// Validates and sanitizes the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self, updated_at: NaiveDateTime) -> TagFormResult<UpdateTag> {
        let tag_name = self.sanitized_name()?;
        Ok(UpdateTag {
            tag_name,
            updated_at,
        })
    }

    fn sanitized_name(self) -> TagFormResult<String> {
        self.validate()?;

        let name = self.tag_name.ok_or(TagFormError::MissingName)?;
        let sanitized = sanitize_inline_text(&name);
        if sanitized.is_empty() {
            return Err(TagFormError::EmptyName);
        }

        Ok(sanitized)
    }
}
