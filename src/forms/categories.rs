use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, sanitize_inline_text};

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The payload did not include `category_name`.
    #[error("category name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// JSON body accepted when creating or renaming a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub category_name: Option<String>,
}

impl CategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        let name = self.sanitized_name()?;
        Ok(NewCategory::new(name))
    }

    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(
        self,
        updated_at: NaiveDateTime,
    ) -> CategoryFormResult<UpdateCategory> {
        let category_name = self.sanitized_name()?;
        Ok(UpdateCategory {
            category_name,
            updated_at,
        })
    }

    fn sanitized_name(self) -> CategoryFormResult<String> {
        self.validate()?;

        let name = self.category_name.ok_or(CategoryFormError::MissingName)?;
        let sanitized = sanitize_inline_text(&name);
        if sanitized.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form(name: Option<&str>) -> CategoryForm {
        CategoryForm {
            category_name: name.map(str::to_string),
        }
    }

    #[test]
    fn category_form_sanitizes_and_converts() {
        let new_category = form(Some("  Outdoor \t Gear "))
            .into_new_category()
            .expect("expected conversion to succeed");

        assert_eq!(new_category.category_name, "Outdoor Gear");
    }

    #[test]
    fn category_form_rejects_missing_name() {
        let result = form(None).into_new_category();

        assert!(matches!(result, Err(CategoryFormError::MissingName)));
    }

    #[test]
    fn category_form_rejects_empty_name() {
        assert!(matches!(
            form(Some("")).into_new_category(),
            Err(CategoryFormError::Validation(_))
        ));
        assert!(matches!(
            form(Some("   ")).into_new_category(),
            Err(CategoryFormError::EmptyName)
        ));
    }

    #[test]
    fn category_form_rejects_overlong_name() {
        let long_name = "x".repeat(129);

        let result = form(Some(&long_name)).into_new_category();

        assert!(matches!(result, Err(CategoryFormError::Validation(_))));
    }

    #[test]
    fn category_form_builds_update() {
        let updated_at = NaiveDate::from_ymd_opt(2023, 11, 14)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");

        let update = form(Some(" Shorts "))
            .into_update_category(updated_at)
            .expect("expected payload conversion to succeed");

        assert_eq!(update.category_name, "Shorts");
        assert_eq!(update.updated_at, updated_at);
    }

    #[test]
    fn category_form_deserializes_without_name() {
        let parsed: CategoryForm = serde_json::from_str("{}").expect("valid json");

        assert!(parsed.category_name.is_none());
    }
}
