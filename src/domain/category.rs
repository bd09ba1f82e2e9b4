use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub category_name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Category together with every product assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    #[serde(rename = "Products")]
    pub products: Vec<Product>,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub category_name: String,
}

impl NewCategory {
    /// Construct a new category payload with a trimmed name.
    pub fn new(category_name: impl Into<String>) -> Self {
        let category_name = category_name.into().trim().to_string();
        Self { category_name }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategory {
    /// Updated name of the category.
    pub category_name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a rename patch stamped with the current time.
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
