use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a reusable tag that can be attached to multiple products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag.
    pub tag_name: String,
    /// Timestamp for when the tag record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the tag record.
    pub updated_at: NaiveDateTime,
}

/// Tag together with every product it is attached to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagWithProducts {
    #[serde(flatten)]
    pub tag: Tag,
    #[serde(rename = "Products")]
    pub products: Vec<Product>,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Human-readable name of the tag.
    pub tag_name: String,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into().trim().to_string();
        Self { tag_name }
    }
}

/// Patch data applied when updating an existing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTag {
    /// Updated human-readable name of the tag.
    pub tag_name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateTag {
    /// Build a rename patch stamped with the current time.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
