use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single row of the product/tag join.
///
/// The `(product_id, tag_id)` pair is unique, and the row disappears together
/// with either side of the link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductTag {
    pub id: i32,
    pub product_id: i32,
    pub tag_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Link to insert between an existing product and an existing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProductTag {
    pub product_id: i32,
    pub tag_id: i32,
}

impl NewProductTag {
    pub fn new(product_id: i32, tag_id: i32) -> Self {
        Self { product_id, tag_id }
    }
}

/// Remove repeated tag identifiers while keeping the first occurrence of each.
pub fn unique_tag_ids(tag_ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut unique = Vec::new();
    for tag_id in tag_ids {
        if !unique.contains(&tag_id) {
            unique.push(tag_id);
        }
    }
    unique
}
