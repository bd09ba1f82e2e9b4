use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_tag as domain;

/// Row of `product_tags`; the unique `(product_id, tag_id)` index rejects duplicate links.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = crate::schema::product_tags)]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
#[diesel(belongs_to(super::tag::Tag, foreign_key = tag_id))]
pub struct ProductTag {
    pub id: i32,
    pub product_id: i32,
    pub tag_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Timestamps are left to the column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_tags)]
pub struct NewProductTag {
    pub product_id: i32,
    pub tag_id: i32,
}

impl From<ProductTag> for domain::ProductTag {
    fn from(row: ProductTag) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            tag_id: row.tag_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<domain::NewProductTag> for NewProductTag {
    fn from(link: domain::NewProductTag) -> Self {
        Self {
            product_id: link.product_id,
            tag_id: link.tag_id,
        }
    }
}
