use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::product_tag::{ProductTag, unique_tag_ids};
use crate::domain::tag::Tag;

/// Stock assigned to a product when the client does not provide one.
pub const DEFAULT_STOCK: i32 = 10;

/// Domain representation of a product offered in the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price of the product.
    pub price: f64,
    /// Number of units in stock.
    pub stock: i32,
    /// Category the product belongs to, if any.
    pub category_id: Option<i32>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Product expanded with its category and tags.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductWithRelations {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "Category")]
    pub category: Option<Category>,
    #[serde(rename = "Tags")]
    pub tags: Vec<Tag>,
}

/// Outcome of creating a product along with its tag associations.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CreatedProduct {
    #[serde(rename = "newProduct")]
    pub product: Product,
    #[serde(rename = "productTags")]
    pub product_tags: Vec<ProductTag>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price of the product.
    pub price: f64,
    /// Number of units in stock.
    pub stock: i32,
    /// Optional category assignment.
    pub category_id: Option<i32>,
    /// Tags attached to the product right after it is inserted.
    pub tag_ids: Vec<i32>,
}

impl NewProduct {
    /// Build a new product payload with the default stock and no category or tags.
    pub fn new(product_name: impl Into<String>, price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            stock: DEFAULT_STOCK,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }

    /// Override the default stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Assign the product to a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Attach tags to the product. Repeated identifiers are collapsed.
    pub fn with_tag_ids(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = unique_tag_ids(tag_ids);
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// `None` leaves a column untouched. `tag_ids` replaces the complete set of
/// tag associations when present, an empty list clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    /// Optional name update.
    pub product_name: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional category update, `Some(None)` unassigns the category.
    pub category_id: Option<Option<i32>>,
    /// Optional replacement for the product's tags.
    pub tag_ids: Option<Vec<i32>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = Utc::now().naive_utc();
        Self {
            product_name: None,
            price: None,
            stock: None,
            category_id: None,
            tag_ids: None,
            updated_at: now,
        }
    }

    /// Update the product name.
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Update the category, using `None` to unassign it.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Replace every tag association of the product.
    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = Some(unique_tag_ids(tag_ids));
        self
    }
}
