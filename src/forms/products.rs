use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, deserialize_present, sanitize_inline_text};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The payload did not include `product_name`.
    #[error("product name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The payload did not include `price` or it was blank.
    #[error("product price is required")]
    MissingPrice,
    /// The price is not a non-negative decimal number.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
}

/// Price as sent by clients: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    fn parse(&self) -> ProductFormResult<f64> {
        let value = match self {
            PriceInput::Number(value) => *value,
            PriceInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ProductFormError::MissingPrice);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| ProductFormError::InvalidPrice {
                        value: text.clone(),
                    })?
            }
        };

        if !value.is_finite() || value < 0.0 {
            return Err(ProductFormError::InvalidPrice {
                value: value.to_string(),
            });
        }

        Ok(value)
    }
}

/// JSON body accepted when creating a product.
///
/// ```json
/// { "product_name": "Basketball", "price": 200.00, "stock": 3, "tagIds": [1, 2, 3, 4] }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub product_name: Option<String>,
    pub price: Option<PriceInput>,
    /// Falls back to the default stock when omitted.
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i32>>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = self.product_name.ok_or(ProductFormError::MissingName)?;
        let sanitized_name = sanitize_inline_text(&name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let price = self
            .price
            .as_ref()
            .ok_or(ProductFormError::MissingPrice)?
            .parse()?;

        let mut new_product = NewProduct::new(sanitized_name, price);

        if let Some(stock) = self.stock {
            new_product = new_product.with_stock(stock);
        }

        if let Some(category_id) = self.category_id {
            new_product = new_product.with_category_id(category_id);
        }

        if let Some(tag_ids) = self.tag_ids {
            new_product = new_product.with_tag_ids(tag_ids);
        }

        Ok(new_product)
    }
}

/// JSON body accepted when updating a product. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub product_name: Option<String>,
    pub price: Option<PriceInput>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    /// `null` unassigns the category, a missing key leaves it untouched.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category_id: Option<Option<i32>>,
    /// Replaces every tag of the product when present.
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i32>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.product_name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.product_name(sanitized);
        }

        if let Some(price) = self.price.as_ref() {
            let price = price.parse().map_err(|err| match err {
                ProductFormError::MissingPrice => ProductFormError::InvalidPrice {
                    value: String::new(),
                },
                other => other,
            })?;
            updates = updates.price(price);
        }

        if let Some(stock) = self.stock {
            updates = updates.stock(stock);
        }

        if let Some(category_id) = self.category_id {
            updates = updates.category_id(category_id);
        }

        if let Some(tag_ids) = self.tag_ids {
            updates = updates.tag_ids(tag_ids);
        }

        Ok(updates)
    }
}
