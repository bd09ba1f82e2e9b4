use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::products,
    belongs_to(super::category::Category, foreign_key = category_id)
)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub product_name: &'a str,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<i32>,
}

/// Changeset where `None` skips the column; `category_id: Some(None)` writes NULL.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub product_name: Option<&'a str>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<Option<i32>>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            product_name: value.product_name,
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            product_name: value.product_name.as_str(),
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            product_name: value.product_name.as_deref(),
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
            updated_at: value.updated_at,
        }
    }
}
