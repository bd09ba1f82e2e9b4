use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{REFERENCE_CONFLICT, error_response, internal_error};
use crate::services::ServiceError;
use crate::services::products::{
    create_product, load_product, load_products, modify_product, remove_product,
};

pub const PRODUCT_NOT_FOUND: &str = "Product Was Not Found with This ID";
pub const PRODUCT_NOT_UPDATED: &str = "Product Was Not Found with This ID or Bad Inputs";
pub const INVALID_PRODUCT: &str = "Invalid Product Inputs!";

#[get("")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            internal_error()
        }
    }
}

#[get("/{product_id}")]
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match load_product(repo.get_ref(), product_id) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            internal_error()
        }
    }
}

/// Responds with the bare product, or with `{ newProduct, productTags }` when
/// tags were attached.
#[post("")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match create_product(repo.get_ref(), form.into_inner()) {
        Ok(created) if created.product_tags.is_empty() => {
            HttpResponse::Created().json(created.product)
        }
        Ok(created) => HttpResponse::Created().json(created),
        Err(ServiceError::Form(message)) => {
            log::debug!("Rejected product: {message}");
            error_response(StatusCode::BAD_REQUEST, INVALID_PRODUCT)
        }
        Err(ServiceError::Conflict(message)) => {
            log::warn!("Product references missing records: {message}");
            error_response(StatusCode::CONFLICT, REFERENCE_CONFLICT)
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            internal_error()
        }
    }
}

#[put("/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match modify_product(repo.get_ref(), product_id, form.into_inner()) {
        Ok(affected) => HttpResponse::Ok().json([affected]),
        Err(ServiceError::Form(message)) => {
            log::debug!("Rejected product update: {message}");
            error_response(StatusCode::BAD_REQUEST, INVALID_PRODUCT)
        }
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_UPDATED),
        Err(ServiceError::Conflict(message)) => {
            log::warn!("Product {product_id} update references missing records: {message}");
            error_response(StatusCode::CONFLICT, REFERENCE_CONFLICT)
        }
        Err(err) => {
            log::error!("Failed to modify product {product_id}: {err}");
            internal_error()
        }
    }
}

#[delete("/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match remove_product(repo.get_ref(), product_id) {
        Ok(affected) => HttpResponse::Ok().json(affected),
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to delete product {product_id}: {err}");
            internal_error()
        }
    }
}
