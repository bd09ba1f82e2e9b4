use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, internal_error};
use crate::services::ServiceError;
use crate::services::categories::{
    create_category, load_categories, load_category, modify_category, remove_category,
};

pub const CATEGORY_NOT_FOUND: &str = "Category Was Not Found with This ID";
pub const INVALID_CATEGORY: &str = "Invalid Category Name!, Please Try Again";

#[get("")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            internal_error()
        }
    }
}

#[get("/{category_id}")]
pub async fn show_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match load_category(repo.get_ref(), category_id) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, CATEGORY_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to load category {category_id}: {err}");
            internal_error()
        }
    }
}

#[post("")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(ServiceError::Form(message)) => {
            log::debug!("Rejected category: {message}");
            error_response(StatusCode::BAD_REQUEST, INVALID_CATEGORY)
        }
        Err(err) => {
            log::error!("Failed to create category: {err}");
            internal_error()
        }
    }
}

#[put("/{category_id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    let category_id = path.into_inner();

    match modify_category(repo.get_ref(), category_id, form.into_inner()) {
        Ok(affected) => HttpResponse::Ok().json([affected]),
        Err(ServiceError::Form(message)) => {
            log::debug!("Rejected category update: {message}");
            error_response(StatusCode::BAD_REQUEST, INVALID_CATEGORY)
        }
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, CATEGORY_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to modify category {category_id}: {err}");
            internal_error()
        }
    }
}

#[delete("/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match remove_category(repo.get_ref(), category_id) {
        Ok(affected) => HttpResponse::Ok().json(affected),
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, CATEGORY_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to delete category {category_id}: {err}");
            internal_error()
        }
    }
}
