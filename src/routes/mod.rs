use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

pub mod categories;
pub mod products;
pub mod tags;

/// Message returned for every failure the client cannot act upon.
pub const INTERNAL_ERROR: &str = "Internal Server Error";
/// Message returned for paths no handler is registered for.
pub const ROUTE_NOT_FOUND: &str = "Route Was Not Found";
/// Message returned when a write references a category or tag that does not exist.
pub const REFERENCE_CONFLICT: &str = "Referenced Category or Tag Does Not Exist";

/// JSON envelope wrapping every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub status: u16,
    pub message: &'a str,
}

/// Build an error response carrying `message` in the JSON envelope.
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorEnvelope {
        error: ErrorBody {
            status: status.as_u16(),
            message,
        },
    })
}

/// Fallback service for unmatched paths, registered as the app's default service.
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}

pub(crate) fn internal_error() -> HttpResponse {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

/// Reject undecodable JSON bodies with a 400 carrying `message`.
fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, _req| {
        log::debug!("Rejected JSON payload: {err}");
        InternalError::from_response(err, error_response(StatusCode::BAD_REQUEST, message)).into()
    })
}

/// Reject non-numeric identifiers with a 404 carrying `message`.
fn path_config(message: &'static str) -> web::PathConfig {
    web::PathConfig::default().error_handler(move |err, _req| {
        InternalError::from_response(err, error_response(StatusCode::NOT_FOUND, message)).into()
    })
}

/// Register the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/categories")
                    .app_data(json_config(categories::INVALID_CATEGORY))
                    .app_data(path_config(categories::CATEGORY_NOT_FOUND))
                    .service(categories::list_categories)
                    .service(categories::show_category)
                    .service(categories::add_category)
                    .service(categories::edit_category)
                    .service(categories::delete_category),
            )
            .service(
                web::scope("/products")
                    .app_data(json_config(products::INVALID_PRODUCT))
                    .app_data(path_config(products::PRODUCT_NOT_FOUND))
                    .service(products::list_products)
                    .service(products::show_product)
                    .service(products::add_product)
                    .service(products::edit_product)
                    .service(products::delete_product),
            )
            .service(
                web::scope("/tags")
                    .app_data(json_config(tags::INVALID_TAG))
                    .app_data(path_config(tags::TAG_NOT_FOUND))
                    .service(tags::list_tags)
                    .service(tags::show_tag)
                    .service(tags::add_tag)
                    .service(tags::edit_tag)
                    .service(tags::delete_tag),
            ),
    );
}
