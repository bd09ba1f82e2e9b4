use crate::domain::product::{CreatedProduct, ProductWithRelations};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult, require_affected};

/// Lists every product with its category and tags.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<ProductWithRelations>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Loads a single product with its category and tags.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductWithRelations>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a product and links it to the requested tags.
///
/// `product_tags` of the result is empty when no tags were requested.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<CreatedProduct>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product)
        .map_err(ServiceError::from)
}

/// Applies a patch to a product, replacing its tags when `tagIds` was sent.
pub fn modify_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<usize>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let affected = repo
        .update_product(product_id, &updates)
        .map_err(ServiceError::from)?;

    require_affected(affected)
}

/// Deletes a product and returns the number of affected rows.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<usize>
where
    R: ProductWriter + ?Sized,
{
    let affected = repo
        .delete_product(product_id)
        .map_err(ServiceError::from)?;

    require_affected(affected)
}
