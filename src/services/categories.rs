use chrono::Utc;

use crate::domain::category::{Category, CategoryWithProducts};
use crate::forms::categories::CategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult, require_affected};

/// Lists every category together with its products.
pub fn load_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryWithProducts>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Loads a single category together with its products.
pub fn load_category<R>(repo: &R, category_id: i32) -> ServiceResult<CategoryWithProducts>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new category.
pub fn create_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Renames a category and returns the number of affected rows.
pub fn modify_category<R>(repo: &R, category_id: i32, form: CategoryForm) -> ServiceResult<usize>
where
    R: CategoryWriter + ?Sized,
{
    let update = form
        .into_update_category(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let affected = repo
        .update_category(category_id, &update)
        .map_err(ServiceError::from)?;

    require_affected(affected)
}

/// Deletes a category and returns the number of affected rows.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<usize>
where
    R: CategoryWriter + ?Sized,
{
    let affected = repo
        .delete_category(category_id)
        .map_err(ServiceError::from)?;

    require_affected(affected)
}
