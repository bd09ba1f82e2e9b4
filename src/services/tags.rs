use chrono::Utc;

use crate::domain::tag::{Tag, TagWithProducts};
use crate::forms::tags::TagForm;
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult, require_affected};

/// Lists every tag together with the products it is attached to.
pub fn load_tags<R>(repo: &R) -> ServiceResult<Vec<TagWithProducts>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Loads a single tag together with the products it is attached to.
pub fn load_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<TagWithProducts>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new tag.
pub fn create_tag<R>(repo: &R, form: TagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Renames a tag and returns the number of affected rows.
pub fn modify_tag<R>(repo: &R, tag_id: i32, form: TagForm) -> ServiceResult<usize>
where
    R: TagWriter + ?Sized,
{
    let update = form
        .into_update_tag(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let affected = repo
        .update_tag(tag_id, &update)
        .map_err(ServiceError::from)?;

    require_affected(affected)
}

/// Deletes a tag and returns the number of affected rows.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<usize>
where
    R: TagWriter + ?Sized,
{
    let affected = repo.delete_tag(tag_id).map_err(ServiceError::from)?;

    require_affected(affected)
}
