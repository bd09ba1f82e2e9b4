use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagWithProducts, UpdateTag as DomainUpdateTag,
};
use crate::models::product::Product as DbProduct;
use crate::models::product_tag::ProductTag as DbProductTag;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let db_tags = tags::table
            .order(tags::id.asc())
            .load::<DbTag>(&mut conn)?;

        attach_products(&mut conn, db_tags)
    }

    fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let tag = tags::table
            .filter(tags::id.eq(tag_id))
            .first::<DbTag>(&mut conn)
            .optional()?;

        match tag {
            Some(db_tag) => Ok(attach_products(&mut conn, vec![db_tag])?.pop()),
            None => Ok(None),
        }
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<usize> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateTag::from(updates);

        let updated = diesel::update(tags::table.filter(tags::id.eq(tag_id)))
            .set(&db_updates)
            .execute(&mut conn)?;

        Ok(updated)
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        // Join rows go with the tag through `ON DELETE CASCADE`.
        let deleted = diesel::delete(tags::table.filter(tags::id.eq(tag_id))).execute(&mut conn)?;

        Ok(deleted)
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    db_tags: Vec<DbTag>,
) -> RepositoryResult<Vec<TagWithProducts>> {
    use crate::schema::products;

    if db_tags.is_empty() {
        return Ok(Vec::new());
    }

    let links = DbProductTag::belonging_to(&db_tags)
        .inner_join(products::table)
        .order(products::id.asc())
        .select((DbProductTag::as_select(), DbProduct::as_select()))
        .load::<(DbProductTag, DbProduct)>(conn)?;
    let grouped = links.grouped_by(&db_tags);

    let tags = db_tags
        .into_iter()
        .zip(grouped)
        .map(|(tag, links)| TagWithProducts {
            tag: tag.into(),
            products: links
                .into_iter()
                .map(|(_, product)| DomainProduct::from(product))
                .collect(),
        })
        .collect();

    Ok(tags)
}
