use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryWithProducts, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        attach_products(&mut conn, db_categories)
    }

    fn get_category_by_id(
        &self,
        category_id: i32,
    ) -> RepositoryResult<Option<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(category_id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match category {
            Some(db_category) => Ok(attach_products(&mut conn, vec![db_category])?.pop()),
            None => Ok(None),
        }
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(&db_updates)
            .execute(&mut conn)?;

        Ok(updated)
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        // Products of the category are detached by `ON DELETE SET NULL`.
        let deleted = diesel::delete(categories::table.filter(categories::id.eq(category_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    db_categories: Vec<DbCategory>,
) -> RepositoryResult<Vec<CategoryWithProducts>> {
    use crate::schema::products;

    if db_categories.is_empty() {
        return Ok(Vec::new());
    }

    let db_products = DbProduct::belonging_to(&db_categories)
        .order(products::id.asc())
        .load::<DbProduct>(conn)?;
    let grouped = db_products.grouped_by(&db_categories);

    let categories = db_categories
        .into_iter()
        .zip(grouped)
        .map(|(category, products)| CategoryWithProducts {
            category: category.into(),
            products: products.into_iter().map(DomainProduct::from).collect(),
        })
        .collect();

    Ok(categories)
}
