use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::category::Category as DomainCategory,
    domain::product::{
        CreatedProduct, NewProduct as DomainNewProduct, ProductWithRelations,
        UpdateProduct as DomainUpdateProduct,
    },
    domain::product_tag::{NewProductTag as DomainNewProductTag, ProductTag as DomainProductTag},
    domain::tag::Tag as DomainTag,
    models::category::Category as DbCategory,
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag},
    models::tag::Tag as DbTag,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<ProductWithRelations>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_products = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        expand_products(&mut conn, db_products)
    }

    fn get_product_by_id(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Option<ProductWithRelations>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(product_id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => Ok(expand_products(&mut conn, vec![db_product])?.pop()),
            None => Ok(None),
        }
    }

    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        let mut conn = self.conn()?;

        let rows = product_tags::table
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .load::<DbProductTag>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductTag::from).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<CreatedProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        conn.transaction::<CreatedProduct, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            let product_tags = insert_product_tags(conn, created.id, &new_product.tag_ids)?;

            Ok(CreatedProduct {
                product: created.into(),
                product_tags,
            })
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<usize> {
        use crate::schema::{product_tags, products};

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
                .set(&db_updates)
                .execute(conn)?;

            if updated == 0 {
                return Ok(0);
            }

            if let Some(tag_ids) = updates.tag_ids.as_deref() {
                diesel::delete(
                    product_tags::table.filter(product_tags::product_id.eq(product_id)),
                )
                .execute(conn)?;
                insert_product_tags(conn, product_id, tag_ids)?;
            }

            Ok(updated)
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // Join rows go with the product through `ON DELETE CASCADE`.
        let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}

fn insert_product_tags(
    conn: &mut SqliteConnection,
    product_id: i32,
    tag_ids: &[i32],
) -> RepositoryResult<Vec<DomainProductTag>> {
    use crate::schema::product_tags;

    let mut created = Vec::with_capacity(tag_ids.len());
    for &tag_id in tag_ids {
        let insertable = DbNewProductTag::from(DomainNewProductTag::new(product_id, tag_id));
        let row = diesel::insert_into(product_tags::table)
            .values(&insertable)
            .get_result::<DbProductTag>(conn)?;
        created.push(row.into());
    }

    Ok(created)
}

fn expand_products(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<ProductWithRelations>> {
    use crate::schema::tags;

    if db_products.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<i32> = db_products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();
    let categories = load_categories(conn, &category_ids)?;

    let links = DbProductTag::belonging_to(&db_products)
        .inner_join(tags::table)
        .order(tags::id.asc())
        .select((DbProductTag::as_select(), DbTag::as_select()))
        .load::<(DbProductTag, DbTag)>(conn)?;
    let grouped = links.grouped_by(&db_products);

    let products = db_products
        .into_iter()
        .zip(grouped)
        .map(|(product, links)| {
            let category = product
                .category_id
                .and_then(|category_id| categories.get(&category_id).cloned());
            ProductWithRelations {
                product: product.into(),
                category,
                tags: links
                    .into_iter()
                    .map(|(_, tag)| DomainTag::from(tag))
                    .collect(),
            }
        })
        .collect();

    Ok(products)
}

fn load_categories(
    conn: &mut SqliteConnection,
    category_ids: &[i32],
) -> RepositoryResult<HashMap<i32, DomainCategory>> {
    use crate::schema::categories;

    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = categories::table
        .filter(categories::id.eq_any(category_ids))
        .load::<DbCategory>(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| (row.id, DomainCategory::from(row)))
        .collect())
}
