use catalog_api::domain::category::{NewCategory, UpdateCategory};
use catalog_api::domain::product::{NewProduct, UpdateProduct};
use catalog_api::domain::tag::{NewTag, UpdateTag};
use catalog_api::repository::errors::RepositoryError;
use catalog_api::repository::{
    CategoryReader, CategoryWriter, DieselRepository, ProductReader, ProductWriter, TagReader,
    TagWriter,
};

mod common;

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new("test_category_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let shirts = repo.create_category(&NewCategory::new("Shirts")).unwrap();
    let shorts = repo.create_category(&NewCategory::new("Shorts")).unwrap();
    assert_eq!(shirts.category_name, "Shirts");

    repo.create_product(&NewProduct::new("Plain Tee", 15.0).with_category_id(shirts.id))
        .unwrap();

    let categories = repo.list_categories().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category.id, shirts.id);
    assert_eq!(categories[0].products.len(), 1);
    assert_eq!(categories[0].products[0].product_name, "Plain Tee");
    assert!(categories[1].products.is_empty());

    let affected = repo
        .update_category(shorts.id, &UpdateCategory::new("Cargo Shorts"))
        .unwrap();
    assert_eq!(affected, 1);
    let reloaded = repo.get_category_by_id(shorts.id).unwrap().unwrap();
    assert_eq!(reloaded.category.category_name, "Cargo Shorts");

    assert_eq!(
        repo.update_category(9999, &UpdateCategory::new("Ghost"))
            .unwrap(),
        0
    );
    assert_eq!(repo.delete_category(9999).unwrap(), 0);

    assert_eq!(repo.delete_category(shorts.id).unwrap(), 1);
    assert!(repo.get_category_by_id(shorts.id).unwrap().is_none());
}

#[test]
fn test_deleting_category_detaches_products() {
    let test_db = common::TestDb::new("test_deleting_category_detaches_products.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&NewCategory::new("Music")).unwrap();
    let created = repo
        .create_product(&NewProduct::new("Vinyl", 12.99).with_category_id(category.id))
        .unwrap();

    assert_eq!(repo.delete_category(category.id).unwrap(), 1);

    let product = repo
        .get_product_by_id(created.product.id)
        .unwrap()
        .expect("product should survive category deletion");
    assert_eq!(product.product.category_id, None);
    assert!(product.category.is_none());
}

#[test]
fn test_tag_repository_crud() {
    let test_db = common::TestDb::new("test_tag_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let sale = repo.create_tag(&NewTag::new(" Sale ")).unwrap();
    assert_eq!(sale.tag_name, "Sale");

    let created = repo
        .create_product(&NewProduct::new("Ball", 10.0).with_tag_ids([sale.id]))
        .unwrap();

    let tag = repo.get_tag_by_id(sale.id).unwrap().unwrap();
    assert_eq!(tag.products.len(), 1);
    assert_eq!(tag.products[0].id, created.product.id);

    assert_eq!(repo.update_tag(sale.id, &UpdateTag::new("Clearance")).unwrap(), 1);
    assert_eq!(repo.list_tags().unwrap()[0].tag.tag_name, "Clearance");

    assert_eq!(repo.delete_tag(sale.id).unwrap(), 1);
    assert!(repo.get_tag_by_id(sale.id).unwrap().is_none());
    assert!(repo.list_product_tags(created.product.id).unwrap().is_empty());

    let product = repo.get_product_by_id(created.product.id).unwrap().unwrap();
    assert!(product.tags.is_empty());
}

#[test]
fn test_product_create_links_tags() {
    let test_db = common::TestDb::new("test_product_create_links_tags.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo.create_tag(&NewTag::new("Sale")).unwrap();
    let second = repo.create_tag(&NewTag::new("New")).unwrap();

    let created = repo
        .create_product(&NewProduct::new("Ball", 10.0).with_tag_ids([first.id, second.id]))
        .unwrap();

    assert_eq!(created.product.stock, 10);
    assert_eq!(created.product_tags.len(), 2);
    assert!(
        created
            .product_tags
            .iter()
            .all(|link| link.product_id == created.product.id)
    );

    let product = repo.get_product_by_id(created.product.id).unwrap().unwrap();
    let tag_names: Vec<&str> = product.tags.iter().map(|tag| tag.tag_name.as_str()).collect();
    assert_eq!(tag_names, vec!["Sale", "New"]);
}

#[test]
fn test_product_create_rolls_back_on_unknown_tag() {
    let test_db = common::TestDb::new("test_product_create_rolls_back.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_product(&NewProduct::new("Ball", 10.0).with_tag_ids([404]))
        .expect_err("unknown tag must be rejected");
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));

    assert!(repo.list_products().unwrap().is_empty());
}

#[test]
fn test_product_update_replaces_tags() {
    let test_db = common::TestDb::new("test_product_update_replaces_tags.db");
    let repo = DieselRepository::new(test_db.pool());

    let one = repo.create_tag(&NewTag::new("One")).unwrap();
    let two = repo.create_tag(&NewTag::new("Two")).unwrap();
    let three = repo.create_tag(&NewTag::new("Three")).unwrap();

    let created = repo
        .create_product(&NewProduct::new("Ball", 10.0).with_tag_ids([one.id, two.id]))
        .unwrap();
    let product_id = created.product.id;

    let affected = repo
        .update_product(product_id, &UpdateProduct::new().tag_ids([three.id]))
        .unwrap();
    assert_eq!(affected, 1);

    let links = repo.list_product_tags(product_id).unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].tag_id, three.id);

    repo.update_product(product_id, &UpdateProduct::new().price(12.5))
        .unwrap();
    let product = repo.get_product_by_id(product_id).unwrap().unwrap();
    assert_eq!(product.product.price, 12.5);
    assert_eq!(product.tags.len(), 1);

    repo.update_product(product_id, &UpdateProduct::new().tag_ids(Vec::new()))
        .unwrap();
    assert!(repo.list_product_tags(product_id).unwrap().is_empty());
}

#[test]
fn test_product_update_and_delete_report_missing_rows() {
    let test_db = common::TestDb::new("test_product_missing_rows.db");
    let repo = DieselRepository::new(test_db.pool());

    let tag = repo.create_tag(&NewTag::new("Orphan")).unwrap();

    let affected = repo
        .update_product(77, &UpdateProduct::new().tag_ids([tag.id]))
        .unwrap();
    assert_eq!(affected, 0);
    assert!(repo.list_product_tags(77).unwrap().is_empty());

    assert_eq!(repo.delete_product(77).unwrap(), 0);
}

#[test]
fn test_product_category_can_be_cleared() {
    let test_db = common::TestDb::new("test_product_category_can_be_cleared.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = repo.create_category(&NewCategory::new("Hats")).unwrap();
    let created = repo
        .create_product(&NewProduct::new("Cap", 8.0).with_category_id(category.id))
        .unwrap();

    let product = repo.get_product_by_id(created.product.id).unwrap().unwrap();
    assert_eq!(
        product.category.map(|category| category.category_name),
        Some("Hats".to_string())
    );

    repo.update_product(created.product.id, &UpdateProduct::new().category_id(None))
        .unwrap();

    let product = repo.get_product_by_id(created.product.id).unwrap().unwrap();
    assert!(product.category.is_none());

    assert_eq!(repo.delete_product(created.product.id).unwrap(), 1);
    assert!(repo.get_product_by_id(created.product.id).unwrap().is_none());
}

#[test]
fn test_product_tag_links_are_unique() {
    use catalog_api::domain::product_tag::NewProductTag;
    use catalog_api::models::product_tag::NewProductTag as DbNewProductTag;
    use catalog_api::schema::product_tags;
    use diesel::prelude::*;

    let test_db = common::TestDb::new("test_product_tag_links_are_unique.db");
    let repo = DieselRepository::new(test_db.pool());

    let sale = repo.create_tag(&NewTag::new("Sale")).unwrap();
    let created = repo
        .create_product(&NewProduct::new("Ball", 10.0).with_tag_ids([sale.id, sale.id]))
        .unwrap();
    assert_eq!(created.product_tags.len(), 1);

    let mut conn = test_db.pool().get().unwrap();
    let duplicate = DbNewProductTag::from(NewProductTag::new(created.product.id, sale.id));
    let err = diesel::insert_into(product_tags::table)
        .values(&duplicate)
        .execute(&mut conn)
        .expect_err("duplicate link must be rejected");
    assert!(matches!(
        RepositoryError::from(err),
        RepositoryError::ConstraintViolation(_)
    ));
}
