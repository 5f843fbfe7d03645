use std::fs;
use std::io::Write;

use actix_multipart::form::tempfile::TempFile;
use tempfile::{NamedTempFile, TempDir, tempdir};
use trastienda::domain::product::SizeStock;
use trastienda::domain::types::{
    Category, ProductId, ProductName, ProductPrice, SizeLabel, StockQuantity,
};
use trastienda::forms::products::{AddProductFormPayload, EditProductFormPayload};
use trastienda::models::config::ServerConfig;
use trastienda::repository::{DieselRepository, ProductReader};
use trastienda::services::ServiceError;
use trastienda::services::images::ImageStore;
use trastienda::services::products::{
    add_product, delete_product, show_edit_product, show_products, update_product,
};

mod common;

fn image_store(dir: &TempDir) -> ImageStore {
    let config = ServerConfig {
        database_url: "unused".to_string(),
        bind_address: "127.0.0.1".to_string(),
        port: 5000,
        upload_dir: dir
            .path()
            .join("static/images")
            .to_str()
            .unwrap()
            .to_string(),
        allowed_image_extensions: vec![
            "png".to_string(),
            "jpg".to_string(),
            "jpeg".to_string(),
            "gif".to_string(),
        ],
        secret_key: None,
    };
    ImageStore::new(&config).expect("should create upload dir")
}

fn upload(file_name: &str) -> TempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"fake image bytes").unwrap();
    TempFile {
        file,
        content_type: None,
        file_name: Some(file_name.to_string()),
        size: 16,
    }
}

fn payload(name: &str, file_name: &str, sizes: Vec<SizeStock>) -> AddProductFormPayload {
    AddProductFormPayload {
        name: ProductName::new(name).unwrap(),
        price: ProductPrice::new(49.99).unwrap(),
        category: Category::Pantalones,
        sizes,
        image: upload(file_name),
    }
}

fn size(label: &str, stock: i32) -> SizeStock {
    SizeStock {
        size: SizeLabel::new(label).unwrap(),
        stock: StockQuantity::new(stock).unwrap(),
    }
}

#[test]
fn add_product_persists_image_and_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let dir = tempdir().unwrap();
    let images = image_store(&dir);

    let id = add_product(
        payload("Jean", "jean.jpg", vec![size("42", 3), size("44", 5)]),
        &images,
        &repo,
    )
    .expect("should create product");

    let product = repo
        .get_product_by_id(id)
        .expect("lookup should succeed")
        .expect("product should exist");
    let image_path = product.image.expect("image path should be stored");
    assert!(image_path.ends_with("/jean.jpg"));
    assert_eq!(
        fs::read(dir.path().join("static/images/jean.jpg")).unwrap(),
        b"fake image bytes"
    );

    let listed = show_products(&repo).expect("should list products");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].sizes, "42:3,44:5");
}

#[test]
fn rejected_upload_creates_no_product_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let dir = tempdir().unwrap();
    let images = image_store(&dir);

    let err = add_product(payload("Jean", "malware.exe", vec![]), &images, &repo).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Form("Tipo de archivo no válido".to_string())
    );

    assert!(show_products(&repo).expect("should list").is_empty());
    assert!(
        fs::read_dir(dir.path().join("static/images"))
            .unwrap()
            .next()
            .is_none()
    );
}

#[test]
fn editing_missing_product_reports_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = ProductId::new(42).unwrap();
    assert_eq!(
        show_edit_product(missing, &repo).unwrap_err(),
        ServiceError::NotFound
    );

    let edit = EditProductFormPayload {
        name: ProductName::new("Jean").unwrap(),
        price: ProductPrice::new(1.0).unwrap(),
        category: Category::Pantalones,
        sizes: vec![],
    };
    assert_eq!(
        update_product(missing, edit, &repo).unwrap_err(),
        ServiceError::NotFound
    );
}

#[test]
fn deleting_missing_product_succeeds_quietly() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = ProductId::new(42).unwrap();
    assert!(delete_product(missing, &repo).is_ok());
}

#[test]
fn full_lifecycle_through_services() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let dir = tempdir().unwrap();
    let images = image_store(&dir);

    let id = add_product(
        payload("Jean", "jean.jpg", vec![size("42", 3), size("44", 5)]),
        &images,
        &repo,
    )
    .expect("should create product");

    let edit = EditProductFormPayload {
        name: ProductName::new("Jean").unwrap(),
        price: ProductPrice::new(49.99).unwrap(),
        category: Category::Pantalones,
        sizes: vec![size("46", 1)],
    };
    update_product(id, edit, &repo).expect("should update product");

    let (product, sizes) = show_edit_product(id, &repo).expect("should load edit data");
    assert_eq!(product.name.as_str(), "Jean");
    assert_eq!(sizes, vec![size("46", 1)]);

    let listed = show_products(&repo).expect("should list products");
    assert_eq!(listed[0].sizes, "46:1");

    delete_product(id, &repo).expect("should delete product");
    assert!(show_products(&repo).expect("should list").is_empty());
}
