use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use thiserror::Error;

use crate::domain::product::SizeStock;
use crate::domain::types::{
    Category, ProductName, ProductPrice, SizeLabel, StockQuantity, TypeConstraintError,
};

/// Creation form posted from the listing page. Multipart because it carries
/// the product image alongside the repeated `sizes[]`/`stock[]` fields.
#[derive(MultipartForm)]
pub struct AddProductForm {
    pub name: Text<String>,
    pub price: Text<f64>,
    pub category: Text<String>,
    #[multipart(rename = "sizes[]")]
    pub sizes: Vec<Text<String>>,
    #[multipart(rename = "stock[]")]
    pub stock: Vec<Text<i32>>,
    #[multipart(limit = "5MB")]
    pub image: TempFile,
}

/// Edit form. Same fields as [`AddProductForm`] minus the image: edits only
/// touch name, price, category and sizes.
#[derive(MultipartForm)]
pub struct EditProductForm {
    pub name: Text<String>,
    pub price: Text<f64>,
    pub category: Text<String>,
    #[multipart(rename = "sizes[]")]
    pub sizes: Vec<Text<String>>,
    #[multipart(rename = "stock[]")]
    pub stock: Vec<Text<i32>>,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

pub struct AddProductFormPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: Category,
    pub sizes: Vec<SizeStock>,
    pub image: TempFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditProductFormPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: Category,
    pub sizes: Vec<SizeStock>,
}

/// Pair size labels with stock counts the way the submitted form lists them.
/// Mismatched list lengths pair up to the shorter list; the unmatched tail is
/// dropped silently, matching the historical form contract.
fn collect_sizes(
    sizes: Vec<Text<String>>,
    stock: Vec<Text<i32>>,
) -> Result<Vec<SizeStock>, ProductFormError> {
    sizes
        .into_iter()
        .zip(stock)
        .map(|(size, stock)| {
            Ok(SizeStock {
                size: SizeLabel::new(size.0)?,
                stock: StockQuantity::new(stock.0)?,
            })
        })
        .collect()
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = ProductFormError;

    fn try_from(form: AddProductForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ProductName::new(form.name.0)?,
            price: ProductPrice::new(form.price.0)?,
            category: Category::try_from(form.category.as_str())?,
            sizes: collect_sizes(form.sizes, form.stock)?,
            image: form.image,
        })
    }
}

impl TryFrom<EditProductForm> for EditProductFormPayload {
    type Error = ProductFormError;

    fn try_from(form: EditProductForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ProductName::new(form.name.0)?,
            price: ProductPrice::new(form.price.0)?,
            category: Category::try_from(form.category.as_str())?,
            sizes: collect_sizes(form.sizes, form.stock)?,
        })
    }
}
