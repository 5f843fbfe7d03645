use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, SizeStock,
};
use crate::domain::types::{
    Category, ProductId, ProductName, ProductPrice, SizeLabel, StockQuantity, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            category: Category::try_from(product.category.as_str())?,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            price: product.price.get(),
            category: product.category.as_str().to_string(),
            image: Some(product.image),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::product_sizes)]
#[diesel(belongs_to(Product))]
pub struct ProductSize {
    pub id: i32,
    pub product_id: i32,
    pub size: String,
    pub stock: i32,
}

impl TryFrom<ProductSize> for SizeStock {
    type Error = TypeConstraintError;

    fn try_from(row: ProductSize) -> Result<Self, Self::Error> {
        Ok(Self {
            size: SizeLabel::new(row.size)?,
            stock: StockQuantity::new(row.stock)?,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::product_sizes)]
pub struct NewProductSize {
    pub product_id: i32,
    pub size: String,
    pub stock: i32,
}

impl NewProductSize {
    pub fn from_size_stock(product_id: ProductId, entry: &SizeStock) -> Self {
        Self {
            product_id: product_id.get(),
            size: entry.size.as_str().to_string(),
            stock: entry.stock.get(),
        }
    }
}
