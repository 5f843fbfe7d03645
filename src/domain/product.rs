use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Category, ProductId, ProductName, ProductPrice, SizeLabel, StockQuantity,
};

/// A sellable clothing item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: Category,
    /// Server-relative path of the uploaded image, absent for legacy rows.
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One (size label, stock count) pair belonging to exactly one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeStock {
    pub size: SizeLabel,
    pub stock: StockQuantity,
}

/// A product joined with its current size list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductWithSizes {
    pub product: Product,
    pub sizes: Vec<SizeStock>,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: Category,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields mutated in place by the edit operation. The image is intentionally
/// untouched: edits only change name, price, category and sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: Category,
}
