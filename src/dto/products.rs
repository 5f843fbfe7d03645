use serde::Serialize;

use crate::domain::product::ProductWithSizes;

/// View of a product as exposed by the listing page and `/get_products`.
///
/// `sizes` keeps the legacy concatenated `"S:10,M:5"` encoding existing
/// clients parse; a product without sizes serializes as an empty string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub sizes: String,
}

impl From<ProductWithSizes> for ProductDto {
    fn from(item: ProductWithSizes) -> Self {
        let sizes = item
            .sizes
            .iter()
            .map(|entry| format!("{}:{}", entry.size, entry.stock.get()))
            .collect::<Vec<_>>()
            .join(",");

        Self {
            id: item.product.id.get(),
            name: item.product.name.into_inner(),
            price: item.product.price.get(),
            category: item.product.category.as_str().to_string(),
            image: item.product.image,
            sizes,
        }
    }
}
