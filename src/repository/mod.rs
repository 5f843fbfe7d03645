use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductUpdate, ProductWithSizes, SizeStock};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List every product joined with its size list, in insertion order.
    fn list_products(&self) -> RepositoryResult<Vec<ProductWithSizes>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Retrieve the size/stock pairs of a product, in insertion order.
    fn get_sizes(&self, id: ProductId) -> RepositoryResult<Vec<SizeStock>>;
}

/// Write operations for product entities and their size rows.
pub trait ProductWriter {
    /// Insert a product together with its size rows in one transaction and
    /// return the generated identifier.
    fn create_product(&self, product: &NewProduct, sizes: &[SizeStock])
    -> RepositoryResult<ProductId>;
    /// Update the product row and fully replace its size list in one
    /// transaction. Returns the number of affected product rows.
    fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
        sizes: &[SizeStock],
    ) -> RepositoryResult<usize>;
    /// Delete the product row and all its size rows. Deleting an unknown id
    /// affects zero rows and is not an error.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
