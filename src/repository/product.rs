use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate, ProductWithSizes, SizeStock};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, NewProductSize as DbNewProductSize, Product as DbProduct,
    ProductSize as DbProductSize,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<ProductWithSizes>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        let sizes = DbProductSize::belonging_to(&items)
            .load::<DbProductSize>(&mut conn)?
            .grouped_by(&items);

        items
            .into_iter()
            .zip(sizes)
            .map(|(product, sizes)| {
                Ok(ProductWithSizes {
                    product: product.try_into()?,
                    sizes: sizes
                        .into_iter()
                        .map(TryInto::try_into)
                        .collect::<Result<Vec<SizeStock>, _>>()?,
                })
            })
            .collect()
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn get_sizes(&self, id: ProductId) -> RepositoryResult<Vec<SizeStock>> {
        use crate::schema::product_sizes;

        let mut conn = self.conn()?;

        let rows = product_sizes::table
            .filter(product_sizes::product_id.eq(id.get()))
            .order(product_sizes::id.asc())
            .load::<DbProductSize>(&mut conn)?;

        rows.into_iter()
            .map(|row| Ok(row.try_into()?))
            .collect()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        product: &NewProduct,
        sizes: &[SizeStock],
    ) -> RepositoryResult<ProductId> {
        use crate::schema::{product_sizes, products};

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let id = conn.transaction(|conn| {
            let id = diesel::insert_into(products::table)
                .values(db_product)
                .returning(products::id)
                .get_result::<i32>(conn)?;

            let size_rows = sizes
                .iter()
                .map(|entry| DbNewProductSize {
                    product_id: id,
                    size: entry.size.as_str().to_string(),
                    stock: entry.stock.get(),
                })
                .collect::<Vec<_>>();

            diesel::insert_into(product_sizes::table)
                .values(size_rows)
                .execute(conn)?;

            Ok::<_, diesel::result::Error>(id)
        })?;

        Ok(ProductId::new(id)?)
    }

    fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
        sizes: &[SizeStock],
    ) -> RepositoryResult<usize> {
        use crate::schema::{product_sizes, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            let affected =
                diesel::update(products::table.filter(products::id.eq(id.get())))
                    .set((
                        products::name.eq(update.name.as_str()),
                        products::price.eq(update.price.get()),
                        products::category.eq(update.category.as_str()),
                        products::updated_at.eq(diesel::dsl::now),
                    ))
                    .execute(conn)?;

            // The size list is replaced wholesale on every edit.
            diesel::delete(
                product_sizes::table.filter(product_sizes::product_id.eq(id.get())),
            )
            .execute(conn)?;

            let size_rows = sizes
                .iter()
                .map(|entry| DbNewProductSize::from_size_stock(id, entry))
                .collect::<Vec<_>>();

            diesel::insert_into(product_sizes::table)
                .values(size_rows)
                .execute(conn)?;

            Ok::<_, diesel::result::Error>(affected)
        })?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::{product_sizes, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            diesel::delete(
                product_sizes::table.filter(product_sizes::product_id.eq(id.get())),
            )
            .execute(conn)?;

            diesel::delete(products::table.filter(products::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
