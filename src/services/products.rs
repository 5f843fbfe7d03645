use chrono::Utc;

use crate::domain::product::{NewProduct, Product, ProductUpdate, SizeStock};
use crate::domain::types::ProductId;
use crate::dto::products::ProductDto;
use crate::forms::products::{AddProductFormPayload, EditProductFormPayload};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::images::{ImageStore, ImageStoreError};

use super::{ServiceError, ServiceResult};

/// List every product with its synthesized sizes string, for both the HTML
/// listing and the JSON endpoint.
pub fn show_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(items) => Ok(items.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Store the uploaded image, then insert the product and its sizes in one
/// transaction. The image is validated and written before any database
/// write, so a rejected upload never creates a product row.
pub fn add_product<R>(
    payload: AddProductFormPayload,
    images: &ImageStore,
    repo: &R,
) -> ServiceResult<ProductId>
where
    R: ProductWriter,
{
    let AddProductFormPayload {
        name,
        price,
        category,
        sizes,
        image,
    } = payload;

    let image_path = images.save(&image).map_err(|e| match e {
        ImageStoreError::MissingFileName => {
            ServiceError::Form("No se seleccionó ninguna imagen".to_string())
        }
        ImageStoreError::UnsupportedExtension(_) | ImageStoreError::InvalidFileName => {
            ServiceError::Form("Tipo de archivo no válido".to_string())
        }
        ImageStoreError::Io(e) => {
            log::error!("Failed to store product image: {e}");
            ServiceError::Internal
        }
    })?;

    let now = Utc::now().naive_utc();
    let new_product = NewProduct {
        name,
        price,
        category,
        image: image_path,
        created_at: now,
        updated_at: now,
    };

    match repo.create_product(&new_product, &sizes) {
        Ok(id) => Ok(id),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Load a product and its sizes for the edit form.
pub fn show_edit_product<R>(id: ProductId, repo: &R) -> ServiceResult<(Product, Vec<SizeStock>)>
where
    R: ProductReader,
{
    let product = match repo.get_product_by_id(id) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.get_sizes(id) {
        Ok(sizes) => Ok((product, sizes)),
        Err(e) => {
            log::error!("Failed to get product sizes: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Apply an edit: the product row is updated and its size list replaced
/// wholesale. Editing an unknown id reports not-found.
pub fn update_product<R>(
    id: ProductId,
    payload: EditProductFormPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    match repo.get_product_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let EditProductFormPayload {
        name,
        price,
        category,
        sizes,
    } = payload;
    let update = ProductUpdate {
        name,
        price,
        category,
    };

    match repo.update_product(id, &update, &sizes) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a product and its size rows. An unknown id is a silent no-op.
pub fn delete_product<R>(id: ProductId, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    match repo.delete_product(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}
