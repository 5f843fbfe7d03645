use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::products::show_products as show_products_service;

/// JSON listing consumed by external clients. Each record carries the
/// concatenated `"S:10,M:5"` sizes string.
#[get("/get_products")]
pub async fn get_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            HttpResponse::InternalServerError().body(
                "Ocurrió un error al obtener los productos. Por favor, inténtalo de nuevo más tarde.",
            )
        }
    }
}
