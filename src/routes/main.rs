use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::types::{Category, SIZE_LABELS};
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::products::show_products as show_products_service;

#[get("/")]
pub async fn index(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let products = match show_products_service(repo.get_ref()) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to render product listing: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "index");
    context.insert("products", &products);
    context.insert("categories", &Category::ALL);
    context.insert("size_options", &SIZE_LABELS);

    render_template(&tera, "main/index.html", &context)
}
