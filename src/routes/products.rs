use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::{Category, ProductId, SIZE_LABELS};
use crate::forms::products::{
    AddProductForm, AddProductFormPayload, EditProductForm, EditProductFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::images::ImageStore;
use crate::services::products::{
    add_product as add_product_service, delete_product as delete_product_service,
    show_edit_product as show_edit_product_service, update_product as update_product_service,
};

#[post("/add_product")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    images: web::Data<ImageStore>,
    MultipartForm(form): MultipartForm<AddProductForm>,
) -> impl Responder {
    let payload = match AddProductFormPayload::try_from(form) {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    match add_product_service(payload, images.get_ref(), repo.get_ref()) {
        Ok(_) => {
            FlashMessage::success("Producto añadido").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(e) => {
            log::error!("Failed to add product: {e}");
            HttpResponse::InternalServerError().body("Ocurrió un error al agregar el producto")
        }
    }
}

#[get("/edit_product/{id}")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(id) = ProductId::new(product_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match show_edit_product_service(id, repo.get_ref()) {
        Ok((product, sizes)) => {
            let mut context = base_context(&flash_messages, "edit");
            context.insert("product", &product);
            context.insert("sizes", &sizes);
            context.insert("categories", &Category::ALL);
            context.insert("size_options", &SIZE_LABELS);
            render_template(&tera, "products/edit.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to render edit form: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/edit_product/{id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<EditProductForm>,
) -> impl Responder {
    let Ok(id) = ProductId::new(product_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    let payload = match EditProductFormPayload::try_from(form) {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    match update_product_service(id, payload, repo.get_ref()) {
        Ok(()) => {
            FlashMessage::success("Producto actualizado").send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            HttpResponse::InternalServerError().body("Ocurrió un error al actualizar el producto")
        }
    }
}

// Destructive action behind a GET, kept for compatibility with the pages
// that link to it. Deleting an id that does not exist is a no-op.
#[get("/delete_product/{id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(id) = ProductId::new(product_id.into_inner()) else {
        return redirect("/");
    };

    match delete_product_service(id, repo.get_ref()) {
        Ok(()) => {
            FlashMessage::success("Producto eliminado").send();
            redirect("/")
        }
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            HttpResponse::InternalServerError().body("Ocurrió un error al eliminar el producto")
        }
    }
}
