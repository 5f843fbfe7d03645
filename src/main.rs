use std::io;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tera::Tera;

use trastienda::db::establish_connection_pool;
use trastienda::models::config::ServerConfig;
use trastienda::repository::DieselRepository;
use trastienda::routes::api::get_products;
use trastienda::routes::main::index;
use trastienda::routes::products::{add_product, delete_product, edit_product, update_product};
use trastienda::services::images::ImageStore;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = ServerConfig::load("config").map_err(io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(io::Error::other)?;
    {
        // Ensure the database file and both tables exist on first run.
        let mut conn = pool.get().map_err(io::Error::other)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(io::Error::other)?;
    }

    let repo = DieselRepository::new(pool);
    let images = ImageStore::new(&server_config)?;

    let tera = Tera::new("templates/**/*").map_err(io::Error::other)?;

    let secret_key = match &server_config.secret_key {
        Some(secret) => Key::from(secret.as_bytes()),
        None => Key::generate(),
    };
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.bind_address.clone(), server_config.port);
    log::info!("Starting server at http://{}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(message_framework.clone())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(images.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(index)
            .service(add_product)
            .service(get_products)
            .service(edit_product)
            .service(update_product)
            .service(delete_product)
            // Uploaded images are served from the same tree they are
            // written to, so the stored path doubles as the URL.
            .service(Files::new("/static", "static"))
    })
    .bind(bind_address)?
    .run()
    .await
}
