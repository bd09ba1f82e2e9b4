use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use catalog_api::db::{establish_connection_pool, establish_connection_pool_with_size};
use catalog_api::repository::DieselRepository;
use catalog_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool_size = env::var("DATABASE_POOL_SIZE")
        .ok()
        .and_then(|value| value.parse::<u32>().ok());

    let pool = match pool_size {
        Some(size) => establish_connection_pool_with_size(&database_url, size),
        None => establish_connection_pool(&database_url),
    };
    let pool = match pool {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("Serving catalog API on {address}:{port} backed by {database_url}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((address, port))?
    .run()
    .await
}
