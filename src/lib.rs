pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::customer_service::CustomerService;
use application::order_service::OrderService;
use application::product_service::ProductService;
use infrastructure::customer_repo::DieselCustomerRepository;
use infrastructure::order_repo::DieselOrderRepository;
use infrastructure::product_repo::DieselProductRepository;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type CustomerUseCases = CustomerService<DieselCustomerRepository>;
pub type ProductUseCases = ProductService<DieselProductRepository>;
pub type OrderUseCases = OrderService<DieselOrderRepository, DieselCustomerRepository>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        log::info!("applied migration {}", version);
    }
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let customers = web::Data::new(CustomerService::new(DieselCustomerRepository::new(
        pool.clone(),
    )));
    let products = web::Data::new(ProductService::new(DieselProductRepository::new(
        pool.clone(),
    )));
    let orders = web::Data::new(OrderService::new(
        DieselOrderRepository::new(pool.clone()),
        DieselCustomerRepository::new(pool),
    ));
    let openapi = openapi::ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(customers.clone())
            .app_data(products.clone())
            .app_data(orders.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/customers")
                    .route("", web::get().to(handlers::customers::list_customers))
                    .route("", web::post().to(handlers::customers::create_customer))
                    .route("/{id}", web::get().to(handlers::customers::get_customer))
                    .route("/{id}", web::delete().to(handlers::customers::delete_customer))
                    .route(
                        "/{id}/orders",
                        web::get().to(handlers::customers::get_customer_orders),
                    ),
            )
            .service(
                web::scope("/products")
                    .route("", web::get().to(handlers::products::list_products))
                    .route("", web::post().to(handlers::products::create_product))
                    .route("/{id}", web::get().to(handlers::products::get_product))
                    .route("/{id}", web::delete().to(handlers::products::delete_product)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("/{id}", web::get().to(handlers::orders::get_order))
                    .route("/{id}", web::delete().to(handlers::orders::delete_order)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
