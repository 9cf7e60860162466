#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::error::InternalError;
    use actix_web::{App, HttpResponse, HttpServer, Scope, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::ErrorBody;
    use crate::routes::inquiry::{create_inquiry, list_inquiries};
    use crate::routes::property::{
        create_property, deactivate_property, get_property, list_boroughs, list_neighborhoods,
        search_properties,
    };

    /// All JSON endpoints under `/api`, shared by the server and the
    /// integration tests.
    pub fn api_scope() -> Scope {
        web::scope("/api")
            // a non-numeric `{id}` is the caller's error, not a missing route
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                InternalError::from_response(
                    err,
                    HttpResponse::BadRequest()
                        .json(ErrorBody::new("`id` must be an integer")),
                )
                .into()
            }))
            .service(search_properties)
            .service(create_property)
            .service(create_inquiry)
            .service(list_inquiries)
            .service(get_property)
            .service(deactivate_property)
            .service(list_neighborhoods)
            .service(list_boroughs)
    }

    /// Builds and runs the Actix-Web HTTP server using the provided
    /// configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish the Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let bind_address = server_config.bind_addr();

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(api_scope())
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::{api_scope, run};
