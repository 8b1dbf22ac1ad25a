//! Server construction and route wiring.
//!
//! The route table lives here, in one place, built once per worker: no
//! handler or middleware registers itself globally. Tests drive the same
//! [`build_app`] the binary uses.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{FixturePersonRepository, PersonRepository};
use crate::inbound::http::error::unknown_endpoint;
use crate::inbound::http::info::{index, info};
use crate::inbound::http::persons::{
    create_person, delete_person, get_person, list_persons, update_person,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::RequestLog;
use crate::outbound::persistence::DieselPersonRepository;

/// Build the application with its full route table.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use phonebook::domain::ports::FixturePersonRepository;
/// use phonebook::inbound::http::state::HttpState;
/// use phonebook::server::build_app;
///
/// let state = web::Data::new(HttpState::new(Arc::new(FixturePersonRepository)));
/// let app = build_app(state);
/// ```
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .wrap(Cors::permissive())
        .service(list_persons)
        .service(get_person)
        .service(create_person)
        .service(update_person)
        .service(delete_person);

    let app = App::new()
        .app_data(state)
        .wrap(RequestLog)
        .service(index)
        .service(info)
        .service(api)
        .default_service(web::route().to(unknown_endpoint));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

fn build_repository(config: &ServerConfig) -> Arc<dyn PersonRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselPersonRepository::new(pool.clone())),
        None => Arc::new(FixturePersonRepository),
    }
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new(build_repository(&config)));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
