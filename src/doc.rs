//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every registered
//! endpoint. Swagger UI serves it under `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::persons::{CreatePersonBody, PersonResponse, UpdatePersonBody};

/// OpenAPI document for the phonebook API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "CRUD interface over the person collection."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::info::index,
        crate::inbound::http::info::info,
        crate::inbound::http::persons::list_persons,
        crate::inbound::http::persons::get_person,
        crate::inbound::http::persons::create_person,
        crate::inbound::http::persons::update_person,
        crate::inbound::http::persons::delete_person,
    ),
    components(schemas(PersonResponse, CreatePersonBody, UpdatePersonBody, ErrorBody)),
    tags(
        (name = "persons", description = "Operations on person records"),
        (name = "info", description = "Service landing page and summary")
    )
)]
pub struct ApiDoc;
