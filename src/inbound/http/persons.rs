//! Person collection HTTP handlers.
//!
//! ```text
//! GET /api/persons
//! GET /api/persons/{id}
//! POST /api/persons {"name":"Ada","number":"123"}
//! PUT /api/persons/{id} {"name":"Ada","number":"999"}
//! DELETE /api/persons/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, Person, PersonDraft, PersonId, PersonUpdate};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a person.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreatePersonBody {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Request payload for replacing a person's fields.
///
/// No validation applies here: absent fields are written as empty and the
/// store's constraints decide the outcome.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdatePersonBody {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Response payload for a single person.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<Person> for PersonResponse {
    fn from(value: Person) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            number: value.number,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PersonPath {
    id: String,
}

fn parse_person_id(raw: &str) -> Result<PersonId, Error> {
    raw.parse().map_err(|_| Error::malformed_id())
}

/// List every person in the store.
#[utoipa::path(
    get,
    path = "/api/persons",
    responses(
        (status = 200, description = "All persons", body = [PersonResponse])
    ),
    tags = ["persons"],
    operation_id = "listPersons"
)]
#[get("/persons")]
pub async fn list_persons(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PersonResponse>>> {
    let persons = state.persons.list().await?;
    Ok(web::Json(
        persons.into_iter().map(PersonResponse::from).collect(),
    ))
}

/// Fetch a single person by id.
///
/// A syntactically malformed id is a client error, kept distinct from an
/// absent record.
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    params(
        ("id" = String, Path, description = "Person identifier")
    ),
    responses(
        (status = 200, description = "Person found", body = PersonResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such person")
    ),
    tags = ["persons"],
    operation_id = "getPerson"
)]
#[get("/persons/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<PersonPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path.into_inner().id)?;

    match state.persons.find_by_id(&id).await? {
        Some(person) => Ok(HttpResponse::Ok().json(PersonResponse::from(person))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Create a person.
///
/// Validation runs before any store call; a rejected payload never mutates
/// anything. An existing record with the same name is a conflict.
#[utoipa::path(
    post,
    path = "/api/persons",
    request_body = CreatePersonBody,
    responses(
        (status = 200, description = "Person created", body = PersonResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 409, description = "Name already taken", body = ErrorBody)
    ),
    tags = ["persons"],
    operation_id = "createPerson"
)]
#[post("/persons")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: Option<web::Json<CreatePersonBody>>,
) -> ApiResult<web::Json<PersonResponse>> {
    let body = payload.map(web::Json::into_inner).unwrap_or_default();
    let draft = PersonDraft::from_parts(body.name, body.number)?;

    if state.persons.find_by_name(&draft.name).await?.is_some() {
        return Err(Error::conflict("name must be unique"));
    }

    let person = state.persons.insert(&draft).await?;
    Ok(web::Json(PersonResponse::from(person)))
}

/// Replace a person's `name` and `number`.
///
/// The store performs an atomic find-and-update; when no record matches the
/// id the response body is JSON `null`, mirroring the store yielding no row.
#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    params(
        ("id" = String, Path, description = "Person identifier")
    ),
    request_body = UpdatePersonBody,
    responses(
        (status = 200, description = "Post-update person, or null when absent", body = PersonResponse),
        (status = 400, description = "Malformed id or store validation failure", body = ErrorBody)
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[put("/persons/{id}")]
pub async fn update_person(
    state: web::Data<HttpState>,
    path: web::Path<PersonPath>,
    payload: Option<web::Json<UpdatePersonBody>>,
) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path.into_inner().id)?;
    let body = payload.map(web::Json::into_inner).unwrap_or_default();
    let changes = PersonUpdate {
        name: body.name.unwrap_or_default(),
        number: body.number.unwrap_or_default(),
    };

    let updated = state.persons.update(&id, &changes).await?;
    Ok(HttpResponse::Ok().json(updated.map(PersonResponse::from)))
}

/// Delete a person.
///
/// Idempotent in effect: the response is the same whether or not a record
/// existed.
#[utoipa::path(
    delete,
    path = "/api/persons/{id}",
    params(
        ("id" = String, Path, description = "Person identifier")
    ),
    responses(
        (status = 204, description = "Deleted (or already absent)"),
        (status = 400, description = "Malformed id", body = ErrorBody)
    ),
    tags = ["persons"],
    operation_id = "deletePerson"
)]
#[delete("/persons/{id}")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<PersonPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path.into_inner().id)?;
    state.persons.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "persons_tests.rs"]
mod tests;
