//! Service landing page and the `/info` summary.

use actix_web::{HttpResponse, get, http::header::ContentType, web};
use chrono::Utc;

use crate::domain::ApiResult;
use crate::inbound::http::state::HttpState;

/// Landing page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome page", body = String, content_type = "text/html")
    ),
    tags = ["info"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body("<h1>Welcome to the phonebook</h1>")
}

/// Record count plus the current server time.
///
/// A store failure here is a transient condition reported as a generic
/// server error, never a crash.
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Count and timestamp", body = String, content_type = "text/html"),
        (status = 500, description = "Store unreachable")
    ),
    tags = ["info"],
    operation_id = "info"
)]
#[get("/info")]
pub async fn info(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let count = state.persons.count().await?;
    let now = Utc::now();

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!("Phonebook has info for {count} persons<br/>{now}")))
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
