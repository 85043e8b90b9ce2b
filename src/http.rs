//! HTTP transport for the snacks controller.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /snacks?max-calories=N` - list snacks, ordered by id.
//! - `GET /snacks/{id}` - read one snack.
//! - `POST /snacks` - create a snack; responds `201 Created`.
//! - `PUT /snacks/{id}` - replace name and calories.
//! - `PATCH /snacks/{id}` - apply a list of patch operations.
//! - `DELETE /snacks/{id}` - delete; responds `204 No Content`.
//! - `GET /health` - health check returning `{ "ok": true }`.
//! - `GET /api-docs/openapi.json` - the annotated OpenAPI document.
//!
//! Failures are returned as `{ "error": "<message>" }` with the status of
//! the [`ControllerError`].
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use snacks_api::{http, InMemorySnackRepository, SnacksController};
//!
//! let controller = Arc::new(SnacksController::new(InMemorySnackRepository::seeded()));
//! http::serve(controller, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};
use utoipa::OpenApi;

use crate::controller::{ControllerError, SnacksController};
use crate::docs::HttpVerbResponses;
use crate::patch::PatchOperation;
use crate::repository::SnackRepository;
use crate::snack::{Snack, SnackFilters};

type Shared<R> = State<Arc<SnacksController<R>>>;

/// The OpenAPI document for the snacks API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snacks API",
        description = "A CRUD API for Snack records"
    ),
    paths(list_snacks, get_snack, create_snack, update_snack, patch_snack, delete_snack),
    components(schemas(Snack, PatchOperation)),
    modifiers(&HttpVerbResponses),
    tags((name = "snacks"))
)]
pub struct ApiDoc;

/// Build an axum `Router` serving the snacks API from `controller`.
pub fn router<R: SnackRepository + 'static>(controller: Arc<SnacksController<R>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route("/snacks", get(list_snacks::<R>).post(create_snack::<R>))
        .route(
            "/snacks/:id",
            get(get_snack::<R>)
                .put(update_snack::<R>)
                .patch(patch_snack::<R>)
                .delete(delete_snack::<R>),
        )
        .with_state(controller)
}

/// Serve the snacks API over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<R: SnackRepository + 'static>(
    controller: Arc<SnacksController<R>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(controller);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving snacks API");
    axum::serve(listener, app).await
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// `GET /health` - returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `GET /api-docs/openapi.json`
async fn openapi_handler() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// List snacks, optionally capped by calories.
///
/// GET is idempotent: it only reads.
#[utoipa::path(
    get,
    path = "/snacks",
    tag = "snacks",
    params(("max-calories" = Option<i32>, Query, description = "Inclusive upper bound on calories")),
    responses((status = 200, description = "Success", body = [Snack]))
)]
async fn list_snacks<R: SnackRepository + 'static>(
    State(controller): Shared<R>,
    Query(filters): Query<SnackFilters>,
) -> Result<Json<Vec<Snack>>, ControllerError> {
    controller.list(&filters).map(Json)
}

/// Read a single snack.
#[utoipa::path(
    get,
    path = "/snacks/{id}",
    tag = "snacks",
    params(("id" = i32, Path, description = "Snack id")),
    responses((status = 200, description = "Success", body = Snack))
)]
async fn get_snack<R: SnackRepository + 'static>(
    State(controller): Shared<R>,
    Path(id): Path<i32>,
) -> Result<Json<Snack>, ControllerError> {
    controller.get(id).map(Json)
}

/// Create a snack. Any `id` in the body is ignored.
///
/// POST is not idempotent: an identical body creates another snack.
#[utoipa::path(
    post,
    path = "/snacks",
    tag = "snacks",
    request_body = Snack,
    responses((status = 201, description = "Created", body = Snack))
)]
async fn create_snack<R: SnackRepository + 'static>(
    State(controller): Shared<R>,
    Json(snack): Json<Snack>,
) -> Result<(StatusCode, Json<Snack>), ControllerError> {
    let created = controller.create(snack)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the name and calories of a snack. The body id must match the path id.
///
/// PUT is idempotent: repeating the request changes nothing further.
#[utoipa::path(
    put,
    path = "/snacks/{id}",
    tag = "snacks",
    params(("id" = i32, Path, description = "Snack id")),
    request_body = Snack,
    responses((status = 200, description = "Success", body = Snack))
)]
async fn update_snack<R: SnackRepository + 'static>(
    State(controller): Shared<R>,
    Path(id): Path<i32>,
    Json(snack): Json<Snack>,
) -> Result<Json<Snack>, ControllerError> {
    controller.update(id, snack).map(Json)
}

/// Apply patch operations to a snack, in order.
///
/// PATCH is not idempotent: repeating a `move` fails once its source is gone.
#[utoipa::path(
    patch,
    path = "/snacks/{id}",
    tag = "snacks",
    params(("id" = i32, Path, description = "Snack id")),
    request_body = [PatchOperation],
    responses((status = 200, description = "Success", body = Snack))
)]
async fn patch_snack<R: SnackRepository + 'static>(
    State(controller): Shared<R>,
    Path(id): Path<i32>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> Result<Json<Snack>, ControllerError> {
    controller.patch(id, &operations).map(Json)
}

/// Delete a snack.
///
/// DELETE is idempotent in effect: a repeat finds nothing and returns 404.
#[utoipa::path(
    delete,
    path = "/snacks/{id}",
    tag = "snacks",
    params(("id" = i32, Path, description = "Snack id")),
    responses((status = 200, description = "Success"))
)]
async fn delete_snack<R: SnackRepository + 'static>(
    State(controller): Shared<R>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ControllerError> {
    controller.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
