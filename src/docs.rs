//! OpenAPI annotation with the standard responses of each HTTP verb.
//!
//! [`HttpVerbResponses`] is a `utoipa` [`Modify`] hook: register it with
//! `#[openapi(modifiers(&HttpVerbResponses))]` and every operation in the
//! generated document gets its conventional status codes.

use utoipa::openapi::path::{Operation, PathItemType};
use utoipa::openapi::{OpenApi, RefOr, Response};
use utoipa::Modify;

/// Adds the standard HTTP verb responses to every documented operation.
///
/// - every operation: 401, 400 and 500
/// - `GET` on a templated path (`/snacks/{id}`), `PUT` and `PATCH`: 404
/// - `DELETE`: 204 instead of 200
pub struct HttpVerbResponses;

impl Modify for HttpVerbResponses {
    fn modify(&self, openapi: &mut OpenApi) {
        for (template, item) in openapi.paths.paths.iter_mut() {
            for (verb, operation) in item.operations.iter_mut() {
                annotate(template, verb, operation);
            }
        }
    }
}

/// Annotate a single operation served at `template` for `verb`.
pub fn annotate(template: &str, verb: &PathItemType, operation: &mut Operation) {
    let responses = &mut operation.responses.responses;

    responses.insert("401".into(), response("Unauthorized"));
    responses.insert("400".into(), response("Bad Request"));
    responses.insert("500".into(), response("Internal Server Error"));

    let reads_one = matches!(verb, PathItemType::Get) && template.contains('{');
    if reads_one || matches!(verb, PathItemType::Put | PathItemType::Patch) {
        responses.insert("404".into(), response("Not Found"));
    }

    if matches!(verb, PathItemType::Delete) {
        responses.remove("200");
        responses.insert("204".into(), response("No Content"));
    }
}

fn response(description: &str) -> RefOr<Response> {
    RefOr::T(Response::new(description))
}
