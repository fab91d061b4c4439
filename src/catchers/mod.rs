use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::{json, Json, Value};
use rocket::Request;

/// Body guards reject unparseable JSON with 400 or 422; both become a 400
/// with a JSON error body.
#[catch(422)]
pub fn unprocessable_entity_to_bad_request(req: &Request) -> status::Custom<Json<Value>> {
    malformed_body(req)
}

#[catch(400)]
pub fn bad_request(req: &Request) -> status::Custom<Json<Value>> {
    malformed_body(req)
}

#[catch(404)]
pub fn not_found(_req: &Request) -> status::Custom<Json<Value>> {
    status::Custom(Status::NotFound, Json(json!({ "error": "Not found" })))
}

#[catch(500)]
pub fn internal_server_error(_req: &Request) -> status::Custom<Json<Value>> {
    status::Custom(
        Status::InternalServerError,
        Json(json!({ "error": "Internal server error" })),
    )
}

fn malformed_body(req: &Request) -> status::Custom<Json<Value>> {
    tracing::info!(uri = %req.uri(), "Rejected a malformed request body");
    status::Custom(
        Status::BadRequest,
        Json(json!({ "error": "Malformed request body" })),
    )
}
