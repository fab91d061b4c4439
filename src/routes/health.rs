use rocket::serde::json::{json, Json, Value};

#[get("/")]
pub async fn index() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[get("/health_check")]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
