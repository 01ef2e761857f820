use actix_web::{get, HttpResponse};

use crate::models::dto::response::StatusResponse;

pub const ROOT_MESSAGE: &str = "TriviaBot backend is running!";

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
