use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::ChatRequest, response::ChatResponse},
};

#[post("/chat")]
pub async fn chat(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    log::info!("[{}] chat message of {} chars", request_id, request.message.chars().count());

    let response = state.chat_service.reply(&request.message).await.map_err(|e| {
        log::error!("[{}] chat relay failed ({}): {}", request_id, e.error_code(), e);
        e
    })?;

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}
