use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::SurveyRequest, response::SurveyResponse},
};

#[post("/survey")]
pub async fn survey(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SurveyRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    log::info!("[{}] survey requested for topic '{}'", request_id, request.topic);

    let questions = state
        .survey_service
        .generate_survey(&request.topic)
        .await
        .map_err(|e| {
            log::error!("[{}] survey generation failed ({}): {}", request_id, e.error_code(), e);
            e
        })?;

    Ok(HttpResponse::Ok().json(SurveyResponse { questions }))
}
