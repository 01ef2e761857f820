pub mod chat_handler;
pub mod status_handler;
pub mod survey_handler;

use actix_web::web;

use crate::errors::AppError;

pub use chat_handler::chat;
pub use status_handler::{health_check, root};
pub use survey_handler::survey;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(health_check)
        .service(chat)
        .service(survey);
}

/// Reports malformed request bodies as `{ "detail": ... }` like every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
