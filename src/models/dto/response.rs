use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub questions: Vec<Question>,
}
