use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurveyRequest {
    pub topic: String,
}
