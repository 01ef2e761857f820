pub mod blank_generator;
pub mod chat_service;
pub mod survey_service;

pub use blank_generator::BlankGenerator;
pub use chat_service::ChatService;
pub use survey_service::SurveyService;
