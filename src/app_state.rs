use std::sync::Arc;

use crate::{
    clients::{ChatClient, GoogleSearchClient, MistralChatClient, SearchClient},
    config::Config,
    errors::AppResult,
    services::{BlankGenerator, ChatService, SurveyService},
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub survey_service: Arc<SurveyService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let search_client = Arc::new(GoogleSearchClient::new(&config)?);
        let chat_client = Arc::new(MistralChatClient::new(&config)?);

        Ok(Self::with_clients(config, search_client, chat_client))
    }

    /// Wires the services around the given collaborators.
    pub fn with_clients(
        config: Config,
        search_client: Arc<dyn SearchClient>,
        chat_client: Arc<dyn ChatClient>,
    ) -> Self {
        let generator = BlankGenerator::new(config.blank_index);
        let survey_service = Arc::new(SurveyService::new(
            search_client,
            generator,
            config.search_result_count,
        ));
        let chat_service = Arc::new(ChatService::new(chat_client, config.chat_model.clone()));

        Self {
            chat_service,
            survey_service,
            config: Arc::new(config),
        }
    }
}
