use std::sync::Arc;

use crate::{
    clients::SearchClient,
    errors::AppResult,
    models::domain::Question,
    services::blank_generator::BlankGenerator,
};

pub struct SurveyService {
    search_client: Arc<dyn SearchClient>,
    generator: BlankGenerator,
    result_count: u8,
}

impl SurveyService {
    pub fn new(search_client: Arc<dyn SearchClient>, generator: BlankGenerator, result_count: u8) -> Self {
        Self {
            search_client,
            generator,
            result_count,
        }
    }

    /// Searches for `topic` and turns every usable snippet into a question.
    ///
    /// A search failure fails the whole survey; no partial list is returned.
    pub async fn generate_survey(&self, topic: &str) -> AppResult<Vec<Question>> {
        let results = self.search_client.search(topic, self.result_count).await?;

        let snippets = results.iter().filter_map(|result| result.usable_snippet());
        let questions = self.generator.generate_all(snippets);

        log::info!(
            "Generated {} questions from {} search results for topic '{}'",
            questions.len(),
            results.len(),
            topic
        );

        Ok(questions)
    }
}
