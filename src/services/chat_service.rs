use std::sync::Arc;

use crate::{
    clients::ChatClient,
    constants::prompts::TRIVIA_HOST_PROMPT,
    errors::AppResult,
    models::domain::ChatMessage,
};

pub struct ChatService {
    chat_client: Arc<dyn ChatClient>,
    model: String,
}

impl ChatService {
    pub fn new(chat_client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            chat_client,
            model: model.into(),
        }
    }

    pub fn conversation(message: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(TRIVIA_HOST_PROMPT),
            ChatMessage::user(message),
        ]
    }

    /// Relays `message` to the trivia host model. Empty messages are sent as-is.
    pub async fn reply(&self, message: &str) -> AppResult<String> {
        let messages = Self::conversation(message);
        self.chat_client.complete(&self.model, &messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clients::chat_client::MockChatClient,
        errors::AppError,
        models::domain::ChatRole,
    };

    #[test]
    fn test_conversation_is_system_prompt_then_user_message() {
        let messages = ChatService::conversation("Ask me about space");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, TRIVIA_HOST_PROMPT);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[1].content, "Ask me about space");
    }

    #[actix_web::test]
    async fn test_reply_returns_completion_verbatim() {
        let mut mock = MockChatClient::new();
        mock.expect_complete()
            .withf(|model, messages| {
                model == "mistral-tiny" && messages.len() == 2 && messages[1].content == "hi"
            })
            .times(1)
            .returning(|_, _| Ok("# Welcome!\n\n- Question 1".to_string()));

        let service = ChatService::new(Arc::new(mock), "mistral-tiny");
        let reply = service.reply("hi").await.unwrap();

        assert_eq!(reply, "# Welcome!\n\n- Question 1");
    }

    #[actix_web::test]
    async fn test_reply_forwards_empty_message() {
        let mut mock = MockChatClient::new();
        mock.expect_complete()
            .withf(|_, messages| messages[1].content.is_empty())
            .times(1)
            .returning(|_, _| Ok("What would you like to play?".to_string()));

        let service = ChatService::new(Arc::new(mock), "mistral-tiny");

        assert_eq!(service.reply("").await.unwrap(), "What would you like to play?");
    }

    #[actix_web::test]
    async fn test_reply_propagates_upstream_error() {
        let mut mock = MockChatClient::new();
        mock.expect_complete().returning(|_, _| {
            Err(AppError::UpstreamError(
                "chat completion returned 401 Unauthorized: {\"message\":\"Unauthorized\"}".into(),
            ))
        });

        let service = ChatService::new(Arc::new(mock), "mistral-tiny");
        let err = service.reply("hi").await.unwrap_err();

        assert!(err.to_string().contains("401 Unauthorized"));
    }
}
