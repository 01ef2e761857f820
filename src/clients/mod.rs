pub mod chat_client;
pub mod search_client;

pub use chat_client::{ChatClient, MistralChatClient};
pub use search_client::{GoogleSearchClient, SearchClient};
