pub mod chat_message;
pub mod question;
pub mod search_result;

pub use chat_message::{ChatMessage, ChatRole};
pub use question::Question;
pub use search_result::SearchResult;
