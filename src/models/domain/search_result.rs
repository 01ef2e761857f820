use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl SearchResult {
    /// The snippet text, if present and non-empty.
    pub fn usable_snippet(&self) -> Option<&str> {
        self.snippet.as_deref().filter(|snippet| !snippet.is_empty())
    }
}
