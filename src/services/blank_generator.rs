use crate::models::domain::Question;

pub const BLANK_MARKER: &str = "_____";
pub const DEFAULT_BLANK_INDEX: usize = 3;
/// Snippets need strictly more than five words to produce a question.
pub const MIN_SNIPPET_WORDS: usize = 6;

/// Turns search snippets into fill-in-the-blank questions by masking the
/// word at a fixed position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlankGenerator {
    blank_index: usize,
}

impl Default for BlankGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BLANK_INDEX)
    }
}

impl BlankGenerator {
    pub fn new(blank_index: usize) -> Self {
        Self { blank_index }
    }

    /// Produces at most one question for `snippet`.
    ///
    /// Whitespace runs collapse to single spaces in the question text.
    pub fn generate(&self, snippet: &str) -> Option<Question> {
        let mut words: Vec<&str> = snippet.split_whitespace().collect();
        if words.len() < MIN_SNIPPET_WORDS {
            return None;
        }

        let answer = words.get(self.blank_index)?.to_string();
        words[self.blank_index] = BLANK_MARKER;

        Some(Question {
            question: words.join(" "),
            answer,
        })
    }

    pub fn generate_all<'a, I>(&self, snippets: I) -> Vec<Question>
    where
        I: IntoIterator<Item = &'a str>,
    {
        snippets
            .into_iter()
            .filter_map(|snippet| self.generate(snippet))
            .collect()
    }
}
