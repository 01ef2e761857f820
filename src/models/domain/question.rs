use serde::{Deserialize, Serialize};

/// A fill-in-the-blank question derived from one search snippet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_serializes_with_question_and_answer_keys() {
        let question = Question {
            question: "The quick brown _____ jumps".to_string(),
            answer: "fox".to_string(),
        };

        let json = serde_json::to_value(&question).expect("question should serialize");
        assert_eq!(
            json,
            serde_json::json!({ "question": "The quick brown _____ jumps", "answer": "fox" })
        );
    }
}
