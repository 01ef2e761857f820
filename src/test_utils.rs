#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::SearchResult;

    /// Creates a search result carrying only a snippet
    pub fn search_result(snippet: Option<&str>) -> SearchResult {
        SearchResult {
            title: Some("Result".to_string()),
            link: Some("https://example.com".to_string()),
            snippet: snippet.map(str::to_string),
        }
    }

    /// Five results, two of which have no usable snippet
    pub fn search_results_with_gaps() -> Vec<SearchResult> {
        vec![
            search_result(Some("The quick brown fox jumps over the lazy dog")),
            search_result(Some("")),
            search_result(Some("Jupiter is the largest planet in the Solar System.")),
            search_result(None),
            search_result(Some("Mercury is the closest planet to the Sun.")),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_search_results_with_gaps() {
        let results = search_results_with_gaps();
        assert_eq!(results.len(), 5);
        assert_eq!(
            results.iter().filter(|r| r.usable_snippet().is_some()).count(),
            3
        );
    }
}
