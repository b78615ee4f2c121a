use serde::{Deserialize, Serialize};

/// Body of the POST sent to the Generation Service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateArticleRequest {
    /// Seed text for the article. The service expects a capitalised key.
    #[serde(rename = "Topic")]
    pub topic: String,
}

impl GenerateArticleRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_capitalised_key() {
        let json = serde_json::to_value(GenerateArticleRequest::new("cats")).unwrap();
        assert_eq!(json, serde_json::json!({ "Topic": "cats" }));
    }

    #[test]
    fn test_topic_sent_untrimmed() {
        let json = serde_json::to_string(&GenerateArticleRequest::new("  rust  ")).unwrap();
        assert_eq!(json, r#"{"Topic":"  rust  "}"#);
    }
}
