pub mod request;
pub mod response;
pub mod validation;

pub use request::GenerateArticleRequest;
pub use response::GenerateArticleResponse;
pub use validation::{validate_topic, ValidationError, TOPIC_INPUT_MAX_CHARS, TOPIC_MAX_CHARS};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateArticle;

impl UseCaseMetadata for GenerateArticle {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "generate_article"
    }

    fn display_name() -> &'static str {
        "ARTICLE"
    }
}
