use serde::{Deserialize, Serialize};

/// Successful reply of the Generation Service.
///
/// `text` is HTML produced by the service. It is passed to the UI verbatim.
/// Unknown fields in the reply are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateArticleResponse {
    pub text: String,
}
