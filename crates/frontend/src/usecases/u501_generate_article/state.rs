//! Article generator state and its transitions.
//!
//! Everything here is plain data: the view model keeps one
//! [`GeneratorState`] in a signal and only changes it through these methods.

use super::model::GenerationRequestError;
use contracts::usecases::u501_generate_article::{
    validate_topic, GenerateArticleRequest, GenerateArticleResponse, ValidationError,
};

/// Placed in the article when generation fails.
pub const FAILED_ARTICLE: &str = "Retry";

/// Shown to the user when generation fails; details go to the console only.
pub const GENERATION_FAILED_MESSAGE: &str = "Gagal menghasilkan artikel.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub topic: String,
    pub loading: bool,
    /// Markup from the service; empty until the first response.
    pub article: String,
    pub error: Option<String>,
    pub copied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Succeeded,
    Failed,
}

/// Why a submission did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is already outstanding.
    Busy,
    Invalid(ValidationError),
}

impl GeneratorState {
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Generating
        } else if self.article == FAILED_ARTICLE && self.error.is_some() {
            Phase::Failed
        } else if !self.article.is_empty() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }

    /// Start a generation.
    ///
    /// Returns the request to send. On a validation failure the error message
    /// is set and nothing else changes. While a request is outstanding the
    /// call is rejected without touching the state.
    pub fn submit(&mut self) -> Result<GenerateArticleRequest, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::Busy);
        }
        if let Err(e) = validate_topic(&self.topic) {
            self.error = Some(e.to_string());
            return Err(SubmitRejected::Invalid(e));
        }
        self.loading = true;
        self.error = None;
        self.copied = false;
        Ok(GenerateArticleRequest::new(self.topic.clone()))
    }

    /// Apply the outcome of the request started by [`Self::submit`].
    pub fn complete(&mut self, outcome: Result<GenerateArticleResponse, GenerationRequestError>) {
        match outcome {
            Ok(response) => self.article = response.text,
            Err(_) => {
                self.article = FAILED_ARTICLE.to_string();
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Mark the article as copied and return the text to put on the
    /// clipboard. Nothing to copy while no article exists.
    pub fn mark_copied(&mut self) -> Option<String> {
        if self.article.is_empty() {
            return None;
        }
        self.copied = true;
        Some(self.article.clone())
    }

    pub fn reset_copied(&mut self) {
        self.copied = false;
    }
}
