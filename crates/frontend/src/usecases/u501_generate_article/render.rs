//! What the article generator shows for a given state.

use super::state::GeneratorState;

pub const SUBMIT_LABEL: &str = "GENERATE";
pub const SUBMIT_BUSY_LABEL: &str = "⏳Generating..";
pub const COPY_LABEL: &str = "Copy Article";
pub const COPIED_LABEL: &str = "Copied!";

/// Shown in the panel when the service returned blank markup.
pub const ARTICLE_PLACEHOLDER: &str = "<p>Artikel belum tersedia.</p>";

/// Content of the article panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleBody {
    /// Markup from the Generation Service, injected as HTML without
    /// sanitisation. The service is trusted to return safe markup.
    Trusted(String),
    Placeholder,
}

impl ArticleBody {
    pub fn markup(&self) -> &str {
        match self {
            ArticleBody::Trusted(markup) => markup,
            ArticleBody::Placeholder => ARTICLE_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error: Option<String>,
    /// `None` hides the copy control.
    pub copy_label: Option<&'static str>,
    /// `None` hides the article panel.
    pub article: Option<ArticleBody>,
}

pub fn display(state: &GeneratorState) -> Display {
    let has_article = !state.article.is_empty();

    Display {
        submit_label: if state.loading {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        },
        submit_disabled: state.loading,
        error: state.error.clone(),
        copy_label: has_article.then_some(if state.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }),
        article: has_article.then(|| {
            if state.article.trim().is_empty() {
                ArticleBody::Placeholder
            } else {
                ArticleBody::Trusted(state.article.clone())
            }
        }),
    }
}
