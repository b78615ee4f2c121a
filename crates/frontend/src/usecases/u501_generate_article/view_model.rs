//! Article generator - ViewModel
//!
//! Owns the reactive state and runs the side effects (request, clipboard,
//! copy feedback timer) that the pure transitions ask for.

use super::model::generate_article;
use super::render::{display, Display};
use super::state::GeneratorState;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::config::AppConfig;
use crate::shared::scheduled::ScheduledCallback;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_article::GenerateArticle;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ArticleGeneratorVm {
    pub state: RwSignal<GeneratorState>,
    pub display: Memo<Display>,
    /// Article markup alone, so scrolling reacts to new articles and not
    /// to typing.
    pub article: Memo<String>,
    endpoint: StoredValue<String>,
    copied_reset_ms: u32,
    copy_reset: StoredValue<ScheduledCallback, LocalStorage>,
}

impl ArticleGeneratorVm {
    pub fn new(config: &AppConfig) -> Self {
        let state = RwSignal::new(GeneratorState::default());

        Self {
            state,
            display: Memo::new(move |_| state.with(display)),
            article: Memo::new(move |_| state.with(|s| s.article.clone())),
            endpoint: StoredValue::new(config.generation.endpoint.clone()),
            copied_reset_ms: config.ui.copied_reset_ms,
            copy_reset: StoredValue::new_local(ScheduledCallback::new()),
        }
    }

    pub fn set_topic(&self, topic: String) {
        self.state.update(|s| s.set_topic(topic));
    }

    /// Validate the topic and, if it passes, request an article.
    pub fn generate(&self) {
        let request = match self.state.try_update(GeneratorState::submit) {
            Some(Ok(request)) => request,
            Some(Err(reason)) => {
                log::debug!("{}: submission rejected: {reason:?}", GenerateArticle::full_name());
                return;
            }
            None => return,
        };
        self.copy_reset.update_value(ScheduledCallback::cancel);

        log::debug!(
            "{}: requesting article for topic '{}'",
            GenerateArticle::full_name(),
            request.topic
        );

        let state = self.state;
        let endpoint = self.endpoint.get_value();
        spawn_local(async move {
            let outcome = generate_article(&endpoint, &request).await;
            match &outcome {
                Ok(resp) => log::debug!(
                    "{}: received {} bytes of markup",
                    GenerateArticle::full_name(),
                    resp.text.len()
                ),
                Err(e) => log::error!(
                    "{}: error fetching article from {endpoint}: {e}",
                    GenerateArticle::full_name()
                ),
            }
            // Dropped if the view was disposed while the request was in flight.
            if let Some(phase) = state.try_update(|s| {
                s.complete(outcome);
                s.phase()
            }) {
                log::debug!("{}: generation finished: {phase:?}", GenerateArticle::full_name());
            }
        });
    }

    /// Copy the raw markup and show "Copied!" until the reset fires.
    pub fn copy_article(&self) {
        let Some(text) = self.state.try_update(GeneratorState::mark_copied).flatten() else {
            return;
        };
        copy_to_clipboard(&text);

        let state = self.state;
        let millis = self.copied_reset_ms;
        self.copy_reset.update_value(|timer| {
            timer.schedule(millis, move || {
                state.try_update(GeneratorState::reset_copied);
            })
        });
    }
}
