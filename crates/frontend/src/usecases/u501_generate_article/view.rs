//! Article generator - View Component

use super::render::COPY_LABEL;
use super::view_model::ArticleGeneratorVm;
use crate::shared::config::AppConfig;
use crate::shared::theme::ThemeToggle;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_article::{GenerateArticle, TOPIC_INPUT_MAX_CHARS};
use leptos::html::Div;
use leptos::prelude::*;
use thaw::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

fn scroll_into_view(target: NodeRef<Div>) {
    if let Some(element) = target.get_untracked() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ArticleGenerator() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let vm = ArticleGeneratorVm::new(&config);
    let article_ref = NodeRef::<Div>::new();

    // Scroll to the panel when it appears and whenever the markup changes
    Effect::new(move |_| {
        if !vm.article.with(|a| a.is_empty()) {
            request_animation_frame(move || scroll_into_view(article_ref));
        }
    });

    let article_markup = move || {
        vm.display.with(|d| {
            d.article
                .as_ref()
                .map(|body| body.markup().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="article-generator">
            <div class="article-generator__form">
                <div class="article-generator__header">
                    <h1 class="article-generator__title">{GenerateArticle::display_name()}</h1>
                    <ThemeToggle />
                </div>

                <input
                    type="text"
                    class="article-generator__input"
                    placeholder="Masukkan Topic artikel..."
                    maxlength=TOPIC_INPUT_MAX_CHARS.to_string()
                    prop:value=move || vm.state.with(|s| s.topic.clone())
                    on:input=move |ev| vm.set_topic(event_target_value(&ev))
                />

                <Show when=move || vm.display.with(|d| d.error.is_some())>
                    <p class="article-generator__error">
                        {move || vm.display.with(|d| d.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <div class="article-generator__submit">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.display.with(|d| d.submit_disabled))
                        on_click=move |_| vm.generate()
                    >
                        {move || vm.display.with(|d| d.submit_label)}
                    </Button>
                </div>
            </div>

            <Show when=move || vm.display.with(|d| d.copy_label.is_some())>
                <div class="article-generator__copy">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.copy_article()
                    >
                        {move || vm.display.with(|d| d.copy_label.unwrap_or(COPY_LABEL))}
                    </Button>
                </div>
            </Show>

            <Show when=move || vm.display.with(|d| d.article.is_some())>
                // Service markup is injected as-is (see `ArticleBody::Trusted`)
                <div class="article-generator__panel" node_ref=article_ref>
                    <div class="article-content" inner_html=article_markup></div>
                </div>
            </Show>
        </div>
    }
}
