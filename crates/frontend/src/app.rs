use crate::shared::config::AppConfig;
use crate::shared::theme::ThemeProvider;
use crate::usecases::u501_generate_article::view::ArticleGenerator;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage_key = config.theme.storage_key.clone();

    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <ThemeProvider storage_key=storage_key>
            <ArticleGenerator />
        </ThemeProvider>
    }
}
