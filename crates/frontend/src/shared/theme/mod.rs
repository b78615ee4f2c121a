//! Theme management for the application.
//!
//! Provides a context-based light/dark theme. The preference is persisted in
//! localStorage and applied through a `data-theme` attribute on `<body>`,
//! which the stylesheet keys its palette off.

pub mod storage;

use leptos::prelude::*;
use storage::{BrowserStorage, PreferenceStorage};
use thaw::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Marker written to storage and to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the dark marker selects dark; anything else, including a
    /// missing value, is light.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle control: names the action, not the current state.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Theme preference backed by a [`PreferenceStorage`].
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Read the persisted preference under `key`.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = Theme::from_marker(storage.get(&key).as_deref());
        Self {
            storage,
            key,
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and write its marker back synchronously.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.storage.set(&self.key, self.theme.as_str());
        self.theme
    }
}

/// Apply theme to the document
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    store: StoredValue<PreferenceStore<BrowserStorage>>,
}

impl ThemeContext {
    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip light/dark, persist and apply.
    pub fn toggle(&self) {
        if let Some(next) = self.store.try_update_value(|store| store.toggle()) {
            log::info!("theme switched to {}", next.as_str());
            self.theme.set(next);
            apply_theme(next);
        }
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// localStorage key holding the preference
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    // Load theme from storage on initial render
    let store = PreferenceStore::load(BrowserStorage, storage_key);
    let initial_theme = store.theme();
    apply_theme(initial_theme);

    let context = ThemeContext {
        theme: RwSignal::new(initial_theme),
        store: StoredValue::new(store),
    };
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark switch.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| ctx.toggle()
        >
            {move || ctx.get_theme().toggle_label()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::storage::MemoryStorage;
    use super::*;

    #[test]
    fn test_marker_parsing() {
        assert_eq!(Theme::from_marker(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_marker(Some("light")), Theme::Light);
        assert_eq!(Theme::from_marker(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_marker(Some("")), Theme::Light);
        assert_eq!(Theme::from_marker(None), Theme::Light);
    }

    #[test]
    fn test_toggle_label_names_the_action() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }

    #[test]
    fn test_load_absent_key_is_light() {
        let storage = MemoryStorage::new();
        let store = PreferenceStore::load(&storage, "theme");
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn test_load_dark_marker() {
        let storage = MemoryStorage::with_item("theme", "dark");
        assert_eq!(PreferenceStore::load(&storage, "theme").theme(), Theme::Dark);
    }

    #[test]
    fn test_load_reads_only_its_key() {
        let storage = MemoryStorage::with_item("app-theme", "dark");
        assert_eq!(PreferenceStore::load(&storage, "theme").theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_every_change() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::load(&storage, "theme");

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_toggled_preference_survives_reload() {
        let storage = MemoryStorage::new();
        PreferenceStore::load(&storage, "theme").toggle();
        assert_eq!(PreferenceStore::load(&storage, "theme").theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_without_persistence_still_flips() {
        // A backend that drops writes, like localStorage in a locked-down browser.
        struct Unavailable;
        impl PreferenceStorage for Unavailable {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }
            fn set(&self, _key: &str, _value: &str) {}
        }

        let mut store = PreferenceStore::load(Unavailable, "theme");
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }
}
