//! Active interface language, persisted to `localStorage`.

use leptos::prelude::*;

use crate::net::storage;
use crate::util::i18n::{Language, translate};

const STORAGE_KEY: &str = "sphere_language";

/// Provide the language signal. The stored choice is applied after
/// hydration so the server-rendered markup (always EN) matches.
pub fn install() -> RwSignal<Language> {
    let language = RwSignal::new(Language::default());
    provide_context(language);
    Effect::new(move || {
        if let Some(saved) = storage::load_item(STORAGE_KEY).and_then(|raw| Language::parse(&raw)) {
            language.set(saved);
        }
    });
    language
}

pub fn use_language() -> RwSignal<Language> {
    expect_context::<RwSignal<Language>>()
}

/// Switch language and remember the choice.
pub fn choose(language: RwSignal<Language>, next: Language) {
    language.set(next);
    storage::save_item(STORAGE_KEY, next.code());
}

/// Reactive translation of a fixed key, for use directly in `view!`.
pub fn tr(language: RwSignal<Language>, key: &'static str) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || translate(language.get(), key)
}
