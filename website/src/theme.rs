//! Theme preference provider: local storage plus the `dark` root class

use leptos::prelude::*;
use showcase_core::theme::DARK_CLASS;
use showcase_core::{Theme, THEME_STORAGE_KEY};

#[derive(Clone, Copy)]
pub struct ThemeContext(pub RwSignal<Theme>);

/// Restore the stored preference and keep storage and the DOM in sync with it.
pub fn provide_theme() {
    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let theme = RwSignal::new(Theme::from_stored(stored.as_deref()));

    Effect::new(move || {
        let current = theme.get();
        apply_root_class(current);
        if let Some(storage) = storage() {
            if storage.set_item(THEME_STORAGE_KEY, current.as_str()).is_err() {
                log::warn!("could not persist theme preference");
            }
        }
    });

    provide_context(ThemeContext(theme));
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<ThemeContext>().0
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn apply_root_class(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}
