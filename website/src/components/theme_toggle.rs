use leptos::prelude::*;

use super::icons::{Moon, Sun};
use crate::theme::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            aria-label="Toggle theme"
            aria-pressed=move || theme.get().is_dark().to_string()
            class="p-2 rounded-full text-slate-600 hover:text-slate-900 hover:bg-slate-100 dark:text-slate-300 dark:hover:text-white dark:hover:bg-slate-800 transition-colors focus-ring"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || {
                if theme.get().is_dark() {
                    view! { <Sun class="w-5 h-5" /> }.into_any()
                } else {
                    view! { <Moon class="w-5 h-5" /> }.into_any()
                }
            }}
        </button>
    }
}
