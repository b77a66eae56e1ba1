use leptos::prelude::*;

use super::icons::Search;

/// Free-text query box. The caller owns the value and decides what it filters.
#[component]
pub fn SearchInput(query: RwSignal<String>) -> impl IntoView {
    view! {
        <div role="search" class="relative w-full max-w-xl mx-auto">
            <Search class="absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-slate-400 pointer-events-none" />
            <input
                type="search"
                aria-label="Search extensions"
                placeholder="Search extensions by name or tag..."
                class="w-full pl-10 pr-4 py-2.5 rounded-full border border-slate-200 bg-white/80 text-sm placeholder:text-slate-400 dark:border-slate-700 dark:bg-slate-900/60 focus-ring"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
