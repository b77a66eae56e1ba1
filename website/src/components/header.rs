use leptos::prelude::*;
use leptos_router::components::A;
use showcase_core::Settings;

use super::theme_toggle::ThemeToggle;
use crate::data;

#[component]
pub fn Header() -> impl IntoView {
    let site = expect_context::<Settings>().site;
    let count = data::extensions().len();
    let live_label = format!("{count} live");

    view! {
        <header class="sticky top-0 z-30 bg-white/80 dark:bg-[#0b1020]/80 backdrop-blur-md border-b border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-3 group focus-ring">
                    <span class="font-bold text-lg tracking-tight">{site.name}</span>
                    <span class="hidden sm:inline text-sm text-slate-500 dark:text-slate-400">
                        {site.tagline}
                    </span>
                </A>

                <div class="flex items-center gap-3">
                    <span
                        class="inline-flex items-center gap-1.5 px-2.5 py-1 text-xs font-medium rounded-full bg-emerald-50 text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300"
                        aria-label=format!("{count} extensions available")
                    >
                        <span class="w-1.5 h-1.5 rounded-full bg-emerald-500 animate-pulse"></span>
                        {live_label}
                    </span>
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}
