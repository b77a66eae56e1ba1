use leptos::prelude::*;
use showcase_core::{filter_records, ExtensionRecord};

use crate::components::extension_card::ExtensionCard;
use crate::components::hero::Hero;
use crate::components::how_to_download::HowToDownload;
use crate::components::search_input::SearchInput;
use crate::data;

#[component]
pub fn Home() -> impl IntoView {
    let records = StoredValue::new(data::extensions().into_records());
    let query = RwSignal::new(String::new());

    let grid = move || {
        let matches: Vec<ExtensionRecord> = records.with_value(|all| {
            filter_records(all, &query.get()).into_iter().cloned().collect()
        });

        if records.with_value(Vec::is_empty) {
            view! {
                <p class="text-center text-slate-500 dark:text-slate-400 py-16">
                    "No extensions found \u{2014} ensure "
                    <code class="font-mono">"data/extensions.json"</code>
                    " exists."
                </p>
            }
            .into_any()
        } else if matches.is_empty() {
            view! {
                <p class="text-center text-slate-500 dark:text-slate-400 py-16" role="status">
                    {format!("No extensions match \u{201C}{}\u{201D}.", query.get().trim())}
                </p>
            }
            .into_any()
        } else {
            view! {
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {matches.into_iter().map(|ext| view! { <ExtensionCard ext=ext /> }).collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="space-y-24 pb-24">
            <Hero />

            <section class="px-6 max-w-7xl mx-auto" aria-label="Extensions">
                <div class="mb-10">
                    <SearchInput query=query />
                </div>
                {grid}
            </section>

            <HowToDownload />
        </div>
    }
}
