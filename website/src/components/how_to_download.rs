use leptos::prelude::*;

use super::video_player::VideoPlayer;
use crate::data::tutorials;

#[component]
pub fn HowToDownload() -> impl IntoView {
    view! {
        <section id="how-to-install" class="px-6 max-w-6xl mx-auto" aria-labelledby="how-to-install-title">
            <div class="text-center mb-12">
                <h2 id="how-to-install-title" class="text-3xl font-bold mb-4">
                    "How to install"
                </h2>
                <p class="text-slate-600 dark:text-slate-400">
                    "Two short walkthroughs, one for each kind of extension."
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                {tutorials().into_iter().map(|tutorial| {
                    view! {
                        <div class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white/70 dark:bg-slate-900/50 p-6">
                            <h3 class="text-xl font-bold mb-4">{tutorial.title}</h3>
                            <VideoPlayer
                                src=tutorial.src
                                poster=tutorial.poster
                                title=tutorial.title
                                download_href=tutorial.download_href
                            />
                            <ol class="mt-6 space-y-2 list-decimal list-inside text-sm text-slate-700 dark:text-slate-300">
                                {tutorial.steps.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                            </ol>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
