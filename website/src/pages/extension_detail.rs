use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use showcase_core::{ExtensionRecord, Settings, SoftwareApplication};

use crate::components::badge::TagList;
use crate::components::gallery::ScreenshotGallery;
use crate::components::icons::{Download, Github};
use crate::data;

#[component]
pub fn ExtensionDetail() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        let found = data::extensions().find_by_slug(&slug).cloned();
        match found {
            Some(ext) => view! { <ExtensionPage ext=ext /> }.into_any(),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-6 py-24 text-center">
            <h1 class="text-3xl font-bold mb-4">"Extension not found"</h1>
            <p class="text-slate-600 dark:text-slate-400 mb-8">
                "Check that the slug exists in "
                <code class="font-mono">"data/extensions.json"</code>
                "."
            </p>
            <A
                href="/"
                attr:class="inline-flex px-6 py-2.5 rounded-full bg-slate-900 text-white font-medium hover:bg-slate-700 dark:bg-white dark:text-black dark:hover:bg-slate-200 transition-colors"
            >
                "Go back"
            </A>
        </div>
    }
}

#[component]
fn ExtensionPage(ext: ExtensionRecord) -> impl IntoView {
    let site = expect_context::<Settings>().site;
    let structured = SoftwareApplication::from_record_lossy(&ext, &site).to_script_json();
    let page_title = format!("{} \u{2014} {}", ext.title, site.name);
    let download_href = ext.download_href().to_string();
    let github_href = ext.github_href().to_string();

    let ExtensionRecord {
        title,
        short_desc,
        long_desc,
        tags,
        screenshots,
        ..
    } = ext;

    view! {
        <Title text=page_title />
        <script type="application/ld+json" inner_html=structured></script>

        <div class="max-w-6xl mx-auto px-6 py-16 grid lg:grid-cols-3 gap-12">
            <article class="lg:col-span-2">
                <h1 class="text-4xl font-black tracking-tight mb-4">{title.clone()}</h1>
                <p class="text-lg text-slate-600 dark:text-slate-400 mb-8">{short_desc}</p>

                <div class="flex flex-wrap gap-3 mb-10">
                    <a
                        href=download_href
                        rel="noopener noreferrer"
                        class="btn-icon inline-flex items-center gap-2 px-6 py-2.5 rounded-full bg-slate-900 text-white font-medium hover:bg-slate-700 dark:bg-white dark:text-black dark:hover:bg-slate-200 transition-colors"
                    >
                        <Download class="w-5 h-5" />
                        "Download"
                    </a>
                    <a
                        href=github_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-icon inline-flex items-center gap-2 px-6 py-2.5 rounded-full border border-slate-300 font-medium hover:bg-slate-100 dark:border-slate-700 dark:hover:bg-slate-800 transition-colors"
                    >
                        <Github class="w-5 h-5" />
                        "View on GitHub"
                    </a>
                </div>

                <div class="prose dark:prose-invert max-w-none whitespace-pre-line leading-relaxed">
                    {long_desc}
                </div>
            </article>

            <aside class="space-y-8">
                <ScreenshotGallery
                    title=title
                    screenshots=screenshots
                    image_class="w-full h-auto rounded-lg border border-slate-200 dark:border-slate-800"
                />

                <div class="rounded-2xl border border-slate-200 dark:border-slate-800 p-6 space-y-4">
                    <h2 class="font-semibold">"Details"</h2>
                    <div>
                        <h3 class="text-xs uppercase tracking-wide text-slate-500 mb-2">"Tags"</h3>
                        <TagList tags=tags />
                    </div>
                    <div>
                        <h3 class="text-xs uppercase tracking-wide text-slate-500 mb-1">"Version"</h3>
                        <p class="text-sm">{site.software_version}</p>
                    </div>
                </div>
            </aside>
        </div>
    }
}
