use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use showcase_core::{ExtensionRecord, Settings};

use super::badge::TagList;
use super::fallback_image::FallbackImage;
use super::gallery::ScreenshotGallery;
use super::icons::{Download, Github};
use super::modal::Modal;

#[component]
pub fn ExtensionCard(ext: ExtensionRecord) -> impl IntoView {
    let placeholder = expect_context::<Settings>().paths.placeholder;
    let gallery_open = RwSignal::new(false);
    let cover_ref: NodeRef<html::Button> = NodeRef::new();

    let cover = ext.cover_image(&placeholder).to_string();
    let title_id = ext.title_id();
    let detail_path = ext.detail_path();
    let download_href = ext.download_href().to_string();
    let github_href = ext.github_href().to_string();
    let open_label = format!("Open screenshots for {}", ext.title);
    let modal_title = format!("{} screenshots", ext.title);

    let ExtensionRecord {
        slug,
        title,
        short_desc,
        tags,
        screenshots,
        ..
    } = ext;
    let gallery_title = title.clone();

    view! {
        <article
            class="extension-card group flex flex-col rounded-2xl overflow-hidden border border-slate-200 bg-white/70 dark:border-slate-800 dark:bg-slate-900/50 hover:border-slate-300 dark:hover:border-slate-700 transition-colors"
            aria-labelledby=title_id.clone()
        >
            <button
                node_ref=cover_ref
                type="button"
                class="relative block w-full aspect-video overflow-hidden bg-slate-100 dark:bg-slate-800 focus-ring"
                aria-label=open_label
                on:click=move |_| gallery_open.set(true)
            >
                <FallbackImage
                    src=cover
                    alt=format!("{} screenshot", title)
                    class="w-full h-full object-cover group-hover:scale-[1.02] transition-transform"
                    lazy=true
                />
            </button>

            <div class="flex flex-col gap-3 p-5 flex-1">
                <h3 id=title_id class="text-lg font-semibold">
                    <A href=detail_path attr:class="hover:underline focus-ring">
                        {title.clone()}
                    </A>
                </h3>
                <p class="text-sm text-slate-600 dark:text-slate-400 leading-relaxed flex-1">
                    {short_desc}
                </p>
                <TagList tags=tags />

                <div class="flex items-center gap-3 pt-2">
                    <a
                        href=download_href
                        rel="noopener noreferrer"
                        class="btn-icon inline-flex items-center gap-2 px-4 py-2 rounded-full bg-slate-900 text-white text-sm font-medium hover:bg-slate-700 dark:bg-white dark:text-black dark:hover:bg-slate-200 transition-colors"
                        aria-label=format!("Download {}", title)
                    >
                        <Download class="w-4 h-4" />
                        "Download"
                    </a>
                    <a
                        href=github_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-icon inline-flex items-center gap-2 px-4 py-2 rounded-full border border-slate-300 text-sm font-medium hover:bg-slate-100 dark:border-slate-700 dark:hover:bg-slate-800 transition-colors"
                        aria-label=format!("View {} on GitHub", title)
                    >
                        <Github class="w-4 h-4" />
                        "GitHub"
                    </a>
                </div>
            </div>

            <Modal
                open=gallery_open
                id=format!("gallery-{slug}")
                title=modal_title
                trigger=cover_ref
            >
                <ScreenshotGallery
                    title=gallery_title.clone()
                    screenshots=screenshots.clone()
                    image_class="w-full h-auto rounded-lg"
                />
            </Modal>
        </article>
    }
}
