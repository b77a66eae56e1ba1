use leptos::prelude::*;

use super::fallback_image::FallbackImage;

/// Every screenshot of one extension, in data order.
#[component]
pub fn ScreenshotGallery(
    #[prop(into)] title: String,
    screenshots: Vec<String>,
    #[prop(optional, into)] image_class: String,
) -> impl IntoView {
    if screenshots.is_empty() {
        return view! {
            <p class="text-sm text-gray-500 dark:text-gray-400">"No screenshots yet."</p>
        }
        .into_any();
    }

    view! {
        <div class="grid grid-cols-1 gap-2">
            {screenshots.into_iter().enumerate().map(|(i, shot)| {
                view! {
                    <FallbackImage
                        src=shot
                        alt=format!("{} screenshot {}", title, i + 1)
                        class=image_class.clone()
                        lazy=true
                    />
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}
