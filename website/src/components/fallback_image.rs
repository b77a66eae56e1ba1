use leptos::prelude::*;
use showcase_core::{FallbackChain, Settings};

/// An `<img>` that walks the fallback chain when loading fails.
///
/// Each failure swaps in the next alternate extension, then the placeholder.
/// Once the chain is exhausted the broken image stays and its alt text shows.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] lazy: bool,
) -> impl IntoView {
    let placeholder = expect_context::<Settings>().paths.placeholder;
    let current = RwSignal::new(src);
    let chain = StoredValue::new(FallbackChain::new(placeholder));

    let loading = if lazy { "lazy" } else { "eager" };

    let on_error = move |_| {
        let failed = current.get_untracked();
        let mut next = None;
        chain.update_value(|c| next = c.next_after_failure(&failed));
        match next {
            Some(path) => current.set(path),
            None => log::warn!("no fallback left for image {}", failed),
        }
    };

    view! {
        <img
            src=move || current.get()
            alt=alt
            class=class
            loading=loading
            draggable="false"
            on:error=on_error
        />
    }
}
