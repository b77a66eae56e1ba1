use leptos::html;
use leptos::prelude::*;
use showcase_core::{FocusTrap, ModalAction, ModalKey, ModalState};
use wasm_bindgen::JsCast;

use super::icons::Close;

const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input:not([disabled]), video[controls], [tabindex]:not([tabindex='-1'])";

/// Accessible dialog overlay.
///
/// Visibility is owned by the caller through `open`. While open, focus is
/// trapped inside the dialog; Escape, the close button and a backdrop click
/// all dismiss it, and focus goes back to whatever had it before opening.
/// When closed the overlay is not in the DOM at all. Pass `trigger` when the
/// opening element is known; otherwise whatever had focus is used.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    /// Prefix for element ids, unique per page
    #[prop(into)]
    id: String,
    #[prop(into)] title: String,
    #[prop(optional)] trigger: Option<NodeRef<html::Button>>,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref: NodeRef<html::Div> = NodeRef::new();
    let state = StoredValue::new_local(ModalState::<web_sys::HtmlElement>::new());
    let title_id = format!("{id}-title");

    Effect::new(move || {
        if open.get() {
            let known = trigger
                .and_then(|t| t.get_untracked())
                .map(web_sys::HtmlElement::from);
            state.update_value(|s| s.open_from(known, active_element));
        } else {
            let mut restore = None;
            state.update_value(|s| restore = s.close());
            if let Some(el) = restore {
                let _ = el.focus();
            }
        }
    });

    // Move focus into the dialog as soon as it mounts
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            match focusable_elements(&dialog).first() {
                Some(first) => {
                    let _ = first.focus();
                }
                None => {
                    let _ = dialog.focus();
                }
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ModalKey::from_dom(&ev.key(), ev.shift_key());
        let focusables = dialog_ref
            .get_untracked()
            .map(|d| focusable_elements(&d))
            .unwrap_or_default();
        let focused = active_element().and_then(|active| {
            focusables
                .iter()
                .position(|el| el.is_same_node(Some(active.as_ref())))
        });

        match FocusTrap::handle_key(key, focused, focusables.len()) {
            ModalAction::Close => {
                ev.prevent_default();
                open.set(false);
            }
            ModalAction::Focus(index) => {
                ev.prevent_default();
                if let Some(el) = focusables.get(index) {
                    let _ = el.focus();
                }
            }
            ModalAction::Block => ev.prevent_default(),
            ModalAction::Ignore => {}
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 bg-black/50 backdrop-blur-sm flex items-center justify-center"
                on:click=move |_| open.set(false)
            >
                <div
                    node_ref=dialog_ref
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    tabindex="-1"
                    class="relative z-50 w-[95%] max-w-4xl max-h-[90vh] overflow-y-auto rounded-2xl bg-white/90 dark:bg-[#071025]/90 p-4 shadow-xl focus:outline-none"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="flex items-start justify-between mb-4">
                        <h3 id=title_id.clone() class="text-lg font-semibold">
                            {title.clone()}
                        </h3>
                        <button
                            type="button"
                            aria-label="Close"
                            class="p-1 rounded focus-ring"
                            on:click=move |_| open.set(false)
                        >
                            <Close class="w-5 h-5" />
                        </button>
                    </div>
                    <div>{children()}</div>
                </div>
            </div>
        </Show>
    }
}

fn active_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn focusable_elements(root: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}
