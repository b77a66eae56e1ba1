use leptos::html;
use leptos::prelude::*;
use showcase_core::{PlayerCommand, PlayerEvent, PlayerState};
use wasm_bindgen_futures::JsFuture;

use super::icons::{Download, PlayCircle};

/// 16:9 player with a poster and a large play overlay.
///
/// Native controls appear only once playback has started so the poster
/// stays clean. State is local and starts over on every mount.
#[component]
pub fn VideoPlayer(
    #[prop(into)] src: String,
    #[prop(optional, into)] poster: Option<String>,
    #[prop(into)] title: String,
    #[prop(optional, into)] download_href: Option<String>,
) -> impl IntoView {
    let video_ref: NodeRef<html::Video> = NodeRef::new();
    let state = RwSignal::new(PlayerState::default());

    let dispatch = move |event: PlayerEvent| apply_event(state, event);

    let on_overlay = move |_| {
        if dispatch(PlayerEvent::OverlayClicked) != PlayerCommand::Play {
            return;
        }
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = match video.play() {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                // autoplay or other play errors - ignore silently
                log::warn!("Video play failed: {:?}", err);
                dispatch(PlayerEvent::PlayRejected);
            }
        });
    };

    let play_label = format!("Play {}", if title.is_empty() { "video" } else { &title });
    let download_label = format!("Download video {}", title);

    view! {
        <div class="video-frame-wrapper">
            <div class="video-frame">
                <video
                    node_ref=video_ref
                    class="video-element"
                    src=src
                    poster=poster
                    controls=move || state.get().controls_visible()
                    preload="none"
                    playsinline=true
                    on:play=move |_| {
                        dispatch(PlayerEvent::MediaPlay);
                    }
                    on:pause=move |_| {
                        dispatch(PlayerEvent::MediaPause);
                    }
                    on:ended=move |_| {
                        dispatch(PlayerEvent::MediaEnded);
                    }
                ></video>

                <Show when=move || state.get().overlay_visible()>
                    <button
                        type="button"
                        aria-label=play_label.clone()
                        class="video-play-overlay"
                        on:click=on_overlay
                    >
                        <PlayCircle />
                    </button>
                </Show>
            </div>

            <div class="mt-4 flex items-center justify-between gap-4">
                <div class="text-sm text-gray-700 dark:text-gray-300">{title}</div>
                {download_href.map(|href| view! {
                    <a
                        href=href
                        download=""
                        class="inline-flex items-center gap-2 text-sm text-gray-700 dark:text-gray-200 underline"
                        aria-label=download_label
                    >
                        <Download class="h-4 w-4" />
                        "Download"
                    </a>
                })}
            </div>
        </div>
    }
}

/// Feed one event into the player state.
///
/// Play rejections arrive after an await, possibly after the player has
/// unmounted; a disposed signal turns the event into a no-op.
fn apply_event(state: RwSignal<PlayerState>, event: PlayerEvent) -> PlayerCommand {
    let Some(current) = state.try_get_untracked() else {
        return PlayerCommand::None;
    };
    let (next, command) = current.on_event(event);
    let _ = state.try_set(next);
    command
}
