use leptos::prelude::*;
use showcase_core::{Catalog, Settings};

use crate::components::icons::{Github, Linkedin, Twitter};

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/embedded.rs"));
}

/// The extension collection, parsed fresh for each render.
///
/// A missing or malformed data file yields an empty catalog and a console
/// message; it never breaks the page.
pub fn extensions() -> Catalog {
    Catalog::from_source(embedded::EXTENSIONS_JSON, embedded::EXTENSIONS_ORIGIN)
}

pub fn settings() -> Settings {
    Settings::from_source(embedded::SETTINGS_TOML, embedded::SETTINGS_ORIGIN)
}

pub struct Tutorial {
    pub title: &'static str,
    pub src: &'static str,
    pub poster: &'static str,
    pub download_href: &'static str,
    pub steps: &'static [&'static str],
}

pub fn tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            title: "How to Install Chrome Extensions",
            src: "/videos/article_highlighter.mp4",
            poster: "/videos/article_highlighter-poster.jpg",
            download_href: "/videos/article_highlighter.mp4",
            steps: &[
                "Download the CRX file or open the Chrome Web Store page.",
                "Open chrome://extensions in your browser.",
                "Enable Developer Mode in the top-right corner.",
                "Click Load Unpacked and select the extension folder.",
                "Once installed, pin the extension from the toolbar.",
            ],
        },
        Tutorial {
            title: "How to Install VS Code Extensions",
            src: "/videos/Terminal_history.mp4",
            poster: "/videos/terminal-history-poster.jpg",
            download_href: "/videos/Terminal_history.mp4",
            steps: &[
                "Open VS Code and go to the Extensions tab (Ctrl + Shift + X).",
                "Search for the extension name or install from a VSIX file.",
                "Click Install and wait for the process to finish.",
                "Reload the editor if prompted.",
                "Open the Command Palette (Ctrl + Shift + P) to confirm it\u{2019}s active.",
            ],
        },
    ]
}

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: fn() -> AnyView,
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            href: "https://github.com/EternalKnight002",
            label: "GitHub",
            icon: || view! { <Github class="w-5 h-5" /> }.into_any(),
        },
        SocialLink {
            href: "https://x.com/Eternalknigh",
            label: "X (Twitter)",
            icon: || view! { <Twitter class="w-5 h-5" /> }.into_any(),
        },
        SocialLink {
            href: "https://linkedin.com/in/aman-kumar-537a73296",
            label: "LinkedIn",
            icon: || view! { <Linkedin class="w-5 h-5" /> }.into_any(),
        },
    ]
}
