pub mod badge;
pub mod extension_card;
pub mod fallback_image;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod how_to_download;
pub mod icons;
pub mod modal;
pub mod search_input;
pub mod theme_toggle;
pub mod video_player;
