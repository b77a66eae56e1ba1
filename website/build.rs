//! Embeds `data/extensions.json` and `showcase.toml` into the site.
//!
//! The browser has no filesystem, so the raw text is baked in at build time
//! and parsed by `showcase-core` on every render. A missing file becomes
//! `None`; malformed JSON is embedded as-is so the runtime degrades the same
//! way it would on a server. Both cases are reported as build warnings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Just enough shape to warn about records the site cannot link to
#[derive(Deserialize)]
struct RecordProbe {
    #[serde(default)]
    slug: Option<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let project_root = manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.clone());

    println!("cargo:rerun-if-env-changed=SHOWCASE_DATA");
    let data_path = env::var_os("SHOWCASE_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| project_root.join("data").join("extensions.json"));
    let settings_path = project_root.join("showcase.toml");

    let data = read_optional(&data_path);
    match &data {
        None => println!(
            "cargo:warning={} not found, the site will show its empty state",
            data_path.display()
        ),
        Some(content) => probe_data(&data_path, content),
    }
    let settings = read_optional(&settings_path);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let generated = format!(
        "pub const EXTENSIONS_ORIGIN: &str = {:?};\n\
         pub const EXTENSIONS_JSON: Option<&str> = {};\n\
         pub const SETTINGS_ORIGIN: &str = {:?};\n\
         pub const SETTINGS_TOML: Option<&str> = {};\n",
        "data/extensions.json",
        literal(data.as_deref()),
        "showcase.toml",
        literal(settings.as_deref()),
    );
    fs::write(out_dir.join("embedded.rs"), generated).unwrap();
}

/// Read a file, registering it for rebuilds whether or not it exists yet.
fn read_optional(path: &Path) -> Option<String> {
    println!("cargo:rerun-if-changed={}", path.display());
    fs::read_to_string(path).ok()
}

fn probe_data(path: &Path, content: &str) {
    match serde_json::from_str::<Vec<RecordProbe>>(content) {
        Ok(records) => {
            let unnamed = records
                .iter()
                .filter(|r| r.slug.as_deref().map_or(true, str::is_empty))
                .count();
            if unnamed > 0 {
                println!(
                    "cargo:warning={}: {} record(s) without a slug cannot be opened",
                    path.display(),
                    unnamed
                );
            }
        }
        Err(e) => println!(
            "cargo:warning={} is malformed ({}), the site will show its empty state",
            path.display(),
            e
        ),
    }
}

fn literal(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("Some({text:?})"),
        None => "None".to_string(),
    }
}
