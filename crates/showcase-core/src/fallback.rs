//! Image fallback chain for screenshots
//!
//! When an image fails to load, try the same path with each of the other
//! known extensions, then a fixed placeholder. Every path is attempted at
//! most once per chain, so a chain always terminates.

/// Extensions swapped in, in the order they are tried
pub const FALLBACK_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Image shown once every alternate has failed
pub const DEFAULT_PLACEHOLDER: &str = "/screenshots/placeholder.jpg";

/// Failure-driven walk over alternate image paths.
///
/// Create one per displayed image and feed it each failed path; it hands
/// back the next path to try, or `None` once nothing is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    placeholder: String,
    attempted: Vec<String>,
    exhausted: bool,
}

impl FallbackChain {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            attempted: Vec::new(),
            exhausted: false,
        }
    }

    /// Record `failed` as attempted and pick the next path to show.
    ///
    /// Returns `None` when the placeholder itself has failed or every
    /// candidate has already been tried.
    pub fn next_after_failure(&mut self, failed: &str) -> Option<String> {
        if self.exhausted {
            return None;
        }
        self.mark_attempted(failed);

        if failed == self.placeholder {
            self.exhausted = true;
            return None;
        }

        let next = candidate_paths(failed)
            .into_iter()
            .find(|c| !self.was_attempted(c))
            .or_else(|| {
                (!self.was_attempted(&self.placeholder)).then(|| self.placeholder.clone())
            });

        match next {
            Some(path) => {
                tracing::debug!("Image {} failed, trying {}", failed, path);
                Some(path)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    /// Paths that have failed so far, in order.
    pub fn attempted(&self) -> &[String] {
        &self.attempted
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Walk the chain from `start` until `loads` accepts a path.
    ///
    /// Returns the accepted path, or `None` if every path failed.
    pub fn resolve<F>(start: &str, placeholder: &str, mut loads: F) -> Option<String>
    where
        F: FnMut(&str) -> bool,
    {
        let mut chain = Self::new(placeholder);
        let mut current = start.to_string();
        loop {
            if loads(&current) {
                return Some(current);
            }
            current = chain.next_after_failure(&current)?;
        }
    }

    fn mark_attempted(&mut self, path: &str) {
        if !self.was_attempted(path) {
            self.attempted.push(path.to_string());
        }
    }

    /// `foo.JPG` and `foo.jpg` count as the same attempt.
    fn was_attempted(&self, path: &str) -> bool {
        let key = attempt_key(path);
        self.attempted.iter().any(|p| attempt_key(p) == key)
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

/// Alternates for `path` with its extension swapped, excluding `path`'s own
/// extension. Empty when the extension is not one of [`FALLBACK_EXTENSIONS`].
pub fn candidate_paths(path: &str) -> Vec<String> {
    let (base, suffix) = split_suffix(path);
    let Some((stem, ext)) = split_extension(base) else {
        return Vec::new();
    };
    if !FALLBACK_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
    {
        return Vec::new();
    }

    FALLBACK_EXTENSIONS
        .iter()
        .filter(|known| !known.eq_ignore_ascii_case(ext))
        .map(|known| format!("{stem}.{known}{suffix}"))
        .collect()
}

/// Split off a trailing `?query` or `#fragment`.
/// Path with a known extension lowercased; anything else unchanged
fn attempt_key(path: &str) -> String {
    let (base, suffix) = split_suffix(path);
    match split_extension(base) {
        Some((stem, ext))
            if FALLBACK_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext)) =>
        {
            format!("{stem}.{}{suffix}", ext.to_ascii_lowercase())
        }
        _ => path.to_string(),
    }
}

fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

/// `("/a/b", "jpg")` for `/a/b.jpg`; `None` when the last segment has no dot.
fn split_extension(path: &str) -> Option<(&str, &str)> {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let dot = path[name_start..].rfind('.')? + name_start;
    if dot == name_start {
        // dotfile such as `/.jpg` has no stem
        return None;
    }
    Some((&path[..dot], &path[dot + 1..]))
}
