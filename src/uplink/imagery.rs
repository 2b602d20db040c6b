/// Card imagery: resolution, fetching and an in-memory handle cache
///
/// Image URIs in the dataset are relative to the data host ("/images/x.jpg").
/// They are resolved against the dataset source, fetched on demand, bounded
/// to `MAX_CARD_EDGE` and kept for the session. Nothing is written to disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;
use url::Url;

use super::fetch_bytes;
use crate::config::Source;

/// Longest edge of a decoded card image
pub const MAX_CARD_EDGE: u32 = 800;

/// Load status of one image URI
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Pending,
    Ready(Handle),
    /// Fetch or decode failed; the card shows a placeholder
    Missing,
}

/// Decoded images keyed by their dataset URI
#[derive(Debug)]
pub struct ImageryCache {
    base: Source,
    slots: HashMap<String, ImageSlot>,
}

impl ImageryCache {
    /// `base` is the dataset source image URIs are relative to
    pub fn new(base: Source) -> Self {
        Self {
            base,
            slots: HashMap::new(),
        }
    }

    pub fn slot(&self, uri: &str) -> Option<&ImageSlot> {
        self.slots.get(uri)
    }

    /// Mark `uri` as pending and return where to fetch it from
    ///
    /// Returns `None` if the URI was already requested or can't be resolved
    /// (the latter is recorded as `Missing`).
    pub fn request(&mut self, uri: &str) -> Option<Source> {
        if self.slots.contains_key(uri) {
            return None;
        }

        match resolve(&self.base, uri) {
            Some(source) => {
                self.slots.insert(uri.to_string(), ImageSlot::Pending);
                Some(source)
            }
            None => {
                log::warn!("⚠️  Cannot resolve image URI '{}'", uri);
                self.slots.insert(uri.to_string(), ImageSlot::Missing);
                None
            }
        }
    }

    /// Store the outcome of a fetch
    pub fn complete(&mut self, uri: String, result: Result<Handle, String>) {
        let slot = match result {
            Ok(handle) => ImageSlot::Ready(handle),
            Err(reason) => {
                log::warn!("⚠️  Image {} unavailable: {}", uri, reason);
                ImageSlot::Missing
            }
        };
        self.slots.insert(uri, slot);
    }
}

/// Resolve a dataset image URI against the dataset source
///
/// Absolute http(s) URIs are used as-is. For an HTTP dataset, other URIs are
/// joined onto the dataset URL. For a file dataset, they are taken relative
/// to the dataset's directory, with a leading `/` meaning that directory.
pub fn resolve(base: &Source, uri: &str) -> Option<Source> {
    let uri = uri.trim();
    if uri.is_empty() {
        return None;
    }

    if uri.starts_with("http://") || uri.starts_with("https://") {
        return Url::parse(uri).ok().map(Source::Http);
    }

    match base {
        Source::Http(dataset_url) => dataset_url.join(uri).ok().map(Source::Http),
        Source::File(dataset_path) => {
            let root = dataset_path.parent().unwrap_or_else(|| Path::new(""));
            let relative: PathBuf = uri.trim_start_matches('/').into();
            Some(Source::File(root.join(relative)))
        }
    }
}

/// Fetch and decode an image into an iced handle
pub async fn fetch_image(source: Source) -> Result<Handle, String> {
    let bytes = fetch_bytes(&source).await.map_err(|e| e.to_string())?;

    // Decoding is CPU-bound, keep it off the async workers
    let (width, height, pixels) = tokio::task::spawn_blocking(move || decode_card_image(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))??;

    Ok(Handle::from_rgba(width, height, pixels))
}

/// Decode image bytes to RGBA, shrinking so neither edge exceeds `MAX_CARD_EDGE`
pub fn decode_card_image(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("Failed to decode image: {}", e))?;

    let img = if img.width() > MAX_CARD_EDGE || img.height() > MAX_CARD_EDGE {
        img.resize(MAX_CARD_EDGE, MAX_CARD_EDGE, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok((rgba.width(), rgba.height(), rgba.into_raw()))
}
