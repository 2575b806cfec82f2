//! Loading card pictures and tracks from the asset directory.
//!
//! Assets are handed to the webview as data URLs so the page does not depend
//! on how the window serves local files.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::deck::FALLBACK_IMAGE_URL;
use crate::error::AssetError;

/// Load state of a picture. The rendered source is derived from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(String),
    Failed,
}

impl LoadState {
    /// Source to put in the `img` tag, or `None` while still loading.
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Loading => None,
            Self::Loaded(url) => Some(url.as_str()),
            Self::Failed => Some(FALLBACK_IMAGE_URL),
        }
    }

    /// Marks the picture as broken, e.g. after the webview failed to decode it.
    pub fn fail(&mut self) {
        *self = Self::Failed;
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

/// Reads a file and encodes it as a `data:` URL.
pub fn load_media_as_data_url(path: &Path) -> Result<String, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    let data = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("data:{};base64,{}", mime_for(path), STANDARD.encode(&data)))
}

/// Loads a card picture, falling back to the placeholder on any failure.
pub fn load_image(asset_dir: &Path, image: &str) -> LoadState {
    match load_media_as_data_url(&asset_dir.join(image)) {
        Ok(url) => LoadState::Loaded(url),
        Err(e) => {
            tracing::warn!("Card image unavailable, using placeholder: {}", e);
            LoadState::Failed
        }
    }
}
