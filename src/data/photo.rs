//! Popup photo fetcher
//!
//! Downloads the photo referenced by a tree record, decodes it and
//! downscales it for the popup card. Results are cached per URL by the
//! application state so each photo is fetched at most once per session.

use std::io::Read;
use std::time::Duration;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use tokio::task;

/// Longest edge of a popup photo after downscaling
const PHOTO_MAX_DIM: u32 = 512;

/// Refuse to buffer bodies beyond this size
const PHOTO_MAX_BYTES: u64 = 20 * 1024 * 1024;

/// Fetch and decode a popup photo.
///
/// Errors come back as strings: the caller only ever logs them and
/// falls back to the text-only popup card.
pub async fn load_photo(url: String) -> Result<Handle, String> {
    task::spawn_blocking(move || fetch_blocking(&url))
        .await
        .map_err(|e| format!("photo task failed: {e}"))?
}

fn fetch_blocking(url: &str) -> Result<Handle, String> {
    let response = ureq::get(url)
        .set("User-Agent", "campus-tree-map/0.1")
        .timeout(Duration::from_secs(15))
        .call()
        .map_err(|e| format!("fetch failed for {url}: {e}"))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(PHOTO_MAX_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| format!("read failed for {url}: {e}"))?;

    let decoded =
        image::load_from_memory(&bytes).map_err(|e| format!("decode failed for {url}: {e}"))?;

    // Downscale large photos; popup cards never need more than ~512px
    let decoded = if decoded.width().max(decoded.height()) > PHOTO_MAX_DIM {
        decoded.resize(PHOTO_MAX_DIM, PHOTO_MAX_DIM, FilterType::Lanczos3)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_photo_bad_url() {
        let result = load_photo("http://127.0.0.1:1/missing.jpg".to_string()).await;
        assert!(result.is_err());
    }
}
