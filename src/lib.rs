use anyhow::{Context, Result};
use image::DynamicImage;
use log::info;
use reqwest::Client;

pub mod batch_lib;
pub mod compositor_lib;

pub use batch_lib::{run_batch, BatchConfig, BatchSummary};
pub use compositor_lib::{center_and_save, center_on_canvas, CANVAS_SIZE};

// Trait to abstract the fetch configuration
pub trait FetchConfig {
    /// Whether to log the URL and decoded size of every image
    fn verbose(&self) -> bool;
}

/// Download the image at `url` and decode it.
///
/// The format is guessed from the response body, so the URL's extension and
/// the server's content type are ignored.
pub async fn fetch_image<T: FetchConfig>(client: &Client, config: &T, url: &str) -> Result<DynamicImage> {
    if config.verbose() {
        info!("Fetching image: {}", url);
    }

    let response = client.get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text()
            .await
            .with_context(|| format!("Failed to read error response from {}", url))?;
        anyhow::bail!("Failed to fetch image {}: HTTP {}: {}", url, status, text);
    }

    let bytes = response.bytes()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    let img = decode_image(&bytes)
        .with_context(|| format!("Failed to decode image from {}", url))?;

    if config.verbose() {
        info!("Image size: {}x{}", img.width(), img.height());
    }

    Ok(img)
}

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img)
}
