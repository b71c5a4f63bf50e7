use anyhow::Context;
use log::info;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::compositor_lib::center_and_save;
use crate::{fetch_image, FetchConfig};

pub const DEFAULT_URL_TEMPLATE: &str =
    "https://storep-phinf.pstatic.net/{identifier}/original_{index}.png?type=m480_480";

pub const DEFAULT_IDENTIFIERS: [&str; 3] = [
    "ogq_627c80ea90e91",
    "ogq_638712a37abec",
    "ogq_62ddacd1b2878",
];

pub const DEFAULT_FIRST_INDEX: u32 = 1;

/// Every sticker set holds 24 images
pub const DEFAULT_LAST_INDEX: u32 = 24;

pub const DEFAULT_DELAY_SECS: u64 = 3;

pub trait BatchConfig: FetchConfig {
    fn base_dir(&self) -> &str;
    fn identifiers(&self) -> &[String];
    /// URL with `{identifier}` and `{index}` placeholders
    fn url_template(&self) -> &str;
    fn first_index(&self) -> u32;
    fn last_index(&self) -> u32;
    /// Pause after every processed image
    fn delay(&self) -> Duration;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub sets: usize,
    pub images: usize,
}

pub fn build_image_url(template: &str, identifier: &str, index: u32) -> String {
    template
        .replace("{identifier}", identifier)
        .replace("{index}", &index.to_string())
}

pub fn output_dir(base_dir: &str, identifier: &str) -> PathBuf {
    Path::new(base_dir).join(identifier)
}

pub fn output_path(base_dir: &str, identifier: &str, index: u32) -> PathBuf {
    output_dir(base_dir, identifier).join(format!("processed_{}.png", index))
}

/// Fetch, center and save every image of one set, in index order.
///
/// Stops at the first failure; images saved before it stay on disk.
pub async fn process_set<T: BatchConfig>(client: &Client, config: &T, identifier: &str) -> anyhow::Result<usize> {
    let this_dir = output_dir(config.base_dir(), identifier);
    fs::create_dir_all(&this_dir)
        .with_context(|| format!("Failed to create output directory {}", this_dir.display()))?;

    let mut saved = 0;
    for index in config.first_index()..=config.last_index() {
        let url = build_image_url(config.url_template(), identifier, index);
        let img = fetch_image(client, config, &url)
            .await
            .with_context(|| format!("Failed to fetch image {} of set {}", index, identifier))?;

        let path = output_path(config.base_dir(), identifier, index);
        center_and_save(&img, &path)
            .with_context(|| format!("Failed to process image {} of set {}", index, identifier))?;
        saved += 1;

        // Keep the request rate low
        let delay = config.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(saved)
}

/// Process every configured set in order, aborting on the first failure.
pub async fn run_batch<T: BatchConfig>(client: &Client, config: &T) -> anyhow::Result<BatchSummary> {
    anyhow::ensure!(
        config.first_index() <= config.last_index(),
        "Invalid index range {}..={}",
        config.first_index(),
        config.last_index()
    );

    let mut summary = BatchSummary::default();
    for identifier in config.identifiers() {
        info!("Processing set {}", identifier);
        let saved = process_set(client, config, identifier).await?;
        info!("Saved {} images to {}", saved, output_dir(config.base_dir(), identifier).display());

        summary.sets += 1;
        summary.images += saved;
    }

    Ok(summary)
}
