use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use reqwest::Client;
use std::time::Duration;
use sticker_fetcher_lib::batch_lib::{
    DEFAULT_DELAY_SECS, DEFAULT_FIRST_INDEX, DEFAULT_IDENTIFIERS, DEFAULT_LAST_INDEX, DEFAULT_URL_TEMPLATE,
};
use sticker_fetcher_lib::{run_batch, BatchConfig, FetchConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory that receives one subdirectory per sticker set
    #[arg(long, env("STICKER_BASE_DIR"), default_value = "downloads")]
    base_dir: String,

    /// Sticker set identifiers, processed in order
    #[arg(
        long = "identifier",
        env("STICKER_IDS"),
        value_delimiter = ',',
        default_values_t = DEFAULT_IDENTIFIERS.map(String::from)
    )]
    identifiers: Vec<String>,

    /// Image URL with {identifier} and {index} placeholders
    #[arg(long, env("STICKER_URL_TEMPLATE"), default_value = DEFAULT_URL_TEMPLATE)]
    url_template: String,

    /// First image index of every set
    #[arg(long, default_value_t = DEFAULT_FIRST_INDEX)]
    first_index: u32,

    /// Last image index of every set (inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST_INDEX)]
    last_index: u32,

    /// Seconds to wait after each image
    #[arg(long, env("STICKER_DELAY_SECS"), default_value_t = DEFAULT_DELAY_SECS)]
    delay_secs: u64,

    /// Request timeout in seconds; requests never time out when unset
    #[arg(long, env("STICKER_TIMEOUT_SECS"))]
    timeout_secs: Option<u64>,

    /// Don't log the URL and size of every image
    #[arg(long)]
    quiet: bool,
}

impl FetchConfig for Args {
    fn verbose(&self) -> bool {
        !self.quiet
    }
}

impl BatchConfig for Args {
    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    fn url_template(&self) -> &str {
        &self.url_template
    }

    fn first_index(&self) -> u32 {
        self.first_index
    }

    fn last_index(&self) -> u32 {
        self.last_index
    }

    fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut builder = Client::builder();
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()
        .context("Failed to build HTTP client")?;

    info!("Starting sticker fetcher");
    info!("Args: {:?}", args);

    let summary = run_batch(&client, &args).await?;

    info!("Done: {} images across {} sets", summary.images, summary.sets);

    Ok(())
}
