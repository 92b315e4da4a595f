//! altsync - AltStore/SideStore source manifest sync
//!
//! Fetches the latest GitHub release of the LcInstaller repository and
//! rewrites `source.json` and `sidestore.json` to match. One-shot batch job
//! with no command-line interface; meant to be invoked from a scheduler.

use std::time::Duration;

use altsync::config::SyncConfig;
use altsync::github::GitHub;
use altsync::http::HttpClient;
use altsync::sync;
use anyhow::Result;
use reqwest::Client;

// Defensive cap so a hung request cannot block the batch job forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = Client::builder()
        .user_agent("altsync-cli")
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let github = GitHub::new(HttpClient::new(client), None);
    let config = SyncConfig::lc_installer();

    sync::run(&config, &github).await
}
