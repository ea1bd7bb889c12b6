//! Setup use case - the linear resolve-fetch-match-dispatch flow.

use anyhow::{Context, Result};
use log::info;

use crate::asset::{ReleasePatterns, match_assets};
use crate::config::Config;
use crate::github::GetRelease;
use crate::installer::Installer;

/// Resolve the requested release for the current platform and hand the
/// archive URLs to the installer. Everything is fatal: an error at any
/// step fails the run.
pub async fn run_setup<G: GetRelease, I: Installer>(config: &Config<G, I>) -> Result<()> {
    let patterns = ReleasePatterns::detect()?;

    let release = config
        .github
        .get_release(&config.version)
        .await
        .context("Failed to fetch releases from GitHub API, providing a token may help")?;

    info!(
        "Resolved release {} with {} assets",
        release.tag_name,
        release.assets.len()
    );

    let urls = match_assets(&release.assets, &patterns)?;

    config.installer.install(&urls).await
}
