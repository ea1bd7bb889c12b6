use anyhow::{Result, anyhow};
use regex::Regex;

use super::ReleasePatterns;
use crate::github::ReleaseAsset;

/// Download URLs for the three archives of one release, in the order
/// the installer expects them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUrls {
    pub core: String,
    pub json: String,
    pub yaml: String,
}

/// Find the download URL of the first asset matching each category
/// pattern.
///
/// A category with no matching asset is an error naming the category
/// and the platform suffix, rather than a blind field access on a
/// missing entry.
pub fn match_assets(assets: &[ReleaseAsset], patterns: &ReleasePatterns) -> Result<ResolvedUrls> {
    Ok(ResolvedUrls {
        core: find_asset(assets, &patterns.core, "dhall", patterns.suffix())?,
        json: find_asset(assets, &patterns.json, "dhall-json", patterns.suffix())?,
        yaml: find_asset(assets, &patterns.yaml, "dhall-yaml", patterns.suffix())?,
    })
}

fn find_asset(
    assets: &[ReleaseAsset],
    pattern: &Regex,
    category: &str,
    suffix: &str,
) -> Result<String> {
    assets
        .iter()
        .find(|asset| pattern.is_match(&asset.name))
        .map(|asset| asset.browser_download_url.clone())
        .ok_or_else(|| {
            anyhow!(
                "No release asset matching the {} archive for {}",
                category,
                suffix
            )
        })
}
