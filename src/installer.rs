//! Dispatch to the external installation script.
//!
//! The script owns download, verification, unpacking and PATH setup;
//! this side only supplies the three archive URLs in the order the
//! script expects them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::info;
use tokio::process::Command;

use crate::asset::ResolvedUrls;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Installer: Send + Sync {
    /// Run the installation with the resolved archive URLs, core tool
    /// first, then the json and yaml plugins.
    async fn install(&self, urls: &ResolvedUrls) -> Result<()>;
}

/// Invokes an external script with the three URLs as positional
/// arguments and propagates its exit status.
pub struct ScriptInstaller {
    script: PathBuf,
}

impl ScriptInstaller {
    pub fn new(script: PathBuf) -> Self {
        Self { script }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }
}

#[async_trait]
impl Installer for ScriptInstaller {
    #[tracing::instrument(skip(self, urls))]
    async fn install(&self, urls: &ResolvedUrls) -> Result<()> {
        info!("Running installer {}", self.script.display());

        let status = Command::new(&self.script)
            .arg(&urls.core)
            .arg(&urls.json)
            .arg(&urls.yaml)
            .status()
            .await
            .with_context(|| {
                format!("Failed to run installer script {}", self.script.display())
            })?;

        if !status.success() {
            bail!(
                "Installer script {} exited with {}",
                self.script.display(),
                status
            );
        }

        Ok(())
    }
}
