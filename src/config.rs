use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::github::GitHub;
use crate::installer::ScriptInstaller;

/// User-Agent sent with every GitHub API request.
pub const USER_AGENT: &str = "setup-dhall Github action";

/// Everything a run needs, resolved once at startup. Core logic never
/// reads the environment on its own.
pub struct Config<G, I> {
    pub version: String,
    pub github: G,
    pub installer: I,
}

impl Config<GitHub, ScriptInstaller> {
    pub fn new(
        version: String,
        github_token: Option<String>,
        api_url: Option<String>,
        installer_script: PathBuf,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = github_token {
            // GitHub accepts the legacy "token" scheme for PATs.
            let mut auth_value = HeaderValue::from_str(&format!("token {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using the configured GitHub token for authentication");
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            version,
            github: GitHub::new(client, api_url),
            installer: ScriptInstaller::new(installer_script),
        })
    }
}
