use anyhow::Result;
use clap::Parser;
use setup_dhall::config::Config;
use setup_dhall::setup::run_setup;
use std::path::PathBuf;

/// setup-dhall - install the Dhall toolchain in a CI job
///
/// Resolves the requested release of dhall, dhall-json and dhall-yaml
/// for the current platform and hands the three archive URLs to the
/// install script.
///
/// When run as a GitHub action, inputs arrive through the INPUT_*
/// environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Release version to install, or "latest"
    #[arg(
        value_name = "VERSION",
        env = "INPUT_VERSION",
        default_value = "latest"
    )]
    release_version: String,

    /// GitHub token for API requests (avoids rate limiting)
    #[arg(
        long = "github-token",
        env = "INPUT_GITHUB_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    github_token: Option<String>,

    /// Installation script invoked with the three archive URLs
    #[arg(long = "installer", value_name = "PATH", default_value = "./install.sh")]
    installer: PathBuf,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // The ::error:: workflow command is what marks the job failed
        // with a readable message in the Actions UI.
        println!("::error::{:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::new(
        cli.release_version,
        cli.github_token,
        cli.api_url,
        cli.installer,
    )?;
    run_setup(&config).await
}
