//! # Command-line configuration
//!
//! Every flag has a default, so running the binary bare checks the hosted
//! preview backend with a 30 second request timeout.

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://54b6e021-1d4c-4690-8f48-aa361d81b5c6.preview.emergentagent.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "hajabot-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the HajaBot backend API checks in sequence", long_about = None)]
pub struct Cli {
    /// Base address of the backend under test
    #[arg(long, env = "HAJABOT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, env = "HAJABOT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        let timeout = (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs));
        Self {
            base_url: cli.base_url.trim().to_string(),
            timeout,
        }
    }
}
