//! iden-harvest CLI
//!
//! Logs into the IdenHQ challenge, reveals the hidden product table,
//! harvests every row and writes the result as JSON.

use anyhow::Context;
use clap::Parser;
use iden_harvest::config::{
    DEFAULT_BASE_URL, DEFAULT_ELEMENT_TIMEOUT_MS, DEFAULT_OUTPUT, DEFAULT_SESSION_STATE,
};
use iden_harvest::{Credentials, RunConfig, Timeouts, runner};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iden-harvest")]
#[command(version)]
#[command(about = "Harvest the hidden product table from the IdenHQ challenge", long_about = None)]
struct Cli {
    /// Challenge URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Login username/email (falls back to IDEN_USERNAME)
    #[arg(long)]
    username: Option<String>,

    /// Login password (falls back to IDEN_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    /// Path of the persisted session-state blob
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SESSION_STATE)]
    session_state: PathBuf,

    /// Output JSON file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Optional value to submit on the 'Submit Script' page
    #[arg(long, value_name = "VALUE")]
    submit_url: Option<String>,

    /// Default element timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_ELEMENT_TIMEOUT_MS)]
    timeout: u64,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Resolved before any browser action so a missing credential exits early
    let credentials = Credentials::resolve(cli.username, cli.password)?;

    let config = RunConfig {
        base_url: cli.base_url,
        credentials,
        session_state: cli.session_state,
        output: cli.output,
        headless: !cli.headed,
        chrome_path: cli.chrome_path,
        submit_value: cli.submit_url,
        timeouts: Timeouts::with_element_ms(cli.timeout),
    };

    eprintln!("iden-harvest v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "Browser mode: {}",
        if config.headless { "headless" } else { "headed" }
    );

    runner::run(&config).context("run failed")?;

    Ok(())
}
