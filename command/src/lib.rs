use crate::cmds::{build_cli, run};
use clap::{App, ArgMatches};
use tracing_subscriber::EnvFilter;

use utility::Error;

pub mod cmds;
pub mod console;
pub(crate) mod error;
pub(crate) mod hook;
pub(crate) mod info;
pub(crate) mod logs;
pub mod plugin;
pub(crate) mod priority;
pub(crate) mod provider;
pub mod render;
pub mod report;

/// environment variable holding the log filter, e.g. `SPOTINST_LOG=debug`
pub const LOG_ENVIRONMENT: &str = "SPOTINST_LOG";

type Result = std::result::Result<(), State>;

#[derive(thiserror::Error, Debug)]
pub enum State {
    #[error("command matched")]
    Matched,
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Error(#[from] Error),
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENVIRONMENT).unwrap_or_else(|_| EnvFilter::new("warn"));
    // a second init, as in tests, keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn exec() {
    init_tracing();
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    if let Err(err) = run(&args).await {
        colour::red_ln!("{}", err.to_string());
        std::process::exit(1);
    }
}

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}
