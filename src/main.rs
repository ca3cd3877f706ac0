use sheettask::commands::Cli;
use sheettask::libs::messages::macros::is_debug_mode;
use sheettask::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // API keys may come from a .env file
    let _ = dotenv::dotenv();

    let default_filter = if is_debug_mode() { "sheettask=debug" } else { "sheettask=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
