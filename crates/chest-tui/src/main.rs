//! Password chest TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Guard the chest with the built-in code
//! chest-tui
//!
//! # Custom code and a custom wrong-password sound
//! chest-tui --code "4 0 4 1" --wrong-audio buzzer.wav
//! ```

use std::path::PathBuf;

use chest_app::Runtime;
use chest_core::{SecretCode, config, parse};
use chest_tui::{TerminalDriver, effects};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Full-screen password chest toy
#[derive(Parser, Debug)]
#[command(name = "chest-tui")]
#[command(about = "Type the secret code, get a full-screen verdict")]
#[command(version)]
struct Args {
    /// Replace the built-in secret code (space or comma separated, same
    /// number count as the default)
    #[arg(long)]
    code: Option<String>,

    /// Custom 'wrong password' audio clip (wav/mp3/ogg); spoken text is
    /// used when absent
    #[arg(long, value_name = "FILE")]
    wrong_audio: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let secret = match &args.code {
        Some(raw) => SecretCode::new(parse(raw, config::DEFAULT_SECRET.len())?),
        None => SecretCode::new(config::DEFAULT_SECRET.to_vec()),
    };

    let wrong_audio = match &args.wrong_audio {
        Some(path) => Some(effects::load_clip(path)?),
        None => None,
    };

    let driver = TerminalDriver::new()?;
    let runtime = Runtime::new(driver, secret, wrong_audio);
    Ok(runtime.run().await?)
}
