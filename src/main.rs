//! sharetrace - follow a shared photo from the app UI down to the wire
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use sharetrace_app::config;
use sharetrace_core::prelude::*;

/// sharetrace - a phone share flow next to the network story behind it
#[derive(Parser, Debug)]
#[command(name = "sharetrace")]
#[command(about = "Watch a shared photo travel through the network stack", long_about = None)]
struct Args {
    /// Image to open on the phone at startup
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Drive the phone's progress bar from its timer instead of the story
    #[arg(long)]
    no_narrative_pacing: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file; the TUI owns stdout
    sharetrace_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    if args.no_narrative_pacing {
        settings.upload.pace_with_narrative = false;
    }

    if let Some(image) = &args.image {
        info!("Initial image: {}", image.display());
    }

    let result = sharetrace_tui::run(settings, args.image).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("sharetrace exiting");
    result
}
