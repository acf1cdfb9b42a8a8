use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yt_grab::cli::args::Args;
use yt_grab::cli::prompt::{AssumeYes, StdioPrompt};
use yt_grab::{download_video, Config, Outcome, ToolError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the dialogue with the user.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_args(&args);
    debug!(tool = %config.tool.program().display(), "Using downloader");

    let result = if config.assume_yes {
        download_video(&config, &args.url, &mut AssumeYes).await
    } else {
        download_video(&config, &args.url, &mut StdioPrompt::stdio()).await
    };

    match result {
        Ok(Outcome::Downloaded { dir }) => {
            println!("Saved to: {}", dir.display());
            Ok(())
        }
        Ok(Outcome::Cancelled) => Ok(()),
        Err(err) => {
            if let Some(ToolError::MetadataFailed { stderr, .. }) = err.downcast_ref::<ToolError>() {
                println!("Error fetching video information.");
                println!("{stderr}");
                process::exit(1);
            }
            Err(err)
        }
    }
}
