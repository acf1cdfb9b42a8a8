use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while running the external downloader.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error fetching video information ({status})")]
    MetadataFailed { status: ExitStatus, stderr: String },

    #[error("Downloader printed invalid video information: {0}")]
    InvalidMetadata(#[from] serde_json::Error),

    #[error("Download failed ({status})")]
    DownloadFailed { status: ExitStatus },
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;
