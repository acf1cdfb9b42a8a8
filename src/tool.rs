//! Invocation of the external downloader (`yt-dlp` by default).

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::debug;

use crate::error::{ToolError, ToolResult};
use crate::info::VideoInfo;

pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// The downloader program plus any arguments that precede every invocation
/// (e.g. `python3 -m yt_dlp`).
#[derive(Debug, Clone)]
pub struct Tool {
    program: PathBuf,
    leading_args: Vec<OsString>,
}

impl Tool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args);
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ToolError {
        ToolError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    /// Ask the downloader for the video's metadata without downloading it.
    pub async fn fetch_info(&self, url: &str) -> ToolResult<VideoInfo> {
        let mut cmd = self.command();
        cmd.args(["--print-json", "--simulate"]).arg(url);
        debug!(command = ?cmd, "Fetching video information");

        let output = cmd.output().await.map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!(status = %output.status, "Metadata fetch failed");
            return Err(ToolError::MetadataFailed {
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(VideoInfo::from_json(&stdout)?)
    }

    /// Download the video, letting the downloader write to the terminal.
    ///
    /// `-k` keeps intermediate files; `output_template` uses the downloader's
    /// own placeholders (`%(title)s`, `%(ext)s`).
    pub async fn download(&self, url: &str, output_template: &str) -> ToolResult<ExitStatus> {
        let mut cmd = self.command();
        cmd.args(["-k", "-o", output_template]).arg(url);
        debug!(command = ?cmd, "Starting download");

        cmd.status().await.map_err(|e| self.spawn_error(e))
    }
}
