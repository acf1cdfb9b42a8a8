//! The interactive download flow: fetch metadata, show it, confirm where to
//! save, then hand the download to the external tool.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::cli::prompt::Prompt;
use crate::config::Config;
use crate::error::ToolError;

/// How a download run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Downloaded { dir: PathBuf },
    Cancelled,
}

pub async fn download_video<P>(config: &Config, url: &str, prompt: &mut P) -> Result<Outcome>
where
    P: Prompt + ?Sized,
{
    println!("Downloading: {url}");

    let pb = create_spinner_progress_bar("Fetching video information");
    let fetched = config.tool.fetch_info(url).await;
    pb.finish_and_clear();
    let video = fetched?;

    println!("{}", video.summary());

    let Some(dir) = choose_destination(prompt, &config.output_dir)? else {
        println!("Download canceled.");
        return Ok(Outcome::Cancelled);
    };

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let template = output_template(&dir);
    info!(dir = %dir.display(), "Saving video");

    let status = config.tool.download(url, &template).await?;
    if !status.success() {
        debug!(%status, "Downloader exited with an error");
        return Err(ToolError::DownloadFailed { status }.into());
    }

    Ok(Outcome::Downloaded { dir })
}

/// Ask whether `default_dir` is fine; if not, ask for another path.
///
/// Returns `None` when the user declines and leaves the new path empty.
pub fn choose_destination<P>(prompt: &mut P, default_dir: &Path) -> Result<Option<PathBuf>>
where
    P: Prompt + ?Sized,
{
    let question = format!(
        "Default save location is '{}'. Is this okay?",
        default_dir.display()
    );
    if prompt.confirm(&question)? {
        return Ok(Some(default_dir.to_path_buf()));
    }

    let answer = prompt.ask("Enter new download path")?;
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(answer)))
    }
}

/// Output template for the downloader: `<dir>/<title>.<ext>`.
pub fn output_template(dir: &Path) -> String {
    dir.join("%(title)s.%(ext)s").to_string_lossy().into_owned()
}

fn create_spinner_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner().template("{spinner:.green} {elapsed_precise} {msg}");
    if let Ok(style) = style {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
