//! Fetch video information with an external downloader (`yt-dlp`), confirm
//! where to save it, then let the downloader do the download.

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod info;
pub mod size;
pub mod tool;

pub use config::Config;
pub use download::{download_video, Outcome};
pub use error::ToolError;
pub use info::VideoInfo;
pub use size::format_size;
pub use tool::Tool;
