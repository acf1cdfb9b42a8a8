use serde::Deserialize;
use serde_json::{Map, Value};

use crate::size::format_size;

const UNKNOWN: &str = "Unknown";

/// Video information printed by the downloader's `--print-json` mode.
///
/// Only the fields shown to the user are typed; every other key is kept in
/// `extra` untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub filesize_approx: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoInfo {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_size(&self) -> String {
        match self.filesize_approx {
            Some(size) => format_size(size),
            None => UNKNOWN.to_string(),
        }
    }

    /// The lines printed before asking where to save the video.
    pub fn summary(&self) -> String {
        format!("Title: {}\nSize: {}", self.display_title(), self.display_size())
    }
}
