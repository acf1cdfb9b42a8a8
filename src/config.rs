use std::path::PathBuf;

use crate::cli::args::Args;
use crate::tool::Tool;

/// Everything a download run needs besides the URL and the user's answers.
#[derive(Debug, Clone)]
pub struct Config {
    pub tool: Tool,
    /// Save location offered at the confirmation prompt.
    pub output_dir: PathBuf,
    /// Skip the confirmation prompt and use `output_dir`.
    pub assume_yes: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            tool: Tool::new(&args.tool).with_leading_args(&args.tool_args),
            output_dir: args.output_dir.clone(),
            assume_yes: args.yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use clap::Parser;

    #[test]
    fn from_args_carries_every_setting() {
        let args = Args::try_parse_from([
            "yt-grab",
            "--tool",
            "/opt/bin/yt-dlp",
            "--output-dir",
            "/data/videos",
            "--yes",
            "https://example.com/v",
        ])
        .unwrap();

        let config = Config::from_args(&args);
        assert_eq!(config.tool.program(), Path::new("/opt/bin/yt-dlp"));
        assert_eq!(config.output_dir, PathBuf::from("/data/videos"));
        assert!(config.assume_yes);
    }
}
