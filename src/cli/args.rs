use std::path::PathBuf;

use clap::Parser;

use crate::tool::DEFAULT_PROGRAM;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Video URL to download
    pub url: String,

    /// Default save location offered before downloading
    #[arg(short, long, env = "YT_GRAB_DIR", default_value = "movies")]
    pub output_dir: PathBuf,

    /// Downloader program to run
    #[arg(long, env = "YT_GRAB_TOOL", default_value = DEFAULT_PROGRAM)]
    pub tool: PathBuf,

    /// Extra argument passed to the downloader before its own options (repeatable)
    #[arg(long = "tool-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub tool_args: Vec<String>,

    /// Accept the default save location without asking
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_the_only_required_argument() {
        let args = Args::try_parse_from(["yt-grab", "https://example.com/v"]).unwrap();
        assert_eq!(args.url, "https://example.com/v");
        assert_eq!(args.tool, PathBuf::from(DEFAULT_PROGRAM));
        assert_eq!(DEFAULT_PROGRAM, "yt-dlp");
        assert!(args.tool_args.is_empty());
        assert!(!args.yes);
    }

    #[test]
    fn missing_url_is_rejected() {
        assert!(Args::try_parse_from(["yt-grab"]).is_err());
    }

    #[test]
    fn tool_args_keep_their_order() {
        let args = Args::try_parse_from([
            "yt-grab",
            "--tool",
            "python3",
            "--tool-arg",
            "-m",
            "--tool-arg",
            "yt_dlp",
            "-o",
            "/tmp/videos",
            "-y",
            "https://example.com/v",
        ])
        .unwrap();
        assert_eq!(args.tool, PathBuf::from("python3"));
        assert_eq!(args.tool_args, vec!["-m", "yt_dlp"]);
        assert_eq!(args.output_dir, PathBuf::from("/tmp/videos"));
        assert!(args.yes);
    }
}
