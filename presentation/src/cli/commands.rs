//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Heading, answer and a one-line summary of the run
    Text,
    /// The full analysis outcome as JSON
    Json,
}

/// CLI arguments for video-summarizer
#[derive(Parser, Debug)]
#[command(name = "video-summarizer")]
#[command(author, version, about = "Ask questions about a video using Gemini and web search")]
#[command(long_about = r#"
Video Summarizer uploads a video to Gemini, waits until the model can read it,
and lets an agent answer your question from the video and, when needed,
a DuckDuckGo web search.

Run the single-page web UI with `serve`, or analyze one file from the
terminal with `analyze`.

Configuration files are loaded from (in priority order):
1. VIDEO_SUMMARIZER_<SECTION>__<KEY>   Environment overrides
2. --config <path>                     Explicit config file
3. ./video-summarizer.toml             Project-level config
4. ~/.config/video-summarizer/config.toml   Global config

Example:
  video-summarizer serve --bind 127.0.0.1:8501
  video-summarizer analyze --video clip.mp4 --query "What happens in this video?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily rotated file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web page
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Analyze one video file and print the answer
    Analyze {
        /// Video file (.mp4, .mov or .avi)
        #[arg(long, value_name = "PATH")]
        video: PathBuf,

        /// What you want to know about the video
        #[arg(long, value_name = "TEXT")]
        query: String,

        /// Gemini API key (defaults to $GEMINI_API_KEY)
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "video-summarizer",
            "-vv",
            "analyze",
            "--video",
            "clip.mp4",
            "--query",
            "What happens in this video?",
            "--output",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Analyze {
                video,
                query,
                api_key,
                output,
            }) => {
                assert_eq!(video, PathBuf::from("clip.mp4"));
                assert_eq!(query, "What happens in this video?");
                assert!(api_key.is_none());
                assert_eq!(output, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["video-summarizer", "serve", "--bind", "0.0.0.0:9000", "--quiet"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Command::Serve { bind: Some(ref b) }) if b == "0.0.0.0:9000"
        ));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["video-summarizer", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_analyze_requires_query() {
        let result = Cli::try_parse_from(["video-summarizer", "analyze", "--video", "clip.mp4"]);
        assert!(result.is_err());
    }
}
