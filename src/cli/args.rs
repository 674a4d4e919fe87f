//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Load a page and list the comments a visitor's browser would see
//! - `classify`: Show how a single comment text is judged
//! - `init`: Initialize remarks configuration file
//! - `serve`: Start MCP server for AI integration

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::CommentKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Classify(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Page to scan: an http(s) URL, a file:// URL or a local HTML file
    pub page: String,

    /// Kinds of comments to report (default: from config)
    /// Can be specified multiple times: --kind css --kind js
    #[arg(long = "kind", value_enum)]
    pub kinds: Vec<CommentKind>,

    /// Do not fetch linked stylesheets and scripts
    #[arg(long)]
    pub no_external: bool,

    /// Milliseconds to wait after load before scanning (overrides config file)
    #[arg(long, value_name = "MS")]
    pub settle_delay: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Language the comment was written in
    #[arg(value_enum)]
    pub kind: CommentKind,

    /// Comment text, delimiters already removed
    pub text: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the comments left in a page's HTML, CSS and JS
    Scan(ScanCommand),
    /// Show whether a comment text would be kept or discarded
    Classify(ClassifyCommand),
    /// Create a default .remarksrc.json in the current directory
    Init,
    /// Start MCP server for AI integration
    Serve,
}
