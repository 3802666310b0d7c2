use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "friendgraph", author, version, about)]
pub struct Config {
    /// Path to a command script. Reads from stdin if not supplied.
    ///
    /// One command per line:
    ///     profile <username> <full name...> [--image <url>]
    ///     friend <a> <b>
    ///     search <a> <b>
    ///     friends <username>
    ///     mutual <a> <b>
    ///     image <username> [url]
    ///     view <username>
    ///     friendships
    ///     stats
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to a json array of profiles the network starts with.
    ///
    /// Usernames must be non-empty and contain no whitespace.
    ///
    /// Example:
    ///     [{"username": "alice", "name": "Alice", "profile_image": "https://..."}]
    #[arg(short, long, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// How query results are printed.
    #[arg(short, long, default_value = "text")]
    pub format: FormatName,

    /// Stop at the first failing command and exit with an error.
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum FormatName {
    Text,
    Json,
}

impl FormatName {
    pub fn format(&self) -> friendgraph::Format {
        match self {
            FormatName::Text => friendgraph::Format::Text,
            FormatName::Json => friendgraph::Format::Json,
        }
    }
}
