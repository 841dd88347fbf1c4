//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strip tracking parameters from URLs and copy the clean link
#[derive(Parser)]
#[command(
    name = "sniplink",
    version,
    about = "Strip tracking parameters from URLs and copy the clean link",
    long_about = "A CLI tool that removes tracking parameters (utm_*, fbclid, gclid, ...) \
                  from URLs, shortens Amazon product links to permalinks, \
                  and copies the result to the clipboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Clean a URL and copy it to the clipboard (reads stdin when URL is omitted)
    Clean {
        /// URL to clean
        url: Option<String>,

        /// Print only, do not touch the clipboard
        #[arg(long)]
        no_copy: bool,

        /// Do not record the run in history
        #[arg(long)]
        no_history: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or manage recently cleaned URLs
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Manage tracking parameters
    Params {
        #[command(subcommand)]
        action: ParamsAction,
    },
    /// Manage sites that are never cleaned
    Whitelist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage per-site parameter rules
    #[command(name = "domain-rule")]
    DomainRule {
        #[command(subcommand)]
        action: DomainRuleAction,
    },
    /// Manage the Amazon associate tag
    #[command(name = "amazon-tag")]
    AmazonTag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}

/// History actions
#[derive(Subcommand)]
pub enum HistoryAction {
    /// List entries, newest first (default)
    List,
    /// Remove all entries
    Clear,
    /// Copy the clean URL of an entry to the clipboard
    Copy {
        /// Entry number as shown by `history list`
        index: usize,
    },
}

/// Tracking parameter actions
#[derive(Subcommand)]
pub enum ParamsAction {
    /// Show every parameter currently removed
    List,
    /// Show the built-in catalog and which entries are disabled
    Defaults,
    /// Add custom parameters
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove custom parameters
    Remove {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Keep built-in parameters instead of removing them
    Disable {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove built-in parameters again
    Enable {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Actions on a plain list setting
#[derive(Subcommand)]
pub enum ListAction {
    /// Show entries
    List,
    /// Add entries
    Add {
        #[arg(required = true)]
        entries: Vec<String>,
    },
    /// Remove entries
    Remove {
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

/// Domain rule actions
#[derive(Subcommand)]
pub enum DomainRuleAction {
    /// Show rules with their index
    List,
    /// Add a rule
    Add {
        /// Hostname patterns (`example.com` or `*.example.com`)
        #[arg(long, short = 'd', required = true, value_delimiter = ',')]
        domains: Vec<String>,

        /// Parameter names to remove on matching hosts
        #[arg(long, short = 'p', required = true, value_delimiter = ',')]
        params: Vec<String>,
    },
    /// Remove the rule at an index
    Remove { index: usize },
}

/// Associate tag actions
#[derive(Subcommand)]
pub enum TagAction {
    /// Show the configured tag
    Show,
    /// Set the tag
    Set { tag: String },
    /// Remove the tag
    Clear,
}
