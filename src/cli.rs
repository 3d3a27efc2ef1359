use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use migrate_info::command::MigrateInfoOptions;
use migrate_info::repository::{PathFilter, RefSelection};
use migrate_info::util::parse_bytes;

#[derive(Parser, Debug)]
#[command(
    name = "migrate-info",
    version,
    about = "Show which file types take up the most space in git history"
)]
pub struct Cli {
    /// Path to the git repository
    #[arg(default_value = ".")]
    pub repo_path: PathBuf,

    /// Only count files larger than this size (e.g. "500MB", "1.5 GiB")
    #[arg(long, value_name = "SIZE", default_value = "0")]
    pub above: String,

    /// Number of extensions to show
    #[arg(long, value_name = "N", default_value_t = 5, allow_negative_numbers = true)]
    pub top: i64,

    /// Refs whose history is examined (default: the current branch)
    #[arg(long = "include-ref", value_name = "REF", action = ArgAction::Append)]
    pub include_ref: Vec<String>,

    /// Refs whose history is skipped
    #[arg(long = "exclude-ref", value_name = "REF", action = ArgAction::Append)]
    pub exclude_ref: Vec<String>,

    /// Examine all local and remote refs
    #[arg(long)]
    pub everything: bool,

    /// Only count paths matching these globs (comma-separated or repeated)
    #[arg(short = 'I', long, value_name = "GLOB", action = ArgAction::Append)]
    pub include: Vec<String>,

    /// Skip paths matching these globs (comma-separated or repeated)
    #[arg(short = 'X', long, value_name = "GLOB", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn into_options(self) -> Result<MigrateInfoOptions> {
        let above = parse_bytes(&self.above).context("cannot parse --above=<n>")?;
        let filter = PathFilter::new(&self.include, &self.exclude)?;

        Ok(MigrateInfoOptions {
            repo_path: self.repo_path,
            above,
            top: self.top,
            refs: RefSelection {
                include: self.include_ref,
                exclude: self.exclude_ref,
                everything: self.everything,
            },
            filter,
            quiet: self.quiet,
        })
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
