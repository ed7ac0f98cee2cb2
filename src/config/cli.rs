use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-e2e")]
#[command(about = "Operator tool for the Blookie end-to-end suites")]
pub struct CliConfig {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the resolved settings with secrets masked
    Env,
    /// Validate the settings and check that the UI and API respond
    Check,
    /// Create logs/, screenshots/, reports/ and logs/videos/
    Prepare,
    /// List the test markers usable in E2E_MARKERS
    Markers,
    /// Log in the existing account and create quick posts
    Seed {
        #[arg(long, default_value = "5")]
        posts: usize,
    },
    /// Summarise a results.jsonl report
    Report {
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Delete screenshots and recorded videos
    Clean,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Seed { posts } = &self.command {
            validate_range("seed.posts", *posts, 1, 100)?;
        }
        Ok(())
    }
}
