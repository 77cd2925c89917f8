//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Bulk export of documents and metadata from an Xtendis DMS
#[derive(Parser, Debug)]
#[command(name = "xtendis-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the export: page images plus metadata and audit sidecars
    Export {
        /// Restrict the run to a single archive
        #[arg(long)]
        archive: Option<i32>,
    },

    /// List the archives the source database knows
    Archives {
        /// Show a single archive only
        #[arg(long)]
        archive: Option<i32>,
    },

    /// Print the synthesized document query for one archive
    Plan {
        /// Archive to synthesize the query for
        #[arg(long)]
        archive: i32,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
