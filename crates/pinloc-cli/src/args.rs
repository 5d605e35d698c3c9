use clap::{Parser, Subcommand};

/// CLI arguments for pinloc-cli
#[derive(Debug, Parser)]
#[command(
    name = "pinloc",
    version,
    about = "CLI for querying and inspecting a pinloc location dataset"
)]
pub struct CliArgs {
    /// Path to the dataset: a JSON array of flat records (.json / .json.gz)
    /// or a binary snapshot (.bin / .bin.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Cap on suggestion lists for partial pincode queries
    #[arg(short = 'l', long = "limit", global = true)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all states
    States,

    /// List all districts of a state
    Districts {
        /// State name (case-insensitive)
        state: String,
    },

    /// List all cities of a (state, district) pair
    Cities {
        /// State name (case-insensitive)
        state: String,
        /// District name (case-insensitive)
        district: String,
    },

    /// Resolve a full or partial pincode to location suggestions
    Pincode {
        /// 1-6 digits
        query: String,
    },

    /// Build the index and write it out as a binary snapshot
    Snapshot {
        /// Output path (.bin, or .bin.gz for a compressed snapshot)
        out: String,
    },
}
