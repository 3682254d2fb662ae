pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use contnum::core::model::{EquipCategory, OwnerCode};

/// contnum: issue and verify ISO 6346 container numbers.
#[derive(Parser, Debug)]
#[command(name = "contnum", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a batch of distinct container numbers.
    Generate {
        /// Owner code to draw from (three uppercase letters). Repeatable.
        #[arg(long = "owner", value_name = "CODE")]
        owners: Vec<OwnerCode>,

        /// File with one owner code per line; `#` starts a comment.
        #[arg(long)]
        owners_file: Option<PathBuf>,

        /// How many numbers to generate. Ignored when both --start and --end are given.
        #[arg(long, default_value_t = 1)]
        count: u64,

        /// First serial number of a sequential run.
        #[arg(long)]
        start: Option<u32>,

        /// Last serial number of a sequential run (inclusive).
        #[arg(long)]
        end: Option<u32>,

        /// Equipment category: U (container), J (equipment) or Z (chassis).
        #[arg(long, default_value = "U")]
        category: EquipCategory,

        /// Skip numbers whose checksum is 10 (printed as check digit 0).
        #[arg(long)]
        exclude_check_digit_10: bool,

        /// Skip numbers that an adjacent-digit swap could turn into another valid number.
        #[arg(long)]
        exclude_transposition: bool,

        /// Seed for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Complete or verify a container number.
    ///
    /// Ten characters print the number with its check digit. Eleven characters
    /// are verified and checked for transposition look-alikes.
    Check {
        /// Container number, e.g. CSQU3054383.
        number: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One number per line.
    Text,
    /// JSON array of objects.
    Json,
}

/// Parse CLI arguments. Called from `main`.
pub fn parse() -> Cli {
    Cli::parse()
}
