use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Sunrise and sunset calendar for a location.
#[derive(Parser, Debug)]
#[command(name = "calsun", version, about = "Sunrise and sunset calendar for a location")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "calsun.toml")]
    pub config: PathBuf,

    /// Latitude in degrees, overrides the config file.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude in degrees, overrides the config file.
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,

    /// Location name shown in event descriptions.
    #[arg(long)]
    pub name: Option<String>,

    /// Number of days to compute (1-90).
    #[arg(short, long)]
    pub days: Option<String>,

    /// Leave out one event kind (`sunrise` or `sunset`).
    #[arg(long)]
    pub exclude: Option<String>,

    /// First day of the range (YYYY-MM-DD, defaults to today in UTC).
    #[arg(long)]
    pub start: Option<NaiveDate>,
}
