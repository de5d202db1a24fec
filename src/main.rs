mod cli;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;

use calsun::{build_entries, compute_range, timezone_for, CalendarEntry, CalendarRequest};

use crate::cli::Cli;
use crate::config::CalsunConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let values = CalsunConfig::load(&cli.config)?.merge(cli);
    let request = CalendarRequest::parse(
        values.lat.as_deref(),
        values.lng.as_deref(),
        values.name.as_deref(),
        values.days.as_deref(),
        values.exclude.as_deref(),
    )?;

    let start = cli.start.unwrap_or_else(|| Utc::now().date_naive());
    let tz = timezone_for(request.coordinate);
    info!(
        lat = request.coordinate.latitude,
        lng = request.coordinate.longitude,
        %tz,
        %start,
        days = request.days,
        "building calendar"
    );

    let days = compute_range(request.coordinate, start, request.days);
    let entries = build_entries(&request, &days, tz);
    info!(entries = entries.len(), "calendar built");

    println!("{}", request.calendar_name());
    for entry in &entries {
        println!();
        print_entry(entry);
    }
    Ok(())
}

fn print_entry(entry: &CalendarEntry) {
    println!("== {} ==", entry.summary);
    println!("UID: {}", entry.uid);
    println!("Start: {}", entry.start.to_rfc3339());
    println!("End: {}", entry.end.to_rfc3339());
    println!("{}", entry.description);
}
