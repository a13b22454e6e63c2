use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    account::{
        aggregate::RawEntries,
        display::{format_status, progress_color, DisplayMode},
        monthly::{compute, Adjustments},
    },
    settings,
    utils::time::YearMonth,
    watch::StatusLine,
};

#[derive(Debug, Parser)]
pub struct StatusCommand {
    #[arg(
        help = "JSON file mapping YYYY-MM-DD dates to H:M:S durations. Reads stdin when omitted"
    )]
    file: Option<PathBuf>,
    #[arg(
        long,
        help = "Month to evaluate in YYYY-MM form. Defaults to the current month"
    )]
    month: Option<YearMonth>,
    #[arg(long, help = "Override the saved bonus day count for this invocation")]
    bonus_days: Option<u32>,
    #[arg(long, help = "Override the saved gift day count for this invocation")]
    gift_days: Option<u32>,
    #[arg(long, help = "Override the saved display format")]
    format: Option<DisplayMode>,
    #[arg(long, help = "Show minutes in the status text", overrides_with = "no_minutes")]
    minutes: bool,
    #[arg(long, help = "Drop minutes from the status text")]
    no_minutes: bool,
    #[arg(long, help = "Print without the progress color")]
    no_color: bool,
}

/// Command to process `status`. Evaluates one month from a raw entry map and
/// prints the status line, colored by progress unless disabled.
pub fn process_status_command(
    StatusCommand {
        file,
        month,
        bonus_days,
        gift_days,
        format,
        minutes,
        no_minutes,
        no_color,
    }: StatusCommand,
    settings_path: &Path,
) -> Result<()> {
    let period = month.unwrap_or_else(YearMonth::current);
    let settings = settings::load(settings_path, period.year, period.month)?;
    let entries = read_entries(file.as_deref())?;

    let adjustments = Adjustments {
        bonus_days: bonus_days.unwrap_or(settings.bonus_days),
        gift_days: gift_days.unwrap_or(settings.gift_days),
    };
    debug!("Evaluating {period} with {adjustments:?}");

    let result = compute(&entries, period.year, period.month, adjustments);

    let show_minutes = if no_minutes {
        false
    } else if minutes {
        true
    } else {
        settings.show_minutes
    };
    let mode = format.unwrap_or(settings.display_format);

    let status = format_status(&result, show_minutes, mode);
    if no_color {
        println!("{}", status.text);
    } else {
        let color = progress_color(&result, &settings.color_scheme());
        println!("{}", StatusLine { status, color }.render());
    }
    Ok(())
}

fn read_entries(file: Option<&Path>) -> Result<RawEntries> {
    let data = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read entries from {path:?}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    serde_json::from_str(&data)
        .context("Entries should be a JSON object mapping dates to durations")
}
