use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    account::display::{DisplayMode, Rgb},
    settings,
    utils::time::YearMonth,
};

#[derive(Debug, Parser)]
pub struct SetCommand {
    #[arg(long, help = "Bonus days for the current month, 7 hours credit each")]
    bonus_days: Option<u32>,
    #[arg(long, help = "Gift days for the current month, each removes a working day")]
    gift_days: Option<u32>,
    #[arg(long, help = "Display format for the status text")]
    format: Option<DisplayMode>,
    #[arg(long, help = "Whether the status text includes minutes")]
    minutes: Option<bool>,
    #[arg(long, help = "Behind-schedule color as #rrggbb")]
    start_color: Option<Rgb>,
    #[arg(long, help = "At-target color as #rrggbb")]
    end_color: Option<Rgb>,
    #[arg(long, help = "Ahead-of-target color as #rrggbb")]
    ahead_color: Option<Rgb>,
}

/// Command to process `set`. Loads the settings for the current month,
/// applies the given overrides and writes them back.
pub fn process_set_command(
    SetCommand {
        bonus_days,
        gift_days,
        format,
        minutes,
        start_color,
        end_color,
        ahead_color,
    }: SetCommand,
    settings_path: &Path,
) -> Result<()> {
    let period = YearMonth::current();
    let mut settings = settings::load(settings_path, period.year, period.month)?;

    if let Some(v) = bonus_days {
        settings.bonus_days = v;
    }
    if let Some(v) = gift_days {
        settings.gift_days = v;
    }
    if let Some(v) = format {
        settings.display_format = v;
    }
    if let Some(v) = minutes {
        settings.show_minutes = v;
    }
    if let Some(v) = start_color {
        settings.start_color = v;
    }
    if let Some(v) = end_color {
        settings.end_color = v;
    }
    if let Some(v) = ahead_color {
        settings.ahead_color = v;
    }

    settings::save(settings_path, &settings)?;
    info!(
        "Saved settings for {period}: bonus={}, gift={}",
        settings.bonus_days, settings.gift_days
    );
    println!(
        "bonus days: {}, gift days: {}",
        settings.bonus_days, settings.gift_days
    );
    Ok(())
}
