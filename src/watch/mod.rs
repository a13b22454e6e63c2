//! Periodic re-evaluation of the monthly status. The loop fetches the raw
//! entry map, reloads settings, recomputes the account for the current month
//! and renders one status line per refresh.

pub mod source;

use std::{path::PathBuf, time::Duration};

use ansi_term::Colour;
use anyhow::Result;
use chrono::{Datelike, Local};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::{
    account::{
        display::{format_status, progress_color, Rgb, StatusText},
        monthly::{compute, Adjustments},
    },
    settings,
    utils::clock::{Clock, DefaultClock},
};

use source::{EntrySource, FileEntrySource};

/// One rendered refresh: the status text plus its progress color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub status: StatusText,
    pub color: Rgb,
}

impl StatusLine {
    pub fn render(&self) -> String {
        Colour::RGB(self.color.r, self.color.g, self.color.b)
            .bold()
            .paint(self.status.text.as_str())
            .to_string()
    }
}

pub struct WatchModule {
    source: Box<dyn EntrySource>,
    settings_path: PathBuf,
    shutdown: CancellationToken,
    refresh_interval: Duration,
    time_provider: Box<dyn Clock>,
}

impl WatchModule {
    pub fn new(
        source: Box<dyn EntrySource>,
        settings_path: PathBuf,
        shutdown: CancellationToken,
        refresh_interval: Duration,
        time_provider: Box<dyn Clock>,
    ) -> Self {
        Self {
            source,
            settings_path,
            shutdown,
            refresh_interval,
            time_provider,
        }
    }

    /// One full evaluation: fetch entries, reload settings for the current
    /// month and run the account engine.
    async fn refresh(&self) -> Result<StatusLine> {
        let entries = self.source.fetch().await?;
        let now = self.time_provider.time().with_timezone(&Local);
        let (year, month) = (now.year(), now.month());

        let settings = settings::load(&self.settings_path, year, month)?;
        let adjustments = Adjustments {
            bonus_days: settings.bonus_days,
            gift_days: settings.gift_days,
        };

        let result = compute(&entries, year, month, adjustments);
        let status = format_status(&result, settings.show_minutes, settings.display_format);
        let color = progress_color(&result, &settings.color_scheme());
        Ok(StatusLine { status, color })
    }

    /// Executes the refresh event loop until cancellation.
    pub async fn run(self) -> Result<()> {
        let mut refresh_point = self.time_provider.instant();
        loop {
            refresh_point += self.refresh_interval;

            match self.refresh().await {
                Ok(line) => {
                    info!(
                        "Refreshed: {} ({})",
                        line.status.text,
                        if line.status.on_track { "on track" } else { "behind" }
                    );
                    println!("{}", line.render());
                }
                Err(e) => {
                    error!("Encountered an error during refresh {:?}", e)
                }
            }

            select! {
                _ = self.shutdown.cancelled() => {
                    return Ok(())
                }
                _ = self.time_provider.sleep_until(refresh_point) => ()
            }
        }
    }
}

/// Runs the watch loop against an entries file until ctrl-c.
pub async fn run_watch(file: PathBuf, interval_secs: u64, settings_path: PathBuf) -> Result<()> {
    let shutdown_token = CancellationToken::new();

    let module = WatchModule::new(
        Box::new(FileEntrySource::new(file)),
        settings_path,
        shutdown_token.clone(),
        Duration::from_secs(interval_secs),
        Box::new(DefaultClock),
    );

    let (_, run_result) = tokio::join!(detect_shutdown(shutdown_token), module.run());
    run_result
}

async fn detect_shutdown(cancelation: CancellationToken) {
    select! {
        _ = tokio::signal::ctrl_c() => {
            cancelation.cancel();
        },
    };
}
