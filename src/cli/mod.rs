pub mod set;
pub mod status;

use std::{env, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use set::{process_set_command, SetCommand};
use status::{process_status_command, StatusCommand};
use tokio::io;
use tracing::level_filters::LevelFilter;

use crate::{
    account::{holidays::holidays_for_year, working_days::working_days_in_month},
    settings::SETTINGS_FILE,
    utils::{logging::enable_logging, time::date_to_entry_key, time::YearMonth},
    watch::run_watch,
};

#[derive(Parser, Debug)]
#[command(name = "Logtime", version, long_about = None)]
#[command(
    about = "Tracks monthly logged hours against a French working-day target",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Evaluate the monthly status once and print it")]
    Status {
        #[command(flatten)]
        command: StatusCommand,
    },
    #[command(about = "Re-evaluate the status periodically from an entries file")]
    Watch {
        #[arg(help = "JSON file mapping YYYY-MM-DD dates to H:M:S durations")]
        file: PathBuf,
        #[arg(long, default_value_t = 60, help = "Refresh interval in seconds")]
        interval: u64,
    },
    #[command(about = "List French public holidays for a year")]
    Holidays {
        #[arg(help = "Calendar year, for example 2025")]
        year: i32,
    },
    #[command(about = "Count working days in a month")]
    WorkingDays {
        #[arg(help = "Month in YYYY-MM form")]
        month: YearMonth,
    },
    #[command(about = "Update persisted settings: day counters, display preferences, colors")]
    Set {
        #[command(flatten)]
        command: SetCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    let application_path = create_application_default_path()?;
    enable_logging(&application_path, logging_level, args.log)?;

    let settings_path = application_path.join(SETTINGS_FILE);

    match args.commands {
        Commands::Status { command } => process_status_command(command, &settings_path),
        Commands::Watch { file, interval } => run_watch(file, interval, settings_path).await,
        Commands::Holidays { year } => {
            for date in holidays_for_year(year) {
                println!("{}", date_to_entry_key(date));
            }
            Ok(())
        }
        Commands::WorkingDays { month } => {
            let holidays = holidays_for_year(month.year);
            println!(
                "{}",
                working_days_in_month(month.year, month.month, &holidays)
            );
            Ok(())
        }
        Commands::Set { command } => process_set_command(command, &settings_path),
    }
}

pub fn create_application_default_path() -> Result<PathBuf> {
    let path = {
        #[cfg(windows)]
        {
            let mut path =
                PathBuf::from(env::var("APPDATA").expect("APPDATA should be present on Windows"));
            path.push("logtime");
            path
        }
        #[cfg(not(windows))]
        {
            let mut path = env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(".config");
                        path
                    })
                })
                .expect("Couldn't find neither XDG_CONFIG_HOME nor HOME");
            path.push("logtime");
            path
        }
    };

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
