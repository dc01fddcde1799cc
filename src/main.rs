//! Command-line front end for the habit tracker
//!
//! Each invocation loads the habit file, runs one subcommand and saves again
//! if the subcommand changed anything. Logs go to stderr, results to stdout.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use habit_tracker::sample::seed_sample_habits;
use habit_tracker::{
    best_habit, list_all_habits, list_by_periodicity, longest_streak_all, longest_streak_for,
    summarize, summarize_by_periodicity, today, HabitTracker, Periodicity,
};

const DATA_FILE: &str = "habits.json";

/// Every save rewrites the habit file, so a directory only qualifies if we
/// can create files in it.
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let marker = dir.join(".habit_tracker_write_check");
    let writable = std::fs::write(&marker, b"").is_ok();
    if writable {
        if let Err(e) = std::fs::remove_file(&marker) {
            tracing::debug!("Could not remove {}: {}", marker.display(), e);
        }
    }
    writable
}

/// Pick where the habit file lives when `--file` is not given
fn get_default_data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // A dot directory in $HOME keeps the file easy to find and back up by
    // hand; the platform data and config dirs cover sandboxed homes, and the
    // working directory is the last place a user would still look for it.
    let candidates = [
        dirs::home_dir().map(|p| p.join(".habit_tracker")),
        dirs::data_dir().map(|p| p.join("habit_tracker")),
        dirs::config_dir().map(|p| p.join("habit_tracker")),
        std::env::current_dir().ok().map(|p| p.join(".habit_tracker")),
    ];

    if let Some(dir) = candidates.iter().flatten().find(|dir| is_writable_dir(dir)) {
        return Ok(dir.join(DATA_FILE));
    }

    // Habits saved here may not survive a reboot
    let temp_dir = std::env::temp_dir().join("habit_tracker");
    std::fs::create_dir_all(&temp_dir)?;
    tracing::warn!("Using temporary directory for habit file: {}", temp_dir.display());
    Ok(temp_dir.join(DATA_FILE))
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON habit file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, env = "HABIT_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List habits, optionally only those with one periodicity
    List {
        #[arg(short, long)]
        periodicity: Option<String>,

        /// Show completion counts and streaks
        #[arg(long)]
        detailed: bool,

        /// Print summaries as JSON
        #[arg(long, conflicts_with = "detailed")]
        json: bool,
    },
    /// Create a new habit
    Create {
        name: String,
        /// daily, weekly or monthly
        periodicity: String,
        task_spec: String,
    },
    /// Mark a habit as completed
    Complete {
        name: String,
        /// Day of the completion (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete every habit with this name
    Delete { name: String },
    /// Show the longest streak for one habit, or across all habits
    Streak { name: Option<String> },
    /// Add the sample habits with four weeks of history
    Seed,
}

fn parse_periodicity(raw: &str) -> Result<Periodicity, habit_tracker::DomainError> {
    raw.trim().to_lowercase().parse()
}

fn run(command: Command, tracker: &mut HabitTracker) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::List { periodicity, detailed, json } => {
            let store = tracker.store();
            let filter = periodicity.as_deref().map(parse_periodicity).transpose()?;
            let summaries = match &filter {
                Some(periodicity) => summarize_by_periodicity(store, periodicity),
                None => summarize(store),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else if detailed {
                for summary in &summaries {
                    let last = summary
                        .last_completed
                        .map_or_else(|| "never".to_string(), |d| d.to_string());
                    println!(
                        "- {} (Created: {}, Periodicity: {}, Completions: {}, Last: {}, Longest streak: {})",
                        summary.name,
                        summary.created_at,
                        summary.periodicity,
                        summary.total_completions,
                        last,
                        summary.longest_streak
                    );
                }
            } else {
                let names = match &filter {
                    Some(periodicity) => list_by_periodicity(store, periodicity),
                    None => list_all_habits(store),
                };
                for name in names {
                    println!("- {name}");
                }
            }
        }
        Command::Create { name, periodicity, task_spec } => {
            let periodicity = parse_periodicity(&periodicity)?;
            tracker.store_mut().create_habit(name.as_str(), periodicity, task_spec);
            tracker.save()?;
            println!("Habit '{name}' created.");
        }
        Command::Complete { name, date } => {
            if tracker.store_mut().complete_habit(&name, date).is_some() {
                tracker.save()?;
                println!("Habit '{name}' marked as completed.");
            } else {
                println!("Habit '{name}' not found.");
            }
        }
        Command::Delete { name } => {
            let removed = tracker.store_mut().delete_habit(&name);
            if removed > 0 {
                tracker.save()?;
            }
            println!("Deleted {removed} habit(s) named '{name}'.");
        }
        Command::Streak { name: Some(name) } => match tracker.store().get_habit(&name) {
            Some(habit) => println!("Longest streak for '{name}': {}", longest_streak_for(habit)),
            None => println!("Habit '{name}' not found."),
        },
        Command::Streak { name: None } => {
            let store = tracker.store();
            println!("Longest streak (all habits): {}", longest_streak_all(store));
            if let Some((habit, streak)) = best_habit(store).filter(|(_, streak)| *streak > 0) {
                println!("Held by '{}' ({streak})", habit.name());
            }
        }
        Command::Seed => {
            seed_sample_habits(tracker.store_mut(), today());
            tracker.save()?;
            println!("Sample habits added.");
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    let path = match args.file {
        Some(path) => path,
        None => get_default_data_path()?,
    };
    info!("Using habit file at: {}", path.display());

    let mut tracker = HabitTracker::open(path)?;
    run(args.command, &mut tracker)?;

    Ok(())
}
