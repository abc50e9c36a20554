use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg64;

mod assignments;
mod focus;
mod goals;
mod insights;
mod models;
mod nudge;
mod phrases;
mod report;
mod shield;
mod snapshot;

use models::DueUrgency;
use nudge::ShieldHeading;
use shield::{JsonFileShield, ShieldSurface, StdoutShield};

#[derive(Parser)]
#[command(name = "trail-focus")]
#[command(about = "Pick today's focus and compose screen-time nudges for Trail", long_about = None)]
struct Cli {
    /// Goals/assignments snapshot fetched from the Trail backend
    #[arg(long, global = true, env = "TRAIL_SNAPSHOT", default_value = "trail.json")]
    snapshot: PathBuf,
    /// Override the clock (RFC 3339), used for due-date math
    #[arg(long, global = true)]
    now: Option<DateTime<Utc>>,
    /// Seed for phrase selection
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active goals by urgency
    Goals {
        #[arg(long, default_value_t = 4)]
        limit: usize,
    },
    /// List open assignments by urgency
    Assignments {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Show the resolved focus and upcoming assignment
    Focus {
        #[arg(long = "override")]
        manual_override: Option<String>,
    },
    /// Compose a nudge and push it to the shield
    Nudge {
        #[arg(long = "override")]
        manual_override: Option<String>,
        /// Use the "Time check" heading for a daily limit of this many minutes
        #[arg(long)]
        limit_minutes: Option<u32>,
        /// Write the shield configuration here instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a markdown focus report
    Report {
        #[arg(long = "override")]
        manual_override: Option<String>,
        #[arg(long, default_value_t = 4)]
        picker: usize,
        #[arg(long, default_value = "focus.md")]
        out: PathBuf,
    },
    /// Import assignments from a Canvas CSV export into the snapshot
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let now = cli.now.unwrap_or_else(Utc::now);
    let mut rng = match cli.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    match cli.command {
        Commands::Goals { limit } => {
            let snapshot = snapshot::load_snapshot(&cli.snapshot)?;
            let picker = goals::goal_picker(snapshot.goals.as_deref().unwrap_or_default(), limit);

            if picker.is_empty() {
                println!("No active goals.");
                return Ok(());
            }

            println!("Goals by priority:");
            for ranked in picker.iter() {
                println!(
                    "- {} score {:.2} (streak {}, {}/{} today)",
                    ranked.goal.title,
                    ranked.score,
                    ranked.goal.current_streak,
                    ranked.goal.today_progress,
                    ranked.goal.target_value
                );
            }
        }
        Commands::Assignments { limit } => {
            let snapshot = snapshot::load_snapshot(&cli.snapshot)?;
            let ranked =
                assignments::rank_assignments(snapshot.assignments.as_deref().unwrap_or_default(), now);

            if ranked.is_empty() {
                println!("No open assignments.");
                return Ok(());
            }

            println!("Assignments by urgency:");
            for entry in ranked.iter().take(limit) {
                let label = entry
                    .days_left
                    .and_then(assignments::due_label)
                    .map(|l| format!(" • {l}"))
                    .unwrap_or_default();
                println!(
                    "- [{}] {} ({}){} score {:.0}",
                    DueUrgency::from_days_left(entry.days_left).as_str(),
                    entry.assignment.title,
                    entry.assignment.course_name,
                    label,
                    entry.score
                );
            }
        }
        Commands::Focus { manual_override } => {
            let snapshot = snapshot::load_snapshot(&cli.snapshot)?;
            let manual = focus::normalize_override(manual_override.as_deref());
            let selection = focus::select_focus(
                snapshot.goals.as_deref(),
                snapshot.assignments.as_deref(),
                manual.as_deref(),
                snapshot.nudge.as_ref(),
                now,
            );

            println!("Focus: {}", selection.focus_title.as_deref().unwrap_or("(none)"));
            match selection.assignment_title.as_deref() {
                Some(title) => println!(
                    "Coming up{}: {}{}",
                    selection
                        .assignment_urgency
                        .map(|u| format!(" [{}]", u.as_str()))
                        .unwrap_or_default(),
                    title,
                    selection
                        .assignment_due_display
                        .as_deref()
                        .map(|d| format!(" (due {d})"))
                        .unwrap_or_default()
                ),
                None => println!("Coming up: (nothing)"),
            }
        }
        Commands::Nudge {
            manual_override,
            limit_minutes,
            out,
        } => {
            let snapshot = snapshot::load_snapshot(&cli.snapshot)?;
            let manual = focus::normalize_override(manual_override.as_deref());
            let heading = match limit_minutes {
                Some(limit_minutes) => ShieldHeading::TimeCheck { limit_minutes },
                None => ShieldHeading::BeforeYouScroll,
            };
            let mut surface: Box<dyn ShieldSurface> = match out {
                Some(path) => Box::new(JsonFileShield::new(path)),
                None => Box::new(StdoutShield),
            };

            shield::push_nudge(&snapshot, manual.as_deref(), heading, now, &mut rng, surface.as_mut())?;
        }
        Commands::Report {
            manual_override,
            picker,
            out,
        } => {
            let snapshot = snapshot::load_snapshot(&cli.snapshot)?;
            let manual = focus::normalize_override(manual_override.as_deref());
            let selection = focus::select_focus(
                snapshot.goals.as_deref(),
                snapshot.assignments.as_deref(),
                manual.as_deref(),
                snapshot.nudge.as_ref(),
                now,
            );
            let message = nudge::compose_for(&selection, &mut rng);
            let report = report::build_report(&snapshot, &selection, &message, picker, now);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Import { csv } => {
            let mut current = if cli.snapshot.exists() {
                snapshot::load_snapshot(&cli.snapshot)?
            } else {
                models::Snapshot::default()
            };
            let imported = snapshot::import_assignments_csv(&csv)?;
            let total = imported.len();
            let inserted = snapshot::merge_assignments(&mut current, imported);
            snapshot::save_snapshot(&cli.snapshot, &current)?;
            log::info!("imported {total} assignments ({inserted} new)");
            println!(
                "Imported {total} assignments ({inserted} new) from {} into {}.",
                csv.display(),
                cli.snapshot.display()
            );
        }
    }

    Ok(())
}
