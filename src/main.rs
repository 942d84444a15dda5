use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use strokes_gained::clubs::{club_stats, ClubStats};
use strokes_gained::history::{filter_by_time_period, summarize_history, HistorySummary};
use strokes_gained::simulate::simulate_round;
use strokes_gained::stats::{format_relative_score, format_strokes_gained};
use strokes_gained::{Lie, Outcome, RoundRecord, ShotObservation, ShotType};

#[derive(Parser, Debug)]
#[command(name = "strokes-gained")]
#[command(about = "Strokes-gained calculator and round statistics", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Strokes gained for a single shot
    Shot {
        /// tee, approach, chip, bunker or putt
        #[arg(short = 't', long)]
        shot_type: String,

        /// Distance before the shot (yards, feet for putts)
        #[arg(short, long)]
        distance: Option<f64>,

        /// fairway, rough, bunker, sand, green, hazard, ob, recovery, holed, good, poor
        #[arg(short, long)]
        outcome: String,

        /// Hole par
        #[arg(short, long, default_value = "4")]
        par: u8,
    },

    /// Summarize a round from a JSON file
    Round {
        path: PathBuf,

        /// Print per-shot results
        #[arg(short, long)]
        shots: bool,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Per-club statistics across one or more round files
    Clubs {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Emit as JSON
        #[arg(long)]
        json: bool,
    },

    /// Averages and scoring trend across round files
    History {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only rounds from the last N days
        #[arg(short, long)]
        days: Option<u32>,

        /// Emit as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a sample round as JSON
    Simulate {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "Sample Links")]
        course: String,

        /// Round date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print a baseline table
    Tables {
        /// tee, fairway, rough, sand, recovery or green (all if omitted)
        #[arg(short, long)]
        lie: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Command::Shot {
            shot_type,
            distance,
            outcome,
            par,
        } => {
            let shot = ShotObservation::new(
                ShotType::from_label(&shot_type),
                distance,
                Outcome::from_label(&outcome),
                par,
            );
            if shot.shot_type == ShotType::Unknown {
                log::warn!("Unrecognized shot type '{}', scoring as neutral", shot_type);
            }
            println!("{:+.2}", shot.strokes_gained());
        }
        Command::Round { path, shots, json } => {
            let round = RoundRecord::from_json_file(&path)
                .with_context(|| format!("Failed to load round from {}", path.display()))?;
            if json {
                let summary = serde_json::to_string_pretty(&round.summary())
                    .context("Failed to serialize summary")?;
                println!("{}", summary);
            } else {
                print_round(&round, shots);
            }
        }
        Command::Clubs { paths, json } => {
            let rounds = load_rounds(&paths)?;
            let stats = club_stats(&rounds);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_clubs(&stats);
            }
        }
        Command::History { paths, days, json } => {
            let rounds = load_rounds(&paths)?;
            let today = chrono::Local::now().date_naive();
            let selected = filter_by_time_period(&rounds, days, today);
            log::info!("Using {} of {} rounds", selected.len(), rounds.len());
            let history = summarize_history(selected);
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else {
                print_history(&history, days);
            }
        }
        Command::Simulate { seed, course, date } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let round = simulate_round(&mut rng, &course, date);
            log::info!(
                "Simulated {} holes at {} ({})",
                round.holes.len(),
                round.course_name,
                round.date
            );
            println!("{}", serde_json::to_string_pretty(&round)?);
        }
        Command::Tables { lie } => {
            let lies: Vec<Lie> = match lie {
                Some(label) => vec![parse_lie(&label)?],
                None => Lie::ALL.to_vec(),
            };
            for lie in lies {
                print_table(lie);
            }
        }
    }

    Ok(())
}

fn load_rounds(paths: &[PathBuf]) -> Result<Vec<RoundRecord>> {
    paths
        .iter()
        .map(|path| {
            RoundRecord::from_json_file(path)
                .with_context(|| format!("Failed to load round from {}", path.display()))
        })
        .collect()
}

fn parse_lie(label: &str) -> Result<Lie> {
    Lie::ALL
        .into_iter()
        .find(|lie| lie.as_str() == label)
        .with_context(|| format!("Unknown lie '{}'", label))
}

fn print_round(round: &RoundRecord, show_shots: bool) {
    let summary = round.summary();
    let sg = summary.strokes_gained;

    println!("{}", "=".repeat(50));
    println!("  {} - {}", round.course_name, round.date);
    if let Some(ref tee) = round.tee_box {
        println!("  Tees: {}", tee);
    }
    println!("{}", "=".repeat(50));

    if show_shots {
        let mut current_hole = None;
        for (hole, shot, gained) in round.shot_results() {
            if current_hole != Some(hole.hole_number) {
                current_hole = Some(hole.hole_number);
                println!();
                println!(
                    "  Hole {} (par {}) score {}",
                    hole.hole_number,
                    hole.par,
                    hole.score
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
            }
            println!(
                "    #{:<2} {:<9} {:>6} {:<9} {:+.2}",
                shot.shot_number,
                shot.shot_type,
                shot.observation(hole.par)
                    .distance_to_target
                    .map(|d| format!("{:.0}", d))
                    .unwrap_or_else(|| "-".to_string()),
                shot.outcome,
                gained
            );
        }
    }

    println!();
    println!("{}", "-".repeat(40));
    println!(
        "  Score:        {} ({})",
        summary.total_score,
        format_relative_score(summary.relative_to_par())
    );
    println!("  Holes:        {}", summary.holes_played);
    println!(
        "  Fairways:     {}/{} ({}%)",
        summary.fairways_hit,
        summary.fairways_total,
        summary.fairway_percentage()
    );
    println!(
        "  GIR:          {}/{} ({}%)",
        summary.greens_in_regulation,
        summary.holes_played,
        summary.gir_percentage()
    );
    println!(
        "  Putts:        {} ({:.1} per hole)",
        summary.total_putts,
        summary.average_putts()
    );
    println!("{}", "-".repeat(40));
    println!("  SG Off Tee:   {}", format_strokes_gained(Some(sg.off_tee)));
    println!("  SG Approach:  {}", format_strokes_gained(Some(sg.approach)));
    println!("  SG Around:    {}", format_strokes_gained(Some(sg.around_green)));
    println!("  SG Putting:   {}", format_strokes_gained(Some(sg.putting)));
    println!("  SG Total:     {}", format_strokes_gained(Some(sg.total)));
    println!("{}", "-".repeat(40));
}

fn print_clubs(stats: &[ClubStats]) {
    println!(
        "{:<10} {:>5} {:>7} {:>7} {:>7} {:>6} {:>7}",
        "Club", "Shots", "Avg", "Min", "Max", "Acc%", "SG"
    );
    println!("{}", "-".repeat(56));
    let yards = |d: Option<f64>| d.map(|d| format!("{:.0}", d)).unwrap_or_else(|| "-".to_string());
    for club in stats {
        println!(
            "{:<10} {:>5} {:>7} {:>7} {:>7} {:>6} {:>7}",
            club.club_name,
            club.total_shots,
            yards(club.average_distance),
            yards(club.min_distance),
            yards(club.max_distance),
            club.accuracy
                .map(|a| format!("{:.0}", a))
                .unwrap_or_else(|| "-".to_string()),
            format_strokes_gained(Some(club.strokes_gained)),
        );
    }
}

fn print_history(history: &HistorySummary, days: Option<u32>) {
    let sg = history.strokes_gained_per_round();
    let period = days
        .map(|d| format!("last {} days", d))
        .unwrap_or_else(|| "all time".to_string());

    println!("{}", "=".repeat(50));
    println!("  {} rounds ({})", history.rounds, period);
    println!("{}", "=".repeat(50));
    println!(
        "  Avg Score:    {}",
        history
            .average_score
            .map(|s| format!("{:.1}", s))
            .unwrap_or_else(|| "-".to_string())
    );
    if let Some(trend) = history.score_trend.filter(|t| *t != 0.0) {
        let direction = if trend > 0.0 { "improving" } else { "worsening" };
        println!("  Trend:        {:.1} ({})", trend.abs(), direction);
    }
    println!(
        "  Fairways:     {}/{} ({}%)",
        history.fairways_hit,
        history.fairways_total,
        history.fairway_percentage()
    );
    println!(
        "  GIR:          {}/{} ({}%)",
        history.greens_in_regulation,
        history.holes_played,
        history.gir_percentage()
    );
    println!("  Putts:        {:.1} per hole", history.average_putts());
    println!("{}", "-".repeat(40));
    println!("  SG per round");
    println!("  Off Tee:      {}", format_strokes_gained(Some(sg.off_tee)));
    println!("  Approach:     {}", format_strokes_gained(Some(sg.approach)));
    println!("  Around:       {}", format_strokes_gained(Some(sg.around_green)));
    println!("  Putting:      {}", format_strokes_gained(Some(sg.putting)));
    println!("  Total:        {}", format_strokes_gained(Some(sg.total)));
    println!("{}", "-".repeat(40));
}

fn print_table(lie: Lie) {
    let unit = lie.unit().abbreviation();
    println!();
    println!("  {} ({})", lie, unit);
    println!("{}", "-".repeat(24));
    for &(threshold, strokes) in lie.table().entries() {
        println!("  {:>5.0} {:<3}  {:.2}", threshold, unit, strokes);
    }
}
