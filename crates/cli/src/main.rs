use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use closest_pair::PlaneParams;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod prompt;
mod report;
mod run;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of random integer points in a bounded plane")]
struct Cmd {
    /// Log debug events (generation draws, solver results)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a plane and find its closest pair; prompts for missing values
    Solve {
        /// Number of points to generate (at least 3)
        #[arg(long)]
        points: Option<usize>,
        /// Coordinates range over [-bounds, bounds]
        #[arg(long)]
        bounds: Option<u32>,
        /// RNG seed; drawn at random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Also list every generated point, ordered by x
        #[arg(long)]
        show_points: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cross-check divide and conquer against the all-pairs scan
    Verify {
        #[arg(long)]
        points: usize,
        #[arg(long)]
        bounds: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        trials: u32,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            points,
            bounds,
            seed,
            show_points,
            json,
        } => solve(points, bounds, seed, show_points, json),
        Action::Verify {
            points,
            bounds,
            seed,
            trials,
        } => verify(PlaneParams::new(points, bounds), seed, trials),
    }
}

fn solve(
    points: Option<usize>,
    bounds: Option<u32>,
    seed: Option<u64>,
    show_points: bool,
    json: bool,
) -> Result<()> {
    let (bounds, num_points) = prompt::prompt_missing(bounds, points)?;
    let seed = seed.unwrap_or_else(rand::random);
    let report = run::solve_plane(PlaneParams::new(num_points, bounds), seed, show_points)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn verify(params: PlaneParams, seed: u64, trials: u32) -> Result<()> {
    run::cross_check(params, seed, trials)?;
    println!("{trials} trials agree");
    Ok(())
}
