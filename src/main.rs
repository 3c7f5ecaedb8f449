#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use shipgame::{init_logging, prelude::*, CLASSIC_FLEET};
#[cfg(feature = "std")]
use std::io::Read;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Run a command script against a fresh match ("-" reads stdin).
    Play { script: String },
    /// Place two random fleets and play them out with random fire.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',', default_values_t = CLASSIC_FLEET)]
        fleet: Vec<usize>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { script } => {
            let text = if script == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading script from stdin")?;
                buf
            } else {
                std::fs::read_to_string(&script)
                    .with_context(|| format!("reading script {}", script))?
            };

            let mut game = Match::new();
            let reports = run_script(&mut game, &text)?;
            for report in &reports {
                println!("{:>4}  {:<28} {}", report.line, report.command, report.step);
            }
            println!(
                "outcome: {}  ships remaining: first={} second={}",
                game.outcome(),
                game.ships_remaining(Player::First),
                game.ships_remaining(Player::Second)
            );
        }
        Commands::Sim { seed, fleet } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let report = simulate(&mut rng, &fleet)?;
            println!("outcome: {}  shots: {}", report.outcome, report.shots);
        }
    }
    Ok(())
}
