use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pebble_tree::{minimum_peak, GameConfig, OptimalStrategy, Session, Snapshot, DEFAULT_DEPTH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pebble-tree", about = "Pebble a perfect binary tree with as few pebbles as possible")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively: one node id per line on stdin.
    Play {
        /// Tree depth (number of layers).
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
        /// Print the pebble-count timeline when the game ends.
        #[arg(long)]
        history: bool,
    },
    /// Replay the optimal strategy and report its peak usage.
    Solve {
        /// Tree depth (number of layers).
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
    },
    /// Search exhaustively for the minimum peak needed to win.
    Bound {
        /// Tree depth (number of layers).
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { depth, history } => run_play(depth, history)?,
        Commands::Solve { depth } => run_solve(depth)?,
        Commands::Bound { depth } => run_bound(depth)?,
    }

    Ok(())
}

fn run_play(depth: usize, history: bool) -> Result<()> {
    let config = GameConfig {
        depth,
        track_history: history,
    };
    let mut session = Session::with_config(config).context("failed to create session")?;
    session.start();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_snapshot(&mut out, &session.snapshot())?;

    let stdin = io::stdin();
    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "q" || input == "quit" {
            break;
        }

        let node: usize = match input.parse() {
            Ok(node) => node,
            Err(_) => {
                writeln!(out, "line {}: '{}' is not a node id", line_no + 1, input)?;
                continue;
            }
        };

        match session.try_activate(node) {
            Ok(outcome) => writeln!(out, "{}", outcome.transition)?,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        }
        print_snapshot(&mut out, &session.snapshot())?;

        if session.snapshot().won() {
            break;
        }
    }

    let snapshot = session.snapshot();
    if snapshot.won() {
        writeln!(out, "You won! Maximum pebbles used: {}", snapshot.peak_pebbles_in_play)?;
        if session.take_celebration() {
            writeln!(out, "Perfect! You used the optimum number of pebbles!")?;
        } else {
            writeln!(out, "Great work, but can you do it with fewer pebbles?")?;
        }
    }

    if let Some(profile) = session.engine().profile() {
        writeln!(out, "{}", profile.report())?;
    }

    Ok(())
}

fn run_solve(depth: usize) -> Result<()> {
    let strategy = OptimalStrategy::for_depth(depth).context("failed to build strategy")?;
    let config = GameConfig::with_depth(depth);
    let mut session = Session::with_config(config)?;
    session.start();

    for &node in strategy.activations() {
        let outcome = session.on_node_activated(node);
        let transition = outcome.transition.to_string();
        println!("{:>4}  {:<24} in play: {}", node, transition, outcome.pebbles_in_play);
    }

    let snapshot = session.snapshot();
    println!(
        "won={} peak={} target={} optimal={}",
        snapshot.won(),
        snapshot.peak_pebbles_in_play,
        config.optimal_peak(),
        snapshot.optimal_win
    );
    Ok(())
}

fn run_bound(depth: usize) -> Result<()> {
    let node_count = GameConfig::with_depth(depth).node_count()?;
    let peak = minimum_peak(depth)
        .with_context(|| format!("failed to search depth {}", depth))?;
    println!("depth {} ({} nodes): minimum peak {}", depth, node_count, peak);
    Ok(())
}

fn print_snapshot(out: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    writeln!(out, "{}", snapshot.render())?;
    writeln!(
        out,
        "Currently using: {}  Max used so far: {}",
        snapshot.pebbles_in_play, snapshot.peak_pebbles_in_play
    )?;
    Ok(())
}
