//! Mauer Placement Solver
//!
//! Reads a piece catalog as JSON, places every piece on the board so that
//! no label repeats along a row or column, and prints the first placement
//! that meets the line-sum goal as JSON.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};

use mauer::goal::{EveryLineSum, Goal, MeanLineSum, DEFAULT_TARGET};
use mauer::pieces::Puzzle;
use mauer::report::{self, ErrorRecord, INTERNAL_ERROR, NO_SOLUTION};
use mauer::verify;

const LOAD_ERROR: &str = "Failed to load input configuration";

/// Places labelled pieces on a grid without repeating a label in any line.
#[derive(Parser)]
#[command(name = "mauer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Read the puzzle from this file instead of standard input.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Line sum the goal is checked against.
    #[arg(long, global = true, default_value_t = DEFAULT_TARGET)]
    target: u64,

    /// Win condition applied to the completed grid.
    #[arg(long, global = true, value_enum, default_value_t = GoalKind::Mean)]
    goal: GoalKind,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first solution as JSON (default).
    Solve {
        /// Stop searching after this many solutions.
        #[arg(long)]
        max_solutions: Option<usize>,
    },
    /// Print how many placements satisfy the goal.
    Count,
    /// Print the first solution as a grid.
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GoalKind {
    /// Mean row sum and mean column sum equal the target.
    Mean,
    /// Every row and every column sums to the target.
    EveryLine,
}

impl GoalKind {
    fn build(self, target: u64) -> Box<dyn Goal> {
        match self {
            GoalKind::Mean => Box::new(MeanLineSum { target }),
            GoalKind::EveryLine => Box::new(EveryLineSum { target }),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let goal = cli.goal.build(cli.target);
    let command = cli.command.unwrap_or(Command::Solve {
        max_solutions: None,
    });

    let status = match read_input(cli.input.as_deref()) {
        Ok(input) => run(&command, &input, goal.as_ref(), io::stdout().lock()),
        Err(e) => {
            error!("{e:#}");
            let record = ErrorRecord::with_details(LOAD_ERROR, e.root_cause().to_string());
            report::write_json(io::stdout().lock(), &record).map(|()| 1)
        }
    };

    match status {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads the whole puzzle document from `path`, or stdin when absent.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading puzzle from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading puzzle from standard input")?;
            Ok(input)
        }
    }
}

/// Executes `command` against the puzzle in `input` and returns the exit
/// status: 1 for malformed input, 2 for an internal placement error.
fn run<W: Write>(command: &Command, input: &str, goal: &dyn Goal, mut out: W) -> io::Result<u8> {
    let puzzle = match Puzzle::from_json(input) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            warn!("rejecting input: {e}");
            let details = e.source_message();
            report::write_json(&mut out, &ErrorRecord::with_details(e.to_string(), details))?;
            return Ok(1);
        }
    };
    info!(
        "solving {} pieces on a {}x{} board",
        puzzle.num_pieces(),
        puzzle.rows,
        puzzle.cols
    );

    let max_solutions = match command {
        Command::Solve { max_solutions } => *max_solutions,
        Command::Count | Command::Show => None,
    };
    let solutions = match puzzle.solve(goal, max_solutions) {
        Ok(solutions) => solutions,
        Err(e) => {
            error!("search aborted: {e}");
            report::write_json(&mut out, &ErrorRecord::with_details(INTERNAL_ERROR, e.to_string()))?;
            return Ok(2);
        }
    };
    info!("found {} solutions", solutions.len());

    match command {
        Command::Solve { .. } => report::write_first_solution(&mut out, solutions.first())?,
        Command::Count => writeln!(out, "{}", solutions.len())?,
        Command::Show => match solutions.first() {
            Some(path) => match verify::replay(&puzzle, path) {
                Ok(grid) => write!(out, "{grid}")?,
                Err(e) => {
                    error!("first solution does not replay: {e}");
                    report::write_json(&mut out, &ErrorRecord::with_details(INTERNAL_ERROR, e.to_string()))?;
                    return Ok(2);
                }
            },
            None => writeln!(out, "{NO_SOLUTION}")?,
        },
    }
    Ok(0)
}
