//! CLI entry point for the 8-puzzle solver.
//!
//! Usage:
//!   eight-puzzle solve <Input1.txt> [options]
//!   eight-puzzle solve --stdin [options]
//!
//! Options:
//!   --heuristic <h>       manhattan, linear-conflict or both (default: both)
//!   --output-dir <dir>    Write Output<N>h1.txt / Output<N>h2.txt into <dir>
//!   --json                Print a JSON summary instead of text records
//!   -v, --verbose         Raise log level (repeatable)

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eight_puzzle::{
    output_file_name, parse_problem, read_problem, solve, Error, HeuristicKind, Problem, Report,
    Result, RunSummary, SolverConfig,
};

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(about = "Optimal 8-puzzle solver using A* search")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an initial/goal board pair
    Solve {
        /// Path to the problem file (use --stdin to read from stdin)
        #[arg(value_name = "FILE", required_unless_present = "stdin")]
        file: Option<PathBuf>,

        /// Read the problem from stdin instead of a file
        #[arg(long, conflicts_with = "file")]
        stdin: bool,

        /// Heuristic(s) to run
        #[arg(long, value_enum, default_value = "both")]
        heuristic: HeuristicChoice,

        /// Directory for output files; records go to stdout when omitted
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Print a JSON summary of every run
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicChoice {
    Manhattan,
    LinearConflict,
    Both,
}

impl HeuristicChoice {
    fn kinds(self) -> &'static [HeuristicKind] {
        match self {
            HeuristicChoice::Manhattan => &[HeuristicKind::Manhattan],
            HeuristicChoice::LinearConflict => &[HeuristicKind::LinearConflict],
            HeuristicChoice::Both => &HeuristicKind::ALL,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            heuristic,
            output_dir,
            json,
        } => {
            let options = SolveOptions {
                file,
                stdin,
                heuristic,
                output_dir,
                json,
            };

            match run_solve(&options) {
                Ok(true) => std::process::exit(0),
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

struct SolveOptions {
    file: Option<PathBuf>,
    stdin: bool,
    heuristic: HeuristicChoice,
    output_dir: Option<PathBuf>,
    json: bool,
}

/// Returns whether every requested run found a solution
fn run_solve(options: &SolveOptions) -> Result<bool> {
    let problem = load_problem(options)?;
    if !problem.is_solvable() {
        warn!("initial and goal boards have different parity; the search will exhaust");
    }

    let input_name = options
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from("stdin"));

    let mut all_solved = true;
    let mut summaries = Vec::new();

    for &kind in options.heuristic.kinds() {
        eprintln!("Solving with {} ({kind})...", kind.tag());
        let result = solve(&problem.initial, &problem.goal, &SolverConfig::with_heuristic(kind))?;
        info!(
            heuristic = %kind,
            nodes = result.nodes_generated(),
            elapsed_ms = result.time_elapsed_ms(),
            "run complete"
        );

        if options.json {
            summaries.push(RunSummary::new(&problem, &result));
        }

        let solution = match result.solution() {
            Ok(solution) => solution,
            Err(Error::SearchExhausted { .. }) => {
                eprintln!("No solution found!");
                all_solved = false;
                continue;
            }
            Err(e) => return Err(e),
        };

        if !options.json {
            let report = Report::new(&problem, &solution);
            match &options.output_dir {
                Some(dir) => {
                    let path = dir.join(output_file_name(&input_name, kind));
                    report.write_to(&path)?;
                    eprintln!("Output written to {}", path.display());
                }
                None => print!("{report}"),
            }
        }

        eprintln!("Depth: {}", solution.depth);
        eprintln!("Total nodes generated: {}", solution.nodes_generated);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }

    Ok(all_solved)
}

fn load_problem(options: &SolveOptions) -> Result<Problem> {
    match &options.file {
        Some(path) if !options.stdin => read_problem(path),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::Io {
                    operation: "read stdin".to_string(),
                    source: e,
                })?;
            parse_problem(&buffer)
        }
    }
}
