//! Mathler - CLI
//!
//! Play Mathler in a TUI or on the command line, check single guesses, and
//! audit puzzle tables.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use mathler::{
    commands::{CheckInput, draw_puzzle, run_check, run_simple, run_verify},
    game::Checker,
    output::{print_audit_report, print_check_result, print_puzzle},
    puzzles::{DEFAULT_EQUATION_LENGTH, PuzzleBook, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "mathler",
    about = "Mathler: find the hidden equation that equals the target",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle file (target:solution:difficulty per line); defaults to the built-in table
    #[arg(short, long, global = true)]
    puzzles: Option<String>,

    /// Number of characters in an equation
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_EQUATION_LENGTH)]
    length: usize,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Only draw puzzles of this difficulty
        #[arg(short, long)]
        difficulty: Option<u8>,
    },

    /// Simple CLI mode (interactive game without TUI)
    Simple {
        /// Only draw puzzles of this difficulty
        #[arg(short, long)]
        difficulty: Option<u8>,
    },

    /// Check a single guess
    Check {
        /// The guessed equation, e.g. 12+34+54
        #[arg(required_unless_present = "request")]
        expression: Option<String>,

        /// Target value of the puzzle
        #[arg(short, long, required_unless_present = "request")]
        target: Option<i64>,

        /// A JSON guess request instead of an expression
        #[arg(long, conflicts_with_all = ["expression", "target"])]
        request: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a puzzle
    Puzzle {
        /// Only draw puzzles of this difficulty
        #[arg(short, long)]
        difficulty: Option<u8>,

        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that every puzzle's solution is valid
    Verify,
}

/// Log level for the application
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Load the puzzle book from the -p flag, or the built-in table
fn load_puzzles(path: Option<&str>, equation_length: usize) -> Result<PuzzleBook> {
    let book = match path {
        Some(path) => load_from_file(path, equation_length)
            .with_context(|| format!("Failed to load puzzles from {path}"))?,
        None => PuzzleBook::embedded(equation_length).with_context(|| {
            format!("No built-in puzzles have {equation_length} characters")
        })?,
    };

    info!(
        "Loaded {} puzzles of length {}",
        book.len(),
        book.equation_length()
    );
    Ok(book)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.to_level_filter())
        .init();

    let book = load_puzzles(cli.puzzles.as_deref(), cli.length)?;
    let checker = Checker::new(&book);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { difficulty: None });

    match command {
        Commands::Play { difficulty } => run_play_command(checker, difficulty),
        Commands::Simple { difficulty } => {
            run_simple(&checker, difficulty).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check {
            expression,
            target,
            request,
            json,
        } => run_check_command(&checker, expression, target, request, json),
        Commands::Puzzle { difficulty, json } => {
            let puzzle = draw_puzzle(&checker, difficulty);
            if json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print_puzzle(&puzzle);
            }
            Ok(())
        }
        Commands::Verify => run_verify_command(&book),
    }
}

fn run_check_command(
    checker: &Checker,
    expression: Option<String>,
    target: Option<i64>,
    request: Option<String>,
    json: bool,
) -> Result<()> {
    let input = match (request, expression, target) {
        (Some(json), _, _) => CheckInput::Request(json),
        (None, Some(text), Some(target_value)) => CheckInput::Expression { text, target_value },
        _ => bail!("Provide an expression and --target, or --request"),
    };

    let (request, result) = run_check(checker, &input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_check_result(&request.to_guess(), request.target_value, &result);
    }
    Ok(())
}

fn run_verify_command(book: &PuzzleBook) -> Result<()> {
    let report = run_verify(book);
    print_audit_report(&report);

    if !report.is_clean() {
        bail!("{} of {} puzzles failed the audit", report.failures.len(), report.total);
    }
    Ok(())
}

fn run_play_command(checker: Checker, difficulty: Option<u8>) -> Result<()> {
    use mathler::interactive::{App, run_tui};

    let app = App::new(checker, difficulty);
    run_tui(app)
}
