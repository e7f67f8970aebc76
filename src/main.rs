use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use mkpuzzle::clue_list::ClueList;
use mkpuzzle::errors::LoadError;
use mkpuzzle::generator::{GenerateError, Generator, GeneratorConfig};
use mkpuzzle::puzzle::{Puzzle, DEFAULT_TITLE};

/// Build a crossword grid from a list of words and hints
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Clue file: one "WORD hint text" per line
    clue_file: PathBuf,

    /// Width and height of the grid
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    size: u64,

    /// Write the puzzle JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title stored in the puzzle JSON
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Give up after this many seconds (no limit by default)
    #[arg(long)]
    time_limit: Option<f64>,

    /// Also print the filled grid to stderr
    #[arg(long)]
    print_grid: bool,
}

/// Entry point of the puzzle generator CLI.
///
/// Delegates to [`try_main`]; on error prints a diagnostic to stderr and exits with code 1
/// without writing any puzzle.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(mkpuzzle::log::DEBUG_ENV_VAR).is_ok();
    mkpuzzle::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(gen_err) = e.downcast_ref::<GenerateError>() {
            eprintln!("Error: {}", gen_err.display_detailed());
        } else if let Some(load_err) = e.downcast_ref::<Box<LoadError>>() {
            eprintln!("Error: {}", load_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Load and validate the clue list.
/// 2. Run the generator.
/// 3. Assemble the puzzle and write its JSON to the output file or stdout.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let clue_list = ClueList::load_from_path(&cli.clue_file)?;
    let size = usize::try_from(cli.size)?;

    let config = GeneratorConfig {
        time_budget: cli.time_limit.map(Duration::try_from_secs_f64).transpose()?,
    };

    let t_generate = Instant::now();
    let generator = Generator::new(&clue_list.clues, size, config)?;
    let (solution, stats) = generator.generate()?;
    log::info!(
        "placed {} words in {:.3}s ({} attempts, {} backtracks)",
        clue_list.len(),
        t_generate.elapsed().as_secs_f64(),
        stats.attempts,
        stats.backtracks
    );

    if cli.print_grid {
        eprint!("{}", solution.grid);
    }

    let json = Puzzle::assemble(&cli.title, &clue_list.clues, &solution).to_json()?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
