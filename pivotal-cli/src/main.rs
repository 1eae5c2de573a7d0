use clap::Parser;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::error::Error;
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pivotal_core::{random_system, InputLayout, LinearSystem};
use pivotal_io::{read_system_csv, read_system_json, write_solution_json, SolutionReport};
use pivotal_linalg::{max_abs_residual, GaussianElimination};

#[derive(Parser, Debug)]
#[command(
    name = "pivotal",
    about = "Solve a square linear system by Gaussian elimination with partial pivoting"
)]
struct Cli {
    /// System to solve (.json or .csv). Without it, the built-in 2x2 example is solved
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Read each CSV row as one diagonal entry plus its right-hand side.
    /// JSON systems name their own "layout" and reject this flag
    #[arg(long, requires = "input")]
    diagonal: bool,

    /// Solve a random diagonally dominant system of this size instead
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Write the solution report to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn example_system() -> Result<LinearSystem<f64>, Box<dyn Error>> {
    let rows = vec![vec![2.0, 8.0], vec![5.0, 5.0]];
    Ok(LinearSystem::from_rows(&rows, &[45.0, 345.0], InputLayout::Dense)?)
}

fn load_system(path: &Path, layout: InputLayout) -> Result<LinearSystem<f64>, Box<dyn Error>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_system_csv(path, layout),
        Some("json") if layout == InputLayout::DiagonalColumn => Err(format!(
            "{}: --diagonal only applies to CSV input, set \"layout\" in the JSON file instead",
            path.display()
        )
        .into()),
        Some("json") => read_system_json(path),
        _ => Err(format!("{}: expected a .json or .csv file", path.display()).into()),
    }
}

fn print_system(out: &mut Stdout, system: &LinearSystem<f64>) -> Result<(), Box<dyn Error>> {
    execute!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(format!("System ({} equations):\n", system.n())),
        ResetColor,
    )?;
    for (row, b) in system.matrix().rows().zip(system.rhs()) {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>10.4}", v)).collect();
        execute!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("  [{}] | {:>10.4}\n", cells.join(" "), b)),
            ResetColor,
        )?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    let mut out = stdout();
    let layout = if cli.diagonal {
        InputLayout::DiagonalColumn
    } else {
        InputLayout::Dense
    };

    let system = match (&cli.input, cli.random) {
        (Some(path), _) => load_system(path, layout)?,
        (None, Some(n)) => random_system(n, cli.seed)?.0,
        (None, None) => {
            execute!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print("Example: solving 2x2 system\n"),
                ResetColor,
            )?;
            example_system()?
        }
    };
    log::debug!("loaded system:\n{}", system.matrix());
    print_system(&mut out, &system)?;

    let solver = GaussianElimination::new();
    let (report, code) = match solver.solve(&system) {
        Some(x) => {
            let residual = max_abs_residual(&system, &x)?;
            execute!(out, SetForegroundColor(Color::Green), Print("Solution:\n"))?;
            for (i, xi) in x.iter().enumerate() {
                execute!(out, Print(format!("  x[{}] = {}\n", i, xi)))?;
            }
            execute!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(format!("  max |Ax - b| = {:.3e}\n", residual)),
                ResetColor,
            )?;
            (SolutionReport::solved(x, residual), ExitCode::SUCCESS)
        }
        None => {
            execute!(
                out,
                SetForegroundColor(Color::Yellow),
                Print("No unique solution for the given system\n"),
                ResetColor,
            )?;
            (SolutionReport::no_unique_solution(), ExitCode::from(2))
        }
    };

    if let Some(path) = &cli.output {
        write_solution_json(path, &report)?;
        log::info!("wrote solution report to {}", path.display());
    }

    Ok(code)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            let mut out = stdout();
            let _ = execute!(
                out,
                SetForegroundColor(Color::Red),
                Print(format!("error: {}\n", e)),
                ResetColor,
            );
            ExitCode::FAILURE
        }
    }
}
