use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use gridsearch::grid::{Grid, generate::scatter, render};
use gridsearch::search::{SearchEngine, Strategy};


#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Dfs,
    Bfs,
    Astar,
}

/// Solve a text maze ('A' start, 'B' goal, ' ' free, anything else a wall)
#[derive(Parser)]
struct Options {
    /// Maze file, a random grid is generated when omitted
    path: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "astar")]
    strategy: Mode,

    /// Give up after this many expansions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Random grid size as HEIGHTxWIDTH
    #[arg(long, default_value = "12x24", value_parser = parse_size)]
    size: (usize, usize),

    /// Wall probability of the random grid
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (h, w) = s.split_once('x').ok_or_else(|| format!("expected HEIGHTxWIDTH, got {s}"))?;
    let h = h.parse().map_err(|e| format!("bad height: {e}"))?;
    let w = w.parse().map_err(|e| format!("bad width: {e}"))?;
    Ok((h, w))
}

fn main() -> ExitCode {
    let opts = Options::parse();

    let grid = match &opts.path {
        Some(path) => Grid::from_file(path),
        None => {
            let (height, width) = opts.size;
            scatter(height, width, opts.density, &mut StdRng::seed_from_u64(opts.seed))
        }
    };
    let grid = match grid {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let strategy = match opts.strategy {
        Mode::Dfs => Strategy::DepthFirst,
        Mode::Bfs => Strategy::BreadthFirst,
        Mode::Astar => Strategy::a_star(&grid),
    };
    let mut engine = SearchEngine::new(strategy);
    if let Some(limit) = opts.max_expansions {
        engine = engine.with_max_expansions(limit);
    }

    println!("Solving with {} search...", engine.strategy().name());
    match engine.solve(&grid) {
        Ok(solution) => {
            println!("Solution found!");
            print!("\n{}\n", render(&grid, Some(&solution)));
            for (step, (action, cell)) in solution.actions().iter().zip(solution.cells()).enumerate() {
                println!("Step {}: {action} -> {cell}", step + 1);
            }
            println!("States explored: {}", solution.expanded());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print!("\n{grid}\n");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
