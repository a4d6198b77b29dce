//! The `dfs-maze` command-line demonstrator.
//!
//! Reads a maze (from a file, stdin, the built-in reference maze, or a
//! random generator), solves it with depth-first search and prints the
//! path together with a rendering of the maze.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dfsmaze_core::{Maze, Point};
use dfsmaze_crossterm::TermRenderer;
use dfsmaze_paths::check_path;
use dfsmaze_ui::{
    DEFAULT_DIM, DEFAULT_MAZE, InputError, MazeGen, Outcome, Puzzle, SolveConfig, parse_maze,
    parse_point,
};

/// Solve a grid maze with depth-first search.
#[derive(Debug, Parser)]
#[command(name = "dfs-maze", version)]
pub struct Cli {
    /// Number of rows in the maze (2-20)
    #[arg(long, default_value_t = DEFAULT_DIM)]
    pub rows: i32,

    /// Number of columns in the maze (2-20)
    #[arg(long, default_value_t = DEFAULT_DIM)]
    pub cols: i32,

    /// Maze file, one row per line (0 = path, 1 = wall); `-` reads stdin.
    /// Defaults to the built-in 5x5 reference maze.
    #[arg(long, value_name = "PATH", conflicts_with = "random")]
    pub maze_file: Option<PathBuf>,

    /// Start position as row,col
    #[arg(long, default_value = "0,0")]
    pub start: String,

    /// Goal position as row,col (defaults to the bottom-right corner)
    #[arg(long)]
    pub goal: Option<String>,

    /// Generate a random maze instead of reading one
    #[arg(long)]
    pub random: bool,

    /// Wall percentage for random mazes
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub walls: u32,

    /// Seed for random mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the maze as plain text instead of colored cells
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    pub fn config(&self) -> SolveConfig {
        SolveConfig::new(self.rows, self.cols)
    }
}

/// Format a path as `[(r, c), (r, c), ...]`.
pub fn format_path(path: &[Point]) -> String {
    let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", cells.join(", "))
}

/// Build the puzzle described by `cli`.
pub fn load_puzzle(cli: &Cli) -> anyhow::Result<Puzzle> {
    let config = cli.config();
    if !config.is_valid() {
        return Err(InputError::Dimensions {
            rows: config.rows,
            cols: config.cols,
        }
        .into());
    }
    let start = parse_point(&cli.start)?;
    let goal = match &cli.goal {
        Some(g) => parse_point(g)?,
        None => config.default_goal(),
    };

    let maze = if cli.random {
        random_maze(cli, &config, start, goal)
    } else {
        parse_maze(&read_maze_text(cli)?)?
    };
    Ok(Puzzle::new(&config, maze, start, goal)?)
}

fn random_maze(cli: &Cli, config: &SolveConfig, start: Point, goal: Point) -> Maze {
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    MazeGen::with_rng(rng).random_maze(config.rows, config.cols, cli.walls, &[start, goal])
}

fn read_maze_text(cli: &Cli) -> anyhow::Result<String> {
    match &cli.maze_file {
        None => Ok(DEFAULT_MAZE.to_string()),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading maze from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading maze file {}", path.display())),
    }
}

/// Solve the puzzle described by `cli` and report the result to `out`.
///
/// Not finding a path is reported, not returned as an error.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Outcome> {
    let puzzle = load_puzzle(cli)?;
    let outcome = puzzle.solve();

    match &outcome {
        Outcome::Found(path) => {
            if let Err(e) = check_path(puzzle.maze(), path) {
                bail!("search returned an invalid path: {e}");
            }
            writeln!(out, "Path found!")?;
            writeln!(out, "Path: {}", format_path(path))?;
            let canvas = puzzle.canvas(&outcome);
            if cli.plain {
                writeln!(out, "{canvas}")?;
            } else {
                TermRenderer::new().draw(out, &canvas)?;
            }
        }
        Outcome::NoPath => writeln!(out, "No path found.")?,
    }
    Ok(outcome)
}
