use std::io::Write as _;

use clap::Parser;
use dfsmaze_core::Point;
use dfsmaze_demos::{Cli, format_path, run};
use dfsmaze_ui::Outcome;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dfs-maze").chain(args.iter().copied())).unwrap()
}

fn run_plain(args: &[&str]) -> anyhow::Result<(Outcome, String)> {
    let mut all = vec!["--plain"];
    all.extend_from_slice(args);
    let mut out = Vec::new();
    let outcome = run(&cli(&all), &mut out)?;
    Ok((outcome, String::from_utf8(out).unwrap()))
}

#[test]
fn reference_maze_by_default() {
    let (outcome, text) = run_plain(&[]).unwrap();
    assert!(outcome.is_found());
    assert_eq!(
        text,
        "Path found!\n\
         Path: [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2), (2, 3), (2, 4), (3, 4), (4, 4)]\n\
         S 1 # . .\n\
         # 2 # . #\n\
         . 3 4 5 6\n\
         # # # # 7\n\
         . . . . G\n"
    );
}

#[test]
fn explicit_goal() {
    let (outcome, text) = run_plain(&["--goal", "4,0"]).unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.first(), Some(&Point::new(0, 0)));
    assert_eq!(path.last(), Some(&Point::new(4, 0)));
    assert!(text.starts_with("Path found!\n"));
}

#[test]
fn unreachable_goal_is_not_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 1\n1 0").unwrap();
    let path = file.path().to_str().unwrap();
    let (outcome, text) =
        run_plain(&["--rows", "2", "--cols", "2", "--maze-file", path]).unwrap();
    assert_eq!(outcome, Outcome::NoPath);
    assert_eq!(text, "No path found.\n");
}

#[test]
fn maze_file_is_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 0\n0 0").unwrap();
    let path = file.path().to_str().unwrap();
    let (outcome, _) = run_plain(&["--rows", "2", "--cols", "2", "--maze-file", path]).unwrap();
    assert_eq!(
        outcome,
        Outcome::Found(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)])
    );
}

#[test]
fn out_of_bounds_goal_is_rejected() {
    let err = run_plain(&["--goal", "5,5"]).unwrap_err();
    assert!(err.to_string().contains("outside the maze"), "{err}");
}

#[test]
fn declared_size_must_match_maze() {
    let err = run_plain(&["--rows", "4"]).unwrap_err();
    assert_eq!(err.to_string(), "maze is 5x5 but 4x5 was declared");
}

#[test]
fn unsupported_size_is_rejected() {
    let err = run_plain(&["--rows", "30", "--random"]).unwrap_err();
    assert!(err.to_string().contains("outside the supported"), "{err}");
}

#[test]
fn missing_maze_file_is_reported() {
    let err = run_plain(&["--maze-file", "/nonexistent/maze.txt"]).unwrap_err();
    assert!(format!("{err:#}").starts_with("reading maze file"), "{err:#}");
}

#[test]
fn open_random_maze_always_solves() {
    let (outcome, _) =
        run_plain(&["--random", "--walls", "0", "--seed", "9", "--rows", "7", "--cols", "3"])
            .unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.last(), Some(&Point::new(6, 2)));
}

#[test]
fn seeded_random_mazes_repeat() {
    let args = ["--random", "--walls", "40", "--seed", "1234", "--rows", "10", "--cols", "10"];
    let a = run_plain(&args).unwrap();
    let b = run_plain(&args).unwrap();
    assert_eq!(a, b);
}

#[test]
fn random_conflicts_with_maze_file() {
    let res = Cli::try_parse_from(["dfs-maze", "--random", "--maze-file", "m.txt"]);
    assert!(res.is_err());
}

#[test]
fn wall_percentage_is_bounded() {
    assert!(Cli::try_parse_from(["dfs-maze", "--walls", "101"]).is_err());
}

#[test]
fn colored_output_contains_labels() {
    let mut out = Vec::new();
    run(&cli(&[]), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains('S') && text.contains('G'));
    assert!(text.lines().count() >= 7);
}

#[test]
fn path_formatting() {
    assert_eq!(format_path(&[]), "[]");
    assert_eq!(
        format_path(&[Point::new(0, 0), Point::new(1, 0)]),
        "[(0, 0), (1, 0)]"
    );
}
