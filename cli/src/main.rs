//! gridpath: run and compare grid search algorithms from the terminal.
//!
//! # Commands
//!
//! - `maps`: list the built-in maps
//! - `show <map>`: print a map
//! - `run <map> [<algorithm>|all]`: run one or every algorithm
//! - `report [--csv FILE]`: compare every algorithm on every built-in map
//! - `replay <map> <algorithm>`: print a search step by step
//! - `save <map> <file>`: write a map to a `.json` or text layout file
//!
//! A map is a menu number (1-10), a slug, `random`, or a path to a map file.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use gridpath_core::Grid;
use gridpath_maps::{MapId, RandomMapConfig, file};
use gridpath_report::{Replay, compare, render_result, render_table, rows, write_csv};
use gridpath_search::{Algorithm, Distance, ParseAlgorithmError, Search};

/// Classical search algorithms on 2D obstacle grids
#[derive(Debug, Parser)]
#[command(name = "gridpath", version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Heuristic for Greedy Best-First: manhattan or euclidean
    #[arg(long, global = true, default_value_t = Distance::Manhattan)]
    heuristic: Distance,

    /// Seed for the `random` map
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the built-in maps
    Maps,
    /// Print a map
    Show { map: String },
    /// Run one algorithm, or all of them, on a map
    Run {
        map: String,
        /// astar, dijkstra, greedy, bfs, dfs (or 1-5), or `all`
        #[arg(default_value = "all")]
        algorithm: Selection,
    },
    /// Compare every algorithm on every built-in map
    Report {
        /// Also write every row as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
    /// Print a search step by step
    Replay {
        map: String,
        algorithm: Algorithm,
        /// Pause between frames
        #[arg(long, value_name = "N", default_value_t = 0)]
        delay_ms: u64,
    },
    /// Write a map to a file (`.json`, otherwise a text layout)
    Save { map: String, file: PathBuf },
}

/// Algorithm argument of `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    All,
    One(Algorithm),
}

impl Selection {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Self::All => Algorithm::ALL.to_vec(),
            Self::One(a) => vec![a],
        }
    }
}

impl FromStr for Selection {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}

/// Resolve a map argument to a display name and a grid. Existing files win
/// over built-in names.
fn load_map(name: &str, seed: Option<u64>) -> Result<(String, Grid), Box<dyn std::error::Error>> {
    let path = Path::new(name);
    if path.is_file() {
        let grid = file::load(path)?;
        return Ok((path.display().to_string(), grid));
    }
    if name.eq_ignore_ascii_case("random") {
        let cfg = RandomMapConfig {
            seed,
            ..RandomMapConfig::default()
        };
        let map = cfg.generate()?;
        let title = format!(
            "Random {}x{} (seed {})",
            map.grid.rows(),
            map.grid.cols(),
            map.seed
        );
        return Ok((title, map.grid));
    }
    let id: MapId = name.parse()?;
    Ok((id.name().to_string(), id.build()))
}

fn display_name(a: Algorithm, heuristic: Distance) -> String {
    if a.uses_heuristic() {
        format!("{} ({heuristic})", a.name())
    } else {
        a.name().to_string()
    }
}

fn cmd_maps() {
    for m in MapId::ALL {
        println!("{:>2}  {:<18} {}", m.key(), m.slug(), m.name());
    }
}

fn cmd_show(cli: &Cli, map: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (title, grid) = load_map(map, cli.seed)?;
    println!("{title}\n{grid}");
    Ok(())
}

fn cmd_run(cli: &Cli, map: &str, selection: Selection) -> Result<(), Box<dyn std::error::Error>> {
    let (title, grid) = load_map(map, cli.seed)?;
    println!("Map: {title}\n{grid}\n");
    for a in selection.algorithms() {
        let res = a.search_with(&grid, grid.start(), grid.goal(), false, cli.heuristic);
        print!("{}", render_result(&display_name(a, cli.heuristic), &res));
    }
    Ok(())
}

fn cmd_report(cli: &Cli, csv: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut all_rows = Vec::new();
    for m in MapId::ALL {
        let results = compare(&m.build(), &Algorithm::ALL, cli.heuristic);
        let map_rows = rows(&results, cli.heuristic);
        println!("{}", render_table(m.name(), &map_rows));
        all_rows.extend(map_rows);
    }
    if let Some(path) = csv {
        write_csv(File::create(path)?, &all_rows)?;
        log::info!("wrote {} rows to {}", all_rows.len(), path.display());
    }
    Ok(())
}

fn cmd_replay(
    cli: &Cli,
    map: &str,
    algo: Algorithm,
    delay_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let (title, grid) = load_map(map, cli.seed)?;
    let res = algo.search_with(&grid, grid.start(), grid.goal(), true, cli.heuristic);
    println!("{} on {title}\n", display_name(algo, cli.heuristic));
    let delay = Duration::from_millis(delay_ms);
    for frame in Replay::new(&grid, &res) {
        println!(
            "step {} [{:?}] {}\n{}\n",
            frame.step, frame.phase, frame.cell, frame.text
        );
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
    print!("{}", render_result(&display_name(algo, cli.heuristic), &res));
    Ok(())
}

fn cmd_save(cli: &Cli, map: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (title, grid) = load_map(map, cli.seed)?;
    file::save(&grid, path)?;
    println!("saved {title} to {}", path.display());
    Ok(())
}

/// Log level for the number of `-v` flags.
fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match &cli.command {
        Commands::Maps => cmd_maps(),
        Commands::Show { map } => cmd_show(&cli, map)?,
        Commands::Run { map, algorithm } => cmd_run(&cli, map, *algorithm)?,
        Commands::Report { csv } => cmd_report(&cli, csv.as_deref())?,
        Commands::Replay {
            map,
            algorithm,
            delay_ms,
        } => cmd_replay(&cli, map, *algorithm, *delay_ms)?,
        Commands::Save { map, file } => cmd_save(&cli, map, file)?,
    }
    Ok(())
}
