//! Text tables, per-run summaries and CSV export of search results.

use std::fmt;
use std::io;

use gridpath_core::Grid;
use gridpath_search::{Algorithm, Distance, Search, SearchResult};

const RULE_WIDTH: usize = 60;

/// CSV/table column names.
pub const HEADER: [&str; 5] = ["Algorithm", "Found", "Cost", "Expanded", "Time"];

/// One line of a results table or CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub algorithm: String,
    pub found: bool,
    pub cost: usize,
    pub expanded: usize,
    /// Elapsed seconds.
    pub time: f64,
}

impl ResultRow {
    pub fn new(algorithm: impl Into<String>, result: &SearchResult) -> Self {
        Self {
            algorithm: algorithm.into(),
            found: result.found(),
            cost: result.cost,
            expanded: result.expanded,
            time: result.elapsed_secs(),
        }
    }

    fn found_label(&self) -> &'static str {
        if self.found { "Yes" } else { "No" }
    }
}

/// Run each algorithm on its own copy of `grid` and collect the results.
///
/// `heuristic` is passed to Greedy; the other algorithms ignore it.
pub fn compare(
    grid: &Grid,
    algorithms: &[Algorithm],
    heuristic: Distance,
) -> Vec<(Algorithm, SearchResult)> {
    algorithms
        .iter()
        .map(|&a| {
            let copy = grid.clone();
            let res = a.search_with(&copy, copy.start(), copy.goal(), false, heuristic);
            (a, res)
        })
        .collect()
}

/// Turn comparison output into table rows. Greedy rows name the heuristic.
pub fn rows(results: &[(Algorithm, SearchResult)], heuristic: Distance) -> Vec<ResultRow> {
    results
        .iter()
        .map(|(a, res)| {
            let name = if a.uses_heuristic() {
                format!("{} ({heuristic})", a.name())
            } else {
                a.name().to_string()
            };
            ResultRow::new(name, res)
        })
        .collect()
}

/// A markdown-style results table for one map, rendered by `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    pub map_name: &'a str,
    pub rows: &'a [ResultRow],
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "Map: {}", self.map_name)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "| Algorithm | Found | Cost | Expanded | Time (s) |")?;
        writeln!(f, "|---|---:|---:|---:|---:|")?;
        for r in self.rows {
            writeln!(
                f,
                "| {} | {} | {} | {} | {:.6} |",
                r.algorithm,
                r.found_label(),
                r.cost,
                r.expanded,
                r.time
            )?;
        }
        Ok(())
    }
}

/// The detailed summary of a single run, rendered by `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    pub algorithm: &'a str,
    pub result: &'a SearchResult,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let res = self.result;
        writeln!(f, "{rule}")?;
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "{rule}")?;
        match &res.path {
            None => writeln!(f, "Result: NO PATH FOUND")?,
            Some(path) => {
                writeln!(f, "Result: PATH FOUND")?;
                writeln!(f, "Path length (steps): {}", res.cost)?;
                write!(f, "Path: ")?;
                for (i, cell) in path.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{cell}")?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f, "Expanded nodes: {}", res.expanded)?;
        writeln!(f, "Execution time: {:.6} seconds", res.elapsed_secs())?;
        writeln!(f, "{rule}")
    }
}

/// Render a markdown-style results table for one map.
pub fn render_table(map_name: &str, rows: &[ResultRow]) -> String {
    Table { map_name, rows }.to_string()
}

/// Render the detailed summary of a single run.
pub fn render_result(algorithm: &str, result: &SearchResult) -> String {
    Summary { algorithm, result }.to_string()
}

/// Write rows as CSV with a `Algorithm,Found,Cost,Expanded,Time` header.
pub fn write_csv<W: io::Write>(writer: W, rows: &[ResultRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for r in rows {
        wtr.write_record([
            r.algorithm.clone(),
            r.found_label().to_string(),
            r.cost.to_string(),
            r.expanded.to_string(),
            format!("{:.6}", r.time),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_maps::MapId;
    use std::time::Duration;

    fn sample_result() -> SearchResult {
        let g = MapId::Simple3x3.build();
        let mut res = gridpath_search::AStar.run(&g);
        res.elapsed = Duration::from_micros(1500);
        res
    }

    #[test]
    fn row_from_result() {
        let row = ResultRow::new("A*", &sample_result());
        assert_eq!(
            row,
            ResultRow {
                algorithm: "A*".into(),
                found: true,
                cost: 4,
                expanded: 5,
                time: 0.0015,
            }
        );
    }

    #[test]
    fn compare_runs_every_algorithm() {
        let g = MapId::GreedyTrap.build();
        let results = compare(&g, &Algorithm::ALL, Distance::Manhattan);
        let algos: Vec<_> = results.iter().map(|(a, _)| *a).collect();
        assert_eq!(algos, Algorithm::ALL);
        let costs: Vec<_> = results.iter().map(|(_, r)| r.cost).collect();
        assert_eq!(costs, vec![12, 12, 24, 12, 30]);
    }

    #[test]
    fn greedy_rows_name_heuristic() {
        let g = MapId::Simple3x3.build();
        let results = compare(&g, &[Algorithm::AStar, Algorithm::Greedy], Distance::Euclidean);
        let names: Vec<_> = rows(&results, Distance::Euclidean)
            .into_iter()
            .map(|r| r.algorithm)
            .collect();
        assert_eq!(names, ["A*", "Greedy Best-First (Euclidean)"]);
    }

    #[test]
    fn table_layout() {
        let rows = vec![
            ResultRow::new("A*", &sample_result()),
            ResultRow::new("DFS", &SearchResult::default()),
        ];
        let table = render_table("Simple 3x3", &rows);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[1], "Map: Simple 3x3");
        assert_eq!(lines[3], "| Algorithm | Found | Cost | Expanded | Time (s) |");
        assert_eq!(lines[5], "| A* | Yes | 4 | 5 | 0.001500 |");
        assert_eq!(lines[6], "| DFS | No | 0 | 0 | 0.000000 |");
    }

    #[test]
    fn display_wrappers_match_render_helpers() {
        let res = sample_result();
        let rows = vec![ResultRow::new("A*", &res)];
        let table = Table {
            map_name: "Simple 3x3",
            rows: &rows,
        };
        assert_eq!(format!("{table}"), render_table("Simple 3x3", &rows));
        assert_eq!(table.to_string().lines().count(), 6);

        let summary = Summary {
            algorithm: "A*",
            result: &res,
        };
        let text = summary.to_string();
        assert_eq!(text, render_result("A*", &res));
        assert_eq!(text.lines().count(), 9);
        assert!(text.ends_with(&format!("{}\n", "=".repeat(RULE_WIDTH))));
    }

    #[test]
    fn result_summary() {
        let text = render_result("A*", &sample_result());
        assert!(text.contains("Result: PATH FOUND"));
        assert!(text.contains("Path length (steps): 4"));
        assert!(text.contains("Path: (0, 0) -> (0, 1) -> (0, 2) -> (1, 2) -> (2, 2)"));
        assert!(text.contains("Expanded nodes: 5"));
        assert!(text.contains("Execution time: 0.001500 seconds"));

        let none = render_result("BFS", &SearchResult::default());
        assert!(none.contains("Result: NO PATH FOUND"));
        assert!(!none.contains("Path:"));
    }

    #[test]
    fn csv_export() {
        let rows = vec![
            ResultRow::new("A*", &sample_result()),
            ResultRow::new("Greedy Best-First (Manhattan)", &SearchResult::default()),
        ];
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Algorithm,Found,Cost,Expanded,Time\n\
             A*,Yes,4,5,0.001500\n\
             Greedy Best-First (Manhattan),No,0,0,0.000000\n"
        );
    }
}
