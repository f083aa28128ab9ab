//! Presentation helpers for search results: comparison runs, text tables,
//! CSV export and step-by-step replay.

mod replay;
mod report;

pub use replay::{EXPLORED, Frame, PATH, Phase, Replay};
pub use report::{
    HEADER, ResultRow, Summary, Table, compare, render_result, render_table, rows, write_csv,
};
