//! Loading and saving maps on disk.
//!
//! Two formats are understood, chosen by file extension:
//!
//! - `.json`: `{"rows", "cols", "start": [r, c], "goal": [r, c], "walls": [[r, c], ...]}`
//!   with walls in row-major order;
//! - anything else: a text layout (see [`gridpath_core::layout`]).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use gridpath_core::{Grid, LayoutError};

/// Whether `path` names a JSON map.
fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Serialize a grid as pretty-printed JSON.
pub fn to_json(grid: &Grid) -> Result<String, MapFileError> {
    Ok(serde_json::to_string_pretty(grid)?)
}

/// Parse a grid from JSON. Dimensions, walls and endpoints are checked.
pub fn from_json(s: &str) -> Result<Grid, MapFileError> {
    Ok(serde_json::from_str(s)?)
}

/// Read a map file.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, MapFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = if is_json(path) {
        from_json(&text)?
    } else {
        text.parse()?
    };
    log::debug!(
        "loaded {}x{} map from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Write a map file, overwriting any existing one.
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), MapFileError> {
    let path = path.as_ref();
    let mut text = if is_json(path) {
        to_json(grid)?
    } else {
        grid.to_string()
    };
    text.push('\n');
    fs::write(path, text)?;
    log::debug!("saved map to {}", path.display());
    Ok(())
}

/// Errors from reading or writing map files.
#[derive(Debug)]
pub enum MapFileError {
    Io(io::Error),
    /// Malformed JSON, or JSON describing an invalid grid.
    Json(serde_json::Error),
    Layout(LayoutError),
}

impl From<io::Error> for MapFileError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for MapFileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<LayoutError> for MapFileError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl fmt::Display for MapFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "map file: {err}"),
            Self::Json(err) => write!(f, "map file: {err}"),
            Self::Layout(err) => write!(f, "map file: {err}"),
        }
    }
}

impl std::error::Error for MapFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}
