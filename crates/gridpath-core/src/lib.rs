//! **gridpath-core**: the static grid model searched by `gridpath-search`.
//!
//! This crate provides the [`Cell`] coordinate, the obstacle [`Grid`] with its
//! bounds/wall validity check and fixed-order 4-way neighbour enumeration,
//! and a small ASCII [`layout`] format for writing maps by hand.

pub mod cell;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use layout::LayoutError;
