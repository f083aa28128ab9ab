//! Step-by-step playback of a traced search.
//!
//! A [`Replay`] turns a traced [`SearchResult`] into a sequence of steps:
//! first every expanded cell in expansion order, then every cell of the final
//! path. Each step renders the grid with explored cells drawn as `o` and path
//! cells as `*`. Start, goal and walls keep their usual glyphs.

use std::collections::HashSet;

use gridpath_core::{Cell, Grid};
use gridpath_search::SearchResult;

/// Glyph for a cell that has been expanded.
pub const EXPLORED: char = 'o';
/// Glyph for a cell on the final path.
pub const PATH: char = '*';

/// What a replay step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The search expanded a cell.
    Explore,
    /// The final path is being drawn.
    Path,
}

/// One rendered replay step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 1-based step number.
    pub step: usize,
    pub phase: Phase,
    /// The cell added by this step.
    pub cell: Cell,
    /// The grid with every step so far drawn on it.
    pub text: String,
}

/// Plays back a search over a grid.
///
/// Iterating yields the frames from the current position to the end.
/// [`Replay::prev`] and [`Replay::seek`] move the position back.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    grid: &'a Grid,
    steps: Vec<(Phase, Cell)>,
    fidx: usize,
}

impl<'a> Replay<'a> {
    /// Build a replay. An untraced result only replays its path.
    pub fn new(grid: &'a Grid, result: &SearchResult) -> Self {
        let explore = result.expansion_order.iter().flatten();
        let path = result.path.iter().flatten();
        let steps = explore
            .map(|&c| (Phase::Explore, c))
            .chain(path.map(|&c| (Phase::Path, c)))
            .collect();
        Self {
            grid,
            steps,
            fidx: 0,
        }
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps already played.
    pub fn frame_index(&self) -> usize {
        self.fidx
    }

    /// Move so that the next frame played is step `n + 1`. Clamped to the
    /// end of the replay.
    pub fn seek(&mut self, n: usize) {
        self.fidx = n.min(self.steps.len());
    }

    /// Step back one frame and return the frame now current, or `None` when
    /// already at the beginning.
    pub fn prev(&mut self) -> Option<Frame> {
        if self.fidx <= 1 {
            self.fidx = 0;
            return None;
        }
        self.fidx -= 1;
        self.frame(self.fidx)
    }

    /// Render step `n` (1-based), with steps `1..=n` drawn.
    pub fn frame(&self, n: usize) -> Option<Frame> {
        if n == 0 || n > self.steps.len() {
            return None;
        }
        let (phase, cell) = self.steps[n - 1];
        let mut explored = HashSet::new();
        let mut path = HashSet::new();
        for &(p, c) in &self.steps[..n] {
            match p {
                Phase::Explore => explored.insert(c),
                Phase::Path => path.insert(c),
            };
        }
        let text = self.grid.render_with(|c| {
            if path.contains(&c) {
                Some(PATH)
            } else if explored.contains(&c) {
                Some(EXPLORED)
            } else {
                None
            }
        });
        Some(Frame {
            step: n,
            phase,
            cell,
            text,
        })
    }
}

impl Iterator for Replay<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let frame = self.frame(self.fidx + 1)?;
        self.fidx += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.steps.len() - self.fidx;
        (rest, Some(rest))
    }
}
