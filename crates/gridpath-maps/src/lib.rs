//! Maps for the gridpath search engine: the built-in teaching [`catalog`],
//! seeded [`random`] generation and, with the `serde` feature, map
//! [`file`]s in JSON or text layout form.

pub mod catalog;
#[cfg(feature = "serde")]
pub mod file;
pub mod random;

pub use catalog::{MapId, ParseMapError};
#[cfg(feature = "serde")]
pub use file::MapFileError;
pub use random::{RandomMap, RandomMapConfig, RandomMapError};
