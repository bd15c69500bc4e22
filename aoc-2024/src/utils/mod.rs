//! Helpers shared between puzzles

pub mod dp_cache;
pub mod grid;
