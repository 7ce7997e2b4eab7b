//! Conway's Game of Life (B3/S23) on a finite board with hedge, torus or
//! Klein-bottle edges.

pub mod engine;
pub mod generations;
pub mod grid;
pub mod pattern;
pub mod patterns;
pub mod topology;

pub use engine::{advance, compute_next, live_neighbors, next_state};
pub use generations::Generations;
pub use grid::{Grid, GridError};
pub use pattern::{Origin, ParseOriginError, Pattern, PatternError};
pub use topology::{ALL_TOPOLOGIES, NEIGHBOR_OFFSETS, ParseTopologyError, Topology};
