// engine.rs - B3/S23 generation advance over any topology

use crate::grid::Grid;
use crate::topology::{NEIGHBOR_OFFSETS, Topology};

/// Conway's rule: survival on 2 or 3 neighbours, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Alive neighbours of `(row, col)` as seen through `topology`.
#[inline]
pub fn live_neighbors(grid: &Grid, row: usize, col: usize, topology: Topology) -> u8 {
    let (rows, cols) = (grid.rows(), grid.cols());
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(di, dj)| topology.resolve(row, col, di, dj, rows, cols))
        .filter(|&(r, c)| grid.get(r, c))
        .count() as u8
}

/// Writes the generation after `current` into `next`. Every cell of `next`
/// is overwritten, so its previous contents do not matter.
///
/// # Panics
///
/// If the two grids differ in shape.
pub fn compute_next(current: &Grid, next: &mut Grid, topology: Topology) {
    assert!(
        current.same_shape(next),
        "generation buffers differ in shape: {}x{} vs {}x{}",
        current.rows(),
        current.cols(),
        next.rows(),
        next.cols()
    );

    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let count = live_neighbors(current, row, col, topology);
            next.set(row, col, next_state(current.get(row, col), count));
        }
    }
}

/// Advances one generation from `current` into `next`, then clears
/// `current`. Callers alternate the two buffers between calls.
///
/// # Panics
///
/// If the two grids differ in shape.
pub fn advance(current: &mut Grid, next: &mut Grid, topology: Topology) {
    compute_next(current, next, topology);
    current.clear();
}
