//! Property-based tests for the generation-advance engine.

use life_engine::{ALL_TOPOLOGIES, Generations, Grid, Topology, advance, compute_next};
use proptest::prelude::*;

const ROWS: usize = 10;
const COLS: usize = 12;

fn grid_from(rows: usize, cols: usize, cells: &[bool]) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    for (idx, &alive) in cells.iter().enumerate() {
        grid.set(idx / cols, idx % cols, alive);
    }
    grid
}

/// Random soup whose alive cells all sit at least two cells from every edge.
fn interior_soup() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(any::<bool>(), (ROWS - 4) * (COLS - 4)).prop_map(|inner| {
        let mut grid = Grid::new(ROWS, COLS).unwrap();
        for (idx, &alive) in inner.iter().enumerate() {
            grid.set(2 + idx / (COLS - 4), 2 + idx % (COLS - 4), alive);
        }
        grid
    })
}

fn any_soup() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(any::<bool>(), ROWS * COLS).prop_map(|cells| grid_from(ROWS, COLS, &cells))
}

proptest! {
    /// Away from the edges the topology makes no difference.
    #[test]
    fn interior_soups_evolve_identically(grid in interior_soup()) {
        let mut results = ALL_TOPOLOGIES.iter().map(|&topology| {
            let mut next = Grid::new(ROWS, COLS).unwrap();
            compute_next(&grid, &mut next, topology);
            next
        });
        let first = results.next().unwrap();
        for other in results {
            prop_assert_eq!(&first, &other);
        }
    }

    /// The input buffer is always cleared, whatever it held.
    #[test]
    fn advance_clears_input(grid in any_soup(), stale in any_soup()) {
        for topology in ALL_TOPOLOGIES {
            let mut current = grid.clone();
            let mut next = stale.clone();
            advance(&mut current, &mut next, topology);
            prop_assert!(current.is_dead());
        }
    }

    /// Same input, same output; stale contents of the target never leak.
    #[test]
    fn advance_is_deterministic(grid in any_soup(), stale in any_soup()) {
        for topology in ALL_TOPOLOGIES {
            let mut a = Grid::new(ROWS, COLS).unwrap();
            let mut b = stale.clone();
            compute_next(&grid, &mut a, topology);
            compute_next(&grid, &mut b, topology);
            prop_assert_eq!(&a, &b);
        }
    }

    /// Wrapping topologies treat every cell alike, so shifting the whole
    /// torus commutes with stepping it.
    #[test]
    fn torus_is_translation_invariant(grid in any_soup(), dr in 0..ROWS, dc in 0..COLS) {
        let shift = |g: &Grid| {
            let mut out = Grid::new(ROWS, COLS).unwrap();
            for (r, c) in g.alive_cells() {
                out.set((r + dr) % ROWS, (c + dc) % COLS, true);
            }
            out
        };
        let mut stepped = Grid::new(ROWS, COLS).unwrap();
        compute_next(&grid, &mut stepped, Topology::Toroidal);
        let mut shifted_then_stepped = Grid::new(ROWS, COLS).unwrap();
        compute_next(&shift(&grid), &mut shifted_then_stepped, Topology::Toroidal);
        prop_assert_eq!(shift(&stepped), shifted_then_stepped);
    }

    /// The double buffer agrees with repeated calls to `advance`.
    #[test]
    fn generations_track_advance(grid in any_soup(), steps in 1usize..6) {
        for topology in ALL_TOPOLOGIES {
            let mut life = Generations::new(ROWS, COLS, topology).unwrap();
            *life.current_mut() = grid.clone();
            let mut a = grid.clone();
            let mut b = Grid::new(ROWS, COLS).unwrap();
            for _ in 0..steps {
                advance(&mut a, &mut b, topology);
                std::mem::swap(&mut a, &mut b);
                life.step();
            }
            prop_assert_eq!(life.current(), &a);
            prop_assert_eq!(life.generation(), steps as u64);
        }
    }
}
