// generations.rs - Double-buffered simulation state

use log::trace;

use crate::engine::compute_next;
use crate::grid::{Grid, GridError};
use crate::pattern::{Origin, Pattern, PatternError};
use crate::topology::Topology;

/// Two equally sized grids plus the topology they evolve under. One grid
/// holds the latest generation; the other is the write target for the next
/// step. Both are allocated once, in [`Generations::new`].
#[derive(Debug, Clone)]
pub struct Generations {
    buffers: [Grid; 2],
    active: usize,
    topology: Topology,
    generation: u64,
}

impl Generations {
    pub fn new(rows: usize, cols: usize, topology: Topology) -> Result<Self, GridError> {
        let front = Grid::new(rows, cols)?;
        let back = Grid::new(rows, cols)?;
        Ok(Self {
            buffers: [front, back],
            active: 0,
            topology,
            generation: 0,
        })
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Steps taken since construction or the last [`reset`](Self::reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The latest generation.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// Mutable access to the latest generation, for seeding.
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.active]
    }

    /// Places `pattern` on the latest generation.
    pub fn seed(&mut self, pattern: &Pattern, origin: Origin) -> Result<usize, PatternError> {
        pattern.place(self.current_mut(), origin)
    }

    /// Advances one generation and returns it. The back buffer is fully
    /// overwritten, so no clearing pass is needed.
    pub fn step(&mut self) -> &Grid {
        let (front, back) = self.buffers.split_at_mut(1);
        let (src, dst) = if self.active == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        compute_next(src, dst, self.topology);

        self.active ^= 1;
        self.generation += 1;
        trace!(
            "generation {}: {} alive",
            self.generation,
            self.buffers[self.active].population()
        );
        &self.buffers[self.active]
    }

    /// Kills every cell in both buffers and restarts the counter.
    pub fn reset(&mut self) {
        for grid in &mut self.buffers {
            grid.clear();
        }
        self.active = 0;
        self.generation = 0;
    }
}
