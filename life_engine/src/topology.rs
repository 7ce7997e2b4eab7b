// topology.rs - How neighbour coordinates past the grid edge are resolved

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The 8 neighbour offsets `(d_row, d_col)`. The centre `(0, 0)` is never
/// part of the neighbourhood.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Edge behaviour of the board, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Cells past the edge are permanently dead ("hedge").
    #[default]
    Bounded,
    /// Opposite edges are adjacent on both axes ("torus").
    Toroidal,
    /// Left/right wrap plainly; crossing top or bottom also mirrors the
    /// column ("klein").
    Klein,
}

pub const ALL_TOPOLOGIES: [Topology; 3] = [Topology::Bounded, Topology::Toroidal, Topology::Klein];

impl Topology {
    /// Maps `(i + di, j + dj)` onto the board, or `None` when the neighbour
    /// does not exist. Offsets are expected in `-1..=1`.
    ///
    /// # Panics
    ///
    /// If `rows` or `cols` is zero.
    #[inline]
    pub fn resolve(
        self,
        i: usize,
        j: usize,
        di: isize,
        dj: isize,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        debug_assert!(rows > 0 && cols > 0, "cannot resolve on a {rows}x{cols} board");
        match self {
            Topology::Bounded => bounded(i, j, di, dj, rows, cols),
            Topology::Toroidal => Some(toroidal(i, j, di, dj, rows, cols)),
            Topology::Klein => Some(klein(i, j, di, dj, rows, cols)),
        }
    }

    /// Selector string accepted on the command line.
    pub fn selector(self) -> &'static str {
        match self {
            Topology::Bounded => "hedge",
            Topology::Toroidal => "torus",
            Topology::Klein => "klein",
        }
    }
}

#[inline]
fn wrap(v: usize, d: isize, len: usize) -> usize {
    (v as isize + d).rem_euclid(len as isize) as usize
}

fn bounded(i: usize, j: usize, di: isize, dj: isize, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let ri = i.checked_add_signed(di).filter(|&r| r < rows)?;
    let rj = j.checked_add_signed(dj).filter(|&c| c < cols)?;
    Some((ri, rj))
}

fn toroidal(i: usize, j: usize, di: isize, dj: isize, rows: usize, cols: usize) -> (usize, usize) {
    (wrap(i, di, rows), wrap(j, dj, cols))
}

fn klein(i: usize, j: usize, di: isize, dj: isize, rows: usize, cols: usize) -> (usize, usize) {
    let rj = wrap(j, dj, cols);
    let row = i as isize + di;
    if row < 0 {
        (rows - 1, cols - 1 - rj)
    } else if row as usize >= rows {
        (row as usize % rows, cols - 1 - rj)
    } else {
        (row as usize, rj)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown edge type `{0}` (expected hedge, torus or klein)")]
pub struct ParseTopologyError(pub String);

impl FromStr for Topology {
    type Err = ParseTopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hedge" | "bounded" => Ok(Topology::Bounded),
            "torus" | "toroidal" => Ok(Topology::Toroidal),
            "klein" => Ok(Topology::Klein),
            _ => Err(ParseTopologyError(s.to_string())),
        }
    }
}
