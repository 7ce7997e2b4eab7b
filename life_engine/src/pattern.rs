// pattern.rs - Life 1.06 patterns and placing them on a grid

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

use crate::grid::{Grid, GridError};

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read pattern file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected two integers `x y`, found `{content}`")]
    Parse { line: usize, content: String },
    #[error("pattern does not fit the grid: {0}")]
    OutOfBounds(#[from] GridError),
    #[error("no built-in pattern named `{0}`")]
    UnknownPattern(String),
}

/// Where cell `(0, 0)` of a pattern lands: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: i64,
    pub y: i64,
}

impl Origin {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("origin must be `x,y` with no spaces, found `{0}`")]
pub struct ParseOriginError(pub String);

impl FromStr for Origin {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseOriginError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.parse::<i64>().map_err(|_| err())?;
        let y = y.parse::<i64>().map_err(|_| err())?;
        Ok(Self { x, y })
    }
}

/// A set of alive cells as `(x, y)` offsets relative to an origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<(i64, i64)>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Parses Life 1.06 text. `#` lines (the `#Life 1.06` header included)
    /// and blank lines are skipped; every other line is `x y`.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut cells = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse_err = || PatternError::Parse {
                line: idx + 1,
                content: line.to_string(),
            };
            let mut fields = line.split_whitespace();
            let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(parse_err());
            };
            let x = x.parse::<i64>().map_err(|_| parse_err())?;
            let y = y.parse::<i64>().map_err(|_| parse_err())?;
            cells.push((x, y));
        }

        let pattern = Self::new(name, cells);
        if pattern.cells.is_empty() {
            warn!("pattern `{}` has no live cells", pattern.name);
        }
        Ok(pattern)
    }

    pub fn from_file(path: &Path) -> Result<Self, PatternError> {
        let text = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let pattern = Self::parse(name, &text)?;
        debug!("loaded {} cells from {}", pattern.cells.len(), path.display());
        Ok(pattern)
    }

    /// `(min_x, min_y, max_x, max_y)` of the live cells.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let (&(x0, y0), rest) = self.cells.split_first()?;
        Some(rest.iter().fold((x0, y0, x0, y0), |(lx, ly, hx, hy), &(x, y)| {
            (lx.min(x), ly.min(y), hx.max(x), hy.max(y))
        }))
    }

    /// Origin that puts the middle of the pattern at the middle of a
    /// `rows x cols` board. Patterns too far out to centre saturate and are
    /// then rejected by [`place`](Self::place).
    pub fn centered_in(&self, rows: usize, cols: usize) -> Origin {
        let (lx, ly, hx, hy) = self.bounds().unwrap_or_default();
        let centre = |len: usize, lo: i64, hi: i64| {
            let v = len as i128 / 2 - (lo as i128 + hi as i128) / 2;
            v.clamp(i64::MIN as i128, i64::MAX as i128) as i64
        };
        Origin::new(centre(cols, lx, hx), centre(rows, ly, hy))
    }

    /// Grid coordinates `(row, col)` for every cell, all checked against
    /// `grid` before anything is returned.
    pub fn resolve(&self, grid: &Grid, origin: Origin) -> Result<Vec<(usize, usize)>, PatternError> {
        self.cells
            .iter()
            .map(|&(x, y)| {
                let row = origin.y.saturating_add(y);
                let col = origin.x.saturating_add(x);
                grid.checked_coords(row, col).map_err(PatternError::from)
            })
            .collect()
    }

    /// Brings the pattern to life on `grid`. Nothing is written unless every
    /// cell fits. Returns the number of cells placed.
    pub fn place(&self, grid: &mut Grid, origin: Origin) -> Result<usize, PatternError> {
        let coords = self.resolve(grid, origin)?;
        for &(row, col) in &coords {
            grid.set(row, col, true);
        }
        debug!("placed `{}` at {origin}: {} cells", self.name, coords.len());
        Ok(coords.len())
    }
}
