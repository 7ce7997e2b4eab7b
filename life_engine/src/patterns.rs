// patterns.rs - Built-in seed patterns, offsets as (x, y)

use crate::pattern::{Pattern, PatternError};

pub struct Builtin {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Builtin {
    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.name, self.cells.to_vec())
    }
}

#[rustfmt::skip]
pub const PATTERNS: &[Builtin] = &[
    Builtin {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Builtin {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Builtin {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Builtin {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Builtin {
        name: "pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Builtin {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Builtin {
        name: "acorn",
        cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
    },
    Builtin {
        name: "gosper-glider-gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Looks up a built-in by name, ignoring case and treating spaces and
/// underscores as dashes.
pub fn find(name: &str) -> Result<Pattern, PatternError> {
    let key = name.trim().to_ascii_lowercase().replace([' ', '_'], "-");
    PATTERNS
        .iter()
        .find(|p| p.name == key)
        .map(Builtin::to_pattern)
        .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}
