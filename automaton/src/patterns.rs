// patterns.rs - Named seed patterns stamped into a grid's interior

use crate::cell::CellState;
use crate::grid::Grid;

/// A named starting pattern, given as (row, col) offsets from an anchor.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Clear `grid` and stamp this pattern with its anchor at padded
    /// coordinates (`row`, `col`). Cells that fall outside the interior
    /// are skipped rather than wrapped or reported.
    pub fn place(&self, grid: &mut Grid, row: usize, col: usize) {
        grid.reset();
        for &(dr, dc) in self.cells {
            let r = row + dr;
            let c = col + dc;
            if r >= 1 && r <= grid.rows() && c >= 1 && c <= grid.cols() {
                grid.set_cell_state(r, c, CellState::Alive);
            }
        }
    }
}
