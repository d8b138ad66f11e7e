// grid.rs - The padded cell grid and generation stepping

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::cell::{Cell, CellState};

/// Default interior size when none is requested.
pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLS: usize = 50;

/// How many recent interior hashes are kept for cycle detection.
const HISTORY_LEN: usize = 10;

/// Handle to a cell: (row, col) into the padded array.
pub type Coord = (usize, usize);

/// Errors raised when constructing a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// The automaton environment: a `(rows + 2) x (cols + 2)` array of cells.
///
/// The outer one-cell ring is a sentinel border. It is allocated like any
/// other cell but never wired into the neighbor topology, which keeps
/// every interior neighbor lookup in-bounds without edge checks. Border
/// cells still take part in stepping; with zero neighbors the rule drives
/// them dead after the first generation and they stay dead.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
    generation: u32,
    hash_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS).expect("default grid dimensions are valid")
    }
}

impl Grid {
    /// Create a grid with the given interior size and a randomized
    /// initial configuration.
    ///
    /// Rejects zero rows or columns before allocating anything.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let mut grid = Self {
            cells: vec![vec![Cell::default(); cols + 2]; rows + 2],
            rows,
            cols,
            generation: 0,
            hash_history: [0; HISTORY_LEN],
            history_count: 0,
        };
        grid.setup_neighbors();
        grid.randomize();
        debug!(rows, cols, "constructed padded grid");
        Ok(grid)
    }

    /// Interior row count (the padded array has two more).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Interior column count (the padded array has two more).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Generations advanced since the last reset, randomize or pattern
    /// placement.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The live padded array, border ring included.
    ///
    /// This is a view for display layers, not a copy. Mutate cells only
    /// through [`Grid::set_cell_state`] and the whole-grid operations so
    /// the two-phase stepping always reads a consistent generation.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Advance the automaton by one generation.
    ///
    /// Phase one asks every cell (border ring included) for its next
    /// state against a snapshot of current states; phase two writes the
    /// snapshot back. No cell's transition ever sees a half-updated
    /// generation.
    pub fn step(&mut self) {
        let next: Vec<Vec<CellState>> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.next_state(|(r, c)| self.cells[r][c].state()))
                    .collect()
            })
            .collect();

        for (r, row) in next.into_iter().enumerate() {
            for (c, state) in row.into_iter().enumerate() {
                self.cells[r][c].set_state(state);
            }
        }

        self.generation += 1;
        trace!(generation = self.generation, "advanced one generation");
    }

    /// Set every cell, border ring included, to dead.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.set_state(CellState::Dead);
            }
        }
        self.restart_tracking();
    }

    /// Randomize every cell with a fifty-fifty draw.
    ///
    /// Uses the thread-local generator; the automaton only needs
    /// simulation-grade randomness.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Randomize every cell using the supplied generator. A seeded
    /// generator makes the initial configuration reproducible.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                let state = if rng.gen_bool(0.5) {
                    CellState::Alive
                } else {
                    CellState::Dead
                };
                cell.set_state(state);
            }
        }
        self.restart_tracking();
    }

    /// Set the state of one cell at padded-array coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the padded array. Invalid
    /// coordinates are a programmer error, not a recoverable condition.
    pub fn set_cell_state(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col].set_state(state);
    }

    /// Count of live interior cells. The border ring is excluded, it
    /// only exists to keep neighbor lookups in-bounds.
    pub fn population(&self) -> usize {
        (1..=self.rows)
            .map(|row| {
                (1..=self.cols)
                    .filter(|&col| self.cells[row][col].state().is_alive())
                    .count()
            })
            .sum()
    }

    /// Hash of the interior configuration, for cycle detection and
    /// comparing generations.
    pub fn hash_interior(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                self.cells[row][col].state().hash(&mut hasher);
            }
        }
        hasher.finish()
    }

    /// Record the current configuration and report whether it repeats
    /// one of the last few recorded ones. Detects still lifes and short
    /// oscillators when called once per generation.
    pub fn check_for_cycle(&mut self) -> bool {
        let current = self.hash_interior();
        let seen = self.history_count.min(HISTORY_LEN);
        if self.hash_history[..seen].contains(&current) {
            return true;
        }
        self.hash_history[self.history_count % HISTORY_LEN] = current;
        self.history_count += 1;
        false
    }

    // The configuration was replaced wholesale, so the generation count
    // and cycle history no longer describe it.
    fn restart_tracking(&mut self) {
        self.generation = 0;
        self.hash_history = [0; HISTORY_LEN];
        self.history_count = 0;
    }

    // Wire each interior cell to the eight cells around it, once. Border
    // cells are never visited, so their neighbor lists stay empty for
    // the grid's lifetime.
    fn setup_neighbors(&mut self) {
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                let ring = [
                    (row - 1, col - 1), (row - 1, col), (row - 1, col + 1),
                    (row, col - 1),                     (row, col + 1),
                    (row + 1, col - 1), (row + 1, col), (row + 1, col + 1),
                ];
                self.cells[row][col].set_neighbors(&ring);
            }
        }
    }
}
