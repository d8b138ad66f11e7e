//! A fixed-size two-state cellular automaton engine.
//!
//! The grid carries a one-cell sentinel border around the requested
//! interior, so every interior cell always has eight in-bounds neighbors
//! and stepping needs no edge logic. Updates are synchronous: each
//! generation is computed from a single snapshot of the current states
//! before any cell is written back.
//!
//! Rendering is not part of this crate. A display layer reads the live
//! grid through [`Grid::cells`] and drives generations with
//! [`Grid::step`].
//!
//! # Example
//!
//! ```
//! use automaton::{Grid, PATTERNS};
//!
//! let mut grid = Grid::new(10, 10).unwrap();
//! PATTERNS[0].place(&mut grid, 3, 3);
//! grid.step();
//! println!("{} live cells", grid.population());
//! ```

mod cell;
mod grid;
mod patterns;

pub use cell::{Cell, CellState};
pub use grid::{Coord, Grid, GridError, DEFAULT_COLS, DEFAULT_ROWS};
pub use patterns::{Pattern, PATTERNS};
