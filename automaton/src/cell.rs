// cell.rs - One automaton cell: its state and its fixed neighbor wiring

use crate::grid::Coord;

/// The two possible states of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }
}

/// A single automaton cell.
///
/// A cell holds its current state plus handles to the cells it observes.
/// Handles are (row, col) positions into the owning grid's padded array,
/// never owned references, so the grid stays the sole owner of every
/// cell. Once the grid has wired the topology the handle list is fixed
/// for the grid's lifetime.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    state: CellState,
    neighbors: Vec<Coord>,
}

impl Cell {
    /// Create a cell in the given state, with no neighbors wired yet.
    pub fn new(state: CellState) -> Self {
        Self {
            state,
            neighbors: Vec::new(),
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Replace the neighbor wiring with a copy of `neighbors`.
    ///
    /// The slice is copied, so mutating the caller's buffer afterwards is
    /// never observed here, and vice versa.
    pub fn set_neighbors(&mut self, neighbors: &[Coord]) {
        self.neighbors = neighbors.to_vec();
    }

    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    /// Compute the state this cell takes in the next generation.
    ///
    /// `state_at` resolves a neighbor handle to that cell's current
    /// state; the grid passes a lookup into the generation being read.
    /// Nothing is mutated here, the caller decides when to commit the
    /// result.
    pub fn next_state<F>(&self, state_at: F) -> CellState
    where
        F: Fn(Coord) -> CellState,
    {
        let count = self
            .neighbors
            .iter()
            .filter(|&&at| state_at(at).is_alive())
            .count();

        match (self.state, count) {
            (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
            (CellState::Dead, 3) => CellState::Alive,                          // Birth
            _ => CellState::Dead, // Death or stays dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A cell wired to eight handles, where the first `live` of them
    // resolve as alive.
    fn cell_and_lookup(state: CellState, live: usize) -> (Cell, impl Fn(Coord) -> CellState) {
        let mut cell = Cell::new(state);
        let handles: Vec<Coord> = (0..8).map(|col| (0, col)).collect();
        cell.set_neighbors(&handles);
        let lookup = move |(_, col): Coord| {
            if col < live {
                CellState::Alive
            } else {
                CellState::Dead
            }
        };
        (cell, lookup)
    }

    #[test]
    fn dead_cell_is_born_with_exactly_three_live_neighbors() {
        for live in 0..=8 {
            let (cell, lookup) = cell_and_lookup(CellState::Dead, live);
            let expected = if live == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(cell.next_state(lookup), expected, "live count {live}");
        }
    }

    #[test]
    fn live_cell_survives_with_two_or_three_live_neighbors() {
        for live in 0..=8 {
            let (cell, lookup) = cell_and_lookup(CellState::Alive, live);
            let expected = if live == 2 || live == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(cell.next_state(lookup), expected, "live count {live}");
        }
    }

    #[test]
    fn next_state_does_not_mutate_the_cell() {
        let (cell, lookup) = cell_and_lookup(CellState::Alive, 8);
        assert_eq!(cell.next_state(lookup), CellState::Dead);
        assert_eq!(cell.state(), CellState::Alive);
    }

    #[test]
    fn cell_with_no_neighbors_follows_the_rule_with_count_zero() {
        let dead = Cell::new(CellState::Dead);
        let alive = Cell::new(CellState::Alive);
        assert_eq!(dead.next_state(|_| CellState::Alive), CellState::Dead);
        assert_eq!(alive.next_state(|_| CellState::Alive), CellState::Dead);
    }

    #[test]
    fn set_neighbors_takes_a_copy() {
        let mut cell = Cell::new(CellState::Dead);
        let mut handles = vec![(1, 1), (1, 2)];
        cell.set_neighbors(&handles);
        handles.push((9, 9));
        handles[0] = (7, 7);
        assert_eq!(cell.neighbors(), &[(1, 1), (1, 2)]);
    }

    #[test]
    fn new_cell_defaults_to_dead_with_no_neighbors() {
        let cell = Cell::default();
        assert_eq!(cell.state(), CellState::Dead);
        assert!(cell.neighbors().is_empty());
    }
}
