use rand::{Rng, SeedableRng, rngs::StdRng};

use super::grid::{Cell, Grid};
use crate::error::{GameError, Result};

/// The single active food cell.
///
/// Placement is uniform over the whole board and does not avoid the
/// snake's body.
#[derive(Debug, Clone)]
pub struct Food {
    grid: Grid,
    cell: Option<Cell>,
    rng: StdRng,
}

impl Food {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Deterministic placement, for replays and tests
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            cell: None,
            rng,
        }
    }

    /// Pick a new random cell, replacing the current one
    pub fn spawn(&mut self) -> Cell {
        let size = self.grid.cell_size();
        let x = self.rng.gen_range(0..self.grid.columns()) * size;
        let y = self.rng.gen_range(0..self.grid.rows()) * size;
        let cell = Cell::new(x, y);
        self.cell = Some(cell);
        cell
    }

    /// Put the food on a specific cell
    pub fn place(&mut self, cell: Cell) {
        self.cell = Some(cell);
    }

    pub fn current(&self) -> Result<Cell> {
        self.cell.ok_or(GameError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_before_spawn() {
        let food = Food::with_seed(Grid::new(100, 100, 10), 1);
        assert!(matches!(food.current(), Err(GameError::NotInitialized)));
    }

    #[test]
    fn test_spawn_is_aligned_and_in_bounds() {
        let grid = Grid::new(1000, 680, 10);
        let mut food = Food::with_seed(grid, 7);

        for _ in 0..1000 {
            let cell = food.spawn();
            assert!(grid.in_bounds(cell));
            assert_eq!(cell.x % 10, 0);
            assert_eq!(cell.y % 10, 0);
            assert_eq!(food.current().unwrap(), cell);
        }
    }

    #[test]
    fn test_spawn_covers_the_board() {
        let grid = Grid::new(30, 30, 10);
        let mut food = Food::with_seed(grid, 42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(food.spawn());
        }

        assert_eq!(seen.len(), grid.total_cells());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let grid = Grid::new(1000, 680, 10);
        let mut a = Food::with_seed(grid, 99);
        let mut b = Food::with_seed(grid, 99);

        for _ in 0..20 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }

    #[test]
    fn test_place_overrides() {
        let mut food = Food::with_seed(Grid::new(100, 100, 10), 3);
        food.spawn();
        food.place(Cell::new(20, 30));
        assert_eq!(food.current().unwrap(), Cell::new(20, 30));
    }
}
