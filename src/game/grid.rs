//! Board geometry: cells and bounds checking

use super::{action::Direction, config::GameConfig};

/// A position on the board, in units. Cells are aligned to the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move `step` units in a direction
    pub fn stepped(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }

    /// True when both axes are independently within `tolerance` of `other`
    pub fn is_near(&self, other: Cell, tolerance: i32) -> bool {
        (i64::from(self.x) - i64::from(other.x)).abs() <= i64::from(tolerance)
            && (i64::from(self.y) - i64::from(other.y)).abs() <= i64::from(tolerance)
    }
}

/// Board extents and cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_width, config.board_height, config.cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Upper bound on the number of cells the board can hold.
    /// Only a sizing constant; there is no win condition.
    pub fn total_cells(&self) -> usize {
        let area = i64::from(self.width) * i64::from(self.height);
        let cell_area = i64::from(self.cell_size) * i64::from(self.cell_size);
        (area / cell_area) as usize
    }

    /// The cell the snake starts on, aligned to the cell size
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Converts a unit coordinate to (column, row), if on the board
    pub fn to_index(&self, cell: Cell) -> Option<(usize, usize)> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((
            (cell.x / self.cell_size) as usize,
            (cell.y / self.cell_size) as usize,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_stepping() {
        let cell = Cell::new(500, 340);
        assert_eq!(cell.stepped(Direction::Right, 10), Cell::new(510, 340));
        assert_eq!(cell.stepped(Direction::Left, 10), Cell::new(490, 340));
        assert_eq!(cell.stepped(Direction::Up, 10), Cell::new(500, 330));
        assert_eq!(cell.stepped(Direction::Down, 10), Cell::new(500, 350));
    }

    #[test]
    fn test_proximity_is_per_axis() {
        let food = Cell::new(100, 100);
        assert!(Cell::new(100, 100).is_near(food, 1));
        assert!(Cell::new(101, 99).is_near(food, 1));
        assert!(!Cell::new(102, 100).is_near(food, 1));
        assert!(!Cell::new(100, 110).is_near(food, 1));
    }

    #[test]
    fn test_proximity_does_not_overflow() {
        assert!(!Cell::new(i32::MIN, 0).is_near(Cell::new(i32::MAX, 0), 1));
    }

    #[test]
    fn test_total_cells() {
        let grid = Grid::new(1000, 680, 10);
        assert_eq!(grid.total_cells(), 6800);
        assert_eq!(grid.columns(), 100);
        assert_eq!(grid.rows(), 68);
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(1000, 680, 10);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(990, 670)));
        assert!(!grid.in_bounds(Cell::new(-10, 0)));
        assert!(!grid.in_bounds(Cell::new(1000, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 680)));
        assert!(!grid.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn test_center_and_index() {
        let grid = Grid::new(1000, 680, 10);
        assert_eq!(grid.center(), Cell::new(500, 340));
        assert_eq!(grid.to_index(grid.center()), Some((50, 34)));
        assert_eq!(grid.to_index(Cell::new(1000, 0)), None);
    }

    #[test]
    fn test_center_is_aligned_on_odd_boards() {
        let grid = Grid::new(310, 210, 10);
        assert_eq!(grid.center(), Cell::new(150, 100));
        assert_eq!(grid.center().x % grid.cell_size(), 0);
        assert_eq!(grid.center().y % grid.cell_size(), 0);
    }
}
