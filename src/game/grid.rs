use ratatui::layout::Position;

/// A cell coordinate on the board, counted from the top-left corner
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Segment {
    pub(crate) row: u16,
    pub(crate) col: u16,
}

impl Segment {
    pub(crate) const fn new(row: u16, col: u16) -> Segment {
        Segment { row, col }
    }
}

impl From<Segment> for Position {
    fn from(seg: Segment) -> Position {
        Position::new(seg.col, seg.row)
    }
}

/// What currently occupies a cell of the board
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum CellState {
    #[default]
    Empty,
    SnakeBody,
    Fruit,
}

/// Occupancy map of the board, stored row-major.
///
/// Indexing outside the board is a bug in the caller and panics; the game
/// checks its bounds before touching the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    nrows: u16,
    ncols: u16,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an `nrows`×`ncols` grid in which every cell is empty
    pub(crate) fn new(nrows: u16, ncols: u16) -> Grid {
        Grid {
            nrows,
            ncols,
            cells: vec![CellState::Empty; usize::from(nrows) * usize::from(ncols)],
        }
    }

    pub(crate) fn nrows(&self) -> u16 {
        self.nrows
    }

    pub(crate) fn ncols(&self) -> u16 {
        self.ncols
    }

    pub(crate) fn get(&self, seg: Segment) -> CellState {
        self.cells[self.index(seg)]
    }

    pub(crate) fn set(&mut self, seg: Segment, state: CellState) {
        let i = self.index(seg);
        self.cells[i] = state;
    }

    /// Return the number of cells currently in the given state
    pub(crate) fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Is there at least one cell that is not part of the snake?
    pub(crate) fn has_vacancy(&self) -> bool {
        self.count(CellState::SnakeBody) < self.cells.len()
    }

    fn index(&self, seg: Segment) -> usize {
        assert!(
            seg.row < self.nrows && seg.col < self.ncols,
            "cell ({}, {}) is outside of the {}x{} grid",
            seg.row,
            seg.col,
            self.nrows,
            self.ncols
        );
        usize::from(seg.row) * usize::from(self.ncols) + usize::from(seg.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 7);
        assert_eq!(grid.count(CellState::Empty), 28);
        assert_eq!(grid.count(CellState::SnakeBody), 0);
        assert_eq!(grid.count(CellState::Fruit), 0);
        assert!(grid.has_vacancy());
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(4, 7);
        grid.set(Segment::new(3, 6), CellState::SnakeBody);
        grid.set(Segment::new(0, 2), CellState::Fruit);
        assert_eq!(grid.get(Segment::new(3, 6)), CellState::SnakeBody);
        assert_eq!(grid.get(Segment::new(0, 2)), CellState::Fruit);
        assert_eq!(grid.get(Segment::new(2, 6)), CellState::Empty);
        assert_eq!(grid.get(Segment::new(3, 5)), CellState::Empty);
        grid.set(Segment::new(3, 6), CellState::Empty);
        assert_eq!(grid.count(CellState::Empty), 27);
    }

    #[test]
    fn full_of_snake_has_no_vacancy() {
        let mut grid = Grid::new(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                grid.set(Segment::new(row, col), CellState::SnakeBody);
            }
        }
        assert!(!grid.has_vacancy());
        grid.set(Segment::new(1, 1), CellState::Fruit);
        assert!(grid.has_vacancy());
    }

    #[test]
    #[should_panic(expected = "outside of the 4x7 grid")]
    fn get_row_out_of_range() {
        let grid = Grid::new(4, 7);
        let _ = grid.get(Segment::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "outside of the 4x7 grid")]
    fn set_col_out_of_range() {
        let mut grid = Grid::new(4, 7);
        grid.set(Segment::new(0, 7), CellState::Fruit);
    }

    #[test]
    fn segment_to_position() {
        assert_eq!(Position::from(Segment::new(3, 9)), Position::new(9, 3));
    }
}
