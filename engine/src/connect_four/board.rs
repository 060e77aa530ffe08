use crate::{BoardError, PlayerId};
use super::settings::GameSettings;
use super::types::{Cell, Position};

/// Fixed `height x width` grid stored row-major. Row 0 is the top; pieces
/// settle toward row `height - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Board {
    pub fn create(height: usize, width: usize) -> Result<Self, BoardError> {
        GameSettings::new(height, width).check_dimensions()?;
        Ok(Self {
            cells: vec![Cell::Empty; height * width],
            height,
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, y: usize, x: usize) -> Option<usize> {
        (y < self.height && x < self.width).then(|| y * self.width + x)
    }

    pub fn cell_at(&self, y: usize, x: usize) -> Result<Cell, BoardError> {
        self.index(y, x)
            .map(|i| self.cells[i])
            .ok_or(BoardError::OutOfBounds { y, x })
    }

    /// Like [`Board::cell_at`] but `None` off the board.
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position.y, position.x).map(|i| self.cells[i])
    }

    /// Lowest empty row in `column`, or `None` if the column is full or off the board.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&y| self.cells[y * self.width + column].is_empty())
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    pub fn occupy(&mut self, y: usize, x: usize, player: PlayerId) -> Result<(), BoardError> {
        let index = self.index(y, x).ok_or(BoardError::OutOfBounds { y, x })?;
        if !self.cells[index].is_empty() {
            return Err(BoardError::CellOccupied { y, x });
        }
        self.cells[index] = Cell::OccupiedBy(player);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows().map(<[Cell]>::to_vec).collect(),
        }
    }

    /// An empty board with the same dimensions.
    pub(crate) fn cleared(&self) -> Board {
        Board {
            cells: vec![Cell::Empty; self.cells.len()],
            height: self.height,
            width: self.width,
        }
    }
}

/// Owned copy of the grid handed to renderers. Nothing in it feeds back into a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: Vec<Vec<Cell>>,
}

impl BoardSnapshot {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, y: usize, x: usize) -> Option<Cell> {
        self.rows.get(y)?.get(x).copied()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_empty() {
        let board = Board::create(6, 7).unwrap();
        assert_eq!(board.height(), 6);
        assert_eq!(board.width(), 7);
        for y in 0..6 {
            for x in 0..7 {
                assert_eq!(board.cell_at(y, x), Ok(Cell::Empty));
            }
        }
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_create_rejects_small_boards() {
        assert_eq!(
            Board::create(3, 7),
            Err(BoardError::InvalidDimensions { height: 3, width: 7 })
        );
        assert_eq!(
            Board::create(6, 3),
            Err(BoardError::InvalidDimensions { height: 6, width: 3 })
        );
        assert!(Board::create(4, 4).is_ok());
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = Board::create(6, 7).unwrap();
        assert_eq!(board.cell_at(6, 0), Err(BoardError::OutOfBounds { y: 6, x: 0 }));
        assert_eq!(board.cell_at(0, 7), Err(BoardError::OutOfBounds { y: 0, x: 7 }));
        assert_eq!(board.get(Position::new(0, 7)), None);
    }

    #[test]
    fn test_landing_row_scans_from_bottom() {
        let mut board = Board::create(6, 7).unwrap();
        assert_eq!(board.landing_row(3), Some(5));

        board.occupy(5, 3, PlayerId::One).unwrap();
        assert_eq!(board.landing_row(3), Some(4));

        board.occupy(4, 3, PlayerId::Two).unwrap();
        assert_eq!(board.landing_row(3), Some(3));
        assert_eq!(board.landing_row(7), None);
    }

    #[test]
    fn test_landing_row_full_column() {
        let mut board = Board::create(4, 4).unwrap();
        for y in (0..4).rev() {
            board.occupy(y, 0, PlayerId::One).unwrap();
        }
        assert_eq!(board.landing_row(0), None);
        assert!(board.is_column_full(0));
        assert_eq!(board.open_columns(), vec![1, 2, 3]);
    }

    #[test]
    fn test_occupy_twice_fails() {
        let mut board = Board::create(6, 7).unwrap();
        board.occupy(5, 0, PlayerId::One).unwrap();
        assert_eq!(
            board.occupy(5, 0, PlayerId::Two),
            Err(BoardError::CellOccupied { y: 5, x: 0 })
        );
        assert_eq!(board.cell_at(5, 0), Ok(Cell::OccupiedBy(PlayerId::One)));
        assert_eq!(
            board.occupy(9, 0, PlayerId::Two),
            Err(BoardError::OutOfBounds { y: 9, x: 0 })
        );
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::create(4, 5).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                assert!(!board.is_full());
                board.occupy(y, x, PlayerId::Two).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), 20);
        assert!(board.open_columns().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::create(6, 7).unwrap();
        board.occupy(5, 2, PlayerId::One).unwrap();
        let snapshot = board.snapshot();
        board.occupy(4, 2, PlayerId::Two).unwrap();

        assert_eq!(snapshot.height(), 6);
        assert_eq!(snapshot.width(), 7);
        assert_eq!(snapshot.cell(5, 2), Some(Cell::OccupiedBy(PlayerId::One)));
        assert_eq!(snapshot.cell(4, 2), Some(Cell::Empty));
        assert_eq!(snapshot.cell(6, 0), None);
    }

    #[test]
    fn test_cleared_keeps_dimensions() {
        let mut board = Board::create(5, 8).unwrap();
        board.occupy(4, 4, PlayerId::One).unwrap();
        let cleared = board.cleared();
        assert_eq!(cleared, Board::create(5, 8).unwrap());
    }
}
