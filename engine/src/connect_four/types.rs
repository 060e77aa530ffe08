use crate::PlayerId;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;
/// Smallest board side on which a four-in-a-row fits.
pub const MIN_DIMENSION: usize = WIN_LENGTH;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    OccupiedBy(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::OccupiedBy(player) => Some(player),
        }
    }

    pub fn is_occupied_by(self, player: PlayerId) -> bool {
        self == Cell::OccupiedBy(player)
    }
}

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Moves `steps` times along `direction`; `None` when a coordinate would go negative.
    pub fn step(self, direction: Direction, steps: isize) -> Option<Position> {
        let (dy, dx) = direction.delta();
        Some(Position {
            y: self.y.checked_add_signed(dy * steps)?,
            x: self.x.checked_add_signed(dx * steps)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by the win detector.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(dy, dx)` per step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    pub cells: [Position; WIN_LENGTH],
}

impl WinningLine {
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[WIN_LENGTH - 1]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(PlayerId),
    Won { winner: PlayerId, line: WinningLine },
    Tied,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    pub fn active_player(&self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress(player) => Some(*player),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}
