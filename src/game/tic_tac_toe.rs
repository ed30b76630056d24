use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;
use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::grid::{Grid, GridIndex};
use super::player::Mark;

/// A single cell of the board, either vacant or holding a mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell(pub Option<Mark>);

impl From<Mark> for BoardCell {
    fn from(mark: Mark) -> Self {
        Self(Some(mark))
    }
}

impl BoardCell {
    pub fn mark(&self) -> Option<Mark> {
        self.0
    }

    pub fn is_vacant(&self) -> bool {
        self.0.is_none()
    }
}

impl Display for BoardCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(mark) => write!(f, "{}", mark),
            None => f.write_str("."),
        }
    }
}

/// A 3x3 board snapshot.
pub type Board = Grid<BoardCell, U3, U3>;

/// Row-major addressing of the 3x3 board as a flat list of nine squares:
/// offset 0 is the top-left cell, 8 the bottom-right.
impl GridIndex {
    pub fn from_board_offset(offset: usize) -> GameResult<Self> {
        if offset >= 9 {
            return Err(GameError::invalid_cell_offset(offset));
        }
        Ok(Self::new(offset / 3, offset % 3))
    }

    pub fn board_offset(&self) -> usize {
        self.row() * 3 + self.col()
    }
}

/// The eight lines that decide the game: three rows, three columns, two
/// diagonals, scanned in that order.
fn winning_lines() -> [[GridIndex; 3]; 8] {
    [
        [
            GridIndex::new(0, 0),
            GridIndex::new(0, 1),
            GridIndex::new(0, 2),
        ],
        [
            GridIndex::new(1, 0),
            GridIndex::new(1, 1),
            GridIndex::new(1, 2),
        ],
        [
            GridIndex::new(2, 0),
            GridIndex::new(2, 1),
            GridIndex::new(2, 2),
        ],
        [
            GridIndex::new(0, 0),
            GridIndex::new(1, 0),
            GridIndex::new(2, 0),
        ],
        [
            GridIndex::new(0, 1),
            GridIndex::new(1, 1),
            GridIndex::new(2, 1),
        ],
        [
            GridIndex::new(0, 2),
            GridIndex::new(1, 2),
            GridIndex::new(2, 2),
        ],
        [
            GridIndex::new(0, 0),
            GridIndex::new(1, 1),
            GridIndex::new(2, 2),
        ],
        [
            GridIndex::new(0, 2),
            GridIndex::new(1, 1),
            GridIndex::new(2, 0),
        ],
    ]
}

/// A completed line: the mark that formed it and the three cells it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    mark: Mark,
    line: [GridIndex; 3],
}

impl WinningLine {
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn line(&self) -> [GridIndex; 3] {
        self.line
    }

    /// Whether `cell` is part of the line. Lets the display layer highlight
    /// the winning squares.
    pub fn contains(&self, cell: GridIndex) -> bool {
        self.line.contains(&cell)
    }
}

/// Checks the board for a completed line.
///
/// Returns the first complete line in scan order, or `None` when no player
/// has three in a row. The fixed order keeps the result deterministic even
/// for boards where two lines are complete at once.
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    for line in winning_lines() {
        if let (Some(m1), Some(m2), Some(m3)) = (
            board[line[0]].mark(),
            board[line[1]].mark(),
            board[line[2]].mark(),
        ) {
            if m1 == m2 && m2 == m3 {
                return Some(WinningLine { mark: m1, line });
            }
        }
    }
    None
}

/// Returns `true` when every cell of the board is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_vacant())
}

#[cfg(test)]
mod test {
    use super::*;

    fn board_with(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::default();
        for &offset in xs {
            board[GridIndex::from_board_offset(offset).unwrap()] = Mark::X.into();
        }
        for &offset in os {
            board[GridIndex::from_board_offset(offset).unwrap()] = Mark::O.into();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate(&Board::default()), None);
    }

    #[test]
    fn test_each_line_wins() {
        let lines = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for line in lines {
            // an O off the line must not disturb the result
            let noise = (0..9).find(|o| !line.contains(o)).unwrap();
            let board = board_with(&line, &[noise]);

            let win = evaluate(&board).unwrap();
            assert_eq!(win.mark(), Mark::X);
            itertools::assert_equal(
                win.line().map(|cell| cell.board_offset()),
                line,
            );
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[0, 1], &[2]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_two_complete_lines_resolve_in_scan_order() {
        // X holds both the top row and the left column; the row is scanned
        // first and must be the reported line.
        let board = board_with(&[0, 1, 2, 3, 6], &[4, 5]);
        let win = evaluate(&board).unwrap();
        itertools::assert_equal(win.line().map(|cell| cell.board_offset()), [0, 1, 2]);
    }

    #[test]
    fn test_full_board_without_line() {
        // X X O
        // O O X
        // X O X
        let board = board_with(&[0, 1, 5, 6, 8], &[2, 3, 4, 7]);
        assert_eq!(evaluate(&board), None);
        assert!(is_full(&board));
    }

    #[test]
    fn test_partial_board_is_not_full() {
        assert!(!is_full(&board_with(&[0], &[4])));
    }

    #[test]
    fn test_board_offset_round_trip() {
        assert_eq!(
            GridIndex::from_board_offset(5).unwrap(),
            GridIndex::new(1, 2)
        );
        assert_eq!(GridIndex::new(2, 1).board_offset(), 7);
        assert_eq!(
            GridIndex::from_board_offset(9).unwrap_err(),
            GameError::InvalidCellOffset { found: 9 }
        );
    }

    #[test]
    fn test_winning_line_contains() {
        let board = board_with(&[0, 4, 8], &[1, 2]);
        let win = evaluate(&board).unwrap();
        assert!(win.contains(GridIndex::new(1, 1)));
        assert!(!win.contains(GridIndex::new(0, 1)));
    }

    #[test]
    fn test_board_display() {
        let board = board_with(&[0, 4], &[8]);
        assert_eq!(board.to_string(), "[\n[X..]\n[.X.]\n[..O]\n]");
    }
}
