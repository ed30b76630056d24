use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::player::Mark;
use super::tic_tac_toe::WinningLine;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishedState {
    Win(WinningLine),
    Draw,
}

/// The status of the displayed board, derived on demand from its cells and
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Turn(Mark),
    Finished(FinishedState),
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// The winning mark, when the game has been won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Finished(FinishedState::Win(line)) => Some(line.mark()),
            _ => None,
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Turn(mark) => write!(f, "next to move is {}", mark),
            Self::Finished(FinishedState::Win(line)) => write!(f, "winner is {}", line.mark()),
            Self::Finished(FinishedState::Draw) => f.write_str("draw"),
        }
    }
}
