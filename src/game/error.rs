use super::player::Mark;

pub type GameResult<T> = Result<T, GameError>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("player name for {mark} is empty")]
    EmptyPlayerName { mark: Mark },
    #[error("invalid cell offset (expected: 0-8, found: {found})")]
    InvalidCellOffset { found: usize },
    #[error("history index is out of range (history length: {len}, found: {found})")]
    HistoryOutOfRange { len: usize, found: usize },
}

impl GameError {
    pub fn empty_player_name(mark: Mark) -> Self {
        Self::EmptyPlayerName { mark }
    }

    pub fn invalid_cell_offset(found: usize) -> Self {
        Self::InvalidCellOffset { found }
    }

    pub fn history_out_of_range(len: usize, found: usize) -> Self {
        Self::HistoryOutOfRange { len, found }
    }
}
