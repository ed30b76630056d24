use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// A player's symbol on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// The mark that moves at history position `mv`.
    /// X moves on even positions, O on odd ones.
    pub fn for_move(mv: usize) -> Self {
        if mv % 2 == 0 {
            Self::X
        } else {
            Self::O
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// One of the two players: a display name bound to a mark.
/// The name is opaque to the game logic.
///
/// Serializes for display snapshots; not deserializable, names are only
/// accepted through the validating constructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    fn new(name: String, mark: Mark) -> GameResult<Self> {
        if name.is_empty() {
            return Err(GameError::empty_player_name(mark));
        }
        Ok(Self { name, mark })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// The two players of a session, X first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerPair {
    players: [Player; 2],
}

impl PlayerPair {
    /// Builds the pair from the names supplied at session start.
    /// Both names must be non-empty.
    pub fn new(x_name: impl Into<String>, o_name: impl Into<String>) -> GameResult<Self> {
        Ok(Self {
            players: [
                Player::new(x_name.into(), Mark::X)?,
                Player::new(o_name.into(), Mark::O)?,
            ],
        })
    }

    pub fn by_mark(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }
}

/// Cumulative win counts per mark. Survives game resets within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub(super) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }
}

impl Index<Mark> for Scoreboard {
    type Output = u32;

    fn index(&self, mark: Mark) -> &Self::Output {
        match mark {
            Mark::X => &self.x_wins,
            Mark::O => &self.o_wins,
        }
    }
}
