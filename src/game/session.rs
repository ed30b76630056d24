use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use super::error::{GameError, GameResult};
use super::grid::GridIndex;
use super::player::{Mark, Player, PlayerPair, Scoreboard};
use super::state::{FinishedState, GameStatus};
use super::tic_tac_toe::{evaluate, is_full, Board};

/// A full game is at most ten snapshots: the vacant board plus nine moves.
type History = SmallVec<[Board; 10]>;

/// What became of an attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was placed; the status of the resulting board is attached.
    Applied(GameStatus),
    /// The addressed cell was occupied or the game was already won.
    /// Nothing changed.
    Rejected,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// One session of play: the two players, the move history of the current
/// game, and the score accumulated across games.
///
/// The board on display is always `history[current_move]`. Jumping the
/// pointer backward and placing a new move discards the stale future, so
/// history stays linear.
#[derive(Clone, Debug)]
pub struct GameSession {
    players: PlayerPair,
    history: History,
    current_move: usize,
    score: Scoreboard,
}

impl GameSession {
    /// Opens a session for two named players. Names must be non-empty.
    pub fn new(x_name: impl Into<String>, o_name: impl Into<String>) -> GameResult<Self> {
        Ok(Self {
            players: PlayerPair::new(x_name, o_name)?,
            history: smallvec![Board::default()],
            current_move: 0,
            score: Scoreboard::default(),
        })
    }

    pub fn players(&self) -> &PlayerPair {
        &self.players
    }

    pub fn player(&self, mark: Mark) -> &Player {
        self.players.by_mark(mark)
    }

    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// The board the session currently points at.
    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// All recorded snapshots of the current game, oldest first. Snapshot 0
    /// is the vacant starting board.
    pub fn moves(&self) -> impl ExactSizeIterator<Item = &Board> {
        self.history.iter()
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The mark that moves next, derived from the position parity.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Derives the status of the displayed board. A full board without a
    /// completed line is reported as a draw rather than as another turn.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        match evaluate(board) {
            Some(win) => GameStatus::Finished(FinishedState::Win(win)),
            None if is_full(board) => GameStatus::Finished(FinishedState::Draw),
            None => GameStatus::Turn(self.next_mark()),
        }
    }

    /// Places the next mark on `cell`.
    ///
    /// The move is rejected, leaving history, pointer and score untouched,
    /// when the cell is already occupied or the displayed board has a
    /// winner. A move placed after a backward jump truncates the stale
    /// future before being appended.
    pub fn apply_move(&mut self, cell: GridIndex) -> MoveOutcome {
        let board = self.board();
        if evaluate(board).is_some() || !board[cell].is_vacant() {
            trace!(cell = %cell, "move rejected");
            return MoveOutcome::Rejected;
        }

        let mark = self.next_mark();
        let mut next = board.clone();
        next[cell] = mark.into();

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        debug!(cell = %cell, mark = %mark, move_number = self.current_move, "move applied");

        if let Some(win) = evaluate(self.board()) {
            // Credited only at the move that completes the line; revisiting
            // this snapshot via jump_to must not count the win again.
            self.score.record_win(win.mark());
            debug!(winner = %win.mark(), "win recorded");
        }

        MoveOutcome::Applied(self.status())
    }

    /// Repositions the pointer onto an existing snapshot. History and score
    /// are left untouched.
    pub fn jump_to(&mut self, mv: usize) -> GameResult<()> {
        if mv >= self.history.len() {
            return Err(GameError::history_out_of_range(self.history.len(), mv));
        }
        trace!(from = self.current_move, to = mv, "history jump");
        self.current_move = mv;
        Ok(())
    }

    /// Starts a fresh game: a single vacant snapshot, pointer at 0. The
    /// score survives; only dropping the session clears it.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::default());
        self.current_move = 0;
        debug!("game reset");
    }
}
