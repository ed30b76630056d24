//! Core logic of a two-player tic-tac-toe session.
//!
//! Two pieces make up the crate:
//!
//! - [`game::tic_tac_toe::evaluate`], a pure function deciding whether a
//!   board holds a completed line, and which one.
//! - [`game::GameSession`], the owner of the move history, the position
//!   pointer used for time travel, and the score kept across games.
//!
//! Rendering, input handling and text are left to the consuming display
//! layer; this crate only exposes the state it needs.

pub mod game;

pub use game::{
    evaluate, is_full, Board, BoardCell, FinishedState, GameError, GameResult, GameSession,
    GameStatus, Grid, GridIndex, Mark, MoveOutcome, Player, PlayerPair, Scoreboard, WinningLine,
};
