//! Core module - pure game logic with no external dependencies.
//!
//! Game rules, board state and piece tables. Zero dependencies on UI,
//! timers or I/O; the external loop drives everything through `Game`.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use game::Game;
pub use pieces::{Piece, SPAWN_POSITION};
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
