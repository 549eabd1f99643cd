//! Pastel Tetris - a terminal falling-block puzzle game.
//!
//! `core` holds the engine (deterministic state machine, no I/O);
//! `input` maps key events to game actions; `term` renders state to the
//! terminal. The binary in `main.rs` wires them together.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
