//! Terminal runner for Pastel Tetris.
//!
//! Owns everything the engine deliberately does not: the gravity timer,
//! input polling, pause state and rendering. All engine calls happen on
//! this single thread, serialized with the fall tick.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use pastel_tetris::core::Game;
use pastel_tetris::input::{handle_key_event, should_quit};
use pastel_tetris::term::{GameView, TerminalRenderer, Viewport};
use pastel_tetris::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(time_seed());
    let view = GameView::default();
    let mut paused = false;

    // The engine reports the interval; the deadline lives here.
    let mut fall_deadline = Instant::now() + Duration::from_millis(game.fall_interval_ms());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, paused, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the gravity deadline.
        let timeout = fall_deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::Pause => paused = !paused,
                            GameAction::Restart => {
                                if game.game_over() {
                                    game = Game::new(time_seed());
                                    paused = false;
                                    fall_deadline = Instant::now()
                                        + Duration::from_millis(game.fall_interval_ms());
                                }
                            }
                            _ if paused => {}
                            GameAction::MoveLeft => {
                                game.try_move(-1, 0);
                            }
                            GameAction::MoveRight => {
                                game.try_move(1, 0);
                            }
                            GameAction::SoftDrop => game.soft_drop(),
                            GameAction::HardDrop => game.hard_drop(),
                            GameAction::RotateCw => {
                                game.try_rotate(1);
                            }
                            GameAction::RotateCcw => {
                                game.try_rotate(-1);
                            }
                        }
                    }
                }
            }
        }

        // Gravity tick. The engine never auto-locks on a failed gravity
        // descent; that contract lives here. The interval is re-read after
        // every tick since a lock may have raised the level.
        if Instant::now() >= fall_deadline {
            if !paused && !game.game_over() && !game.try_move(0, 1) {
                game.lock_piece();
            }
            fall_deadline = Instant::now() + Duration::from_millis(game.fall_interval_ms());
        }
    }
}
