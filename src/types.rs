//! Core types shared across the application.
//! Pure data with no external dependencies.

/// Board dimensions (cells).
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (milliseconds). The fall interval starts at the base
/// value and shrinks by one step per level gained, never below the floor.
pub const FALL_BASE_MS: u64 = 500;
pub const FALL_STEP_MS: u64 = 50;
pub const FALL_FLOOR_MS: u64 = 50;

/// Tetromino shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven families, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Cell on the board (None = empty, Some = locked cell from that family).
pub type Cell = Option<PieceKind>;

/// Discrete player signals, mapped onto engine operations by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}
