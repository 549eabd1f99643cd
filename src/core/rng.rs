//! Piece generation - the engine draws pieces through an injected source.
//!
//! The source is a capability handed to the engine at construction, not a
//! hidden global, so tests can supply deterministic sequences. Production
//! play uses a seeded LCG drawing uniformly over the 7 families (repeats
//! allowed - this is uniform choice, not 7-bag).

use crate::types::PieceKind;

/// A supplier of tetromino families for the spawner.
pub trait PieceSource {
    /// Draw the next family.
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// A scripted source that cycles through a fixed sequence.
/// Intended for tests and deterministic demos.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    sequence: Vec<PieceKind>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "scripted sequence must not be empty");
        Self { sequence, next: 0 }
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        kind
    }
}
