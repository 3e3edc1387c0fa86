//! RNG module - deterministic randomness for spawning
//!
//! A small LCG keeps the engine free of external RNG dependencies and makes
//! every game replayable from its seed.
//!
//! Spawn policy: pick uniformly among the five shape families, then flip a
//! fair coin for the two families that have a mirrored sibling. The seven
//! concrete shapes are therefore not equally likely, and that is intentional.
//! Colors are drawn uniformly from the palette, independent of shape.

use crate::types::{ColorTag, ShapeKind, PALETTE_SIZE, SHAPE_FAMILIES};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draw the next shape: 5-way family pick, then a mirror coin where one exists
pub fn random_shape(rng: &mut SimpleRng) -> ShapeKind {
    match rng.next_range(SHAPE_FAMILIES) {
        0 => {
            if rng.next_range(2) == 0 {
                ShapeKind::S
            } else {
                ShapeKind::SMirrored
            }
        }
        1 => ShapeKind::T,
        2 => ShapeKind::O,
        3 => ShapeKind::I,
        4 => {
            if rng.next_range(2) == 0 {
                ShapeKind::L
            } else {
                ShapeKind::LMirrored
            }
        }
        _ => unreachable!(),
    }
}

/// Draw a color uniformly from the palette
pub fn random_color(rng: &mut SimpleRng) -> ColorTag {
    match rng.next_range(PALETTE_SIZE) {
        0 => ColorTag::Red,
        1 => ColorTag::Blue,
        2 => ColorTag::Magenta,
        3 => ColorTag::Green,
        4 => ColorTag::Yellow,
        _ => unreachable!(),
    }
}
