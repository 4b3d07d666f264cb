//! Brick layout generation
//!
//! Bricks sit on a fixed grid across the top of the arena. A layout is either
//! a literal pattern or a seeded random draw of distinct grid cells.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use super::state::{Arena, Brick};
use crate::consts::*;

/// Which brick layout a new game starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutKind {
    /// The built-in pattern
    Fixed,
    /// `count` distinct random cells with random durability
    Random { count: usize },
}

impl Default for LayoutKind {
    fn default() -> Self {
        LayoutKind::Random {
            count: DEFAULT_BRICK_COUNT,
        }
    }
}

/// Durability per row of the built-in pattern, top row first
const FIXED_ROWS: [u8; 5] = [5, 4, 3, 2, 1];

/// Build the brick occupying grid cell (`column`, `row`)
pub fn cell_brick(arena: &Arena, column: usize, row: usize, durability: u8) -> Brick {
    let cell_width = arena.width / GRID_COLUMNS as f32;
    let cell_height = BRICK_HEIGHT + BRICK_GAP;
    let x = column as f32 * cell_width + BRICK_GAP / 2.0;
    let y = BRICK_TOP_OFFSET + row as f32 * cell_height;

    Brick::new(
        glam::Vec2::new(x, y),
        cell_width - BRICK_GAP,
        BRICK_HEIGHT,
        durability,
    )
}

/// The built-in pattern: full rows, tougher toward the top
pub fn fixed_layout(arena: &Arena) -> Vec<Brick> {
    FIXED_ROWS
        .iter()
        .enumerate()
        .flat_map(|(row, &durability)| {
            (0..GRID_COLUMNS).map(move |column| cell_brick(arena, column, row, durability))
        })
        .collect()
}

/// Draw `count` distinct grid cells without replacement
///
/// Each brick gets a durability in `MIN_DURABILITY..=MAX_DURABILITY`. Bricks
/// come back in row-major cell order so iteration is stable for a seed.
pub fn random_layout<R: Rng + ?Sized>(rng: &mut R, arena: &Arena, count: usize) -> Vec<Brick> {
    let cells = GRID_COLUMNS * GRID_ROWS;
    let count = if count > cells {
        log::warn!("Requested {} bricks but the grid holds {}, clamping", count, cells);
        cells
    } else {
        count
    };

    let mut picked = index::sample(rng, cells, count).into_vec();
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|cell| {
            let durability = rng.random_range(MIN_DURABILITY..=MAX_DURABILITY);
            cell_brick(arena, cell % GRID_COLUMNS, cell / GRID_COLUMNS, durability)
        })
        .collect()
}

/// Generate the starting bricks for a layout
pub fn generate_layout<R: Rng + ?Sized>(rng: &mut R, arena: &Arena, kind: LayoutKind) -> Vec<Brick> {
    let bricks = match kind {
        LayoutKind::Fixed => fixed_layout(arena),
        LayoutKind::Random { count } => random_layout(rng, arena, count),
    };
    log::info!("Generated {:?} layout with {} bricks", kind, bricks.len());
    bricks
}
