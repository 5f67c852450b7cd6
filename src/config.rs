/// Tuning constants for the whole game.
///
/// Simulation coordinates are logical screen units (512 × 512, origin
/// top-left, y growing downward); speeds are units per frame at the
/// fixed 60 Hz cadence. The display layer projects logical units onto
/// whatever cell grid the terminal provides.

use std::time::Duration;

// ── Screen & pacing ───────────────────────────────────────────────────────────

pub const SCREEN_W: f32 = 512.0;
pub const SCREEN_H: f32 = 512.0;

/// Frame budget of the fixed-rate loop (≈60 FPS).
pub const FRAME: Duration = Duration::from_micros(16_667);

// ── Player ────────────────────────────────────────────────────────────────────

/// Fixed baseline row the ship sits on; an enemy reaching it ends the game.
pub const PLAYER_Y: f32 = 462.0;
pub const PLAYER_HALF_WIDTH: f32 = 10.0;
pub const PLAYER_HALF_HEIGHT: f32 = 11.0;

pub const PLAYER_MAX_SPEED: f32 = 7.0;
pub const PLAYER_ACCEL: f32 = 0.4;
pub const PLAYER_DECEL: f32 = 0.8;

// ── Shots ─────────────────────────────────────────────────────────────────────

pub const SHOOT_RADIUS: f32 = 2.0;
pub const SHOOT_SPEED: f32 = 5.0;

// ── Enemies & formation ───────────────────────────────────────────────────────

pub const ENEMY_HALF_WIDTH: f32 = 12.0;
pub const ENEMY_HALF_HEIGHT: f32 = 10.0;

pub const GRID_COLS: usize = 12;
pub const GRID_ROWS: usize = 6;
pub const GRID_ORIGIN_X: f32 = 64.0;
pub const GRID_ORIGIN_Y: f32 = 64.0;
pub const GRID_SPACING: f32 = 32.0;

/// Horizontal distance the grid sweeps between vertical steps.
pub const LEVEL_X_MOVEMENT: f32 = 60.0;
/// Vertical drop applied when the sweep distance runs out.
pub const LEVEL_Y_STEP: f32 = 15.0;
/// Horizontal units the grid moves per frame while sweeping.
pub const LEVEL_SPEED: f32 = 1.0;
