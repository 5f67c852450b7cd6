/// All game entity types: pure data, no logic.

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Held-state of the three logical game keys, rebuilt once per frame
/// by the binary and passed read-only into the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A dot travelling straight up the screen at constant speed.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

// ── Player & enemies ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity, positive rightward.
    pub speed: f32,
    /// Fire latch: set when a shot spawns, cleared only when the fire
    /// key reads released, so one press yields exactly one shot.
    pub shooting: bool,
    pub shots: Vec<Projectile>,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
}

/// The enemy grid plus the shared sweep state that drives every
/// member in lockstep.
#[derive(Clone, Debug)]
pub struct Formation {
    pub enemies: Vec<Enemy>,
    /// Horizontal distance remaining before the next vertical step.
    pub tracker: f32,
    /// Sweep direction, −1.0 or +1.0.
    pub dir: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub formation: Formation,
    pub status: GameStatus,
    pub frame: u64,
}
