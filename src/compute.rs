/// Pure game-logic functions.
///
/// Every public function takes immutable references to the current
/// state and returns brand-new values. There is no I/O, no globals
/// and no randomness, so tests can drive the simulation one frame at
/// a time and inspect everything.

use crate::collision::point_in_rect;
use crate::config::{
    ENEMY_HALF_HEIGHT, ENEMY_HALF_WIDTH, GRID_COLS, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_ROWS,
    GRID_SPACING, LEVEL_SPEED, LEVEL_X_MOVEMENT, LEVEL_Y_STEP, PLAYER_ACCEL, PLAYER_DECEL,
    PLAYER_MAX_SPEED, PLAYER_Y, SCREEN_W, SHOOT_RADIUS, SHOOT_SPEED,
};
use crate::entities::{
    Enemy, Formation, GameState, GameStatus, InputSnapshot, Player, Projectile,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: the ship centred on its baseline and
/// the full enemy grid parked in its starting corner. The grid is a
/// flat row-major list; iteration order never matters for the
/// choreography, only for collision tie-breaks.
pub fn init_state() -> GameState {
    let mut enemies = Vec::with_capacity(GRID_COLS * GRID_ROWS);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            enemies.push(Enemy {
                x: GRID_ORIGIN_X + col as f32 * GRID_SPACING,
                y: GRID_ORIGIN_Y + row as f32 * GRID_SPACING,
            });
        }
    }
    GameState {
        player: Player {
            x: SCREEN_W / 2.0,
            y: PLAYER_Y,
            speed: 0.0,
            shooting: false,
            shots: Vec::new(),
        },
        formation: Formation {
            enemies,
            tracker: 0.0,
            dir: -1.0,
        },
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Advance the ship by one frame: accelerate toward the held
/// direction, glide to a stop when released, move, clamp to the
/// screen, run the fire latch and advance every live shot.
pub fn update_player(player: &Player, input: &InputSnapshot) -> Player {
    // Acceleration toward the held direction, deceleration toward
    // zero otherwise. Left is applied before right, so holding both
    // nets out to no change.
    let mut speed = player.speed;
    if input.left {
        speed = (speed - PLAYER_ACCEL).max(-PLAYER_MAX_SPEED);
    } else if speed < 0.0 {
        speed = (speed + PLAYER_DECEL).min(0.0);
    }
    if input.right {
        speed = (speed + PLAYER_ACCEL).min(PLAYER_MAX_SPEED);
    } else if speed > 0.0 {
        speed = (speed - PLAYER_DECEL).max(0.0);
    }

    // Movement, with an inelastic stop at either wall.
    let mut x = player.x + speed;
    if x < 0.0 {
        x = 0.0;
        speed = 0.0;
    } else if x > SCREEN_W {
        x = SCREEN_W;
        speed = 0.0;
    }

    // Fire latch: one shot per press-release cycle. Holding the key
    // never auto-repeats; the latch only re-arms on release.
    let mut shooting = player.shooting;
    let mut shots = player.shots.clone();
    if !shooting && input.shoot {
        shooting = true;
        shots.push(Projectile { x, y: player.y });
    } else if shooting && !input.shoot {
        shooting = false;
    }

    // Advance shots; drop any that is fully above the top edge.
    let shots: Vec<Projectile> = shots
        .iter()
        .filter_map(|s| {
            let y = s.y - SHOOT_SPEED;
            if y < -SHOOT_RADIUS {
                None
            } else {
                Some(Projectile { x: s.x, y })
            }
        })
        .collect();

    Player {
        x,
        y: player.y,
        speed,
        shooting,
        shots,
    }
}

// ── Formation ────────────────────────────────────────────────────────────────

/// Advance the grid choreography by one frame. Either the sweep
/// distance has run out, in which case the whole grid drops one step
/// and reverses, or the grid slides sideways and the tracker counts
/// the distance off. Every enemy receives the identical displacement.
pub fn update_formation(formation: &Formation) -> Formation {
    if formation.tracker <= 0.0 {
        Formation {
            enemies: formation
                .enemies
                .iter()
                .map(|e| Enemy {
                    x: e.x,
                    y: e.y + LEVEL_Y_STEP,
                })
                .collect(),
            tracker: LEVEL_X_MOVEMENT,
            dir: -formation.dir,
        }
    } else {
        Formation {
            enemies: formation
                .enemies
                .iter()
                .map(|e| Enemy {
                    x: e.x + LEVEL_SPEED * formation.dir,
                    y: e.y,
                })
                .collect(),
            tracker: formation.tracker - LEVEL_SPEED,
            dir: formation.dir,
        }
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the whole simulation by one frame.
///
/// Order matters: the player and the formation move first, then
/// collisions are resolved against the fresh positions. The scans
/// walk the new collections by index and removals are applied
/// afterwards as an index filter, so a hit in mid-scan can never
/// invalidate the iteration.
pub fn tick(state: &GameState, input: &InputSnapshot) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Movement ──────────────────────────────────────────────────────────
    let player = update_player(&state.player, input);
    let formation = update_formation(&state.formation);

    // ── 2. Collision scan ────────────────────────────────────────────────────
    let mut status = GameStatus::Playing;
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut used_shots: Vec<usize> = Vec::new();

    for (ei, enemy) in formation.enemies.iter().enumerate() {
        let left = enemy.x - ENEMY_HALF_WIDTH;
        let right = enemy.x + ENEMY_HALF_WIDTH;
        let top = enemy.y - ENEMY_HALF_HEIGHT;
        let bottom = enemy.y + ENEMY_HALF_HEIGHT;

        // Enemy reached the ship's baseline.
        if bottom >= PLAYER_Y {
            status = GameStatus::GameOver;
            break;
        }

        // Enemy box swallowed the ship's apex.
        if point_in_rect(player.x, player.y, left, right, top, bottom) {
            status = GameStatus::GameOver;
            break;
        }

        // First unused shot inside the box takes the enemy with it;
        // one shot destroys at most one enemy per frame.
        for (si, shot) in player.shots.iter().enumerate() {
            if used_shots.contains(&si) {
                continue;
            }
            if point_in_rect(shot.x, shot.y, left, right, top, bottom) {
                killed_enemies.push(ei);
                used_shots.push(si);
                break;
            }
        }
    }

    // ── 3. Apply removals ────────────────────────────────────────────────────
    let enemies: Vec<Enemy> = formation
        .enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    let shots: Vec<Projectile> = player
        .shots
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_shots.contains(i))
        .map(|(_, s)| s.clone())
        .collect();

    GameState {
        player: Player { shots, ..player },
        formation: Formation { enemies, ..formation },
        status,
        frame: state.frame + 1,
    }
}
