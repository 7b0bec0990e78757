//! Starfall - a falling-asteroid arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, lifecycle)
//! - `render`: Terminal rendering of the simulation state
//! - `highscores`: Persistent high score leaderboard

pub mod highscores;
pub mod render;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Logical canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ship width/height (the ship is square)
    pub const SHIP_SIZE: f32 = 40.0;
    /// Horizontal ship speed, per reference frame
    pub const SHIP_SPEED: f32 = 6.0;
    /// Vertical offset of the ship row from the bottom edge
    pub const SHIP_BASELINE: f32 = 100.0;
    /// Invulnerability window after a ship reset, in frame units
    pub const INVULN_FRAMES: f32 = 120.0;

    /// Projectile speed, per reference frame
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Projectile collision radius
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Minimum sim time between shots (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 200.0;

    /// Asteroid population cap; spawning is silently suppressed above it
    pub const MAX_ASTEROIDS: usize = 15;
    /// Base spawn rate in the cadence threshold 1000 / (rate * (1 + 0.3 * level))
    pub const BASE_SPAWN_RATE: f64 = 0.02;

    /// Debris particles per burst
    pub const BURST_SIZE: usize = 20;

    /// Background star count
    pub const STAR_COUNT: usize = 100;

    /// Sim time per level increment (ms)
    pub const LEVEL_UP_MS: f64 = 30_000.0;

    /// Reference frame length: velocities are defined per 16 ms frame
    pub const FRAME_MS: f64 = 16.0;
    /// Ceiling on a single tick's elapsed time (ms), so a suspended frontend
    /// cannot tunnel an asteroid through the ship on resume
    pub const MAX_DELTA_MS: f64 = 100.0;

    /// Lives at the start of a game
    pub const START_LIVES: u32 = 3;
}
