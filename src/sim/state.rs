//! Simulation state and entity records
//!
//! Entities are plain value records with no behavior beyond a few position
//! helpers; construction and reset logic lives on `SimState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn;
use crate::consts::*;

/// Lifecycle phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active gameplay
    Running,
    /// Frozen by the pause toggle
    Paused,
    /// Run ended; only exit is an explicit restart
    GameOver,
}

/// The player ship. Anchored at its top-left corner, like every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub invulnerable: bool,
    /// Frame-unit countdown while invulnerable
    pub invuln_timer: f32,
}

impl Ship {
    /// Ship at the spawn point: centered, near the bottom, briefly invulnerable.
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(
                CANVAS_WIDTH / 2.0 - SHIP_SIZE / 2.0,
                CANVAS_HEIGHT - SHIP_BASELINE,
            ),
            width: SHIP_SIZE,
            height: SHIP_SIZE,
            invulnerable: true,
            invuln_timer: INVULN_FRAMES,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// An upward-moving projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Upward speed, per reference frame
    pub velocity: f32,
}

impl Projectile {
    /// Collision center (the middle of the rendered shot)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(2.5, 5.0)
    }
}

/// A falling asteroid
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Diameter in canvas units
    pub size: f32,
    /// Downward speed, per reference frame
    pub velocity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Asteroid {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// Debris color tag, consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    /// Asteroid destroyed by a projectile
    Destroyed,
    /// Ship took damage
    Damage,
}

/// A short-lived debris particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    /// Frame-unit countdown; removed at zero
    pub life: f32,
    /// Fade rate hint for the renderer
    pub decay: f32,
    pub color: ParticleColor,
    pub vel: Vec2,
}

/// Background star; cosmetic only, wraps vertically
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed, applied per tick
    pub speed: f32,
}

/// Complete simulation state, exclusively mutated by `tick::advance`
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub phase: Phase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    /// Accumulated sim time (ms)
    pub time_ms: f64,
    /// Sim time of the last shot, for fire rate limiting
    pub last_shot_ms: f64,
    /// Spawn-cadence accumulator (ms)
    pub spawn_timer_ms: f64,
    /// Level-up accumulator (ms)
    pub level_timer_ms: f64,
    /// Seeded RNG driving all procedural generation
    pub rng: Pcg32,
}

impl SimState {
    /// Fresh game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = spawn::star_field(&mut rng);
        Self {
            ship: Ship::spawn(),
            projectiles: Vec::new(),
            asteroids: Vec::new(),
            particles: Vec::new(),
            stars,
            phase: Phase::Running,
            score: 0,
            lives: START_LIVES,
            level: 1,
            time_ms: 0.0,
            // Negative so the very first shot is not rate-limited
            last_shot_ms: -FIRE_COOLDOWN_MS,
            spawn_timer_ms: 0.0,
            level_timer_ms: 0.0,
            rng,
        }
    }

    /// Reinitialize everything for a restart. The RNG stream continues, so
    /// only the star field differs from a brand-new game.
    pub fn reset(&mut self) {
        self.stars = spawn::star_field(&mut self.rng);
        self.ship = Ship::spawn();
        self.projectiles.clear();
        self.asteroids.clear();
        self.particles.clear();
        self.phase = Phase::Running;
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.time_ms = 0.0;
        self.last_shot_ms = -FIRE_COOLDOWN_MS;
        self.spawn_timer_ms = 0.0;
        self.level_timer_ms = 0.0;
    }
}
