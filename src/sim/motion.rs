//! Motion integration
//!
//! Velocities are defined per 16 ms reference frame; `delta_sec` normalizes
//! an arbitrary elapsed time onto that unit so the game plays the same at
//! any frame rate.

use rand::Rng;

use super::state::SimState;
use super::tick::TickInput;
use crate::consts::*;

/// Advance stars by one tick. Star speed is applied per tick rather than per
/// elapsed time; past the bottom edge a star wraps to the top at a new
/// random column.
pub fn integrate_stars(state: &mut SimState) {
    let SimState { stars, rng, .. } = state;
    for star in stars.iter_mut() {
        star.pos.y += star.speed;
        if star.pos.y > CANVAS_HEIGHT {
            star.pos.y = 0.0;
            star.pos.x = rng.random_range(0.0..CANVAS_WIDTH);
        }
    }
}

/// Move the ship per held input, then clamp to the canvas.
pub fn integrate_ship(state: &mut SimState, input: &TickInput, delta_sec: f32) {
    let ship = &mut state.ship;
    if input.left {
        ship.pos.x -= SHIP_SPEED * delta_sec;
    }
    if input.right {
        ship.pos.x += SHIP_SPEED * delta_sec;
    }
    ship.pos.x = ship.pos.x.clamp(0.0, CANVAS_WIDTH - ship.width);
}

/// Advance projectiles and drop any that left the top edge.
pub fn integrate_projectiles(state: &mut SimState, delta_sec: f32) {
    for p in &mut state.projectiles {
        p.pos.y -= p.velocity * delta_sec;
    }
    state.projectiles.retain(|p| p.pos.y >= 0.0);
}

/// Advance asteroid positions and rotations.
pub fn integrate_asteroids(state: &mut SimState, delta_sec: f32) {
    for a in &mut state.asteroids {
        a.pos.y += a.velocity * delta_sec;
        a.rotation += a.rotation_speed * delta_sec;
    }
}

/// Advance debris particles and drop the expired ones.
pub fn integrate_particles(state: &mut SimState, delta_sec: f32) {
    for p in &mut state.particles {
        p.life -= delta_sec;
        p.pos += p.vel * delta_sec;
    }
    state.particles.retain(|p| p.life > 0.0);
}

/// Count down the invulnerability window. The timer clamps at zero and the
/// flag clears once it gets there.
pub fn decay_invulnerability(state: &mut SimState, delta_sec: f32) {
    let ship = &mut state.ship;
    if ship.invulnerable {
        ship.invuln_timer = (ship.invuln_timer - delta_sec).max(0.0);
        if ship.invuln_timer <= 0.0 {
            ship.invulnerable = false;
        }
    }
}
