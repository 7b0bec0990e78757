//! Collision detection and damage resolution
//!
//! Circle-vs-circle center distance tests only, no bounding boxes. Each
//! asteroid resolves to at most one outcome per tick: projectile hit, ship
//! collision, or bottom-edge escape, checked in that priority order. A ship
//! collision ends the pass for the tick, so nothing scores after the hit.

use glam::Vec2;

use super::spawn;
use super::state::{ParticleColor, Phase, Ship, SimState};
use super::tick::TickEvents;
use crate::consts::*;

/// Euclidean overlap test between two circles.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Resolve projectile-asteroid hits, ship-asteroid collisions, and escapes.
///
/// Score and life changes are applied to the state and mirrored into
/// `events` for the frontend.
pub fn resolve(state: &mut SimState, events: &mut TickEvents) {
    let mut i = 0;
    while i < state.asteroids.len() {
        let center = state.asteroids[i].center();
        let radius = state.asteroids[i].radius();

        // Projectile hits take priority; the first match in list order wins,
        // so one projectile scores per asteroid per tick.
        if let Some(j) = state
            .projectiles
            .iter()
            .position(|p| circles_overlap(p.center(), PROJECTILE_RADIUS, center, radius))
        {
            let gained = state.asteroids[i].size.floor() as u64;
            state.projectiles.remove(j);
            state.asteroids.remove(i);
            let burst = spawn::debris_burst(&mut state.rng, center, ParticleColor::Destroyed);
            state.particles.extend(burst);
            state.score += gained;
            events.score_delta += gained;
            continue;
        }

        // Ship collision, unless the invulnerability window is open.
        if !state.ship.invulnerable
            && circles_overlap(state.ship.center(), state.ship.width / 2.0, center, radius)
        {
            let ship_center = state.ship.center();
            state.asteroids.remove(i);
            let burst = spawn::debris_burst(&mut state.rng, ship_center, ParticleColor::Damage);
            state.particles.extend(burst);
            state.lives -= 1;
            events.life_lost = true;
            if state.lives == 0 {
                state.phase = Phase::GameOver;
                events.game_over = true;
                log::info!("game over at score {}", state.score);
            } else {
                state.ship = Ship::spawn();
            }
            // Remaining asteroids wait for the next tick.
            break;
        }

        // Escaped off the bottom edge: silent removal, no score, no penalty.
        if state.asteroids[i].pos.y > CANVAS_HEIGHT {
            state.asteroids.remove(i);
            continue;
        }

        i += 1;
    }
}
