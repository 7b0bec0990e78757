//! Per-frame simulation driver
//!
//! `advance` composes the integrator, spawner, resolver, and progression
//! bookkeeping in a fixed order, once per scheduled frame. Collision
//! resolution runs after all motion so it never sees stale positions;
//! the spawn gate runs before asteroid motion, so a newly spawned asteroid
//! gets its first motion step and is collision-eligible in the same tick.

use glam::Vec2;

use super::state::{Phase, Projectile, SimState};
use super::{collision, motion, spawn};
use crate::consts::*;

/// Input snapshot for a single tick.
///
/// Movement and fire reflect held keys; pause and restart are one-shot
/// commands the frontend raises for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub pause: bool,
    pub restart: bool,
}

/// What happened during one tick; consumed by rendering and persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub score_delta: u64,
    pub life_lost: bool,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// Advance the simulation by `delta_ms` of real time.
///
/// While paused or game over this is a no-op beyond command handling: no
/// entity moves, no accumulator advances, and the returned events are empty.
pub fn advance(state: &mut SimState, delta_ms: f64, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if input.pause {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => Phase::GameOver,
        };
    }
    if input.restart && state.phase == Phase::GameOver {
        state.reset();
        log::info!("simulation restarted");
        return events;
    }
    if state.phase != Phase::Running {
        return events;
    }

    // A suspended frontend can hand us a huge delta on resume; clamp it so a
    // single tick never simulates an unbounded time jump.
    let delta_ms = delta_ms.clamp(0.0, MAX_DELTA_MS);
    let delta_sec = (delta_ms / FRAME_MS) as f32;
    state.time_ms += delta_ms;

    motion::integrate_stars(state);
    motion::integrate_ship(state, input, delta_sec);
    fire_projectile(state, input);
    motion::integrate_projectiles(state, delta_sec);

    state.spawn_timer_ms += delta_ms;
    if state.spawn_timer_ms > spawn::spawn_threshold_ms(state.level)
        && state.asteroids.len() < MAX_ASTEROIDS
    {
        let asteroid = spawn::asteroid(&mut state.rng, state.level);
        log::debug!("asteroid spawned: size {:.1}", asteroid.size);
        state.asteroids.push(asteroid);
        state.spawn_timer_ms = 0.0;
    }

    motion::integrate_asteroids(state, delta_sec);
    motion::integrate_particles(state, delta_sec);
    motion::decay_invulnerability(state, delta_sec);

    collision::resolve(state, &mut events);

    // Level progression only while the run survived this tick.
    if state.phase == Phase::Running {
        state.level_timer_ms += delta_ms;
        if state.level_timer_ms > LEVEL_UP_MS {
            state.level += 1;
            state.level_timer_ms = 0.0;
            events.leveled_up = true;
            log::info!("level up: {}", state.level);
        }
    }

    events
}

/// Fire a projectile from the ship's nose, rate-limited to one per 200 ms
/// of accumulated sim time.
fn fire_projectile(state: &mut SimState, input: &TickInput) {
    if input.fire && state.time_ms - state.last_shot_ms > FIRE_COOLDOWN_MS {
        state.projectiles.push(Projectile {
            pos: Vec2::new(
                state.ship.pos.x + state.ship.width / 2.0 - 2.5,
                state.ship.pos.y,
            ),
            velocity: PROJECTILE_SPEED,
        });
        state.last_shot_ms = state.time_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: &mut SimState, delta_ms: f64) -> TickEvents {
        advance(state, delta_ms, &TickInput::default())
    }

    #[test]
    fn pause_toggles_and_freezes_everything() {
        let mut state = SimState::new(1);
        advance(
            &mut state,
            16.0,
            &TickInput {
                pause: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, Phase::Paused);

        let frozen = state.clone();
        for delta in [1.0, 16.0, 500.0] {
            let events = tick(&mut state, delta);
            assert_eq!(events, TickEvents::default());
            assert_eq!(state, frozen);
        }

        advance(
            &mut state,
            16.0,
            &TickInput {
                pause: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn game_over_ticks_are_noops_until_restart() {
        let mut state = SimState::new(1);
        state.phase = Phase::GameOver;
        state.lives = 0;

        let frozen = state.clone();
        for _ in 0..5 {
            let events = tick(&mut state, 16.0);
            assert_eq!(events, TickEvents::default());
            assert_eq!(state, frozen);
        }

        advance(
            &mut state,
            16.0,
            &TickInput {
                restart: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn restart_is_ignored_while_running() {
        let mut state = SimState::new(1);
        state.score = 99;
        advance(
            &mut state,
            16.0,
            &TickInput {
                restart: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.score, 99);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn level_timer_at_29999_does_not_level_up_but_30001_does() {
        let mut state = SimState::new(1);

        state.level_timer_ms = 29_999.0;
        let events = tick(&mut state, 0.0);
        assert!(!events.leveled_up);
        assert_eq!(state.level, 1);

        state.level_timer_ms = 30_001.0;
        let events = tick(&mut state, 0.0);
        assert!(events.leveled_up);
        assert_eq!(state.level, 2);
        assert_eq!(state.level_timer_ms, 0.0);
    }

    #[test]
    fn full_asteroid_field_suppresses_spawning() {
        let mut state = SimState::new(1);
        for _ in 0..MAX_ASTEROIDS {
            let a = spawn::asteroid(&mut state.rng, 1);
            state.asteroids.push(a);
        }
        state.spawn_timer_ms = 1_000_000.0;

        tick(&mut state, 16.0);
        assert_eq!(state.asteroids.len(), MAX_ASTEROIDS);
        // Accumulator keeps running; the next free slot spawns immediately.
        state.asteroids.truncate(MAX_ASTEROIDS - 1);
        tick(&mut state, 16.0);
        assert_eq!(state.asteroids.len(), MAX_ASTEROIDS);
        assert_eq!(state.spawn_timer_ms, 0.0);
    }

    #[test]
    fn fire_is_rate_limited_to_one_shot_per_cooldown() {
        let mut state = SimState::new(1);
        let firing = TickInput {
            fire: true,
            ..TickInput::default()
        };

        advance(&mut state, 16.0, &firing);
        assert_eq!(state.projectiles.len(), 1);

        // 10 more frames inside the cooldown window
        for _ in 0..10 {
            advance(&mut state, 16.0, &firing);
        }
        assert_eq!(state.projectiles.len(), 1);

        // Past the 200 ms window a second shot goes out
        for _ in 0..5 {
            advance(&mut state, 16.0, &firing);
        }
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn huge_delta_is_clamped() {
        let mut state = SimState::new(1);
        tick(&mut state, 60_000.0);
        assert_eq!(state.time_ms, MAX_DELTA_MS);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn ship_moves_and_stays_inside_the_canvas() {
        let mut state = SimState::new(1);
        let right = TickInput {
            right: true,
            ..TickInput::default()
        };
        for _ in 0..2_000 {
            tick_with(&mut state, &right);
            assert!(state.ship.pos.x <= CANVAS_WIDTH - state.ship.width);
        }
        assert_eq!(state.ship.pos.x, CANVAS_WIDTH - state.ship.width);
    }

    fn tick_with(state: &mut SimState, input: &TickInput) {
        advance(state, 16.0, input);
    }
}
