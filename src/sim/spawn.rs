//! Procedural generation: asteroids, debris bursts, the star field
//!
//! All sampling goes through the caller-supplied RNG so a seeded state
//! replays identically.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Asteroid, Particle, ParticleColor, Star};
use crate::consts::*;

/// Sample a new asteroid for the given difficulty level.
///
/// Higher levels widen the size range and raise the speed ceiling, so
/// difficulty increases monotonically with the level.
pub fn asteroid(rng: &mut Pcg32, level: u32) -> Asteroid {
    let level = level as f32;
    let max_size = (30.0 + level * 5.0).min(60.0);
    let min_size = (30.0 - level * 2.0).max(20.0);
    let size = rng.random_range(min_size..max_size);
    Asteroid {
        pos: Vec2::new(rng.random_range(0.0..CANVAS_WIDTH - size), -size),
        size,
        velocity: 1.0 + rng.random_range(0.0..2.0 + level * 0.5),
        rotation: rng.random_range(0.0..std::f32::consts::TAU),
        rotation_speed: rng.random_range(-0.05..0.05),
    }
}

/// Spawn cadence threshold in ms; shrinks as the level climbs.
pub fn spawn_threshold_ms(level: u32) -> f64 {
    1000.0 / (BASE_SPAWN_RATE * (1.0 + 0.3 * level as f64))
}

/// Fixed-size debris burst centered on a destructive collision.
pub fn debris_burst(rng: &mut Pcg32, center: Vec2, color: ParticleColor) -> Vec<Particle> {
    (0..BURST_SIZE)
        .map(|_| Particle {
            pos: center,
            size: rng.random_range(2.0..6.0),
            life: rng.random_range(20.0..50.0),
            decay: rng.random_range(0.5..1.0),
            color,
            vel: Vec2::new(rng.random_range(-1.5..1.5), rng.random_range(-1.5..1.5)),
        })
        .collect()
}

/// Random background star field covering the whole canvas.
pub fn star_field(rng: &mut Pcg32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..CANVAS_WIDTH),
                rng.random_range(0.0..CANVAS_HEIGHT),
            ),
            size: rng.random_range(1.0..3.0),
            speed: rng.random_range(0.2..0.7),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn asteroid_respects_level_one_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let a = asteroid(&mut rng, 1);
            assert!(a.size >= 28.0 && a.size < 35.0, "size {}", a.size);
            assert!(a.pos.x >= 0.0 && a.pos.x <= CANVAS_WIDTH - a.size);
            assert_eq!(a.pos.y, -a.size);
            assert!(a.velocity >= 1.0 && a.velocity < 3.5);
            assert!(a.rotation >= 0.0 && a.rotation < std::f32::consts::TAU);
            assert!(a.rotation_speed >= -0.05 && a.rotation_speed < 0.05);
        }
    }

    #[test]
    fn asteroid_ranges_saturate_at_high_levels() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let a = asteroid(&mut rng, 50);
            assert!(a.size >= 20.0 && a.size < 60.0, "size {}", a.size);
        }
    }

    #[test]
    fn spawn_threshold_shrinks_with_level() {
        assert!(spawn_threshold_ms(2) < spawn_threshold_ms(1));
        assert!(spawn_threshold_ms(10) < spawn_threshold_ms(2));
    }

    #[test]
    fn debris_burst_is_fixed_size_and_inherits_color() {
        let mut rng = Pcg32::seed_from_u64(42);
        let burst = debris_burst(&mut rng, Vec2::new(100.0, 100.0), ParticleColor::Damage);
        assert_eq!(burst.len(), BURST_SIZE);
        for p in &burst {
            assert_eq!(p.color, ParticleColor::Damage);
            assert_eq!(p.pos, Vec2::new(100.0, 100.0));
            assert!(p.size >= 2.0 && p.size < 6.0);
            assert!(p.life >= 20.0 && p.life < 50.0);
            assert!(p.decay >= 0.5 && p.decay < 1.0);
            assert!(p.vel.x >= -1.5 && p.vel.x < 1.5);
            assert!(p.vel.y >= -1.5 && p.vel.y < 1.5);
        }
    }

    #[test]
    fn star_field_fills_the_canvas() {
        let mut rng = Pcg32::seed_from_u64(42);
        let stars = star_field(&mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for s in &stars {
            assert!(s.pos.x >= 0.0 && s.pos.x < CANVAS_WIDTH);
            assert!(s.pos.y >= 0.0 && s.pos.y < CANVAS_HEIGHT);
        }
    }
}
