//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Single owner: the frontend holds one `SimState` and calls `advance`
//!   once per scheduled frame

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use state::{Asteroid, Particle, ParticleColor, Phase, Projectile, Ship, SimState, Star};
pub use tick::{TickEvents, TickInput, advance};
