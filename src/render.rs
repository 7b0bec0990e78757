//! Terminal renderer
//!
//! Draws the simulation into an in-memory character grid, then flushes the
//! grid to the terminal with batched crossterm commands. The 800x600 canvas
//! scales onto an 80x30 cell playfield under a one-row HUD; the renderer
//! only reads `SimState` and never mutates it.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::consts::*;
use crate::sim::{Asteroid, ParticleColor, Phase, Ship, SimState};

/// Playfield cells horizontally
const GRID_WIDTH: usize = 80;
/// Playfield cells vertically, below the HUD row
const GRID_HEIGHT: usize = 30;

pub struct Renderer {
    grid: Vec<Vec<char>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            grid: vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    /// Render one frame to `out`. `session_best` is the best score known
    /// outside the current run.
    pub fn draw(
        &mut self,
        out: &mut impl Write,
        state: &SimState,
        session_best: u64,
    ) -> io::Result<()> {
        self.compose(state);

        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        let high = session_best.max(state.score);
        queue!(
            out,
            Print(format!(
                "Score: {:<8} High: {:<8} Level: {:<3} Lives: {}",
                state.score, high, state.level, state.lives
            ))
        )?;

        for (row, cells) in self.grid.iter().enumerate() {
            queue!(
                out,
                MoveTo(0, row as u16 + 1),
                Print(cells.iter().collect::<String>())
            )?;
        }
        out.flush()
    }

    fn compose(&mut self, state: &SimState) {
        for row in &mut self.grid {
            row.fill(' ');
        }

        for star in &state.stars {
            let glyph = if star.size >= 2.0 { '+' } else { '.' };
            self.plot(star.pos.x, star.pos.y, glyph);
        }

        for p in &state.particles {
            let glyph = match p.color {
                ParticleColor::Destroyed => {
                    if p.life * p.decay > 20.0 {
                        '*'
                    } else {
                        '\''
                    }
                }
                ParticleColor::Damage => 'x',
            };
            self.plot(p.pos.x, p.pos.y, glyph);
        }

        for shot in &state.projectiles {
            let c = shot.center();
            self.plot(c.x, c.y, '|');
        }

        for a in &state.asteroids {
            self.draw_asteroid(a);
        }

        self.draw_ship(&state.ship, state.time_ms);

        match state.phase {
            Phase::Paused => self.overlay(&["PAUSED", "press p to resume"]),
            Phase::GameOver => self.overlay(&[
                "GAME OVER",
                &format!("final score {}", state.score),
                "press r to restart, q to quit",
            ]),
            Phase::Running => {}
        }
    }

    fn draw_asteroid(&mut self, a: &Asteroid) {
        let c = a.center();
        let glyph = if a.size >= 45.0 {
            '@'
        } else if a.size >= 30.0 {
            'O'
        } else {
            'o'
        };
        self.plot(c.x, c.y, glyph);
        // Larger rocks get a second cell so their footprint reads on screen.
        if a.size >= 45.0 {
            self.plot(c.x - a.radius() / 2.0, c.y, glyph);
            self.plot(c.x + a.radius() / 2.0, c.y, glyph);
        }
    }

    fn draw_ship(&mut self, ship: &Ship, time_ms: f64) {
        // Blink at ~5 Hz while the spawn shield is up.
        if ship.invulnerable && (time_ms / 100.0) as u64 % 2 == 0 {
            return;
        }
        let c = ship.center();
        self.plot(c.x, c.y - ship.height / 2.0, '^');
        self.plot(c.x - ship.width / 4.0, c.y + ship.height / 4.0, '/');
        self.plot(c.x + ship.width / 4.0, c.y + ship.height / 4.0, '\\');
    }

    /// Scale a canvas position onto the cell grid; off-canvas points are
    /// dropped.
    fn plot(&mut self, x: f32, y: f32, glyph: char) {
        let col = (x / CANVAS_WIDTH * GRID_WIDTH as f32) as i32;
        let row = (y / CANVAS_HEIGHT * GRID_HEIGHT as f32) as i32;
        if (0..GRID_WIDTH as i32).contains(&col) && (0..GRID_HEIGHT as i32).contains(&row) {
            self.grid[row as usize][col as usize] = glyph;
        }
    }

    /// Write centered lines over the middle of the playfield.
    fn overlay(&mut self, lines: &[&str]) {
        let top = GRID_HEIGHT / 2 - lines.len() / 2;
        for (i, line) in lines.iter().enumerate() {
            let start = GRID_WIDTH.saturating_sub(line.len()) / 2;
            for (j, ch) in line.chars().enumerate() {
                if start + j < GRID_WIDTH {
                    self.grid[top + i][start + j] = ch;
                }
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
