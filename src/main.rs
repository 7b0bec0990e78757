//! Starfall binary: terminal frontend and frame loop

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use starfall::highscores::PersistedBest;
use starfall::render::Renderer;
use starfall::sim::{self, Phase, SimState, TickInput};
use starfall::HighScores;

/// Target frame cadence
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("starting with seed {seed}");

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut stdout, seed);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, seed: u64) -> io::Result<()> {
    let mut state = SimState::new(seed);
    let mut scores = HighScores::load();
    let mut best = PersistedBest::new(&scores);
    let mut renderer = Renderer::new();

    let mut last_frame: Option<Instant> = None;

    loop {
        let mut input = TickInput::default();
        if !poll_events(&mut input)? {
            break;
        }

        // First frame advances zero time; after that, measured wall time.
        let now = Instant::now();
        let delta_ms = last_frame
            .map(|t| now.duration_since(t).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        last_frame = Some(now);

        let events = sim::advance(&mut state, delta_ms, &input);
        if events.game_over {
            record_run(&mut scores, &state);
            best.advance(state.score);
        } else if best.advance(state.score) {
            // New best mid-run: write a provisional board so a crash or a
            // killed terminal cannot lose it.
            scores.with_run(state.score, state.level, unix_now()).save();
        }

        renderer.draw(out, &state, scores.top_score().unwrap_or(0))?;

        let elapsed = now.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }

    // A quit mid-run still records the score.
    if state.phase != Phase::GameOver {
        record_run(&mut scores, &state);
    }
    Ok(())
}

/// Drain all pending terminal events into this tick's input snapshot.
/// Returns false when the player quit.
///
/// Terminals rarely report key releases, so movement and fire are driven by
/// press/repeat events and the OS key-repeat rate rather than held state.
fn poll_events(input: &mut TickInput) -> io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('a') => input.left = true,
            KeyCode::Right | KeyCode::Char('d') => input.right = true,
            KeyCode::Char(' ') | KeyCode::Enter => input.fire = true,
            KeyCode::Char('p') => input.pause = true,
            KeyCode::Char('r') => input.restart = true,
            KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
            _ => {}
        }
    }
    Ok(true)
}

fn record_run(scores: &mut HighScores, state: &SimState) {
    if let Some(rank) = scores.add_score(state.score, state.level, unix_now()) {
        log::info!("score {} entered the leaderboard at rank {rank}", state.score);
        scores.save();
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
