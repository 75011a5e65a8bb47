//! Terminal runner (default binary).
//!
//! Owns the clock and the terminal: polls keys with a frame-interval timeout,
//! feeds monotonic timestamps to the gravity tick, and redraws only what
//! changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState, RandSource};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cfg = Config::from_env();
    if logging::init_from_config(&cfg)? {
        info!("blockfall starting: {:?}", cfg);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cfg);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("runner failed: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, cfg: &Config) -> Result<()> {
    let rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = GameState::with_source(RandSource::new(rng));
    if cfg.autostart {
        game.start();
    }

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let frame = Duration::from_millis(cfg.frame_ms);

    loop {
        game.tick(epoch.elapsed().as_millis() as u64);

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Wait up to one frame for input, then drain whatever else is queued.
        let mut timeout = frame;
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}
