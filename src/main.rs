//! Terminal blockfall runner (default binary).
//!
//! Fixed-timestep loop: key events are drained into the session's action
//! queue, each logical frame advances the session once, then the composite
//! board is drawn and the jukebox is kept busy.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockfall::audio::{Jukebox, Playlist, RodioBackend};
use blockfall::config::AppConfig;
use blockfall::input::InputHandler;
use blockfall::logging;
use blockfall::session::{FrameClock, Session};
use blockfall::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init(path, config.log_level)?;
    }
    log::info!("starting with {config:?}");

    let mut jukebox = start_music(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, jukebox.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("exiting");
    result
}

/// A configured but unreadable music directory is fatal; a missing output
/// device only silences the game.
fn start_music(config: &AppConfig) -> Result<Option<Jukebox<RodioBackend>>> {
    let Some(dir) = &config.music_dir else {
        return Ok(None);
    };
    let playlist = Playlist::from_dir(dir).context("failed to load music")?;

    match RodioBackend::try_default() {
        Ok(backend) => Ok(Some(Jukebox::new(backend, playlist, config.music_volume))),
        Err(err) => {
            log::warn!("{err}; running without music");
            Ok(None)
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: &AppConfig,
    mut jukebox: Option<&mut Jukebox<RodioBackend>>,
) -> Result<()> {
    let mut session = Session::new(&config.session);
    log::info!("game 1 seeded with {}", session.seed());

    let view = GameView::default();
    let mut input = InputHandler::new().with_release_events(term.reports_key_release());
    log::info!("key release events: {}", term.reports_key_release());
    let mut fb = FrameBuffer::new(0, 0);

    let mut clock = FrameClock::new(config.session.frame_duration());
    let mut last = Instant::now();
    let mut dirty = true;

    loop {
        // Drain pending input without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = input.handle_key_event(key) {
                        if !session.queue(action) {
                            log::debug!("input queue full, dropped {action:?}");
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }
        if input.quit_requested() {
            return Ok(());
        }

        let now = Instant::now();
        clock.accumulate(now - last);
        last = now;

        while clock.try_step() {
            input.update();
            session.set_soft_drop(input.soft_drop());

            let report = session.update(clock.frame());
            if report.restarted {
                log::info!("game {} seeded with {}", session.episode() + 1, session.seed());
            }
            dirty = true;
        }

        if let Some(jukebox) = jukebox.as_deref_mut() {
            jukebox.ensure_playing();
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let world = session.world();
            let status = StatusView {
                rows_cleared: world.rows_cleared(),
                pieces_locked: world.pieces_locked(),
                games_played: session.episode(),
                best_rows_cleared: session.best_rows_cleared(),
                soft_drop: session.soft_drop(),
                game_over: !world.is_active(),
            };
            view.render_into(&session.composite_board(), &status, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Sleep until the next frame is due or a key arrives.
        event::poll(clock.time_to_next_frame())?;
    }
}
