//! Terminal falling-block runner (default binary).
//!
//! Drives the core engine with a 0.5 s gravity tick and edge-triggered key
//! commands, renders snapshots through the framebuffer view, and prints the
//! final score after the terminal is restored.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::{GameEngine, RenderSnapshot, TickEvent};
use tui_blockfall::input::{map_key, should_quit};
use tui_blockfall::term::{GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameAction, GRAVITY_TICK_MS, LINE_FLASH_MS, LOCK_PAUSE_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();

    match result {
        Ok(score) => {
            println!("Game Over with a Score of: {}", score);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<u32> {
    let mut engine = GameEngine::new(wall_clock_seed());
    engine.start();

    let view = GameView::default();
    let mut snapshot = RenderSnapshot::default();

    let gravity = Duration::from_millis(GRAVITY_TICK_MS);
    let mut last_drop = Instant::now();

    loop {
        draw(term, &view, &engine, &mut snapshot)?;

        if engine.is_game_over() {
            // Leave the final board on screen for a moment before exiting.
            std::thread::sleep(Duration::from_millis(LOCK_PAUSE_MS));
            return Ok(engine.score());
        }

        // Poll input with a timeout against the gravity deadline.
        let timeout = gravity
            .checked_sub(last_drop.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(engine.score());
                    }
                    match map_key(key.code) {
                        Some(GameAction::SoftDrop) => {
                            drop_step(term, &view, &mut engine, &mut snapshot)?;
                        }
                        Some(action) => {
                            engine.apply_action(action);
                        }
                        None => {}
                    }
                }
            }
        }

        if last_drop.elapsed() >= gravity {
            last_drop = Instant::now();
            drop_step(term, &view, &mut engine, &mut snapshot)?;
        }
    }
}

/// One gravity/soft-drop step, including the flash-and-pause choreography
/// around locks: full rows flash white for 450 ms before removal, and every
/// lock is followed by a 500 ms pause.
fn drop_step(
    term: &mut TerminalRenderer,
    view: &GameView,
    engine: &mut GameEngine,
    snapshot: &mut RenderSnapshot,
) -> Result<()> {
    match engine.soft_drop_tick() {
        TickEvent::LinesPending(_) => {
            draw(term, view, engine, snapshot)?;
            std::thread::sleep(Duration::from_millis(LINE_FLASH_MS));
            engine.clear_pending_lines();
            draw(term, view, engine, snapshot)?;
            std::thread::sleep(Duration::from_millis(LOCK_PAUSE_MS));
        }
        TickEvent::Locked => {
            draw(term, view, engine, snapshot)?;
            std::thread::sleep(Duration::from_millis(LOCK_PAUSE_MS));
        }
        TickEvent::Descended | TickEvent::Idle => {}
    }
    Ok(())
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    engine: &GameEngine,
    snapshot: &mut RenderSnapshot,
) -> Result<()> {
    engine.snapshot_into(snapshot);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let fb = view.render(snapshot, Viewport::new(w, h));
    term.draw(&fb)
}
