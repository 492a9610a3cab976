//! Pumps the host tick cadence, user input, and rendering.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::time::{self, Duration};

use crate::app::App;
use crate::presentation::{terminal::Tui, ui};

/// Host tick rate: 20 ticks per second.
const TICK_INTERVAL_MS: u64 = 50;
const FRAME_INTERVAL_MS: u64 = 16;

pub async fn run(mut app: App, terminal: &mut Tui) -> Result<()> {
    let mut ticker = time::interval(Duration::from_millis(TICK_INTERVAL_MS));

    ui::render(terminal, &app)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                app.advance_tick();
            }
            _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                handle_input(&mut app)?;
                ui::render(terminal, &app)?;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("event loop stopped at tick {}", app.ticks());
    Ok(())
}

fn handle_input(app: &mut App) -> Result<()> {
    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }
    }
    Ok(())
}
