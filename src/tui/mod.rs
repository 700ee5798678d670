//! TUI module for interactive tree editing.

pub mod app;
pub mod event;
pub mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::config::TuiConfig;
use crate::error::Result;

pub use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive editor until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub fn run(mut app: App, config: &TuiConfig) -> Result<()> {
    let mut terminal = setup_terminal(config.mouse)?;
    let result = event_loop(&mut terminal, &mut app, Duration::from_millis(config.tick_rate_ms));
    restore_terminal(&mut terminal, config.mouse)?;
    result
}

fn setup_terminal(mouse: bool) -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen).and_then(|()| {
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(())
    });
    if let Err(err) = entered {
        // Undo whatever succeeded before reporting the failure.
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        return Err(err);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore every terminal setting, returning the first failure.
fn restore_terminal(terminal: &mut Term, mouse: bool) -> io::Result<()> {
    let raw = disable_raw_mode();
    let capture = if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
    } else {
        Ok(())
    };
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    for result in [raw, capture, screen, cursor] {
        if let Err(err) = result {
            tracing::warn!(%err, "Failed to restore terminal");
            return Err(err);
        }
    }
    Ok(())
}

fn event_loop(terminal: &mut Term, app: &mut App, tick_rate: Duration) -> Result<()> {
    tracing::debug!(nodes = app.forest.len(), "Entering event loop");
    while !app.should_quit {
        let size = terminal.size()?;
        terminal.draw(|frame| ui::render(app, frame))?;

        let area = Rect::new(0, 0, size.width, size.height);
        event::handle_events(app, tick_rate, area)?;
        app.tick(Instant::now());
    }
    tracing::debug!("Leaving event loop");
    Ok(())
}
