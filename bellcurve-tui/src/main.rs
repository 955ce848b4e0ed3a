//! BellCurve TUI — interactive normal-distribution explorer.
//!
//! A histogram of freshly drawn samples with the theoretical density curve
//! overlaid. Adjust mean/std/min/max through the numeric fields or by
//! dragging the ◆ anchors on the chart; every change regenerates the whole
//! chart from a consistent parameter snapshot.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use bellcurve_core::SeedPlan;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bellcurve")
        .join("state.json");

    // Load persisted params + seed
    let persisted = persistence::load(&state_path);
    let mut app = AppState::new(persisted.params, SeedPlan::new(persisted.master_seed));

    // Setup terminal (mouse capture feeds the anchor drag handlers)
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render the current frame snapshot
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
