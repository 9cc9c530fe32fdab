//! TUI (Text User Interface): provider form and results table.

mod app;
mod constants;
mod draw;
mod handlers;

use crossterm::event::{self, Event};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::time::Duration;

use log::{info, warn};
use tokio::runtime::Runtime;

use crate::core::models;

use app::App;

use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Validate the key, then block the form on one fetch. The credential is dropped afterwards.
fn run_fetch(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rt: &Runtime,
) -> io::Result<()> {
    let Some(credential) = app.take_credential() else {
        return Ok(());
    };
    let provider = app.provider();

    app.begin_fetch();
    terminal.draw(|f| draw(f, app, f.area()))?;

    let result = rt.block_on(models::fetch_models(provider, &credential));
    match &result {
        Ok(records) => info!("Showing {} models from {}", records.len(), provider.name),
        Err(e) => warn!("Fetch from {} failed: {}", provider.name, e),
    }
    app.apply_result(result);

    // Drop keys pressed while the fetch blocked the loop.
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the blocking fetch.
pub fn run() -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Runtime::new()
        .map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if !event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match handlers::handle_key(key, &mut app) {
                HandleResult::Continue => {}
                HandleResult::Fetch => run_fetch(&mut terminal, &mut app, &rt)?,
                HandleResult::Break => break,
            }
        }
    }

    app.clear_secret();
    terminal.show_cursor()?;
    Ok(())
}
