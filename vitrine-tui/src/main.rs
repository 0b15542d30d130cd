//! vitrine-tui - the interactive gallery host.
//!
//! A zone-grouped browser on the left, a live isolated preview on the
//! right. Searching narrows the browser to ranked results with the
//! matched text highlighted; a panicking exhibit turns its preview pane
//! into a failure placeholder and nothing else.

use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use vitrine_core::{within_boundary, MemoryPrefs, PreferenceStore, Registry};

mod app;
mod event;
mod prefs;
mod ui;

use app::App;
use event::{handle_key, poll_event, HandleResult};
use prefs::FilePrefs;

/// Log to a file: the terminal belongs to the gallery while we run.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let dir = dirs::home_dir()
        .context("could not determine home directory")?
        .join(".vitrine");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let log = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("vitrine-tui.log"))
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Contained exhibit panics are logged and swallowed; anything else
/// restores the terminal before the default hook prints.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if within_boundary() {
            tracing::warn!("contained exhibit panic: {info}");
            return;
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("failed to create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    install_panic_hook();

    let (data, factories) = vitrine_widgets::catalog();
    let registry = Registry::build(data, factories)
        .context("builtin catalog failed its integrity check")?;

    let prefs: Box<dyn PreferenceStore> = match FilePrefs::load_default() {
        Ok(prefs) => Box::new(prefs),
        Err(err) => {
            tracing::warn!("preferences unavailable, running in-memory: {err:#}");
            Box::new(MemoryPrefs::new())
        }
    };

    let mut terminal = init_terminal()?;
    let mut app = App::new(registry, prefs);
    let result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // 100ms poll keeps animated exhibits moving between keystrokes.
        match poll_event(Duration::from_millis(100))? {
            Some(Event::Key(key)) => match handle_key(app, key) {
                HandleResult::Quit => break,
                HandleResult::Continue => {}
            },
            Some(_) => {}
            None => app.tick(),
        }
        if app.should_quit {
            break;
        }
    }
    Ok(())
}
