//! Signin TUI - terminal sign-in form
//!
//! A Ratatui-based email/password form with client-side validation.
//! Submitting only emits a structured log event.

mod app;
mod config;
mod platform;
mod report;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::SignInConfig;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use report::LogReportSink;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_logging();

    let config = SignInConfig::load_or_init()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Box::new(LogReportSink::new()));
    tracing::info!(
        min_password_length = app.state.form.min_password_length(),
        "Starting signin-tui"
    );
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Exiting on error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("Exiting");
    Ok(())
}

/// Log to a file in the data dir since the UI owns the terminal.
/// Falls back to stderr if the file cannot be opened.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "signin_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file() -> Option<File> {
    let dir = SignInConfig::log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    // Owner-only, the log records submitted emails
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(dir.join("signin-tui.log")).ok()
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app.state))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Paste(text) => app.handle_paste(&text)?,
                // Layout is recomputed on the next draw
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
