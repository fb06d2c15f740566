use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

mod app;
mod cli;
mod model;
mod rclone;
mod storage;
mod ui;

use app::constants::FAREWELL_MESSAGE;
use app::{
    App, ExitReason, InputEvent, PickerOutcome, RcloneBackend, RemotePicker, SessionState,
};
use cli::Cli;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    panic::set_hook(Box::new(|_| restore_terminal()));

    match panic::catch_unwind(AssertUnwindSafe(|| run(cli))) {
        Ok(Ok(ExitReason::Quit)) => ExitCode::SUCCESS,
        Ok(Ok(ExitReason::Interrupted)) => {
            println!("\n{FAREWELL_MESSAGE}");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
        Err(payload) => {
            eprintln!("Error: {}", panic_message(payload.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitReason> {
    let log_path = if cli.no_log {
        None
    } else {
        storage::log_path().ok()
    };
    if let Some(path) = &log_path {
        app::prune_log_file(path);
    }

    rclone::probe(&cli.rclone)?;
    let remote = cli
        .remote
        .as_deref()
        .map(rclone::parse_remote_arg)
        .transpose()?;
    let remotes = match remote {
        Some(_) => vec![],
        None => rclone::list_remotes(&cli.rclone)?,
    };

    let _guard = TerminalGuard::acquire()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("create terminal")?;

    let remote_root = match remote {
        Some(remote) => remote,
        None => match run_picker(&mut terminal, RemotePicker::new(remotes))? {
            PickerOutcome::Chosen(remote) => remote,
            PickerOutcome::Cancelled => return Ok(ExitReason::Quit),
            PickerOutcome::Interrupted => return Ok(ExitReason::Interrupted),
            PickerOutcome::InvalidChoice(number) => {
                anyhow::bail!("Invalid selection: {number}")
            }
        },
    };

    let backend = Arc::new(RcloneBackend::new(cli.rclone.as_str()));
    let mut app = App::open(remote_root, cli.max_items, backend, log_path);
    run_browser(&mut terminal, &mut app)
}

fn run_browser(terminal: &mut Tui, app: &mut App) -> Result<ExitReason> {
    loop {
        terminal.draw(|frame| ui::draw_browser(frame, app))?;
        let Some(input) = next_input()? else {
            continue;
        };
        if let SessionState::Terminated(reason) = app.handle_event(input) {
            return Ok(reason);
        }
    }
}

fn run_picker(terminal: &mut Tui, mut picker: RemotePicker) -> Result<PickerOutcome> {
    loop {
        terminal.draw(|frame| ui::draw_remote_picker(frame, &picker))?;
        let Some(input) = next_input()? else {
            continue;
        };
        if let Some(outcome) = picker.handle_event(input) {
            return Ok(outcome);
        }
    }
}

/// Blocks for the next key press; other terminal events only trigger a redraw.
fn next_input() -> Result<Option<InputEvent>> {
    match event::read().context("read terminal event")? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(InputEvent::from(key))),
        _ => Ok(None),
    }
}

struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide).context("enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "unexpected failure".to_string()
}
