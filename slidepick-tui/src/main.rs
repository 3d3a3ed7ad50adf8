mod buffer;
mod gesture;
mod paths;
mod settings;
mod terminal;
mod view;

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use log::{debug, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use slidepick::{Picker, PickerConfig, PickerError, PickerOutcome, PickerState};
use thiserror::Error;

use crate::gesture::GestureTracker;
use crate::settings::{FileBackend, SettingsError, SettingsProvider};
use crate::terminal::Terminal;

const STATE_KEY: &str = "picker.state";

const NAMES: [&str; 7] = ["Tom", "Lily", "Jack", "Bob", "Alice", "Jessy", "Nancy"];

const FRAME: Duration = Duration::from_millis(16);
const IDLE: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Picker(#[from] PickerError),
}

fn init_logging() {
    let path = paths::rotate_logs().unwrap_or_else(|| "slidepick-tui.log".into());
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("could not create log file {}: {e}", path.display());
            return;
        }
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
        eprintln!("could not initialize logger: {e}");
    }
}

/// Create (or truncate) the log file, creating its directory first.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn open_settings() -> Result<Option<SettingsProvider>, SettingsError> {
    let Some(dir) = paths::settings_dir() else {
        warn!("no home directory; picker position will not be saved");
        return Ok(None);
    };
    Ok(Some(SettingsProvider::new(FileBackend::open(dir)?)))
}

fn run() -> Result<PickerOutcome, AppError> {
    let settings = open_settings()?;
    if let Some(settings) = &settings
        && std::env::args().any(|arg| arg == "--reset")
    {
        info!("clearing saved picker state");
        settings.delete(STATE_KEY)?;
    }
    let state = match &settings {
        Some(settings) => settings.get_or_discard(STATE_KEY, PickerState::unset())?,
        None => PickerState::unset(),
    };
    info!("starting with saved state {:?}", state.index());

    let config = PickerConfig::new(2.0)
        .visible_count(5)
        .velocity_threshold(Some(20.0));
    let mut picker = Picker::with_state(NAMES.to_vec(), config, state)?;
    let changes = picker.subscribe();

    let mut terminal = Terminal::new()?;
    let mut tracker = GestureTracker::new();
    let mut animating = false;
    let mut status = String::new();

    loop {
        let (width, height) = crossterm::terminal::size()?;
        let area = view::picker_area(width, height, picker.config().viewport_height());

        terminal.draw(|buf| view::draw(buf, &picker, area, &status))?;

        let timeout = if animating || tracker.is_active() {
            FRAME
        } else {
            IDLE
        };
        for event in terminal.poll(timeout)? {
            let now = Instant::now();
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Enter => return Ok(picker.confirm()),
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(picker.cancel()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(picker.cancel());
                    }
                    KeyCode::Up | KeyCode::Char('k') => step(&mut picker, -1)?,
                    KeyCode::Down | KeyCode::Char('j') => step(&mut picker, 1)?,
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp if !picker.is_dragging() => step(&mut picker, -1)?,
                    MouseEventKind::ScrollDown if !picker.is_dragging() => step(&mut picker, 1)?,
                    _ => {
                        if let Some(gesture) = tracker.handle(&mouse, area, now) {
                            debug!("gesture {gesture:?}");
                            picker.handle(gesture, now);
                        }
                    }
                },
                _ => {}
            }
        }

        animating = picker.tick(Instant::now());

        for change in changes.try_iter() {
            status = format!("selected {}", NAMES[change.index]);
            if let Some(settings) = &settings
                && let Err(e) = settings.set(STATE_KEY, &PickerState::new(change.index))
            {
                warn!("failed to save picker state: {e}");
            }
        }
    }
}

/// Move the selection by one item, staying inside the list.
fn step(picker: &mut Picker<&'static str>, direction: isize) -> Result<(), PickerError> {
    let target = picker.settled_index().saturating_add_signed(direction);
    if target >= picker.len() || target == picker.settled_index() {
        return Ok(());
    }
    picker.jump_to(target)
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(PickerOutcome::Confirmed(index)) => {
            info!("confirmed {index}");
            println!("{}", NAMES[index]);
            ExitCode::SUCCESS
        }
        Ok(PickerOutcome::Cancelled) => {
            info!("cancelled");
            ExitCode::from(1)
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
