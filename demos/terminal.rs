//! Terminal demo using crossterm and ratatui.
//!
//! Type chords on the home row (`f d s` / `j k l`, pinkies `a` and `;`) to
//! enter Braille cells. Ctrl-T toggles chord input, Backspace deletes, Esc
//! quits. Any other key leaves chord input and is typed as-is.
//!
//! Run with: cargo run --example terminal [config.json] 2>chord.log
//! and set RUST_LOG=braille_chord=debug to watch chords in the log.

use braille_chord::{ChordEngine, ChordMode, Config, EventSource};
use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// What a terminal key means while a chord is waiting for its next key.
#[derive(Debug, PartialEq, Eq)]
enum Routed {
    Char(char),
    /// A control key (Esc, Backspace, Ctrl-T, ...) for the app; ends the wait.
    Deferred,
    Ignored,
}

/// Reads follow-on chord keys straight from the terminal.
///
/// Control keys pressed inside the chord window end the wait and are queued
/// for the app instead of being lost.
#[derive(Default)]
struct TerminalKeys {
    deferred: VecDeque<CKeyEvent>,
}

impl TerminalKeys {
    fn route(&mut self, key: CKeyEvent) -> Routed {
        if key.kind != KeyEventKind::Press {
            return Routed::Ignored;
        }
        match key_to_char(key) {
            Some(c) => Routed::Char(c),
            None => {
                self.deferred.push_back(key);
                Routed::Deferred
            }
        }
    }
}

impl EventSource for TerminalKeys {
    fn wait_for_event(&mut self, timeout: Duration) -> Option<char> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining).ok()? {
                return None;
            }
            if let Event::Key(key) = event::read().ok()? {
                match self.route(key) {
                    Routed::Char(c) => return Some(c),
                    Routed::Deferred => return None,
                    Routed::Ignored => {}
                }
            }
        }
    }
}

fn key_to_char(key: CKeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        CKeyCode::Char(c) => Some(c),
        CKeyCode::Enter => Some('\n'),
        CKeyCode::Tab => Some('\t'),
        _ => None,
    }
}

struct App {
    mode: ChordMode,
    keys: TerminalKeys,
    text: String,
    should_quit: bool,
}

impl App {
    fn new(engine: ChordEngine) -> Self {
        let mut mode = ChordMode::new(engine);
        mode.enable();
        Self {
            mode,
            keys: TerminalKeys::default(),
            text: String::new(),
            should_quit: false,
        }
    }

    fn handle_crossterm_event(&mut self, key: CKeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            CKeyCode::Esc => self.should_quit = true,
            CKeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mode.toggle();
            }
            CKeyCode::Backspace => {
                self.text.pop();
            }
            _ => {
                if let Some(first) = key_to_char(key) {
                    self.text.extend(self.mode.feed(first, &mut self.keys));
                    self.drain_deferred();
                }
            }
        }
    }

    /// Handles control keys that arrived while a chord was open.
    fn drain_deferred(&mut self) {
        while let Some(key) = self.keys.deferred.pop_front() {
            self.handle_crossterm_event(key);
        }
    }

    fn status(&self) -> String {
        let snapshot = self.mode.engine().snapshot();
        let state = if self.mode.is_active() {
            "-- BRAILLE --"
        } else {
            "-- TEXT --"
        };
        let blank = if snapshot.blank_for_space {
            "on"
        } else {
            "off"
        };
        format!(
            "{state}  window {} ms  blank-for-space {blank}  keys {}  (Ctrl-T toggle, Esc quit)",
            snapshot.dot_delay.as_millis(),
            snapshot.bound_keys,
        )
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let text = Paragraph::new(app.text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("braille_chord demo"),
        );
    f.render_widget(text, chunks[0]);

    let status = Paragraph::new(app.status())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let engine = ChordEngine::from_config(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
