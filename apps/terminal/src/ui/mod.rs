//! Terminal front end: screen state, key handling and the event loop.

mod render;

use crate::loader::{LoadStatus, PendingDeck};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use drill_core::{DrillSettings, LoadError, Session, SessionEvent, SessionSummary};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;

pub use render::draw;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What the UI is currently showing.
#[derive(Debug)]
pub enum Screen {
    Loading(PendingDeck),
    Failed(LoadError),
    Drill(Session),
}

pub struct App {
    screen: Screen,
    settings: DrillSettings,
    quit: bool,
}

impl App {
    pub fn new(pending: PendingDeck, settings: DrillSettings) -> Self {
        Self {
            screen: Screen::Loading(pending),
            settings,
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Pick up the background load result, if it has arrived.
    pub fn tick(&mut self) {
        let Screen::Loading(pending) = &mut self.screen else {
            return;
        };

        match pending.poll() {
            LoadStatus::Pending => {}
            LoadStatus::Ready(deck) => {
                self.screen = Screen::Drill(Session::new(deck, self.settings));
            }
            LoadStatus::Failed(e) => {
                self.screen = Screen::Failed(e);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if is_exit(&key) {
            self.quit = true;
            return;
        }

        if let Screen::Drill(session) = &mut self.screen {
            if let Some(event) = key_to_event(&key, session.input()) {
                let confirmed = matches!(event, SessionEvent::Confirm(_));
                session.handle(event);
                if let (true, Some(entry)) = (confirmed, session.history().front()) {
                    tracing::debug!(
                        symbol = %entry.symbol,
                        answer = %entry.answer,
                        correct = entry.correct,
                        similarity = entry.similarity,
                        "answer judged"
                    );
                }
            }
        }
    }

    /// Totals for the exit report, if a drill was started.
    pub fn summary(&self) -> Option<SessionSummary> {
        match &self.screen {
            Screen::Drill(session) => Some(session.summary()),
            _ => None,
        }
    }
}

/// Esc or Ctrl+C.
fn is_exit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Esc => true,
        _ => false,
    }
}

/// Map a key press to a session event given the current input buffer.
fn key_to_event(key: &KeyEvent, input: &str) -> Option<SessionEvent> {
    match key.code {
        KeyCode::Enter => Some(SessionEvent::Confirm(input.to_string())),
        KeyCode::Tab => Some(SessionEvent::ToggleHint),
        KeyCode::Backspace => {
            let mut chars = input.chars();
            chars.next_back()?;
            Some(SessionEvent::EditInput(chars.as_str().to_string()))
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            let mut text = String::with_capacity(input.len() + c.len_utf8());
            text.push_str(input);
            text.push(c);
            Some(SessionEvent::EditInput(text))
        }
        _ => None,
    }
}

/// Draw and handle input until the user quits.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit() {
        app.tick();
        terminal.draw(|frame| draw(frame, app.screen()))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
