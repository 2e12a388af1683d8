//! Top-level application state.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;

use dr_core::{DiceResult, Roller, RollerConfig};

/// Application state for the dice screen.
pub struct TuiApp {
    /// The dice and their roll cycle.
    pub roller: Roller<StdRng>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create an app from a roller configuration.
    pub fn new(config: RollerConfig) -> DiceResult<Self> {
        Ok(Self::with_roller(Roller::from_config(config)?))
    }

    /// Create an app around an existing roller.
    pub fn with_roller(roller: Roller<StdRng>) -> Self {
        Self {
            roller,
            show_help: false,
            should_quit: false,
        }
    }

    /// Redraw interval for the event loop.
    pub fn frame(&self) -> Duration {
        self.roller.config().frame()
    }

    /// Advance the roll animation.
    pub fn tick(&mut self, dt: Duration) {
        self.roller.tick(dt);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
                self.roller.roll();
            }
            _ => {}
        }
    }

    /// Key hints for the status bar.
    pub fn status_hint(&self) -> &str {
        "Space/Enter/r:roll  ?:help  q:quit"
    }
}
