//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use rewind_tictactoe::{Position, Timeline};
use tracing::debug;

use crate::input;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    timeline: Timeline,
    cursor: Position,
}

impl App {
    /// Creates a fresh game.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
        }
    }

    /// Current timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Board square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press, translating it into a game intent.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('s') => self.timeline.toggle_order(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits address cells directly, matching the board numbering.
                if let Some(position) = Position::from_index(c as usize - '1' as usize) {
                    self.play_at(position);
                }
            }
            KeyCode::Char('[') => self.step_history(-1),
            KeyCode::Char(']') => self.step_history(1),
            KeyCode::Home => self.timeline.jump_to(0),
            KeyCode::End => {
                let latest = self.timeline.move_count();
                self.timeline.jump_to(latest);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            _ => {}
        }
        Action::Continue
    }

    /// Plays at `position`. Rejected moves are dropped without feedback;
    /// the status line already tells the player everything they need.
    fn play_at(&mut self, position: Position) {
        match self.timeline.play(position) {
            Ok(status) => debug!(%position, %status, "Move applied"),
            Err(err) => debug!(%position, %err, "Move ignored"),
        }
    }

    /// Steps the history cursor, staying inside the recorded timeline.
    fn step_history(&mut self, delta: isize) {
        let target = self.timeline.current_move() as isize + delta;
        if (0..=self.timeline.move_count() as isize).contains(&target) {
            self.timeline.jump_to(target as usize);
        }
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.timeline = Timeline::new();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.timeline().move_count(), 1);
        assert!(!app.timeline().current().is_empty(Position::Center));
    }

    #[test]
    fn test_occupied_cell_key_is_silent() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.timeline().move_count(), 1);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.timeline().current().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_history_steps_stay_in_bounds() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));

        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(app.timeline().current_move(), 1);
        app.handle_key(key(KeyCode::Char('[')));
        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(app.timeline().current_move(), 0);

        app.handle_key(key(KeyCode::Char(']')));
        app.handle_key(key(KeyCode::Char(']')));
        app.handle_key(key(KeyCode::Char(']')));
        assert_eq!(app.timeline().current_move(), 2);
    }

    #[test]
    fn test_home_and_end_jump() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));

        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.timeline().current_move(), 0);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.timeline().current_move(), 2);
    }

    #[test]
    fn test_sort_key_flips_order_only() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.timeline().newest_first());
        assert_eq!(app.timeline().move_count(), 1);
    }

    #[test]
    fn test_restart_clears_timeline() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.timeline().move_count(), 0);
    }
}
