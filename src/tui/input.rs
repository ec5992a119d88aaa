// Input handling system with configurable key behaviors
//
// Supports two kinds of keys:
// - State-change keys (trigger once per press): actions, page switches
// - Repeatable keys (trigger on press, then repeat while held): cursor moves

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key behaves when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press → release).
    /// Use for: Enter, Tab, single-action keys
    StateChange,

    /// Trigger on press, then repeat after an initial delay.
    /// Use for: arrow keys, PageUp/Down
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// Fast navigation (for PageUp/PageDown)
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            is_pressed: false,
            press_started: None,
            last_triggered: None,
        }
    }

    fn release(&mut self) {
        self.is_pressed = false;
        self.press_started = None;
        self.last_triggered = None;
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event.
    /// Returns true if the action should be triggered.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_insert_with(KeyState::new);

        if state.is_pressed {
            match behavior {
                KeyBehavior::StateChange => {
                    // Debounce for terminals that never send Release events
                    if let Some(last) = state.last_triggered {
                        if now.duration_since(last) >= Duration::from_millis(150) {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                } => {
                    if let (Some(press_start), Some(last_trigger)) =
                        (state.press_started, state.last_triggered)
                    {
                        let time_since_press = now.duration_since(press_start);
                        let time_since_last = now.duration_since(last_trigger);

                        if time_since_press >= initial_delay && time_since_last >= repeat_interval {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            true
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Default configuration for this app's key set
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Cursor movement - repeatable
        handler.configure_keys(
            &[KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right],
            KeyBehavior::navigation(),
        );

        // Page movement - fast repeatable
        handler.configure_keys(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::fast_navigation(),
        );

        // Action keys - state change only (trigger once per press)
        handler.configure_keys(
            &[
                // Core actions
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Backspace,
                // Quit
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                // Nav tabs and footer pages
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Char('4'),
                KeyCode::Char('5'),
                KeyCode::Char('6'),
                KeyCode::Char('7'),
                KeyCode::Char('8'),
                KeyCode::F(1),
                KeyCode::F(2),
                KeyCode::F(3),
                KeyCode::F(4),
                // Filters
                KeyCode::Char('/'),
                KeyCode::Char('c'),
                KeyCode::Char('t'),
                KeyCode::Char('m'),
                KeyCode::Char('o'),
                KeyCode::Char('d'),
                KeyCode::Char('x'),
                // Session, theme, language
                KeyCode::Char('a'),
                KeyCode::Char('T'),
                KeyCode::Char('G'),
                // Clipboard
                KeyCode::Char('y'),
                KeyCode::Char('Y'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn state_change_does_not_repeat() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Enter, KeyBehavior::StateChange);

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn repeatable_triggers_after_delay() {
        let mut handler = InputHandler::new();
        handler.configure_key(
            KeyCode::Down,
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Down));
    }
}
