//! Keyboard Module - Event types and crossterm conversion
//!
//! The control does NOT own stdin: the host application reads terminal
//! events and feeds them in. This module defines the event shape the
//! control consumes and the bridge from crossterm's event types.
//!
//! # Example
//!
//! ```ignore
//! use otp_entry::keyboard::{convert_key_event, KeyboardEvent};
//!
//! if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
//!     let event = convert_key_event(key);
//!     control.handle_key(&event);
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers};

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Key event state (press, repeat, release).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "4", "Enter", "ArrowLeft").
    pub key: String,
    /// Modifier keys state.
    pub modifiers: Modifiers,
    /// Press/repeat/release state.
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event.
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

/// Convert crossterm KeyEvent to our KeyboardEvent.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        },
        state,
    }
}

// =============================================================================
// TESTS
// =============================================================================
