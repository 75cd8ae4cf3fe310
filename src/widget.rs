//! Entry Control - Composed verification-code widget
//!
//! The facade external pages instantiate. It owns the digit buffer, the
//! focus signal, the resend cooldown, and the submission guard, and wires
//! keyboard events through the focus policy. The host renders from the
//! observable surface (`slots`, `focused_slot`, `countdown_label`,
//! `can_submit`, `can_resend`, `is_verifying`) and feeds events in; the
//! control renders nothing itself.
//!
//! # Example
//!
//! ```ignore
//! use otp_entry::{OtpInput, OtpProps};
//!
//! let control = OtpInput::new(OtpProps::new(|code| {
//!     // verify `code` against the backend
//! }));
//!
//! control.handle_key(&event);
//! if control.can_submit() {
//!     control.submit();
//! }
//! ```

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::buffer::CodeBuffer;
use crate::clipboard;
use crate::cooldown::{Cooldown, CooldownState};
use crate::focus;
use crate::guard::SubmissionGuard;
use crate::keyboard::KeyboardEvent;

/// Default number of digit slots.
pub const DEFAULT_CODE_LENGTH: usize = 4;
/// Default resend cooldown in seconds.
pub const DEFAULT_COOLDOWN_SECS: u32 = 140;

/// Instantiation options for [`OtpInput`].
pub struct OtpProps {
    /// Number of slots. Non-positive values fall back to the default.
    pub code_length: usize,
    /// Initial/reset countdown in seconds. 0 means resend is available
    /// immediately.
    pub cooldown_secs: u32,
    /// Display heading.
    pub title: String,
    /// Display line, typically a partially masked address.
    pub destination: String,
    /// Invoked with the joined code on confirm.
    pub on_submit: Rc<dyn Fn(&str)>,
    /// Invoked when resend is triggered.
    pub on_resend: Option<Rc<dyn Fn()>>,
}

impl OtpProps {
    /// Props with the required submit callback and every option at its
    /// default.
    pub fn new(on_submit: impl Fn(&str) + 'static) -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            title: "Enter OTP Code".to_string(),
            destination: "email".to_string(),
            on_submit: Rc::new(on_submit),
            on_resend: None,
        }
    }
}

/// Segmented verification-code entry control.
///
/// Each instance owns its own buffer, focus index, cooldown, and
/// verifying flag; nothing is shared across instances. Dropping the
/// control cancels any pending cooldown tick.
pub struct OtpInput {
    length: Cell<usize>,
    duration: Cell<u32>,
    title: String,
    destination: String,
    buffer: Signal<CodeBuffer>,
    /// Focused slot index, -1 if none.
    focused: Signal<i32>,
    cooldown: Cooldown,
    guard: SubmissionGuard,
    on_submit: Rc<dyn Fn(&str)>,
    on_resend: Option<Rc<dyn Fn()>>,
}

impl OtpInput {
    /// Mount a control from `props`. The countdown starts immediately and
    /// focus begins on slot 0.
    pub fn new(props: OtpProps) -> Self {
        let length = if props.code_length > 0 {
            props.code_length
        } else {
            DEFAULT_CODE_LENGTH
        };

        Self {
            length: Cell::new(length),
            duration: Cell::new(props.cooldown_secs),
            title: props.title,
            destination: props.destination,
            buffer: signal(CodeBuffer::new(length)),
            focused: signal(0),
            cooldown: Cooldown::new(props.cooldown_secs),
            guard: SubmissionGuard::new(),
            on_submit: props.on_submit,
            on_resend: props.on_resend,
        }
    }

    // =========================================================================
    // EVENT HANDLING
    // =========================================================================

    /// Feed a keyboard event into the control. Returns true if the event
    /// was consumed.
    ///
    /// Only press events act, and every slot edit is inert while a
    /// submission is in flight.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if !event.is_press() {
            return false;
        }
        if self.guard.is_verifying() {
            return false;
        }

        if event.modifiers.ctrl {
            return match event.key.as_str() {
                "v" | "V" => {
                    if let Some(text) = clipboard::paste() {
                        self.paste(&text);
                    }
                    true
                }
                _ => false,
            };
        }

        match event.key.as_str() {
            "Enter" => {
                self.submit();
                true
            }
            "Backspace" => {
                let Some(idx) = self.focused_slot() else {
                    return false;
                };
                if self.buffer.get().slot(idx).is_none() {
                    self.apply_focus(focus::on_backspace(idx, true));
                } else if let Some(next) = self.buffer.get().set_slot(idx, "") {
                    self.buffer.set(next);
                }
                true
            }
            "Delete" => {
                let Some(idx) = self.focused_slot() else {
                    return false;
                };
                if let Some(next) = self.buffer.get().set_slot(idx, "") {
                    self.buffer.set(next);
                }
                true
            }
            "ArrowLeft" => {
                if let Some(idx) = self.focused_slot() {
                    self.apply_focus(focus::on_arrow_left(idx));
                }
                true
            }
            "ArrowRight" => {
                if let Some(idx) = self.focused_slot() {
                    self.apply_focus(focus::on_arrow_right(idx, self.len()));
                }
                true
            }
            key => {
                if event.modifiers.alt {
                    return false;
                }
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        let Some(idx) = self.focused_slot() else {
                            return false;
                        };
                        if let Some(next) = self.buffer.get().set_slot(idx, key) {
                            self.buffer.set(next);
                            self.apply_focus(focus::after_slot_filled(idx, self.len()));
                        }
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Apply pasted text to the buffer and move focus to the last filled
    /// slot. Text without digits is a full no-op. Returns true if any
    /// digit was placed.
    pub fn paste(&self, text: &str) -> bool {
        if self.guard.is_verifying() {
            return false;
        }
        let (next, placed) = self.buffer.get().apply_paste(text);
        if placed == 0 {
            return false;
        }
        self.buffer.set(next);
        self.focused.set(focus::after_paste(placed, self.len()) as i32);
        true
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Confirm the entered code. Inert unless the buffer is complete and
    /// no submission is in flight. Returns true if the submit callback
    /// was invoked.
    pub fn submit(&self) -> bool {
        let buffer = self.buffer.get();
        if !buffer.is_complete() {
            return false;
        }
        self.guard.submit(&buffer.joined(), self.on_submit.as_ref())
    }

    /// Request a new code. Inert unless the cooldown is eligible and no
    /// submission is in flight. Invokes the resend callback, then resets
    /// the countdown, clears every slot, and focuses slot 0.
    pub fn resend(&self) -> bool {
        if self.guard.is_verifying() || !self.cooldown.is_eligible() {
            return false;
        }
        if let Some(ref on_resend) = self.on_resend {
            on_resend();
        }
        self.cooldown.reset(self.duration.get());
        self.buffer.set(self.buffer.get().cleared());
        self.focused.set(0);
        true
    }

    /// Clear every slot and focus slot 0 without touching the cooldown.
    pub fn reset(&self) {
        self.buffer.set(self.buffer.get().cleared());
        self.focused.set(0);
    }

    // =========================================================================
    // RECONFIGURATION
    // =========================================================================

    /// Change the cooldown duration. The countdown restarts from the new
    /// value, matching a duration reconfiguration at the page level.
    pub fn set_duration(&self, secs: u32) {
        self.duration.set(secs);
        self.cooldown.reset(secs);
    }

    /// Change the number of slots. Entered digits beyond the new length
    /// are dropped, new slots start empty, and the focus index is clamped.
    pub fn set_code_length(&self, n: usize) {
        let n = if n > 0 { n } else { DEFAULT_CODE_LENGTH };
        self.length.set(n);
        self.buffer.set(self.buffer.get().resized(n));
        if self.focused.get() >= n as i32 {
            self.focused.set(n as i32 - 1);
        }
    }

    // =========================================================================
    // OBSERVABLE SURFACE
    // =========================================================================

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.length.get()
    }

    /// True if the control has zero slots (never the case after
    /// normalization; kept for API symmetry with `len`).
    pub fn is_empty(&self) -> bool {
        self.length.get() == 0
    }

    /// Display heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Destination label, as supplied by the page.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Content of slot `index`.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.buffer.get().slot(index)
    }

    /// Snapshot of all slots in order.
    pub fn slots(&self) -> Vec<Option<char>> {
        self.buffer.get().slots()
    }

    /// True iff every slot holds a digit.
    pub fn is_complete(&self) -> bool {
        self.buffer.get().is_complete()
    }

    /// True while the submit callback is running.
    pub fn is_verifying(&self) -> bool {
        self.guard.is_verifying()
    }

    /// Confirm action availability: complete and not busy.
    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.guard.is_verifying()
    }

    /// Resend action availability: cooldown eligible and not busy.
    pub fn can_resend(&self) -> bool {
        self.cooldown.is_eligible() && !self.guard.is_verifying()
    }

    /// Seconds until resend becomes available.
    pub fn seconds_left(&self) -> u32 {
        self.cooldown.remaining()
    }

    /// Countdown phase.
    pub fn cooldown_state(&self) -> CooldownState {
        self.cooldown.state()
    }

    /// Live countdown display, zero-padded `mm:ss`.
    pub fn countdown_label(&self) -> String {
        self.cooldown.label()
    }

    /// Currently focused slot, or `None`.
    pub fn focused_slot(&self) -> Option<usize> {
        let idx = self.focused.get();
        if idx >= 0 { Some(idx as usize) } else { None }
    }

    /// Focus a specific slot. Out-of-range indices are ignored.
    pub fn focus_slot(&self, index: usize) {
        if index < self.len() {
            self.focused.set(index as i32);
        }
    }

    /// Clear focus (no slot focused).
    pub fn blur(&self) {
        self.focused.set(-1);
    }

    fn apply_focus(&self, request: Option<usize>) {
        if let Some(idx) = request {
            self.focused.set(idx as i32);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
