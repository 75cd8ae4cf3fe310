//! # otp-entry
//!
//! Segmented verification-code entry control for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: every observable piece of state (digit slots,
//! focus index, countdown, verifying flag) is a signal the host can track.
//!
//! ## Architecture
//!
//! The control is a composition of four leaves behind one facade:
//!
//! ```text
//! key/paste events → CodeBuffer → focus policy → focus signal
//!                        └→ completeness → SubmissionGuard → on_submit
//! one-second ticks → Cooldown → resend eligibility → on_resend
//! ```
//!
//! The crate renders nothing and owns no stdin: the host reads terminal
//! events (a crossterm bridge is provided), feeds them to
//! [`OtpInput::handle_key`], and renders from the observable surface.
//! Network transport for sending/verifying codes stays behind the
//! `on_submit`/`on_resend` callbacks.
//!
//! ## Modules
//!
//! - [`buffer`] - Fixed-length per-slot digit storage (pure)
//! - [`focus`] - Advisory focus-request derivation (pure)
//! - [`cooldown`] - Resend countdown with a cancellable ticker
//! - [`guard`] - Busy lock around the submit callback
//! - [`keyboard`] - Event types and crossterm conversion
//! - [`clipboard`] - Internal paste buffer
//! - [`widget`] - The composed control external pages instantiate
//! - [`display`] - Destination-address masking helper

pub mod buffer;
pub mod clipboard;
pub mod cooldown;
pub mod display;
pub mod focus;
pub mod guard;
pub mod keyboard;
pub mod widget;

// Re-export commonly used items
pub use buffer::CodeBuffer;
pub use cooldown::{Cooldown, CooldownState, format_mm_ss};
pub use display::mask_destination;
pub use guard::SubmissionGuard;
pub use keyboard::{KeyState, KeyboardEvent, Modifiers, convert_key_event};
pub use widget::{DEFAULT_CODE_LENGTH, DEFAULT_COOLDOWN_SECS, OtpInput, OtpProps};
