//! Submission Guard - Busy lock around the submit callback
//!
//! Serializes submit attempts: at most one callback invocation is in
//! flight per instance, and the verifying flag is observable so the rest
//! of the control can go inert during that window. The guard never
//! interprets the callback's outcome; it fails open, releasing the lock
//! unconditionally on exit - even when the callback unwinds - so the
//! control can never get stuck busy.

use spark_signals::{Signal, signal};

/// Reentrancy lock around the external submit callback.
pub struct SubmissionGuard {
    verifying: Signal<bool>,
}

/// Releases the verifying flag when the callback scope exits, normally
/// or by unwind.
struct ReleaseOnDrop<'a> {
    flag: &'a Signal<bool>,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self {
            verifying: signal(false),
        }
    }

    /// True strictly between submit acceptance and callback return.
    pub fn is_verifying(&self) -> bool {
        self.verifying.get()
    }

    /// Run the submit callback with `code` unless a submission is already
    /// in flight.
    ///
    /// Returns whether the callback was invoked. The flag is cleared
    /// before returning regardless of what the callback does, so a
    /// reentrant `submit` from inside the callback is a no-op and a
    /// failing callback leaves the control editable.
    pub fn submit(&self, code: &str, callback: &dyn Fn(&str)) -> bool {
        if self.verifying.get() {
            return false;
        }
        self.verifying.set(true);
        let _release = ReleaseOnDrop {
            flag: &self.verifying,
        };
        callback(code);
        true
    }
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
