//! Cooldown Timer - Resend-eligibility countdown
//!
//! Counts seconds down to zero on a cancellable background ticker. The
//! ticker thread owns nothing reactive: it decrements an atomic, and the
//! value is synced into the local `Signal` whenever the countdown is read.
//! Each start/reset creates a fresh ticker generation with its own stop
//! flag, so a stale tick from a cancelled generation can never touch the
//! reset state.
//!
//! # Example
//!
//! ```ignore
//! use otp_entry::cooldown::Cooldown;
//!
//! let cooldown = Cooldown::new(140);
//! assert!(!cooldown.is_eligible());
//! // ...140 seconds later...
//! assert!(cooldown.is_eligible());
//! cooldown.reset(140);
//! ```

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use spark_signals::{Signal, signal};

/// Countdown phase: still counting, or free to resend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CooldownState {
    /// Seconds remaining, always > 0.
    Counting(u32),
    /// Reached zero; terminal until an explicit reset.
    Eligible,
}

/// One ticker generation: the atomic the thread decrements and the flag
/// that stops it.
struct Ticker {
    remaining: Arc<AtomicU32>,
    running: Arc<AtomicBool>,
}

impl Ticker {
    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Resend cooldown countdown with a cancellable one-second tick.
pub struct Cooldown {
    /// Reactive view of the countdown (local, synced from the atomic).
    remaining: Signal<u32>,
    /// Current ticker generation. Replaced wholesale on reset.
    ticker: RefCell<Ticker>,
    /// Tick interval. One second in production; tests shrink it.
    tick: Duration,
}

impl Cooldown {
    /// Start a countdown from `duration_secs`. A duration of 0 is
    /// immediately eligible and spawns no ticker.
    pub fn new(duration_secs: u32) -> Self {
        Self::with_tick(duration_secs, Duration::from_secs(1))
    }

    pub(crate) fn with_tick(duration_secs: u32, tick: Duration) -> Self {
        let cooldown = Self {
            remaining: signal(duration_secs),
            ticker: RefCell::new(Ticker {
                remaining: Arc::new(AtomicU32::new(duration_secs)),
                running: Arc::new(AtomicBool::new(false)),
            }),
            tick,
        };
        cooldown.spawn_if_counting();
        cooldown
    }

    /// Seconds remaining. Syncs the ticker's atomic into the signal so
    /// reactive readers track the latest value.
    pub fn remaining(&self) -> u32 {
        let current = self.ticker.borrow().remaining.load(Ordering::SeqCst);
        if self.remaining.get() != current {
            self.remaining.set(current);
        }
        current
    }

    /// True once the countdown has reached zero.
    pub fn is_eligible(&self) -> bool {
        self.remaining() == 0
    }

    /// Current phase of the countdown.
    pub fn state(&self) -> CooldownState {
        match self.remaining() {
            0 => CooldownState::Eligible,
            secs => CooldownState::Counting(secs),
        }
    }

    /// Display value, zero-padded `mm:ss`.
    pub fn label(&self) -> String {
        format_mm_ss(self.remaining())
    }

    /// Restart the countdown from `duration_secs`.
    ///
    /// The previous ticker generation is stopped before the new one is
    /// scheduled; at most one tick is ever pending per instance.
    pub fn reset(&self, duration_secs: u32) {
        {
            let mut ticker = self.ticker.borrow_mut();
            ticker.stop();
            *ticker = Ticker {
                remaining: Arc::new(AtomicU32::new(duration_secs)),
                running: Arc::new(AtomicBool::new(false)),
            };
        }
        self.remaining.set(duration_secs);
        self.spawn_if_counting();
    }

    /// Stop ticking without changing the remaining seconds.
    pub fn cancel(&self) {
        self.ticker.borrow().stop();
    }

    fn spawn_if_counting(&self) {
        let ticker = self.ticker.borrow();
        if ticker.remaining.load(Ordering::SeqCst) == 0 {
            return;
        }

        ticker.running.store(true, Ordering::SeqCst);
        let remaining = ticker.remaining.clone();
        let running = ticker.running.clone();
        let tick = self.tick;

        // Detached: the thread exits on its next wake once the generation
        // is stopped, and only ever touches its own generation's atomics.
        thread::spawn(move || {
            loop {
                thread::sleep(tick);
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                let current = remaining.load(Ordering::SeqCst);
                if current == 0 {
                    running.store(false, Ordering::SeqCst);
                    break;
                }
                let next = current - 1;
                remaining.store(next, Ordering::SeqCst);
                if next == 0 {
                    running.store(false, Ordering::SeqCst);
                    break;
                }
            }
        });
    }
}

impl Drop for Cooldown {
    fn drop(&mut self) {
        self.ticker.borrow().stop();
    }
}

/// Format seconds as zero-padded minutes:seconds.
pub fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

// =============================================================================
// TESTS
// =============================================================================
