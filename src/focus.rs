//! Focus Policy - Which slot should receive input next
//!
//! Pure derivation rules: given a buffer edit or key event, compute the
//! advisory "focus slot k" request. The policy owns no state; the control
//! facade holds the focus signal and applies (or ignores) the requests,
//! and the presentation layer maps the focused slot to an actual input
//! handle. `None` means no focus change is requested.

/// After a previously empty slot at `index` was filled: advance to the
/// next slot, unless `index` is already the last one.
pub fn after_slot_filled(index: usize, len: usize) -> Option<usize> {
    if index + 1 < len { Some(index + 1) } else { None }
}

/// Backspace pressed on slot `index`: retreat only when the slot was
/// already empty (a filled slot is cleared in place instead).
pub fn on_backspace(index: usize, slot_empty: bool) -> Option<usize> {
    if slot_empty && index > 0 {
        Some(index - 1)
    } else {
        None
    }
}

/// Left-navigation from slot `index`.
pub fn on_arrow_left(index: usize) -> Option<usize> {
    if index > 0 { Some(index - 1) } else { None }
}

/// Right-navigation from slot `index`.
pub fn on_arrow_right(index: usize, len: usize) -> Option<usize> {
    if index + 1 < len { Some(index + 1) } else { None }
}

/// After a paste placed `placed` digits: focus the last filled slot,
/// or slot 0 when nothing was placed.
pub fn after_paste(placed: usize, len: usize) -> usize {
    if placed == 0 {
        0
    } else {
        placed.min(len) - 1
    }
}

// =============================================================================
// TESTS
// =============================================================================
