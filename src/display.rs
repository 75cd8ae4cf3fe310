//! Display Helpers - Destination-address masking
//!
//! The control shows the destination label verbatim; masking the address
//! before handing it over is the collaborating page's job. This helper
//! implements the canonical rule so every caller masks the same way.

/// Mask an address for display: the first 3 characters stay visible,
/// every later character before the `@` becomes `*`, and the domain is
/// left intact. Text without an `@` comes back unchanged.
pub fn mask_destination(addr: &str) -> String {
    let Some(at) = addr
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == '@')
        .map(|(i, _)| i)
        .last()
    else {
        return addr.to_string();
    };

    addr.chars()
        .enumerate()
        .map(|(i, c)| if i >= 3 && i < at { '*' } else { c })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
