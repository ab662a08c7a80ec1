//! Character boundary detection over raw UTF-8 bytes.
//!
//! Everything else in this crate finds its cut points through
//! [`back_up_to_boundary`], so this is the only place that knows about the
//! encoding.

use tracing::warn;

/// Longest UTF-8 encoding of a single character, in bytes.
const MAX_CHAR_WIDTH: usize = 4;

/// Expected sequence length for a UTF-8 lead byte, or `None` for a
/// continuation byte or a byte that never starts a sequence.
fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Whether `buffer[..offset]` ends with a complete character.
///
/// Only the bytes before `offset` are decoded. An empty prefix counts as a
/// boundary.
pub fn is_boundary(buffer: &[u8], offset: usize) -> bool {
    let prefix = &buffer[..offset.min(buffer.len())];
    if prefix.is_empty() {
        return true;
    }

    // Walk back to the lead byte of the last sequence.
    let floor = prefix.len().saturating_sub(MAX_CHAR_WIDTH);
    let mut lead_at = prefix.len() - 1;
    while lead_at > floor && prefix[lead_at] & 0xC0 == 0x80 {
        lead_at -= 1;
    }

    let tail = &prefix[lead_at..];
    match sequence_width(tail[0]) {
        Some(width) => width == tail.len() && std::str::from_utf8(tail).is_ok(),
        None => false,
    }
}

/// Largest index `<= offset` at which `buffer[..index]` ends on a complete
/// character.
///
/// Steps back at most three bytes. For well-formed UTF-8 that always lands on
/// a boundary. Malformed input is handled on a best-effort basis: if no
/// boundary is found the function returns `offset - 3` and leaves the damage
/// where it is.
pub fn back_up_to_boundary(buffer: &[u8], offset: usize) -> usize {
    let offset = offset.min(buffer.len());
    for step in 0..MAX_CHAR_WIDTH {
        let Some(candidate) = offset.checked_sub(step) else {
            return 0;
        };
        if is_boundary(buffer, candidate) {
            return candidate;
        }
    }

    warn!(offset, "no character boundary within 3 bytes, input is not valid UTF-8");
    offset - (MAX_CHAR_WIDTH - 1)
}
