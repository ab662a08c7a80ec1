use clipper_core::limits::check_budget;
use clipper_core::{ClipperError, Marker};
use tracing::trace;

/// Split a message into its non-empty lines, clipping long ones.
///
/// The message is trimmed, split on `\n`, and empty lines are dropped so no
/// blank message is ever produced. With `max_line_length == 0` lines are kept
/// whole. Otherwise a line longer than the limit is cut into pieces of at most
/// `max_line_length` bytes; every piece but the last carries `marker`.
///
/// Only `\n` separates lines: a `\r` from CRLF input stays at the end of its
/// line, so `"a\r\n\r\nb"` gives `["a\r", "\r", "b"]`.
///
/// Cuts respect character boundaries but not word boundaries. A character
/// wider than `max_line_length - marker.len()` gets a piece of its own, which
/// then exceeds the limit.
pub fn split_lines(
    message: &str,
    max_line_length: usize,
    marker: &Marker,
) -> Result<Vec<String>, ClipperError> {
    if max_line_length != 0 {
        check_budget(max_line_length, marker)?;
    }

    let mut lines = Vec::new();
    for line in message.trim().split('\n') {
        if line.is_empty() {
            continue;
        }

        if max_line_length == 0 || line.len() <= max_line_length {
            lines.push(line.to_string());
            continue;
        }

        split_long_line(line, max_line_length, marker, &mut lines);
    }

    Ok(lines)
}

fn split_long_line(line: &str, max_line_length: usize, marker: &Marker, out: &mut Vec<String>) {
    let room = max_line_length - marker.len();
    let mut split_start = 0;
    let mut previous_char_start = 0;

    for (i, _) in line.char_indices() {
        // `previous_char_start` is the last boundary that keeps the piece
        // within `room`. A single character wider than `room` still has to go
        // somewhere, so never emit an empty piece.
        if i - split_start > room && previous_char_start > split_start {
            out.push(format!("{}{}", &line[split_start..previous_char_start], marker));
            split_start = previous_char_start;
        }
        previous_char_start = i;
    }

    // The tail needs no marker, but a trailing character wider than the
    // marker can still push it over the limit.
    if line.len() - split_start > max_line_length && previous_char_start > split_start {
        out.push(format!("{}{}", &line[split_start..previous_char_start], marker));
        split_start = previous_char_start;
    }
    out.push(line[split_start..].to_string());

    trace!(len = line.len(), "split long line");
}
