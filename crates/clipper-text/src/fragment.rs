use clipper_core::{ClipperError, FragmentMode, Limits};
use tracing::debug;

use crate::lines::split_lines;
use crate::newlines::collapse_newlines;
use crate::segment::segment;

/// Break a message into the fragments a destination accepts.
pub fn fragment(text: &str, limits: &Limits) -> Result<Vec<String>, ClipperError> {
    let fragments = match limits.mode {
        FragmentMode::Lines => split_lines(text, limits.max_line_length, &limits.marker)?,
        FragmentMode::Segment if limits.collapse_newlines => segment(
            &collapse_newlines(text),
            limits.max_message_length,
            &limits.marker,
            limits.max_parts,
        )?,
        FragmentMode::Segment => segment(
            text,
            limits.max_message_length,
            &limits.marker,
            limits.max_parts,
        )?,
    };

    debug!(
        mode = limits.mode.display_name(),
        input_len = text.len(),
        fragments = fragments.len(),
        "fragmented message"
    );
    Ok(fragments)
}
