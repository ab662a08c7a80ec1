use clipper_core::limits::{check_budget, check_parts};
use clipper_core::{ClipperError, Marker};
use tracing::debug;

use crate::boundary::back_up_to_boundary;
use crate::clip::clip;

/// Split `text` into at most `max_parts` parts of at most `budget` bytes.
///
/// Parts before the last are cut at the character boundary closest to
/// `budget`; bytes given up to reach the boundary stay in the remainder, so
/// concatenating those parts reproduces a prefix of `text`. The last part is
/// [`clip`]ped and carries `marker` if text is still left over.
pub fn segment(
    text: &str,
    budget: usize,
    marker: &Marker,
    max_parts: usize,
) -> Result<Vec<String>, ClipperError> {
    check_budget(budget, marker)?;
    check_parts(max_parts)?;

    let mut parts = Vec::new();
    let mut remaining = text;

    while parts.len() < max_parts - 1 && remaining.len() > budget {
        let cut = back_up_to_boundary(remaining.as_bytes(), budget);
        if cut == 0 {
            // Budget narrower than the next character: leave it to the clip.
            break;
        }
        let (chunk, rest) = remaining.split_at(cut);
        parts.push(chunk.to_string());
        remaining = rest;
    }

    if remaining.len() > budget {
        debug!(
            remaining = remaining.len(),
            budget,
            "message clipped after {} part(s)",
            parts.len() + 1
        );
    }
    parts.push(clip(remaining, budget, marker)?);

    Ok(parts)
}
