use clipper_core::limits::check_budget;
use clipper_core::{ClipperError, Marker};

use crate::boundary::back_up_to_boundary;

/// Clip `text` to at most `budget` bytes, appending `marker` when anything
/// was cut.
///
/// Text that already fits is returned unchanged, so clipping is idempotent.
/// The cut never lands inside a multi-byte character.
pub fn clip(text: &str, budget: usize, marker: &Marker) -> Result<String, ClipperError> {
    check_budget(budget, marker)?;
    if text.len() <= budget {
        return Ok(text.to_string());
    }

    let cut = back_up_to_boundary(text.as_bytes(), budget - marker.len());
    Ok(format!("{}{}", &text[..cut], marker))
}
