use serde::{Deserialize, Serialize};

use crate::error::ClipperError;
use crate::marker::Marker;

/// How a destination breaks a message into fragments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentMode {
    /// One fragment per non-empty line, long lines split (default).
    #[default]
    Lines,
    /// The whole text as a bounded number of parts.
    Segment,
}

impl FragmentMode {
    /// Human-readable name for display (e.g. in `clipper status`).
    pub fn display_name(&self) -> &str {
        match self {
            Self::Lines => "lines",
            Self::Segment => "segment",
        }
    }
}

/// Resolved limits for one destination, ready to hand to the text routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    pub mode: FragmentMode,
    /// Byte limit per line in [`FragmentMode::Lines`]; `0` disables splitting.
    pub max_line_length: usize,
    /// Byte limit per part in [`FragmentMode::Segment`].
    pub max_message_length: usize,
    /// Upper bound on the number of parts in [`FragmentMode::Segment`].
    pub max_parts: usize,
    /// Collapse blank lines before segmenting.
    pub collapse_newlines: bool,
    pub marker: Marker,
}

impl Limits {
    /// Check that the limits for the selected mode can be satisfied at all.
    pub fn validate(&self) -> Result<(), ClipperError> {
        match self.mode {
            FragmentMode::Lines => {
                if self.max_line_length != 0 {
                    check_budget(self.max_line_length, &self.marker)?;
                }
            }
            FragmentMode::Segment => {
                check_budget(self.max_message_length, &self.marker)?;
                check_parts(self.max_parts)?;
            }
        }
        Ok(())
    }
}

/// A budget must leave room for at least one byte of content besides the marker.
pub fn check_budget(budget: usize, marker: &Marker) -> Result<(), ClipperError> {
    if budget <= marker.len() {
        return Err(ClipperError::Budget {
            budget,
            marker_len: marker.len(),
        });
    }
    Ok(())
}

pub fn check_parts(max_parts: usize) -> Result<(), ClipperError> {
    if max_parts == 0 {
        return Err(ClipperError::PartLimit);
    }
    Ok(())
}
