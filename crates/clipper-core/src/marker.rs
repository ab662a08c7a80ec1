use std::fmt;

/// Marker appended when no clipping message is configured.
pub const DEFAULT_MARKER: &str = " <clipped message>";

/// Text appended to a fragment to show that trailing content was cut.
///
/// Build one with [`Marker::resolve`] at the configuration boundary so the
/// clipping routines never have to special-case an empty message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker(String);

impl Marker {
    /// Use `text` verbatim, even when empty.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Use `text`, falling back to [`DEFAULT_MARKER`] when it is empty.
    pub fn resolve(text: &str) -> Self {
        if text.is_empty() {
            Self::default()
        } else {
            Self(text.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte length of the marker.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self(DEFAULT_MARKER.to_string())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Marker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
