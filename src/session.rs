//! Per-session snippet buffer.
//!
//! A drawing session is the interval between one draw-start notification
//! and the next. [`SessionCore`] owns the append-only text buffer the
//! serializer writes into during a session. It has no browser dependencies
//! so it is tested on the host; the boundary in [`crate::app`] mirrors the
//! buffer into the results text area and clears the drawn overlays when a
//! session resets.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::geometry::DrawnGeometry;
use crate::snippet;

/// The snippet buffer for the current drawing session.
#[derive(Debug, Default)]
pub struct SessionCore {
    buffer: String,
}

impl SessionCore {
    /// Create a core with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `geometry` and append the snippet to the buffer.
    /// Returns the rendered snippet.
    pub fn record(&mut self, geometry: &DrawnGeometry) -> String {
        let rendered = snippet::render(geometry);
        self.buffer.push_str(&rendered);
        rendered
    }

    /// Start a new session: clear the buffer. Idempotent.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// The accumulated snippets for this session.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns `true` if nothing has been recorded this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
