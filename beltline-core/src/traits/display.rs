//! Status display trait
//!
//! The belt reports state on a two-line fixed-width character display.
//! Rendering is trivial (static text per state); the trait exists so the
//! controller logic can be exercised on the host with a mock.

/// Display width in characters
pub const DISPLAY_COLS: usize = 16;

/// Display height in lines
pub const DISPLAY_ROWS: usize = 2;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pin or bus I/O failure
    Io,
    /// Line index outside the panel
    InvalidLine,
}

/// Trait for two-line status displays
pub trait StatusDisplay {
    /// Clear the entire panel
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at column 0 of the given line
    ///
    /// Text longer than [`DISPLAY_COLS`] is truncated.
    fn print(&mut self, line: u8, text: &str) -> Result<(), DisplayError>;
}
