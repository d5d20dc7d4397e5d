//! Character display trait
//!
//! Defines the operation set every character LCD driver exposes, split into
//! required operations and optional capabilities.

use crate::types::{CursorMode, ScrollDirection, WritingDirection};

/// Display operation errors
///
/// Every operation reports failure through this enum rather than panicking;
/// invalid input is a reportable condition, not a program error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Argument outside the valid range (e.g. cursor coordinates off-grid).
    /// Validated before any hardware access, so this never has side effects.
    InvalidArgument,
    /// Optional capability absent, or a scroll direction the implementation
    /// does not handle
    NotSupported,
    /// Bus or hardware error while talking to the display
    Communication,
    /// Operation attempted before the first `reset()`, for implementations
    /// that distinguish this state
    NotInitialized,
}

/// Contract for character-oriented LCD displays
///
/// Models a fixed grid of rows × columns holding one character code per
/// cell, with a single cursor marking the write position. Writing is
/// sequential: each written character lands at the cursor cell and the
/// cursor then advances one position in the current writing direction.
///
/// Dimensions are a property of the concrete device and are not part of
/// this contract.
///
/// # Capability tiers
///
/// The required operations must provide working behavior in every
/// implementation. The optional operations have provided bodies returning
/// [`DisplayError::NotSupported`] with no side effects; drivers override
/// the ones their hardware supports. Callers must check every returned
/// status — an ignored failure leaves logical state inconsistent with
/// intent (e.g. the cursor did not move).
///
/// # Lifecycle
///
/// One instance is bound to one physical display for its whole lifetime.
/// [`reset`](CharacterDisplay::reset) re-establishes the canonical state at
/// any point; there is no teardown operation.
pub trait CharacterDisplay {
    /// Reset the display to its canonical state
    ///
    /// Afterwards the surface is empty, the cursor is at (0, 0), the
    /// display is not shifted, the cursor mode is [`CursorMode::Off`], the
    /// writing direction is [`WritingDirection::LeftToRight`] and auto
    /// scroll is disabled. The backlight is explicitly not affected.
    ///
    /// Fails only on communication failure with the hardware.
    fn reset(&mut self) -> Result<(), DisplayError>;

    /// Clear the surface and home the cursor to (0, 0)
    ///
    /// Unlike [`reset`](CharacterDisplay::reset) this leaves cursor mode,
    /// writing direction, auto scroll and backlight untouched.
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to (0, 0) without altering the surface
    fn cursor_reset(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to the given position
    ///
    /// Returns [`DisplayError::InvalidArgument`] and leaves the cursor
    /// unchanged if `x` or `y` is outside the display grid.
    fn set_cursor(&mut self, x: u8, y: u8) -> Result<(), DisplayError>;

    /// Write one character code at the cursor, then advance the cursor
    ///
    /// Codes are written to display memory as-is; line breaks get no
    /// special handling. Use [`set_cursor`](CharacterDisplay::set_cursor)
    /// to change rows. What happens when the cursor would advance past the
    /// last column is implementation-defined (clamp, shift, ...) and must
    /// be documented by the driver.
    fn write_char(&mut self, c: u8) -> Result<(), DisplayError>;

    /// Write a sequence of character codes starting at the cursor
    ///
    /// Equivalent to calling [`write_char`](CharacterDisplay::write_char)
    /// for each byte in source order, regardless of the writing direction.
    /// Stops at the first error; characters already written stay written.
    fn write_bytes(&mut self, text: &[u8]) -> Result<(), DisplayError> {
        for &c in text {
            self.write_char(c)?;
        }
        Ok(())
    }

    /// Write text starting at the cursor
    ///
    /// Byte-wise equivalent of
    /// [`write_bytes`](CharacterDisplay::write_bytes); the display's
    /// character set decides what non-ASCII bytes look like.
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.write_bytes(text.as_bytes())
    }

    /// Enable or disable (blank) the display without altering its memory
    ///
    /// Optional capability.
    fn set_enabled(&mut self, _enabled: bool) -> Result<(), DisplayError> {
        Err(DisplayError::NotSupported)
    }

    /// Set the cursor visibility mode
    ///
    /// Optional capability.
    fn set_cursor_mode(&mut self, _mode: CursorMode) -> Result<(), DisplayError> {
        Err(DisplayError::NotSupported)
    }

    /// Switch the backlight on or off
    ///
    /// Independent of the enabled/blanked state, and not touched by
    /// [`reset`](CharacterDisplay::reset). Optional capability.
    fn set_backlight_enabled(&mut self, _enabled: bool) -> Result<(), DisplayError> {
        Err(DisplayError::NotSupported)
    }

    /// Set the direction the cursor advances after each write
    ///
    /// Affects subsequent writes only; already-written content is not
    /// reflowed. Optional capability.
    fn set_writing_direction(
        &mut self,
        _direction: WritingDirection,
    ) -> Result<(), DisplayError> {
        Err(DisplayError::NotSupported)
    }

    /// Enable or disable automatic scrolling
    ///
    /// With auto scroll enabled, writes that cross the visible boundary
    /// shift the display content instead of wrapping the cursor. Optional
    /// capability.
    fn set_auto_scroll_enabled(&mut self, _enabled: bool) -> Result<(), DisplayError> {
        Err(DisplayError::NotSupported)
    }

    /// Shift the visible window one step in the given direction
    ///
    /// Optional capability; an implementation may support only some
    /// directions and report [`DisplayError::NotSupported`] for the rest.
    fn scroll(&mut self, _direction: ScrollDirection) -> Result<(), DisplayError> {
        Err(DisplayError::NotSupported)
    }
}
