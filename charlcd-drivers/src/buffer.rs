//! In-memory character display
//!
//! Models the full logical state of a character LCD without any hardware
//! behind it. Used as the reference implementation of the contract, for
//! driver-independent tests, and for host-side rendering.

use charlcd_core::{CharacterDisplay, CursorMode, DisplayError, ScrollDirection, WritingDirection};
use heapless::Vec;

/// Character code used for empty cells
const BLANK: u8 = b' ';

/// In-memory display with `COLS` × `ROWS` character cells
///
/// Each dimension must be in `1..=255` so coordinates fit in `u8`; other
/// instantiations are rejected at compile time.
///
/// Starts uninitialized: every operation except [`reset`] and
/// [`set_backlight_enabled`] reports [`DisplayError::NotInitialized`] until
/// the first reset. The backlight is independent of reset and usable at any
/// time.
///
/// End-of-row policy: the cursor clamps. Without auto scroll, advancing past
/// the edge column leaves the cursor on the edge cell and further writes
/// overwrite it. With auto scroll, a write on the edge cell leaves the row
/// fully visible and marks a shift as pending; the next sequential write
/// first shifts the whole surface one column against the writing direction,
/// then lands on the edge cell. An explicit cursor move, a direction change
/// or disabling auto scroll cancels the pending shift. The cursor never
/// wraps to another row.
///
/// Explicit [`scroll`] requests rotate the visible window over display
/// memory, one column per call; only horizontal directions are supported.
///
/// [`reset`]: CharacterDisplay::reset
/// [`set_backlight_enabled`]: CharacterDisplay::set_backlight_enabled
/// [`scroll`]: CharacterDisplay::scroll
#[derive(Clone)]
pub struct BufferDisplay<const COLS: usize, const ROWS: usize> {
    /// Display memory; the visible window is `shift` columns into it
    cells: [[u8; COLS]; ROWS],
    cursor_x: u8,
    cursor_y: u8,
    cursor_mode: CursorMode,
    direction: WritingDirection,
    auto_scroll: bool,
    /// Auto-scroll shift owed by the next sequential write
    pending_shift: bool,
    /// Window offset in columns, 0..COLS
    shift: usize,
    enabled: bool,
    backlight: bool,
    initialized: bool,
}

impl<const COLS: usize, const ROWS: usize> Default for BufferDisplay<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> BufferDisplay<COLS, ROWS> {
    /// Coordinates are `u8` and the grid must not be empty; checked at
    /// compile time when the type is instantiated
    const GRID_OK: () = assert!(
        COLS > 0 && ROWS > 0 && COLS <= u8::MAX as usize && ROWS <= u8::MAX as usize,
        "BufferDisplay dimensions must be 1..=255"
    );

    /// Create a new uninitialized display with the backlight off
    pub fn new() -> Self {
        let () = Self::GRID_OK;
        Self {
            cells: [[BLANK; COLS]; ROWS],
            cursor_x: 0,
            cursor_y: 0,
            cursor_mode: CursorMode::Off,
            direction: WritingDirection::LeftToRight,
            auto_scroll: false,
            pending_shift: false,
            shift: 0,
            enabled: true,
            backlight: false,
            initialized: false,
        }
    }

    /// Display dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (u8, u8) {
        (COLS as u8, ROWS as u8)
    }

    /// Current cursor position as (x, y)
    pub const fn cursor(&self) -> (u8, u8) {
        (self.cursor_x, self.cursor_y)
    }

    /// Current cursor visibility mode
    pub const fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Current writing direction
    pub const fn writing_direction(&self) -> WritingDirection {
        self.direction
    }

    /// Whether auto scroll is enabled
    pub const fn is_auto_scroll_enabled(&self) -> bool {
        self.auto_scroll
    }

    /// Whether the display content is enabled (not blanked)
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the backlight is on
    pub const fn is_backlight_enabled(&self) -> bool {
        self.backlight
    }

    /// Whether `reset()` has been called at least once
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Window offset in columns relative to display memory
    pub const fn scroll_offset(&self) -> usize {
        self.shift
    }

    /// Raw character code at a memory position, ignoring the window shift
    pub fn char_at(&self, x: u8, y: u8) -> Option<u8> {
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// One visible row, with window shift and blanking applied
    pub fn visible_line(&self, y: u8) -> Option<Vec<u8, COLS>> {
        let row = self.cells.get(y as usize)?;
        let mut line = Vec::new();
        for x in 0..COLS {
            let code = if self.enabled {
                row[(x + self.shift) % COLS]
            } else {
                BLANK
            };
            // Capacity is COLS, cannot overflow
            let _ = line.push(code);
        }
        Some(line)
    }

    fn ready(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    fn blank_surface(&mut self) {
        self.cells = [[BLANK; COLS]; ROWS];
    }

    /// Shift the surface one column toward lower indices, blanking the
    /// vacated edge column
    fn shift_surface_left(&mut self) {
        for row in &mut self.cells {
            row.copy_within(1.., 0);
            row[COLS - 1] = BLANK;
        }
    }

    /// Shift the surface one column toward higher indices
    fn shift_surface_right(&mut self) {
        for row in &mut self.cells {
            row.copy_within(..COLS - 1, 1);
            row[0] = BLANK;
        }
    }

    /// Shift owed by a previous edge write, applied before the next one
    fn apply_pending_shift(&mut self) {
        if !self.pending_shift {
            return;
        }
        self.pending_shift = false;
        match self.direction {
            WritingDirection::LeftToRight => self.shift_surface_left(),
            WritingDirection::RightToLeft => self.shift_surface_right(),
        }
    }

    fn advance_cursor(&mut self) {
        match self.direction {
            WritingDirection::LeftToRight => {
                if (self.cursor_x as usize) + 1 < COLS {
                    self.cursor_x += 1;
                } else if self.auto_scroll {
                    self.pending_shift = true;
                }
            }
            WritingDirection::RightToLeft => {
                if self.cursor_x > 0 {
                    self.cursor_x -= 1;
                } else if self.auto_scroll {
                    self.pending_shift = true;
                }
            }
        }
    }
}

impl<const COLS: usize, const ROWS: usize> CharacterDisplay for BufferDisplay<COLS, ROWS> {
    fn reset(&mut self) -> Result<(), DisplayError> {
        self.blank_surface();
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.cursor_mode = CursorMode::Off;
        self.direction = WritingDirection::LeftToRight;
        self.auto_scroll = false;
        self.pending_shift = false;
        self.shift = 0;
        self.enabled = true;
        self.initialized = true;
        // Backlight is deliberately untouched
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ready()?;
        self.blank_surface();
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.pending_shift = false;
        // Clear implies return-home, which cancels the window shift
        self.shift = 0;
        Ok(())
    }

    fn cursor_reset(&mut self) -> Result<(), DisplayError> {
        self.ready()?;
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.pending_shift = false;
        Ok(())
    }

    fn set_cursor(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        self.ready()?;
        if x as usize >= COLS || y as usize >= ROWS {
            return Err(DisplayError::InvalidArgument);
        }
        self.cursor_x = x;
        self.cursor_y = y;
        self.pending_shift = false;
        Ok(())
    }

    fn write_char(&mut self, c: u8) -> Result<(), DisplayError> {
        self.ready()?;
        self.apply_pending_shift();
        self.cells[self.cursor_y as usize][self.cursor_x as usize] = c;
        self.advance_cursor();
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), DisplayError> {
        self.ready()?;
        self.enabled = enabled;
        Ok(())
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) -> Result<(), DisplayError> {
        self.ready()?;
        self.cursor_mode = mode;
        Ok(())
    }

    fn set_backlight_enabled(&mut self, enabled: bool) -> Result<(), DisplayError> {
        self.backlight = enabled;
        Ok(())
    }

    fn set_writing_direction(&mut self, direction: WritingDirection) -> Result<(), DisplayError> {
        self.ready()?;
        if direction != self.direction {
            self.direction = direction;
            self.pending_shift = false;
        }
        Ok(())
    }

    fn set_auto_scroll_enabled(&mut self, enabled: bool) -> Result<(), DisplayError> {
        self.ready()?;
        self.auto_scroll = enabled;
        if !enabled {
            self.pending_shift = false;
        }
        Ok(())
    }

    fn scroll(&mut self, direction: ScrollDirection) -> Result<(), DisplayError> {
        self.ready()?;
        match direction {
            ScrollDirection::Left => {
                self.shift = (self.shift + 1) % COLS;
                Ok(())
            }
            ScrollDirection::Right => {
                self.shift = (self.shift + COLS - 1) % COLS;
                Ok(())
            }
            // Character LCDs shift horizontally only
            ScrollDirection::Up | ScrollDirection::Down => Err(DisplayError::NotSupported),
        }
    }
}
