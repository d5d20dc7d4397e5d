//! Shared type vocabulary for the display contract
//!
//! These enums describe logical display state only; how a controller maps
//! them onto command bytes is the concrete driver's business.

/// Cursor visibility mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorMode {
    /// No visible cursor
    #[default]
    Off,
    /// Steady underline
    Line,
    /// Blinking block
    Block,
}

/// Direction the cursor advances after each written character
///
/// The direction affects cursor advance only. Text passed to `write_text`
/// is always consumed in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WritingDirection {
    /// Cursor moves toward increasing column index
    #[default]
    LeftToRight,
    /// Cursor moves toward decreasing column index
    RightToLeft,
}

/// Direction for an explicit display scroll request
///
/// Not every implementation supports every direction; character LCDs
/// typically shift horizontally only. Unsupported directions are reported
/// per call, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Left,
    Right,
    Up,
    Down,
}
