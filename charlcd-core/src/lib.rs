//! Character LCD display contract
//!
//! This crate defines a hardware-independent interface for character-oriented
//! LCD displays: a fixed grid of rows × columns, a single cursor, and
//! sequential memory-mapped writing. Application code talks to the
//! [`CharacterDisplay`] trait; concrete drivers (parallel HD44780, I2C/SPI
//! expander backpacks, in-memory test displays) implement it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (menus, status screens)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-core (this crate - contract)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ hardware      │       │ charlcd-      │
//! │ drivers       │       │ drivers       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! The contract is split into two capability tiers. Required operations
//! (reset, clear, cursor movement, writing) must work on every
//! implementation. Optional operations (blanking, cursor styling, backlight,
//! writing direction, scrolling) have provided bodies that report
//! [`DisplayError::NotSupported`], so a driver only overrides what its
//! hardware can actually do.
//!
//! All calls are synchronous and blocking; a call returns only on completion
//! or failure. Nothing here is reentrant, and drivers sharing a bus with
//! other peripherals must serialize access themselves.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod types;

// Re-export key types at crate root for convenience
pub use display::{CharacterDisplay, DisplayError};
pub use types::{CursorMode, ScrollDirection, WritingDirection};
