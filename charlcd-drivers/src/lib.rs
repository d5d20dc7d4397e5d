//! Reference implementations of the charlcd display contract
//!
//! This crate provides concrete implementations of the
//! [`CharacterDisplay`](charlcd_core::CharacterDisplay) trait that need no
//! hardware:
//!
//! - [`BufferDisplay`] - in-memory display for tests and host-side rendering
//!
//! Hardware drivers (parallel HD44780, I2C backpack, ...) live in their own
//! crates; they take the bus handle at construction and implement the same
//! trait.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;

pub use buffer::BufferDisplay;
