//! # bit_fields
//!
//! A `no_std` compatible library for sub-word bitfield layouts.
//!
//! A [`BitField`] describes one sub-field of an unsigned container word as an
//! `(offset, width)` pair. All mask and shift arithmetic is derived from the
//! descriptor, so a layout is declared once as a table of constants instead of
//! hand-duplicating the arithmetic per field.
//!
//! ```rust
//! use bit_fields::BitField;
//!
//! // A control register: mode in bits 0-2, channel in bits 3-6.
//! const MODE: BitField = BitField::new(0, 3);
//! const CHANNEL: BitField = MODE.next(4);
//!
//! let mut reg = 0u64;
//! reg = MODE.write(reg, 5);
//! reg = CHANNEL.write(reg, 12);
//!
//! assert_eq!(MODE.read(reg), 5);
//! assert_eq!(CHANNEL.read(reg), 12);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitFieldError;

mod field;
pub use field::BitField;
