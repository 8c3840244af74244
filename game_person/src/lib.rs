//! # game_person
//!
//! A game character packed into a fixed 64-byte record.
//!
//! Six stats share one 64-bit head word, the level, three flags and the
//! profession kind share one 16-bit tail word, and the rest of the record is
//! three signed coordinates and a zero-padded 42-byte name buffer. The layout
//! is a storage contract: exactly 64 bytes on every platform, checked at
//! compile time.
//!
//! Records are constructed by folding an ordered sequence of [`Step`]s over a
//! zeroed record. A step with an out-of-range value is skipped with a warning
//! and the record keeps the field's prior value; construction never fails.
//!
//! ```rust
//! use game_person::{PersonRecord, Profession, Step};
//!
//! let person = PersonRecord::build([
//!     Step::Name("Torvald".into()),
//!     Step::Coordinates { x: 10, y: -4, z: 0 },
//!     Step::Gold(2500),
//!     Step::Health(1000),
//!     Step::Mana(9999), // out of range: skipped, mana stays 0
//!     Step::House,
//!     Step::Kind(Profession::Blacksmith as u8),
//! ]);
//!
//! assert_eq!(person.name(), "Torvald");
//! assert_eq!(person.gold(), 2500);
//! assert_eq!(person.mana(), 0);
//! assert!(person.has_house());
//! assert_eq!(person.kind(), Some(Profession::Blacksmith));
//! assert_eq!(person.as_bytes().len(), PersonRecord::SIZE);
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod record;

pub use builder::{RecordBuilder, Step};
pub use error::RecordError;
pub use record::{PersonRecord, Profession};

// Re-export bytemuck for callers working with the raw byte view.
pub use bytemuck;
