//! Bit layout of the 64-byte person record.
//!
//! The head word packs six stats LSB first with no gaps; 63 of its 64 bits
//! are used and the top bit is reserved. The tail word packs the level, three
//! flags and the profession kind in its low 9 bits. Each field is chained off
//! the previous one, so the offsets cannot drift out of alignment.
//!
//! Changing any offset or width here breaks binary compatibility with stored
//! records.

use bit_fields::BitField;

/// Capacity of the zero-padded name buffer.
pub const NAME_LEN: usize = 42;

// head word, LSB first
pub const GOLD: BitField = BitField::new(0, 31);
pub const MANA: BitField = GOLD.next(10);
pub const HEALTH: BitField = MANA.next(10);
pub const RESPECT: BitField = HEALTH.next(4);
pub const STRENGTH: BitField = RESPECT.next(4);
pub const EXPERIENCE: BitField = STRENGTH.next(4);

// tail word, LSB first
pub const LEVEL: BitField = BitField::new(0, 4);
pub const HOUSE: BitField = LEVEL.next(1);
pub const GUN: BitField = HOUSE.next(1);
pub const FAMILY: BitField = GUN.next(1);
pub const KIND: BitField = FAMILY.next(2);

// Valid ranges. Gold, experience and kind are bounded by their storage width
// exactly; the rest are game rules narrower than the width.
pub const GOLD_MAX: u64 = GOLD.max_value();
pub const MANA_MAX: u64 = 1000;
pub const HEALTH_MAX: u64 = 1000;
pub const RESPECT_MAX: u64 = 10;
pub const STRENGTH_MAX: u64 = 10;
pub const EXPERIENCE_MAX: u64 = EXPERIENCE.max_value();
pub const LEVEL_MAX: u64 = 10;
pub const KIND_MAX: u64 = KIND.max_value();

// Head bit 63 is reserved; the tail uses 9 of 16 bits.
const _: () = assert!(EXPERIENCE.offset() + EXPERIENCE.width() == 63);
const _: () = assert!(KIND.offset() + KIND.width() == 9);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_offsets_match_documented_layout() {
        assert_eq!(GOLD.offset(), 0);
        assert_eq!(MANA.offset(), 31);
        assert_eq!(HEALTH.offset(), 41);
        assert_eq!(RESPECT.offset(), 51);
        assert_eq!(STRENGTH.offset(), 55);
        assert_eq!(EXPERIENCE.offset(), 59);
    }

    #[test]
    fn tail_offsets_match_documented_layout() {
        assert_eq!(LEVEL.offset(), 0);
        assert_eq!(HOUSE.offset(), 4);
        assert_eq!(GUN.offset(), 5);
        assert_eq!(FAMILY.offset(), 6);
        assert_eq!(KIND.offset(), 7);
    }

    #[test]
    fn semantic_bounds_fit_storage_widths() {
        assert!(MANA_MAX <= MANA.max_value());
        assert!(HEALTH_MAX <= HEALTH.max_value());
        assert!(RESPECT_MAX <= RESPECT.max_value());
        assert!(STRENGTH_MAX <= STRENGTH.max_value());
        assert!(LEVEL_MAX <= LEVEL.max_value());
        assert_eq!(GOLD_MAX, (1 << 31) - 1);
        assert_eq!(EXPERIENCE_MAX, 15);
        assert_eq!(KIND_MAX, 3);
    }
}
