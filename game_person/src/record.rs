//! The packed record and its decode accessors.
//!
//! Every accessor is the exact inverse of the packing arithmetic on the write
//! side: compute the field mask, shift the containing word down, mask, cast.

use std::borrow::Cow;
use std::fmt;

use bit_fields::BitField;
use bytemuck_derive::{Pod, Zeroable};

use crate::error::RecordError;
use crate::layout::{
    EXPERIENCE, FAMILY, GOLD, GUN, HEALTH, HOUSE, KIND, LEVEL, MANA, NAME_LEN, RESPECT, STRENGTH,
};

/// Profession stored in the record's 2-bit kind field.
///
/// The field can also hold the raw value 3, which names no profession;
/// [`PersonRecord::kind`] decodes it as `None` while [`PersonRecord::kind_raw`]
/// preserves it.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Profession {
    Builder = 0,
    Blacksmith = 1,
    Warrior = 2,
}

impl Profession {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Builder),
            1 => Some(Self::Blacksmith),
            2 => Some(Self::Warrior),
            _ => None,
        }
    }
}

/// A game character packed into exactly 64 bytes.
///
/// | field | type | byte offset |
/// |---|---|---|
/// | head | `u64` bitfield container | 0 |
/// | ox, oy, oz | `i32` | 8, 12, 16 |
/// | tail | `u16` bitfield container | 20 |
/// | name | `[u8; 42]` zero-padded | 22 |
///
/// Words are stored in the host's native integer representation; records
/// round-trip within one implementation, not across byte orders.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct PersonRecord {
    pub(crate) head: u64,
    pub(crate) ox: i32,
    pub(crate) oy: i32,
    pub(crate) oz: i32,
    pub(crate) tail: u16,
    pub(crate) name: [u8; NAME_LEN],
}

// The 64-byte size is a storage contract, not a measurement.
const _: () = assert!(size_of::<PersonRecord>() == PersonRecord::SIZE);

impl PersonRecord {
    /// Exact size of the packed representation in bytes.
    pub const SIZE: usize = 64;

    /// An all-zero record: every stat 0, flags clear, empty name.
    pub fn zeroed() -> Self {
        bytemuck::Zeroable::zeroed()
    }

    pub fn gold(&self) -> u32 {
        GOLD.read(self.head) as u32
    }

    pub fn mana(&self) -> u32 {
        MANA.read(self.head) as u32
    }

    pub fn health(&self) -> u32 {
        HEALTH.read(self.head) as u32
    }

    pub fn respect(&self) -> u32 {
        RESPECT.read(self.head) as u32
    }

    pub fn strength(&self) -> u32 {
        STRENGTH.read(self.head) as u32
    }

    pub fn experience(&self) -> u32 {
        EXPERIENCE.read(self.head) as u32
    }

    pub fn x(&self) -> i32 {
        self.ox
    }

    pub fn y(&self) -> i32 {
        self.oy
    }

    pub fn z(&self) -> i32 {
        self.oz
    }

    pub fn level(&self) -> u8 {
        LEVEL.read(self.tail as u64) as u8
    }

    pub fn has_house(&self) -> bool {
        HOUSE.is_set(self.tail as u64)
    }

    pub fn has_gun(&self) -> bool {
        GUN.is_set(self.tail as u64)
    }

    pub fn has_family(&self) -> bool {
        FAMILY.is_set(self.tail as u64)
    }

    /// The kind field as stored, including the unnamed value 3.
    pub fn kind_raw(&self) -> u8 {
        KIND.read(self.tail as u64) as u8
    }

    pub fn kind(&self) -> Option<Profession> {
        Profession::from_raw(self.kind_raw())
    }

    /// Name bytes up to the first zero; the full buffer if none.
    pub fn name_bytes(&self) -> &[u8] {
        match self.name.iter().position(|&b| b == 0) {
            Some(end) => &self.name[..end],
            None => &self.name[..],
        }
    }

    /// Name as text. Truncation at the buffer boundary can split a multi-byte
    /// character, so decoding is lossy.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    /// Zero-copy view of the packed representation.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a record back from exactly [`PersonRecord::SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        bytemuck::pod_read_unaligned(bytes)
    }

    /// Length-checked variant of [`PersonRecord::from_bytes`] for buffers of
    /// runtime size.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.len() != Self::SIZE {
            return Err(RecordError::InvalidLength {
                expected: Self::SIZE,
                found: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    pub(crate) fn set_head(&mut self, field: BitField, value: u64) {
        self.head = field.write(self.head, value);
    }

    pub(crate) fn set_tail(&mut self, field: BitField, value: u64) {
        self.tail = field.write(self.tail as u64, value) as u16;
    }

    pub(crate) fn set_tail_flag(&mut self, field: BitField) {
        self.tail = field.set(self.tail as u64) as u16;
    }

    /// Copies at most [`NAME_LEN`] bytes of `text`; the rest of the buffer is
    /// zeroed. Longer text is truncated, not rejected.
    pub(crate) fn set_name(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let take = bytes.len().min(NAME_LEN);
        self.name = [0; NAME_LEN];
        self.name[..take].copy_from_slice(&bytes[..take]);
    }

    pub(crate) fn set_coordinates(&mut self, x: i32, y: i32, z: i32) {
        self.ox = x;
        self.oy = y;
        self.oz = z;
    }
}

impl fmt::Debug for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonRecord")
            .field("name", &self.name())
            .field("coordinates", &(self.ox, self.oy, self.oz))
            .field("gold", &self.gold())
            .field("mana", &self.mana())
            .field("health", &self.health())
            .field("respect", &self.respect())
            .field("strength", &self.strength())
            .field("experience", &self.experience())
            .field("level", &self.level())
            .field("house", &self.has_house())
            .field("gun", &self.has_gun())
            .field("family", &self.has_family())
            .field("kind", &self.kind_raw())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_exactly_64_bytes() {
        assert_eq!(size_of::<PersonRecord>(), 64);
        assert_eq!(PersonRecord::zeroed().as_bytes().len(), 64);
    }

    #[test]
    fn zeroed_record_decodes_to_defaults() {
        let record = PersonRecord::zeroed();
        assert_eq!(record.gold(), 0);
        assert_eq!(record.mana(), 0);
        assert_eq!(record.health(), 0);
        assert_eq!(record.respect(), 0);
        assert_eq!(record.strength(), 0);
        assert_eq!(record.experience(), 0);
        assert_eq!((record.x(), record.y(), record.z()), (0, 0, 0));
        assert_eq!(record.level(), 0);
        assert!(!record.has_house());
        assert!(!record.has_gun());
        assert!(!record.has_family());
        assert_eq!(record.kind(), Some(Profession::Builder));
        assert_eq!(record.name(), "");
    }

    #[test]
    fn byte_view_roundtrip() {
        let mut record = PersonRecord::zeroed();
        record.set_head(GOLD, 123_456);
        record.set_tail(LEVEL, 7);
        record.set_name("Sigrid");
        record.set_coordinates(-5, 17, 9000);

        let bytes: [u8; PersonRecord::SIZE] = record.as_bytes().try_into().unwrap();
        let restored = PersonRecord::from_bytes(&bytes);
        assert_eq!(restored, record);

        let parsed = PersonRecord::try_from_bytes(record.as_bytes()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn try_from_bytes_rejects_wrong_length() {
        let result = PersonRecord::try_from_bytes(&[0u8; 63]);
        assert_eq!(
            result,
            Err(RecordError::InvalidLength {
                expected: 64,
                found: 63
            })
        );
    }

    #[test]
    fn name_without_terminator_returns_full_buffer() {
        let mut record = PersonRecord::zeroed();
        record.set_name(&"x".repeat(NAME_LEN));
        assert_eq!(record.name_bytes().len(), NAME_LEN);
        assert_eq!(record.name(), "x".repeat(NAME_LEN));
    }

    #[test]
    fn profession_from_raw() {
        assert_eq!(Profession::from_raw(0), Some(Profession::Builder));
        assert_eq!(Profession::from_raw(1), Some(Profession::Blacksmith));
        assert_eq!(Profession::from_raw(2), Some(Profession::Warrior));
        assert_eq!(Profession::from_raw(3), None);
    }
}
