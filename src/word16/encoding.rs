//! Byte encoding of [`Word16`], high byte first or low byte first.

use super::Word16;
use crate::Encoding;

impl Word16 {
    /// Decode from big endian bytes.
    #[inline]
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Word16(u16::from_be_bytes(bytes))
    }

    /// Decode from little endian bytes, the 6502's in-memory order.
    #[inline]
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Word16(u16::from_le_bytes(bytes))
    }

    /// Encode to big endian bytes.
    #[inline]
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Encode to little endian bytes.
    #[inline]
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Split into `(lo, hi)` bytes, the two 8-bit registers a 6502 routine
    /// would hold this word in.
    #[inline]
    #[must_use]
    pub const fn to_lo_hi(self) -> (u8, u8) {
        (self.0 as u8, (self.0 >> 8) as u8)
    }

    /// Join `(lo, hi)` bytes into a word.
    #[inline]
    #[must_use]
    pub const fn from_lo_hi(lo: u8, hi: u8) -> Self {
        Word16(((hi as u16) << 8) | lo as u16)
    }
}

impl Encoding for Word16 {
    type Repr = [u8; 2];

    #[inline]
    fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self::from_be_bytes(bytes)
    }

    #[inline]
    fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_le_bytes(bytes)
    }

    #[inline]
    fn to_be_bytes(&self) -> [u8; 2] {
        (*self).to_be_bytes()
    }

    #[inline]
    fn to_le_bytes(&self) -> [u8; 2] {
        (*self).to_le_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::Word16;

    #[test]
    fn byte_order() {
        let w = Word16(0x1234);
        assert_eq!(w.to_be_bytes(), [0x12, 0x34]);
        assert_eq!(w.to_le_bytes(), [0x34, 0x12]);
        assert_eq!(Word16::from_le_bytes([0x34, 0x12]), w);
        assert_eq!(Word16::from_be_bytes([0x12, 0x34]), w);
    }

    #[test]
    fn lo_hi() {
        assert_eq!(Word16(0xbeef).to_lo_hi(), (0xef, 0xbe));
        assert_eq!(Word16::from_lo_hi(0x5f, 0x00), Word16(95));
    }
}
