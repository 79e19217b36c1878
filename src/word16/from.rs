//! `From`-like conversions for [`Word16`].

use super::Word16;

impl Word16 {
    /// Create a [`Word16`] from a `u8` integer (const-friendly)
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        Word16(n as u16)
    }

    /// Create a [`Word16`] from a `u16` integer (const-friendly)
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        Word16(n)
    }

    /// Return the inner `u16`.
    #[must_use]
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

impl From<u8> for Word16 {
    #[inline]
    fn from(n: u8) -> Word16 {
        Word16(n.into())
    }
}

impl From<u16> for Word16 {
    #[inline]
    fn from(n: u16) -> Word16 {
        Word16(n)
    }
}

impl From<Word16> for u16 {
    #[inline]
    fn from(word: Word16) -> u16 {
        word.0
    }
}

impl From<Word16> for u32 {
    #[inline]
    fn from(word: Word16) -> u32 {
        word.0.into()
    }
}
