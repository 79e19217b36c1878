//! Bitwise operations on [`Word16`].

use super::Word16;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

impl Word16 {
    /// Calculates `a & b`.
    #[inline(always)]
    #[must_use]
    pub const fn bitand(self, rhs: Self) -> Self {
        Word16(self.0 & rhs.0)
    }

    /// Calculates `a | b`.
    #[inline(always)]
    #[must_use]
    pub const fn bitor(self, rhs: Self) -> Self {
        Word16(self.0 | rhs.0)
    }

    /// Calculates `a ^ b`.
    #[inline(always)]
    #[must_use]
    pub const fn bitxor(self, rhs: Self) -> Self {
        Word16(self.0 ^ rhs.0)
    }

    /// Calculates `!a`.
    #[inline(always)]
    #[must_use]
    pub const fn not(self) -> Self {
        Word16(!self.0)
    }
}

impl BitAnd for Word16 {
    type Output = Word16;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Word16 {
        self.bitand(rhs)
    }
}

impl BitAndAssign for Word16 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.bitand(rhs);
    }
}

impl BitOr for Word16 {
    type Output = Word16;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Word16 {
        self.bitor(rhs)
    }
}

impl BitOrAssign for Word16 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.bitor(rhs);
    }
}

impl BitXor for Word16 {
    type Output = Word16;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Word16 {
        self.bitxor(rhs)
    }
}

impl BitXorAssign for Word16 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.bitxor(rhs);
    }
}

impl Not for Word16 {
    type Output = Word16;

    #[inline(always)]
    fn not(self) -> Word16 {
        self.not()
    }
}

#[cfg(test)]
mod tests {
    use crate::Word16;

    #[test]
    fn bit_ops() {
        let a = Word16(0b1100);
        let b = Word16(0b1010);
        assert_eq!(a & b, Word16(0b1000));
        assert_eq!(a | b, Word16(0b1110));
        assert_eq!(a ^ b, Word16(0b0110));
        assert_eq!(!Word16::ZERO, Word16::MAX);
    }

    #[test]
    fn assign_ops() {
        let mut w = Word16(0x00ff);
        w |= Word16(0xff00);
        assert_eq!(w, Word16::MAX);
        w &= Word16(0x0f0f);
        assert_eq!(w, Word16(0x0f0f));
        w ^= Word16(0x0f00);
        assert_eq!(w, Word16(0x000f));
    }
}
