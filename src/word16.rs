//! Fixed-width 16-bit machine words, the operand size of the division loop.
//!
//! All arithmetic on [`Word16`] truncates to 16 bits exactly as a register
//! would; bits that leave the top of a word survive only through [`Carry`].
//!
//! [`Carry`]: crate::Carry

mod add;
mod bits;
mod cmp;
mod div;
mod encoding;
mod from;
mod rol;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{Bounded, Constants, ZeroConstant};
use core::fmt;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 16-bit unsigned machine word.
///
/// Used for the dividend, divisor, quotient and remainder of the division
/// loop, and as the operand of [`Word16::rol`].
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Word16(pub u16);

impl Word16 {
    /// The value `0`.
    pub const ZERO: Self = Word16(0);

    /// The value `1`.
    pub const ONE: Self = Word16(1);

    /// Maximum value this [`Word16`] can express.
    pub const MAX: Self = Word16(u16::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = 16;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = 2;

    /// Mask selecting the highest bit, the one rotated out into the carry.
    pub const HI_BIT: u16 = 0x8000;

    /// Is the highest bit of this word set?
    #[inline]
    #[must_use]
    pub const fn msb(self) -> bool {
        self.0 & Self::HI_BIT == Self::HI_BIT
    }
}

impl Bounded for Word16 {
    const BITS: u32 = Self::BITS;
    const BYTES: usize = Self::BYTES;
}

impl ZeroConstant for Word16 {
    const ZERO: Self = Self::ZERO;
}

impl Constants for Word16 {
    const ONE: Self = Self::ONE;
    const MAX: Self = Self::MAX;
}

impl num_traits::Bounded for Word16 {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl fmt::Debug for Word16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word16(0x{self:04X})")
    }
}

impl fmt::Display for Word16 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for Word16 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0b")?;
        }

        write!(f, "{:0width$b}", &self.0, width = Self::BITS as usize)
    }
}

impl fmt::LowerHex for Word16 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Word16 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Word16 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(u16::deserialize(deserializer)?))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Word16 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Word16 {}

#[cfg(test)]
mod tests {
    use super::Word16;
    use std::format;

    #[test]
    fn msb() {
        assert!(Word16(0x8000).msb());
        assert!(Word16::MAX.msb());
        assert!(!Word16(0x7fff).msb());
        assert!(!Word16::ZERO.msb());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Word16(42)), "Word16(0x002A)");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Word16(95)), "95");
    }

    #[test]
    fn binary() {
        assert_eq!(format!("{:b}", Word16(5)), "0000000000000101");
        assert_eq!(format!("{:#b}", Word16(0x8000)), "0b1000000000000000");
    }

    #[test]
    fn hex() {
        assert_eq!(format!("{:x}", Word16(0xbeef)), "beef");
        assert_eq!(format!("{:#X}", Word16(0xa)), "0x000A");
    }
}
