//! Single-bit carry/borrow flag.

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Processor carry flag.
///
/// A rotate shifts the flag in at the low end of a word and captures the bit
/// that falls out of the high end. A subtraction sets it when no borrow
/// occurred, following 6502 conventions.
///
/// Values of this type are always owned by a single computation: a
/// [`Carry`] is created clear at the start of each division and dropped when
/// it returns.
#[derive(Copy, Clone, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Carry(u8);

impl Carry {
    /// The cleared flag.
    pub const CLEAR: Self = Carry(0);

    /// The set flag.
    pub const SET: Self = Carry(1);

    /// Create a flag from a `bool`.
    #[inline]
    #[must_use]
    pub const fn new(set: bool) -> Self {
        Carry(set as u8)
    }

    /// The carry produced by shifting `word` left by one: bit 15.
    #[inline(always)]
    #[must_use]
    pub(crate) const fn from_msb(word: u16) -> Self {
        Carry((word >> (u16::BITS - 1)) as u8)
    }

    /// Clear the flag (`CLC`).
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::CLEAR;
    }

    /// Set the flag (`SEC`).
    #[inline]
    pub fn set(&mut self) {
        *self = Self::SET;
    }

    /// Is the flag set?
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    /// The flag as the bit it contributes when shifted into a word: `0` or `1`.
    #[inline(always)]
    #[must_use]
    pub const fn to_u16(self) -> u16 {
        self.0 as u16
    }

    /// Logical complement of the flag.
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Carry(self.0 ^ 1)
    }
}

impl From<bool> for Carry {
    #[inline]
    fn from(set: bool) -> Self {
        Self::new(set)
    }
}

impl From<Carry> for bool {
    #[inline]
    fn from(carry: Carry) -> bool {
        carry.is_set()
    }
}

impl From<Choice> for Carry {
    #[inline]
    fn from(choice: Choice) -> Self {
        Carry(choice.unwrap_u8())
    }
}

impl From<Carry> for Choice {
    #[inline]
    fn from(carry: Carry) -> Choice {
        Choice::from(carry.0)
    }
}

impl ConditionallySelectable for Carry {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Carry(u8::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Carry {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for Carry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Carry({})", self.0)
    }
}

impl fmt::Display for Carry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Carry;
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

    #[test]
    fn default_is_clear() {
        assert_eq!(Carry::default(), Carry::CLEAR);
        assert!(!Carry::default().is_set());
    }

    #[test]
    fn set_and_clear() {
        let mut carry = Carry::CLEAR;
        carry.set();
        assert!(carry.is_set());
        carry.set();
        assert!(carry.is_set());
        carry.clear();
        assert!(!carry.is_set());
        carry.clear();
        assert_eq!(carry, Carry::CLEAR);
    }

    #[test]
    fn from_msb() {
        assert_eq!(Carry::from_msb(0x8000), Carry::SET);
        assert_eq!(Carry::from_msb(0xffff), Carry::SET);
        assert_eq!(Carry::from_msb(0x7fff), Carry::CLEAR);
        assert_eq!(Carry::from_msb(0), Carry::CLEAR);
    }

    #[test]
    fn to_u16() {
        assert_eq!(Carry::CLEAR.to_u16(), 0);
        assert_eq!(Carry::SET.to_u16(), 1);
    }

    #[test]
    fn not() {
        assert_eq!(Carry::SET.not(), Carry::CLEAR);
        assert_eq!(Carry::CLEAR.not(), Carry::SET);
    }

    #[test]
    fn choice_conversions() {
        assert!(bool::from(Choice::from(Carry::SET)));
        assert!(!bool::from(Choice::from(Carry::CLEAR)));
        assert_eq!(Carry::from(Choice::from(1)), Carry::SET);
        assert_eq!(Carry::from(Choice::from(0)), Carry::CLEAR);
    }

    #[test]
    fn conditional_select() {
        let a = Carry::CLEAR;
        let b = Carry::SET;
        assert_eq!(Carry::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(Carry::conditional_select(&a, &b, Choice::from(1)), b);
    }

    #[test]
    fn ct_eq() {
        assert!(bool::from(Carry::SET.ct_eq(&Carry::SET)));
        assert!(!bool::from(Carry::SET.ct_eq(&Carry::CLEAR)));
    }
}
