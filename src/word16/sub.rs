//! Word subtraction

use super::Word16;
use crate::{Carry, CheckedSub};
use core::ops::{Sub, SubAssign};
use subtle::CtOption;

impl Word16 {
    /// Computes `self - rhs - (1 - carry)` the way the 6502 `SBC` instruction
    /// does, returning the wrapped difference along with the new carry.
    ///
    /// The carry acts as an inverted borrow: it must be set on entry for a
    /// plain subtraction, and it is set on exit iff no borrow occurred, i.e.
    /// `self >= rhs + (1 - carry)`.
    #[inline(always)]
    #[must_use]
    pub const fn sbc(self, rhs: Self, carry: Carry) -> (Self, Carry) {
        let borrow_in = carry.not().to_u16();
        let (diff, b1) = self.0.overflowing_sub(rhs.0);
        let (diff, b2) = diff.overflowing_sub(borrow_in);
        (Word16(diff), Carry::new(!(b1 | b2)))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Word16(self.0.wrapping_sub(rhs.0))
    }
}

impl CheckedSub for Word16 {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> CtOption<Self> {
        let (result, carry) = self.sbc(*rhs, Carry::SET);
        CtOption::new(result, carry.into())
    }
}

impl Sub for Word16 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        CheckedSub::checked_sub(&self, &rhs).expect("attempted to subtract with underflow")
    }
}

impl Sub<&Self> for Word16 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl SubAssign for Word16 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl num_traits::CheckedSub for Word16 {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        CheckedSub::checked_sub(self, rhs).into()
    }
}

impl num_traits::WrappingSub for Word16 {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        (*self).wrapping_sub(*v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Carry, CheckedSub, Word16};

    #[test]
    fn sbc_no_borrow() {
        let (res, carry) = Word16(95).sbc(Word16(7), Carry::SET);
        assert_eq!(res, Word16(88));
        assert_eq!(carry, Carry::SET);
    }

    #[test]
    fn sbc_equal_operands() {
        let (res, carry) = Word16(7).sbc(Word16(7), Carry::SET);
        assert_eq!(res, Word16::ZERO);
        assert_eq!(carry, Carry::SET);
    }

    #[test]
    fn sbc_with_borrow() {
        let (res, carry) = Word16::ZERO.sbc(Word16::ONE, Carry::SET);
        assert_eq!(res, Word16::MAX);
        assert_eq!(carry, Carry::CLEAR);
    }

    #[test]
    fn sbc_borrow_in() {
        let (res, carry) = Word16(5).sbc(Word16(2), Carry::CLEAR);
        assert_eq!(res, Word16(2));
        assert_eq!(carry, Carry::SET);

        let (res, carry) = Word16(2).sbc(Word16(2), Carry::CLEAR);
        assert_eq!(res, Word16::MAX);
        assert_eq!(carry, Carry::CLEAR);

        let (res, carry) = Word16::ZERO.sbc(Word16::MAX, Carry::CLEAR);
        assert_eq!(res, Word16::ZERO);
        assert_eq!(carry, Carry::CLEAR);
    }

    #[test]
    fn wrapping_sub() {
        assert_eq!(Word16::ONE.wrapping_sub(Word16::ONE), Word16::ZERO);
        assert_eq!(Word16::ZERO.wrapping_sub(Word16::ONE), Word16::MAX);
    }

    #[test]
    fn checked_sub_ok() {
        let result = Word16::ONE.checked_sub(&Word16::ONE);
        assert_eq!(result.unwrap(), Word16::ZERO);
    }

    #[test]
    fn checked_sub_overflow() {
        let result = Word16::ZERO.checked_sub(&Word16::ONE);
        assert!(!bool::from(result.is_some()));
    }

    #[test]
    #[should_panic(expected = "attempted to subtract with underflow")]
    fn sub_underflow() {
        let _ = Word16(3) - Word16(7);
    }
}
