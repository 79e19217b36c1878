//! Word addition

use super::Word16;
use crate::{Carry, CheckedAdd};
use core::ops::{Add, AddAssign};
use subtle::CtOption;

impl Word16 {
    /// Computes `self + rhs + carry` the way the 6502 `ADC` instruction does,
    /// returning the wrapped sum along with the new carry.
    ///
    /// The carry is set on exit iff the sum did not fit in 16 bits.
    #[inline(always)]
    #[must_use]
    pub const fn adc(self, rhs: Self, carry: Carry) -> (Self, Carry) {
        let (sum, c1) = self.0.overflowing_add(rhs.0);
        let (sum, c2) = sum.overflowing_add(carry.to_u16());
        (Word16(sum), Carry::new(c1 | c2))
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: Self) -> Self {
        Word16(self.0.wrapping_add(rhs.0))
    }
}

impl CheckedAdd for Word16 {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> CtOption<Self> {
        let (result, carry) = self.adc(*rhs, Carry::CLEAR);
        CtOption::new(result, carry.not().into())
    }
}

impl Add for Word16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        CheckedAdd::checked_add(&self, &rhs).expect("attempted to add with overflow")
    }
}

impl Add<&Self> for Word16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl AddAssign for Word16 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<&Word16> for Word16 {
    #[inline]
    fn add_assign(&mut self, rhs: &Word16) {
        *self = *self + rhs;
    }
}

impl num_traits::CheckedAdd for Word16 {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        CheckedAdd::checked_add(self, rhs).into()
    }
}

impl num_traits::WrappingAdd for Word16 {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        (*self).wrapping_add(*v)
    }
}

impl num_traits::Zero for Word16 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
