//! Bit-serial restoring division.
//!
//! The loop keeps two registers and the carry flag. Each of the sixteen
//! iterations rotates the top bit of the dividend out of `quotient`, through
//! the carry, into the bottom of `remainder`, then tries to subtract the
//! divisor from `remainder`. The carry left by that subtraction is the next
//! quotient bit, and it is rotated into the bottom of `quotient` by the next
//! iteration, so after sixteen iterations plus one closing rotate `quotient`
//! holds only quotient bits.

use super::Word16;
use crate::{Carry, CheckedDiv, DivRem, NonZero, QuotientRemainder, Zero};
use core::ops::{Div, DivAssign, Rem, RemAssign};
use subtle::CtOption;

/// Registers of the division loop.
///
/// A fresh set of registers, with the carry cleared, is created for every
/// division and consumed by [`DivRemRegisters::finish`].
#[derive(Clone, Copy, Debug)]
struct DivRemRegisters {
    quotient: Word16,
    remainder: Word16,
    carry: Carry,
}

impl DivRemRegisters {
    /// Load the dividend into the quotient register.
    const fn new(dividend: Word16) -> Self {
        Self {
            quotient: dividend,
            remainder: Word16::ZERO,
            carry: Carry::CLEAR,
        }
    }

    /// `ROL quotient; ROL remainder`: the previous quotient bit enters at the
    /// bottom of `quotient` and the dividend's top bit moves into `remainder`.
    #[inline(always)]
    fn shift(&mut self) {
        self.quotient.rol_assign(&mut self.carry);
        self.remainder.rol_assign(&mut self.carry);
    }

    /// One iteration with a branch-free conditional subtract:
    /// `SEC; SBC divisor`, keeping the difference only if no borrow occurred.
    #[inline(always)]
    fn step(&mut self, divisor: Word16) {
        self.shift();
        let (diff, no_borrow) = self.remainder.sbc(divisor, Carry::SET);
        self.remainder = Word16::select(self.remainder, diff, no_borrow.into());
        self.carry = no_borrow;
    }

    /// One iteration with the compare-and-branch form of the subtract.
    #[inline(always)]
    fn step_vartime(&mut self, divisor: Word16) {
        self.shift();
        if self.remainder.0 >= divisor.0 {
            self.remainder = self.remainder.wrapping_sub(divisor);
            self.carry.set();
        } else {
            self.carry.clear();
        }
    }

    /// Rotate the last comparison outcome into the quotient.
    #[inline(always)]
    fn finish(mut self) -> QuotientRemainder {
        self.quotient.rol_assign(&mut self.carry);
        QuotientRemainder::new(self.quotient, self.remainder)
    }
}

impl Word16 {
    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// Runs the full sixteen iterations for every input, and selects rather
    /// than branches on the outcome of each trial subtraction.
    #[must_use]
    pub fn div_rem(self, rhs: NonZero<Self>) -> QuotientRemainder {
        self.div_rem_unguarded(rhs.0)
    }

    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// This method branches on the outcome of each trial subtraction, exactly
    /// as a `BCC`/`BCS` based 6502 routine would, and is variable-time with
    /// respect to both operands.
    #[must_use]
    pub fn div_rem_vartime(self, rhs: NonZero<Self>) -> QuotientRemainder {
        let mut regs = DivRemRegisters::new(self);
        for _ in 0..Self::BITS {
            regs.step_vartime(rhs.0);
        }
        regs.finish()
    }

    /// Runs the division loop without checking the divisor.
    ///
    /// A zero divisor is not rejected: every trial subtraction succeeds, so
    /// the result is `(Word16::MAX, self)`. For a nonzero divisor this is
    /// identical to [`Word16::div_rem`].
    #[must_use]
    pub fn wrapping_div_rem(self, rhs: Self) -> QuotientRemainder {
        self.div_rem_unguarded(rhs)
    }

    /// Computes `self / rhs`, returning the quotient and remainder if the
    /// divisor is non-zero, and `CtOption::none()` otherwise.
    #[must_use]
    pub fn checked_div_rem(self, rhs: Self) -> CtOption<QuotientRemainder> {
        let is_nz = !rhs.is_zero();
        let qr = self.div_rem_unguarded(Self::select(Word16::ONE, rhs, is_nz));
        CtOption::new(qr, is_nz)
    }

    /// Computes the checked division `self / rhs`, returning the quotient
    /// if the divisor is non-zero, and `CtOption::none()` otherwise.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> CtOption<Self> {
        self.checked_div_rem(rhs).map(|qr| qr.quotient())
    }

    /// Computes the checked division `self / rhs`, returning the remainder
    /// if the divisor is non-zero, and `CtOption::none()` otherwise.
    #[must_use]
    pub fn checked_rem(self, rhs: Self) -> CtOption<Self> {
        self.checked_div_rem(rhs).map(|qr| qr.remainder())
    }

    fn div_rem_unguarded(self, rhs: Self) -> QuotientRemainder {
        let mut regs = DivRemRegisters::new(self);
        for _ in 0..Self::BITS {
            regs.step(rhs);
        }
        regs.finish()
    }
}

impl DivRem for Word16 {
    #[inline]
    fn div_rem(&self, rhs: &NonZero<Self>) -> QuotientRemainder {
        (*self).div_rem(*rhs)
    }

    #[inline]
    fn div_rem_vartime(&self, rhs: &NonZero<Self>) -> QuotientRemainder {
        (*self).div_rem_vartime(*rhs)
    }
}

impl CheckedDiv for Word16 {
    #[inline]
    fn checked_div(&self, rhs: &Self) -> CtOption<Self> {
        (*self).checked_div(*rhs)
    }
}

impl num_traits::CheckedDiv for Word16 {
    #[inline]
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        (*self).checked_div(*rhs).into()
    }
}

impl num_traits::CheckedRem for Word16 {
    #[inline]
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        (*self).checked_rem(*rhs).into()
    }
}

impl Div<Word16> for Word16 {
    type Output = Word16;

    #[inline]
    fn div(self, rhs: Word16) -> Self {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div<&Word16> for Word16 {
    type Output = Word16;

    #[inline]
    fn div(self, rhs: &Word16) -> Self {
        self / (*rhs)
    }
}

impl Div<NonZero<Word16>> for Word16 {
    type Output = Word16;

    #[inline]
    fn div(self, rhs: NonZero<Word16>) -> Self {
        self.div_rem(rhs).quotient()
    }
}

impl Div<&NonZero<Word16>> for Word16 {
    type Output = Word16;

    #[inline]
    fn div(self, rhs: &NonZero<Word16>) -> Self {
        self / (*rhs)
    }
}

impl Rem<Word16> for Word16 {
    type Output = Word16;

    #[inline]
    fn rem(self, rhs: Word16) -> Self {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Rem<&Word16> for Word16 {
    type Output = Word16;

    #[inline]
    fn rem(self, rhs: &Word16) -> Self {
        self % (*rhs)
    }
}

impl Rem<NonZero<Word16>> for Word16 {
    type Output = Word16;

    #[inline]
    fn rem(self, rhs: NonZero<Word16>) -> Self {
        self.div_rem(rhs).remainder()
    }
}

impl Rem<&NonZero<Word16>> for Word16 {
    type Output = Word16;

    #[inline]
    fn rem(self, rhs: &NonZero<Word16>) -> Self {
        self % (*rhs)
    }
}

impl DivAssign<Word16> for Word16 {
    #[inline]
    fn div_assign(&mut self, rhs: Word16) {
        *self = (*self) / rhs;
    }
}

impl DivAssign<NonZero<Word16>> for Word16 {
    #[inline]
    fn div_assign(&mut self, rhs: NonZero<Word16>) {
        *self = (*self) / rhs;
    }
}

impl RemAssign<Word16> for Word16 {
    #[inline]
    fn rem_assign(&mut self, rhs: Word16) {
        *self = (*self) % rhs;
    }
}

impl RemAssign<NonZero<Word16>> for Word16 {
    #[inline]
    fn rem_assign(&mut self, rhs: NonZero<Word16>) {
        *self = (*self) % rhs;
    }
}
