//! Word comparisons

use super::Word16;
use crate::Carry;
use core::cmp::Ordering;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
};

impl Word16 {
    /// Perform a comparison of the inner value in variable-time.
    ///
    /// Note that the [`PartialOrd`] and [`Ord`] impls wrap constant-time
    /// comparisons using the `subtle` crate.
    pub fn cmp_vartime(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Performs an equality check in variable-time.
    pub const fn eq_vartime(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Compare as the 6502 `CMP` instruction does: the returned carry is set
    /// iff `self >= rhs`.
    #[inline]
    pub fn cmp_carry(&self, rhs: &Self) -> Carry {
        Carry::from(!self.ct_lt(rhs))
    }

    /// Return `b` if `c` is truthy, otherwise return `a`.
    #[inline]
    pub(crate) fn select(a: Self, b: Self, c: Choice) -> Self {
        Self::conditional_select(&a, &b, c)
    }
}

impl ConditionallySelectable for Word16 {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(u16::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Word16 {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConstantTimeGreater for Word16 {
    #[inline]
    fn ct_gt(&self, other: &Self) -> Choice {
        self.0.ct_gt(&other.0)
    }
}

impl ConstantTimeLess for Word16 {}

impl Eq for Word16 {}

impl Ord for Word16 {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut n = 0i8;
        n.conditional_assign(&-1, self.ct_lt(other));
        n.conditional_assign(&1, self.ct_gt(other));

        match n {
            -1 => Ordering::Less,
            1 => Ordering::Greater,
            _ => {
                debug_assert_eq!(n, 0);
                debug_assert!(bool::from(self.ct_eq(other)));
                Ordering::Equal
            }
        }
    }
}

impl PartialOrd for Word16 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Word16 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Carry, Word16, Zero};
    use core::cmp::Ordering;
    use subtle::{ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

    #[test]
    fn is_zero() {
        assert!(bool::from(Word16::ZERO.is_zero()));
        assert!(!bool::from(Word16::ONE.is_zero()));
        assert!(!bool::from(Word16::MAX.is_zero()));
    }

    #[test]
    fn ct_eq() {
        let a = Word16::ZERO;
        let b = Word16::MAX;

        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
        assert!(!bool::from(b.ct_eq(&a)));
        assert!(bool::from(b.ct_eq(&b)));
    }

    #[test]
    fn ct_gt() {
        let a = Word16::ZERO;
        let b = Word16::ONE;
        let c = Word16::MAX;

        assert!(bool::from(b.ct_gt(&a)));
        assert!(bool::from(c.ct_gt(&a)));
        assert!(bool::from(c.ct_gt(&b)));

        assert!(!bool::from(a.ct_gt(&a)));
        assert!(!bool::from(b.ct_gt(&b)));
        assert!(!bool::from(c.ct_gt(&c)));

        assert!(!bool::from(a.ct_gt(&b)));
        assert!(!bool::from(a.ct_gt(&c)));
        assert!(!bool::from(b.ct_gt(&c)));
    }

    #[test]
    fn ct_lt() {
        let a = Word16::ZERO;
        let b = Word16::ONE;
        let c = Word16::MAX;

        assert!(bool::from(a.ct_lt(&b)));
        assert!(bool::from(a.ct_lt(&c)));
        assert!(bool::from(b.ct_lt(&c)));

        assert!(!bool::from(a.ct_lt(&a)));
        assert!(!bool::from(b.ct_lt(&b)));
        assert!(!bool::from(c.ct_lt(&c)));

        assert!(!bool::from(b.ct_lt(&a)));
        assert!(!bool::from(c.ct_lt(&a)));
        assert!(!bool::from(c.ct_lt(&b)));
    }

    #[test]
    fn cmp() {
        assert_eq!(Word16::ZERO.cmp(&Word16::ONE), Ordering::Less);
        assert_eq!(Word16::ONE.cmp(&Word16::ONE), Ordering::Equal);
        assert_eq!(Word16::MAX.cmp(&Word16::ONE), Ordering::Greater);
        assert_eq!(Word16(7).cmp_vartime(&Word16(95)), Ordering::Less);
    }

    #[test]
    fn cmp_carry() {
        assert_eq!(Word16(7).cmp_carry(&Word16(7)), Carry::SET);
        assert_eq!(Word16(8).cmp_carry(&Word16(7)), Carry::SET);
        assert_eq!(Word16(6).cmp_carry(&Word16(7)), Carry::CLEAR);
        assert_eq!(Word16::ZERO.cmp_carry(&Word16::ZERO), Carry::SET);
    }
}
