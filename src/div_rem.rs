//! Division results and the `u16` entry point.

use crate::{Error, NonZero, Word16};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The quotient and remainder produced by one division.
///
/// For a nonzero divisor, `quotient * divisor + remainder == dividend` and
/// `remainder < divisor`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct QuotientRemainder<T = Word16> {
    quotient: T,
    remainder: T,
}

impl<T> QuotientRemainder<T> {
    pub(crate) const fn new(quotient: T, remainder: T) -> Self {
        Self {
            quotient,
            remainder,
        }
    }

    /// Split into `(quotient, remainder)`.
    pub fn into_parts(self) -> (T, T) {
        (self.quotient, self.remainder)
    }
}

impl<T: Copy> QuotientRemainder<T> {
    /// The quotient.
    pub const fn quotient(&self) -> T {
        self.quotient
    }

    /// The remainder.
    pub const fn remainder(&self) -> T {
        self.remainder
    }
}

impl<T> From<QuotientRemainder<T>> for (T, T) {
    fn from(qr: QuotientRemainder<T>) -> (T, T) {
        qr.into_parts()
    }
}

impl<T: ConditionallySelectable> ConditionallySelectable for QuotientRemainder<T> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            quotient: T::conditional_select(&a.quotient, &b.quotient, choice),
            remainder: T::conditional_select(&a.remainder, &b.remainder, choice),
        }
    }
}

impl<T: ConstantTimeEq> ConstantTimeEq for QuotientRemainder<T> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.quotient.ct_eq(&other.quotient) & self.remainder.ct_eq(&other.remainder)
    }
}

impl<T: fmt::Display> fmt::Display for QuotientRemainder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quotient={} remainder={}", self.quotient, self.remainder)
    }
}

/// Computes the quotient and remainder of `dividend / divisor` with the
/// bit-serial loop.
///
/// Returns [`Error::DivisionByZero`] before doing any work if `divisor` is
/// zero. Use [`Word16::wrapping_div_rem`] to run the loop on a zero divisor
/// anyway.
pub fn divmod(dividend: u16, divisor: u16) -> Result<QuotientRemainder, Error> {
    let divisor = Option::<NonZero<Word16>>::from(NonZero::new(Word16(divisor)))
        .ok_or(Error::DivisionByZero)?;
    Ok(Word16(dividend).div_rem(divisor))
}

#[cfg(test)]
mod tests {
    use super::{QuotientRemainder, divmod};
    use crate::{Error, Word16};
    use std::string::ToString;
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

    #[test]
    fn divmod_ninety_five_by_seven() {
        let qr = divmod(95, 7).unwrap();
        assert_eq!(qr.quotient(), Word16(13));
        assert_eq!(qr.remainder(), Word16(4));
    }

    #[test]
    fn divmod_by_zero() {
        assert_eq!(divmod(95, 0), Err(Error::DivisionByZero));
        assert_eq!(divmod(0, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn into_parts() {
        let qr = QuotientRemainder::new(Word16(3), Word16(0));
        assert_eq!(qr.into_parts(), (Word16(3), Word16(0)));
        let (q, r): (Word16, Word16) = qr.into();
        assert_eq!((q, r), (Word16(3), Word16(0)));
    }

    #[test]
    fn display() {
        assert_eq!(
            divmod(95, 7).unwrap().to_string(),
            "quotient=13 remainder=4"
        );
    }

    #[test]
    fn conditional_select() {
        let a = QuotientRemainder::new(Word16(1), Word16(2));
        let b = QuotientRemainder::new(Word16(3), Word16(4));
        assert_eq!(
            QuotientRemainder::conditional_select(&a, &b, Choice::from(0)),
            a
        );
        assert_eq!(
            QuotientRemainder::conditional_select(&a, &b, Choice::from(1)),
            b
        );
        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
    }
}
