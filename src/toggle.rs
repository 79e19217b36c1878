//! Masked bit toggling.

use crate::Word16;

/// Toggle the bits selected by `mask` as a group.
///
/// If none of the masked bits are set in `value` they are all turned on,
/// otherwise they are all turned off. Applying the same mask twice restores
/// `value` whenever its masked bits start out all clear or all set.
#[inline]
#[must_use]
pub const fn toggle(value: u8, mask: u8) -> u8 {
    if value & mask == 0 {
        value | mask
    } else {
        value & !mask
    }
}

/// Group toggling of masked bits, see [`toggle`].
pub trait Toggle: Sized {
    /// Turn the bits of `mask` on if none are set in `self`, otherwise turn
    /// them all off.
    #[must_use]
    fn toggle(self, mask: Self) -> Self;
}

impl Toggle for u8 {
    #[inline]
    fn toggle(self, mask: u8) -> u8 {
        toggle(self, mask)
    }
}

impl Toggle for Word16 {
    #[inline]
    fn toggle(self, mask: Word16) -> Word16 {
        if (self & mask).eq_vartime(&Word16::ZERO) {
            self | mask
        } else {
            self & !mask
        }
    }
}
