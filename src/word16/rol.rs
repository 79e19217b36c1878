//! Rotate left through carry (`ROL`).

use super::Word16;
use crate::Carry;

impl Word16 {
    /// Rotates `self` left by one bit through `carry`.
    ///
    /// The incoming carry becomes bit 0 of the result and the old bit 15 of
    /// `self` becomes the outgoing carry. This is a 17-bit rotation of
    /// `carry:self`, not a closed 16-bit rotation of the word alone.
    #[inline(always)]
    #[must_use]
    pub const fn rol(self, carry: Carry) -> (Self, Carry) {
        let shift_in = carry.to_u16();
        let carry_out = Carry::from_msb(self.0);
        (Word16((self.0 << 1) | shift_in), carry_out)
    }

    /// In-place form of [`Word16::rol`], updating both the word and the flag.
    #[inline(always)]
    pub fn rol_assign(&mut self, carry: &mut Carry) {
        (*self, *carry) = self.rol(*carry);
    }
}
