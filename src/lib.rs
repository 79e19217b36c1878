//! Pure Rust emulation of bit-serial restoring division on 16-bit words.
//!
//! # About
//! Processors such as the MOS 6502 have no divide instruction. Division is
//! performed in software with a loop that rotates the dividend left through
//! the carry flag into a partial remainder, subtracts the divisor whenever it
//! fits, and rotates the outcome of each subtraction back in as the next
//! quotient bit.
//!
//! This crate reproduces that loop exactly, using only the two primitives
//! such a processor provides:
//!
//! - [`Word16::rol`]: rotate left through carry (`ROL`)
//! - [`Word16::sbc`]: subtract with carry, where carry means "no borrow" (`SBC`)
//!
//! The carry flag is modeled by [`Carry`] and is always owned by the caller,
//! so every operation is reentrant and there is no global processor state.
//!
//! # Usage
//! ```
//! use bitserial_div::{NonZero, Word16, divmod};
//!
//! let qr = divmod(95, 7).unwrap();
//! assert_eq!(qr.quotient(), Word16(13));
//! assert_eq!(qr.remainder(), Word16(4));
//!
//! let divisor = NonZero::new(Word16(7)).unwrap();
//! assert_eq!(Word16(21).div_rem(divisor).into_parts(), (Word16(3), Word16::ZERO));
//!
//! assert!(divmod(1, 0).is_err());
//! ```
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly.
//! - Bit-exact reproduction of the shift/subtract/carry sequence, never a
//!   native division.
//! - Constant-time by default using traits from the [`subtle`] crate, with
//!   `*_vartime` variants that follow the branching form of the algorithm.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod carry;
mod div_rem;
mod error;
mod non_zero;
mod toggle;
mod traits;
mod word16;

pub use crate::{
    carry::Carry,
    div_rem::{QuotientRemainder, divmod},
    error::Error,
    non_zero::NonZero,
    toggle::{Toggle, toggle},
    traits::*,
    word16::Word16,
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
