//! Random number generator support

use super::Word16;
use crate::Random;
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl Random for Word16 {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; Self::BYTES];
        rng.fill_bytes(&mut bytes);
        Self::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NonZero, Random, Word16};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn random_nonzero_is_nonzero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let n = NonZero::<Word16>::random(&mut rng);
            assert_ne!(n.get(), Word16::ZERO);
        }
    }

    #[test]
    fn random_is_deterministic_for_seed() {
        let a = Word16::random(&mut ChaCha8Rng::seed_from_u64(1));
        let b = Word16::random(&mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
