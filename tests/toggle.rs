use bitserial_div::{Toggle, Word16, toggle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn toggle_is_self_inverse_for_uniform_masks(v in any::<u8>(), m in any::<u8>(), on in any::<bool>()) {
        // force the masked bits of `v` to be all set or all clear
        let v = if on { v | m } else { v & !m };
        prop_assert_eq!(toggle(toggle(v, m), m), v);
    }

    #[test]
    fn toggle_only_touches_masked_bits(v in any::<u8>(), m in any::<u8>()) {
        prop_assert_eq!(toggle(v, m) & !m, v & !m);
    }

    #[test]
    fn toggle_word16_matches_bytes(v in any::<u8>(), m in any::<u8>()) {
        let expected = Word16::from_u8(toggle(v, m));
        prop_assert_eq!(Word16::from_u8(v).toggle(Word16::from_u8(m)), expected);
    }
}

#[test]
fn demo_sequence() {
    let first = toggle(0x0a, 0x05);
    assert_eq!(first, 0x0f);
    assert_eq!(toggle(first, 0x05), 0x0a);
}
