#![no_main]
use libfuzzer_sys::fuzz_target;
use bitserial_div::{NonZero, Word16, divmod};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    DivRem, DivRemVartime, CheckedDivRem
}

fuzz_target!(|operations: Vec<(u16, u16, Operation)>| {
    for (n, d, op) in operations {
        let expected = n.checked_div(d).zip(n.checked_rem(d));
        let actual = match op {
            Operation::DivRem => divmod(n, d).ok(),
            Operation::DivRemVartime => Option::<NonZero<Word16>>::from(NonZero::new(Word16(d)))
                .map(|d| Word16(n).div_rem_vartime(d)),
            Operation::CheckedDivRem => Word16(n).checked_div_rem(Word16(d)).into(),
        };
        assert_eq!(actual.map(|qr| (qr.quotient().0, qr.remainder().0)), expected);
    }
});
