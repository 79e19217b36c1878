//! Timing tests for `bitserial-div`.
//!
//! These use the `dudect_bencher` crate to check the division loop for
//! constant-time behavior.

use bitserial_div::{NonZero, Word16};
use dudect_bencher::{BenchRng, Class, CtRunner, ctbench_main};

/// Check `Word16::div_rem` for constant-time operation.
fn div_rem(runner: &mut CtRunner, _rng: &mut BenchRng) {
    const ITERATIONS_OUTER: usize = 10_000;
    const ITERATIONS_INNER: usize = 10_000;

    // dividend smaller than the divisor: every trial subtraction borrows
    let small = Word16(0x00a5);

    // large dividend: most trial subtractions succeed
    let large = Word16(0xff5a);

    let divisor = NonZero::<Word16>::new_unwrap(Word16(0x0101));

    // Precomputing the inputs appears to eliminate some noise
    let mut inputs = vec![];

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, small));
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Right, large));
    }

    for (class, input) in inputs {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                std::hint::black_box(input.div_rem(divisor));
            }
        })
    }
}

ctbench_main!(div_rem);
