//! Divide 95 by 7 with the bit-serial loop.

use bitserial_div::divmod;

fn main() -> Result<(), bitserial_div::Error> {
    let dividend = 95;
    let divisor = 7;

    let result = divmod(dividend, divisor)?;

    println!("Quotient is: {}", result.quotient());
    println!("Remainder is: {}", result.remainder());

    Ok(())
}
