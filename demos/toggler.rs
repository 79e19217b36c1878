//! Toggle a group of bits on and back off.

use bitserial_div::toggle;

fn main() {
    let value = 0x0a;
    let mask = 0x05;

    let toggled = toggle(value, mask);
    println!("First toggle: 0x{toggled:02x}");

    let toggled = toggle(toggled, mask);
    println!("Second toggle: 0x{toggled:02x}");
}
