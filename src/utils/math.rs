//! Mathematical utility functions

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Largest power-of-ten exponent `Decimal` can scale by.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// `10^n` as a `Decimal`. Callers must keep `n` within
/// [`MAX_DECIMAL_SCALE`].
pub fn pow10(n: u32) -> Decimal {
    match n {
        0 => dec!(1),
        6 => dec!(1_000_000),
        9 => dec!(1_000_000_000),
        18 => dec!(1_000_000_000_000_000_000),
        _ => {
            let mut result = dec!(1);
            for _ in 0..n {
                result *= dec!(10);
            }
            result
        }
    }
}
