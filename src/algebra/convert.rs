//! Relabelling digits between bases, and shifting digit sequences

use crate::*;
use super::{digit_count, separate_with};
use super::join::weight_with;


/// Reinterpret the digits of `n` in `from_base` as digits in `to_base`
///
/// This relabels the digit sequence, it does not re-encode the value:
/// the decimal digits of `1011` read as binary digits give `0b1011`.
/// Every digit must be valid in `to_base`.
///
/// ```
/// use integer_digits::convert;
/// use num_bigint::BigInt;
///
/// assert_eq!(convert(&BigInt::from(1011), 10, 2).unwrap(), BigInt::from(0b1011));
/// assert_eq!(convert(&BigInt::from(0x1011), 16, 2).unwrap(), BigInt::from(0b1011));
/// assert!(convert(&BigInt::from(0x7ff), 16, 10).is_err());
/// ```
pub fn convert(n: &BigInt, from_base: u32, to_base: u32) -> Result<BigInt, DigitError> {
    let from = Radix::new(from_base)?;
    let to = Radix::new(to_base)?;

    let mut digits = separate_with(n, from);
    if let Some(digit) = digits.iter().find(|digit| !to.admits(digit.magnitude())) {
        return Err(DigitError::InvalidDigitForBase { digit: digit.clone(), base: to_base });
    }

    digits.reverse();
    Ok(weight_with(&digits, to).into_iter().sum())
}


/// Shift the digits of `n` by `amount` places
///
/// A positive amount appends zero digits, a negative amount drops
/// digits from the least significant end. Dropping every digit gives
/// zero, and an amount of zero returns `n` unchanged.
///
/// Fails with `Overflow` if the shifted value could need more than
/// [`MAX_BITS`](crate::MAX_BITS) bits.
///
/// ```
/// use integer_digits::shift;
/// use num_bigint::BigInt;
///
/// assert_eq!(shift(&BigInt::from(123), 2, 10).unwrap(), BigInt::from(12300));
/// assert_eq!(shift(&BigInt::from(0xabc0), -1, 16).unwrap(), BigInt::from(0xabc));
/// assert_eq!(shift(&BigInt::from(-123), -2, 10).unwrap(), BigInt::from(-1));
/// assert_eq!(shift(&BigInt::from(123), 0, 10).unwrap(), BigInt::from(123));
/// ```
pub fn shift(n: &BigInt, amount: i64, base: u32) -> Result<BigInt, DigitError> {
    use stdlib::cmp::Ordering::*;

    let radix = Radix::new(base)?;

    match amount.cmp(&0) {
        Equal => Ok(n.clone()),
        Greater => {
            if n.is_zero() {
                return Ok(BigInt::zero());
            }

            // upper bound on the bits of the shifted magnitude
            let bits = u128::from(amount as u64) * u128::from(radix.digit_bits())
                     + u128::from(n.bits());
            if bits > u128::from(MAX_BITS) {
                return Err(DigitError::Overflow);
            }

            let scale = radix.pow(amount as u64);
            Ok(sign(n).apply(n.magnitude() * scale))
        }
        Less => {
            let dropped = amount.unsigned_abs();
            if dropped >= digit_count(n, radix) {
                return Ok(BigInt::zero());
            }
            let scale = radix.pow(dropped);
            Ok(sign(n).apply(n.magnitude() / scale))
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    include!("../test_macros.rs");
    include!("convert.tests.rs");
}
