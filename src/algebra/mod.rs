//! Digit decomposition and recomposition
//!
//! Digit sequences are ordered most significant first, and every
//! digit carries the sign of the integer it came from.
//!

use crate::*;

pub(crate) mod join;
pub(crate) mod convert;

pub use self::join::{join, join_all, weight};
pub use self::convert::{convert, shift};


/// Count the digits of `n` in `base`, signed like `n`
///
/// Zero has one digit.
///
/// ```
/// use integer_digits::length;
/// use num_bigint::BigInt;
///
/// assert_eq!(length(&BigInt::from(1234), 10).unwrap(), 4);
/// assert_eq!(length(&BigInt::from(-1234), 10).unwrap(), -4);
/// assert_eq!(length(&BigInt::from(0xdeadbeefu32), 16).unwrap(), 8);
/// assert_eq!(length(&BigInt::from(0), 10).unwrap(), 1);
/// ```
pub fn length(n: &BigInt, base: u32) -> Result<i64, DigitError> {
    let radix = Radix::new(base)?;
    let count = i64::try_from(radix.count_digits(n.magnitude())).map_err(|_| DigitError::Overflow)?;

    if sign(n).is_negative() {
        Ok(-count)
    } else {
        Ok(count)
    }
}

/// Count the significant digits of `n` in `base`, signed like `n`
///
/// Same as [`length`] except that zero has no significant digits.
///
/// ```
/// use integer_digits::significant_length;
/// use num_bigint::BigInt;
///
/// assert_eq!(significant_length(&BigInt::from(0), 10).unwrap(), 0);
/// assert_eq!(significant_length(&BigInt::from(-1234), 10).unwrap(), -4);
/// ```
pub fn significant_length(n: &BigInt, base: u32) -> Result<i64, DigitError> {
    let count = length(n, base)?;
    if n.is_zero() {
        Ok(0)
    } else {
        Ok(count)
    }
}

/// Number of digits of `|n|`
#[inline]
pub(crate) fn digit_count(n: &BigInt, radix: Radix) -> u64 {
    radix.count_digits(n.magnitude())
}


/// Split `n` into its digits in `base`, most significant first
///
/// Every digit carries the sign of `n`.
///
/// ```
/// use integer_digits::separate;
/// use num_bigint::BigInt;
///
/// let digits = separate(&BigInt::from(-1234), 10).unwrap();
/// assert_eq!(digits, [-1, -2, -3, -4].iter().map(|&d| BigInt::from(d)).collect::<Vec<_>>());
///
/// let digits = separate(&BigInt::from(0xdead), 16).unwrap();
/// assert_eq!(digits, [0xd, 0xe, 0xa, 0xd].iter().map(|&d| BigInt::from(d)).collect::<Vec<_>>());
/// ```
pub fn separate(n: &BigInt, base: u32) -> Result<Vec<BigInt>, DigitError> {
    let radix = Radix::new(base)?;
    Ok(separate_with(n, radix))
}

pub(crate) fn separate_with(n: &BigInt, radix: Radix) -> Vec<BigInt> {
    let sign = sign(n);
    radix.split(n.magnitude())
         .into_iter()
         .map(|digit| sign.apply(digit))
         .collect()
}


/// Split `n` into its digits, each scaled by its positional weight
///
/// The result sums to `n`: `1234` gives `[1000, 200, 30, 4]`.
///
pub fn separate_weighted(n: &BigInt, base: u32) -> Result<Vec<BigInt>, DigitError> {
    let radix = Radix::new(base)?;

    let mut digits = separate_with(n, radix);
    digits.reverse();
    let mut weighted = join::weight_with(&digits, radix);
    weighted.reverse();
    Ok(weighted)
}


/// Return the digit of `n` at position `index`
///
/// Index 0 is the most significant digit, negative indices count
/// back from the least significant digit (-1 is the last digit).
/// The digit carries the sign of `n`.
///
/// ```
/// use integer_digits::get;
/// use num_bigint::BigInt;
///
/// let n = BigInt::from(1234);
/// assert_eq!(get(&n, 0, 10).unwrap(), BigInt::from(1));
/// assert_eq!(get(&n, -1, 10).unwrap(), BigInt::from(4));
/// assert!(get(&n, 4, 10).is_err());
/// ```
pub fn get(n: &BigInt, index: i64, base: u32) -> Result<BigInt, DigitError> {
    let radix = Radix::new(base)?;
    get_with(n, index, radix)
}

pub(crate) fn get_with(n: &BigInt, index: i64, radix: Radix) -> Result<BigInt, DigitError> {
    let count = digit_count(n, radix);
    let position = normalize_index(index, count)?;

    // digits to the right of the requested one
    let trailing = count - 1 - position;
    let (_, digit) = (n.magnitude() / radix.pow(trailing)).div_rem(&BigUint::from(radix.get()));

    Ok(sign(n).apply(digit))
}

/// Map a possibly negative index onto `[0, length)`
pub(crate) fn normalize_index(index: i64, length: u64) -> Result<u64, DigitError> {
    let position = if index < 0 {
        i128::from(length) + i128::from(index)
    } else {
        i128::from(index)
    };

    if position < 0 || position >= i128::from(length) {
        return Err(DigitError::IndexOutOfRange { index: index, length: length });
    }
    Ok(position as u64)
}


#[cfg(test)]
mod test {
    use super::*;
    include!("../test_macros.rs");
    include!("separate.tests.rs");
}
