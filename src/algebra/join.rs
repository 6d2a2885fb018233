//! Joining digit groups back into integers

use crate::*;


/// Append the digits of `b` after the digits of `a`
///
/// The result is `|a| * base^len(b) + |b|`, carrying the sign shared
/// by `a` and `b`. Zero has no sign of its own and takes the sign of
/// the other operand.
///
/// ```
/// use integer_digits::join;
/// use num_bigint::BigInt;
///
/// let join10 = |a: i32, b: i32| join(&a.into(), &b.into(), 10).unwrap();
///
/// assert_eq!(join10(123, 456), BigInt::from(123456));
/// assert_eq!(join10(123, 0), BigInt::from(1230));
/// assert_eq!(join10(0, 123), BigInt::from(123));
/// assert_eq!(join10(-12, -34), BigInt::from(-1234));
/// assert!(join(&BigInt::from(5), &BigInt::from(-3), 10).is_err());
/// ```
pub fn join(a: &BigInt, b: &BigInt, base: u32) -> Result<BigInt, DigitError> {
    let radix = Radix::new(base)?;
    join_with(a, b, radix)
}

pub(crate) fn join_with(a: &BigInt, b: &BigInt, radix: Radix) -> Result<BigInt, DigitError> {
    let sign = sign(a).concat(sign(b))?;

    let shift = radix.pow(radix.count_digits(b.magnitude()));
    let joined = a.magnitude() * shift + b.magnitude();

    Ok(sign.apply(joined))
}


/// Join a sequence of digit groups, left to right
///
/// A single group is returned unchanged.
///
/// ```
/// use integer_digits::join_all;
/// use num_bigint::BigInt;
///
/// let groups: Vec<BigInt> = vec![123.into(), 456.into(), 789.into()];
/// assert_eq!(join_all(&groups, 10).unwrap(), BigInt::from(123456789));
///
/// let groups: Vec<BigInt> = vec![0xbe.into(), 0xef.into()];
/// assert_eq!(join_all(&groups, 16).unwrap(), BigInt::from(0xbeef));
/// ```
pub fn join_all(sequence: &[BigInt], base: u32) -> Result<BigInt, DigitError> {
    let radix = Radix::new(base)?;
    join_all_with(sequence, radix)
}

pub(crate) fn join_all_with(sequence: &[BigInt], radix: Radix) -> Result<BigInt, DigitError> {
    let (first, rest) = sequence.split_first().ok_or(DigitError::EmptySequence)?;

    let mut result = first.clone();
    for group in rest {
        result = join_with(&result, group, radix)?;
    }
    Ok(result)
}


/// Scale every element by `base^index`
///
/// The first element is the least significant slot, so a digit
/// sequence must be reversed before weighting.
///
/// ```
/// use integer_digits::weight;
/// use num_bigint::BigInt;
///
/// let digits: Vec<BigInt> = vec![4.into(), 3.into(), 2.into(), 1.into()];
/// let weighted: Vec<BigInt> = vec![4.into(), 30.into(), 200.into(), 1000.into()];
/// assert_eq!(weight(&digits, 10).unwrap(), weighted);
/// ```
pub fn weight(sequence: &[BigInt], base: u32) -> Result<Vec<BigInt>, DigitError> {
    let radix = Radix::new(base)?;
    Ok(weight_with(sequence, radix))
}

pub(crate) fn weight_with(sequence: &[BigInt], radix: Radix) -> Vec<BigInt> {
    let base = BigInt::from(radix.get());
    let mut multiplier = BigInt::one();

    let mut weighted = Vec::with_capacity(sequence.len());
    for value in sequence {
        weighted.push(value * &multiplier);
        multiplier *= &base;
    }
    weighted
}


#[cfg(test)]
mod test {
    use super::*;
    include!("../test_macros.rs");
    include!("join.tests.rs");
}
