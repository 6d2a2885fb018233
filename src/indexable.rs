//! Integer with digit-level indexing

use crate::*;
use crate::algebra::{digit_count, get_with, join::join_all_with, separate_with};
use stdlib::iter::FusedIterator;


/// Read-only view of an integer as a sequence of digits
///
/// Indexing, slicing and iteration are all computed from the wrapped
/// value; nothing is cached, and the value can never change.
///
/// ```
/// use integer_digits::{IndexableInteger, DigitSlice};
/// use num_bigint::BigInt;
///
/// let i = IndexableInteger::with_base(1234, 10).unwrap();
///
/// assert_eq!(i.len(), 4);
/// assert_eq!(i.digit(0).unwrap(), BigInt::from(1));
/// assert_eq!(i.digit(-1).unwrap(), BigInt::from(4));
/// assert_eq!(i.slice(..2i64).unwrap(), BigInt::from(12));
/// assert_eq!(i.slice(DigitSlice::reversed()).unwrap(), BigInt::from(4321));
///
/// let digits: Vec<BigInt> = i.digits().collect();
/// assert_eq!(digits, vec![BigInt::from(1), BigInt::from(2), BigInt::from(3), BigInt::from(4)]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexableInteger {
    value: BigInt,
    radix: Radix,
}

impl IndexableInteger {
    /// View `value` in the default base
    pub fn new<T: Into<BigInt>>(value: T) -> Self {
        IndexableInteger {
            value: value.into(),
            radix: Radix::default(),
        }
    }

    /// View `value` in `base`
    pub fn with_base<T: Into<BigInt>>(value: T, base: u32) -> Result<Self, DigitError> {
        Ok(IndexableInteger {
            value: value.into(),
            radix: Radix::new(base)?,
        })
    }

    pub fn with_radix<T: Into<BigInt>>(value: T, radix: Radix) -> Self {
        IndexableInteger {
            value: value.into(),
            radix: radix,
        }
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> BigInt {
        self.value
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.radix.get()
    }

    #[inline]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        sign(&self.value)
    }

    /// Number of digits; zero has one digit
    pub fn len(&self) -> usize {
        digit_count(&self.value, self.radix) as usize
    }

    /// Digit at `index`, signed like the value
    ///
    /// Negative indices count back from the least significant digit.
    ///
    pub fn digit(&self, index: i64) -> Result<BigInt, DigitError> {
        get_with(&self.value, index, self.radix)
    }

    /// Join the selected digits into a new integer
    ///
    /// Fails with `EmptySequence` if nothing is selected.
    ///
    pub fn slice<S: Into<DigitSlice>>(&self, selection: S) -> Result<BigInt, DigitError> {
        let digits = self.to_digits();
        let positions = selection.into().positions(digits.len())?;

        let selected: Vec<BigInt> = positions.into_iter().map(|p| digits[p].clone()).collect();
        join_all_with(&selected, self.radix)
    }

    /// Digits, most significant first
    pub fn to_digits(&self) -> Vec<BigInt> {
        separate_with(&self.value, self.radix)
    }

    /// Iterate over the digits, most significant first
    ///
    /// Each call starts again from the first digit.
    ///
    pub fn digits(&self) -> Digits {
        Digits {
            inner: self.to_digits().into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a IndexableInteger {
    type Item = BigInt;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        self.digits()
    }
}


/// Iterator over the digits of an [`IndexableInteger`]
#[derive(Clone, Debug)]
pub struct Digits {
    inner: stdlib::vec::IntoIter<BigInt>,
}

impl Iterator for Digits {
    type Item = BigInt;

    #[inline]
    fn next(&mut self) -> Option<BigInt> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Digits {
    #[inline]
    fn next_back(&mut self) -> Option<BigInt> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Digits {}

impl FusedIterator for Digits {}


#[cfg(test)]
mod test {
    use super::*;
    include!("test_macros.rs");
    include!("indexable.tests.rs");
}
