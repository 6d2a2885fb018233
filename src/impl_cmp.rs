//! Comparisons between IndexableIntegers and plain integers
//!
//! An `IndexableInteger` compares equal to an integer when its value
//! is equal, whatever its base.

use crate::*;


impl PartialEq<BigInt> for IndexableInteger {
    fn eq(&self, rhs: &BigInt) -> bool {
        self.value() == rhs
    }
}

impl PartialEq<IndexableInteger> for BigInt {
    fn eq(&self, rhs: &IndexableInteger) -> bool {
        self == rhs.value()
    }
}

macro_rules! impl_eq_int_primitive {
    ($t:ty) => {
        impl PartialEq<$t> for IndexableInteger {
            fn eq(&self, rhs: &$t) -> bool {
                *self.value() == BigInt::from(*rhs)
            }
        }

        impl PartialEq<IndexableInteger> for $t {
            fn eq(&self, rhs: &IndexableInteger) -> bool {
                rhs == self
            }
        }
    };
}

impl_eq_int_primitive!(u8);
impl_eq_int_primitive!(u16);
impl_eq_int_primitive!(u32);
impl_eq_int_primitive!(u64);
impl_eq_int_primitive!(u128);
impl_eq_int_primitive!(i8);
impl_eq_int_primitive!(i16);
impl_eq_int_primitive!(i32);
impl_eq_int_primitive!(i64);
impl_eq_int_primitive!(i128);


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eq_bigint() {
        let n = BigInt::from(-1234);
        let i = IndexableInteger::new(n.clone());
        assert_eq!(i, n);
        assert_eq!(n, i);
        assert_ne!(i, BigInt::from(1234));
    }

    #[test]
    fn eq_primitive() {
        let i = IndexableInteger::with_base(255, 16).unwrap();
        assert!(i == 255u8);
        assert!(255i64 == i);
        assert!(i != 254i32);
        assert!(i != -255i128);
    }

    #[test]
    fn base_does_not_matter() {
        let binary = IndexableInteger::with_base(6, 2).unwrap();
        let decimal = IndexableInteger::with_base(6, 10).unwrap();
        assert!(binary == 6u32);
        assert!(decimal == 6u32);
        assert_ne!(binary, decimal);
    }
}
