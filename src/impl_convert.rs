//! Code for implementing From/To IndexableIntegers

use crate::*;


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for IndexableInteger {
            fn from(n: $t) -> Self {
                IndexableInteger::new(n)
            }
        }

        impl From<&$t> for IndexableInteger {
            fn from(n: &$t) -> Self {
                IndexableInteger::new(*n)
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);


impl From<BigInt> for IndexableInteger {
    fn from(n: BigInt) -> Self {
        IndexableInteger::new(n)
    }
}

impl From<&BigInt> for IndexableInteger {
    fn from(n: &BigInt) -> Self {
        IndexableInteger::new(n.clone())
    }
}

impl From<IndexableInteger> for BigInt {
    fn from(i: IndexableInteger) -> Self {
        i.into_value()
    }
}


macro_rules! impl_try_into_int_primitive {
    ($t:ty, $method:ident) => {
        impl TryFrom<&IndexableInteger> for $t {
            type Error = DigitError;

            fn try_from(i: &IndexableInteger) -> Result<$t, DigitError> {
                i.value().$method().ok_or(DigitError::Overflow)
            }
        }

        impl TryFrom<IndexableInteger> for $t {
            type Error = DigitError;

            fn try_from(i: IndexableInteger) -> Result<$t, DigitError> {
                <$t>::try_from(&i)
            }
        }
    };
}

impl_try_into_int_primitive!(u8, to_u8);
impl_try_into_int_primitive!(u16, to_u16);
impl_try_into_int_primitive!(u32, to_u32);
impl_try_into_int_primitive!(u64, to_u64);
impl_try_into_int_primitive!(u128, to_u128);
impl_try_into_int_primitive!(i8, to_i8);
impl_try_into_int_primitive!(i16, to_i16);
impl_try_into_int_primitive!(i32, to_i32);
impl_try_into_int_primitive!(i64, to_i64);
impl_try_into_int_primitive!(i128, to_i128);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($t:ty : $n:literal) => {
            paste! {
                #[test]
                fn [< round_trip_ $t >]() {
                    let n: $t = $n;
                    let i = IndexableInteger::from(n);
                    assert_eq!(i, IndexableInteger::from(&n));
                    assert_eq!(<$t>::try_from(&i).unwrap(), n);
                    assert_eq!(<$t>::try_from(i).unwrap(), n);
                }
            }
        };
    }

    impl_case!(u8: 255);
    impl_case!(u16: 1234);
    impl_case!(u32: 4294967295);
    impl_case!(u64: 18446744073709551615);
    impl_case!(u128: 340282366920938463463374607431768211455);
    impl_case!(i8: -128);
    impl_case!(i16: -1234);
    impl_case!(i32: 2147483647);
    impl_case!(i64: -9223372036854775808);
    impl_case!(i128: -170141183460469231731687303715884105728);

    #[test]
    #[should_panic(expected = "Overflow")]
    fn u8_overflow() {
        u8::try_from(&IndexableInteger::from(256)).unwrap();
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn unsigned_from_negative() {
        u64::try_from(IndexableInteger::from(-1)).unwrap();
    }

    #[test]
    fn bigint_round_trip() {
        let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let i = IndexableInteger::from(&n);
        assert_eq!(BigInt::from(i), n);
    }
}
