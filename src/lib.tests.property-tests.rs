// Property tests to be included by lib.rs (if enabled)


mod algebra {
    use super::*;
    use paste::paste;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< round_trip_ $t >](n: $t, base in 2u32..=36) {
                    let n = BigInt::from(n);
                    let digits = separate(&n, base).unwrap();
                    prop_assert_eq!(join_all(&digits, base).unwrap(), n);
                }

                #[test]
                fn [< digits_within_base_ $t >](n: $t, base in 2u32..=36) {
                    let n = BigInt::from(n);
                    let base_value = BigInt::from(base);
                    for digit in separate(&n, base).unwrap() {
                        prop_assert!(digit.abs() < base_value);
                        prop_assert!(digit.is_zero() || sign(&digit) == sign(&n));
                    }
                }

                #[test]
                fn [< length_carries_sign_ $t >](n: $t, base in 2u32..=36) {
                    let n = BigInt::from(n);
                    let len = length(&n, base).unwrap();
                    if n.is_zero() {
                        prop_assert_eq!(len, 1);
                    } else {
                        prop_assert_eq!(sign(&BigInt::from(len)), sign(&n));
                    }
                    prop_assert_eq!(len.unsigned_abs() as usize, separate(&n, base).unwrap().len());
                }

                #[test]
                fn [< weighted_sum_ $t >](n: $t, base in 2u32..=36) {
                    let n = BigInt::from(n);
                    let weighted = separate_weighted(&n, base).unwrap();
                    prop_assert_eq!(weighted.iter().sum::<BigInt>(), n);
                }
            } }
        };
    }

    impl_test!(i64);
    impl_test!(i128);
    impl_test!(u64);

    proptest! {
        #[test]
        fn get_matches_separate(n: i128, index in -50i64..50, base in 2u32..=16) {
            let n = BigInt::from(n);
            let digits = separate(&n, base).unwrap();
            let len = digits.len() as i64;
            let position = if index < 0 { index + len } else { index };

            match get(&n, index, base) {
                Ok(digit) => prop_assert_eq!(&digit, &digits[position as usize]),
                Err(err) => {
                    prop_assert!(position < 0 || position >= len);
                    prop_assert_eq!(err, DigitError::IndexOutOfRange { index: index, length: len as u64 });
                }
            }
        }

        #[test]
        fn join_appends_digits(a in 1u64.., b: u64, base in 2u32..=16) {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let joined = join(&a, &b, base).unwrap();

            let mut expected = separate(&a, base).unwrap();
            expected.extend(separate(&b, base).unwrap());
            prop_assert_eq!(separate(&joined, base).unwrap(), expected);
        }

        #[test]
        fn shift_left_then_right(n: i64, amount in 0i64..40, base in 2u32..=16) {
            let n = BigInt::from(n);
            let shifted = shift(&n, amount, base).unwrap();
            prop_assert_eq!(shift(&shifted, -amount, base).unwrap(), n);
        }

        #[test]
        fn reversed_twice(n in 1u64.., base in 2u32..=16) {
            // trailing zeros are lost on the first reversal
            prop_assume!(n % u64::from(base) != 0);

            let i = IndexableInteger::with_base(n, base).unwrap();
            let reversed = i.slice(DigitSlice::reversed()).unwrap();
            let back = IndexableInteger::with_base(reversed, base).unwrap();
            prop_assert_eq!(back.slice(DigitSlice::reversed()).unwrap(), BigInt::from(n));
        }
    }
}
