// Test cases for convert and shift; included by algebra/convert.rs

mod convert {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal from $from:literal to $to:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = int!($n);
                assert_eq!(convert(&n, $from, $to).unwrap(), int!($expected));
            }
        };
    }

    impl_case!(case_1011_10_2: 1011 from 10 to 2 => 0b1011);
    impl_case!(case_0x1011_16_2: 0x1011 from 16 to 2 => 0b1011);
    impl_case!(case_n1011_10_2: -1011 from 10 to 2 => -0b1011);
    impl_case!(case_0_10_2: 0 from 10 to 2 => 0);
    impl_case!(case_1234_10_10: 1234 from 10 to 10 => 1234);
    impl_case!(case_1234_10_16: 1234 from 10 to 16 => 0x1234);
    impl_case!(case_0x1234_16_10: 0x1234 from 16 to 10 => 1234);
    impl_case!(case_0o777_8_10: 0o777 from 8 to 10 => 777);
    impl_case!(case_777_10_8: 777 from 10 to 8 => 0o777);
    impl_case!(case_0b1101_2_10: 0b1101 from 2 to 10 => 1101);

    #[test]
    #[should_panic(expected = "InvalidDigitForBase")]
    fn case_1021_10_2() {
        convert(&int!(1021), 10, 2).unwrap();
    }

    #[test]
    fn reports_offending_digit() {
        let err = convert(&int!(-1921), 10, 8).unwrap_err();
        assert_eq!(err, DigitError::InvalidDigitForBase { digit: int!(-9), base: 8 });
    }

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_bad_from_base() {
        convert(&int!(1), 1, 10).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidBase(0)")]
    fn case_bad_to_base() {
        convert(&int!(1), 10, 0).unwrap();
    }

    #[test]
    fn same_base_is_identity() {
        for base in 2u32..=16 {
            for value in -400i32..400 {
                let n = int!(value);
                assert_eq!(convert(&n, base, base).unwrap(), n);
            }
        }
    }

    #[test]
    fn relabel_and_back() {
        for value in 0u32..0o10000 {
            let n = int!(value);
            let decimal = convert(&n, 8, 10).unwrap();
            assert_eq!(convert(&decimal, 10, 8).unwrap(), n);
        }
    }
}


mod shift {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal << $amount:literal base $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = int!($n);
                assert_eq!(shift(&n, $amount, $base).unwrap(), int!($expected));
            }
        };
        ($name:ident: $n:literal << $amount:literal => $expected:literal) => {
            impl_case!($name: $n << $amount base 10 => $expected);
        };
    }

    impl_case!(case_123_2: 123 << 2 => 12300);
    impl_case!(case_123_1: 123 << 1 => 1230);
    impl_case!(case_n123_2: -123 << 2 => -12300);
    impl_case!(case_0_3: 0 << 3 => 0);
    impl_case!(case_0xabc0_n1: 0xabc0 << -1 base 16 => 0xabc);
    impl_case!(case_0xabc_1: 0xabc << 1 base 16 => 0xabc0);
    impl_case!(case_12345_n2: 12345 << -2 => 123);
    impl_case!(case_n12345_n2: -12345 << -2 => -123);
    impl_case!(case_12345_n4: 12345 << -4 => 1);
    impl_case!(case_12345_n5: 12345 << -5 => 0);
    impl_case!(case_12345_n6: 12345 << -6 => 0);
    impl_case!(case_n12345_n5: -12345 << -5 => 0);
    impl_case!(case_0_n1: 0 << -1 => 0);
    impl_case!(case_123_0: 123 << 0 => 123);
    impl_case!(case_n123_0: -123 << 0 => -123);
    impl_case!(case_0_0: 0 << 0 => 0);
    impl_case!(case_0b101_3: 0b101 << 3 base 2 => 0b101000);

    #[test]
    fn drop_everything() {
        assert_eq!(shift(&int!(987654321), i64::MIN, 10).unwrap(), BigInt::zero());
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn case_i64_max() {
        shift(&int!(1), i64::MAX, 2).unwrap();
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn case_negative_i64_max() {
        shift(&int!(-7), i64::MAX, 10).unwrap();
    }

    #[test]
    fn just_past_max_bits() {
        let amount = MAX_BITS as i64;
        assert_eq!(shift(&int!(1), amount, 2).unwrap_err(), DigitError::Overflow);
        assert_eq!(shift(&int!(1), amount / 4, 16).unwrap_err(), DigitError::Overflow);
    }

    #[test]
    fn zero_never_overflows() {
        assert_eq!(shift(&int!(0), i64::MAX, 2).unwrap(), BigInt::zero());
    }

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_base_1() {
        shift(&int!(1), 1, 1).unwrap();
    }

    #[test]
    fn matches_separated_digits() {
        for value in -1500i32..1500 {
            let n = int!(value);
            let digits = separate(&n, 10).unwrap();
            for amount in 1..digits.len() {
                let kept = &digits[..digits.len() - amount];
                let expected = join_all(kept, 10).unwrap();
                assert_eq!(shift(&n, -(amount as i64), 10).unwrap(), expected);
            }
        }
    }

    #[test]
    fn shift_then_unshift() {
        for value in -500i32..500 {
            let n = int!(value);
            for amount in 0..5i64 {
                let shifted = shift(&n, amount, 7).unwrap();
                assert_eq!(shift(&shifted, -amount, 7).unwrap(), n);
            }
        }
    }
}
