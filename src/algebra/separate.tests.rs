// Test cases for length, separate and get; included by algebra/mod.rs

mod length {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal base $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = int!($n);
                assert_eq!(length(&n, $base).unwrap(), $expected);
            }
        };
        ($name:ident: $n:literal => $expected:literal) => {
            impl_case!($name: $n base 10 => $expected);
        };
    }

    impl_case!(case_0: 0 => 1);
    impl_case!(case_1: 1 => 1);
    impl_case!(case_n1: -1 => -1);
    impl_case!(case_9: 9 => 1);
    impl_case!(case_10: 10 => 2);
    impl_case!(case_99: 99 => 2);
    impl_case!(case_100: 100 => 3);
    impl_case!(case_1000: 1000 => 4);
    impl_case!(case_1234: 1234 => 4);
    impl_case!(case_n1234: -1234 => -4);
    impl_case!(case_n1000: -1000 => -4);
    impl_case!(case_0xdead: 0xdead base 16 => 4);
    impl_case!(case_0xdeadbeef: 0xdeadbeefu32 base 16 => 8);
    impl_case!(case_n0xdeadbeef: -0xdeadbeefi64 base 16 => -8);
    impl_case!(case_0b110: 0b110 base 2 => 3);
    impl_case!(case_0_base_2: 0 base 2 => 1);
    impl_case!(case_u64_max: 18446744073709551615u64 => 20);
    impl_case!(case_i64_min: -9223372036854775808i64 => -19);

    #[test]
    fn case_googol() {
        let n = int!(str "10000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000");
        assert_eq!(length(&n, 10).unwrap(), 101);
        assert_eq!(length(&(n - 1u8), 10).unwrap(), 100);
    }

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_base_1() {
        length(&int!(1234), 1).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidBase(0)")]
    fn case_base_0() {
        length(&int!(0), 0).unwrap();
    }

    #[test]
    fn sign_matches_value() {
        for value in -300i32..300 {
            let n = int!(value);
            let len = length(&n, 7).unwrap();
            if value == 0 {
                assert_eq!(len, 1);
            } else {
                assert_eq!(len.signum(), i64::from(value.signum()));
            }
        }
    }
}


mod significant_length {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal base $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = int!($n);
                assert_eq!(significant_length(&n, $base).unwrap(), $expected);
            }
        };
    }

    impl_case!(case_0: 0 base 10 => 0);
    impl_case!(case_0_base_2: 0 base 2 => 0);
    impl_case!(case_1: 1 base 10 => 1);
    impl_case!(case_1234: 1234 base 10 => 4);
    impl_case!(case_n1234: -1234 base 10 => -4);
    impl_case!(case_0xdead: 0xdead base 16 => 4);

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_zero_base_1() {
        significant_length(&int!(0), 1).unwrap();
    }

    #[test]
    fn matches_length_except_zero() {
        for value in -300i32..300 {
            let n = int!(value);
            let expected = if value == 0 { 0 } else { length(&n, 7).unwrap() };
            assert_eq!(significant_length(&n, 7).unwrap(), expected);
        }
    }
}


mod separate {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal base $base:literal => [ $($d:expr),* ]) => {
            #[test]
            fn $name() {
                let n = int!($n);
                let digits = separate(&n, $base).unwrap();
                assert_eq!(digits, digits![ $($d),* ]);
                assert_eq!(join_all(&digits, $base).unwrap(), n);
            }
        };
        ($name:ident: $n:literal => [ $($d:expr),* ]) => {
            impl_case!($name: $n base 10 => [ $($d),* ]);
        };
    }

    impl_case!(case_1234: 1234 => [1, 2, 3, 4]);
    impl_case!(case_4321: 4321 => [4, 3, 2, 1]);
    impl_case!(case_n1234: -1234 => [-1, -2, -3, -4]);
    impl_case!(case_0: 0 => [0]);
    impl_case!(case_100: 100 => [1, 0, 0]);
    impl_case!(case_n100: -100 => [-1, 0, 0]);
    impl_case!(case_0xdead: 0xdead base 16 => [0xd, 0xe, 0xa, 0xd]);
    impl_case!(case_0xbeef: 0xbeef base 16 => [0xb, 0xe, 0xe, 0xf]);
    impl_case!(case_0o257: 0o257 base 8 => [0o2, 0o5, 0o7]);
    impl_case!(case_0b1011: 0b1011 base 2 => [0b1, 0b0, 0b1, 0b1]);
    impl_case!(case_35_base_36: 35 base 36 => [35]);
    impl_case!(case_36_base_36: 36 base 36 => [1, 0]);

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_base_1() {
        separate(&int!(1234), 1).unwrap();
    }

    #[test]
    fn digits_are_bounded_by_base() {
        for base in 2u32..=16 {
            for value in -500i32..500 {
                let n = int!(value);
                for digit in separate(&n, base).unwrap() {
                    assert!(digit.magnitude() < &BigUint::from(base), "{} in base {}", value, base);
                }
            }
        }
    }

    #[test]
    fn round_trip_every_base() {
        for base in 2u32..=16 {
            for value in -2000i32..2000 {
                let n = int!(value);
                let digits = separate(&n, base).unwrap();
                assert_eq!(join_all(&digits, base).unwrap(), n, "{} in base {}", value, base);
            }
        }
    }

    #[test]
    fn round_trip_large() {
        let n = int!(str "-98765432109876543210987654321098765432109876543210");
        for &base in [2u32, 3, 10, 16, 1000, 4294967295].iter() {
            let digits = separate(&n, base).unwrap();
            assert_eq!(join_all(&digits, base).unwrap(), n);
        }
        assert_eq!(separate(&n, 10).unwrap().len(), 50);
    }
}


mod separate_weighted {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal base $base:literal => [ $($d:expr),* ]) => {
            #[test]
            fn $name() {
                let n = int!($n);
                let weighted = separate_weighted(&n, $base).unwrap();
                assert_eq!(weighted, digits![ $($d),* ]);
                assert_eq!(weighted.into_iter().sum::<BigInt>(), n);
            }
        };
        ($name:ident: $n:literal => [ $($d:expr),* ]) => {
            impl_case!($name: $n base 10 => [ $($d),* ]);
        };
    }

    impl_case!(case_1234: 1234 => [1000, 200, 30, 4]);
    impl_case!(case_n1234: -1234 => [-1000, -200, -30, -4]);
    impl_case!(case_0: 0 => [0]);
    impl_case!(case_0xbeef: 0xbeef base 16 => [0xb000, 0xe00, 0xe0, 0xf]);
}


mod get {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal [ $index:literal ] base $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = int!($n);
                assert_eq!(get(&n, $index, $base).unwrap(), int!($expected));
            }
        };
        ($name:ident: $n:literal [ $index:literal ] => $expected:literal) => {
            impl_case!($name: $n [$index] base 10 => $expected);
        };
    }

    impl_case!(case_1234_0: 1234[0] => 1);
    impl_case!(case_1234_1: 1234[1] => 2);
    impl_case!(case_1234_3: 1234[3] => 4);
    impl_case!(case_1234_n1: 1234[-1] => 4);
    impl_case!(case_1234_n4: 1234[-4] => 1);
    impl_case!(case_n1234_0: -1234[0] => -1);
    impl_case!(case_n1234_n2: -1234[-2] => -3);
    impl_case!(case_1000_n1: 1000[-1] => 0);
    impl_case!(case_0_0: 0[0] => 0);
    impl_case!(case_0_n1: 0[-1] => 0);
    impl_case!(case_0xdead_1: 0xdead[1] base 16 => 0xe);
    impl_case!(case_0xdead_n1: 0xdead[-1] base 16 => 0xd);

    macro_rules! impl_invalid_case {
        ($name:ident: $n:literal [ $index:expr ]) => {
            #[test]
            #[should_panic(expected = "IndexOutOfRange")]
            fn $name() {
                get(&int!($n), $index, 10).unwrap();
            }
        };
    }

    impl_invalid_case!(case_1234_4: 1234[4]);
    impl_invalid_case!(case_1234_n5: 1234[-5]);
    impl_invalid_case!(case_0_1: 0[1]);
    impl_invalid_case!(case_0_n2: 0[-2]);
    impl_invalid_case!(case_1_i64_max: 1[i64::MAX]);
    impl_invalid_case!(case_1_i64_min: 1[i64::MIN]);

    #[test]
    fn reports_index_and_length() {
        let err = get(&int!(-1234), 7, 10).unwrap_err();
        assert_eq!(err, DigitError::IndexOutOfRange { index: 7, length: 4 });
    }

    #[test]
    fn matches_separated_digits() {
        for base in 2u32..=16 {
            for value in -300i32..300 {
                let n = int!(value);
                let digits = separate(&n, base).unwrap();
                let count = digits.len() as i64;
                for index in 0..count {
                    assert_eq!(get(&n, index, base).unwrap(), digits[index as usize]);
                    assert_eq!(get(&n, index - count, base).unwrap(), digits[index as usize]);
                }
            }
        }
    }
}
