// Test cases for join, join_all and weight; included by algebra/join.rs


mod join {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal ~ $b:literal base $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a = int!($a);
                let b = int!($b);
                assert_eq!(join(&a, &b, $base).unwrap(), int!($expected));
            }
        };
        ($name:ident: $a:literal ~ $b:literal => $expected:literal) => {
            impl_case!($name: $a ~ $b base 10 => $expected);
        };
    }

    impl_case!(case_123_456: 123 ~ 456 => 123456);
    impl_case!(case_123_0: 123 ~ 0 => 1230);
    impl_case!(case_0_123: 0 ~ 123 => 123);
    impl_case!(case_0_0: 0 ~ 0 => 0);
    impl_case!(case_1_100: 1 ~ 100 => 1100);
    impl_case!(case_10_10: 10 ~ 10 => 1010);
    impl_case!(case_0xbe_0xef: 0xbe ~ 0xef base 16 => 0xbeef);
    impl_case!(case_0b1_0b10: 0b1 ~ 0b10 base 2 => 0b110);
    impl_case!(case_0o2_0o57: 0o2 ~ 0o57 base 8 => 0o257);
    impl_case!(case_n12_n34: -12 ~ -34 => -1234);
    impl_case!(case_n12_0: -12 ~ 0 => -120);
    impl_case!(case_0_n34: 0 ~ -34 => -34);

    #[test]
    #[should_panic(expected = "IncompatibleSign")]
    fn case_5_n3() {
        join(&int!(5), &int!(-3), 10).unwrap();
    }

    #[test]
    #[should_panic(expected = "IncompatibleSign")]
    fn case_n5_3() {
        join(&int!(-5), &int!(3), 10).unwrap();
    }

    #[test]
    fn reports_both_signs() {
        let err = join(&int!(5), &int!(-3), 10).unwrap_err();
        assert_eq!(err, DigitError::IncompatibleSign { lhs: Sign::Positive, rhs: Sign::Negative });
    }

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_base_1() {
        join(&int!(1), &int!(2), 1).unwrap();
    }
}


mod join_all {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($d:expr),* ] base $base:literal => $expected:expr) => {
            #[test]
            fn $name() {
                let groups = digits![ $($d),* ];
                assert_eq!(join_all(&groups, $base).unwrap(), int!($expected));
            }
        };
        ($name:ident: [ $($d:expr),* ] => $expected:expr) => {
            impl_case!($name: [ $($d),* ] base 10 => $expected);
        };
    }

    impl_case!(case_1234: [1, 2, 3, 4] => 1234);
    impl_case!(case_4321: [4, 3, 2, 1] => 4321);
    impl_case!(case_0xdead: [0xd, 0xe, 0xa, 0xd] base 16 => 0xdead);
    impl_case!(case_0xbeef: [0xbe, 0xef] base 16 => 0xbeef);
    impl_case!(case_0o257: [0o2, 0o5, 0o7] base 8 => 0o257);
    impl_case!(case_0b110: [0b1, 0b1, 0b0] base 2 => 0b110);
    impl_case!(case_n1234: [-1, -2, -3, -4] => -1234);
    impl_case!(case_000: [0, 0, 0] => 0);
    impl_case!(case_groups: [123, 456, 789] => 123456789);
    impl_case!(case_leading_zero: [0, 1, 2] => 12);
    impl_case!(case_single: [42] => 42);
    impl_case!(case_single_negative: [-42] => -42);
    impl_case!(case_single_multi_digit_in_base_2: [1234] base 2 => 1234);

    #[test]
    #[should_panic(expected = "EmptySequence")]
    fn case_empty() {
        join_all(&[], 10).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn case_empty_bad_base() {
        join_all(&[], 1).unwrap();
    }

    #[test]
    #[should_panic(expected = "IncompatibleSign")]
    fn case_mixed_signs() {
        join_all(&digits![1, -2, 3], 10).unwrap();
    }

    #[test]
    fn is_left_fold_of_join() {
        let values = [-321, -7, 0, 0, 9, 45, 800];
        for &a in values.iter() {
            for &b in values.iter() {
                for &c in values.iter() {
                    let (a, b, c) = (int!(a), int!(b), int!(c));
                    let all = join_all(&[a.clone(), b.clone(), c.clone()], 10);
                    let folded = join(&a, &b, 10).and_then(|ab| join(&ab, &c, 10));
                    assert_eq!(all, folded);
                }
            }
        }
    }

    #[test]
    fn associative_under_shared_nonzero_sign() {
        let values = [3, 10, 407, 9999];
        for &a in values.iter() {
            for &b in values.iter() {
                for &c in values.iter() {
                    for &s in [1, -1].iter() {
                        let (a, b, c) = (int!(a * s), int!(b * s), int!(c * s));
                        let left = join(&join(&a, &b, 10).unwrap(), &c, 10).unwrap();
                        let right = join(&a, &join(&b, &c, 10).unwrap(), 10).unwrap();
                        assert_eq!(left, right, "{} {} {}", a, b, c);
                    }
                }
            }
        }
    }
}


mod weight {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($d:expr),* ] base $base:literal => [ $($w:expr),* ]) => {
            #[test]
            fn $name() {
                let values = digits![ $($d),* ];
                assert_eq!(weight(&values, $base).unwrap(), digits![ $($w),* ]);
            }
        };
    }

    impl_case!(case_4321: [4, 3, 2, 1] base 10 => [4, 30, 200, 1000]);
    impl_case!(case_1234: [1, 2, 3, 4] base 10 => [1, 20, 300, 4000]);
    impl_case!(case_n4321: [-4, -3, -2, -1] base 10 => [-4, -30, -200, -1000]);
    impl_case!(case_binary: [1, 1, 0, 1] base 2 => [1, 2, 0, 8]);
    impl_case!(case_empty: [] base 10 => []);

    #[test]
    fn reversed_digits_sum_to_value() {
        let n = int!(0xdeadbeefu32);
        let mut digits = separate(&n, 16).unwrap();
        digits.reverse();
        let total: BigInt = weight(&digits, 16).unwrap().into_iter().sum();
        assert_eq!(total, n);
    }
}
