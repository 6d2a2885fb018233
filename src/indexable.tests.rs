// Test cases for IndexableInteger; included by indexable.rs

/// View `n` in base 10, whatever the configured default base
fn decimal<T: Into<BigInt>>(n: T) -> IndexableInteger {
    IndexableInteger::with_radix(n, Radix::DECIMAL)
}

mod construction {
    use super::*;

    #[test]
    fn default_base() {
        let i = IndexableInteger::new(1234);
        assert_eq!(i.base(), DEFAULT_BASE);
        assert_eq!(i.radix(), Radix::default());
        assert_eq!(i.value(), &int!(1234));
        assert_eq!(i.into_value(), int!(1234));
    }

    #[test]
    fn explicit_base() {
        let i = IndexableInteger::with_base(0xdead, 16).unwrap();
        assert_eq!(i.base(), 16);
        assert_eq!(i, IndexableInteger::with_radix(0xdead, Radix::HEXADECIMAL));
    }

    #[test]
    fn default_base_digits() {
        let n = int!(str "-31415926535897932384626433832795028841971");
        let i = IndexableInteger::new(n.clone());
        assert_eq!(i.to_digits(), separate(&n, DEFAULT_BASE).unwrap());
        assert_eq!(i.len() as i64, length(&n, DEFAULT_BASE).unwrap().abs());
    }

    #[test]
    fn decimal_ignores_default_base() {
        let i = decimal(1234);
        assert_eq!(i.base(), 10);
        assert_eq!(i.to_digits(), digits![1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "InvalidBase(1)")]
    fn base_1() {
        IndexableInteger::with_base(1234, 1).unwrap();
    }

    #[test]
    fn sign() {
        assert_eq!(IndexableInteger::new(-5).sign(), Sign::Negative);
        assert_eq!(IndexableInteger::new(0).sign(), Sign::Zero);
        assert_eq!(IndexableInteger::new(5u8).sign(), Sign::Positive);
    }

    #[test]
    fn equality_includes_base() {
        let decimal = IndexableInteger::with_base(10, 10).unwrap();
        let binary = IndexableInteger::with_base(10, 2).unwrap();
        assert_ne!(decimal, binary);
        assert_eq!(decimal, IndexableInteger::with_base(10, 10).unwrap());
    }
}


mod len {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal base $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let i = IndexableInteger::with_base($n, $base).unwrap();
                assert_eq!(i.len(), $expected);
                assert_eq!(i.digits().len(), $expected);
            }
        };
    }

    impl_case!(case_1234: 1234 base 10 => 4);
    impl_case!(case_n1234: -1234 base 10 => 4);
    impl_case!(case_0: 0 base 10 => 1);
    impl_case!(case_0xdead: 0xdead base 16 => 4);
    impl_case!(case_0b1011: 0b1011 base 2 => 4);
}


mod digit {
    use super::*;

    #[test]
    fn every_position() {
        let i = decimal(1234);
        for (index, expected) in [1, 2, 3, 4].iter().enumerate() {
            assert_eq!(i.digit(index as i64).unwrap(), int!(*expected));
            assert_eq!(i.digit(index as i64 - 4).unwrap(), int!(*expected));
        }
    }

    #[test]
    fn negative_value() {
        let i = decimal(-907);
        assert_eq!(i.digit(0).unwrap(), int!(-9));
        assert_eq!(i.digit(1).unwrap(), int!(0));
        assert_eq!(i.digit(-1).unwrap(), int!(-7));
    }

    #[test]
    #[should_panic(expected = "IndexOutOfRange")]
    fn past_end() {
        decimal(1234).digit(4).unwrap();
    }

    #[test]
    #[should_panic(expected = "IndexOutOfRange")]
    fn before_start() {
        decimal(1234).digit(-5).unwrap();
    }
}


mod slice {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal [ $slice:expr ] => $expected:literal) => {
            #[test]
            fn $name() {
                let i = decimal($n);
                assert_eq!(i.slice($slice).unwrap(), int!($expected));
            }
        };
    }

    impl_case!(case_1234_reversed: 1234 [DigitSlice::reversed()] => 4321);
    impl_case!(case_1234_to_2: 1234 [..2i64] => 12);
    impl_case!(case_1234_from_2: 1234 [2i64..] => 34);
    impl_case!(case_1234_full: 1234 [..] => 1234);
    impl_case!(case_1234_1_to_eq_2: 1234 [1i64..=2] => 23);
    impl_case!(case_1234_last: 1234 [-1i64..] => 4);
    impl_case!(case_123456_step_2: 123456 [DigitSlice::new().step(2)] => 135);
    impl_case!(case_123456_rev_step_2: 123456 [DigitSlice::new().step(-2)] => 642);
    impl_case!(case_n1234_reversed: -1234 [DigitSlice::reversed()] => -4321);
    impl_case!(case_n1234_to_2: -1234 [..2i64] => -12);
    impl_case!(case_1200_reversed: 1200 [DigitSlice::reversed()] => 21);
    impl_case!(case_1034_from_1: 1034 [1i64..] => 34);
    impl_case!(case_0_full: 0 [..] => 0);

    #[test]
    fn hexadecimal_reversed() {
        let i = IndexableInteger::with_base(0xbeef, 16).unwrap();
        assert_eq!(i.slice(DigitSlice::reversed()).unwrap(), int!(0xfeeb));
    }

    #[test]
    #[should_panic(expected = "EmptySequence")]
    fn empty_selection() {
        decimal(1234).slice(3i64..1).unwrap();
    }

    #[test]
    #[should_panic(expected = "ZeroStep")]
    fn zero_step() {
        decimal(1234).slice(DigitSlice::new().step(0)).unwrap();
    }
}


mod iteration {
    use super::*;

    #[test]
    fn most_significant_first() {
        let i = decimal(1234);
        let digits: Vec<BigInt> = i.digits().collect();
        assert_eq!(digits, digits![1, 2, 3, 4]);
    }

    #[test]
    fn restartable() {
        let i = decimal(-52);
        let first: Vec<BigInt> = (&i).into_iter().collect();
        let second: Vec<BigInt> = (&i).into_iter().collect();
        assert_eq!(first, digits![-5, -2]);
        assert_eq!(first, second);
    }

    #[test]
    fn for_loop() {
        let i = IndexableInteger::with_base(0o257, 8).unwrap();
        let mut total = BigInt::zero();
        for digit in &i {
            total = total * 8u8 + digit;
        }
        assert_eq!(total, int!(0o257));
    }

    #[test]
    fn double_ended() {
        let i = decimal(1234);
        let reversed: Vec<BigInt> = i.digits().rev().collect();
        assert_eq!(reversed, digits![4, 3, 2, 1]);

        let mut digits = i.digits();
        assert_eq!(digits.next(), Some(int!(1)));
        assert_eq!(digits.next_back(), Some(int!(4)));
        assert_eq!(digits.len(), 2);
    }

    #[test]
    fn matches_to_digits() {
        let i = IndexableInteger::new(int!(str "-31415926535897932384626433832795028841971"));
        assert_eq!(i.digits().collect::<Vec<_>>(), i.to_digits());
        assert_eq!(i.to_digits().len(), i.len());
    }
}


#[test]
fn hash_follows_eq() {
    use stdlib::hash::{Hash, Hasher};
    use stdlib::DefaultHasher;

    let hash = |i: &IndexableInteger| {
        let mut hasher = DefaultHasher::new();
        i.hash(&mut hasher);
        hasher.finish()
    };

    let a = IndexableInteger::new(1234);
    let b = IndexableInteger::with_base(1234u64, DEFAULT_BASE).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));
}
