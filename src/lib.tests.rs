// Crate-level scenarios; included by lib.rs

#[test]
fn separate_and_join_1234() {
    let n = int!(1234);
    assert_eq!(separate(&n, 10).unwrap(), digits![1, 2, 3, 4]);
    assert_eq!(join_all(&digits![1, 2, 3, 4], 10).unwrap(), n);
}

#[test]
fn separate_negative() {
    let n = int!(-1234);
    assert_eq!(separate(&n, 10).unwrap(), digits![-1, -2, -3, -4]);
    assert_eq!(length(&n, 10).unwrap(), -4);
}

#[test]
fn join_with_zero() {
    assert_eq!(join(&int!(123), &int!(0), 10).unwrap(), int!(1230));
    assert_eq!(join(&int!(0), &int!(123), 10).unwrap(), int!(123));
    assert_eq!(join(&int!(0), &int!(0), 10).unwrap(), int!(0));
}

#[test]
fn convert_relabels_digits() {
    assert_eq!(convert(&int!(1011), 10, 2).unwrap(), int!(0b1011));
    assert_eq!(convert(&int!(0x1011), 16, 2).unwrap(), int!(0b1011));
}

#[test]
fn shift_both_ways() {
    assert_eq!(shift(&int!(123), 2, 10).unwrap(), int!(12300));
    assert_eq!(shift(&int!(0xabc0), -1, 16).unwrap(), int!(0xabc));
}

#[test]
fn join_opposite_signs() {
    let err = join(&int!(5), &int!(-3), 10).unwrap_err();
    assert_eq!(err, DigitError::IncompatibleSign { lhs: Sign::Positive, rhs: Sign::Negative });
}

#[test]
fn indexable_1234() {
    let i = IndexableInteger::with_base(1234, 10).unwrap();
    assert_eq!(i.digit(0).unwrap(), int!(1));
    assert_eq!(i.slice(DigitSlice::reversed()).unwrap(), int!(4321));
    assert_eq!(i.slice(..2i64).unwrap(), int!(12));
    assert_eq!(i.len(), 4);
    assert_eq!(i.digits().collect::<Vec<_>>(), digits![1, 2, 3, 4]);
}

#[test]
fn sign_helpers() {
    let n = int!(-42);
    assert_eq!(sign(&n), Sign::Negative);
    assert_eq!(positive(&n), int!(42));
    assert_eq!(negative(&n), n);
    assert_eq!(toggle(&n), int!(42));
    assert_eq!(toggle(&int!(0)), int!(0));
}

#[test]
fn weighted_digits_sum_to_value() {
    let n = int!(str "-90817263544536271809");
    let weighted = separate_weighted(&n, 10).unwrap();
    assert_eq!(weighted.len(), 20);
    assert_eq!(weighted.iter().sum::<BigInt>(), n);
}

#[test]
fn weight_reversed_digits() {
    let mut digits = separate(&int!(0o1777), 8).unwrap();
    digits.reverse();
    let weighted = weight(&digits, 8).unwrap();
    assert_eq!(weighted, digits![7, 0o70, 0o700, 0o1000]);
}

#[test]
fn base_is_validated_everywhere() {
    let n = int!(7);
    let expected = DigitError::InvalidBase(1);
    assert_eq!(length(&n, 1).unwrap_err(), expected);
    assert_eq!(significant_length(&n, 1).unwrap_err(), expected);
    assert_eq!(separate(&n, 1).unwrap_err(), expected);
    assert_eq!(separate_weighted(&n, 1).unwrap_err(), expected);
    assert_eq!(get(&n, 0, 1).unwrap_err(), expected);
    assert_eq!(join(&n, &n, 1).unwrap_err(), expected);
    assert_eq!(join_all(&[], 1).unwrap_err(), expected);
    assert_eq!(weight(&[n.clone()], 1).unwrap_err(), expected);
    assert_eq!(convert(&n, 1, 10).unwrap_err(), expected);
    assert_eq!(shift(&n, 1, 1).unwrap_err(), expected);
    assert_eq!(IndexableInteger::with_base(n, 1).unwrap_err(), expected);
}

#[test]
fn round_trip_large_values() {
    let values = [
        "0",
        "-1",
        "18446744073709551616",
        "-340282366920938463463374607431768211456",
        "99999999999999999999999999999999999999999999",
        "100000000000000000000000000000000000000000000",
    ];

    for value in values.iter() {
        let n: BigInt = value.parse().unwrap();
        for base in 2u32..=36 {
            let digits = separate(&n, base).unwrap();
            assert_eq!(digits.len() as i64, length(&n, base).unwrap().abs());
            assert_eq!(join_all(&digits, base).unwrap(), n);
        }
    }
}

#[test]
fn error_is_std_error() {
    #[cfg(feature = "std")]
    {
        let err: Box<dyn std::error::Error> = Box::new(DigitError::ZeroStep);
        assert_eq!(err.to_string(), "slice step cannot be zero");
    }
}
