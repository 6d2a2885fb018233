//! Walk through every digit operation, checking each result
//!
//! Run with `cargo run --example digit-tour`
//!
extern crate integer_digits;

use integer_digits::{
    convert, get, join, join_all, length, negative, positive, separate, separate_weighted, shift,
    sign, significant_length, toggle, weight, DigitError, DigitSlice, IndexableInteger, Sign,
};
use integer_digits::num_bigint::BigInt;


fn int(n: i64) -> BigInt {
    BigInt::from(n)
}

fn ints(ns: &[i64]) -> Vec<BigInt> {
    ns.iter().map(|&n| BigInt::from(n)).collect()
}

fn main() -> Result<(), DigitError> {
    let n = int(-1234);

    println!("sign({}) = {}", n, sign(&n));
    assert_eq!(sign(&n), Sign::Negative);
    assert_eq!(sign(&int(0)), Sign::Zero);

    println!("positive/negative/toggle({}) = {} / {} / {}", n, positive(&n), negative(&n), toggle(&n));
    assert_eq!(positive(&n), int(1234));
    assert_eq!(negative(&int(1234)), n);
    assert_eq!(toggle(&n), int(1234));

    println!("length({}) = {}", n, length(&n, 10)?);
    assert_eq!(length(&n, 10)?, -4);
    assert_eq!(length(&int(0), 10)?, 1);
    assert_eq!(length(&int(100), 10)?, 3);
    assert_eq!(significant_length(&int(0), 10)?, 0);

    let digits = separate(&n, 10)?;
    println!("separate({}) = {:?}", n, digits);
    assert_eq!(digits, ints(&[-1, -2, -3, -4]));
    assert_eq!(join_all(&digits, 10)?, n);

    let weighted = separate_weighted(&int(1234), 10)?;
    println!("separate_weighted(1234) = {:?}", weighted);
    assert_eq!(weighted, ints(&[1000, 200, 30, 4]));

    println!("join(123, 0) = {}", join(&int(123), &int(0), 10)?);
    assert_eq!(join(&int(123), &int(0), 10)?, int(1230));
    assert_eq!(join(&int(0), &int(123), 10)?, int(123));
    assert_eq!(join(&int(0), &int(0), 10)?, int(0));

    match join(&int(5), &int(-3), 10) {
        Err(err) => println!("join(5, -3) fails: {}", err),
        Ok(value) => panic!("join(5, -3) gave {}", value),
    }

    assert_eq!(weight(&ints(&[4, 3, 2, 1]), 10)?, ints(&[4, 30, 200, 1000]));

    println!("get(1234, -1) = {}", get(&int(1234), -1, 10)?);
    assert_eq!(get(&int(1234), 0, 10)?, int(1));
    assert!(get(&int(1234), 4, 10).is_err());

    println!("convert(1011, 10 -> 2) = {}", convert(&int(1011), 10, 2)?);
    assert_eq!(convert(&int(1011), 10, 2)?, int(0b1011));
    assert_eq!(convert(&int(0x1011), 16, 2)?, int(0b1011));

    println!("shift(123, 2) = {}", shift(&int(123), 2, 10)?);
    assert_eq!(shift(&int(123), 2, 10)?, int(12300));
    assert_eq!(shift(&int(0xabc0), -1, 16)?, int(0xabc));
    assert_eq!(shift(&int(123), 0, 10)?, int(123));

    let i = IndexableInteger::with_base(1234, 10)?;
    println!("{:?} has {} digits", i, i.len());
    assert_eq!(i.digit(0)?, int(1));
    assert_eq!(i.slice(DigitSlice::reversed())?, int(4321));
    assert_eq!(i.slice(..2i64)?, int(12));
    assert_eq!(i.digits().collect::<Vec<_>>(), ints(&[1, 2, 3, 4]));

    let hex = IndexableInteger::with_base(0xc0ffee, 16)?;
    for (position, digit) in hex.digits().enumerate() {
        println!("  digit {} of {:?}: {:x}", position, hex, digit);
    }

    Ok(())
}
