//! Implementation of std::fmt traits
//!
//! Digits are never rendered as text; an `IndexableInteger` only has
//! a `Debug` representation.

use crate::*;


impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Positive => "positive",
        };
        f.write_str(name)
    }
}


impl fmt::Debug for IndexableInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexableInteger({}, base={})", self.value(), self.base())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use stdlib::string::ToString;

    #[test]
    fn test_debug() {
        let vals = vec![
            ("IndexableInteger(1234, base=10)", IndexableInteger::with_base(1234, 10)),
            ("IndexableInteger(-1234, base=10)", IndexableInteger::with_base(-1234, 10)),
            ("IndexableInteger(57005, base=16)", IndexableInteger::with_base(0xdead, 16)),
            ("IndexableInteger(0, base=2)", IndexableInteger::with_base(0, 2)),
        ];

        for (expected, i) in vals {
            assert_eq!(format!("{:?}", i.unwrap()), expected);
        }
    }

    #[test]
    fn test_sign_display() {
        assert_eq!(Sign::Negative.to_string(), "negative");
        assert_eq!(Sign::Zero.to_string(), "zero");
        assert_eq!(Sign::Positive.to_string(), "positive");
    }

    #[test]
    fn test_error_display() {
        let vals = vec![
            (DigitError::InvalidBase(1), "invalid base 1 (must be at least 2)"),
            (
                DigitError::IncompatibleSign { lhs: Sign::Positive, rhs: Sign::Negative },
                "cannot join digits of positive and negative sign",
            ),
            (DigitError::EmptySequence, "cannot join an empty digit sequence"),
            (
                DigitError::IndexOutOfRange { index: -5, length: 4 },
                "digit index -5 out of range for 4 digits",
            ),
            (
                DigitError::InvalidDigitForBase { digit: BigInt::from(-9), base: 8 },
                "digit -9 is not valid in base 8",
            ),
            (DigitError::ZeroStep, "slice step cannot be zero"),
            (DigitError::Overflow, "value does not fit in the target size"),
        ];

        for (err, expected) in vals {
            assert_eq!(err.to_string(), expected);
        }
    }
}
