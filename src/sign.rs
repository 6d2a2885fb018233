//! Sign of an integer and the rules for combining signs

use crate::*;
use stdlib::ops::{Mul, Neg};


/// Sign of an integer
///
/// Ordered so that `Negative < Zero < Positive`, the same order as
/// the values -1, 0, 1 returned by [`Sign::to_i8`].
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    /// Less than zero
    Negative,

    /// Exactly zero
    Zero,

    /// Greater than zero
    Positive,
}


/// Return the sign of `n`
///
/// ```
/// use integer_digits::{sign, Sign};
/// use num_bigint::BigInt;
///
/// assert_eq!(sign(&BigInt::from(-1234)), Sign::Negative);
/// assert_eq!(sign(&BigInt::from(0)), Sign::Zero);
/// assert_eq!(sign(&BigInt::from(1234)), Sign::Positive);
/// ```
#[inline]
pub fn sign(n: &BigInt) -> Sign {
    Sign::from(n.sign())
}

/// Return `|n|`
pub fn positive(n: &BigInt) -> BigInt {
    n.abs()
}

/// Return `-|n|`
pub fn negative(n: &BigInt) -> BigInt {
    -n.abs()
}

/// Return `-n`
pub fn toggle(n: &BigInt) -> BigInt {
    -n
}


impl Sign {
    /// Sign as one of -1, 0, 1
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    /// Sign of the concatenation of two digit groups
    ///
    /// Zero defers to the other operand. Strictly opposite signs
    /// cannot be concatenated.
    ///
    /// * `(Zero, s)` → `s`
    /// * `(s, Zero)` → `s`
    /// * `(s, s)` → `s`
    /// * `(Negative, Positive)`, `(Positive, Negative)` → `IncompatibleSign`
    ///
    pub fn concat(self, rhs: Sign) -> Result<Sign, DigitError> {
        use self::Sign::*;

        match (self, rhs) {
            (Negative, Positive) | (Positive, Negative) => {
                Err(DigitError::IncompatibleSign { lhs: self, rhs: rhs })
            }
            (Zero, other) => Ok(other),
            (this, _) => Ok(this),
        }
    }

    /// Build a signed integer from a magnitude
    ///
    /// Applying `Zero` always gives 0.
    pub fn apply(self, magnitude: BigUint) -> BigInt {
        BigInt::from_biguint(self.into(), magnitude)
    }
}

impl Default for Sign {
    fn default() -> Self {
        Sign::Zero
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        use self::Sign::*;

        match (self, rhs) {
            (Zero, _) | (_, Zero) => Zero,
            (lhs, rhs) if lhs == rhs => Positive,
            _ => Negative,
        }
    }
}

impl From<num_bigint::Sign> for Sign {
    fn from(sign: num_bigint::Sign) -> Self {
        match sign {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        }
    }
}

impl From<Sign> for num_bigint::Sign {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::Zero => num_bigint::Sign::NoSign,
            Sign::Positive => num_bigint::Sign::Plus,
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        sign.to_i8()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    mod sign_of {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $n:literal => $expected:ident) => {
                #[test]
                fn $name() {
                    let n = BigInt::from($n);
                    assert_eq!(sign(&n), Sign::$expected);
                }
            };
        }

        impl_case!(case_1234: 1234 => Positive);
        impl_case!(case_n1234: -1234 => Negative);
        impl_case!(case_0: 0 => Zero);
        impl_case!(case_1: 1 => Positive);
        impl_case!(case_n1: -1 => Negative);
        impl_case!(case_i64_min: -9223372036854775808i64 => Negative);
    }

    #[test]
    fn to_i8_matches_order() {
        let mut signs = [Sign::Positive, Sign::Negative, Sign::Zero];
        signs.sort();
        assert_eq!(signs, [Sign::Negative, Sign::Zero, Sign::Positive]);
        assert_eq!(signs.iter().map(|s| s.to_i8()).collect::<Vec<_>>(), vec![-1, 0, 1]);
    }

    #[test]
    fn negation() {
        assert_eq!(-Sign::Negative, Sign::Positive);
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(-Sign::Zero, Sign::Zero);
    }

    mod product {
        use super::*;

        macro_rules! impl_case {
            ($lhs:ident * $rhs:ident => $expected:ident) => {
                paste! {
                    #[test]
                    fn [< case_ $lhs:lower _ $rhs:lower >]() {
                        assert_eq!(Sign::$lhs * Sign::$rhs, Sign::$expected);
                        assert_eq!(
                            Sign::$lhs.to_i8() * Sign::$rhs.to_i8(),
                            Sign::$expected.to_i8()
                        );
                    }
                }
            };
        }

        impl_case!(Negative * Negative => Positive);
        impl_case!(Negative * Zero => Zero);
        impl_case!(Negative * Positive => Negative);
        impl_case!(Zero * Negative => Zero);
        impl_case!(Zero * Zero => Zero);
        impl_case!(Zero * Positive => Zero);
        impl_case!(Positive * Negative => Negative);
        impl_case!(Positive * Zero => Zero);
        impl_case!(Positive * Positive => Positive);
    }

    mod concat {
        use super::*;

        macro_rules! impl_case {
            ($lhs:ident ~ $rhs:ident => $expected:ident) => {
                paste! {
                    #[test]
                    fn [< case_ $lhs:lower _ $rhs:lower >]() {
                        assert_eq!(Sign::$lhs.concat(Sign::$rhs).unwrap(), Sign::$expected);
                    }
                }
            };
            ($lhs:ident ~ $rhs:ident => !) => {
                paste! {
                    #[test]
                    #[should_panic(expected = "IncompatibleSign")]
                    fn [< case_ $lhs:lower _ $rhs:lower >]() {
                        Sign::$lhs.concat(Sign::$rhs).unwrap();
                    }
                }
            };
        }

        impl_case!(Negative ~ Negative => Negative);
        impl_case!(Negative ~ Zero => Negative);
        impl_case!(Negative ~ Positive => !);
        impl_case!(Zero ~ Negative => Negative);
        impl_case!(Zero ~ Zero => Zero);
        impl_case!(Zero ~ Positive => Positive);
        impl_case!(Positive ~ Negative => !);
        impl_case!(Positive ~ Zero => Positive);
        impl_case!(Positive ~ Positive => Positive);
    }

    #[test]
    fn apply_zero_sign_discards_magnitude() {
        assert_eq!(Sign::Zero.apply(BigUint::from(55u8)), BigInt::zero());
        assert_eq!(Sign::Negative.apply(BigUint::from(55u8)), BigInt::from(-55));
        assert_eq!(Sign::Positive.apply(BigUint::from(55u8)), BigInt::from(55));
    }

    #[test]
    fn bigint_sign_conversion() {
        for &s in [Sign::Negative, Sign::Zero, Sign::Positive].iter() {
            let other: num_bigint::Sign = s.into();
            assert_eq!(Sign::from(other), s);
        }
    }

    mod sign_setters {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $n:literal => $pos:literal, $neg:literal, $toggled:literal) => {
                #[test]
                fn $name() {
                    let n = BigInt::from($n);
                    assert_eq!(positive(&n), BigInt::from($pos));
                    assert_eq!(negative(&n), BigInt::from($neg));
                    assert_eq!(toggle(&n), BigInt::from($toggled));
                }
            };
        }

        impl_case!(case_1234: 1234 => 1234, -1234, -1234);
        impl_case!(case_n1234: -1234 => 1234, -1234, 1234);
        impl_case!(case_0: 0 => 0, 0, 0);
    }

    #[test]
    fn hash_follows_eq() {
        use stdlib::hash::{Hash, Hasher};
        use stdlib::DefaultHasher;

        let hash = |s: Sign| {
            let mut hasher = DefaultHasher::new();
            s.hash(&mut hasher);
            hasher.finish()
        };

        assert_eq!(hash(-Sign::Positive), hash(Sign::Negative));
        assert_ne!(hash(Sign::Positive), hash(Sign::Negative));
    }
}
