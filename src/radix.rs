//! Radix definitions
//!
//! A [`Radix`] is a base that has been checked to be at least 2.
//! Every operation taking a `base: u32` validates it into a `Radix`
//! before doing any arithmetic.
//!

use crate::*;
use num_traits::Pow;


/// A validated base for digit decomposition
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    /// Radix = *2*
    pub const BINARY: Radix = Radix(2);

    /// Radix = *8*
    pub const OCTAL: Radix = Radix(8);

    /// Radix = *10*
    pub const DECIMAL: Radix = Radix(10);

    /// Radix = *16*
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Validate `base`, which must be at least 2
    pub fn new(base: u32) -> Result<Radix, DigitError> {
        if base < 2 {
            return Err(DigitError::InvalidBase(base));
        }
        Ok(Radix(base))
    }

    /// The base as an integer
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Return base^pow
    pub(crate) fn pow(self, pow: u64) -> BigUint {
        if pow == 0 {
            return BigUint::one();
        }
        Pow::pow(BigUint::from(self.0), pow)
    }

    /// Bits needed to hold one digit, `ceil(log2(base))`
    #[inline]
    pub(crate) fn digit_bits(self) -> u32 {
        32 - (self.0 - 1).leading_zeros()
    }

    /// Return true if `digit` is a valid digit in this radix
    pub(crate) fn admits(self, digit: &BigUint) -> bool {
        *digit < BigUint::from(self.0)
    }

    /// Return number of digits of `uint` in this radix
    ///
    /// Zero has one digit.
    ///
    pub(crate) fn count_digits(self, uint: &BigUint) -> u64 {
        if uint.is_zero() {
            return 1;
        }
        // guess number of digits based on number of bits in UInt,
        // stepping back one to absorb rounding in the float estimate
        let estimate = (uint.bits() as f64 / log2(self.0 as f64)) as u64;
        let mut digits = estimate.saturating_sub(1);

        let mut num = self.pow(digits);
        while *uint >= num {
            num *= self.0;
            digits += 1;
        }
        digits
    }

    /// Split `uint` into digits, most significant first
    pub(crate) fn split(self, uint: &BigUint) -> Vec<BigUint> {
        if uint.is_zero() {
            return vec![BigUint::zero()];
        }

        let base = BigUint::from(self.0);
        let mut digits = Vec::with_capacity(self.count_digits(uint) as usize);
        let mut rest = uint.clone();
        while !rest.is_zero() {
            let (quotient, digit) = rest.div_rem(&base);
            digits.push(digit);
            rest = quotient;
        }
        digits.reverse();
        digits
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix(DEFAULT_BASE)
    }
}

impl TryFrom<u32> for Radix {
    type Error = DigitError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod validate {
        use super::*;

        macro_rules! impl_case {
            (valid $name:ident : $base:literal) => {
                #[test]
                fn $name() {
                    assert_eq!(Radix::new($base).unwrap().get(), $base);
                }
            };
            (invalid $name:ident : $base:literal) => {
                #[test]
                #[should_panic(expected = "InvalidBase")]
                fn $name() {
                    Radix::new($base).unwrap();
                }
            };
        }

        impl_case!(invalid case_0: 0);
        impl_case!(invalid case_1: 1);
        impl_case!(valid case_2: 2);
        impl_case!(valid case_10: 10);
        impl_case!(valid case_16: 16);
        impl_case!(valid case_36: 36);
        impl_case!(valid case_u32_max: 4294967295);
    }

    #[test]
    fn default_is_build_configured_base() {
        assert_eq!(Radix::default().get(), DEFAULT_BASE);
    }

    mod count_digits {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $n:literal base $base:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let radix = Radix::new($base).unwrap();
                    let n = BigUint::from($n as u128);
                    assert_eq!(radix.count_digits(&n), $expected);
                }
            };
        }

        impl_case!(case_0: 0 base 10 => 1);
        impl_case!(case_1: 1 base 10 => 1);
        impl_case!(case_9: 9 base 10 => 1);
        impl_case!(case_10: 10 base 10 => 2);
        impl_case!(case_99: 99 base 10 => 2);
        impl_case!(case_100: 100 base 10 => 3);
        impl_case!(case_999: 999 base 10 => 3);
        impl_case!(case_1000: 1000 base 10 => 4);
        impl_case!(case_1234: 1234 base 10 => 4);
        impl_case!(case_0xdead: 0xdead base 16 => 4);
        impl_case!(case_0xffff: 0xffff base 16 => 4);
        impl_case!(case_0x10000: 0x10000 base 16 => 5);
        impl_case!(case_0b1011: 0b1011 base 2 => 4);
        impl_case!(case_0o257: 0o257 base 8 => 3);
        impl_case!(case_u64_max: 18446744073709551615u64 base 10 => 20);
        impl_case!(case_10e19: 10000000000000000000u64 base 10 => 20);
        impl_case!(case_10e19_m1: 9999999999999999999u64 base 10 => 19);
        impl_case!(case_3p40: 12157665459056928801u64 base 3 => 41);
        impl_case!(case_3p40_m1: 12157665459056928800u64 base 3 => 40);
        impl_case!(case_u128_max: 340282366920938463463374607431768211455u128 base 2 => 128);
    }

    #[test]
    fn count_digits_at_every_power_boundary() {
        for base in 2u32..=16 {
            let radix = Radix::new(base).unwrap();
            for exp in 1u64..300 {
                let power = radix.pow(exp);
                assert_eq!(radix.count_digits(&power), exp + 1, "{}^{}", base, exp);
                assert_eq!(radix.count_digits(&(power - 1u8)), exp, "{}^{} - 1", base, exp);
            }
        }
    }

    #[test]
    fn split_is_most_significant_first() {
        let radix = Radix::HEXADECIMAL;
        let digits = radix.split(&BigUint::from(0xbeefu32));
        let expected: Vec<BigUint> = [0xbu8, 0xe, 0xe, 0xf].iter().map(|&d| BigUint::from(d)).collect();
        assert_eq!(digits, expected);
    }

    #[test]
    fn digit_bits() {
        assert_eq!(Radix::BINARY.digit_bits(), 1);
        assert_eq!(Radix::new(3).unwrap().digit_bits(), 2);
        assert_eq!(Radix::OCTAL.digit_bits(), 3);
        assert_eq!(Radix::DECIMAL.digit_bits(), 4);
        assert_eq!(Radix::HEXADECIMAL.digit_bits(), 4);
        assert_eq!(Radix::new(17).unwrap().digit_bits(), 5);
        assert_eq!(Radix::new(u32::MAX).unwrap().digit_bits(), 32);
    }

    #[test]
    fn split_zero() {
        assert_eq!(Radix::DECIMAL.split(&BigUint::zero()), vec![BigUint::zero()]);
    }

    #[test]
    fn admits() {
        assert!(Radix::BINARY.admits(&BigUint::from(1u8)));
        assert!(!Radix::BINARY.admits(&BigUint::from(2u8)));
        assert!(Radix::HEXADECIMAL.admits(&BigUint::from(15u8)));
    }
}
