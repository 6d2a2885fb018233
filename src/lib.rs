// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer Digits
//!
//! Treat the base-N digit sequence of an integer as a first-class
//! structure: split an integer into digits, join digits back into an
//! integer, index and slice digits by position, relabel digits between
//! bases and shift digit sequences.
//!
//! All values are arbitrary precision [`BigInt`]s, and every operation
//! is a pure function of its arguments.
//!
//! The sign of an integer travels with its digits: separating a
//! negative integer gives negative digits, and its length is a
//! negative digit count. Joining the digits back always reproduces the
//! original value.
//!
//! # Example
//!
//! ```
//! use integer_digits::{separate, join_all, length};
//! use num_bigint::BigInt;
//!
//! let n = BigInt::from(-1234);
//! let digits = separate(&n, 10).unwrap();
//! assert_eq!(digits, vec![BigInt::from(-1), BigInt::from(-2), BigInt::from(-3), BigInt::from(-4)]);
//! assert_eq!(length(&n, 10).unwrap(), -4);
//! assert_eq!(join_all(&digits, 10).unwrap(), n);
//! ```
//!
//! For positional access use [`IndexableInteger`]:
//!
//! ```
//! use integer_digits::{IndexableInteger, DigitSlice};
//! use num_bigint::BigInt;
//!
//! let i = IndexableInteger::with_base(1234, 10).unwrap();
//! assert_eq!(i.digit(0).unwrap(), BigInt::from(1));
//! assert_eq!(i.slice(DigitSlice::reversed()).unwrap(), BigInt::from(4321));
//! assert_eq!(i.len(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::convert::TryFrom;
use self::stdlib::fmt;
use self::stdlib::vec::Vec;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{One, Signed, ToPrimitive, Zero};


// pub const DEFAULT_BASE: u32 = ${RUST_INTEGER_DIGITS_DEFAULT_BASE} or 10;
include!(concat!(env!("OUT_DIR"), "/default_base.rs"));

/// Largest magnitude, in bits, that [`shift`] will build
///
/// Asking for more digits than this fails with [`DigitError::Overflow`]
/// instead of attempting the allocation.
pub const MAX_BITS: u64 = 1 << 32;

#[cfg(test)]
extern crate paste;

// Sign enum & sign-setting functions
mod sign;
pub use sign::{sign, positive, negative, toggle, Sign};

mod radix;
pub use radix::Radix;

// length, separate, join, convert, shift ...
mod algebra;
pub use algebra::{
    length,
    significant_length,
    separate,
    separate_weighted,
    get,
    join,
    join_all,
    weight,
    convert,
    shift,
};

mod slice;
pub use slice::DigitSlice;

mod indexable;
pub use indexable::{IndexableInteger, Digits};

// From<T>, TryFrom<T> impls
mod impl_convert;

// PartialEq
mod impl_cmp;

// Debug, Display
mod impl_fmt;

#[cfg(feature = "serde")]
mod impl_serde;


/// Errors raised by digit operations
///
/// Every fallible operation in this crate returns one of these; no
/// operation leaves a partial result behind.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    /// Base is less than 2
    InvalidBase(u32),
    /// Attempt to join digit groups with strictly opposite signs
    IncompatibleSign {
        lhs: Sign,
        rhs: Sign,
    },
    /// No digits to join
    EmptySequence,
    /// Digit index outside of the integer's digits
    IndexOutOfRange {
        index: i64,
        length: u64,
    },
    /// Digit is not representable in the target base
    InvalidDigitForBase {
        digit: BigInt,
        base: u32,
    },
    /// Slice step of zero
    ZeroStep,
    /// Result does not fit in the requested fixed-width type, or would
    /// exceed [`MAX_BITS`]
    Overflow,
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DigitError::*;

        match *self {
            InvalidBase(base) => write!(f, "invalid base {} (must be at least 2)", base),
            IncompatibleSign { lhs, rhs } => {
                write!(f, "cannot join digits of {} and {} sign", lhs, rhs)
            }
            EmptySequence => f.write_str("cannot join an empty digit sequence"),
            IndexOutOfRange { index, length } => {
                write!(f, "digit index {} out of range for {} digits", index, length)
            }
            InvalidDigitForBase { ref digit, base } => {
                write!(f, "digit {} is not valid in base {}", digit, base)
            }
            ZeroStep => f.write_str("slice step cannot be zero"),
            Overflow => f.write_str("value does not fit in the target size"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {
    fn description(&self) -> &str {
        "digit operation failed"
    }
}


#[cfg(test)]
mod integer_digits_tests {
    use super::*;

    include!("test_macros.rs");
    include!("lib.tests.rs");
}


#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
