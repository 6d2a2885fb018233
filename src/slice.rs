//! Selecting digits by start, stop and step

use crate::*;
use stdlib::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};


/// Selection of digit positions
///
/// Positions follow the same rules as digit indices: 0 is the most
/// significant digit and negative positions count back from the end.
/// Missing bounds cover the whole sequence in the direction of `step`,
/// and bounds past either end are clamped.
///
/// ```
/// use integer_digits::{DigitSlice, IndexableInteger};
/// use num_bigint::BigInt;
///
/// let i = IndexableInteger::with_base(123456, 10).unwrap();
/// assert_eq!(i.slice(DigitSlice::new().stop(2)).unwrap(), BigInt::from(12));
/// assert_eq!(i.slice(DigitSlice::new().start(-2)).unwrap(), BigInt::from(56));
/// assert_eq!(i.slice(DigitSlice::new().step(2)).unwrap(), BigInt::from(135));
/// assert_eq!(i.slice(DigitSlice::reversed()).unwrap(), BigInt::from(654321));
/// assert_eq!(i.slice(1i64..3).unwrap(), BigInt::from(23));
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DigitSlice {
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
}

impl DigitSlice {
    /// Select every digit, most significant first
    pub fn new() -> Self {
        DigitSlice {
            start: None,
            stop: None,
            step: 1,
        }
    }

    /// Select every digit, least significant first
    pub fn reversed() -> Self {
        DigitSlice::new().step(-1)
    }

    /// First position included in the selection
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Position at which the selection ends (excluded)
    pub fn stop(mut self, stop: i64) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Distance between selected positions; negative walks backwards
    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Positions selected out of `length` digits, in selection order
    pub(crate) fn positions(&self, length: usize) -> Result<Vec<usize>, DigitError> {
        if self.step == 0 {
            return Err(DigitError::ZeroStep);
        }

        let length = length as i128;
        let step = i128::from(self.step);
        let backwards = step < 0;

        // lowest and highest value a bound may be clamped to
        let (lower, upper) = if backwards { (-1, length - 1) } else { (0, length) };

        let clamp = |bound: Option<i64>, default: i128| -> i128 {
            match bound {
                None => default,
                Some(bound) => {
                    let mut bound = i128::from(bound);
                    if bound < 0 {
                        bound += length;
                    }
                    bound.max(lower).min(upper)
                }
            }
        };

        let start = clamp(self.start, if backwards { upper } else { lower });
        let stop = clamp(self.stop, if backwards { lower } else { upper });

        let mut positions = Vec::new();
        let mut position = start;
        while (backwards && position > stop) || (!backwards && position < stop) {
            positions.push(position as usize);
            position += step;
        }
        Ok(positions)
    }
}

impl Default for DigitSlice {
    fn default() -> Self {
        DigitSlice::new()
    }
}

impl From<RangeFull> for DigitSlice {
    fn from(_: RangeFull) -> Self {
        DigitSlice::new()
    }
}

impl From<Range<i64>> for DigitSlice {
    fn from(range: Range<i64>) -> Self {
        DigitSlice::new().start(range.start).stop(range.end)
    }
}

impl From<RangeFrom<i64>> for DigitSlice {
    fn from(range: RangeFrom<i64>) -> Self {
        DigitSlice::new().start(range.start)
    }
}

impl From<RangeTo<i64>> for DigitSlice {
    fn from(range: RangeTo<i64>) -> Self {
        DigitSlice::new().stop(range.end)
    }
}

impl From<RangeInclusive<i64>> for DigitSlice {
    fn from(range: RangeInclusive<i64>) -> Self {
        let (start, end) = range.into_inner();
        DigitSlice {
            start: Some(start),
            stop: inclusive_stop(end),
            step: 1,
        }
    }
}

impl From<RangeToInclusive<i64>> for DigitSlice {
    fn from(range: RangeToInclusive<i64>) -> Self {
        DigitSlice {
            start: None,
            stop: inclusive_stop(range.end),
            step: 1,
        }
    }
}

/// Exclusive stop for an inclusive end; -1 (the last digit) runs to the end
fn inclusive_stop(end: i64) -> Option<i64> {
    match end {
        -1 => None,
        end => end.checked_add(1),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $slice:expr ; $length:literal => [ $($p:literal),* ]) => {
            #[test]
            fn $name() {
                let slice: DigitSlice = $slice.into();
                let expected: Vec<usize> = vec![ $($p),* ];
                assert_eq!(slice.positions($length).unwrap(), expected);
            }
        };
    }

    impl_case!(case_full: ..; 4 => [0, 1, 2, 3]);
    impl_case!(case_new: DigitSlice::new(); 4 => [0, 1, 2, 3]);
    impl_case!(case_reversed: DigitSlice::reversed(); 4 => [3, 2, 1, 0]);
    impl_case!(case_to_2: ..2i64; 4 => [0, 1]);
    impl_case!(case_from_2: 2i64..; 4 => [2, 3]);
    impl_case!(case_1_to_3: 1i64..3; 4 => [1, 2]);
    impl_case!(case_1_to_eq_3: 1i64..=3; 4 => [1, 2, 3]);
    impl_case!(case_to_eq_n1: ..=-1i64; 4 => [0, 1, 2, 3]);
    impl_case!(case_to_eq_n2: ..=-2i64; 4 => [0, 1, 2]);
    impl_case!(case_from_n2: -2i64..; 4 => [2, 3]);
    impl_case!(case_to_n1: ..-1i64; 4 => [0, 1, 2]);
    impl_case!(case_past_end: 2i64..100; 4 => [2, 3]);
    impl_case!(case_before_start: -100i64..2; 4 => [0, 1]);
    impl_case!(case_empty: 3i64..1; 4 => []);
    impl_case!(case_step_2: DigitSlice::new().step(2); 5 => [0, 2, 4]);
    impl_case!(case_step_n2: DigitSlice::new().step(-2); 5 => [4, 2, 0]);
    impl_case!(case_rev_from_2: DigitSlice::reversed().start(2); 4 => [2, 1, 0]);
    impl_case!(case_rev_to_1: DigitSlice::reversed().stop(1); 4 => [3, 2]);
    impl_case!(case_rev_n1_to_n3: DigitSlice::reversed().start(-1).stop(-3); 4 => [3, 2]);
    impl_case!(case_rev_past_end: DigitSlice::reversed().start(100); 3 => [2, 1, 0]);
    impl_case!(case_rev_before_start: DigitSlice::reversed().stop(-100); 3 => [2, 1, 0]);
    impl_case!(case_rev_wrong_direction: DigitSlice::reversed().start(0).stop(2); 4 => []);
    impl_case!(case_i64_extremes: DigitSlice::new().start(i64::MIN).stop(i64::MAX); 3 => [0, 1, 2]);
    impl_case!(case_huge_step: DigitSlice::new().step(i64::MAX); 3 => [0]);
    impl_case!(case_huge_negative_step: DigitSlice::new().step(i64::MIN); 3 => [2]);

    #[test]
    #[should_panic(expected = "ZeroStep")]
    fn case_zero_step() {
        DigitSlice::new().step(0).positions(4).unwrap();
    }

    #[test]
    fn inclusive_end_at_i64_max() {
        let slice = DigitSlice::from(0i64..=i64::MAX);
        assert_eq!(slice.positions(2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn default_selects_everything() {
        assert_eq!(DigitSlice::default(), DigitSlice::from(..));
    }
}
