//! Constants for seqpipe

use std::ops::RangeInclusive;

/// Number of values drawn for the initial sequence
pub const GENERATED_COUNT: usize = 10;

/// Number of integers read from the input source
pub const INPUT_COUNT: usize = 10;

/// Value range for the initial sequence
pub const FIRST_RANGE: RangeInclusive<i64> = 1..=10;

/// Value range for the second generated sequence
pub const SECOND_RANGE: RangeInclusive<i64> = 1..=50;

/// How many of the largest elements the selection stage reports
pub const TOP_K: usize = 3;

/// Key whose contiguous run is measured in the merged sequence
pub const EQUAL_RANGE_KEY: i64 = 1;
