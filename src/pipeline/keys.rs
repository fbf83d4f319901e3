//! Names of the sequences threaded through the pipeline.

/// Primary sequence: ten generated values plus ten read from input
pub const MY_SEQUENCE: &str = "mySequence";

/// Squares of the primary sequence
pub const MY_SQUARE_SEQUENCE: &str = "mySquareSequence";

/// Second generated sequence, same length as the primary one
pub const MY_SEQUENCE_2: &str = "mySequence_2";

/// Element-wise difference of the primary and second sequences
pub const MY_SEQUENCE_3: &str = "mySequence_3";

/// Difference sequence clamped to non-negative values
pub const MY_SEQUENCE_3_PLUS: &str = "mySequence_3_plus";

/// Reverse-order copy of the clamped difference sequence
pub const MY_SEQUENCE_3_PLUS_REVERSED: &str = "mySequence_3_plus_reversed";

/// Ascending merge of the re-sorted primary and second sequences
pub const MY_SEQUENCE_4: &str = "mySequence_4";
