//! # Codec Error Types
//!
//! All errors that can surface from an encode, decode, or JSON-parse call.
//!
//! Every error is fatal to the single call that produced it. There is no
//! partial-success mode: a message either fully decodes or the call fails
//! as a whole, and the caller's input buffer is never retained.

use thiserror::Error;

/// Errors that can occur while decoding wire bytes or parsing the JSON
/// mirror.
///
/// Unknown wire fields are deliberately *not* an error; they are skipped
/// so that a decoder tolerates additive schema changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended mid-field or before the declared length.
    #[error("input truncated at offset {offset}: needed {needed} more byte(s)")]
    Truncated {
        /// Byte offset at which the read started.
        offset: usize,
        /// Number of bytes missing.
        needed: usize,
    },

    /// A varint ran past its maximum length of 10 bytes.
    #[error("malformed varint at offset {offset}: no terminator within 10 bytes")]
    MalformedVarint {
        /// Byte offset at which the varint started.
        offset: usize,
    },

    /// A tag carried a wire type this protocol does not use.
    #[error("unsupported wire type {wire_type} for field {field_number} at offset {offset}")]
    UnsupportedWireType {
        /// The raw 3-bit wire type value.
        wire_type: u8,
        /// The field number the tag named.
        field_number: u32,
        /// Byte offset of the tag.
        offset: usize,
    },

    /// A wire value does not fit the field's host type exactly.
    ///
    /// 64-bit unsigned fields are additionally capped at 2^53 - 1 so the
    /// JSON mirror can represent them as native numbers without loss.
    #[error("value {value} overflows field `{field}` (max {max})")]
    Overflow {
        /// Name of the field that overflowed.
        field: &'static str,
        /// The decoded wire value.
        value: u64,
        /// Largest accepted value for the field.
        max: u64,
    },

    /// A JSON scalar field held a value that does not coerce to a number.
    #[error("JSON field `{field}` does not coerce to a number: {value}")]
    MalformedJsonNumber {
        /// Name of the field being parsed.
        field: &'static str,
        /// Display rendering of the offending value.
        value: String,
    },

    /// A JSON field held a value of an entirely wrong type.
    #[error("JSON field `{field}` has the wrong type: expected {expected}")]
    MalformedJsonType {
        /// Name of the field being parsed.
        field: &'static str,
        /// What the schema expected there.
        expected: &'static str,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
