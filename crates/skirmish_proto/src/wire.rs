//! # Wire Primitives
//!
//! Varint/fixed64 reader and writer underpinning both schema generations.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Tag (varint): (field_number << 3) | wire_type                │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Value: varint | fixed64 (LE) | length-prefixed bytes         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only three wire types exist in this protocol: varint (unsigned
//! integers and enum elements), fixed64 (all doubles, little-endian IEEE
//! bits), and length-delimited (the packed repeated-enum sequence).
//! `skip_field` consumes a value of any of the three so unknown field
//! numbers never desynchronize the stream.

use crate::error::{CodecError, CodecResult};

/// Largest unsigned value exactly representable as a native JSON number
/// (2^53 - 1).
///
/// 64-bit fields decoded from the wire are capped here so the JSON
/// mirror never silently loses precision.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Longest possible varint encoding of a 64-bit value.
const MAX_VARINT_LEN: usize = 10;

/// The 3-bit wire type carried in the low bits of every tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    /// Unsigned variable-length integer.
    Varint = 0,
    /// 8 bytes, little-endian. Used for all doubles.
    Fixed64 = 1,
    /// Varint byte length followed by that many payload bytes.
    LengthDelimited = 2,
}

impl WireType {
    /// Maps the low 3 tag bits to a wire type.
    ///
    /// Returns `None` for the wire types this protocol never emits
    /// (start/end group, fixed32).
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            _ => None,
        }
    }
}

/// Packs a field number and wire type into a tag value.
#[inline]
#[must_use]
pub const fn tag(field_number: u32, wire_type: WireType) -> u64 {
    ((field_number as u64) << 3) | wire_type as u64
}

/// Number of bytes the varint encoding of `value` occupies.
#[inline]
#[must_use]
pub const fn varint_len(value: u64) -> usize {
    // 1 byte per 7 significant bits, minimum one byte.
    match value {
        0 => 1,
        v => (64 - v.leading_zeros() as usize + 6) / 7,
    }
}

/// Wire writer - appends primitives to a growable buffer.
///
/// One writer is allocated per encode call and turned into the output
/// buffer when the message is fully written; nothing is retained across
/// calls.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Returns the number of bytes written so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer, yielding the encoded bytes.
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Writes a field tag.
    #[inline]
    pub fn write_tag(&mut self, field_number: u32, wire_type: WireType) {
        self.write_varint(tag(field_number, wire_type));
    }

    /// Writes an unsigned varint.
    pub fn write_varint(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.buf.push((value as u8) | 0x80);
            value >>= 7;
        }
        self.buf.push(value as u8);
    }

    /// Writes a double as 8 little-endian IEEE-754 bytes.
    #[inline]
    pub fn write_fixed64_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a `uint32` field, skipping it entirely at its zero default.
    #[inline]
    pub fn write_uint32_field(&mut self, field_number: u32, value: u32) {
        if value != 0 {
            self.write_tag(field_number, WireType::Varint);
            self.write_varint(u64::from(value));
        }
    }

    /// Writes a `uint64` field, skipping it entirely at its zero default.
    #[inline]
    pub fn write_uint64_field(&mut self, field_number: u32, value: u64) {
        if value != 0 {
            self.write_tag(field_number, WireType::Varint);
            self.write_varint(value);
        }
    }

    /// Writes a `double` field, skipping it entirely at its zero default.
    #[inline]
    pub fn write_double_field(&mut self, field_number: u32, value: f64) {
        if value != 0.0 {
            self.write_tag(field_number, WireType::Fixed64);
            self.write_fixed64_f64(value);
        }
    }
}

/// Wire reader - a cursor over a caller-owned byte slice.
///
/// The reader borrows the buffer for the duration of the decode call
/// and never retains it. Every read either fully succeeds or returns a
/// [`CodecError`] without advancing past the failure point.
#[derive(Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Creates a reader over `buf`, positioned at its start.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor offset from the start of the buffer.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns true once the cursor has reached the buffer end.
    #[inline]
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Reads an unsigned varint.
    ///
    /// Fails with [`CodecError::Truncated`] if the buffer ends before a
    /// terminating byte, and [`CodecError::MalformedVarint`] if no
    /// terminator appears within 10 bytes.
    pub fn read_varint(&mut self) -> CodecResult<u64> {
        let start = self.pos;
        let mut value: u64 = 0;

        for i in 0..MAX_VARINT_LEN {
            let Some(&byte) = self.buf.get(self.pos) else {
                return Err(CodecError::Truncated { offset: start, needed: 1 });
            };
            self.pos += 1;
            value |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(CodecError::MalformedVarint { offset: start })
    }

    /// Reads a double from 8 little-endian IEEE-754 bytes.
    pub fn read_fixed64_f64(&mut self) -> CodecResult<f64> {
        let Some(bytes) = self.buf.get(self.pos..self.pos + 8) else {
            return Err(CodecError::Truncated {
                offset: self.pos,
                needed: 8 - self.remaining(),
            });
        };
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        self.pos += 8;
        Ok(f64::from_le_bytes(raw))
    }

    /// Reads a tag, returning the field number and wire type.
    pub fn read_tag(&mut self) -> CodecResult<(u32, WireType)> {
        let offset = self.pos;
        let raw = self.read_varint()?;
        let field_number = (raw >> 3) as u32;
        let bits = (raw & 0x7) as u8;
        WireType::from_bits(bits)
            .map(|wire_type| (field_number, wire_type))
            .ok_or(CodecError::UnsupportedWireType { wire_type: bits, field_number, offset })
    }

    /// Consumes one value of the given wire type without interpreting it.
    ///
    /// This is the forward-compatibility path: a decoder that meets a
    /// field number outside its schema generation advances past the
    /// value and keeps going.
    pub fn skip_field(&mut self, wire_type: WireType) -> CodecResult<()> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => {
                if self.remaining() < 8 {
                    return Err(CodecError::Truncated {
                        offset: self.pos,
                        needed: 8 - self.remaining(),
                    });
                }
                self.pos += 8;
            }
            WireType::LengthDelimited => {
                let len = self.read_varint()? as usize;
                if self.remaining() < len {
                    return Err(CodecError::Truncated {
                        offset: self.pos,
                        needed: len - self.remaining(),
                    });
                }
                self.pos += len;
            }
        }
        Ok(())
    }

    /// Reads a varint destined for a `uint32` field.
    ///
    /// A wire value above `u32::MAX` is an overflow, never a silent
    /// truncation.
    pub fn read_uint32(&mut self, field: &'static str) -> CodecResult<u32> {
        let value = self.read_varint()?;
        u32::try_from(value)
            .map_err(|_| CodecError::Overflow { field, value, max: u64::from(u32::MAX) })
    }

    /// Reads a varint destined for a `uint64` field.
    ///
    /// Values above [`MAX_SAFE_INTEGER`] are rejected so the JSON mirror
    /// can carry the field as a native number without precision loss.
    pub fn read_uint64(&mut self, field: &'static str) -> CodecResult<u64> {
        let value = self.read_varint()?;
        if value > MAX_SAFE_INTEGER {
            return Err(CodecError::Overflow { field, value, max: MAX_SAFE_INTEGER });
        }
        Ok(value)
    }
}
