//! # Action Enumeration
//!
//! The per-move action list shared by every message shape, plus the
//! packed/unpacked repeated-field helpers the four codecs dispatch into.
//!
//! On the wire each element is a protobuf `int32` varint. Wire values
//! outside the known set decode to [`Action::Unrecognized`] instead of
//! leaking raw integers past the decode boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::wire::{varint_len, WireReader, WireType, WireWriter};

/// A single input action reported in a move message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum Action {
    /// No action / unset.
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown = 0,
    /// Primary fire.
    #[serde(rename = "SHOOT")]
    Shoot = 1,
    /// Sentinel for wire values outside the known set.
    ///
    /// Carried through decode, JSON output, and re-encode (as int32 -1)
    /// rather than being collapsed to [`Action::Unknown`].
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized = -1,
}

impl Action {
    /// Maps a wire integer to an action. Anything outside the known set
    /// becomes [`Action::Unrecognized`].
    #[inline]
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Shoot,
            _ => Self::Unrecognized,
        }
    }

    /// The wire integer for this action.
    #[inline]
    #[must_use]
    pub const fn to_i32(self) -> i32 {
        self as i32
    }

    /// The symbolic name used by the JSON mirror.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Shoot => "SHOOT",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Parses one element of a JSON `actions` array.
    ///
    /// Accepts the raw integer or the case-sensitive symbolic name;
    /// everything else maps to [`Action::Unrecognized`]. This mirrors the
    /// wire fallback and therefore never fails.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(0) => Self::Unknown,
                Some(1) => Self::Shoot,
                _ => Self::Unrecognized,
            },
            Value::String(s) => match s.as_str() {
                "UNKNOWN" => Self::Unknown,
                "SHOOT" => Self::Shoot,
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    /// The int32 varint wire representation (sign-extended to 64 bits,
    /// so `Unrecognized` occupies the full 10 bytes).
    #[inline]
    pub(crate) const fn to_wire(self) -> u64 {
        self.to_i32() as i64 as u64
    }

    /// Decodes one varint element: low 32 bits interpreted as signed.
    #[inline]
    pub(crate) const fn from_wire(raw: u64) -> Self {
        Self::from_i32(raw as i32)
    }
}

/// Writes `actions` as one packed length-delimited field.
///
/// An empty sequence is omitted entirely; decoders treat omission as
/// empty, so nothing is lost.
pub(crate) fn write_actions(writer: &mut WireWriter, field_number: u32, actions: &[Action]) {
    if actions.is_empty() {
        return;
    }
    let payload_len: usize = actions.iter().map(|a| varint_len(a.to_wire())).sum();
    writer.write_tag(field_number, WireType::LengthDelimited);
    writer.write_varint(payload_len as u64);
    for action in actions {
        writer.write_varint(action.to_wire());
    }
}

/// Reads the `actions` field in either of its two legal encodings.
///
/// Packed (length-delimited) is what our encoder emits; a bare varint
/// per element is accepted for older and third-party encoders. Elements
/// are appended to `out` in wire order, duplicates preserved.
pub(crate) fn read_actions(
    reader: &mut WireReader<'_>,
    wire_type: WireType,
    out: &mut Vec<Action>,
) -> CodecResult<()> {
    match wire_type {
        WireType::LengthDelimited => {
            let len = reader.read_varint()? as usize;
            if len > reader.remaining() {
                return Err(CodecError::Truncated {
                    offset: reader.pos(),
                    needed: len - reader.remaining(),
                });
            }
            let end = reader.pos() + len;
            while reader.pos() < end {
                let raw = reader.read_varint()?;
                out.push(Action::from_wire(raw));
            }
            Ok(())
        }
        WireType::Varint => {
            let raw = reader.read_varint()?;
            out.push(Action::from_wire(raw));
            Ok(())
        }
        // An action element can never be fixed64; consume and ignore it.
        WireType::Fixed64 => reader.skip_field(WireType::Fixed64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_integer_mapping() {
        assert_eq!(Action::from_i32(0), Action::Unknown);
        assert_eq!(Action::from_i32(1), Action::Shoot);
        assert_eq!(Action::from_i32(-1), Action::Unrecognized);
        assert_eq!(Action::from_i32(7), Action::Unrecognized);
        assert_eq!(Action::Unknown.to_i32(), 0);
        assert_eq!(Action::Shoot.to_i32(), 1);
        assert_eq!(Action::Unrecognized.to_i32(), -1);
    }

    #[test]
    fn test_name_preserves_unrecognized() {
        assert_eq!(Action::Unknown.name(), "UNKNOWN");
        assert_eq!(Action::Shoot.name(), "SHOOT");
        assert_eq!(Action::Unrecognized.name(), "UNRECOGNIZED");
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(Action::from_json_value(&Value::from(0)), Action::Unknown);
        assert_eq!(Action::from_json_value(&Value::from(1)), Action::Shoot);
        assert_eq!(Action::from_json_value(&Value::from(-1)), Action::Unrecognized);
        assert_eq!(Action::from_json_value(&Value::from("UNKNOWN")), Action::Unknown);
        assert_eq!(Action::from_json_value(&Value::from("SHOOT")), Action::Shoot);
        assert_eq!(Action::from_json_value(&Value::from("UNRECOGNIZED")), Action::Unrecognized);
        // Case sensitive; anything else falls through.
        assert_eq!(Action::from_json_value(&Value::from("shoot")), Action::Unrecognized);
        assert_eq!(Action::from_json_value(&Value::Null), Action::Unrecognized);
    }

    #[test]
    fn test_packed_roundtrip() {
        let actions = [Action::Shoot, Action::Shoot, Action::Unknown];
        let mut writer = WireWriter::new();
        write_actions(&mut writer, 9, &actions);
        let bytes = writer.into_bytes();
        // tag + length + three one-byte elements
        assert_eq!(bytes, [0x4a, 3, 1, 1, 0]);

        let mut reader = WireReader::new(&bytes);
        let (field, wire_type) = reader.read_tag().unwrap();
        assert_eq!(field, 9);
        let mut out = Vec::new();
        read_actions(&mut reader, wire_type, &mut out).unwrap();
        assert_eq!(out, actions);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_empty_sequence_is_omitted() {
        let mut writer = WireWriter::new();
        write_actions(&mut writer, 9, &[]);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_unrecognized_wire_roundtrip() {
        let mut writer = WireWriter::new();
        write_actions(&mut writer, 9, &[Action::Unrecognized]);
        let bytes = writer.into_bytes();
        // Sign-extended int32 -1 takes the full 10 varint bytes.
        assert_eq!(bytes.len(), 2 + 10);

        let mut reader = WireReader::new(&bytes);
        let (_, wire_type) = reader.read_tag().unwrap();
        let mut out = Vec::new();
        read_actions(&mut reader, wire_type, &mut out).unwrap();
        assert_eq!(out, [Action::Unrecognized]);
    }

    #[test]
    fn test_unpacked_element() {
        // Bare varint element, the unpacked legacy encoding.
        let mut reader = WireReader::new(&[1]);
        let mut out = Vec::new();
        read_actions(&mut reader, WireType::Varint, &mut out).unwrap();
        assert_eq!(out, [Action::Shoot]);
    }

    #[test]
    fn test_packed_truncated_payload() {
        // Declared payload of 3, only one byte follows.
        let mut reader = WireReader::new(&[3, 1]);
        let mut out = Vec::new();
        let err = read_actions(&mut reader, WireType::LengthDelimited, &mut out).unwrap_err();
        assert_eq!(err, CodecError::Truncated { offset: 1, needed: 2 });
    }
}
