//! Generation-1 client-to-server movement report.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::action::{self, Action};
use crate::error::{CodecError, CodecResult};
use crate::json;
use crate::wire::{WireReader, WireWriter};

const F_ID: u32 = 1;
const F_SESSION_ID_LO: u32 = 2;
const F_SESSION_ID_HI: u32 = 3;
const F_X: u32 = 4;
const F_Y: u32 = 5;
const F_Z: u32 = 6;
const F_PITCH: u32 = 7;
const F_YAW: u32 = 8;
const F_ACTIONS: u32 = 9;

/// One client input sample, keyed by a 64-bit session identifier split
/// into two 32-bit halves plus a per-message sequence `id`.
///
/// Fields at their zero defaults are omitted on the wire and
/// reconstructed on decode; an all-defaults record encodes to an empty
/// buffer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientMove {
    /// Per-message sequence number.
    pub id: u32,
    /// Low 32 bits of the session identifier.
    pub session_id_lo: u32,
    /// High 32 bits of the session identifier.
    pub session_id_hi: u32,
    /// Position X.
    pub x: f64,
    /// Position Y.
    pub y: f64,
    /// Position Z.
    pub z: f64,
    /// Look pitch.
    pub pitch: f64,
    /// Look yaw.
    pub yaw: f64,
    /// Actions taken this sample, in order, duplicates preserved.
    pub actions: Vec<Action>,
}

/// Sparse input for [`ClientMove::from_partial`].
#[derive(Clone, Debug, Default)]
pub struct ClientMovePartial {
    /// Per-message sequence number.
    pub id: Option<u32>,
    /// Low 32 bits of the session identifier.
    pub session_id_lo: Option<u32>,
    /// High 32 bits of the session identifier.
    pub session_id_hi: Option<u32>,
    /// Position X.
    pub x: Option<f64>,
    /// Position Y.
    pub y: Option<f64>,
    /// Position Z.
    pub z: Option<f64>,
    /// Look pitch.
    pub pitch: Option<f64>,
    /// Look yaw.
    pub yaw: Option<f64>,
    /// Actions taken this sample.
    pub actions: Option<Vec<Action>>,
}

impl ClientMove {
    /// Serializes the record to its wire bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        self.encode_to(&mut writer);
        writer.into_bytes()
    }

    /// Appends the record's wire bytes to an existing writer.
    pub fn encode_to(&self, writer: &mut WireWriter) {
        writer.write_uint32_field(F_ID, self.id);
        writer.write_uint32_field(F_SESSION_ID_LO, self.session_id_lo);
        writer.write_uint32_field(F_SESSION_ID_HI, self.session_id_hi);
        writer.write_double_field(F_X, self.x);
        writer.write_double_field(F_Y, self.y);
        writer.write_double_field(F_Z, self.z);
        writer.write_double_field(F_PITCH, self.pitch);
        writer.write_double_field(F_YAW, self.yaw);
        action::write_actions(writer, F_ACTIONS, &self.actions);
    }

    /// Decodes a record from wire bytes.
    ///
    /// Unknown field numbers are skipped; truncation or overflow fails
    /// the whole call without yielding a partial record.
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        let mut reader = WireReader::new(buf);
        let mut message = Self::default();
        while !reader.is_at_end() {
            let (field_number, wire_type) = reader.read_tag()?;
            match field_number {
                F_ID => message.id = reader.read_uint32("id")?,
                F_SESSION_ID_LO => {
                    message.session_id_lo = reader.read_uint32("sessionIdLo")?;
                }
                F_SESSION_ID_HI => {
                    message.session_id_hi = reader.read_uint32("sessionIdHi")?;
                }
                F_X => message.x = reader.read_fixed64_f64()?,
                F_Y => message.y = reader.read_fixed64_f64()?,
                F_Z => message.z = reader.read_fixed64_f64()?,
                F_PITCH => message.pitch = reader.read_fixed64_f64()?,
                F_YAW => message.yaw = reader.read_fixed64_f64()?,
                F_ACTIONS => {
                    action::read_actions(&mut reader, wire_type, &mut message.actions)?;
                }
                _ => {
                    tracing::trace!(field_number, ?wire_type, "v1 ClientMove: skipping unknown field");
                    reader.skip_field(wire_type)?;
                }
            }
        }
        Ok(message)
    }

    /// Renders the record as its JSON mirror.
    ///
    /// Every field is emitted unconditionally, enums by symbolic name.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "sessionIdLo": self.session_id_lo,
            "sessionIdHi": self.session_id_hi,
            "x": self.x,
            "y": self.y,
            "z": self.z,
            "pitch": self.pitch,
            "yaw": self.yaw,
            "actions": self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
        })
    }

    /// Parses the JSON mirror back into a record.
    ///
    /// Missing and `null` fields take zero defaults; scalar fields
    /// coerce from numbers or numeric strings and fail fast otherwise.
    pub fn from_json(value: &Value) -> CodecResult<Self> {
        if !value.is_object() {
            return Err(CodecError::MalformedJsonType { field: "ClientMove", expected: "object" });
        }
        Ok(Self {
            id: json::uint32_field(value, "id")?,
            session_id_lo: json::uint32_field(value, "sessionIdLo")?,
            session_id_hi: json::uint32_field(value, "sessionIdHi")?,
            x: json::double_field(value, "x")?,
            y: json::double_field(value, "y")?,
            z: json::double_field(value, "z")?,
            pitch: json::double_field(value, "pitch")?,
            yaw: json::double_field(value, "yaw")?,
            actions: json::actions_field(value, "actions")?,
        })
    }

    /// Builds a fully defaulted record from a sparse input.
    #[must_use]
    pub fn from_partial(partial: ClientMovePartial) -> Self {
        Self {
            id: partial.id.unwrap_or_default(),
            session_id_lo: partial.session_id_lo.unwrap_or_default(),
            session_id_hi: partial.session_id_hi.unwrap_or_default(),
            x: partial.x.unwrap_or_default(),
            y: partial.y.unwrap_or_default(),
            z: partial.z.unwrap_or_default(),
            pitch: partial.pitch.unwrap_or_default(),
            yaw: partial.yaw.unwrap_or_default(),
            actions: partial.actions.unwrap_or_default(),
        }
    }
}
