//! Generation-2 client-to-server movement report.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::action::{self, Action};
use crate::error::{CodecError, CodecResult};
use crate::json;
use crate::wire::{WireReader, WireWriter};

const F_TICK: u32 = 1;
const F_ID: u32 = 2;
const F_SESSION_ID: u32 = 3;
const F_X: u32 = 4;
const F_Y: u32 = 5;
const F_Z: u32 = 6;
const F_PITCH: u32 = 7;
const F_YAW: u32 = 8;
const F_ACTIONS: u32 = 9;

/// One client input sample, keyed by the server's simulation tick and a
/// single 64-bit session identifier.
///
/// `tick` and `session_id` must stay at or below
/// [`crate::MAX_SAFE_INTEGER`]; the decoder rejects larger wire values
/// with an overflow error, and encoding a larger value produces bytes
/// this codec's own decoder refuses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientMove {
    /// Server simulation tick this input targets.
    pub tick: u64,
    /// Per-message sequence number.
    pub id: u32,
    /// Session identifier.
    pub session_id: u64,
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
    /// Server simulation tick this input targets.
    pub tick: Option<u64>,
    /// Per-message sequence number.
    pub id: Option<u32>,
    /// Session identifier.
    pub session_id: Option<u64>,
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
        writer.write_uint64_field(F_TICK, self.tick);
        writer.write_uint32_field(F_ID, self.id);
        writer.write_uint64_field(F_SESSION_ID, self.session_id);
        writer.write_double_field(F_X, self.x);
        writer.write_double_field(F_Y, self.y);
        writer.write_double_field(F_Z, self.z);
        writer.write_double_field(F_PITCH, self.pitch);
        writer.write_double_field(F_YAW, self.yaw);
        action::write_actions(writer, F_ACTIONS, &self.actions);
    }

    /// Decodes a record from wire bytes.
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        let mut reader = WireReader::new(buf);
        let mut message = Self::default();
        while !reader.is_at_end() {
            let (field_number, wire_type) = reader.read_tag()?;
            match field_number {
                F_TICK => message.tick = reader.read_uint64("tick")?,
                F_ID => message.id = reader.read_uint32("id")?,
                F_SESSION_ID => message.session_id = reader.read_uint64("sessionId")?,
                F_X => message.x = reader.read_fixed64_f64()?,
                F_Y => message.y = reader.read_fixed64_f64()?,
                F_Z => message.z = reader.read_fixed64_f64()?,
                F_PITCH => message.pitch = reader.read_fixed64_f64()?,
                F_YAW => message.yaw = reader.read_fixed64_f64()?,
                F_ACTIONS => {
                    action::read_actions(&mut reader, wire_type, &mut message.actions)?;
                }
                _ => {
                    tracing::trace!(field_number, ?wire_type, "v2 ClientMove: skipping unknown field");
                    reader.skip_field(wire_type)?;
                }
            }
        }
        Ok(message)
    }

    /// Renders the record as its JSON mirror.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "tick": self.tick,
            "id": self.id,
            "sessionId": self.session_id,
            "x": self.x,
            "y": self.y,
            "z": self.z,
            "pitch": self.pitch,
            "yaw": self.yaw,
            "actions": self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
        })
    }

    /// Parses the JSON mirror back into a record.
    pub fn from_json(value: &Value) -> CodecResult<Self> {
        if !value.is_object() {
            return Err(CodecError::MalformedJsonType { field: "ClientMove", expected: "object" });
        }
        Ok(Self {
            tick: json::uint64_field(value, "tick")?,
            id: json::uint32_field(value, "id")?,
            session_id: json::uint64_field(value, "sessionId")?,
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
            tick: partial.tick.unwrap_or_default(),
            id: partial.id.unwrap_or_default(),
            session_id: partial.session_id.unwrap_or_default(),
            x: partial.x.unwrap_or_default(),
            y: partial.y.unwrap_or_default(),
            z: partial.z.unwrap_or_default(),
            pitch: partial.pitch.unwrap_or_default(),
            yaw: partial.yaw.unwrap_or_default(),
            actions: partial.actions.unwrap_or_default(),
        }
    }
}
