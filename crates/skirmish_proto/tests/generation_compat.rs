//! Cross-generation and wire-shape tolerance tests.
//!
//! These exercise the contract that keeps old decoders alive while the
//! schema evolves: unknown fields are skipped across every wire type,
//! and the repeated `actions` field decodes identically whether packed
//! or unpacked.

use skirmish_proto::{v1, v2, Action, WireType, WireWriter};

#[test]
fn v2_server_bytes_survive_a_v1_decoder() {
    let new_format = v2::ServerMove {
        tick: 5000,
        id: 77,
        x: 3.0,
        y: -1.5,
        z: 12.25,
        pitch: 0.1,
        yaw: 90.0,
        actions: vec![Action::Shoot],
        rtt: 42,
    };

    // The v1 decoder knows nothing about `id` at field 2 (reserved in
    // its generation) and reads v2's tick varint at field 1 as its own
    // id. It must not crash or desynchronize.
    let old = v1::ServerMove::decode(&new_format.encode()).unwrap();
    assert_eq!(old.id, 5000);
    assert_eq!(old.x, 3.0);
    assert_eq!(old.yaw, 90.0);
    assert_eq!(old.actions, vec![Action::Shoot]);
    assert_eq!(old.rtt, 42);
}

#[test]
fn unknown_fields_of_every_wire_type_are_skipped() {
    let mut writer = WireWriter::new();
    writer.write_uint32_field(1, 7); // id
    writer.write_tag(100, WireType::Varint);
    writer.write_varint(300);
    writer.write_tag(101, WireType::Fixed64);
    writer.write_fixed64_f64(9.75);
    writer.write_tag(102, WireType::LengthDelimited);
    writer.write_varint(3);
    writer.write_varint(1);
    writer.write_varint(1);
    writer.write_varint(1);
    writer.write_double_field(8, 180.0); // yaw

    let decoded = v1::ClientMove::decode(&writer.into_bytes()).unwrap();
    assert_eq!(decoded.id, 7);
    assert_eq!(decoded.yaw, 180.0);
    assert!(decoded.actions.is_empty());
}

#[test]
fn packed_and_unpacked_actions_decode_identically() {
    // Packed: one length-delimited field holding both elements.
    let mut packed = WireWriter::new();
    packed.write_tag(9, WireType::LengthDelimited);
    packed.write_varint(2);
    packed.write_varint(1);
    packed.write_varint(1);

    // Unpacked: one varint-tagged field per element.
    let mut unpacked = WireWriter::new();
    unpacked.write_tag(9, WireType::Varint);
    unpacked.write_varint(1);
    unpacked.write_tag(9, WireType::Varint);
    unpacked.write_varint(1);

    let from_packed = v2::ClientMove::decode(&packed.into_bytes()).unwrap();
    let from_unpacked = v2::ClientMove::decode(&unpacked.into_bytes()).unwrap();
    assert_eq!(from_packed.actions, vec![Action::Shoot, Action::Shoot]);
    assert_eq!(from_packed, from_unpacked);
}

#[test]
fn generations_do_not_share_session_layout() {
    // The same logical session id travels differently per generation;
    // decoding one generation's bytes with its own decoder is lossless.
    let session: u64 = 0x0000_cafe_dead_beef;
    let old = v1::ClientMove {
        id: 1,
        session_id_lo: (session & 0xffff_ffff) as u32,
        session_id_hi: (session >> 32) as u32,
        ..v1::ClientMove::default()
    };
    let new = v2::ClientMove { id: 1, session_id: session, ..v2::ClientMove::default() };

    let old_rt = v1::ClientMove::decode(&old.encode()).unwrap();
    let new_rt = v2::ClientMove::decode(&new.encode()).unwrap();
    assert_eq!(u64::from(old_rt.session_id_hi) << 32 | u64::from(old_rt.session_id_lo), session);
    assert_eq!(new_rt.session_id, session);
}

#[test]
fn serde_derives_match_the_mirror_field_names() {
    // Callers embedding records in their own diagnostics payloads get
    // the same camelCase keys and symbolic action names the mirror uses.
    let record = v2::ClientMove {
        tick: 1,
        session_id: 2,
        actions: vec![Action::Shoot],
        ..v2::ClientMove::default()
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["sessionId"], 2);
    assert_eq!(value["actions"], serde_json::json!(["SHOOT"]));

    let back: v2::ClientMove = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn unrecognized_survives_decode_json_and_reencode() {
    // A wire value outside the known action set must stay visible all
    // the way through, not collapse to UNKNOWN.
    let mut writer = WireWriter::new();
    writer.write_tag(9, WireType::Varint);
    writer.write_varint(7);

    let decoded = v2::ClientMove::decode(&writer.into_bytes()).unwrap();
    assert_eq!(decoded.actions, vec![Action::Unrecognized]);

    let mirrored = decoded.to_json();
    assert_eq!(mirrored["actions"], serde_json::json!(["UNRECOGNIZED"]));

    let reparsed = v2::ClientMove::from_json(&mirrored).unwrap();
    assert_eq!(reparsed.actions, vec![Action::Unrecognized]);
    assert_eq!(v2::ClientMove::decode(&reparsed.encode()).unwrap(), reparsed);
}
