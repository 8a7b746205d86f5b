//! # Schema Generation 2
//!
//! Adds a server-visible simulation `tick` as field 1 and collapses the
//! split session identifier into a single 64-bit field. Wire-incompatible
//! with [`crate::v1`]: field numbers shifted, so neither generation's
//! decoder may be fed the other's bytes and silently agree.
//!
//! ## Wire Layout
//!
//! ```text
//! ClientMove v2                      ServerMove v2
//! ┌───┬─────────┬──────────────┐    ┌───┬─────────┬──────────────┐
//! │ 1 │ varint  │ tick         │    │ 1 │ varint  │ tick         │
//! │ 2 │ varint  │ id           │    │ 2 │ varint  │ id           │
//! │ 3 │ varint  │ sessionId    │    │ 3 │ fixed64 │ x            │
//! │ 4 │ fixed64 │ x            │    │ 4 │ fixed64 │ y            │
//! │ 5 │ fixed64 │ y            │    │ 5 │ fixed64 │ z            │
//! │ 6 │ fixed64 │ z            │    │ 6 │ fixed64 │ pitch        │
//! │ 7 │ fixed64 │ pitch        │    │ 7 │ fixed64 │ yaw          │
//! │ 8 │ fixed64 │ yaw          │    │ 8 │ packed  │ actions      │
//! │ 9 │ packed  │ actions      │    │ 9 │ varint  │ rtt          │
//! └───┴─────────┴──────────────┘    └───┴─────────┴──────────────┘
//! ```
//!
//! `tick` and `sessionId` are unsigned 64-bit on the wire but capped at
//! [`crate::MAX_SAFE_INTEGER`] on decode so the JSON mirror carries them
//! as native numbers without precision loss.

mod client;
mod server;

pub use client::{ClientMove, ClientMovePartial};
pub use server::{ServerMove, ServerMovePartial};
