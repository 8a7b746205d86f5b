//! # Schema Generation 1
//!
//! The original wire layout. The 64-bit session identifier travels as
//! two 32-bit halves and there is no tick field.
//!
//! ## Wire Layout
//!
//! ```text
//! ClientMove v1                      ServerMove v1
//! ┌───┬─────────┬──────────────┐    ┌───┬─────────┬──────────────┐
//! │ 1 │ varint  │ id           │    │ 1 │ varint  │ id           │
//! │ 2 │ varint  │ sessionIdLo  │    │ 2 │ -       │ RESERVED     │
//! │ 3 │ varint  │ sessionIdHi  │    │ 3 │ fixed64 │ x            │
//! │ 4 │ fixed64 │ x            │    │ 4 │ fixed64 │ y            │
//! │ 5 │ fixed64 │ y            │    │ 5 │ fixed64 │ z            │
//! │ 6 │ fixed64 │ z            │    │ 6 │ fixed64 │ pitch        │
//! │ 7 │ fixed64 │ pitch        │    │ 7 │ fixed64 │ yaw          │
//! │ 8 │ fixed64 │ yaw          │    │ 8 │ packed  │ actions      │
//! │ 9 │ packed  │ actions      │    │ 9 │ varint  │ rtt          │
//! └───┴─────────┴──────────────┘    └───┴─────────┴──────────────┘
//! ```
//!
//! `ServerMove` field 2 is reserved: it was never used in this
//! generation and must never be reassigned, or decoders still speaking
//! v1 would silently misread it.
//!
//! This module is wire-incompatible with [`crate::v2`]; the module path
//! is the schema-version selector, and each generation's codec is
//! auditable in isolation.

mod client;
mod server;

pub use client::{ClientMove, ClientMovePartial};
pub use server::{ServerMove, ServerMovePartial};
