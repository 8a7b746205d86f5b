//! # SKIRMISH Proto - The Courier Codec
//!
//! Binary wire codec for the two movement messages exchanged between a
//! game client and the authoritative server.
//!
//! ## Architecture
//!
//! - **Wire primitives**: varint, fixed64 doubles, tag bytes, and
//!   unknown-field skipping ([`wire`])
//! - **Action enumeration**: integer-backed with an explicit
//!   unrecognized sentinel ([`action`])
//! - **Schema generations**: [`v1`] and [`v2`] are side-by-side,
//!   wire-incompatible layouts of the same two logical messages
//! - **JSON mirror**: a lossless textual mapping for debugging and
//!   interop, independent of the binary layout
//! - **Merge-from-partial**: fully defaulted records from sparse inputs
//!
//! ## Contract
//!
//! The codec never initiates I/O and holds no state between calls. A
//! decode either returns a fully populated record or fails as a whole
//! ([`CodecError`]); the input buffer is borrowed for the call and never
//! retained. Every operation is synchronous and freely callable from
//! multiple threads on independent buffers.
//!
//! Fields at their zero defaults are omitted on the wire (sparse
//! encoding) and reconstructed on decode; unknown field numbers are
//! skipped, never an error, so additive schema changes stay readable.
//!
//! ## Example
//!
//! ```rust
//! use skirmish_proto::{v2::ClientMove, Action};
//!
//! let report = ClientMove {
//!     tick: 100,
//!     id: 7,
//!     session_id: 123_456_789,
//!     x: 1.5,
//!     y: -2.25,
//!     yaw: 180.0,
//!     actions: vec![Action::Shoot],
//!     ..ClientMove::default()
//! };
//!
//! let bytes = report.encode();
//! let decoded = ClientMove::decode(&bytes)?;
//! assert_eq!(decoded, report);
//! # Ok::<(), skirmish_proto::CodecError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod action;
pub mod error;
pub mod v1;
pub mod v2;
pub mod wire;

mod json;

// Re-exports for convenience
pub use action::Action;
pub use error::{CodecError, CodecResult};
pub use wire::{WireReader, WireType, WireWriter, MAX_SAFE_INTEGER};
