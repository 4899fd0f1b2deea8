//! # LzRing Core
//!
//! Core components for the lzring LZSS compression library.
//!
//! This crate provides the building blocks the codec crate is assembled
//! from:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for flag bits and fixed-width
//!   fields
//! - [`window`]: the circular sliding window and the encoder's lookahead
//!   buffer
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     lzring binary (argument parsing, stream plumbing)   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LzssEncoder / LzssDecoder, MatchFinder strategies   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream + Buffers (this crate)                    │
//! │     BitReader/BitWriter, SlidingWindow, Lookahead       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzring_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut encoded = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut encoded);
//!     writer.write_bit(false).unwrap();
//!     writer.write_byte(b'A').unwrap();
//!     writer.flush(false).unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(&encoded));
//! assert_eq!(reader.read_bit().unwrap(), Some(false));
//! assert_eq!(reader.read_byte().unwrap(), Some(b'A'));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod window;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{LzRingError, Result};
pub use window::{LookaheadBuffer, SlidingWindow, WINDOW_FILL};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{LzRingError, Result};
    pub use crate::window::{LookaheadBuffer, SlidingWindow};
}
