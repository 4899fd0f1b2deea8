//! # LzRing LZSS
//!
//! Pure Rust implementation of the traditional fixed-format LZSS
//! sliding-window codec: 12-bit offsets, 4-bit lengths, matches of 3 to 18
//! bytes, literals for everything shorter.
//!
//! The wire format is a dense bit stream of flag-prefixed tokens with no
//! header, no length field, and no end marker; the stream ends when the
//! source does. Both ends must agree on the [`LzssParams`] out of band.
//!
//! ## Example
//!
//! ```rust
//! use lzring_lzss::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let packed = compress(original).unwrap();
//! let unpacked = decompress(&packed).unwrap();
//! assert_eq!(unpacked, original);
//! ```
//!
//! ## Streams
//!
//! The encoder and decoder also run directly over `Read`/`Write` pairs:
//!
//! ```rust
//! use lzring_lzss::{decode_lzss, encode_lzss};
//! use std::io::Cursor;
//!
//! let mut packed = Vec::new();
//! encode_lzss(Cursor::new(b"hello hello hello".to_vec()), &mut packed).unwrap();
//!
//! let mut unpacked = Vec::new();
//! decode_lzss(Cursor::new(&packed), &mut unpacked).unwrap();
//! assert_eq!(unpacked, b"hello hello hello");
//! ```
//!
//! ## Custom match finders
//!
//! The dictionary search is a strategy behind the
//! [`MatchFinder`](matchfind::MatchFinder) trait. The built-in
//! [`BruteForceFinder`](matchfind::BruteForceFinder) is the reference;
//! faster searches drop in as long as they keep the documented tie-break,
//! which keeps their output byte-identical.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod encode;
pub mod matchfind;
pub mod params;

// Re-exports
pub use decode::{LzssDecoder, decode_lzss, decompress};
pub use encode::{LzssEncoder, compress, encode_lzss};
pub use matchfind::{BruteForceFinder, Match, MatchFinder};
pub use params::LzssParams;
