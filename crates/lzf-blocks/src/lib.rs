// SPDX-License-Identifier: ISC
//! Pure Rust decoder for the `lzf` utility's ZV block stream format.
//!
//! # Overview
//!
//! This crate decodes the block-structured stream written by the `lzf`
//! command-line tool: a sequence of `ZV`-tagged blocks, each either stored
//! verbatim (`ZV\0`) or holding an LZF token payload (`ZV\1`).
//!
//! It provides:
//!
//! - Whole-stream decoding (`decode_blocks`).
//! - Framing validation and exact output sizing without decoding payloads
//!   (`decoded_size`).
//! - Single-block payload decoding against a shared output buffer
//!   (`decompress_block`).
//!
//! Decoding is a two-pass design: the framing is validated and the total
//! decoded length computed from headers alone, then the output buffer is
//! allocated exactly once and filled in a second walk. No output is ever
//! surfaced for a stream that fails validation, and errors carry the block
//! index and byte offset of the corruption.
//!
//! There is no encoder in this crate, and the reserved CRC block type is
//! rejected as unsupported.
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`].
//!
//! # no_std
//!
//! Disable default features to use in `no_std + alloc` environments:
//!
//! ```toml
//! [dependencies]
//! lzf-blocks = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```
//! use lzf_blocks::{decode_blocks, decoded_size};
//!
//! // One stored block followed by one compressed block whose back-reference
//! // repeats the stored block's bytes.
//! let mut stream = Vec::new();
//! stream.extend_from_slice(b"ZV\x00\x00\x02ab");
//! stream.extend_from_slice(b"ZV\x01\x00\x02\x00\x04");
//! stream.extend_from_slice(&[0x40, 0x01]); // length 4, distance 2
//!
//! assert_eq!(decoded_size(&stream).unwrap(), 6);
//! assert_eq!(decode_blocks(&stream).unwrap(), b"ababab");
//! ```
//!
//! # Safety
//!
//! This crate forbids `unsafe` code.

#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod block;
mod error;
mod framed;

/// Single-block LZF payload decoder.
pub use block::decompress_block;
/// Crate error and result types.
pub use error::{Error, Result};
/// `lzf` block stream decoding (`ZV\0`/`ZV\1`).
pub use framed::{decode_blocks, decoded_size};

/// Maximum literal run size in the LZF format.
pub const MAX_LITERAL_LEN: usize = 1 << 5;

/// Maximum backwards distance a back-reference can express.
pub const MAX_OFFSET: usize = 1 << 13;

/// Maximum back-reference length, including the extension byte.
pub const MAX_MATCH_LEN: usize = (1 << 8) + (1 << 3);
