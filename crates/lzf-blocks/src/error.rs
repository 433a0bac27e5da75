// SPDX-License-Identifier: ISC
use core::fmt;

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for ZV block stream decoding.
///
/// Every variant is terminal for the whole decode call: no partial output is
/// ever returned, and the caller receives the first error encountered.
///
/// `block` counts blocks from zero in stream order; offsets are byte positions
/// in the input buffer (`offset`, `input_offset`) or in the decoded output
/// (`output_offset`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A block header does not start with the `ZV` signature bytes.
    BadMagic {
        /// Index of the offending block.
        block: usize,
        /// Input offset where the block was expected to start.
        offset: usize,
    },
    /// A block header carries a type byte that is neither 0 nor 1.
    ///
    /// The format reserves type 2 for a CRC-checked block, but the `lzf`
    /// command-line tool never emits it, so it is rejected here as well.
    UnsupportedBlockType {
        /// Index of the offending block.
        block: usize,
        /// Input offset where the block starts.
        offset: usize,
        /// The raw type byte found in the header.
        kind: u8,
    },
    /// Fewer input bytes remain than a block header or its declared payload
    /// requires.
    TruncatedHeader {
        /// Index of the offending block.
        block: usize,
        /// Input offset where the block starts.
        offset: usize,
    },
    /// All blocks were parsed but unconsumed bytes remain at the end of the
    /// input.
    TrailingBytes {
        /// Input offset of the first unconsumed byte.
        offset: usize,
        /// Number of unconsumed bytes.
        remaining: usize,
    },
    /// A back-reference reaches before the start of the output produced so
    /// far.
    CorruptReference {
        /// Input offset just past the back-reference's distance byte.
        input_offset: usize,
        /// Absolute output offset at which the back-reference was decoded.
        output_offset: usize,
    },
    /// A block's token stream ran past its input payload or its declared
    /// output span.
    Overrun {
        /// Input offset at which the decode loop stopped.
        input_offset: usize,
        /// Absolute output offset at which the decode loop stopped.
        output_offset: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic { block, offset } => write!(
                f,
                "corrupt input: block #{block} (at offset {offset}) did not start with 'ZV' signature bytes"
            ),
            Self::UnsupportedBlockType { block, offset, kind } => write!(
                f,
                "corrupt input: block #{block} (at offset {offset}) has unrecognized block type {kind}"
            ),
            Self::TruncatedHeader { block, offset } => {
                write!(f, "corrupt input: block #{block} (at offset {offset}) is truncated")
            }
            Self::TrailingBytes { offset, remaining } => write!(
                f,
                "corrupt input: {remaining} trailing byte(s) at offset {offset} after the last block"
            ),
            Self::CorruptReference { input_offset, output_offset } => write!(
                f,
                "corrupt data: back-reference before start of output, input offset {input_offset}, output offset {output_offset}"
            ),
            Self::Overrun { input_offset, output_offset } => write!(
                f,
                "corrupt data: overrun in decompress, input offset {input_offset}, output offset {output_offset}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
