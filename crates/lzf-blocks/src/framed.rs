// SPDX-License-Identifier: ISC
use alloc::vec;
use alloc::vec::Vec;

use crate::block::decompress_block;
use crate::{Error, Result};

const MAGIC_0: u8 = b'Z';
const MAGIC_1: u8 = b'V';
const TYPE0_HDR_SIZE: usize = 5;
const TYPE1_HDR_SIZE: usize = 7;

/// Block type tag, parsed from the raw header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    /// `ZV\0`: payload is stored verbatim.
    Uncompressed,
    /// `ZV\1`: payload is an LZF token stream.
    Compressed,
    /// Any other type byte. The format reserves 2 for a CRC-checked block,
    /// but the `lzf` tool never writes one.
    Unsupported(u8),
}

impl From<u8> for BlockKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Uncompressed,
            1 => Self::Compressed,
            other => Self::Unsupported(other),
        }
    }
}

/// Header fields of one block, read transiently during a walk.
///
/// Blocks have no persistent representation; a header is parsed, consumed by
/// the walk, and discarded.
struct BlockHeader {
    kind: BlockKind,
    /// Payload bytes physically present after the header.
    stored_len: usize,
    /// Bytes this block contributes to the decoded output.
    decoded_len: usize,
    /// Input offset of the first payload byte.
    payload: usize,
}

impl BlockHeader {
    /// Input offset of the next block (or of end-of-input for the last one).
    fn next_block(&self) -> usize {
        self.payload + self.stored_len
    }
}

fn read_u16_be(input: &[u8], offset: usize) -> usize {
    usize::from(u16::from_be_bytes([input[offset], input[offset + 1]]))
}

/// Parses the block header starting at `offset`.
///
/// Fewer than 5 bytes remaining cannot be a block at all and is reported as
/// `TrailingBytes`; a recognizable block whose header fields or declared
/// payload extend past the input is `TruncatedHeader`.
fn read_header(input: &[u8], offset: usize, block: usize) -> Result<BlockHeader> {
    let remaining = input.len() - offset;
    if remaining < TYPE0_HDR_SIZE {
        return Err(Error::TrailingBytes { offset, remaining });
    }
    if input[offset] != MAGIC_0 || input[offset + 1] != MAGIC_1 {
        return Err(Error::BadMagic { block, offset });
    }

    let header = match BlockKind::from(input[offset + 2]) {
        kind @ BlockKind::Uncompressed => {
            let stored_len = read_u16_be(input, offset + 3);
            BlockHeader {
                kind,
                stored_len,
                decoded_len: stored_len,
                payload: offset + TYPE0_HDR_SIZE,
            }
        }
        kind @ BlockKind::Compressed => {
            if remaining < TYPE1_HDR_SIZE {
                return Err(Error::TruncatedHeader { block, offset });
            }
            let stored_len = read_u16_be(input, offset + 3);
            let decoded_len = read_u16_be(input, offset + 5);
            BlockHeader { kind, stored_len, decoded_len, payload: offset + TYPE1_HDR_SIZE }
        }
        BlockKind::Unsupported(kind) => {
            return Err(Error::UnsupportedBlockType { block, offset, kind });
        }
    };

    if header.next_block() > input.len() {
        return Err(Error::TruncatedHeader { block, offset });
    }
    Ok(header)
}

/// Validates the stream's framing and returns the exact decoded length.
///
/// Only block headers are inspected, never payload bytes, so the cost is
/// proportional to the number of blocks, not the stream size.
/// An empty input is a valid stream of zero blocks.
///
/// This is the same walk `decode_blocks` performs before allocating output;
/// it is exposed for callers that want to pre-size storage or reject corrupt
/// framing cheaply.
pub fn decoded_size(input: &[u8]) -> Result<usize> {
    let mut total = 0usize;
    let mut ip = 0usize;
    let mut block = 0usize;

    // The cursor lands exactly on a block start or exactly at end-of-input;
    // read_header rejects anything that cannot complete a block.
    while ip < input.len() {
        let header = read_header(input, ip, block)?;
        total += header.decoded_len;
        ip = header.next_block();
        block += 1;
    }

    Ok(total)
}

/// Decodes a complete `lzf` utility block stream (`ZV\0`/`ZV\1` blocks).
///
/// The framing is validated and the total decoded length computed first, so
/// the output buffer is allocated exactly once and no output is produced for
/// a stream whose framing is corrupt. Compressed blocks decode directly into
/// the shared output buffer, which lets their back-references reach bytes
/// produced by earlier blocks.
///
/// # Example
///
/// ```
/// use lzf_blocks::decode_blocks;
///
/// let mut stream = Vec::new();
/// stream.extend_from_slice(b"ZV\x00\x00\x05hello");
/// assert_eq!(decode_blocks(&stream).unwrap(), b"hello");
/// ```
pub fn decode_blocks(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; decoded_size(input)?];

    let mut ip = 0usize;
    let mut op = 0usize;
    let mut block = 0usize;
    while ip < input.len() {
        let header = read_header(input, ip, block)?;
        match header.kind {
            BlockKind::Uncompressed => {
                output[op..op + header.stored_len]
                    .copy_from_slice(&input[header.payload..header.next_block()]);
            }
            BlockKind::Compressed => {
                decompress_block(
                    input,
                    header.payload,
                    header.next_block(),
                    &mut output,
                    op,
                    op + header.decoded_len,
                )?;
            }
            BlockKind::Unsupported(kind) => {
                return Err(Error::UnsupportedBlockType { block, offset: ip, kind });
            }
        }
        op += header.decoded_len;
        ip = header.next_block();
        block += 1;
    }

    Ok(output)
}
