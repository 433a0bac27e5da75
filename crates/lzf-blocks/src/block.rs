// SPDX-License-Identifier: ISC
//! LZF token decoder for a single compressed block payload.
//!
//! The decoder writes into the shared, whole-stream output buffer rather than
//! a per-block scratch buffer: back-reference distances are measured against
//! the absolute output position, so a reference may legally reach into bytes
//! produced by an earlier block.

use crate::{Error, Result};

/// Copies `len` bytes within `buf` from `src` to `dst`, one byte at a time,
/// front to back.
///
/// The ranges may alias: when `dst - src` is smaller than `len`, bytes written
/// earlier in the copy are read back as sources later in the same copy, which
/// is how a short repeating pattern expands from a single stored occurrence.
/// A bulk region copy would read the stale bytes instead.
fn copy_overlapping(buf: &mut [u8], mut src: usize, mut dst: usize, len: usize) {
    for _ in 0..len {
        buf[dst] = buf[src];
        src += 1;
        dst += 1;
    }
}

/// Decompresses one compressed block payload into `output`.
///
/// The encoded tokens are read from `input[in_start..in_end]` and the decoded
/// bytes fill `output[out_start..out_end]` exactly. `output` is the whole
/// stream's output buffer; `out_start` is this block's absolute position in
/// it, which is what back-reference distances are resolved against.
///
/// Returns:
/// - `Error::CorruptReference` when a back-reference reaches before the start
///   of the output produced so far.
/// - `Error::Overrun` when the token stream runs past `in_end`, or a run
///   would write past `out_end`.
///
/// # Example
///
/// ```
/// use lzf_blocks::decompress_block;
///
/// // One literal run of five bytes (control byte 4 = length 4 + 1).
/// let payload = [0x04, b'h', b'e', b'l', b'l', b'o'];
/// let mut out = vec![0u8; 5];
/// decompress_block(&payload, 0, payload.len(), &mut out, 0, 5).unwrap();
/// assert_eq!(&out, b"hello");
/// ```
pub fn decompress_block(
    input: &[u8],
    in_start: usize,
    in_end: usize,
    output: &mut [u8],
    out_start: usize,
    out_end: usize,
) -> Result<()> {
    let mut ip = in_start;
    let mut op = out_start;

    while op < out_end {
        if ip >= in_end {
            return Err(Error::Overrun { input_offset: ip, output_offset: op });
        }
        let ctrl = input[ip];
        ip += 1;

        if ctrl < 32 {
            let len = usize::from(ctrl) + 1;
            if ip + len > in_end || op + len > out_end {
                return Err(Error::Overrun { input_offset: ip, output_offset: op });
            }
            output[op..op + len].copy_from_slice(&input[ip..ip + len]);
            ip += len;
            op += len;
            continue;
        }

        let mut len = usize::from(ctrl >> 5);
        if len == 7 {
            if ip >= in_end {
                return Err(Error::Overrun { input_offset: ip, output_offset: op });
            }
            len += usize::from(input[ip]);
            ip += 1;
        }

        if ip >= in_end {
            return Err(Error::Overrun { input_offset: ip, output_offset: op });
        }
        let distance = ((usize::from(ctrl & 0x1f) << 8) | usize::from(input[ip])) + 1;
        ip += 1;

        let copy_len = len + 2;
        if distance > op {
            return Err(Error::CorruptReference { input_offset: ip, output_offset: op });
        }
        if op + copy_len > out_end {
            return Err(Error::Overrun { input_offset: ip, output_offset: op });
        }
        copy_overlapping(output, op - distance, op, copy_len);
        op += copy_len;
    }

    Ok(())
}
