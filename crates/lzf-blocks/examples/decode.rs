// SPDX-License-Identifier: ISC
use lzf_blocks::{decode_blocks, decoded_size};

fn main() {
    // A stored block followed by a compressed block whose back-reference
    // repeats the stored block's bytes.
    let mut stream = Vec::new();
    stream.extend_from_slice(b"ZV\x00\x00\x04LZF ");
    stream.extend_from_slice(b"ZV\x01\x00\x05\x00\x0c");
    stream.extend_from_slice(&[0xe0, 0x02, 0x03, 0x00, b'!']);

    let total = decoded_size(&stream).expect("size calculation failed");
    let decoded = decode_blocks(&stream).expect("decoding failed");

    println!("in={} out={}", stream.len(), total);
    println!("{}", String::from_utf8_lossy(&decoded));
    assert_eq!(decoded, b"LZF LZF LZF LZF!");
}
