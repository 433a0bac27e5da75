// SPDX-License-Identifier: ISC
use lzf_blocks::{Error, decode_blocks, decoded_size};

fn stored_block(payload: &[u8]) -> Vec<u8> {
    let mut block = b"ZV\x00".to_vec();
    block.extend_from_slice(&u16::try_from(payload.len()).expect("payload fits u16").to_be_bytes());
    block.extend_from_slice(payload);
    block
}

fn compressed_block(payload: &[u8], decoded_len: usize) -> Vec<u8> {
    let mut block = b"ZV\x01".to_vec();
    block.extend_from_slice(&u16::try_from(payload.len()).expect("payload fits u16").to_be_bytes());
    block.extend_from_slice(&u16::try_from(decoded_len).expect("length fits u16").to_be_bytes());
    block.extend_from_slice(payload);
    block
}

#[test]
fn bad_magic_names_block_and_offset() {
    let mut stream = stored_block(b"abc");
    stream[0] = b'X';
    let err = decode_blocks(&stream).expect_err("expected bad magic");
    assert_eq!(err, Error::BadMagic { block: 0, offset: 0 });
}

#[test]
fn bad_magic_in_a_later_block() {
    let mut stream = stored_block(b"abc");
    let second = stream.len();
    stream.extend_from_slice(&stored_block(b"defgh"));
    stream[second + 1] = b'W';
    let err = decoded_size(&stream).expect_err("expected bad magic");
    assert_eq!(err, Error::BadMagic { block: 1, offset: second });
}

#[test]
fn reserved_crc_block_type_is_unsupported() {
    let stream = b"ZV\x02\x00\x00";
    let err = decode_blocks(stream).expect_err("expected unsupported type");
    assert_eq!(err, Error::UnsupportedBlockType { block: 0, offset: 0, kind: 2 });
}

#[test]
fn compressed_header_cut_short() {
    // Type 1 needs a 7-byte header; only 5 bytes are present.
    let stream = b"ZV\x01\x00\x01";
    let err = decoded_size(stream).expect_err("expected truncated header");
    assert_eq!(err, Error::TruncatedHeader { block: 0, offset: 0 });
}

#[test]
fn declared_payload_extends_past_input() {
    let mut stream = b"ZV\x00".to_vec();
    stream.extend_from_slice(&10u16.to_be_bytes());
    stream.extend_from_slice(b"abc");
    let err = decode_blocks(&stream).expect_err("expected truncated header");
    assert_eq!(err, Error::TruncatedHeader { block: 0, offset: 0 });
}

#[test]
fn one_extra_byte_after_the_last_block() {
    let mut stream = stored_block(b"abc");
    let end = stream.len();
    stream.push(0xaa);
    let err = decode_blocks(&stream).expect_err("expected trailing bytes");
    assert_eq!(err, Error::TrailingBytes { offset: end, remaining: 1 });
}

#[test]
fn zero_byte_is_not_an_end_marker() {
    // The historical format description hints at an optional NUL end marker,
    // but the tool never writes one and this decoder does not accept one.
    let mut stream = stored_block(b"abc");
    let end = stream.len();
    stream.push(0x00);
    let err = decode_blocks(&stream).expect_err("expected trailing bytes");
    assert_eq!(err, Error::TrailingBytes { offset: end, remaining: 1 });
}

#[test]
fn back_reference_before_start_of_output() {
    // First block in the stream, so nothing has been produced yet: a
    // distance-1 back-reference has no source.
    let stream = compressed_block(&[0x20, 0x00], 3);
    let err = decode_blocks(&stream).expect_err("expected corrupt reference");
    assert_eq!(err, Error::CorruptReference { input_offset: 9, output_offset: 0 });
}

#[test]
fn back_reference_past_produced_output() {
    // One byte produced, distance 2 reaches one byte before the output.
    let stream = compressed_block(&[0x00, b'a', 0x20, 0x01], 4);
    let err = decode_blocks(&stream).expect_err("expected corrupt reference");
    assert_eq!(err, Error::CorruptReference { input_offset: 11, output_offset: 1 });
}

#[test]
fn literal_run_overshoots_declared_span() {
    let stream = compressed_block(&[0x04, b'h', b'e', b'l', b'l', b'o'], 3);
    let err = decode_blocks(&stream).expect_err("expected overrun");
    assert_eq!(err, Error::Overrun { input_offset: 8, output_offset: 0 });
}

#[test]
fn back_reference_overshoots_declared_span() {
    let stream = compressed_block(&[0x00, b'a', 0x40, 0x00], 3);
    let err = decode_blocks(&stream).expect_err("expected overrun");
    assert_eq!(err, Error::Overrun { input_offset: 11, output_offset: 1 });
}

#[test]
fn token_stream_ends_before_span_is_filled() {
    let stream = compressed_block(&[0x00, b'a'], 2);
    let err = decode_blocks(&stream).expect_err("expected overrun");
    assert_eq!(err, Error::Overrun { input_offset: 9, output_offset: 1 });
}

#[test]
fn literal_run_reads_past_payload() {
    // Control byte promises five literal bytes; only two are stored.
    let stream = compressed_block(&[0x04, b'h', b'i'], 5);
    let err = decode_blocks(&stream).expect_err("expected overrun");
    assert_eq!(err, Error::Overrun { input_offset: 8, output_offset: 0 });
}

#[test]
fn overrun_display_matches_historical_diagnostic() {
    let err = Error::Overrun { input_offset: 12, output_offset: 7 };
    assert_eq!(
        err.to_string(),
        "corrupt data: overrun in decompress, input offset 12, output offset 7"
    );
}
