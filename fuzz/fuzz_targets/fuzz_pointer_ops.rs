#![no_main]
use arbitrary::Arbitrary;
use block_vfp::pointer::{
    are_in_same_or_adjacent_blocks, compare, compare_signed, format, pack, unpack_block_address,
    unpack_block_offset,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    address: i64,
    offset: i64,
    raw1: u64,
    raw2: u64,
}

fuzz_target!(|input: Input| {
    // pack either round-trips or rejects, never panics
    if let Ok(vfp) = pack(input.address, input.offset) {
        assert_eq!(unpack_block_address(vfp), input.address as u64);
        assert_eq!(unpack_block_offset(vfp) as i64, input.offset);
    }

    // Decoding and ordering are total over arbitrary bits
    let ordering = compare(input.raw1, input.raw2);
    assert_eq!(compare_signed(input.raw1 as i64, input.raw2 as i64), ordering);
    assert_eq!(compare(input.raw2, input.raw1), ordering.reverse());

    let _ = are_in_same_or_adjacent_blocks(input.raw1, input.raw2);
    let rendered = format(input.raw1);
    assert!(rendered.contains("block address"));
});
