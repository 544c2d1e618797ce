//! Property-based tests for pointer packing and ordering
//!
//! Uses proptest to verify the codec laws across the full field ranges

use block_vfp::pointer::{
    are_in_same_or_adjacent_blocks, compare, compare_signed, pack, unpack_block_address,
    unpack_block_offset,
};
use block_vfp::{ArgumentError, VirtualFilePointer, MAX_BLOCK_ADDRESS, MAX_BLOCK_OFFSET};
use proptest::prelude::*;
use std::cmp::Ordering;

fn address() -> impl Strategy<Value = i64> {
    0..=MAX_BLOCK_ADDRESS as i64
}

fn offset() -> impl Strategy<Value = i64> {
    0..=MAX_BLOCK_OFFSET as i64
}

/// Raw bit patterns, half of them with bit 63 set
fn raw() -> impl Strategy<Value = u64> {
    prop_oneof![any::<u64>(), any::<u64>().prop_map(|v| v | (1 << 63)), 0..(1u64 << 20)]
}

proptest! {
    #[test]
    fn prop_roundtrip(a in address(), o in offset()) {
        let vfp = pack(a, o).unwrap();
        prop_assert_eq!(unpack_block_address(vfp), a as u64);
        prop_assert_eq!(unpack_block_offset(vfp), o as u16);
    }

    #[test]
    fn prop_order_is_lexicographic(
        a1 in address(), o1 in offset(),
        a2 in address(), o2 in offset()
    ) {
        let v1 = pack(a1, o1).unwrap();
        let v2 = pack(a2, o2).unwrap();
        prop_assert_eq!(compare(v1, v2), (a1, o1).cmp(&(a2, o2)));
    }

    #[test]
    fn prop_signed_dispatch_matches_unsigned(v1 in raw(), v2 in raw()) {
        prop_assert_eq!(compare_signed(v1 as i64, v2 as i64), compare(v1, v2));
        prop_assert_eq!(compare(v1, v2), compare(v2, v1).reverse());
    }

    #[test]
    fn prop_typed_order_matches_compare(v1 in raw(), v2 in raw()) {
        let p1 = VirtualFilePointer::from_raw(v1);
        let p2 = VirtualFilePointer::from_raw(v2);
        prop_assert_eq!(p1.cmp(&p2), compare(v1, v2));
    }

    #[test]
    fn prop_decoding_is_total(v in any::<u64>()) {
        let a = unpack_block_address(v);
        let o = unpack_block_offset(v);
        prop_assert!(a <= MAX_BLOCK_ADDRESS);
        // Every decoded pair re-packs to the same bits
        prop_assert_eq!(pack(a as i64, o as i64).unwrap(), v);
        let needle = format!("block address: {}", a);
        prop_assert!(block_vfp::pointer::format(v).contains(&needle));
    }

    #[test]
    fn prop_adjacency(a in 0..MAX_BLOCK_ADDRESS as i64 - 2, o1 in offset(), o2 in offset()) {
        let here = pack(a, o1).unwrap();
        prop_assert!(are_in_same_or_adjacent_blocks(here, pack(a, o2).unwrap()));
        prop_assert!(are_in_same_or_adjacent_blocks(here, pack(a + 1, o2).unwrap()));
        prop_assert!(!are_in_same_or_adjacent_blocks(here, pack(a + 2, o2).unwrap()));
        prop_assert!(!are_in_same_or_adjacent_blocks(pack(a + 1, o2).unwrap(), here));
    }

    #[test]
    fn prop_out_of_range_rejected(excess in 1i64..1_000_000) {
        let over_address = MAX_BLOCK_ADDRESS as i64 + excess;
        let over_offset = MAX_BLOCK_OFFSET as i64 + excess;

        prop_assert_eq!(
            pack(over_address, 0).unwrap_err().argument(),
            Some(ArgumentError::BlockAddressTooLarge(over_address as u64))
        );
        prop_assert_eq!(
            pack(0, over_offset).unwrap_err().argument(),
            Some(ArgumentError::BlockOffsetTooLarge(over_offset as u64))
        );
        prop_assert_eq!(
            pack(-excess, 0).unwrap_err().argument(),
            Some(ArgumentError::NegativeBlockAddress(-excess))
        );
        prop_assert_eq!(
            pack(0, -excess).unwrap_err().argument(),
            Some(ArgumentError::NegativeBlockOffset(-excess))
        );
    }
}

#[test]
fn test_literal_cases() {
    assert!(pack(-1, 0).is_err());
    assert!(pack(0, -1).is_err());
    assert!(pack(1 << 48, 0).is_err());
    assert!(pack(0, 1 << 16).is_err());
    assert!(pack((1 << 48) - 1, (1 << 16) - 1).is_ok());

    let v = |a, o| pack(a, o).unwrap();
    assert_eq!(compare(v(5, 10), v(5, 10)), Ordering::Equal);
    assert_eq!(compare(v(5, 10), v(5, 20)), Ordering::Less);
    assert_eq!(compare(v(5, 20), v(5, 10)), Ordering::Greater);
    assert_eq!(compare(v(5, 65000), v(6, 0)), Ordering::Less);

    let high = v(1 << 47, 0);
    assert!((high as i64) < 0);
    assert_eq!(compare(high, v(0, 0)), Ordering::Greater);

    assert!(are_in_same_or_adjacent_blocks(v(5, 0), v(5, 999)));
    assert!(are_in_same_or_adjacent_blocks(v(5, 0), v(6, 0)));
    assert!(!are_in_same_or_adjacent_blocks(v(6, 0), v(5, 0)));
    assert!(!are_in_same_or_adjacent_blocks(v(5, 0), v(7, 0)));
}

#[test]
fn test_concurrent_use_needs_no_locking() {
    let expected: Vec<u64> = (0..1000).map(|i| pack(i, i % 65536).unwrap()).collect();

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for (i, &vfp) in expected.iter().enumerate() {
                    assert_eq!(pack(i as i64, i as i64 % 65536).unwrap(), vfp);
                    assert_eq!(unpack_block_address(vfp), i as u64);
                    if i > 0 {
                        assert_eq!(compare(expected[i - 1], vfp), Ordering::Less);
                    }
                }
            });
        }
    });
}
