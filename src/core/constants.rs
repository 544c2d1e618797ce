//! Published field layout of a virtual file pointer
//!
//! These values are part of the on-disk contract: index data written by any
//! compatible system packs pointers with exactly this layout.
//!
//! ```text
//!  63                                            16 15             0
//! ┌────────────────────────────────────────────────┬────────────────┐
//! │          block address (48 bits)               │ offset (16 b)  │
//! └────────────────────────────────────────────────┴────────────────┘
//! ```

/// Width of the block address field in bits
pub const BLOCK_ADDRESS_BITS: u32 = 48;

/// Width of the in-block offset field in bits
pub const BLOCK_OFFSET_BITS: u32 = 16;

/// Left shift applied to the block address when packing
pub const SHIFT_AMOUNT: u32 = BLOCK_OFFSET_BITS;

/// Mask selecting the in-block offset
pub const OFFSET_MASK: u64 = 0xFFFF;

/// Mask selecting the block address after shifting
pub const ADDRESS_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// Largest representable block address (2^48 - 1)
pub const MAX_BLOCK_ADDRESS: u64 = ADDRESS_MASK;

/// Largest representable in-block offset (2^16 - 1)
pub const MAX_BLOCK_OFFSET: u16 = u16::MAX;

const _: () = assert!(BLOCK_ADDRESS_BITS + BLOCK_OFFSET_BITS == u64::BITS);
const _: () = assert!(MAX_BLOCK_ADDRESS == (1u64 << BLOCK_ADDRESS_BITS) - 1);
const _: () = assert!(MAX_BLOCK_OFFSET as u64 == OFFSET_MASK);
