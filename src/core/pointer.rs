//! Virtual file pointers into block-compressed streams
//!
//! A virtual file pointer (VFP) packs two coordinates into one `u64`:
//! - **Block address**: byte offset of a compressed block's first byte in the
//!   physical stream (48 bits)
//! - **Block offset**: byte offset into that block's *decompressed* content
//!   (16 bits)
//!
//! Pointers order the same way as the positions they denote in the
//! decompressed stream, so an index can sort and range-query them without
//! decompressing anything.
//!
//! Address bit 47 lands on bit 63 of the packed value. Pointers held in signed
//! 64-bit storage therefore look negative for large addresses; use
//! [`compare_signed`] for those, never the native `i64` ordering.

use crate::core::constants::{
    ADDRESS_MASK, MAX_BLOCK_ADDRESS, MAX_BLOCK_OFFSET, OFFSET_MASK, SHIFT_AMOUNT,
};
use crate::core::error::{ArgumentError, Result, VfpError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Pack a block address and in-block offset into a raw pointer
///
/// Arguments are signed so that callers holding signed offsets get a distinct
/// error for negative values instead of a silent wrap.
///
/// # Errors
///
/// Returns `InvalidArgument` with one of (checked in this order):
/// - `NegativeBlockOffset`
/// - `NegativeBlockAddress`
/// - `BlockOffsetTooLarge` (above 65535)
/// - `BlockAddressTooLarge` (above 2^48 - 1)
///
/// # Examples
///
/// ```
/// use block_vfp::pointer::{pack, unpack_block_address, unpack_block_offset};
///
/// let vfp = pack(5, 10).unwrap();
/// assert_eq!(vfp, (5 << 16) | 10);
/// assert_eq!(unpack_block_address(vfp), 5);
/// assert_eq!(unpack_block_offset(vfp), 10);
///
/// assert!(pack(-1, 0).is_err());
/// assert!(pack(0, 65536).is_err());
/// ```
pub fn pack(block_address: i64, block_offset: i64) -> Result<u64> {
    let reason = if block_offset < 0 {
        ArgumentError::NegativeBlockOffset(block_offset)
    } else if block_address < 0 {
        ArgumentError::NegativeBlockAddress(block_address)
    } else if block_offset as u64 > MAX_BLOCK_OFFSET as u64 {
        ArgumentError::BlockOffsetTooLarge(block_offset as u64)
    } else if block_address as u64 > MAX_BLOCK_ADDRESS {
        ArgumentError::BlockAddressTooLarge(block_address as u64)
    } else {
        return Ok(((block_address as u64) << SHIFT_AMOUNT) | block_offset as u64);
    };

    trace!("Rejected pointer ({}, {}): {}", block_address, block_offset, reason);
    Err(VfpError::InvalidArgument(reason))
}

/// Block address encoded in a raw pointer
///
/// Total over all bit patterns; bits above the address field are discarded.
#[inline]
pub const fn unpack_block_address(vfp: u64) -> u64 {
    (vfp >> SHIFT_AMOUNT) & ADDRESS_MASK
}

/// In-block offset encoded in a raw pointer
#[inline]
pub const fn unpack_block_offset(vfp: u64) -> u16 {
    (vfp & OFFSET_MASK) as u16
}

/// Order two raw pointers by stream position
///
/// `Less` if `vfp1` is earlier in the stream than `vfp2`.
#[inline]
pub fn compare(vfp1: u64, vfp2: u64) -> Ordering {
    if vfp1 == vfp2 {
        return Ordering::Equal;
    }
    vfp1.cmp(&vfp2)
}

/// Order two pointers that were stored as signed 64-bit integers
///
/// Agrees with [`compare`] on the reinterpreted bits. A value that is negative
/// as `i64` has bit 63 set and is therefore later than any non-negative one.
///
/// ```
/// use block_vfp::pointer::{compare_signed, pack};
/// use std::cmp::Ordering;
///
/// let far = pack(1 << 47, 0).unwrap() as i64;
/// assert!(far < 0);
/// assert_eq!(compare_signed(far, 0), Ordering::Greater);
/// ```
#[inline]
pub fn compare_signed(vfp1: i64, vfp2: i64) -> Ordering {
    if vfp1 == vfp2 {
        return Ordering::Equal;
    }
    match (vfp1 < 0, vfp2 < 0) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Same sign: signed order matches unsigned order
        _ => vfp1.cmp(&vfp2),
    }
}

/// Whether `vfp2` lies in the same block as `vfp1` or in the block right after it
///
/// Not symmetric: a `vfp2` in the block *before* `vfp1` yields `false`.
#[inline]
pub const fn are_in_same_or_adjacent_blocks(vfp1: u64, vfp2: u64) -> bool {
    let block1 = unpack_block_address(vfp1);
    let block2 = unpack_block_address(vfp2);
    // block1 is at most 48 bits wide, the increment cannot overflow
    block1 == block2 || block1 + 1 == block2
}

/// Human-readable rendering for logs
///
/// ```
/// use block_vfp::pointer::format;
///
/// assert_eq!(
///     format(0x5000a),
///     "327690(0x5000a): (block address: 5, offset: 10)"
/// );
/// ```
pub fn format(vfp: u64) -> String {
    format!(
        "{}(0x{:x}): (block address: {}, offset: {})",
        vfp,
        vfp,
        unpack_block_address(vfp),
        unpack_block_offset(vfp)
    )
}

/// Typed virtual file pointer
///
/// Thin wrapper over the raw packed value. `Ord` is the unsigned order of the
/// raw value, which is the stream order. Serializes as the bare integer so it
/// can sit in index records unchanged.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualFilePointer(u64);

impl VirtualFilePointer {
    /// Pointer to the first byte of the stream
    pub const ZERO: Self = VirtualFilePointer(0);

    /// Build a pointer from unsigned coordinates
    ///
    /// # Errors
    ///
    /// `BlockAddressTooLarge` if `block_address` exceeds 48 bits. The offset
    /// type already bounds the other field.
    pub fn new(block_address: u64, block_offset: u16) -> Result<Self> {
        if block_address > MAX_BLOCK_ADDRESS {
            trace!("Rejected block address {}", block_address);
            return Err(ArgumentError::BlockAddressTooLarge(block_address).into());
        }
        Ok(VirtualFilePointer(
            (block_address << SHIFT_AMOUNT) | block_offset as u64,
        ))
    }

    /// Build a pointer from possibly out-of-range signed coordinates
    ///
    /// Same validation as [`pack`].
    pub fn try_new(block_address: i64, block_offset: i64) -> Result<Self> {
        pack(block_address, block_offset).map(VirtualFilePointer)
    }

    /// Reinterpret raw bits without validation
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        VirtualFilePointer(raw)
    }

    /// Reinterpret a signed stored value without validation
    #[inline]
    pub const fn from_signed(raw: i64) -> Self {
        VirtualFilePointer(raw as u64)
    }

    #[inline]
    pub const fn block_address(self) -> u64 {
        unpack_block_address(self.0)
    }

    #[inline]
    pub const fn block_offset(self) -> u16 {
        unpack_block_offset(self.0)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Raw bits as a signed value, for signed storage formats
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Whether `next` lies in this pointer's block or the one after it
    #[inline]
    pub const fn is_same_or_adjacent_block(self, next: Self) -> bool {
        are_in_same_or_adjacent_blocks(self.0, next.0)
    }

    /// Pointer to the start of this pointer's block
    #[inline]
    pub const fn block_start(self) -> Self {
        VirtualFilePointer(self.0 & !OFFSET_MASK)
    }
}

impl From<u64> for VirtualFilePointer {
    fn from(raw: u64) -> Self {
        VirtualFilePointer(raw)
    }
}

impl From<VirtualFilePointer> for u64 {
    fn from(vfp: VirtualFilePointer) -> Self {
        vfp.0
    }
}

impl fmt::Display for VirtualFilePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format(self.0))
    }
}

impl fmt::Debug for VirtualFilePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualFilePointer")
            .field("block_address", &self.block_address())
            .field("block_offset", &self.block_offset())
            .finish()
    }
}
