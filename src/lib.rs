//! # block-vfp - Virtual File Pointers for Block-Compressed Streams
//!
//! A block-compressed stream is a sequence of independently compressed blocks.
//! Compressed byte offsets alone cannot name a record: the reader also needs
//! to know how far into the *decompressed* block the record begins. A virtual
//! file pointer packs both into one ordered `u64`:
//!
//! - **Block address** (upper 48 bits): offset of the block in the file
//! - **Block offset** (lower 16 bits): offset into the decompressed block
//!
//! Indexes store pointers as opaque keys, compare them without decompressing
//! anything, and hand them back to a reader to resume at an exact byte.
//!
//! ## Quick Start
//!
//! ```rust
//! use block_vfp::{VirtualFilePointer, Result};
//! use block_vfp::pointer::{are_in_same_or_adjacent_blocks, compare, pack};
//! use std::cmp::Ordering;
//!
//! # fn main() -> Result<()> {
//! let first = pack(5, 10)?;
//! let second = pack(6, 0)?;
//!
//! assert_eq!(compare(first, second), Ordering::Less);
//! assert!(are_in_same_or_adjacent_blocks(first, second));
//!
//! let vfp = VirtualFilePointer::from_raw(first);
//! assert_eq!(vfp.block_address(), 5);
//! assert_eq!(vfp.block_offset(), 10);
//! println!("{}", vfp); // 327690(0x5000a): (block address: 5, offset: 10)
//! # Ok(())
//! # }
//! ```
//!
//! ## Signed storage
//!
//! Address bit 47 occupies bit 63 of the packed value. Formats that persist
//! pointers as signed 64-bit integers see large pointers as negative; order
//! those with [`pointer::compare_signed`].
//!
//! ## Skipping headers
//!
//! ```rust
//! use block_vfp::line_filter::{LineFilter, LineFormat};
//!
//! let filter = LineFilter::new(LineFormat::vcf()).unwrap();
//! assert!(filter.is_header_line("#CHROM\tPOS"));
//! assert!(!filter.is_header_line("chr1\t100\t200"));
//! ```

pub mod core;

pub use crate::core::{constants, line_filter, pointer, seek, span};

pub use crate::core::{
    constants::{MAX_BLOCK_ADDRESS, MAX_BLOCK_OFFSET},
    error::{ArgumentError, Result, VfpError},
    line_filter::{LineFilter, LineFormat},
    pointer::VirtualFilePointer,
    seek::VirtualSeek,
    span::VirtualSpan,
};
