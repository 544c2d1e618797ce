//! Seek contract for block-compressed readers
//!
//! The codec and container live outside this crate. A reader that wants to
//! honour virtual file pointers implements [`VirtualSeek`]: seek the physical
//! stream to the block address, decompress that block, then skip the in-block
//! offset.

use crate::core::error::{Result, VfpError};
use crate::core::pointer::{pack, VirtualFilePointer};
use tracing::debug;

/// Random access by virtual file pointer
pub trait VirtualSeek {
    /// Position the reader at `vfp`
    fn seek_virtual(&mut self, vfp: VirtualFilePointer) -> Result<()>;

    /// Pointer to the next byte the reader would return
    fn virtual_position(&self) -> VirtualFilePointer;
}

/// Pack coordinates and seek in one step
///
/// Returns the pointer that was sought to.
pub fn seek_to<S: VirtualSeek + ?Sized>(
    reader: &mut S,
    block_address: i64,
    block_offset: i64,
) -> Result<VirtualFilePointer> {
    let vfp = VirtualFilePointer::from_raw(pack(block_address, block_offset)?);
    debug!("Seeking to {}", vfp);
    reader.seek_virtual(vfp)?;
    Ok(vfp)
}

/// Check that a pointer's offset fits the decompressed block it targets
///
/// An offset equal to `block_len` is allowed and denotes the end of the block.
pub fn check_block_offset(vfp: VirtualFilePointer, block_len: usize) -> Result<()> {
    let offset = vfp.block_offset();
    if offset as usize > block_len {
        return Err(VfpError::OffsetOutOfBlock { offset, block_len });
    }
    Ok(())
}
