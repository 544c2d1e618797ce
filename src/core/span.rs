//! Half-open ranges of virtual file pointers
//!
//! An index answers a query with a list of spans; a reader then decompresses
//! the blocks each span touches. Spans whose end and next start fall in the
//! same or consecutive blocks are cheaper to read as one, so [`coalesce`]
//! merges them.

use crate::core::error::{ArgumentError, Result, VfpError};
use crate::core::pointer::VirtualFilePointer;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Range `[start, end)` of stream positions
///
/// Deserialization goes through [`VirtualSpan::new`], so stored spans are
/// held to the same ordering as constructed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct VirtualSpan {
    start: VirtualFilePointer,
    end: VirtualFilePointer,
}

/// Unchecked wire form of a span
#[derive(Deserialize)]
struct RawSpan {
    start: VirtualFilePointer,
    end: VirtualFilePointer,
}

impl TryFrom<RawSpan> for VirtualSpan {
    type Error = VfpError;

    fn try_from(raw: RawSpan) -> Result<Self> {
        VirtualSpan::new(raw.start, raw.end)
    }
}

impl VirtualSpan {
    /// Create a span
    ///
    /// # Errors
    ///
    /// `InvertedSpan` if `end` is earlier in the stream than `start`.
    pub fn new(start: VirtualFilePointer, end: VirtualFilePointer) -> Result<Self> {
        if end < start {
            return Err(ArgumentError::InvertedSpan {
                start: start.as_u64(),
                end: end.as_u64(),
            }
            .into());
        }
        Ok(VirtualSpan { start, end })
    }

    pub fn start(&self) -> VirtualFilePointer {
        self.start
    }

    pub fn end(&self) -> VirtualFilePointer {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, vfp: VirtualFilePointer) -> bool {
        self.start <= vfp && vfp < self.end
    }

    pub fn overlaps(&self, other: &VirtualSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `next` starts in the block this span ends in, or the block after
    ///
    /// Directional, like [`VirtualFilePointer::is_same_or_adjacent_block`].
    pub fn is_adjacent_to(&self, next: &VirtualSpan) -> bool {
        self.end.is_same_or_adjacent_block(next.start)
    }

    /// Number of whole blocks between start and end, counting both ends
    pub fn block_count(&self) -> u64 {
        self.end.block_address() - self.start.block_address() + 1
    }
}

impl fmt::Display for VirtualSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.block_address(),
            self.start.block_offset(),
            self.end.block_address(),
            self.end.block_offset()
        )
    }
}

/// Sort and merge spans into the fewest reads
///
/// Spans ending at or before `min_start` are dropped. Remaining spans that
/// overlap, or where the next span starts in the same or the following block
/// as the previous one ends, are merged.
pub fn coalesce(
    spans: impl IntoIterator<Item = VirtualSpan>,
    min_start: Option<VirtualFilePointer>,
) -> Vec<VirtualSpan> {
    let mut sorted: Vec<VirtualSpan> = spans.into_iter().collect();
    let input_len = sorted.len();
    sorted.sort_by_key(|span| (span.start, span.end));

    let mut merged: Vec<VirtualSpan> = Vec::with_capacity(sorted.len());
    for span in sorted {
        if min_start.is_some_and(|min| span.end <= min) {
            continue;
        }

        if let Some(last) = merged.last_mut() {
            if last.overlaps(&span) || last.is_adjacent_to(&span) {
                if span.end > last.end {
                    last.end = span.end;
                }
                continue;
            }
        }
        merged.push(span);
    }

    debug!("Coalesced {} spans into {}", input_len, merged.len());
    merged
}
