//! Pointer algebra and its collaborators
//!
//! - [`constants`] - Published field layout
//! - [`error`] - Error types
//! - [`pointer`] - Packing, unpacking, ordering, adjacency
//! - [`span`] - Pointer ranges and coalescing
//! - [`seek`] - Contract for readers that seek by pointer
//! - [`line_filter`] - Meta/header line classification for text formats

pub mod constants;
pub mod error;
pub mod line_filter;
pub mod pointer;
pub mod seek;
pub mod span;
