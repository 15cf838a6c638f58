//! Mosaic layout.
//!
//! Column geometry is derived once from the first card; placements are then planned column by
//! column from an explicit [`crate::Rng64`].

/// Column pitch, count and x-offsets.
pub mod columns;
/// Per-column vertical placement planning.
pub mod placement;
