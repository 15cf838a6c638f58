//! Canvas serialization.
//!
//! The output format follows the file extension of the destination path.

/// Image file writer.
pub mod writer;
