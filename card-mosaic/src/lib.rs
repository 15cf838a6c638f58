//! card-mosaic builds decorative backgrounds out of card-face images.
//!
//! The pipeline is strictly sequential:
//!
//! - Load a directory of transparent cards and normalize them to one height ([`load_cards`])
//! - Plan columns of vertically jittered placements from an explicit [`Rng64`] ([`plan_mosaic`])
//! - Alpha-composite the placements onto a transparent [`Canvas`] ([`composite`])
//! - Write the canvas to disk ([`write_canvas`])
//!
//! [`MosaicSession`] drives all four stages from a single [`MosaicOpts`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Card loading and normalization.
pub mod assets;
/// Canvas serialization.
pub mod encode;
/// Column geometry and placement planning.
pub mod layout;
/// Canvas storage and compositing.
pub mod render;
/// End-to-end generation driver.
pub mod session;

pub use crate::foundation::core::{CanvasSize, CardSize};
pub use crate::foundation::error::{MosaicError, MosaicResult};
pub use crate::foundation::rng::Rng64;

pub use crate::assets::cards::{CardImage, DEFAULT_CARD_EXTENSION, list_card_paths, load_cards};
pub use crate::encode::writer::write_canvas;
pub use crate::layout::columns::{ColumnGeometry, column_offsets};
pub use crate::layout::placement::{
    ColumnPlan, MosaicLayout, Placement, plan_column, plan_mosaic,
};
pub use crate::render::canvas::Canvas;
pub use crate::render::composite::composite;
pub use crate::session::generate::{
    MosaicOpts, MosaicSession, MosaicStats, RenderedMosaic, generate,
};
