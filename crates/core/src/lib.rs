//! # photopack core
//!
//! Shared types and traits for the photopack sheet layout engine.
//!
//! Photo prints of fixed physical size are requested in batches
//! ([`PhotoBatch`]). A [`Packer`] lays every copy out on paper sheets
//! ([`PaperSize`]) with a page margin and a cutting gap ([`LayoutConfig`]),
//! producing a [`Layout`] of [`Page`]s holding [`PlacedItem`]s.
//!
//! All dimensions are millimeters. Positions are measured from the paper's
//! top-left corner.
//!
//! ## Configuration
//!
//! ```rust
//! use photopack_core::{LayoutConfig, PaperSize, printable_area};
//!
//! let config = LayoutConfig::new().with_margin(5.0).with_spacing(2.0);
//! let area = printable_area(&PaperSize::A4, &config).unwrap();
//! assert_eq!((area.width, area.height), (200.0, 287.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod batch;
pub mod color;
pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;

// Re-exports
pub use batch::{expand_batches, ImageRef, PhotoBatch, PlacementRequest, SourceId};
pub use color::Rgb;
pub use error::{Error, Result};
pub use geometry::{PaperSize, PrintSize, RectSize, MM_PER_INCH};
pub use result::{Layout, LayoutSummary, Page, PlacedItem};
pub use solver::{printable_area, LayoutConfig, Packer};
