//! # photopack engine
//!
//! Lays photo prints out on paper sheets.
//!
//! Prints are placed one at a time with a first-fit scan over a 1mm
//! occupancy grid: rows top to bottom, columns left to right, taking the first
//! position where the print and its cutting gap fit. When no existing page has
//! room a new page is opened. There is no rotation and no search for a better
//! global arrangement, so the result is fully determined by the input order.
//!
//! ## Quick Start
//!
//! ```rust
//! use photopack_engine::{LayoutConfig, Packer, PackingEngine, PaperSize, PhotoBatch, PrintSize};
//!
//! let batches = vec![
//!     PhotoBatch::new("passport", "passport.png", PrintSize::Passport).with_quantity(8),
//!     PhotoBatch::new("wallet", "wallet.png", PrintSize::Wallet).with_quantity(2),
//! ];
//! let config = LayoutConfig::new().with_margin(5.0).with_spacing(2.0);
//!
//! let layout = PackingEngine::new()
//!     .pack(&batches, &PaperSize::A4, &config)
//!     .unwrap();
//!
//! assert_eq!(layout.item_count(), 10);
//! for page in &layout.pages {
//!     for item in &page.items {
//!         println!("page {}: {} at ({}, {})", page.page_number, item.id, item.x, item.y);
//!     }
//! }
//! ```
//!
//! ## Page-growth preview
//!
//! ```rust
//! use photopack_engine::{LayoutConfig, Packer, PackingEngine, PaperSize, PhotoBatch, RectSize};
//!
//! let engine = PackingEngine::new();
//! let config = LayoutConfig::new().with_margin(5.0).with_spacing(2.0);
//! let print = RectSize::new(30.0, 40.0);
//! let committed = vec![PhotoBatch::new("a", "a.png", print).with_quantity(36)];
//! let one_more = PhotoBatch::new("b", "b.png", print);
//!
//! assert!(engine.would_add_page(&committed, &one_more, &PaperSize::A4, &config).unwrap());
//! ```

pub mod grid;
pub mod packer;

// Re-exports
pub use grid::{PageGrid, MAX_GRID_CELLS};
pub use packer::PackingEngine;
pub use photopack_core::{
    expand_batches, printable_area, Error, ImageRef, Layout, LayoutConfig, LayoutSummary, Packer,
    Page, PaperSize, PhotoBatch, PlacedItem, PlacementRequest, PrintSize, RectSize, Result, Rgb,
    SourceId,
};
