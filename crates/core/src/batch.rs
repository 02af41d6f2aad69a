//! Photo batches and their expansion into individual placement requests.

use crate::color::Rgb;
use crate::geometry::{PrintSize, RectSize};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a photo batch.
pub type SourceId = String;

/// Opaque handle to the pixel data of a finished photo.
pub type ImageRef = String;

/// One user-declared print request: a photo, its print size and how many
/// copies to lay out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhotoBatch {
    id: SourceId,
    image: ImageRef,
    size: PrintSize,
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    quantity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    background: Option<Rgb>,
}

#[cfg(feature = "serde")]
fn default_quantity() -> usize {
    1
}

impl PhotoBatch {
    /// Creates a batch of one print.
    pub fn new(
        id: impl Into<SourceId>,
        image: impl Into<ImageRef>,
        size: impl Into<PrintSize>,
    ) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            size: size.into(),
            quantity: 1,
            background: None,
        }
    }

    /// Sets the number of copies.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets a solid background color. `None` keeps the photo's own background.
    pub fn with_background(mut self, color: Option<Rgb>) -> Self {
        self.background = color;
        self
    }

    pub fn id(&self) -> &SourceId {
        &self.id
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn print_size(&self) -> PrintSize {
        self.size
    }

    /// Physical dimensions of one print.
    pub fn dimensions(&self) -> RectSize {
        self.size.dimensions()
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    /// Checks that the print dimensions are usable.
    pub fn validate(&self) -> Result<()> {
        self.dimensions().validate()
    }
}

/// A single print waiting to be placed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementRequest {
    /// Batch this print came from.
    pub source_id: SourceId,
    /// Global position in expansion order, unique within one packing run.
    pub sequence_index: usize,
    pub size: RectSize,
    pub image: ImageRef,
    pub background: Option<Rgb>,
}

impl PlacementRequest {
    /// Identifier of the placed item this request turns into.
    pub fn item_id(&self) -> String {
        format!("{}-{}", self.source_id, self.sequence_index)
    }
}

/// Expands batches into one request per copy.
///
/// Requests follow batch order, then copy order within a batch, and carry
/// strictly increasing sequence indices starting at 0.
pub fn expand_batches(batches: &[PhotoBatch]) -> Vec<PlacementRequest> {
    let total = batches.iter().map(PhotoBatch::quantity).sum();
    let mut requests = Vec::with_capacity(total);

    for batch in batches {
        let size = batch.dimensions();
        for _ in 0..batch.quantity {
            requests.push(PlacementRequest {
                source_id: batch.id.clone(),
                sequence_index: requests.len(),
                size,
                image: batch.image.clone(),
                background: batch.background,
            });
        }
    }

    requests
}
