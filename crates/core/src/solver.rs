//! Packer trait and layout configuration.

use crate::batch::PhotoBatch;
use crate::geometry::{PaperSize, RectSize};
use crate::result::Layout;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Margin and spacing for one packing run, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Blank border kept on all four sides of the paper.
    pub page_margin: f64,

    /// Minimum cutting gap between neighbouring prints.
    pub item_spacing: f64,
}

impl LayoutConfig {
    /// Creates a configuration with no margin and no spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.page_margin = margin;
        self
    }

    /// Sets the spacing between prints.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Checks that margin and spacing are finite and not negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.page_margin.is_finite() && self.page_margin >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "page margin must be >= 0, got {}",
                self.page_margin
            )));
        }
        if !(self.item_spacing.is_finite() && self.item_spacing >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "item spacing must be >= 0, got {}",
                self.item_spacing
            )));
        }
        Ok(())
    }
}

/// Returns the paper area left inside the margins, or `None` if the margins
/// consume the whole sheet.
pub fn printable_area(paper: &PaperSize, config: &LayoutConfig) -> Option<RectSize> {
    paper.dimensions().inset(config.page_margin)
}

/// Trait for engines that lay prints out on paper sheets.
pub trait Packer {
    /// Lays out every copy of every batch, returning the pages in creation
    /// order.
    ///
    /// An empty layout is returned when the margins leave no printable area.
    fn pack(
        &self,
        batches: &[PhotoBatch],
        paper: &PaperSize,
        config: &LayoutConfig,
    ) -> Result<Layout>;

    /// Returns true if appending `candidate` to `committed` would need more
    /// pages than `committed` alone.
    fn would_add_page(
        &self,
        committed: &[PhotoBatch],
        candidate: &PhotoBatch,
        paper: &PaperSize,
        config: &LayoutConfig,
    ) -> Result<bool> {
        let current = self.pack(committed, paper, config)?.page_count();

        let mut extended = Vec::with_capacity(committed.len() + 1);
        extended.extend_from_slice(committed);
        extended.push(candidate.clone());
        let next = self.pack(&extended, paper, config)?.page_count();

        Ok(next > current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_config_builder() {
        let config = LayoutConfig::new().with_margin(5.0).with_spacing(2.0);
        assert_relative_eq!(config.page_margin, 5.0);
        assert_relative_eq!(config.item_spacing, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(LayoutConfig::new().validate().is_ok());
        assert!(LayoutConfig::new().with_margin(-1.0).validate().is_err());
        assert!(LayoutConfig::new().with_spacing(-0.5).validate().is_err());
        assert!(LayoutConfig::new().with_margin(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_printable_area() {
        let config = LayoutConfig::new().with_margin(5.0);
        let area = printable_area(&PaperSize::A4, &config).unwrap();
        assert_relative_eq!(area.width, 200.0);
        assert_relative_eq!(area.height, 287.0);

        let config = LayoutConfig::new().with_margin(105.0);
        assert!(printable_area(&PaperSize::A4, &config).is_none());
    }
}
