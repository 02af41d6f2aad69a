//! Rectangle sizes and the paper and print catalogs.
//!
//! All dimensions are millimeters. Prints are never rotated, so a size is
//! always read as (width, height) in the orientation the caller supplied.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Millimeters per inch, used by the inch-based catalog entries.
pub const MM_PER_INCH: f64 = 25.4;

/// Width and height of a rectangle in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectSize {
    /// Width in mm.
    pub width: f64,
    /// Height in mm.
    pub height: f64,
}

impl RectSize {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a size from inch dimensions.
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self::new(width * MM_PER_INCH, height * MM_PER_INCH)
    }

    /// Returns the area in mm².
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the same size with width and height swapped.
    pub fn rotated(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Returns the size in landscape orientation (width >= height).
    pub fn landscape(&self) -> Self {
        if self.width >= self.height {
            *self
        } else {
            self.rotated()
        }
    }

    /// Returns the size in portrait orientation (height >= width).
    pub fn portrait(&self) -> Self {
        if self.height >= self.width {
            *self
        } else {
            self.rotated()
        }
    }

    /// Returns the size left after removing `margin` from all four sides,
    /// or `None` if either dimension collapses to zero or below.
    pub fn inset(&self, margin: f64) -> Option<Self> {
        let width = self.width - 2.0 * margin;
        let height = self.height - 2.0 * margin;
        if width > 0.0 && height > 0.0 {
            Some(Self::new(width, height))
        } else {
            None
        }
    }

    /// Returns true if a rectangle of `other` size fits inside this one.
    pub fn contains(&self, other: &RectSize) -> bool {
        other.width <= self.width && other.height <= self.height
    }

    /// Checks that both dimensions are positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidSize(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidSize(format!(
                "height must be positive and finite, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for RectSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} mm", self.width, self.height)
    }
}

/// Paper sheets the layout can be printed on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    /// ISO A3 (297 x 420).
    A3,
    /// ISO A4 (210 x 297).
    #[default]
    A4,
    /// ISO A5 (148 x 210).
    A5,
    /// ISO A6 (105 x 148).
    A6,
    /// ISO B5 (176 x 250).
    B5,
    /// US Letter (8.5 x 11 in).
    Letter,
    /// US Legal (8.5 x 14 in).
    Legal,
    /// 4 x 6 in photo paper.
    Photo4x6,
    /// 5 x 7 in photo paper.
    Photo5x7,
    /// Any other sheet.
    Custom(RectSize),
}

impl PaperSize {
    /// Every catalog entry, excluding `Custom`.
    pub const CATALOG: [PaperSize; 9] = [
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::B5,
        Self::Letter,
        Self::Legal,
        Self::Photo4x6,
        Self::Photo5x7,
    ];

    /// Returns the portrait dimensions of the sheet.
    pub fn dimensions(&self) -> RectSize {
        match self {
            Self::A3 => RectSize::new(297.0, 420.0),
            Self::A4 => RectSize::new(210.0, 297.0),
            Self::A5 => RectSize::new(148.0, 210.0),
            Self::A6 => RectSize::new(105.0, 148.0),
            Self::B5 => RectSize::new(176.0, 250.0),
            Self::Letter => RectSize::from_inches(8.5, 11.0),
            Self::Legal => RectSize::from_inches(8.5, 14.0),
            Self::Photo4x6 => RectSize::from_inches(4.0, 6.0),
            Self::Photo5x7 => RectSize::from_inches(5.0, 7.0),
            Self::Custom(size) => *size,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::A6 => "A6",
            Self::B5 => "B5",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
            Self::Photo4x6 => "4x6 in",
            Self::Photo5x7 => "5x7 in",
            Self::Custom(_) => "Custom",
        }
    }
}

impl From<RectSize> for PaperSize {
    fn from(size: RectSize) -> Self {
        Self::Custom(size)
    }
}

/// Physical print sizes offered for a photo.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrintSize {
    /// Passport photo (35 x 45).
    Passport,
    /// 2 x 2 in visa photo (51 x 51).
    Visa,
    /// One-inch ID photo (25 x 35).
    Id1Inch,
    /// Two-inch ID photo (35 x 49).
    Id2Inch,
    /// Wallet print (64 x 89).
    Wallet,
    /// 3R print (89 x 127).
    Photo3R,
    /// 4R print (102 x 152).
    Photo4R,
    /// 5R print (127 x 178).
    Photo5R,
    /// Any other size.
    Custom(RectSize),
}

impl PrintSize {
    /// Returns the print dimensions.
    pub fn dimensions(&self) -> RectSize {
        match self {
            Self::Passport => RectSize::new(35.0, 45.0),
            Self::Visa => RectSize::new(51.0, 51.0),
            Self::Id1Inch => RectSize::new(25.0, 35.0),
            Self::Id2Inch => RectSize::new(35.0, 49.0),
            Self::Wallet => RectSize::new(64.0, 89.0),
            Self::Photo3R => RectSize::new(89.0, 127.0),
            Self::Photo4R => RectSize::new(102.0, 152.0),
            Self::Photo5R => RectSize::new(127.0, 178.0),
            Self::Custom(size) => *size,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::Visa => "Visa 2x2 in",
            Self::Id1Inch => "1-inch ID",
            Self::Id2Inch => "2-inch ID",
            Self::Wallet => "Wallet",
            Self::Photo3R => "3R",
            Self::Photo4R => "4R",
            Self::Photo5R => "5R",
            Self::Custom(_) => "Custom",
        }
    }
}

impl From<RectSize> for PrintSize {
    fn from(size: RectSize) -> Self {
        Self::Custom(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inset() {
        let a4 = PaperSize::A4.dimensions();
        let printable = a4.inset(5.0).unwrap();
        assert_relative_eq!(printable.width, 200.0);
        assert_relative_eq!(printable.height, 287.0);
    }

    #[test]
    fn test_inset_collapses() {
        let tiny = RectSize::new(20.0, 100.0);
        assert!(tiny.inset(10.0).is_none());
        assert!(tiny.inset(12.0).is_none());
        assert!(tiny.inset(9.5).is_some());
    }

    #[test]
    fn test_letter_in_mm() {
        let letter = PaperSize::Letter.dimensions();
        assert_relative_eq!(letter.width, 215.9, epsilon = 1e-9);
        assert_relative_eq!(letter.height, 279.4, epsilon = 1e-9);
    }

    #[test]
    fn test_orientation_helpers() {
        let size = RectSize::new(30.0, 40.0);
        assert_eq!(size.landscape(), RectSize::new(40.0, 30.0));
        assert_eq!(size.portrait(), size);
        assert_relative_eq!(size.area(), 1200.0);
    }

    #[test]
    fn test_contains() {
        let page = RectSize::new(200.0, 287.0);
        assert!(page.contains(&RectSize::new(200.0, 287.0)));
        assert!(!page.contains(&RectSize::new(250.0, 250.0)));
    }

    #[test]
    fn test_validation() {
        assert!(RectSize::new(10.0, 10.0).validate().is_ok());
        assert!(RectSize::new(0.0, 10.0).validate().is_err());
        assert!(RectSize::new(10.0, -1.0).validate().is_err());
        assert!(RectSize::new(f64::NAN, 10.0).validate().is_err());
        assert!(RectSize::new(10.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_catalog_is_portrait() {
        for paper in PaperSize::CATALOG {
            let dims = paper.dimensions();
            assert!(dims.height >= dims.width, "{} is not portrait", paper.name());
        }
    }

    #[test]
    fn test_custom_sizes() {
        let custom = RectSize::new(60.0, 80.0);
        assert_eq!(PrintSize::from(custom).dimensions(), custom);
        assert_eq!(PaperSize::from(custom).dimensions(), custom);
        assert_eq!(PrintSize::Passport.dimensions(), RectSize::new(35.0, 45.0));
    }
}
