//! Packed layout representation.

use crate::batch::{ImageRef, SourceId};
use crate::color::Rgb;
use crate::geometry::RectSize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A print positioned on a page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// Unique identifier, `{source_id}-{sequence_index}`.
    pub id: String,
    pub source_id: SourceId,
    pub image: ImageRef,
    /// Left edge in mm from the paper's left edge.
    pub x: f64,
    /// Top edge in mm from the paper's top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub background: Option<Rgb>,
}

impl PlacedItem {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the interiors of the two rectangles intersect.
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &PlacedItem) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Distance between the two rectangles along the axis that separates
    /// them. Zero when they touch or overlap.
    pub fn gap_to(&self, other: &PlacedItem) -> f64 {
        let dx = (other.x - self.right()).max(self.x - other.right()).max(0.0);
        let dy = (other.y - self.bottom()).max(self.y - other.bottom()).max(0.0);
        dx.max(dy)
    }
}

/// One paper sheet and the prints placed on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    /// 1-based page number in creation order.
    pub page_number: usize,
    /// Full paper width in mm.
    pub width: f64,
    /// Full paper height in mm.
    pub height: f64,
    /// Prints in placement order.
    pub items: Vec<PlacedItem>,
}

impl Page {
    /// Creates an empty page for the given paper.
    pub fn new(page_number: usize, paper: RectSize) -> Self {
        Self {
            page_number,
            width: paper.width,
            height: paper.height,
            items: Vec::new(),
        }
    }

    pub fn paper(&self) -> RectSize {
        RectSize::new(self.width, self.height)
    }

    /// Total print area on this page in mm².
    pub fn item_area(&self) -> f64 {
        self.items.iter().map(PlacedItem::area).sum()
    }

    /// Fraction of the paper covered by prints (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let paper = self.width * self.height;
        if paper > 0.0 {
            self.item_area() / paper
        } else {
            0.0
        }
    }
}

/// Result of one packing run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Pages in creation order.
    pub pages: Vec<Page>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no page was produced, either because there was nothing to
    /// place or because the margins left no printable area.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of placed prints across all pages.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    /// Iterates over `(page_number, item)` in page then placement order.
    pub fn items(&self) -> impl Iterator<Item = (usize, &PlacedItem)> {
        self.pages
            .iter()
            .flat_map(|page| page.items.iter().map(move |item| (page.page_number, item)))
    }

    /// Finds a placed item by id, returning its page number with it.
    pub fn find(&self, id: &str) -> Option<(usize, &PlacedItem)> {
        self.items().find(|(_, item)| item.id == id)
    }

    /// Mean utilization over all pages.
    pub fn utilization(&self) -> f64 {
        if self.pages.is_empty() {
            return 0.0;
        }
        self.pages.iter().map(Page::utilization).sum::<f64>() / self.pages.len() as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }
}

/// Summary statistics for a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSummary {
    /// Number of pages used.
    pub pages: usize,
    /// Number of prints placed.
    pub items: usize,
    /// Mean page utilization percentage.
    pub utilization_percent: f64,
    /// Prints on the fullest page.
    pub max_items_per_page: usize,
}

impl From<&Layout> for LayoutSummary {
    fn from(layout: &Layout) -> Self {
        Self {
            pages: layout.page_count(),
            items: layout.item_count(),
            utilization_percent: layout.utilization() * 100.0,
            max_items_per_page: layout
                .pages
                .iter()
                .map(|p| p.items.len())
                .max()
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn item(id: &str, x: f64, y: f64, w: f64, h: f64) -> PlacedItem {
        PlacedItem {
            id: id.to_string(),
            source_id: "s".to_string(),
            image: "img".to_string(),
            x,
            y,
            width: w,
            height: h,
            background: None,
        }
    }

    #[test]
    fn test_overlap_and_gap() {
        let a = item("a", 0.0, 0.0, 10.0, 10.0);
        let touching = item("b", 10.0, 0.0, 10.0, 10.0);
        let apart = item("c", 13.0, 0.0, 10.0, 10.0);
        let inside = item("d", 5.0, 5.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching));
        assert_relative_eq!(a.gap_to(&touching), 0.0);
        assert_relative_eq!(a.gap_to(&apart), 3.0);
        assert_relative_eq!(apart.gap_to(&a), 3.0);
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_page_utilization() {
        let mut page = Page::new(1, RectSize::new(100.0, 100.0));
        assert_relative_eq!(page.utilization(), 0.0);
        page.items.push(item("a", 0.0, 0.0, 50.0, 50.0));
        assert_relative_eq!(page.utilization(), 0.25);
    }

    #[test]
    fn test_layout_queries() {
        let mut first = Page::new(1, RectSize::new(100.0, 100.0));
        first.items.push(item("a-0", 0.0, 0.0, 50.0, 50.0));
        first.items.push(item("a-1", 50.0, 0.0, 50.0, 50.0));
        let mut second = Page::new(2, RectSize::new(100.0, 100.0));
        second.items.push(item("a-2", 0.0, 0.0, 50.0, 50.0));
        let layout = Layout {
            pages: vec![first, second],
        };

        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.item_count(), 3);
        assert_eq!(layout.find("a-2").map(|(page, _)| page), Some(2));
        assert!(layout.find("missing").is_none());
        assert_eq!(layout.utilization_percent(), "37.5%");

        let summary = LayoutSummary::from(&layout);
        assert_eq!(summary.pages, 2);
        assert_eq!(summary.items, 3);
        assert_eq!(summary.max_items_per_page, 2);
        assert_relative_eq!(summary.utilization_percent, 37.5);
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.item_count(), 0);
        assert_relative_eq!(layout.utilization(), 0.0);
    }
}
