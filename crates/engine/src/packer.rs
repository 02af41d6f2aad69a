//! First-fit multi-page packing engine.

use crate::grid::{checked_grid_extent, fits_extent, PageGrid};
use photopack_core::{
    expand_batches, printable_area, Error, Layout, LayoutConfig, Packer, PaperSize, PhotoBatch,
    PlacementRequest, RectSize, Result,
};

/// Lays prints out page by page with a row-major first-fit scan.
///
/// Each request goes on the first existing page that has room, pages being
/// tried in creation order. A new page is opened only when no existing page
/// accepts the request. The engine keeps no state between calls: identical
/// input always yields an identical layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackingEngine;

impl PackingEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Packs already expanded requests onto pages of `paper`.
    ///
    /// `printable` must be the paper inset by the configured margin.
    fn pack_requests(
        &self,
        requests: &[PlacementRequest],
        paper: RectSize,
        printable: RectSize,
        config: &LayoutConfig,
    ) -> Result<Layout> {
        let extent = checked_grid_extent(printable)?;
        let mut grids: Vec<PageGrid> = Vec::new();

        for request in requests {
            if !fits_extent(extent, request.size) {
                log::warn!(
                    "print '{}' ({}) does not fit the printable area ({})",
                    request.source_id,
                    request.size,
                    printable
                );
                return Err(unsatisfiable(request, printable));
            }

            let placed = grids
                .iter_mut()
                .any(|grid| grid.try_place(request).is_some());
            if placed {
                continue;
            }

            let page_number = grids.len() + 1;
            log::debug!("opening page {} for {}", page_number, request.item_id());
            let mut grid = PageGrid::new(page_number, paper, config)?;
            if grid.try_place(request).is_none() {
                return Err(unsatisfiable(request, printable));
            }
            grids.push(grid);
        }

        let pages = grids.into_iter().map(PageGrid::into_page).collect();
        Ok(Layout { pages })
    }
}

fn unsatisfiable(request: &PlacementRequest, printable: RectSize) -> Error {
    Error::Unsatisfiable {
        source_id: request.source_id.clone(),
        width: request.size.width,
        height: request.size.height,
        printable_width: printable.width,
        printable_height: printable.height,
    }
}

impl Packer for PackingEngine {
    fn pack(
        &self,
        batches: &[PhotoBatch],
        paper: &PaperSize,
        config: &LayoutConfig,
    ) -> Result<Layout> {
        config.validate()?;
        let paper_size = paper.dimensions();
        paper_size.validate()?;
        for batch in batches {
            batch.validate()?;
        }

        let Some(printable) = printable_area(paper, config) else {
            log::warn!(
                "margin {} mm leaves no printable area on {} paper ({})",
                config.page_margin,
                paper.name(),
                paper_size
            );
            return Ok(Layout::new());
        };

        let requests = expand_batches(batches);
        let layout = self.pack_requests(&requests, paper_size, printable, config)?;

        log::debug!(
            "packed {} prints from {} batches onto {} pages ({} utilization)",
            layout.item_count(),
            batches.len(),
            layout.page_count(),
            layout.utilization_percent()
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photopack_core::PrintSize;

    fn a4_config() -> LayoutConfig {
        LayoutConfig::new().with_margin(5.0).with_spacing(2.0)
    }

    fn photos(id: &str, w: f64, h: f64, quantity: usize) -> PhotoBatch {
        PhotoBatch::new(id, format!("{}.png", id), RectSize::new(w, h)).with_quantity(quantity)
    }

    #[test]
    fn test_empty_input() {
        let layout = PackingEngine::new()
            .pack(&[], &PaperSize::A4, &a4_config())
            .unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_page() {
        let batches = vec![photos("p", 30.0, 40.0, 35)];
        let layout = PackingEngine::new()
            .pack(&batches, &PaperSize::A4, &a4_config())
            .unwrap();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.item_count(), 35);
    }

    #[test]
    fn test_overflow_to_second_page() {
        let batches = vec![photos("p", 30.0, 40.0, 40)];
        let layout = PackingEngine::new()
            .pack(&batches, &PaperSize::A4, &a4_config())
            .unwrap();
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.pages[0].items.len(), 36);
        assert_eq!(layout.pages[1].items.len(), 4);
        assert_eq!(layout.pages[1].items[0].id, "p-36");
    }

    #[test]
    fn test_unsatisfiable() {
        let batches = vec![photos("ok", 30.0, 40.0, 2), photos("poster", 250.0, 250.0, 1)];
        let err = PackingEngine::new()
            .pack(&batches, &PaperSize::A4, &a4_config())
            .unwrap_err();
        match err {
            Error::Unsatisfiable {
                source_id,
                printable_width,
                ..
            } => {
                assert_eq!(source_id, "poster");
                assert_eq!(printable_width, 200.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_margins_consume_paper() {
        let batches = vec![PhotoBatch::new("p", "p.png", PrintSize::Passport)];
        let config = LayoutConfig::new().with_margin(150.0);
        let layout = PackingEngine::new()
            .pack(&batches, &PaperSize::A4, &config)
            .unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let engine = PackingEngine::new();
        let bad_config = LayoutConfig::new().with_spacing(-1.0);
        assert!(matches!(
            engine.pack(&[], &PaperSize::A4, &bad_config),
            Err(Error::InvalidConfig(_))
        ));

        let bad_batch = vec![photos("p", -3.0, 40.0, 1)];
        assert!(matches!(
            engine.pack(&bad_batch, &PaperSize::A4, &a4_config()),
            Err(Error::InvalidSize(_))
        ));
    }

    #[test]
    fn test_huge_custom_paper_is_rejected() {
        let batches = vec![photos("p", 30.0, 40.0, 1)];
        let engine = PackingEngine::new();

        let overflowing = PaperSize::Custom(RectSize::new(1e10, 1e10));
        assert!(matches!(
            engine.pack(&batches, &overflowing, &LayoutConfig::new()),
            Err(Error::InvalidSize(_))
        ));

        let wall = PaperSize::Custom(RectSize::new(100_000.0, 100_000.0));
        assert!(matches!(
            engine.pack(&batches, &wall, &LayoutConfig::new()),
            Err(Error::InvalidSize(_))
        ));
    }

    #[test]
    fn test_earlier_pages_are_refilled() {
        // Page 1 fills with a large print, page 2 is opened for the second
        // large one, then small prints go back to the gap on page 1.
        let batches = vec![photos("big", 150.0, 280.0, 2), photos("small", 40.0, 40.0, 1)];
        let layout = PackingEngine::new()
            .pack(&batches, &PaperSize::A4, &a4_config())
            .unwrap();
        assert_eq!(layout.page_count(), 2);
        let (page, item) = layout.find("small-2").unwrap();
        assert_eq!(page, 1);
        assert_eq!(item.x, 5.0 + 152.0);
    }
}
