//! Error types for photopack.

use thiserror::Error;

/// Result type alias using the photopack error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the layout engine.
///
/// A paper sheet that collapses to nothing once margins are removed is not
/// an error: packing returns an empty layout in that case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A single print is larger than the printable area of the paper, so no
    /// amount of new pages could ever hold it.
    #[error(
        "print '{source_id}' ({width}x{height} mm) does not fit the printable area \
         ({printable_width}x{printable_height} mm)"
    )]
    Unsatisfiable {
        /// Batch the offending print came from.
        source_id: String,
        /// Requested print width in mm.
        width: f64,
        /// Requested print height in mm.
        height: f64,
        /// Printable width of the paper in mm.
        printable_width: f64,
        /// Printable height of the paper in mm.
        printable_height: f64,
    },

    /// A print or paper dimension is not a positive finite number.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Margin or spacing is negative or not finite.
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// A background color could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl Error {
    /// Returns true if this error names a print that cannot fit the paper.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::Unsatisfiable { .. })
    }
}
