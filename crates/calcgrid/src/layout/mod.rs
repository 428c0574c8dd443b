//! Calculator grid layout
//!
//! A fixed 5x7 grid where the cell at (1,1) spans columns 1-5 of the first
//! row, leaving `5*7 - 4 = 31` addressable slots: one display and thirty keys.

mod calc_layout;
mod geometry;
mod position;

pub use calc_layout::{CalcLayout, Placement, COLUMNS, DISPLAY_POSITION, DISPLAY_SPAN, ROWS};
pub use geometry::{Insets, Rect, Size, SizeHints, SizeKind, WidgetMetrics};
pub use position::{Constraint, GridPosition};

use thiserror::Error;

/// Result type for layout configuration
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Invalid layout constraints. All variants are configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Row or column outside the grid
    #[error("Invalid constraint: {position} is outside the 5x7 grid")]
    OutOfRange {
        /// Rejected position
        position: GridPosition,
    },

    /// Position covered by the merged display cell
    #[error("Invalid constraint: cannot add component on positions 2 to 5 in row 1, got {position}")]
    Reserved {
        /// Rejected position
        position: GridPosition,
    },

    /// Position already taken
    #[error("Invalid constraint: component at {position} already exists: {existing}")]
    Occupied {
        /// Rejected position
        position: GridPosition,
        /// Debug rendering of the component already placed there
        existing: String,
    },

    /// Constraint string not of the form `"<row>,<column>"`
    #[error("Invalid constraint: '{input}' must contain one comma delimiting two integers")]
    Malformed {
        /// Rejected input
        input: String,
    },
}

impl LayoutError {
    /// Create a malformed constraint error
    #[must_use]
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }
}
