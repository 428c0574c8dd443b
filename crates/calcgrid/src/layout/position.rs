//! Grid positions and constraint parsing

use super::{LayoutError, LayoutResult, COLUMNS, DISPLAY_SPAN, ROWS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 1-indexed `(row, column)` cell of the calculator grid.
///
/// Construction does not validate; [`CalcLayout`](super::CalcLayout) checks
/// range and reserved cells when a component is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    /// Row, 1 to 5
    pub row: i32,
    /// Column, 1 to 7
    pub column: i32,
}

impl GridPosition {
    /// Creates a position
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// True if the position lies inside the 5x7 grid
    #[must_use]
    pub const fn is_in_grid(&self) -> bool {
        self.row >= 1 && self.row <= ROWS && self.column >= 1 && self.column <= COLUMNS
    }

    /// True for row 1, columns 2-5, the cells under the merged display
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.row == 1 && self.column >= 2 && self.column <= DISPLAY_SPAN
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Parses `"<row>,<column>"`, allowing whitespace around each number
impl FromStr for GridPosition {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        let mut parts = s.split(',');
        let (Some(row), Some(column), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LayoutError::malformed(s));
        };
        let row = row.trim().parse().map_err(|_| LayoutError::malformed(s))?;
        let column = column.trim().parse().map_err(|_| LayoutError::malformed(s))?;
        Ok(Self::new(row, column))
    }
}

impl From<(i32, i32)> for GridPosition {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

/// Placement constraint: a position or its string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Already-parsed position
    Position(GridPosition),
    /// `"<row>,<column>"` text
    Text(String),
}

impl Constraint {
    /// Resolves the constraint to a position, parsing the text form
    pub fn resolve(self) -> LayoutResult<GridPosition> {
        match self {
            Self::Position(position) => Ok(position),
            Self::Text(text) => text.parse(),
        }
    }
}

impl From<GridPosition> for Constraint {
    fn from(position: GridPosition) -> Self {
        Self::Position(position)
    }
}

impl From<(i32, i32)> for Constraint {
    fn from(position: (i32, i32)) -> Self {
        Self::Position(position.into())
    }
}

impl From<&str> for Constraint {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Constraint {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
