//! The calculator layout engine

use super::{
    Constraint, GridPosition, Insets, LayoutError, LayoutResult, Rect, Size, SizeHints, SizeKind,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// Number of grid rows
pub const ROWS: i32 = 5;
/// Number of grid columns
pub const COLUMNS: i32 = 7;
/// Number of columns the display cell spans
pub const DISPLAY_SPAN: i32 = 5;
/// Anchor of the merged display cell
pub const DISPLAY_POSITION: GridPosition = GridPosition::new(1, 1);

/// Where one component ended up after a layout pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement<H> {
    /// Component handle
    pub handle: H,
    /// Grid cell
    pub position: GridPosition,
    /// Pixel bounds inside the container
    pub bounds: Rect,
}

/// Lays out up to 31 components on the 5x7 calculator grid.
///
/// `H` is an opaque component handle; the layout never inspects it beyond
/// equality, hashing and its `Debug` form in error messages.
#[derive(Debug, Clone)]
pub struct CalcLayout<H> {
    hgap: i32,
    vgap: i32,
    cells: BTreeMap<GridPosition, H>,
    positions: HashMap<H, GridPosition>,
    max_preferred: Size,
}

impl<H> Default for CalcLayout<H>
where
    H: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::with_gaps(0, 0)
    }
}

impl<H> CalcLayout<H>
where
    H: Clone + Eq + Hash + fmt::Debug,
{
    /// Creates a layout with the same horizontal and vertical gap
    #[must_use]
    pub fn new(gap: i32) -> Self {
        Self::with_gaps(gap, gap)
    }

    /// Creates a layout with separate horizontal and vertical gaps
    #[must_use]
    pub fn with_gaps(hgap: i32, vgap: i32) -> Self {
        Self {
            hgap,
            vgap,
            cells: BTreeMap::new(),
            positions: HashMap::new(),
            max_preferred: Size::ZERO,
        }
    }

    /// Horizontal gap in pixels
    #[must_use]
    pub fn hgap(&self) -> i32 {
        self.hgap
    }

    /// Vertical gap in pixels
    #[must_use]
    pub fn vgap(&self) -> i32 {
        self.vgap
    }

    /// Number of placed components
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if nothing is placed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Largest preferred size seen among added components
    #[must_use]
    pub fn max_preferred_size(&self) -> Size {
        self.max_preferred
    }

    /// Position of a component
    #[must_use]
    pub fn position_of(&self, handle: &H) -> Option<GridPosition> {
        self.positions.get(handle).copied()
    }

    /// Component at a position
    #[must_use]
    pub fn component_at(&self, position: GridPosition) -> Option<&H> {
        self.cells.get(&position)
    }

    /// Placed components in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, &H)> {
        self.cells.iter().map(|(&position, handle)| (position, handle))
    }

    // ===== Constraints =====

    /// Places a component.
    ///
    /// Fails if the position is outside the grid, under the display cell,
    /// already taken, or (for the text form) malformed. Re-adding a placed
    /// handle moves it once the new position validates.
    pub fn add_component<W>(
        &mut self,
        handle: H,
        constraint: impl Into<Constraint>,
        widget: &W,
    ) -> LayoutResult<GridPosition>
    where
        W: SizeHints + ?Sized,
    {
        let constraint: Constraint = constraint.into();
        let position = constraint.resolve()?;
        self.validate(position)?;

        if let Some(previous) = self.positions.remove(&handle) {
            self.cells.remove(&previous);
        }
        debug!(?handle, %position, "added layout component");
        self.cells.insert(position, handle.clone());
        self.positions.insert(handle, position);

        let preferred = widget.preferred_size();
        self.max_preferred = self.max_preferred.max(preferred);
        trace!(?preferred, max = ?self.max_preferred, "updated max preferred size");
        Ok(position)
    }

    /// Removes a component, returning where it was
    pub fn remove_component(&mut self, handle: &H) -> Option<GridPosition> {
        let position = self.positions.remove(handle)?;
        self.cells.remove(&position);
        Some(position)
    }

    fn validate(&self, position: GridPosition) -> LayoutResult<()> {
        if !position.is_in_grid() {
            return Err(LayoutError::OutOfRange { position });
        }
        if position.is_reserved() {
            return Err(LayoutError::Reserved { position });
        }
        if let Some(existing) = self.cells.get(&position) {
            return Err(LayoutError::Occupied {
                position,
                existing: format!("{existing:?}"),
            });
        }
        Ok(())
    }

    // ===== Sizing =====

    /// Container size needed to give every cell the largest selected hint.
    ///
    /// `7w + 6*hgap` by `5h + 4*vgap`, plus insets, where `w` and `h` are the
    /// largest width and height over `children`.
    pub fn aggregate_size<'a, W, I>(&self, children: I, kind: SizeKind, insets: Insets) -> Size
    where
        W: SizeHints + ?Sized + 'a,
        I: IntoIterator<Item = &'a W>,
    {
        let cell = children
            .into_iter()
            .map(|child| kind.select(child))
            .fold(Size::ZERO, Size::max);

        Size::new(
            span(cell.width, COLUMNS, self.hgap).saturating_add(insets.horizontal()),
            span(cell.height, ROWS, self.vgap).saturating_add(insets.vertical()),
        )
    }

    /// [`aggregate_size`](Self::aggregate_size) over preferred sizes
    pub fn preferred_layout_size<'a, W, I>(&self, children: I, insets: Insets) -> Size
    where
        W: SizeHints + ?Sized + 'a,
        I: IntoIterator<Item = &'a W>,
    {
        self.aggregate_size(children, SizeKind::Preferred, insets)
    }

    /// [`aggregate_size`](Self::aggregate_size) over minimum sizes
    pub fn minimum_layout_size<'a, W, I>(&self, children: I, insets: Insets) -> Size
    where
        W: SizeHints + ?Sized + 'a,
        I: IntoIterator<Item = &'a W>,
    {
        self.aggregate_size(children, SizeKind::Minimum, insets)
    }

    /// [`aggregate_size`](Self::aggregate_size) over maximum sizes
    pub fn maximum_layout_size<'a, W, I>(&self, children: I, insets: Insets) -> Size
    where
        W: SizeHints + ?Sized + 'a,
        I: IntoIterator<Item = &'a W>,
    {
        self.aggregate_size(children, SizeKind::Maximum, insets)
    }

    // ===== Layout =====

    /// Size of one cell inside a container.
    ///
    /// Integer division: leftover pixels stay unused at the right and bottom.
    #[must_use]
    pub fn cell_size(&self, container: Size, insets: Insets) -> Size {
        let width = container.width.saturating_sub(insets.horizontal());
        let height = container.height.saturating_sub(insets.vertical());
        Size::new(
            width.saturating_sub((COLUMNS - 1).saturating_mul(self.hgap)) / COLUMNS,
            height.saturating_sub((ROWS - 1).saturating_mul(self.vgap)) / ROWS,
        )
    }

    /// Computes the bounds of every placed component, in row-major order
    #[must_use]
    pub fn layout_container(&self, container: Size, insets: Insets) -> Vec<Placement<H>> {
        let cell = self.cell_size(container, insets);
        debug!(?container, ?cell, components = self.cells.len(), "layout pass");

        self.cells
            .iter()
            .map(|(&position, handle)| {
                let x = offset(position.column, cell.width, self.hgap, insets.left);
                let y = offset(position.row, cell.height, self.vgap, insets.top);
                let width = if position == DISPLAY_POSITION {
                    span(cell.width, DISPLAY_SPAN, self.hgap)
                } else {
                    cell.width
                };
                Placement {
                    handle: handle.clone(),
                    position,
                    bounds: Rect::new(x, y, width, cell.height),
                }
            })
            .collect()
    }
}

/// Length of `count` cells of `cell` pixels separated by `gap`
fn span(cell: i32, count: i32, gap: i32) -> i32 {
    cell.saturating_mul(count)
        .saturating_add(gap.saturating_mul(count - 1))
}

/// Leading edge of the 1-based cell `index`
fn offset(index: i32, cell: i32, gap: i32, inset: i32) -> i32 {
    (index - 1)
        .saturating_mul(cell.saturating_add(gap))
        .saturating_add(inset)
}
