//! Sizes, rectangles and widget size hints

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a size
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Container border widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Top inset
    pub top: i32,
    /// Left inset
    pub left: i32,
    /// Bottom inset
    pub bottom: i32,
    /// Right inset
    pub right: i32,
}

impl Insets {
    /// No insets
    pub const ZERO: Self = Self::uniform(0);

    /// Creates insets
    #[must_use]
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on all four sides
    #[must_use]
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// `left + right`, saturating
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// `top + bottom`, saturating
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// A positioned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Size of the rectangle
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Size queries a placed widget answers. The layout only reads them.
pub trait SizeHints {
    /// Preferred size
    fn preferred_size(&self) -> Size;

    /// Minimum size; defaults to the preferred size
    fn minimum_size(&self) -> Size {
        self.preferred_size()
    }

    /// Maximum size; defaults to the preferred size
    fn maximum_size(&self) -> Size {
        self.preferred_size()
    }
}

/// A widget whose three size hints are all the same size
impl SizeHints for Size {
    fn preferred_size(&self) -> Size {
        *self
    }
}

/// Which size hint an aggregate size is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKind {
    /// [`SizeHints::preferred_size`]
    Preferred,
    /// [`SizeHints::minimum_size`]
    Minimum,
    /// [`SizeHints::maximum_size`]
    Maximum,
}

impl SizeKind {
    /// Reads the selected hint from a widget
    #[must_use]
    pub fn select<W: SizeHints + ?Sized>(self, widget: &W) -> Size {
        match self {
            Self::Preferred => widget.preferred_size(),
            Self::Minimum => widget.minimum_size(),
            Self::Maximum => widget.maximum_size(),
        }
    }
}

/// Explicit size hints, as loaded from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WidgetMetrics {
    /// Preferred size
    pub preferred: Size,
    /// Minimum size
    pub minimum: Size,
    /// Maximum size
    pub maximum: Size,
}

impl WidgetMetrics {
    /// Metrics where all three hints are `size`
    #[must_use]
    pub const fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: size,
            maximum: size,
        }
    }
}

impl SizeHints for WidgetMetrics {
    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn maximum_size(&self) -> Size {
        self.maximum
    }
}
