//! Viewport and coordinate types.
//!
//! The particle field works in a virtual pixel space so that its
//! pixel-denominated constants hold on any terminal. [`CellMetrics`]
//! converts between terminal cells and that space.

/// A point in virtual pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Viewport dimensions in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in square pixels.
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

/// Pixel size of a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
        }
    }
}

impl CellMetrics {
    /// Create metrics, falling back to the defaults for zero dimensions.
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        let fallback = Self::default();
        Self {
            cell_width: if cell_width == 0 {
                fallback.cell_width
            } else {
                cell_width
            },
            cell_height: if cell_height == 0 {
                fallback.cell_height
            } else {
                cell_height
            },
        }
    }

    /// Derive metrics from a reported window size in pixels.
    ///
    /// Returns `None` when the terminal does not report pixel dimensions.
    pub fn from_window(columns: u16, rows: u16, width_px: u16, height_px: u16) -> Option<Self> {
        if columns == 0 || rows == 0 || width_px == 0 || height_px == 0 {
            return None;
        }
        let cell_width = width_px / columns;
        let cell_height = height_px / rows;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        Some(Self {
            cell_width,
            cell_height,
        })
    }

    /// Viewport covering a terminal of the given size.
    pub fn viewport(self, columns: u16, rows: u16) -> Viewport {
        Viewport::new(
            f64::from(columns) * f64::from(self.cell_width),
            f64::from(rows) * f64::from(self.cell_height),
        )
    }

    /// Pixel centre of a terminal cell.
    pub fn cell_center(self, column: u16, row: u16) -> Point {
        let w = f64::from(self.cell_width);
        let h = f64::from(self.cell_height);
        Point::new(f64::from(column) * w + w / 2.0, f64::from(row) * h + h / 2.0)
    }

    /// Rows, possibly fractional, covering `pixels` vertical pixels.
    pub fn rows_for(self, pixels: u32) -> f64 {
        f64::from(pixels) / f64::from(self.cell_height)
    }
}
