//! Page scrolling and the back-to-top control.

/// Share of the remaining distance covered per frame while smooth scrolling.
const SMOOTH_STEP: f64 = 0.2;

/// Remaining distance, in rows, at which smooth scrolling snaps.
const SNAP_DISTANCE: f64 = 0.5;

/// Vertical scroll position of the page, in rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scroll {
    offset: f64,
    max: f64,
    /// Destination of an in-flight smooth scroll.
    target: Option<f64>,
}

impl Scroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// First page row on screen.
    pub fn first_row(&self) -> usize {
        self.offset.max(0.0).floor() as usize
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Set the furthest the page can scroll and clamp to it.
    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.offset = self.clamp(self.offset);
        self.target = self.target.map(|t| self.clamp(t));
    }

    /// Scroll immediately by `rows`, cancelling any smooth scroll.
    pub fn scroll_by(&mut self, rows: f64) {
        self.target = None;
        self.offset = self.clamp(self.offset + rows);
    }

    /// Start easing toward `row`.
    pub fn smooth_to(&mut self, row: f64) {
        self.target = Some(self.clamp(row));
    }

    /// Advance a smooth scroll by one frame. Returns `true` if it moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.offset;
        if remaining.abs() <= SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
        } else {
            self.offset += remaining * SMOOTH_STEP;
        }
        true
    }

    fn clamp(&self, row: f64) -> f64 {
        row.clamp(0.0, self.max)
    }
}

/// Shows a "back to top" button once the reader has scrolled far enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTop {
    /// Offset, in rows, past which the button appears.
    threshold: f64,
}

impl BackToTop {
    pub fn new(threshold_rows: f64) -> Self {
        Self {
            threshold: threshold_rows,
        }
    }

    pub fn is_visible(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Send the page smoothly back to the top.
    pub fn activate(&self, scroll: &mut Scroll) {
        scroll.smooth_to(0.0);
    }
}
