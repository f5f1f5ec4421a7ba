//! Navigation bar state: the collapsible menu and scroll highlighting.

/// Terminals narrower than this get the collapsed menu.
pub const COLLAPSE_WIDTH: u16 = 80;

/// Open/closed state of the collapsed navigation menu.
///
/// The toggle button and the link list share this single flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a terminal of this width hides links behind the toggle.
    pub fn is_collapsed(width: u16) -> bool {
        width < COLLAPSE_WIDTH
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu open or closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link was chosen; close the menu if it was open.
    pub fn select(&mut self) {
        if self.open {
            self.open = false;
        }
    }
}

/// Section extent in page rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// Finds the section the reader is currently in.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    sections: Vec<SectionBounds>,
}

impl ScrollSpy {
    pub fn new(sections: Vec<SectionBounds>) -> Self {
        Self { sections }
    }

    /// Index of the active section at this scroll offset.
    ///
    /// A section becomes active once the offset reaches a third of its
    /// height above its top; later sections win.
    pub fn active(&self, offset: f64) -> Option<usize> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| offset >= s.top - s.height / 3.0)
            .map(|(i, _)| i)
            .last()
    }
}
