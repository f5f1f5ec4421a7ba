//! Page state tying the layout and interactive pieces together.

use std::time::Duration;

use folio_core::Profile;
use ratatui::layout::{Position, Rect};

use crate::layout::PageLayout;
use crate::nav::{NavMenu, ScrollSpy};
use crate::reveal::RevealTracker;
use crate::scroll::{BackToTop, Scroll};
use crate::typewriter::Typewriter;

/// Rows taken by the navigation bar.
pub const HEADER_ROWS: u16 = 1;

/// Page behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSettings {
    /// Pause before the tagline starts typing.
    pub typing_delay: Duration,
    /// Pause between typed characters.
    pub typing_interval: Duration,
    /// Scroll offset, in rows, after which back-to-top shows.
    pub back_to_top_rows: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(500),
            typing_interval: Duration::from_millis(100),
            back_to_top_rows: 300.0 / 16.0,
        }
    }
}

/// Clickable regions recorded during the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    MenuToggle,
    NavLink(usize),
    BackToTop,
}

/// Everything drawn in front of the particle field.
#[derive(Debug)]
pub struct PageState {
    pub(crate) profile: Profile,
    pub(crate) layout: PageLayout,
    pub(crate) typewriter: Typewriter,
    pub(crate) menu: NavMenu,
    pub(crate) spy: ScrollSpy,
    pub(crate) reveal: RevealTracker,
    pub(crate) scroll: Scroll,
    pub(crate) back_to_top: BackToTop,
    /// Terminal width in columns.
    pub(crate) width: u16,
    /// Rows available below the navigation bar.
    pub(crate) content_rows: u16,
    /// Clickable regions from the last render, topmost last.
    pub(crate) hits: Vec<(Rect, Hit)>,
}

impl PageState {
    /// Create the page; call [`PageState::resize`] before rendering.
    pub fn new(profile: Profile, settings: PageSettings) -> Self {
        let typewriter = Typewriter::new(
            profile.tagline.clone(),
            settings.typing_delay,
            settings.typing_interval,
        );
        Self {
            profile,
            layout: PageLayout::default(),
            typewriter,
            menu: NavMenu::new(),
            spy: ScrollSpy::default(),
            reveal: RevealTracker::default(),
            scroll: Scroll::new(),
            back_to_top: BackToTop::new(settings.back_to_top_rows),
            width: 0,
            content_rows: 0,
            hits: Vec::new(),
        }
    }

    /// Lay the page out again for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.content_rows = height.saturating_sub(HEADER_ROWS);
        self.layout = PageLayout::compute(&self.profile, width, self.content_rows);
        self.spy = ScrollSpy::new(self.layout.section_bounds());
        self.reveal.resize(self.layout.blocks.len());
        self.scroll.set_max(self.layout.max_scroll(self.content_rows));
        self.observe();
        log::debug!(
            "page laid out at {}x{}: {} rows",
            width,
            height,
            self.layout.height
        );
    }

    /// Change how far the reader scrolls before back-to-top shows.
    pub fn set_back_to_top_rows(&mut self, rows: f64) {
        self.back_to_top = BackToTop::new(rows);
    }

    /// Advance time-based effects by one frame.
    pub fn update(&mut self, elapsed: Duration) {
        self.typewriter.update(elapsed);
        if self.scroll.step() {
            self.observe();
        }
    }

    /// Scroll by whole rows; negative scrolls up.
    pub fn scroll_by(&mut self, rows: f64) {
        self.scroll.scroll_by(rows);
        self.observe();
    }

    pub fn page_down(&mut self) {
        self.scroll_by(f64::from(self.content_rows.max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-f64::from(self.content_rows.max(1)));
    }

    /// Start a smooth scroll back to the top.
    pub fn back_to_top(&mut self) {
        self.back_to_top.activate(&mut self.scroll);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Jump to a section from its nav link, closing the menu.
    pub fn select_link(&mut self, index: usize) {
        let Some(section) = self.layout.sections.get(index) else {
            return;
        };
        self.menu.select();
        self.scroll.smooth_to(section.top as f64);
        log::debug!("navigating to #{}", section.id);
    }

    /// Handle a click; returns `true` if it hit something.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.hit_test(column, row) {
            Some(Hit::MenuToggle) => self.toggle_menu(),
            Some(Hit::NavLink(index)) => self.select_link(index),
            Some(Hit::BackToTop) => self.back_to_top(),
            None => return false,
        }
        true
    }

    /// Topmost clickable region under a cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, hit)| *hit)
    }

    /// Index of the section currently being read.
    pub fn active_section(&self) -> Option<usize> {
        self.spy.active(self.scroll.offset())
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.back_to_top.is_visible(self.scroll.offset())
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    pub fn typed_tagline(&self) -> &str {
        self.typewriter.visible()
    }

    pub fn is_block_visible(&self, block: usize) -> bool {
        self.reveal.is_visible(block)
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    fn observe(&mut self) {
        let revealed = self.reveal.observe(
            self.layout.extents(),
            self.scroll.offset(),
            f64::from(self.content_rows),
        );
        if revealed > 0 {
            log::trace!("revealed {revealed} blocks");
        }
    }
}
