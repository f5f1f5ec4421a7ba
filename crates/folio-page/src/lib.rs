//! The scrollable portfolio page drawn in front of the particle field.
//!
//! Each interactive piece keeps its own small state: [`Typewriter`] for the
//! tagline, [`NavMenu`] and [`ScrollSpy`] for navigation, [`RevealTracker`]
//! for blocks appearing as they scroll into view, and [`Scroll`] with
//! [`BackToTop`] for movement. [`PageState`] owns them all.

mod layout;
mod nav;
mod reveal;
mod scroll;
mod state;
mod typewriter;
mod view;

pub use layout::{Block, BlockKind, PageLayout, SectionSpan, wrap};
pub use nav::{COLLAPSE_WIDTH, NavMenu, ScrollSpy, SectionBounds};
pub use reveal::{REVEAL_THRESHOLD, RevealTracker, intersection_ratio};
pub use scroll::{BackToTop, Scroll};
pub use state::{HEADER_ROWS, Hit, PageSettings, PageState};
pub use typewriter::Typewriter;
