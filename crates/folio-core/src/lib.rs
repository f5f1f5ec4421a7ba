//! Core types shared across the folio crates.

mod content;
mod geometry;
mod palette;

pub use content::{Entry, Profile, Section};
pub use geometry::{CellMetrics, Point, Viewport};
pub use palette::{ACCENT, CONNECTION_OPACITY, Rgb, SYMBOL_OPACITY, Tint};
