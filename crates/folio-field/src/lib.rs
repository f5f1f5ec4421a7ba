//! Animated symbol field rendered behind the folio page.
//!
//! A swarm of code-like symbols drifts across the viewport, is pushed away
//! by the mouse cursor and draws faint lines between neighbours. The field
//! renders onto any [`RenderSurface`]; [`FieldWidget`] paints a recorded
//! [`DrawList`] onto a ratatui canvas.

mod chars;
mod field;
mod frame_loop;
mod particle;
mod surface;
mod widget;

pub use chars::SYMBOLS;
pub use field::{
    CONNECTION_DISTANCE, CURSOR_SENTINEL, PIXELS_PER_PARTICLE, ParticleField, connection_opacity,
    particle_count,
};
pub use frame_loop::FrameLoop;
pub use particle::{MOUSE_RADIUS, Particle, WRAP_MARGIN};
pub use surface::{DrawCommand, DrawList, RenderSurface};
pub use widget::FieldWidget;
