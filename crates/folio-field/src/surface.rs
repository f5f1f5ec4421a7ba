//! Drawing surface abstraction.

use folio_core::{Point, Tint};

/// Primitives the particle field draws with.
pub trait RenderSurface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw `text` anchored at `at`.
    fn fill_text(&mut self, at: Point, text: &str, size: f64, tint: Tint);

    /// Stroke a one-unit line between two points.
    fn stroke_line(&mut self, from: Point, to: Point, tint: Tint);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        at: Point,
        text: String,
        size: f64,
        tint: Tint,
    },
    Line {
        from: Point,
        to: Point,
        tint: Tint,
    },
}

/// Surface that records commands for later painting.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate over the recorded text commands.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// Iterate over the recorded line commands.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_text(&mut self, at: Point, text: &str, size: f64, tint: Tint) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_string(),
            size,
            tint,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, tint: Tint) {
        self.commands.push(DrawCommand::Line { from, to, tint });
    }
}
