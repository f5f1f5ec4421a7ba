//! Terminal rendering of a recorded field frame.

use folio_core::{Rgb, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::surface::{DrawCommand, DrawList};

/// Symbols at least this large are drawn bold.
const BOLD_SIZE: f64 = 18.0;

/// Paints a [`DrawList`] onto a braille canvas covering the whole area.
///
/// Pixel coordinates grow downward while the canvas grows upward, so every
/// y is flipped against the viewport height.
#[derive(Debug, Clone, Copy)]
pub struct FieldWidget<'a> {
    list: &'a DrawList,
    viewport: Viewport,
    background: Rgb,
}

impl<'a> FieldWidget<'a> {
    pub fn new(list: &'a DrawList, viewport: Viewport, background: Rgb) -> Self {
        Self {
            list,
            viewport,
            background,
        }
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.viewport.height;
        let background = self.background;

        Canvas::default()
            .background_color(background.color())
            .marker(Marker::Braille)
            .x_bounds([0.0, self.viewport.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in self.list.commands() {
                    match command {
                        DrawCommand::Line { from, to, tint } => {
                            ctx.draw(&CanvasLine::new(
                                from.x,
                                height - from.y,
                                to.x,
                                height - to.y,
                                tint.over(background).color(),
                            ));
                        }
                        DrawCommand::Text {
                            at,
                            text,
                            size,
                            tint,
                        } => {
                            let mut style = Style::new().fg(tint.over(background).color());
                            if *size >= BOLD_SIZE {
                                style = style.add_modifier(Modifier::BOLD);
                            }
                            ctx.print(at.x, height - at.y, Span::styled(text.clone(), style));
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
