//! Rendering of the page over the particle field.

use folio_core::{ACCENT, Rgb};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block as Border, Clear, Paragraph},
};

use crate::layout::{Block, BlockKind};
use crate::nav::NavMenu;
use crate::state::{HEADER_ROWS, Hit, PageState};

/// Main text color.
const TEXT: Rgb = Rgb::new(226, 232, 240);

/// Secondary text color.
const MUTED: Rgb = Rgb::new(148, 163, 184);

/// Indent of entry text.
const INDENT: &str = "    ";

const MENU_OPEN: &str = "✕";
const MENU_CLOSED: &str = "☰";
const BACK_TO_TOP: &str = " ↑ top ";

impl PageState {
    /// Render the page, recording clickable regions for [`PageState::click`].
    pub fn render(&mut self, frame: &mut Frame) {
        self.hits.clear();
        let [header, body] =
            Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Fill(1)])
                .areas(frame.area());

        self.render_body(frame, body);
        self.render_header(frame, header);
        if self.is_back_to_top_visible() {
            self.render_back_to_top(frame, body);
        }
        if NavMenu::is_collapsed(header.width) && self.menu.is_open() {
            self.render_menu(frame, body);
        }
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let name = Line::from(format!(" {}", self.profile.name))
            .style(Style::new().fg(ACCENT.color()).add_modifier(Modifier::BOLD));
        frame.render_widget(name, area);

        if NavMenu::is_collapsed(area.width) {
            let symbol = if self.menu.is_open() {
                MENU_OPEN
            } else {
                MENU_CLOSED
            };
            let toggle = Rect::new(area.right().saturating_sub(3), area.y, 1, 1);
            frame.render_widget(Span::styled(symbol, Style::new().fg(TEXT.color())), toggle);
            self.hits.push((toggle, Hit::MenuToggle));
            return;
        }

        let active = self.active_section();
        let labels: Vec<String> = self
            .layout
            .sections
            .iter()
            .map(|s| format!(" {} ", s.title))
            .collect();
        let total = labels
            .iter()
            .map(|l| cells(Line::from(l.as_str()).width()))
            .fold(0u16, u16::saturating_add);
        let mut x = area.right().saturating_sub(total.saturating_add(1));
        for (index, label) in labels.into_iter().enumerate() {
            let line = Line::from(label);
            let width = cells(line.width());
            let rect = Rect::new(x, area.y, width, 1).intersection(area);
            frame.render_widget(line.style(link_style(active == Some(index))), rect);
            self.hits.push((rect, Hit::NavLink(index)));
            x = x.saturating_add(width);
        }
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let first = self.scroll.first_row();
        let last = first + usize::from(area.height);

        for (index, block) in self.layout.blocks.iter().enumerate() {
            if block.top + block.height <= first || block.top >= last {
                continue;
            }
            if !self.reveal.is_visible(index) {
                continue;
            }
            for (k, line) in self.block_lines(block).into_iter().enumerate() {
                let row = block.top + k;
                if row < first || row >= last {
                    continue;
                }
                let y = area.y + (row - first) as u16;
                frame.render_widget(line, Rect::new(area.x, y, area.width, 1));
            }
        }
    }

    /// Lines of a block, one per page row.
    fn block_lines(&self, block: &Block) -> Vec<Line<'static>> {
        match block.kind {
            BlockKind::Hero => self.hero_lines(block.height),
            BlockKind::Heading { section } => {
                let title = self
                    .profile
                    .sections
                    .get(section)
                    .map(|s| s.title.clone())
                    .unwrap_or_default();
                vec![
                    Line::from(format!("  ── {title} ──")).style(
                        Style::new()
                            .fg(ACCENT.color())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                ]
            }
            BlockKind::Entry { section, entry } => {
                let Some(entry) = self
                    .profile
                    .sections
                    .get(section)
                    .and_then(|s| s.entries.get(entry))
                else {
                    return Vec::new();
                };
                let mut lines = vec![
                    Line::from(format!("{INDENT}{}", entry.heading))
                        .style(Style::new().fg(TEXT.color()).add_modifier(Modifier::BOLD)),
                ];
                if !entry.meta.is_empty() {
                    lines.push(
                        Line::from(format!("{INDENT}{}", entry.meta))
                            .style(Style::new().fg(MUTED.color()).italic()),
                    );
                }
                lines.extend(
                    block
                        .body
                        .iter()
                        .map(|l| Line::from(format!("{INDENT}{l}")).fg(MUTED.color())),
                );
                lines.push(Line::default());
                lines
            }
        }
    }

    fn hero_lines(&self, height: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default(); height];
        let middle = height / 2;
        if let Some(line) = middle.checked_sub(1).and_then(|i| lines.get_mut(i)) {
            *line = Line::from(self.profile.name.clone())
                .style(Style::new().fg(TEXT.color()).add_modifier(Modifier::BOLD))
                .centered();
        }
        if let Some(line) = lines.get_mut(middle) {
            let cursor = if self.typewriter.is_done() { " " } else { "▌" };
            *line = Line::from(vec![
                Span::styled(
                    self.typewriter.visible().to_string(),
                    Style::new().fg(ACCENT.color()),
                ),
                Span::styled(cursor, Style::new().fg(ACCENT.color())),
            ])
            .centered();
        }
        if let Some(line) = height.checked_sub(2).and_then(|i| lines.get_mut(i)) {
            *line = Line::from("scroll ↓").fg(MUTED.color()).centered();
        }
        lines
    }

    fn render_back_to_top(&mut self, frame: &mut Frame, body: Rect) {
        let width = Line::from(BACK_TO_TOP).width() as u16;
        if body.width < width + 2 || body.height == 0 {
            return;
        }
        let rect = Rect::new(body.right() - width - 2, body.bottom() - 1, width, 1);
        frame.render_widget(
            Span::styled(
                BACK_TO_TOP,
                Style::new()
                    .fg(Rgb::new(15, 23, 42).color())
                    .bg(ACCENT.color())
                    .add_modifier(Modifier::BOLD),
            ),
            rect,
        );
        self.hits.push((rect, Hit::BackToTop));
    }

    /// Dropdown list of nav links under the collapsed toggle.
    fn render_menu(&mut self, frame: &mut Frame, body: Rect) {
        let active = self.active_section();
        let items: Vec<Line> = self
            .layout
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Line::from(format!(" {} {} ", i + 1, s.title)).style(link_style(active == Some(i)))
            })
            .collect();
        let inner_width = cells(items.iter().map(Line::width).max().unwrap_or(0));
        let width = inner_width.saturating_add(2).min(body.width);
        let height = cells(items.len()).saturating_add(2).min(body.height);
        let rect = Rect::new(body.right().saturating_sub(width), body.y, width, height);

        frame.render_widget(Clear, rect);
        let border = Border::bordered().border_style(Style::new().fg(ACCENT.color()));
        let inner = border.inner(rect);
        frame.render_widget(Paragraph::new(items).block(border), rect);

        for row in 0..inner.height {
            let link = Rect::new(inner.x, inner.y + row, inner.width, 1);
            self.hits.push((link, Hit::NavLink(usize::from(row))));
        }
    }
}

/// Clamp a width or count to the `u16` cell range.
fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn link_style(active: bool) -> Style {
    if active {
        Style::new()
            .fg(ACCENT.color())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::new().fg(MUTED.color())
    }
}
