//! Vertical layout of the page in rows.

use folio_core::Profile;

use crate::nav::SectionBounds;

/// Horizontal padding on each side of entry text.
const SIDE_PADDING: u16 = 4;

/// Narrowest column text is wrapped to.
const MIN_TEXT_WIDTH: usize = 10;

/// Rows taken by a section heading.
const HEADING_HEIGHT: usize = 2;

/// Smallest hero block, for very short terminals.
const MIN_HERO_HEIGHT: usize = 5;

/// What a block displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Name and typed tagline filling the first screen.
    Hero,
    /// Title row of a section.
    Heading { section: usize },
    /// Timeline item or project card.
    Entry { section: usize, entry: usize },
}

/// A run of page rows rendered and revealed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// First page row.
    pub top: usize,
    pub height: usize,
    /// Wrapped body text, for entries.
    pub body: Vec<String>,
}

impl Block {
    fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Position of a whole section on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub title: String,
    pub top: usize,
    pub height: usize,
}

/// Row positions of every block for a given terminal size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub blocks: Vec<Block>,
    pub sections: Vec<SectionSpan>,
    /// Total page height in rows.
    pub height: usize,
}

impl PageLayout {
    /// Lay out `profile` for a content area `width` columns wide and
    /// `rows` rows tall.
    pub fn compute(profile: &Profile, width: u16, rows: u16) -> Self {
        let text_width = usize::from(width.saturating_sub(SIDE_PADDING * 2)).max(MIN_TEXT_WIDTH);
        let mut blocks = vec![Block {
            kind: BlockKind::Hero,
            top: 0,
            height: usize::from(rows).max(MIN_HERO_HEIGHT),
            body: Vec::new(),
        }];
        let mut sections = Vec::with_capacity(profile.sections.len());
        let mut cursor = blocks[0].bottom();

        for (s, section) in profile.sections.iter().enumerate() {
            let top = cursor;
            blocks.push(Block {
                kind: BlockKind::Heading { section: s },
                top: cursor,
                height: HEADING_HEIGHT,
                body: Vec::new(),
            });
            cursor += HEADING_HEIGHT;

            for (e, entry) in section.entries.iter().enumerate() {
                let body = wrap(&entry.body, text_width);
                // heading, optional meta, body, trailing gap
                let height = 1 + usize::from(!entry.meta.is_empty()) + body.len() + 1;
                blocks.push(Block {
                    kind: BlockKind::Entry {
                        section: s,
                        entry: e,
                    },
                    top: cursor,
                    height,
                    body,
                });
                cursor += height;
            }

            // gap between sections
            cursor += 1;
            sections.push(SectionSpan {
                id: section.id.clone(),
                title: section.title.clone(),
                top,
                height: cursor - top,
            });
        }

        Self {
            blocks,
            sections,
            height: cursor,
        }
    }

    /// Furthest scroll offset that still fills the screen.
    pub fn max_scroll(&self, rows: u16) -> f64 {
        self.height.saturating_sub(usize::from(rows)) as f64
    }

    /// `(top, height)` of every block, for reveal tracking.
    pub fn extents(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.blocks
            .iter()
            .map(|b| (b.top as f64, b.height as f64))
    }

    /// Section bounds, for scroll highlighting.
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds {
                top: s.top as f64,
                height: s.height as f64,
            })
            .collect()
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if line_len == 0 {
            word.len()
        } else {
            line_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Entry, Section};

    fn profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            tagline: "Engineer".to_string(),
            sections: vec![
                Section {
                    id: "about".to_string(),
                    title: "About".to_string(),
                    entries: vec![Entry {
                        heading: "Hi".to_string(),
                        meta: String::new(),
                        body: "one two three".to_string(),
                    }],
                },
                Section {
                    id: "work".to_string(),
                    title: "Work".to_string(),
                    entries: vec![Entry {
                        heading: "Engine".to_string(),
                        meta: "1843".to_string(),
                        body: "notes".to_string(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap("  spaced   out  ", 20), ["spaced out"]);
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_layout_rows() {
        let layout = PageLayout::compute(&profile(), 80, 20);
        let tops: Vec<(BlockKind, usize, usize)> = layout
            .blocks
            .iter()
            .map(|b| (b.kind, b.top, b.height))
            .collect();
        assert_eq!(
            tops,
            [
                (BlockKind::Hero, 0, 20),
                (BlockKind::Heading { section: 0 }, 20, 2),
                (
                    BlockKind::Entry {
                        section: 0,
                        entry: 0
                    },
                    22,
                    3
                ),
                (BlockKind::Heading { section: 1 }, 26, 2),
                (
                    BlockKind::Entry {
                        section: 1,
                        entry: 0
                    },
                    28,
                    4
                ),
            ]
        );
        assert_eq!(layout.sections[0].top, 20);
        assert_eq!(layout.sections[0].height, 6);
        assert_eq!(layout.sections[1].top, 26);
        assert_eq!(layout.height, 33);
        assert_eq!(layout.max_scroll(20), 13.0);
    }

    #[test]
    fn test_narrow_layout_wraps_body() {
        let layout = PageLayout::compute(&profile(), 12, 20);
        // 12 - 8 padding is below the minimum, so text wraps at 10.
        assert_eq!(layout.blocks[2].body, ["one two", "three"]);
    }

    #[test]
    fn test_tiny_terminal_keeps_hero() {
        let layout = PageLayout::compute(&profile(), 80, 2);
        assert_eq!(layout.blocks[0].height, MIN_HERO_HEIGHT);
    }
}
