//! Scroll-triggered reveal of page blocks.

/// Fraction of a block that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Remembers which blocks have been scrolled into view.
///
/// Revealing is one way: a block that has been seen stays visible.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    visible: Vec<bool>,
}

impl RevealTracker {
    pub fn new(blocks: usize) -> Self {
        Self {
            visible: vec![false; blocks],
        }
    }

    /// Grow or shrink to the current block count, keeping what was seen.
    pub fn resize(&mut self, blocks: usize) {
        self.visible.resize(blocks, false);
    }

    pub fn is_visible(&self, block: usize) -> bool {
        self.visible.get(block).copied().unwrap_or(false)
    }

    /// Reveal every block sufficiently inside the window
    /// `[offset, offset + rows)`. `extents` yields `(top, height)` per
    /// block. Returns how many blocks were newly revealed.
    pub fn observe<I>(&mut self, extents: I, offset: f64, rows: f64) -> usize
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut revealed = 0;
        for (slot, (top, height)) in self.visible.iter_mut().zip(extents) {
            if *slot {
                continue;
            }
            if intersection_ratio(top, height, offset, rows) >= REVEAL_THRESHOLD {
                *slot = true;
                revealed += 1;
            }
        }
        revealed
    }
}

/// Share of `[top, top + height)` inside `[offset, offset + rows)`.
pub fn intersection_ratio(top: f64, height: f64, offset: f64, rows: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(offset);
    let end = (top + height).min(offset + rows);
    ((end - start).max(0.0) / height).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_ratio() {
        assert_eq!(intersection_ratio(0.0, 10.0, 0.0, 20.0), 1.0);
        assert_eq!(intersection_ratio(15.0, 10.0, 0.0, 20.0), 0.5);
        assert_eq!(intersection_ratio(30.0, 10.0, 0.0, 20.0), 0.0);
        assert_eq!(intersection_ratio(0.0, 0.0, 0.0, 20.0), 0.0);
    }

    #[test]
    fn test_reveals_at_threshold() {
        let mut tracker = RevealTracker::new(1);
        // One of twenty rows showing is 5%.
        assert_eq!(tracker.observe([(19.0, 20.0)], 0.0, 20.0), 0);
        assert!(!tracker.is_visible(0));
        // Two of twenty is 10%.
        assert_eq!(tracker.observe([(18.0, 20.0)], 0.0, 20.0), 1);
        assert!(tracker.is_visible(0));
    }

    #[test]
    fn test_stays_revealed() {
        let mut tracker = RevealTracker::new(2);
        let blocks = [(0.0, 10.0), (50.0, 10.0)];
        tracker.observe(blocks, 0.0, 20.0);
        assert!(tracker.is_visible(0));
        assert!(!tracker.is_visible(1));

        tracker.observe(blocks, 45.0, 20.0);
        assert!(tracker.is_visible(0));
        assert!(tracker.is_visible(1));
    }

    #[test]
    fn test_resize_keeps_seen_blocks() {
        let mut tracker = RevealTracker::new(1);
        tracker.observe([(0.0, 5.0)], 0.0, 10.0);
        tracker.resize(3);
        assert!(tracker.is_visible(0));
        assert!(!tracker.is_visible(2));
        assert!(!tracker.is_visible(99));
    }
}
