//! A single drifting symbol.

use folio_core::{Point, Viewport};
use rand::{Rng, seq::IndexedRandom};

use crate::chars::SYMBOLS;

/// Radius around the cursor inside which particles are pushed away.
pub const MOUSE_RADIUS: f64 = 200.0;

/// How far past the viewport edge a particle travels before wrapping.
pub const WRAP_MARGIN: f64 = 50.0;

/// Fraction of the gap to the base position closed each frame.
const RETURN_EASING: f64 = 0.1;

/// State for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position.
    pub x: f64,
    pub y: f64,
    /// Drifting equilibrium point the position eases back toward.
    pub base_x: f64,
    pub base_y: f64,
    /// Render size, 10 to 24.
    pub size: f64,
    /// Symbol drawn for this particle.
    pub symbol: &'static str,
    /// Repulsion strength, 1 to 31.
    pub density: f64,
    /// Constant drift per frame.
    pub speed_x: f64,
    pub speed_y: f64,
}

impl Particle {
    /// Create a particle at a random point inside the viewport.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let x = uniform_below(rng, viewport.width);
        let y = uniform_below(rng, viewport.height);
        Self {
            x,
            y,
            base_x: x,
            base_y: y,
            size: rng.random_range(10.0..=24.0),
            symbol: SYMBOLS.choose(rng).copied().unwrap_or("*"),
            density: rng.random_range(1.0..31.0),
            speed_x: rng.random_range(-0.25..0.25),
            speed_y: rng.random_range(-0.25..0.25),
        }
    }

    /// Current position.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance one frame: cursor repulsion or easing home, drift, wraparound.
    pub fn update(&mut self, cursor: Point, viewport: Viewport) {
        let dx = cursor.x - self.x;
        let dy = cursor.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < MOUSE_RADIUS {
            // A cursor exactly on the particle has no direction to push along.
            if distance > 0.0 {
                let force = (MOUSE_RADIUS - distance) / MOUSE_RADIUS;
                self.x -= dx / distance * force * self.density;
                self.y -= dy / distance * force * self.density;
            }
        } else {
            self.x -= (self.x - self.base_x) * RETURN_EASING;
            self.y -= (self.y - self.base_y) * RETURN_EASING;
        }

        self.x += self.speed_x;
        self.y += self.speed_y;
        self.base_x += self.speed_x;
        self.base_y += self.speed_y;

        self.wrap(viewport);
    }

    /// Teleport to the opposite edge once past the wrap margin.
    fn wrap(&mut self, viewport: Viewport) {
        if self.x > viewport.width + WRAP_MARGIN {
            self.x = -WRAP_MARGIN;
            self.base_x = self.x;
        }
        if self.x < -WRAP_MARGIN {
            self.x = viewport.width + WRAP_MARGIN;
            self.base_x = self.x;
        }
        if self.y > viewport.height + WRAP_MARGIN {
            self.y = -WRAP_MARGIN;
            self.base_y = self.y;
        }
        if self.y < -WRAP_MARGIN {
            self.y = viewport.height + WRAP_MARGIN;
            self.base_y = self.y;
        }
    }
}

fn uniform_below<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            base_x: x,
            base_y: y,
            size: 12.0,
            symbol: "fn",
            density: 10.0,
            speed_x: 0.0,
            speed_y: 0.0,
        }
    }

    const FAR_AWAY: Point = Point::new(-1000.0, -1000.0);
    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn test_random_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, VIEW);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert_eq!((p.x, p.y), (p.base_x, p.base_y));
            assert!((10.0..=24.0).contains(&p.size));
            assert!((1.0..31.0).contains(&p.density));
            assert!((-0.25..0.25).contains(&p.speed_x));
            assert!((-0.25..0.25).contains(&p.speed_y));
            assert!(SYMBOLS.contains(&p.symbol));
        }
    }

    #[test]
    fn test_random_in_empty_viewport() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::random(&mut rng, Viewport::new(0.0, 0.0));
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_repelled_by_cursor() {
        let mut p = still(100.0, 100.0);
        // Cursor 100 units to the right: force = 0.5, push = 5 to the left.
        p.update(Point::new(200.0, 100.0), VIEW);
        assert!((p.x - 95.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
        // Base position is not pushed.
        assert_eq!(p.base_x, 100.0);
    }

    #[test]
    fn test_denser_particles_move_further() {
        let cursor = Point::new(150.0, 100.0);
        let mut light = still(100.0, 100.0);
        light.density = 2.0;
        let mut heavy = still(100.0, 100.0);
        heavy.density = 20.0;
        light.update(cursor, VIEW);
        heavy.update(cursor, VIEW);
        assert!(heavy.x < light.x);
    }

    #[test]
    fn test_cursor_on_particle_stays_finite() {
        let mut p = still(300.0, 200.0);
        p.speed_x = 0.1;
        p.update(Point::new(300.0, 200.0), VIEW);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!((p.x - 300.1).abs() < 1e-9);
        assert_eq!(p.y, 200.0);
    }

    #[test]
    fn test_eases_back_to_base() {
        let mut p = still(100.0, 100.0);
        p.x = 200.0;
        p.y = 50.0;
        p.speed_x = 0.2;
        p.speed_y = -0.1;

        let mut gap = (p.x - p.base_x).hypot(p.y - p.base_y);
        for _ in 0..50 {
            p.update(FAR_AWAY, VIEW);
            let next = (p.x - p.base_x).hypot(p.y - p.base_y);
            assert!(next < gap, "gap grew from {gap} to {next}");
            gap = next;
        }
    }

    #[test]
    fn test_drift_moves_base() {
        let mut p = still(100.0, 100.0);
        p.speed_x = 0.25;
        p.speed_y = -0.25;
        p.update(FAR_AWAY, VIEW);
        assert_eq!((p.base_x, p.base_y), (100.25, 99.75));
        assert_eq!((p.x, p.y), (100.25, 99.75));
    }

    #[test]
    fn test_wraps_past_right_edge() {
        let mut p = still(850.0, 300.0);
        p.speed_x = 0.25;
        p.update(FAR_AWAY, VIEW);
        assert_eq!(p.x, -WRAP_MARGIN);
        assert_eq!(p.base_x, -WRAP_MARGIN);
    }

    #[test]
    fn test_wraps_past_top_edge() {
        let mut p = still(300.0, -50.0);
        p.speed_y = -0.25;
        p.update(FAR_AWAY, VIEW);
        assert_eq!(p.y, 600.0 + WRAP_MARGIN);
        assert_eq!(p.base_y, p.y);
    }
}
