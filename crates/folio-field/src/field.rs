//! Particle field state management.

use folio_core::{ACCENT, CONNECTION_OPACITY, Point, SYMBOL_OPACITY, Viewport};
use rand::{SeedableRng, rngs::StdRng};

use crate::particle::Particle;
use crate::surface::RenderSurface;

/// Viewport area, in square pixels, per particle.
pub const PIXELS_PER_PARTICLE: f64 = 15_000.0;

/// Particles closer than this are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 100.0;

/// Cursor position used before any pointer event arrives.
pub const CURSOR_SENTINEL: Point = Point::new(-1000.0, -1000.0);

/// Number of particles for a viewport.
pub fn particle_count(viewport: Viewport) -> usize {
    let area = viewport.area();
    if area > 0.0 {
        (area / PIXELS_PER_PARTICLE).floor() as usize
    } else {
        0
    }
}

/// Opacity of the line joining two particles `distance_sq` apart.
///
/// Falls linearly with squared distance and reaches zero at
/// [`CONNECTION_DISTANCE`].
pub fn connection_opacity(distance_sq: f64) -> f64 {
    let max_sq = CONNECTION_DISTANCE * CONNECTION_DISTANCE;
    ((1.0 - distance_sq / max_sq) * CONNECTION_OPACITY).max(0.0)
}

/// Swarm of drifting symbols reacting to the cursor.
#[derive(Debug)]
pub struct ParticleField {
    /// Live particles, regenerated on every resize.
    particles: Vec<Particle>,
    /// Last known pointer position.
    cursor: Point,
    /// Current viewport in virtual pixels.
    viewport: Viewport,
    /// Source of randomness for new particles.
    rng: StdRng,
}

impl ParticleField {
    /// Create a field seeded from the operating system.
    pub fn new(viewport: Viewport) -> Self {
        Self::from_rng(viewport, StdRng::from_os_rng())
    }

    /// Create a field with a reproducible layout.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::from_rng(viewport, StdRng::seed_from_u64(seed))
    }

    /// Create a field from explicit particles, without regenerating them.
    pub fn with_particles(viewport: Viewport, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            cursor: CURSOR_SENTINEL,
            viewport,
            rng: StdRng::seed_from_u64(0),
        }
    }

    fn from_rng(viewport: Viewport, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            cursor: CURSOR_SENTINEL,
            viewport,
            rng,
        };
        field.on_resize(viewport);
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new pointer position.
    pub fn on_pointer_move(&mut self, at: Point) {
        self.cursor = at;
    }

    /// Forget the pointer so no particle is repelled.
    pub fn on_pointer_leave(&mut self) {
        self.cursor = CURSOR_SENTINEL;
    }

    /// Adopt a new viewport and replace every particle.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let count = particle_count(viewport);
        self.particles.clear();
        self.particles.extend((0..count).map(|_| Particle::random(&mut self.rng, viewport)));
        log::debug!(
            "particle field resized to {:.0}x{:.0}, {} particles",
            viewport.width,
            viewport.height,
            count
        );
    }

    /// Advance one frame and draw it.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        let tint = ACCENT.with_alpha(SYMBOL_OPACITY);
        for particle in &mut self.particles {
            particle.update(self.cursor, self.viewport);
            surface.fill_text(particle.position(), particle.symbol, particle.size, tint);
        }

        self.connect(surface);
    }

    /// Stroke a line between every pair of nearby particles.
    fn connect<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let max_sq = CONNECTION_DISTANCE * CONNECTION_DISTANCE;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance_sq = a.position().distance_sq(b.position());
                if distance_sq < max_sq {
                    let tint = ACCENT.with_alpha(connection_opacity(distance_sq));
                    surface.stroke_line(a.position(), b.position(), tint);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::WRAP_MARGIN;
    use crate::surface::{DrawCommand, DrawList};

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            base_x: x,
            base_y: y,
            size: 20.0,
            symbol: "=>",
            density: 5.0,
            speed_x: 0.0,
            speed_y: 0.0,
        }
    }

    #[test]
    fn test_particle_count() {
        assert_eq!(particle_count(Viewport::new(1500.0, 1000.0)), 100);
        assert_eq!(particle_count(Viewport::new(960.0, 640.0)), 40);
        assert_eq!(particle_count(Viewport::new(100.0, 100.0)), 0);
        assert_eq!(particle_count(Viewport::new(0.0, 800.0)), 0);
    }

    #[test]
    fn test_initial_field() {
        let field = ParticleField::with_seed(Viewport::new(1500.0, 1000.0), 42);
        assert_eq!(field.particles().len(), 100);
        for p in field.particles() {
            assert_eq!(p.x, p.base_x);
            assert_eq!(p.y, p.base_y);
        }
        assert_eq!(field.cursor(), CURSOR_SENTINEL);
    }

    #[test]
    fn test_resize_regenerates() {
        let mut field = ParticleField::with_seed(Viewport::new(1500.0, 1000.0), 3);
        field.on_resize(Viewport::new(800.0, 600.0));
        assert_eq!(field.particles().len(), 32);
        assert_eq!(field.viewport(), Viewport::new(800.0, 600.0));
        for p in field.particles() {
            assert!(p.x < 800.0 && p.y < 600.0);
        }

        let before = field.particles().to_vec();
        field.on_resize(Viewport::new(800.0, 600.0));
        assert_eq!(field.particles().len(), before.len());
        assert_ne!(field.particles(), before.as_slice());
    }

    #[test]
    fn test_resize_to_nothing() {
        let mut field = ParticleField::with_seed(Viewport::new(1500.0, 1000.0), 3);
        field.on_resize(Viewport::new(0.0, 0.0));
        assert!(field.particles().is_empty());
        let mut list = DrawList::new();
        field.tick(&mut list);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_stays_within_wrap_bounds() {
        let viewport = Viewport::new(600.0, 450.0);
        let mut field = ParticleField::with_seed(viewport, 11);
        let mut list = DrawList::new();
        for frame in 0..2000 {
            // Sweep the cursor across the field to stir things up.
            let t = frame as f64;
            field.on_pointer_move(Point::new((t * 3.0) % 600.0, (t * 7.0) % 450.0));
            field.tick(&mut list);
            for p in field.particles() {
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!(p.x.abs() <= viewport.width + WRAP_MARGIN);
                assert!(p.y.abs() <= viewport.height + WRAP_MARGIN);
            }
        }
    }

    #[test]
    fn test_pointer_leave_restores_sentinel() {
        let mut field = ParticleField::with_seed(Viewport::new(300.0, 300.0), 1);
        field.on_pointer_move(Point::new(10.0, 20.0));
        assert_eq!(field.cursor(), Point::new(10.0, 20.0));
        field.on_pointer_leave();
        assert_eq!(field.cursor(), CURSOR_SENTINEL);
    }

    #[test]
    fn test_cursor_on_top_of_particle() {
        let viewport = Viewport::new(400.0, 400.0);
        let mut field = ParticleField::with_particles(viewport, vec![still(200.0, 200.0)]);
        field.on_pointer_move(Point::new(200.0, 200.0));
        let mut list = DrawList::new();
        for _ in 0..10 {
            field.tick(&mut list);
        }
        let p = &field.particles()[0];
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn test_connection_opacity() {
        assert!((connection_opacity(0.0) - 0.1).abs() < 1e-12);
        assert_eq!(connection_opacity(100.0 * 100.0), 0.0);
        assert_eq!(connection_opacity(150.0 * 150.0), 0.0);

        let mut previous = connection_opacity(0.0);
        for d in 1..100 {
            let d = f64::from(d);
            let opacity = connection_opacity(d * d);
            assert!(opacity < previous, "not decreasing at {d}");
            previous = opacity;
        }
    }

    #[test]
    fn test_tick_draws_symbols_and_connections() {
        let viewport = Viewport::new(800.0, 600.0);
        let particles = vec![still(100.0, 100.0), still(160.0, 100.0), still(500.0, 400.0)];
        let mut field = ParticleField::with_particles(viewport, particles);
        let mut list = DrawList::new();
        field.tick(&mut list);

        assert_eq!(list.texts().count(), 3);
        let lines: Vec<&DrawCommand> = list.lines().collect();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            DrawCommand::Line { from, to, tint } => {
                assert_eq!(*from, Point::new(100.0, 100.0));
                assert_eq!(*to, Point::new(160.0, 100.0));
                assert!((tint.alpha - 0.064).abs() < 1e-12);
                assert_eq!(tint.rgb, ACCENT);
            }
            other => panic!("expected a line, got {other:?}"),
        }

        match &list.commands()[0] {
            DrawCommand::Text { text, size, tint, .. } => {
                assert_eq!(text, "=>");
                assert_eq!(*size, 20.0);
                assert_eq!(tint.alpha, SYMBOL_OPACITY);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_tick_clears_previous_frame() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut field = ParticleField::with_particles(viewport, vec![still(100.0, 100.0)]);
        let mut list = DrawList::new();
        field.tick(&mut list);
        field.tick(&mut list);
        assert_eq!(list.commands().len(), 1);
    }

    #[test]
    fn test_coincident_particles_connect_at_full_opacity() {
        let viewport = Viewport::new(800.0, 600.0);
        let particles = vec![still(300.0, 300.0), still(300.0, 300.0)];
        let mut field = ParticleField::with_particles(viewport, particles);
        let mut list = DrawList::new();
        field.tick(&mut list);
        let alphas: Vec<f64> = list
            .lines()
            .map(|c| match c {
                DrawCommand::Line { tint, .. } => tint.alpha,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(alphas.len(), 1);
        assert!((alphas[0] - CONNECTION_OPACITY).abs() < 1e-12);
    }
}
