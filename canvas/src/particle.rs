//! Particle simulation: integration, wall bounce, pointer impulse, damping.
//!
//! DESIGN
//! ======
//! `ParticleField` owns every particle plus the last known pointer position,
//! so the frame loop and the pointer listeners share one explicit owner
//! instead of free-floating globals. Randomness is injected as a closure
//! returning values in `[0, 1)` so seeding is deterministic under test.

use crate::consts::{
    CONNECTION_DISTANCE, DAMPING, LINK_MAX_ALPHA, MAX_INITIAL_SPEED, MIN_OPACITY, MIN_RADIUS, OPACITY_SPREAD,
    POINTER_FORCE, POINTER_RADIUS, RADIUS_SPREAD,
};

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

/// A point in canvas CSS-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One particle: position, velocity, and draw attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// Seed a particle uniformly inside a `width` x `height` box.
    pub fn random(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            vx: (rng() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
            vy: (rng() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
            radius: rng() * RADIUS_SPREAD + MIN_RADIUS,
            opacity: rng() * OPACITY_SPREAD + MIN_OPACITY,
        }
    }
}

/// A connecting line between two particles (indices into the field).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// Fixed-size population of particles bounded by the canvas box.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    pointer: Option<Point>,
}

impl ParticleField {
    /// Seed `count` particles in a `width` x `height` box.
    pub fn seeded(count: usize, width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let particles = (0..count).map(|_| Particle::random(width, height, rng)).collect();
        Self { particles, width, height, pointer: None }
    }

    /// Build a field from explicit particles.
    #[must_use]
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self { particles, width, height, pointer: None }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h, pointer) = (self.width, self.height, self.pointer);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }

            if let Some(ptr) = pointer {
                let dx = ptr.x - p.x;
                let dy = ptr.y - p.y;
                let dist = dx.hypot(dy);
                if dist < POINTER_RADIUS {
                    let force = (POINTER_RADIUS - dist) / POINTER_RADIUS * POINTER_FORCE;
                    p.vx -= dx * force;
                    p.vy -= dy * force;
                }
            }

            p.vx *= DAMPING;
            p.vy *= DAMPING;
        }
    }

    /// Every unordered pair closer than [`CONNECTION_DISTANCE`].
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let dist = (pa.x - pb.x).hypot(pa.y - pb.y);
                if dist < CONNECTION_DISTANCE {
                    out.push(Link { a, b: a + 1 + offset, alpha: link_alpha(dist) });
                }
            }
        }
        out
    }
}

/// Line alpha for a pair at `dist`; zero at or beyond the connection range.
#[must_use]
pub fn link_alpha(dist: f64) -> f64 {
    if dist >= CONNECTION_DISTANCE {
        return 0.0;
    }
    (1.0 - dist / CONNECTION_DISTANCE) * LINK_MAX_ALPHA
}
