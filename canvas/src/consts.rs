//! Shared numeric constants for the particle field.

// ── Population ──────────────────────────────────────────────────

/// Number of particles seeded per canvas size.
pub const PARTICLE_COUNT: usize = 45;

/// Maximum magnitude of each initial velocity component, in px per frame.
pub const MAX_INITIAL_SPEED: f64 = 0.2;

/// Smallest particle radius in CSS pixels.
pub const MIN_RADIUS: f64 = 0.5;

/// Width of the random radius range added to [`MIN_RADIUS`].
pub const RADIUS_SPREAD: f64 = 1.5;

/// Lowest particle fill opacity.
pub const MIN_OPACITY: f64 = 0.2;

/// Width of the random opacity range added to [`MIN_OPACITY`].
pub const OPACITY_SPREAD: f64 = 0.5;

// ── Motion ──────────────────────────────────────────────────────

/// Multiplicative velocity damping applied every frame.
pub const DAMPING: f64 = 0.999;

/// Pointer influence radius in CSS pixels.
pub const POINTER_RADIUS: f64 = 200.0;

/// Scale of the pointer impulse at zero distance.
pub const POINTER_FORCE: f64 = 0.015;

// ── Links ───────────────────────────────────────────────────────

/// Pairs closer than this (CSS pixels) are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 150.0;

/// Line alpha for two coincident particles; decays linearly to zero.
pub const LINK_MAX_ALPHA: f64 = 0.15;

/// Stroke width of link lines in CSS pixels.
pub const LINK_WIDTH: f64 = 0.5;

// ── Color ───────────────────────────────────────────────────────

/// Brand gold as an `r, g, b` triple for `rgba()` strings.
pub const GOLD_RGB: (u8, u8, u8) = (200, 164, 92);
