#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn still(x: f64, y: f64) -> Particle {
    Particle { x, y, vx: 0.0, vy: 0.0, radius: 1.0, opacity: 0.5 }
}

fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle { x, y, vx, vy, radius: 1.0, opacity: 0.5 }
}

fn constant_rng(value: f64) -> impl FnMut() -> f64 {
    move || value
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn seeded_creates_requested_count_inside_bounds() {
    let mut seq = [0.0, 0.25, 0.5, 0.75, 0.99].into_iter().cycle();
    let mut rng = move || seq.next().unwrap_or(0.5);
    let field = ParticleField::seeded(45, 800.0, 600.0, &mut rng);
    assert_eq!(field.particles().len(), 45);
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x <= 800.0);
        assert!(p.y >= 0.0 && p.y <= 600.0);
        assert!(p.vx.abs() <= MAX_INITIAL_SPEED);
        assert!(p.vy.abs() <= MAX_INITIAL_SPEED);
        assert!(p.radius >= MIN_RADIUS && p.radius < MIN_RADIUS + RADIUS_SPREAD);
        assert!(p.opacity >= MIN_OPACITY && p.opacity < MIN_OPACITY + OPACITY_SPREAD);
    }
}

#[test]
fn midpoint_rng_seeds_particle_at_rest_in_center() {
    let p = Particle::random(100.0, 50.0, &mut constant_rng(0.5));
    assert_eq!(p.x, 50.0);
    assert_eq!(p.y, 25.0);
    assert_eq!(p.vx, 0.0);
    assert_eq!(p.vy, 0.0);
}

// =============================================================
// Motion
// =============================================================

#[test]
fn step_integrates_and_damps_velocity() {
    let mut field = ParticleField::from_particles(vec![moving(10.0, 10.0, 1.0, -1.0)], 100.0, 100.0);
    field.step();
    let p = field.particles()[0];
    assert_eq!(p.x, 11.0);
    assert_eq!(p.y, 9.0);
    assert!((p.vx - DAMPING).abs() < 1e-12);
    assert!((p.vy + DAMPING).abs() < 1e-12);
}

#[test]
fn step_bounces_off_right_wall() {
    let mut field = ParticleField::from_particles(vec![moving(99.9, 50.0, 0.5, 0.0)], 100.0, 100.0);
    field.step();
    let p = field.particles()[0];
    assert!(p.x > 100.0);
    assert!(p.vx < 0.0);
    assert!((p.vx + 0.5 * DAMPING).abs() < 1e-12);
}

#[test]
fn step_bounces_off_top_wall() {
    let mut field = ParticleField::from_particles(vec![moving(50.0, 0.1, 0.0, -0.5)], 100.0, 100.0);
    field.step();
    assert!(field.particles()[0].vy > 0.0);
}

#[test]
fn damping_applies_without_other_forces() {
    let mut field = ParticleField::from_particles(vec![moving(50.0, 50.0, 0.2, 0.2)], 100.0, 100.0);
    for _ in 0..10 {
        field.step();
    }
    let expected = 0.2 * DAMPING.powi(10);
    assert!((field.particles()[0].vx - expected).abs() < 1e-12);
}

#[test]
fn pointer_within_radius_pushes_particle_away() {
    let mut field = ParticleField::from_particles(vec![still(100.0, 100.0)], 400.0, 400.0);
    field.set_pointer(Some(Point::new(150.0, 100.0)));
    field.step();
    let p = field.particles()[0];
    assert!(p.vx < 0.0, "particle should move away from pointer on the right");
    assert_eq!(p.vy, 0.0);
}

#[test]
fn pointer_impulse_scales_with_proximity() {
    let mut near = ParticleField::from_particles(vec![still(100.0, 100.0)], 400.0, 400.0);
    near.set_pointer(Some(Point::new(110.0, 100.0)));
    near.step();

    let mut far = ParticleField::from_particles(vec![still(100.0, 100.0)], 400.0, 400.0);
    far.set_pointer(Some(Point::new(250.0, 100.0)));
    far.step();

    let near_force = near.particles()[0].vx.abs() / 10.0;
    let far_force = far.particles()[0].vx.abs() / 150.0;
    assert!(near_force > far_force);
}

#[test]
fn pointer_outside_radius_has_no_effect() {
    let mut field = ParticleField::from_particles(vec![still(10.0, 10.0)], 800.0, 800.0);
    field.set_pointer(Some(Point::new(10.0 + POINTER_RADIUS + 1.0, 10.0)));
    field.step();
    assert_eq!(field.particles()[0].vx, 0.0);
}

#[test]
fn cleared_pointer_stops_influence() {
    let mut field = ParticleField::from_particles(vec![still(100.0, 100.0)], 400.0, 400.0);
    field.set_pointer(Some(Point::new(120.0, 100.0)));
    field.set_pointer(None);
    field.step();
    assert_eq!(field.particles()[0].vx, 0.0);
}

// =============================================================
// Links
// =============================================================

#[test]
fn links_cover_each_close_pair_once() {
    let field = ParticleField::from_particles(
        vec![still(0.0, 0.0), still(30.0, 40.0), still(1000.0, 1000.0)],
        2000.0,
        2000.0,
    );
    let links = field.links();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].alpha - link_alpha(50.0)).abs() < 1e-12);
}

#[test]
fn link_alpha_decays_linearly() {
    assert!((link_alpha(0.0) - LINK_MAX_ALPHA).abs() < 1e-12);
    assert!((link_alpha(CONNECTION_DISTANCE / 2.0) - LINK_MAX_ALPHA / 2.0).abs() < 1e-12);
    assert_eq!(link_alpha(CONNECTION_DISTANCE), 0.0);
    assert_eq!(link_alpha(CONNECTION_DISTANCE * 3.0), 0.0);
}
