// Host-side tests for the camera and the damped orbit controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/core/camera.rs");
}
mod controls {
    include!("../src/core/controls.rs");
}

use camera::*;
use controls::*;
use glam::Vec3;

fn camera() -> Camera {
    Camera {
        eye: Vec3::new(1.0, 1.0, 4.0),
        target: Vec3::new(0.0, -0.8, 0.0),
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: 75f32.to_radians(),
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn set_aspect_follows_surface_and_ignores_zero() {
    let mut c = camera();
    c.set_aspect(1920, 1080);
    assert!((c.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    c.set_aspect(0, 600);
    assert!((c.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn target_projects_to_screen_center() {
    let c = camera();
    let clip = c.view_proj() * c.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn controls_start_at_given_eye() {
    let eye = Vec3::new(1.0, 1.0, 4.0);
    let target = Vec3::new(0.0, -0.8, 0.0);
    let c = OrbitControls::new(eye, target, 1.0, 30.0);
    assert!((c.eye() - eye).length() < 1e-4);
    assert!((c.distance() - (eye - target).length()).abs() < 1e-4);
}

#[test]
fn update_without_input_is_stationary() {
    let eye = Vec3::new(0.0, 2.0, 5.0);
    let mut c = OrbitControls::new(eye, Vec3::ZERO, 1.0, 30.0);
    for _ in 0..10 {
        assert!((c.update() - eye).length() < 1e-4);
    }
}

#[test]
fn damped_rotation_converges_to_full_delta() {
    let mut c = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0, 30.0);
    let start = c.azimuth();
    // a drag of half the viewport height is half a turn
    c.rotate(-500.0, 0.0, 1000.0);
    c.update();
    let first = c.azimuth() - start;
    assert!(first > 0.0 && first < std::f32::consts::PI);
    for _ in 0..2_000 {
        c.update();
    }
    assert!((c.azimuth() - start - std::f32::consts::PI).abs() < 1e-3);
}

#[test]
fn polar_angle_stays_off_the_poles() {
    let mut c = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0, 30.0);
    c.rotate(0.0, 100_000.0, 100.0);
    for _ in 0..500 {
        c.update();
    }
    assert!(c.polar() > 0.0 && c.polar() < std::f32::consts::PI);
    c.rotate(0.0, -200_000.0, 100.0);
    for _ in 0..500 {
        c.update();
    }
    assert!(c.polar() > 0.0 && c.polar() < std::f32::consts::PI);
}

#[test]
fn zoom_is_clamped_to_distance_range() {
    let mut c = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 2.0, 8.0);
    for _ in 0..200 {
        c.zoom(1.0);
        c.update();
    }
    assert!((c.distance() - 8.0).abs() < 1e-4);
    for _ in 0..200 {
        c.zoom(-1.0);
        c.update();
    }
    assert!((c.distance() - 2.0).abs() < 1e-4);
}

#[test]
fn zoom_in_moves_closer() {
    let mut c = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0, 30.0);
    c.zoom(-1.0);
    c.update();
    assert!(c.distance() < 5.0);
}
