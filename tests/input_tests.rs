// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_for_its_pointer_only() {
    let mut d = DragState::default();
    assert!(d.step(1, Vec2::new(5.0, 5.0)).is_none());

    d.begin(1, Vec2::new(10.0, 10.0));
    assert_eq!(d.step(1, Vec2::new(15.0, 8.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(d.step(2, Vec2::new(50.0, 50.0)), None);
    assert_eq!(d.step(1, Vec2::new(15.0, 9.0)), Some(Vec2::new(0.0, 1.0)));

    d.end(2);
    assert!(d.active);
    d.end(1);
    assert!(d.step(1, Vec2::new(0.0, 0.0)).is_none());
}

#[test]
fn wheel_lines_normalizes_delta_modes() {
    assert!((wheel_lines(100.0, 0) - 1.0).abs() < 1e-6);
    assert!((wheel_lines(-3.0, 1) + 3.0).abs() < 1e-6);
    assert!((wheel_lines(1.0, 2) - 10.0).abs() < 1e-6);
}
