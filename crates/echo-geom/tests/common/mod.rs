// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use echo_geom::{Rect, Recti, Vec2, Vec2i};

/// Tolerance for float checks that go through a few arithmetic steps.
pub const EPS_F32: f32 = 1.0e-5;
/// Tolerance for double checks that go through a few arithmetic steps.
pub const EPS_F64: f64 = 1.0e-12;

pub const ZERO: Vec2i = Vec2i::new(0, 0);
pub const MIN: Vec2i = Vec2i::new(-1, -1);
pub const MAX: Vec2i = Vec2i::new(1, 1);
pub const BASE: Recti = Recti::new(MIN, MAX);

/// Rectangles that fail validity in distinct ways: default, a point, a line.
pub fn invalid_rects() -> [Recti; 3] {
    [
        Recti::default(),
        Recti::from_point(ZERO),
        Recti::from_coords(MIN.x, MIN.y, MAX.x, MIN.y),
    ]
}

/// Rectangles sharing exactly one edge with `BASE`: right, left, top, bottom.
pub fn touching_rects() -> [Recti; 4] {
    [
        Recti::from_coords(MAX.x, MIN.y, MAX.x + 1, MAX.y),
        Recti::from_coords(MIN.x - 1, MIN.y, MIN.x, MAX.y),
        Recti::from_coords(MIN.x, MAX.y, MAX.x, MAX.y + 1),
        Recti::from_coords(MIN.x, MIN.y - 1, MAX.x, MIN.y),
    ]
}

#[track_caller]
pub fn assert_vec2_f32_eq(expected: Vec2<f32>, actual: Vec2<f32>, eps: f32) {
    assert!(
        (expected.x - actual.x).abs() <= eps && (expected.y - actual.y).abs() <= eps,
        "expected {expected:?}, got {actual:?} (eps {eps})"
    );
}

#[track_caller]
pub fn assert_rect_f32_eq(expected: Rect<f32>, actual: Rect<f32>, eps: f32) {
    assert_vec2_f32_eq(expected.min(), actual.min(), eps);
    assert_vec2_f32_eq(expected.max(), actual.max(), eps);
}

#[track_caller]
pub fn assert_rect_f64_eq(expected: Rect<f64>, actual: Rect<f64>, eps: f64) {
    let e = [expected.min_x(), expected.min_y(), expected.max_x(), expected.max_y()];
    let a = [actual.min_x(), actual.min_y(), actual.max_x(), actual.max_y()];
    assert!(
        e.iter().zip(a.iter()).all(|(x, y)| (x - y).abs() <= eps),
        "expected {expected:?}, got {actual:?} (eps {eps})"
    );
}
