// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{invalid_rects, touching_rects, BASE, MAX, MIN, ZERO};
use echo_geom::{Recti, Vec2i};

#[test]
fn corners_are_inclusive() {
    assert!(BASE.contains_point(MIN), "minimum corner is inclusive");
    assert!(BASE.contains_point(MAX), "maximum corner is inclusive");
    assert!(BASE.contains_xy(0, 0));
    assert!(!BASE.contains_xy(-2, -2));
    assert!(!BASE.contains_xy(2, 2));
    assert!(!BASE.contains_xy(-2, 0));
    assert!(!BASE.contains_xy(0, 2));
}

#[test]
fn contains_rect_cases() {
    assert!(BASE.contains_rect(&BASE), "contains itself");
    assert!(BASE.contains_rect(&Recti::from_coords(MIN.x, MIN.y, 0, 0)));
    assert!(BASE.contains_rect(&Recti::from_coords(0, 0, MAX.x, MAX.y)));
    assert!(!BASE.contains_rect(&Recti::from_coords(-2, -2, 2, 2)));
    assert!(!BASE.contains_rect(&Recti::from_coords(0, 0, 2, 1)));
}

#[test]
fn invalid_rects_are_never_contained() {
    for invalid in invalid_rects() {
        assert!(!invalid.is_valid(), "{invalid:?} should be invalid");
        assert!(!BASE.contains_rect(&invalid), "{invalid:?} contained");
    }
    assert!(!BASE.contains_rect(&Recti::empty()));
}

#[test]
fn intersection_with_self_is_identity() {
    assert_eq!(BASE.intersection(&BASE), BASE);
}

#[test]
fn intersection_when_contained_yields_self() {
    let bigger = Recti::from_coords(MIN.x - 1, MIN.y - 1, MAX.x + 1, MAX.y + 1);
    assert_eq!(BASE.intersection(&bigger), BASE);
    assert_eq!(bigger.intersection(&BASE), BASE);
}

#[test]
fn intersection_with_contained_yields_other() {
    let contained = [
        BASE,
        Recti::new(MIN, ZERO),
        Recti::new(ZERO, MAX),
    ];
    for other in contained {
        assert_eq!(BASE.intersection(&other), other);
    }
}

#[test]
fn intersection_on_partial_overlap() {
    let cases = [
        (Recti::from_coords(MIN.x - 1, MIN.y - 1, 0, 0), Recti::new(MIN, ZERO)),
        (Recti::from_coords(0, 0, MAX.x + 1, MAX.y + 1), Recti::new(ZERO, MAX)),
    ];
    for (other, expected) in cases {
        assert_eq!(BASE.intersection(&other), expected);
        assert!(BASE.intersects(&other));
    }
}

#[test]
fn intersection_with_disjoint_is_the_sentinel() {
    let disjoint = Recti::from_coords(7, 7, 42, 42);
    let result = BASE.intersection(&disjoint);
    assert!(!result.is_valid());
    assert!(result.is_failure());
    assert_eq!(result.min(), Vec2i::new(i32::MAX, i32::MAX));
    assert_eq!(result.max(), Vec2i::new(i32::MIN, i32::MIN));
    assert!(!BASE.intersects(&disjoint));
}

#[test]
fn intersection_with_invalid_fails() {
    for invalid in invalid_rects() {
        assert!(!BASE.intersection(&invalid).is_valid());
        assert!(!BASE.intersects(&invalid));
    }
}

#[test]
fn touching_rects_do_not_intersect() {
    for touching in touching_rects() {
        let result = BASE.intersection(&touching);
        assert!(!result.is_valid(), "touching {touching:?} intersected");
        assert!(result.is_failure());
        assert!(!BASE.intersects(&touching));
    }
}

#[test]
fn set_size_measures_from_min() {
    assert_eq!(
        Recti::from_coords(0, 0, 2, 2).with_size(3, 3),
        Recti::from_coords(0, 0, 3, 3)
    );
    assert_eq!(BASE.with_size(3, 3), Recti::from_coords(-1, -1, 2, 2));
    assert_eq!(BASE, Recti::from_coords(-1, -1, 1, 1), "with_size copies");

    let mut r = BASE;
    r.set_size(Vec2i::new(3, 3));
    assert_eq!(r, Recti::from_coords(-1, -1, 2, 2));
}

#[test]
fn size_and_area() {
    assert_eq!(BASE.size_x(), 2);
    assert_eq!(BASE.size_y(), 2);
    assert_eq!(BASE.size(), Vec2i::new(2, 2));
    assert_eq!(BASE.area(), 4_i64);
    assert_eq!(Recti::from_point(ZERO).area(), 0);
    assert!(Recti::from_coords(1, 0, 0, 1).area() < 0);
    let huge = Recti::from_coords(0, 0, 100_000, 100_000);
    assert_eq!(huge.area(), 10_000_000_000_i64);
}

#[test]
fn rect_from_point_is_invalid_and_empty() {
    let r = Recti::from_point(ZERO);
    assert!(!r.is_valid());
    assert!(!r.contains_point(ZERO), "a point rectangle does not contain itself");
    assert!(!r.intersection(&r).is_valid());
}

#[test]
fn union_with_points_and_rects() {
    let r = BASE.union_point(Vec2i::new(3, -4));
    assert_eq!(r, Recti::from_coords(-1, -4, 3, 1));
    let s = BASE.union(&Recti::from_coords(5, 5, 6, 6));
    assert_eq!(s, Recti::from_coords(-1, -1, 6, 6));
    assert_eq!(BASE.union(&BASE), BASE);
}

#[test]
fn union_accumulates_from_empty_seed() {
    let points = [Vec2i::new(3, 1), Vec2i::new(-2, 7), Vec2i::new(0, -5)];
    let mut acc = Recti::empty();
    for p in points {
        acc.union_point_assign(p);
    }
    assert_eq!(acc, Recti::from_coords(-2, -5, 3, 7));
    assert_eq!(Recti::from_points(points), acc);
    assert!(Recti::from_points(std::iter::empty()).is_failure());
}

#[test]
fn union_absorbs_degenerate_operands() {
    let line = Recti::from_coords(5, 0, 5, 3);
    assert_eq!(BASE.union(&line), Recti::from_coords(-1, -1, 5, 3));
    let mut r = BASE;
    r.union_assign(&Recti::default());
    assert_eq!(r, BASE);
}

#[test]
fn translate_preserves_validity() {
    assert_eq!(BASE.translate_xy(2, 3), Recti::from_coords(1, 2, 3, 4));
    let point = Recti::from_point(ZERO).translate(Vec2i::new(4, 4));
    assert!(!point.is_valid());
    assert_eq!(point, Recti::from_point(Vec2i::new(4, 4)));
}

#[test]
fn translate_saturates_at_bounds() {
    let r = Recti::from_coords(0, 0, i32::MAX - 1, 10);
    let moved = r.translate_xy(10, 0);
    assert_eq!(moved.max_x(), i32::MAX);
    assert_eq!(moved.min_x(), 10);
}

#[test]
fn scale_about_origin_and_anchor() {
    assert_eq!(BASE.scale(3), Recti::from_coords(-3, -3, 3, 3));
    assert_eq!(BASE.scale_xy(2, 5), Recti::from_coords(-2, -5, 2, 5));
    let r = Recti::from_coords(1, 1, 3, 3);
    assert_eq!(r.scale_about(2, Vec2i::new(1, 1)), Recti::from_coords(1, 1, 5, 5));
    assert_eq!(
        r.scale_xy_about(2, 3, Vec2i::new(3, 3)),
        Recti::from_coords(-1, -3, 3, 3)
    );
}

#[test]
fn negative_scale_renormalises_corners() {
    let r = Recti::from_coords(1, 2, 3, 5);
    let mirrored = r.scale_xy(-1, 1);
    assert_eq!(mirrored, Recti::from_coords(-3, 2, -1, 5));
    assert!(mirrored.is_valid());
    assert_eq!(r.scale(-2), Recti::from_coords(-6, -10, -2, -4));
}

#[test]
fn scaling_keeps_invalid_rects_invalid() {
    let inverted = Recti::from_coords(3, 3, 1, 1);
    assert!(!inverted.scale(-2).is_valid());
    assert!(!inverted.scale(2).is_valid());
    assert!(!BASE.scale(0).is_valid());
    assert!(!Recti::empty().scale(2).is_valid());
}

#[test]
fn distance_squared_closed_form() {
    assert_eq!(BASE.distance_squared(Vec2i::new(3, 0)), 4);
    assert_eq!(BASE.distance_squared(Vec2i::new(0, 0)), 0);
    assert_eq!(BASE.distance_squared(MAX), 0);
    assert_eq!(BASE.distance_squared(Vec2i::new(4, -5)), 9 + 16);
    assert_eq!(BASE.distance_squared(Vec2i::new(-3, 0)), 4);
}

#[test]
fn promotion_queries_do_not_mutate() {
    let promoted = BASE.promote::<f32>();
    assert!(promoted.contains_point(echo_geom::Vec2f::new(0.5, -0.5)));
    assert!(!promoted.contains_point(echo_geom::Vec2f::new(1.5, 0.0)));
    let wide = BASE.promote::<f64>();
    assert!(wide.intersects(&echo_geom::Rectd::from_coords(0.5, 0.5, 4.0, 4.0)));
    assert_eq!(BASE, Recti::from_coords(-1, -1, 1, 1));
}

#[test]
fn display_renders_integers_plainly() {
    assert_eq!(
        BASE.to_string_with(&echo_geom::FixedWidthFormat::default()),
        "(-1 -1) < (1 1)"
    );
}

#[test]
fn integer_rect_answers_float_queries() {
    assert!(BASE.contains_point_in(echo_geom::Vec2f::new(0.5, -0.5)));
    assert!(!BASE.contains_point_in(echo_geom::Vec2f::new(1.5, 0.0)));
    assert!(BASE.contains_point_in(echo_geom::Vec2d::new(-1.0, 1.0)));
    assert!(BASE.intersects_rect_in(&echo_geom::Rectf::from_coords(0.5, 0.5, 3.0, 3.0)));
    assert!(!BASE.intersects_rect_in(&echo_geom::Rectf::from_coords(1.0, 0.0, 3.0, 3.0)));
    assert!(BASE.contains_rect_in(&echo_geom::Rectd::from_coords(-0.5, -0.5, 0.5, 1.0)));
    assert!(!BASE.contains_rect_in(&echo_geom::Rectd::from_coords(-0.5, -0.5, 0.5, 1.5)));
}
