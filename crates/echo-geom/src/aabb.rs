// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::options;
use crate::scalar::{Coord, Real, Scalar};
use crate::vec::Vec3;

/// Axis-aligned box with inclusive `min`/`max` corners.
///
/// Invariants:
/// - Valid iff `min < max` strictly on all three axes. A box built from a
///   single point (or flat on any axis) is invalid and contains nothing.
/// - A failed intersection yields [`Aabb::empty`], the same sentinel scheme
///   as [`crate::Rect`]: swapped bounds for integers, NaN for floats.
/// - Equality and hashing compare corners bit for bit.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Aabb<T> {
    min: Vec3<T>,
    max: Vec3<T>,
}

/// Integer box.
pub type Aabbi = Aabb<i32>;
/// Single-precision box.
pub type Aabbf = Aabb<f32>;
/// Double-precision box.
pub type Aabbd = Aabb<f64>;

impl<T: Coord> Aabb<T> {
    /// Constructs a box from its corners, stored as given.
    pub const fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self { min, max }
    }

    /// Constructs a box from corner coordinates.
    pub const fn from_coords(min_x: T, min_y: T, min_z: T, max_x: T, max_y: T, max_z: T) -> Self {
        Self::new(Vec3::new(min_x, min_y, min_z), Vec3::new(max_x, max_y, max_z))
    }

    /// Zero-extent box at `point`. Always invalid.
    pub const fn from_point(point: Vec3<T>) -> Self {
        Self::new(point, point)
    }

    /// The failure sentinel and union seed.
    pub const fn empty() -> Self {
        Self::from_coords(
            T::FAILED_MIN,
            T::FAILED_MIN,
            T::FAILED_MIN,
            T::FAILED_MAX,
            T::FAILED_MAX,
            T::FAILED_MAX,
        )
    }

    /// Bounding box of `points`; [`Aabb::empty`] for none.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3<T>>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |acc, p| acc.union_point(p))
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3<T> {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3<T> {
        self.max
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3<T> {
        self.max - self.min
    }

    /// `true` iff `min < max` strictly on all three axes.
    pub fn is_valid(&self) -> bool {
        self.min.x < self.max.x && self.min.y < self.max.y && self.min.z < self.max.z
    }

    /// `true` iff `self` is exactly the failure sentinel.
    pub fn is_failure(&self) -> bool {
        [self.min.x, self.min.y, self.min.z]
            .into_iter()
            .all(T::is_failed_min)
            && [self.max.x, self.max.y, self.max.z]
                .into_iter()
                .all(T::is_failed_max)
    }

    /// Inclusive containment; invalid boxes contain no point.
    pub fn contains_point(&self, p: Vec3<T>) -> bool {
        self.is_valid()
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Inclusive containment on raw coordinates.
    pub fn contains_xyz(&self, x: T, y: T, z: T) -> bool {
        self.contains_point(Vec3::new(x, y, z))
    }

    /// `true` iff `other` is valid and lies inside `self`.
    pub fn contains_aabb(&self, other: &Self) -> bool {
        other.is_valid()
            && self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }

    /// Strict overlap on all three axes. Touching faces do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlap(other).is_some_and(|b| b.is_valid())
    }

    /// Box of overlap, or [`Aabb::empty`] when it is not strictly positive.
    pub fn intersection(&self, other: &Self) -> Self {
        match self.overlap(other) {
            Some(overlap) if overlap.is_valid() => overlap,
            _ => Self::empty(),
        }
    }

    // Float `max_of` skips NaN, so invalid operands are rejected up front.
    fn overlap(&self, other: &Self) -> Option<Self> {
        if !(self.is_valid() && other.is_valid()) {
            return None;
        }
        Some(Self::new(self.min.max(&other.min), self.max.min(&other.max)))
    }

    /// Smallest box covering both operands.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Extends `self` to cover `point`.
    pub fn union_point(&self, point: Vec3<T>) -> Self {
        Self::new(self.min.min(&point), self.max.max(&point))
    }

    /// Shifts both corners by `offset`.
    pub fn translate(&self, offset: Vec3<T>) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Squared distance from `point` to the box; zero inside, NaN for a float
    /// box with a NaN corner.
    pub fn distance_squared(&self, point: Vec3<T>) -> T::Wide {
        let gaps = [
            axis_gap(point.x, self.min.x, self.max.x),
            axis_gap(point.y, self.min.y, self.max.y),
            axis_gap(point.z, self.min.z, self.max.z),
        ];
        gaps.into_iter()
            .fold(<T::Wide as Scalar>::ZERO, |acc, g| acc.add_sat(g.mul_sat(g)))
    }

    fn bits(&self) -> [u64; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
        .map(T::canonical_bits)
    }

    /// Renders `(minX minY minZ) < (maxX maxY maxZ)` through `fmt`.
    pub fn to_string_with(&self, fmt: &dyn NumberFormat) -> String {
        format!("{} < {}", self.min.render(fmt), self.max.render(fmt))
    }
}

fn axis_gap<T: Coord>(p: T, lo: T, hi: T) -> T::Wide {
    let (p, lo, hi) = (p.widen(), lo.widen(), hi.widen());
    p.mul_sat(<T::Wide as Scalar>::TWO)
        .sub_sat(lo.add_sat(hi))
        .abs_sat()
        .sub_sat(hi.sub_sat(lo))
        .clamp_non_negative()
        .half()
}

impl<T: Real> Aabb<T> {
    /// Euclidean distance from `point` to the box.
    pub fn distance(&self, point: Vec3<T>) -> T {
        self.distance_squared(point).sqrt()
    }

    /// Center point.
    pub fn center(&self) -> Vec3<T> {
        Vec3::new(
            self.min.x.add_sat(self.max.x).half(),
            self.min.y.add_sat(self.max.y).half(),
            self.min.z.add_sat(self.max.z).half(),
        )
    }
}

impl<T: Coord> PartialEq for Aabb<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl<T: Coord> Eq for Aabb<T> {}

impl<T: Coord> Hash for Aabb<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl<T: Coord> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&options::global().number_format()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_union_seed_and_failure() {
        let b = Aabbi::from_coords(-1, -2, -3, 4, 5, 6);
        assert_eq!(Aabbi::empty().union(&b), b);
        assert!(Aabbi::empty().is_failure());
        assert!(Aabbf::empty().is_failure());
        assert_eq!(Aabbf::empty(), Aabbf::empty());
    }

    #[test]
    fn axis_gap_matches_rect_form() {
        assert_eq!(axis_gap(7_i32, -1, 1), 6);
        assert!(axis_gap(0.0_f32, f32::NAN, f32::NAN).is_nan());
    }
}
