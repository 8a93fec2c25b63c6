// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::options;
use crate::scalar::Coord;
use crate::vec::Vec3;

/// Line segment between endpoints `a` and `b`.
///
/// Equality and hashing are **ordered**: `(a, b)` and `(b, a)` are different
/// values even though they cover the same points. Use
/// [`LineSegment::eq_unordered`] or compare [`LineSegment::canonical`] forms
/// when direction does not matter. Components compare bit for bit, as for
/// [`crate::Ray`].
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct LineSegment<T> {
    /// First endpoint.
    pub a: Vec3<T>,
    /// Second endpoint.
    pub b: Vec3<T>,
}

/// Double-precision segment.
pub type LineSegmentd = LineSegment<f64>;
/// Single-precision segment.
pub type LineSegmentf = LineSegment<f32>;

impl<T: Coord> LineSegment<T> {
    /// Creates a segment from its endpoints.
    pub const fn new(a: Vec3<T>, b: Vec3<T>) -> Self {
        Self { a, b }
    }

    /// Creates a segment from raw components: `a` X,Y,Z then `b` X,Y,Z.
    pub const fn from_components(ax: T, ay: T, az: T, bx: T, by: T, bz: T) -> Self {
        Self::new(Vec3::new(ax, ay, az), Vec3::new(bx, by, bz))
    }

    /// Components in layout order: `a` X,Y,Z then `b` X,Y,Z.
    pub fn to_array(&self) -> [T; 6] {
        let [ax, ay, az] = self.a.to_array();
        let [bx, by, bz] = self.b.to_array();
        [ax, ay, az, bx, by, bz]
    }

    /// The same segment with endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Endpoints ordered so `a` precedes `b` lexicographically by `(x, y, z)`
    /// under [`Coord::cmp_total`].
    pub fn canonical(&self) -> Self {
        if Self::cmp_points(&self.a, &self.b) == Ordering::Greater {
            self.reversed()
        } else {
            *self
        }
    }

    /// `true` if both segments cover the same endpoints in either order.
    pub fn eq_unordered(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }

    fn cmp_points(p: &Vec3<T>, q: &Vec3<T>) -> Ordering {
        p.x.cmp_total(q.x)
            .then_with(|| p.y.cmp_total(q.y))
            .then_with(|| p.z.cmp_total(q.z))
    }

    fn bits(&self) -> [u64; 6] {
        self.to_array().map(T::canonical_bits)
    }

    /// Renders `(ax ay az) - (bx by bz)` through `fmt`.
    pub fn to_string_with(&self, fmt: &dyn NumberFormat) -> String {
        format!("{} - {}", self.a.render(fmt), self.b.render(fmt))
    }
}

impl<T: Coord> PartialEq for LineSegment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl<T: Coord> Eq for LineSegment<T> {}

impl<T: Coord> Hash for LineSegment<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl<T: Coord> fmt::Display for LineSegment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&options::global().number_format()))
    }
}
