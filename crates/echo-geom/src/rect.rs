// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::options;
use crate::scalar::{Coord, Promote, Real, Scalar};
use crate::vec::Vec2;

/// Axis-aligned rectangle with inclusive `min`/`max` corners.
///
/// Invariants:
/// - A rectangle is *valid* iff `min.x < max.x && min.y < max.y`. Zero extent
///   on either axis (a point or a line) is invalid, not merely empty.
/// - Invalid rectangles are legal values. Every operation defines its result
///   for them; none panics.
/// - Size is always derived from the corners; nothing else is stored.
///
/// All operations return new values. `Rect` is `Copy`, so results never alias
/// their inputs and the in-place mutators compute into locals first.
///
/// Equality and hashing compare corners bit for bit through
/// [`Coord::canonical_bits`], like [`crate::Ray`]: the float sentinel equals
/// itself (`Rectf::empty() == Rectf::empty()`) and `-0.0 != 0.0`.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Rect<T> {
    min: Vec2<T>,
    max: Vec2<T>,
}

/// Integer rectangle.
pub type Recti = Rect<i32>;
/// Single-precision rectangle.
pub type Rectf = Rect<f32>;
/// Double-precision rectangle.
pub type Rectd = Rect<f64>;

impl<T: Coord> Rect<T> {
    /// Constructs a rectangle from its corners, stored as given.
    ///
    /// No reordering happens: `new((1, 1), (0, 0))` is an inverted, invalid
    /// rectangle.
    pub const fn new(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self { min, max }
    }

    /// Constructs a rectangle from corner coordinates.
    pub const fn from_coords(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Zero-extent rectangle at `point`. Always invalid.
    pub const fn from_point(point: Vec2<T>) -> Self {
        Self::new(point, point)
    }

    /// Rectangle with the given `min` corner and `size`.
    pub fn from_min_size(min: Vec2<T>, size: Vec2<T>) -> Self {
        Self::new(min, min + size)
    }

    /// The failure sentinel, also the identity seed for union accumulation.
    ///
    /// Integer domain: `min = (MAX, MAX)`, `max = (MIN, MIN)`.
    /// Float domains: every component NaN.
    pub const fn empty() -> Self {
        Self::from_coords(T::FAILED_MIN, T::FAILED_MIN, T::FAILED_MAX, T::FAILED_MAX)
    }

    /// Smallest rectangle containing every point; [`Rect::empty`] for none.
    ///
    /// The result has zero extent (and is invalid) when all points share an
    /// axis coordinate.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec2<T>>,
    {
        points
            .into_iter()
            .fold(Self::empty(), |acc, p| acc.union_point(p))
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec2<T> {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec2<T> {
        self.max
    }

    /// Minimum x coordinate.
    pub fn min_x(&self) -> T {
        self.min.x
    }

    /// Minimum y coordinate.
    pub fn min_y(&self) -> T {
        self.min.y
    }

    /// Maximum x coordinate.
    pub fn max_x(&self) -> T {
        self.max.x
    }

    /// Maximum y coordinate.
    pub fn max_y(&self) -> T {
        self.max.y
    }

    /// Replaces the minimum corner.
    pub fn set_min(&mut self, min: Vec2<T>) -> &mut Self {
        self.min = min;
        self
    }

    /// Replaces the maximum corner.
    pub fn set_max(&mut self, max: Vec2<T>) -> &mut Self {
        self.max = max;
        self
    }

    /// Extent along x. Zero or negative for invalid rectangles.
    pub fn size_x(&self) -> T {
        self.max.x.sub_sat(self.min.x)
    }

    /// Extent along y. Zero or negative for invalid rectangles.
    pub fn size_y(&self) -> T {
        self.max.y.sub_sat(self.min.y)
    }

    /// Extent along both axes.
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.size_x(), self.size_y())
    }

    /// Area in the widened domain. May be zero or negative when invalid.
    pub fn area(&self) -> T::Wide {
        let dx = self.max.x.widen().sub_sat(self.min.x.widen());
        let dy = self.max.y.widen().sub_sat(self.min.y.widen());
        dx.mul_sat(dy)
    }

    /// Keeps the `min` corner and moves `max` to `min + size`.
    pub fn set_size(&mut self, size: Vec2<T>) -> &mut Self {
        let max = self.min + size;
        self.max = max;
        self
    }

    /// Copy of `self` resized from its `min` corner.
    pub fn with_size(&self, size_x: T, size_y: T) -> Self {
        Self::from_min_size(self.min, Vec2::new(size_x, size_y))
    }

    /// `true` iff `min < max` strictly on both axes.
    pub fn is_valid(&self) -> bool {
        self.min.x < self.max.x && self.min.y < self.max.y
    }

    /// `true` iff `self` is exactly the failure sentinel of its domain.
    pub fn is_failure(&self) -> bool {
        self.min.x.is_failed_min()
            && self.min.y.is_failed_min()
            && self.max.x.is_failed_max()
            && self.max.y.is_failed_max()
    }

    /// Inclusive point containment. An invalid rectangle contains no point,
    /// including the point it was built from.
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        self.is_valid()
            && point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Inclusive point containment on raw coordinates.
    pub fn contains_xy(&self, x: T, y: T) -> bool {
        self.contains_point(Vec2::new(x, y))
    }

    /// `true` iff `other` is valid and lies inside `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.is_valid()
            && self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// `true` iff both operands are valid and their overlap is strictly
    /// positive on both axes.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlap(other).is_some_and(|r| r.is_valid())
    }

    /// Rectangle of overlap, or [`Rect::empty`] when either operand is invalid
    /// or the overlap is not strictly positive on both axes.
    pub fn intersection(&self, other: &Self) -> Self {
        match self.overlap(other) {
            Some(overlap) if overlap.is_valid() => overlap,
            _ => Self::empty(),
        }
    }

    /// Overlap of two valid operands; `None` when either operand is invalid.
    ///
    /// The explicit check matters for floats, where `max_of` skips NaN and a
    /// NaN operand would otherwise vanish from the result.
    fn overlap(&self, other: &Self) -> Option<Self> {
        if !(self.is_valid() && other.is_valid()) {
            return None;
        }
        Some(Self::new(self.min.max(&other.min), self.max.min(&other.max)))
    }

    /// Smallest rectangle covering both operands. Never fails.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Extends `self` to cover `point`, treated as a zero-extent rectangle.
    pub fn union_point(&self, point: Vec2<T>) -> Self {
        Self::new(self.min.min(&point), self.max.max(&point))
    }

    /// In-place [`Rect::union`].
    pub fn union_assign(&mut self, other: &Self) -> &mut Self {
        *self = self.union(other);
        self
    }

    /// In-place [`Rect::union_point`].
    pub fn union_point_assign(&mut self, point: Vec2<T>) -> &mut Self {
        *self = self.union_point(point);
        self
    }

    /// Shifts both corners by `offset`.
    pub fn translate(&self, offset: Vec2<T>) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Shifts both corners by `(x, y)`.
    pub fn translate_xy(&self, x: T, y: T) -> Self {
        self.translate(Vec2::new(x, y))
    }

    /// Scales both corners about the origin by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        self.scale_xy(factor, factor)
    }

    /// Scales about the origin with independent per-axis factors.
    ///
    /// A negative factor mirrors the rectangle; the corners of that axis are
    /// swapped afterwards so `min` stays the lower edge. Swapping keeps an
    /// invalid rectangle invalid.
    pub fn scale_xy(&self, sx: T, sy: T) -> Self {
        let a = self.min.mul_xy(sx, sy);
        let b = self.max.mul_xy(sx, sy);
        let (min_x, max_x) = if sx < T::ZERO { (b.x, a.x) } else { (a.x, b.x) };
        let (min_y, max_y) = if sy < T::ZERO { (b.y, a.y) } else { (a.y, b.y) };
        Self::from_coords(min_x, min_y, max_x, max_y)
    }

    /// Scales about `anchor` by `factor`.
    pub fn scale_about(&self, factor: T, anchor: Vec2<T>) -> Self {
        self.scale_xy_about(factor, factor, anchor)
    }

    /// Scales about `anchor` with independent per-axis factors.
    ///
    /// Equivalent to translating by `-anchor`, scaling, then translating back.
    pub fn scale_xy_about(&self, sx: T, sy: T, anchor: Vec2<T>) -> Self {
        let local = Self::new(self.min - anchor, self.max - anchor);
        local.scale_xy(sx, sy).translate(anchor)
    }

    /// Squared distance from `point` to the nearest point of the rectangle.
    ///
    /// Zero when the point lies inside or on the boundary. NaN for a float
    /// rectangle with any NaN corner, including [`Rect::empty`]. Computed with the
    /// closed form `dx = max(|2·px − (minX + maxX)| − sizeX, 0) / 2` in the
    /// widened domain; for integers the numerator is always even, so the
    /// halving is exact.
    pub fn distance_squared(&self, point: Vec2<T>) -> T::Wide {
        let dx = Self::axis_gap(point.x, self.min.x, self.max.x);
        let dy = Self::axis_gap(point.y, self.min.y, self.max.y);
        dx.mul_sat(dx).add_sat(dy.mul_sat(dy))
    }

    fn axis_gap(p: T, lo: T, hi: T) -> T::Wide {
        let (p, lo, hi) = (p.widen(), lo.widen(), hi.widen());
        let center2 = lo.add_sat(hi);
        let size = hi.sub_sat(lo);
        p.mul_sat(<T::Wide as Scalar>::TWO)
            .sub_sat(center2)
            .abs_sat()
            .sub_sat(size)
            .clamp_non_negative()
            .half()
    }

    /// Lifts the rectangle into a higher-precision domain.
    ///
    /// This is how an integer rectangle is tested against float or double
    /// points and rectangles: the query runs on the promoted copy.
    pub fn promote<U: Coord>(&self) -> Rect<U>
    where
        T: Promote<U>,
    {
        Rect::new(self.min.promote(), self.max.promote())
    }

    /// [`Rect::contains_point`] against a lower-precision point.
    pub fn contains_point_of<U: Coord + Promote<T>>(&self, point: Vec2<U>) -> bool {
        self.contains_point(point.promote())
    }

    /// [`Rect::contains_rect`] against a lower-precision rectangle.
    pub fn contains_rect_of<U: Coord + Promote<T>>(&self, other: &Rect<U>) -> bool {
        self.contains_rect(&other.promote())
    }

    /// [`Rect::intersects`] against a lower-precision rectangle.
    pub fn intersects_rect_of<U: Coord + Promote<T>>(&self, other: &Rect<U>) -> bool {
        self.intersects(&other.promote())
    }

    /// [`Rect::intersection`] against a lower-precision rectangle.
    pub fn intersection_of<U: Coord + Promote<T>>(&self, other: &Rect<U>) -> Self {
        self.intersection(&other.promote())
    }

    /// [`Rect::union`] against a lower-precision rectangle.
    pub fn union_of<U: Coord + Promote<T>>(&self, other: &Rect<U>) -> Self {
        self.union(&other.promote())
    }

    /// [`Rect::union_point`] against a lower-precision point.
    pub fn union_point_of<U: Coord + Promote<T>>(&self, point: Vec2<U>) -> Self {
        self.union_point(point.promote())
    }

    /// [`Rect::contains_point`] on a copy promoted into the point's domain.
    ///
    /// The integer rectangle stays integer; only the query runs in `U`.
    pub fn contains_point_in<U: Coord>(&self, point: Vec2<U>) -> bool
    where
        T: Promote<U>,
    {
        self.promote::<U>().contains_point(point)
    }

    /// [`Rect::contains_rect`] on a copy promoted into `other`'s domain.
    pub fn contains_rect_in<U: Coord>(&self, other: &Rect<U>) -> bool
    where
        T: Promote<U>,
    {
        self.promote::<U>().contains_rect(other)
    }

    /// [`Rect::intersects`] on a copy promoted into `other`'s domain.
    pub fn intersects_rect_in<U: Coord>(&self, other: &Rect<U>) -> bool
    where
        T: Promote<U>,
    {
        self.promote::<U>().intersects(other)
    }

    fn bits(&self) -> [u64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y].map(T::canonical_bits)
    }

    /// Renders `(minX minY) < (maxX maxY)` through `fmt`.
    pub fn to_string_with(&self, fmt: &dyn NumberFormat) -> String {
        format!(
            "({} {}) < ({} {})",
            self.min.x.render(fmt),
            self.min.y.render(fmt),
            self.max.x.render(fmt),
            self.max.y.render(fmt)
        )
    }
}

impl<T: Real> Rect<T> {
    /// Euclidean distance from `point` to the rectangle.
    pub fn distance(&self, point: Vec2<T>) -> T {
        self.distance_squared(point).sqrt()
    }

    /// Center point.
    pub fn center(&self) -> Vec2<T> {
        Vec2::new(
            self.min.x.add_sat(self.max.x).half(),
            self.min.y.add_sat(self.max.y).half(),
        )
    }
}

impl From<Recti> for Rectf {
    fn from(value: Recti) -> Self {
        value.promote()
    }
}

impl From<Recti> for Rectd {
    fn from(value: Recti) -> Self {
        value.promote()
    }
}

impl From<Rectf> for Rectd {
    fn from(value: Rectf) -> Self {
        value.promote()
    }
}

impl<T: Coord> PartialEq for Rect<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl<T: Coord> Eq for Rect<T> {}

impl<T: Coord> Hash for Rect<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl<T: Coord> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&options::global().number_format()))
    }
}
