// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::scalar::{Coord, Promote, Scalar};

/// 2D point or offset in the numeric domain `T`.
///
/// * Used for rectangle corners, sizes, translation offsets and scale anchors.
/// * Arithmetic goes through [`Scalar`], so integer points saturate instead of
///   wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// Integer 2D point.
pub type Vec2i = Vec2<i32>;
/// Single-precision 2D point.
pub type Vec2f = Vec2<f32>;
/// Double-precision 2D point.
pub type Vec2d = Vec2<f64>;

impl<T> Vec2<T> {
    /// Creates a point from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vec2<T> {
    /// The origin.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Multiplies each component by its own factor.
    pub fn mul_xy(&self, sx: T, sy: T) -> Self {
        Self::new(self.x.mul_sat(sx), self.y.mul_sat(sy))
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min_of(other.x), self.y.min_of(other.y))
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max_of(other.x), self.y.max_of(other.y))
    }
}

impl<T: Coord> Vec2<T> {
    /// Promotes both components into a higher-precision domain.
    pub fn promote<U>(self) -> Vec2<U>
    where
        T: Promote<U>,
    {
        Vec2::new(self.x.promote(), self.y.promote())
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.add_sat(rhs.x), self.y.add_sat(rhs.y))
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.sub_sat(rhs.x), self.y.sub_sat(rhs.y))
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2i> for Vec2f {
    fn from(value: Vec2i) -> Self {
        value.promote()
    }
}

impl From<Vec2i> for Vec2d {
    fn from(value: Vec2i) -> Self {
        value.promote()
    }
}

impl From<Vec2f> for Vec2d {
    fn from(value: Vec2f) -> Self {
        value.promote()
    }
}

/// 3D point or direction in the numeric domain `T`.
///
/// Rays and segments use it as a plain aggregate; [`crate::Aabb`] also needs
/// componentwise min/max and saturating offsets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// Double-precision 3D point.
pub type Vec3d = Vec3<f64>;
/// Single-precision 3D point.
pub type Vec3f = Vec3<f32>;
/// Integer 3D point.
pub type Vec3i = Vec3<i32>;

impl<T> Vec3<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Scalar> Vec3<T> {
    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min_of(other.x),
            self.y.min_of(other.y),
            self.z.min_of(other.z),
        )
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max_of(other.x),
            self.y.max_of(other.y),
            self.z.max_of(other.z),
        )
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x.add_sat(rhs.x),
            self.y.add_sat(rhs.y),
            self.z.add_sat(rhs.z),
        )
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x.sub_sat(rhs.x),
            self.y.sub_sat(rhs.y),
            self.z.sub_sat(rhs.z),
        )
    }
}

impl<T: Coord> Vec3<T> {
    /// Renders `(x y z)` through `fmt`.
    pub(crate) fn render(&self, fmt: &dyn NumberFormat) -> String {
        format!(
            "({} {} {})",
            self.x.render(fmt),
            self.y.render(fmt),
            self.z.render(fmt)
        )
    }
}

/// Converts a 3-element array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_geom::Vec3d;
/// let v = Vec3d::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}
