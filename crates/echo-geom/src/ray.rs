// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::options;
use crate::scalar::Coord;
use crate::vec::Vec3;

/// Half-line with an origin and a direction.
///
/// The direction is stored exactly as given; it is not normalised and may be
/// zero. Equality compares the six components bit for bit (see
/// [`Coord::canonical_bits`]), never with an epsilon.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Ray<T> {
    /// Origin point.
    pub origin: Vec3<T>,
    /// Direction vector.
    pub direction: Vec3<T>,
}

/// Double-precision ray.
pub type Rayd = Ray<f64>;
/// Single-precision ray.
pub type Rayf = Ray<f32>;

impl<T: Coord> Ray<T> {
    /// Creates a ray from its origin and direction.
    pub const fn new(origin: Vec3<T>, direction: Vec3<T>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from raw components: origin then direction.
    pub const fn from_components(ox: T, oy: T, oz: T, dx: T, dy: T, dz: T) -> Self {
        Self::new(Vec3::new(ox, oy, oz), Vec3::new(dx, dy, dz))
    }

    /// Components in layout order: origin X,Y,Z then direction X,Y,Z.
    pub fn to_array(&self) -> [T; 6] {
        let [ox, oy, oz] = self.origin.to_array();
        let [dx, dy, dz] = self.direction.to_array();
        [ox, oy, oz, dx, dy, dz]
    }

    fn bits(&self) -> [u64; 6] {
        self.to_array().map(T::canonical_bits)
    }

    /// Renders `(ox oy oz) -> (dx dy dz)` through `fmt`.
    pub fn to_string_with(&self, fmt: &dyn NumberFormat) -> String {
        format!("{} -> {}", self.origin.render(fmt), self.direction.render(fmt))
    }
}

impl<T: Coord> PartialEq for Ray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl<T: Coord> Eq for Ray<T> {}

impl<T: Coord> Hash for Ray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl<T: Coord> fmt::Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&options::global().number_format()))
    }
}
