// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-geom: axis-aligned rectangle algebra plus ray and segment values.
//!
//! The rectangle algebra (validity, containment, intersection, union,
//! translation, scaling, distance) is written once over the [`Coord`] domain
//! trait and instantiated for `i32` ([`Recti`]), `f32` ([`Rectf`]) and `f64`
//! ([`Rectd`]).
//!
//! Failure is a value, not an error: an intersection without strict overlap
//! returns the domain's sentinel ([`Rect::empty`]). Integer rectangles use the
//! swapped bounds `min = i32::MAX, max = i32::MIN`; float rectangles use NaN.
//! Check [`Rect::is_valid`] on anything that can fail.
//!
//! [`Aabb`] carries the same validity, containment, intersection and union
//! rules into three dimensions.
//!
//! [`Ray`] and [`LineSegment`] are plain aggregates with exact equality, a
//! flat binary layout ([`FlatCodec`]) and a diagnostic text form.
#![forbid(unsafe_code)]

mod aabb;
/// Flat binary layout for rays, segments, rectangles and boxes.
pub mod codec;
pub mod format;
pub mod options;
mod ray;
mod rect;
pub mod scalar;
mod segment;
mod vec;

pub use aabb::{Aabb, Aabbd, Aabbf, Aabbi};
pub use codec::{CodecError, FlatCodec};
pub use format::{DefaultFormat, FixedWidthFormat, Notation, NumberFormat, PlainFormat};
pub use options::{Options, OptionsError};
pub use ray::{Ray, Rayd, Rayf};
pub use rect::{Rect, Rectd, Rectf, Recti};
pub use scalar::{Coord, Promote, Real, Scalar};
pub use segment::{LineSegment, LineSegmentd, LineSegmentf};
pub use vec::{Vec2, Vec2d, Vec2f, Vec2i, Vec3, Vec3d, Vec3f, Vec3i};
