// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Flat binary layout for rays, segments, rectangles and boxes.
//!
//! Layout rules:
//! - a fixed tuple of coordinates, no length prefix, no version tag;
//! - each coordinate big-endian in the domain's native width
//!   (`f64` = 8 bytes, `f32`/`i32` = 4 bytes);
//! - field order: ray = origin X,Y,Z then direction X,Y,Z; segment = `a`
//!   X,Y,Z then `b` X,Y,Z; rectangle = minX, minY, maxX, maxY.
//!
//! Changing the field count or order is a breaking change for stored data.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;
use tracing::debug;

use crate::aabb::Aabb;
use crate::rect::Rect;
use crate::ray::Ray;
use crate::scalar::Coord;
use crate::segment::LineSegment;
use crate::vec::{Vec2, Vec3};

/// Errors produced while decoding the flat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input ended before a complete value was read.
    #[error("truncated input: need {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes required for one value.
        needed: usize,
        /// Bytes available.
        remaining: usize,
    },
}

/// Types with a fixed-size flat encoding.
pub trait FlatCodec: Sized {
    /// Encoded size in bytes.
    const ENCODED_LEN: usize;

    /// Appends the encoding of `self` to `buf`.
    fn encode<B: BufMut>(&self, buf: &mut B);

    /// Reads one value from the front of `buf`.
    ///
    /// Nothing is consumed when the input is too short.
    fn decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError>;

    /// Encodes `self` into a fresh buffer.
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::ENCODED_LEN);
        self.encode(&mut buf);
        buf.freeze()
    }

    /// Decodes exactly one value from `bytes`, ignoring any trailing bytes.
    fn from_bytes(mut bytes: &[u8]) -> Result<Self, CodecError> {
        Self::decode(&mut bytes)
    }
}

fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<(), CodecError> {
    let remaining = buf.remaining();
    if remaining < needed {
        debug!(needed, remaining, "flat decode hit truncated input");
        return Err(CodecError::Truncated { needed, remaining });
    }
    Ok(())
}

fn put_vec3<T: Coord, B: BufMut>(v: &Vec3<T>, buf: &mut B) {
    v.x.put(buf);
    v.y.put(buf);
    v.z.put(buf);
}

fn get_vec3<T: Coord, B: Buf>(buf: &mut B) -> Vec3<T> {
    let x = T::get(buf);
    let y = T::get(buf);
    let z = T::get(buf);
    Vec3::new(x, y, z)
}

impl<T: Coord> FlatCodec for Ray<T> {
    const ENCODED_LEN: usize = 6 * T::WIDTH;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        put_vec3(&self.origin, buf);
        put_vec3(&self.direction, buf);
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        ensure_remaining(buf, Self::ENCODED_LEN)?;
        let origin = get_vec3(buf);
        let direction = get_vec3(buf);
        Ok(Self::new(origin, direction))
    }
}

impl<T: Coord> FlatCodec for LineSegment<T> {
    const ENCODED_LEN: usize = 6 * T::WIDTH;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        put_vec3(&self.a, buf);
        put_vec3(&self.b, buf);
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        ensure_remaining(buf, Self::ENCODED_LEN)?;
        let a = get_vec3(buf);
        let b = get_vec3(buf);
        Ok(Self::new(a, b))
    }
}

impl<T: Coord> FlatCodec for Rect<T> {
    const ENCODED_LEN: usize = 4 * T::WIDTH;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        self.min_x().put(buf);
        self.min_y().put(buf);
        self.max_x().put(buf);
        self.max_y().put(buf);
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        ensure_remaining(buf, Self::ENCODED_LEN)?;
        let min = Vec2::new(T::get(buf), T::get(buf));
        let max = Vec2::new(T::get(buf), T::get(buf));
        Ok(Self::new(min, max))
    }
}

impl<T: Coord> FlatCodec for Aabb<T> {
    const ENCODED_LEN: usize = 6 * T::WIDTH;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        put_vec3(&self.min(), buf);
        put_vec3(&self.max(), buf);
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        ensure_remaining(buf, Self::ENCODED_LEN)?;
        let min = get_vec3(buf);
        let max = get_vec3(buf);
        Ok(Self::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_left_untouched() {
        let mut input: &[u8] = &[0_u8; 10];
        let err = Ray::<f64>::decode(&mut input);
        assert_eq!(
            err,
            Err(CodecError::Truncated {
                needed: 48,
                remaining: 10
            })
        );
        assert_eq!(input.len(), 10);
    }
}
