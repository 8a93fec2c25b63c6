// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Number formatting for the diagnostic text forms of rays, segments and
//! rectangles.
//!
//! Rendering is diagnostic only: the output is not meant to be parsed back.
//! Callers pass any [`NumberFormat`] to `to_string_with`; `Display` uses the
//! process-wide default built from [`crate::Options`].

use serde::{Deserialize, Serialize};

/// Caller-suppliable coordinate formatter.
pub trait NumberFormat {
    /// Formats a floating-point coordinate.
    fn format_f64(&self, value: f64) -> String;

    /// Formats an integer coordinate. Defaults to plain decimal.
    fn format_i64(&self, value: i64) -> String {
        value.to_string()
    }
}

/// Layout of the mantissa in [`FixedWidthFormat`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// One integer digit, `decimals` fraction digits and a signed exponent,
    /// e.g. ` 1.500E0` or `-2.500E-3`.
    #[default]
    Scientific,
    /// Plain fixed-point with `decimals` fraction digits, e.g. ` 1.500`.
    Fixed,
}

/// Fixed-width formatter: non-negative values get a leading space so columns
/// of coordinates line up with negative ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedWidthFormat {
    decimals: usize,
    notation: Notation,
}

impl FixedWidthFormat {
    /// Formatter with `decimals` fraction digits in the given notation.
    pub const fn new(decimals: usize, notation: Notation) -> Self {
        Self { decimals, notation }
    }

    /// Number of fraction digits.
    pub const fn decimals(&self) -> usize {
        self.decimals
    }

    /// Mantissa layout.
    pub const fn notation(&self) -> Notation {
        self.notation
    }
}

impl Default for FixedWidthFormat {
    fn default() -> Self {
        Self::new(3, Notation::Scientific)
    }
}

impl NumberFormat for FixedWidthFormat {
    fn format_f64(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        let sign = if value.is_sign_negative() { '-' } else { ' ' };
        if value.is_infinite() {
            return format!("{sign}Infinity");
        }
        let magnitude = value.abs();
        match self.notation {
            Notation::Fixed => format!("{sign}{magnitude:.prec$}", prec = self.decimals),
            Notation::Scientific => {
                let raw = format!("{magnitude:.prec$e}", prec = self.decimals);
                // `{:e}` emits exactly one 'e'; only negative exponents are signed.
                let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
                format!("{sign}{mantissa}E{exponent}")
            }
        }
    }
}

/// Formatter that defers to Rust's shortest round-trip `Display` output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PlainFormat;

impl NumberFormat for PlainFormat {
    fn format_f64(&self, value: f64) -> String {
        value.to_string()
    }
}

/// Formatter selected by [`crate::Options::number_format`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DefaultFormat {
    /// Options disabled fixed-width formatting.
    Plain(PlainFormat),
    /// Fixed-width formatting with the configured layout.
    Fixed(FixedWidthFormat),
}

impl NumberFormat for DefaultFormat {
    fn format_f64(&self, value: f64) -> String {
        match self {
            Self::Plain(f) => f.format_f64(value),
            Self::Fixed(f) => f.format_f64(value),
        }
    }

    fn format_i64(&self, value: i64) -> String {
        match self {
            Self::Plain(f) => f.format_i64(value),
            Self::Fixed(f) => f.format_i64(value),
        }
    }
}
