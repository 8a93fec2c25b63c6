// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Process-wide rendering options.
//!
//! Sources, lowest precedence first: built-in defaults, then the environment
//! (`ECHO_GEOM_FORMAT`, `ECHO_GEOM_FORMAT_DECIMALS`,
//! `ECHO_GEOM_FORMAT_NOTATION`). Tools that keep options in a JSON document
//! use [`Options::from_json`]. The global instance is resolved once, on first
//! use, and never changes afterwards.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::format::{DefaultFormat, FixedWidthFormat, Notation, PlainFormat};

/// Environment variable toggling fixed-width number formatting.
pub const ENV_FORMAT: &str = "ECHO_GEOM_FORMAT";
/// Environment variable holding the number of fraction digits.
pub const ENV_FORMAT_DECIMALS: &str = "ECHO_GEOM_FORMAT_DECIMALS";
/// Environment variable selecting `scientific` or `fixed` notation.
pub const ENV_FORMAT_NOTATION: &str = "ECHO_GEOM_FORMAT_NOTATION";

/// Upper bound on fraction digits; more than this adds no information to an
/// `f64`.
pub const MAX_DECIMALS: usize = 17;

/// Error type for options parsing.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The JSON document could not be parsed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A field held a value outside its accepted range.
    #[error("invalid value for {key}: {value:?}")]
    Invalid {
        /// Option or environment variable name.
        key: &'static str,
        /// Offending raw value.
        value: String,
    },
}

/// Text rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Route coordinates through the fixed-width formatter. When `false`,
    /// `Display` uses plain shortest round-trip output.
    pub format_numbers: bool,
    /// Fraction digits for the fixed-width formatter.
    pub decimals: usize,
    /// Mantissa layout for the fixed-width formatter.
    pub notation: Notation,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format_numbers: true,
            decimals: 3,
            notation: Notation::Scientific,
        }
    }
}

impl Options {
    /// Parses options from a JSON document. Missing fields keep defaults.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()
    }

    /// Resolves options from the process environment, ignoring bad values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves options through `lookup`, keeping the default for any
    /// variable that is unset or malformed.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(raw) = lookup(ENV_FORMAT) {
            match parse_bool(ENV_FORMAT, &raw) {
                Ok(v) => options.format_numbers = v,
                Err(err) => warn!(%err, "ignoring environment override"),
            }
        }
        if let Some(raw) = lookup(ENV_FORMAT_DECIMALS) {
            match parse_decimals(ENV_FORMAT_DECIMALS, &raw) {
                Ok(v) => options.decimals = v,
                Err(err) => warn!(%err, "ignoring environment override"),
            }
        }
        if let Some(raw) = lookup(ENV_FORMAT_NOTATION) {
            match parse_notation(ENV_FORMAT_NOTATION, &raw) {
                Ok(v) => options.notation = v,
                Err(err) => warn!(%err, "ignoring environment override"),
            }
        }
        debug!(?options, "resolved geometry rendering options");
        options
    }

    /// Like [`Options::from_lookup`] but fails on the first malformed value.
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, OptionsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(raw) = lookup(ENV_FORMAT) {
            options.format_numbers = parse_bool(ENV_FORMAT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FORMAT_DECIMALS) {
            options.decimals = parse_decimals(ENV_FORMAT_DECIMALS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FORMAT_NOTATION) {
            options.notation = parse_notation(ENV_FORMAT_NOTATION, &raw)?;
        }
        Ok(options)
    }

    fn validate(self) -> Result<Self, OptionsError> {
        if self.decimals > MAX_DECIMALS {
            return Err(OptionsError::Invalid {
                key: "decimals",
                value: self.decimals.to_string(),
            });
        }
        Ok(self)
    }

    /// Formatter `Display` impls use under these options.
    pub fn number_format(&self) -> DefaultFormat {
        if self.format_numbers {
            DefaultFormat::Fixed(FixedWidthFormat::new(self.decimals, self.notation))
        } else {
            DefaultFormat::Plain(PlainFormat)
        }
    }
}

fn invalid(key: &'static str, raw: &str) -> OptionsError {
    OptionsError::Invalid {
        key,
        value: raw.to_owned(),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, OptionsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}

fn parse_decimals(key: &'static str, raw: &str) -> Result<usize, OptionsError> {
    match raw.trim().parse::<usize>() {
        Ok(v) if v <= MAX_DECIMALS => Ok(v),
        _ => Err(invalid(key, raw)),
    }
}

fn parse_notation(key: &'static str, raw: &str) -> Result<Notation, OptionsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "scientific" => Ok(Notation::Scientific),
        "fixed" => Ok(Notation::Fixed),
        _ => Err(invalid(key, raw)),
    }
}

static GLOBAL: OnceLock<Options> = OnceLock::new();

/// Process-wide options, resolved from the environment on first call.
pub fn global() -> &'static Options {
    GLOBAL.get_or_init(Options::from_env)
}
