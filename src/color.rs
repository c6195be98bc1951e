//! Hex color to `rgba(...)` conversion used for tinted backgrounds and overlays.
//!
//! The permissive path (`with_opacity` and friends) never fails: malformed input
//! renders as black at the requested (clamped) opacity. Validation is opt-in via
//! [`parse_hex`] / [`try_with_opacity`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opacity used when the caller does not supply one.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Strict parse failure. Only produced by the opt-in validating functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Validated RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Renderable color. A `None` channel is a channel that failed to parse and
/// renders as `NaN`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
    pub alpha: f64,
}

impl Rgba {
    /// Black at the given (already clamped) opacity.
    fn fallback(alpha: f64) -> Self {
        Self {
            red: Some(0),
            green: Some(0),
            blue: Some(0),
            alpha,
        }
    }

    /// Permissive conversion; see the module docs.
    pub fn from_hex(color_spec: Option<&str>, opacity: f64) -> Self {
        let alpha = clamp_opacity(opacity);
        let Some(spec) = color_spec.filter(|s| !s.is_empty()) else {
            return Self::fallback(alpha);
        };
        let body = spec.strip_prefix('#').unwrap_or(spec);
        let Some(rgb) = expand_to_rgb(body) else {
            return Self::fallback(alpha);
        };
        if rgb.len() != 6 {
            return Self::fallback(alpha);
        }
        Self {
            red: parse_channel(&rgb[0..2]),
            green: parse_channel(&rgb[2..4]),
            blue: parse_channel(&rgb[4..6]),
            alpha,
        }
    }

    /// True when every channel parsed.
    pub fn is_valid(&self) -> bool {
        self.red.is_some() && self.green.is_some() && self.blue.is_some()
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self {
            red: Some(rgb.red),
            green: Some(rgb.green),
            blue: Some(rgb.blue),
            alpha: DEFAULT_OPACITY,
        }
    }
}

struct Channel(Option<u8>);

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("NaN"),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            Channel(self.red),
            Channel(self.green),
            Channel(self.blue),
            self.alpha
        )
    }
}

/// Clamp into `[0, 1]`. `-0.0` comes back as `0.0`; NaN stays NaN.
pub fn clamp_opacity(opacity: f64) -> f64 {
    opacity.clamp(0.0, 1.0) + 0.0
}

/// Render `color_spec` as `rgba(r, g, b, opacity)`.
pub fn with_opacity(color_spec: &str, opacity: f64) -> String {
    Rgba::from_hex(Some(color_spec), opacity).to_string()
}

/// Like [`with_opacity`], for callers that may have no color or no opacity.
/// A missing opacity means fully opaque.
pub fn with_opacity_opt(color_spec: Option<&str>, opacity: Option<f64>) -> String {
    Rgba::from_hex(color_spec, opacity.unwrap_or(DEFAULT_OPACITY)).to_string()
}

/// `with_opacity(color_spec, 1.0)`.
pub fn opaque(color_spec: &str) -> String {
    with_opacity(color_spec, DEFAULT_OPACITY)
}

/// Validating variant: every digit must be hex and the length must be 3, 4, 6 or 8.
pub fn parse_hex(color_spec: &str) -> Result<Rgb, ColorError> {
    if color_spec.is_empty() {
        return Err(ColorError::Empty);
    }
    let (offset, body) = match color_spec.strip_prefix('#') {
        Some(rest) => (1, rest),
        None => (0, color_spec),
    };
    for (i, c) in body.chars().enumerate() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidDigit {
                position: i + offset,
                found: c,
            });
        }
    }
    let rgb = expand_to_rgb(body).ok_or(ColorError::InvalidLength(body.chars().count()))?;
    let byte = |i: usize| (nibble(rgb[i]) << 4) | nibble(rgb[i + 1]);
    Ok(Rgb {
        red: byte(0),
        green: byte(2),
        blue: byte(4),
    })
}

// Callers have already checked `is_ascii_hexdigit`.
fn nibble(c: char) -> u8 {
    c.to_digit(16).unwrap_or(0) as u8
}

/// Validating variant of [`with_opacity`].
pub fn try_with_opacity(color_spec: &str, opacity: f64) -> Result<String, ColorError> {
    let rgb = parse_hex(color_spec)?;
    let rgba = Rgba {
        alpha: clamp_opacity(opacity),
        ..Rgba::from(rgb)
    };
    Ok(rgba.to_string())
}

/// Normalise a `#`-less body to six characters, dropping any alpha pair.
/// Returns `None` for unsupported lengths. Works on chars, not bytes, so
/// non-ASCII input never splits a code point.
fn expand_to_rgb(body: &str) -> Option<Vec<char>> {
    let chars: Vec<char> = body.chars().collect();
    let doubled = || chars.iter().flat_map(|&c| [c, c]);
    match chars.len() {
        3 => Some(doubled().collect()),
        // Expand first, then drop the leading pair.
        4 => Some(doubled().skip(2).collect()),
        6 => Some(chars),
        8 => Some(chars[2..].to_vec()),
        _ => None,
    }
}

/// Base-16 prefix parse of a two-character pair: leading hex digits count,
/// parsing stops at the first non-digit, no leading digit means NaN.
fn parse_channel(pair: &[char]) -> Option<u8> {
    let mut value: Option<u8> = None;
    for c in pair {
        let Some(d) = c.to_digit(16) else { break };
        value = Some(value.unwrap_or(0) * 16 + d as u8);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_shorthand_rgb() {
        assert_eq!(expand_to_rgb("f0a"), Some("ff00aa".chars().collect()));
    }

    #[test]
    fn expand_shorthand_rgba_drops_doubled_alpha() {
        assert_eq!(expand_to_rgb("3f0a"), Some("ff00aa".chars().collect()));
    }

    #[test]
    fn expand_rejects_odd_lengths() {
        for body in ["", "1", "12", "12345", "1234567", "123456789"] {
            assert_eq!(expand_to_rgb(body), None, "{body}");
        }
    }

    #[test]
    fn channel_prefix_parse() {
        assert_eq!(parse_channel(&['f', 'f']), Some(255));
        assert_eq!(parse_channel(&['0', 'g']), Some(0));
        assert_eq!(parse_channel(&['a', '-']), Some(10));
        assert_eq!(parse_channel(&['g', '0']), None);
        assert_eq!(parse_channel(&['é', 'f']), None);
    }

    #[test]
    fn clamp_normalises_negative_zero() {
        assert!(clamp_opacity(-0.0).is_sign_positive());
        assert!(clamp_opacity(f64::NAN).is_nan());
        assert_eq!(clamp_opacity(f64::INFINITY), 1.0);
        assert_eq!(clamp_opacity(f64::NEG_INFINITY), 0.0);
    }
}
