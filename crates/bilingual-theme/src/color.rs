//! Opaque RGB colors written as CSS hex strings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// RGB color (opaque).
///
/// Parses `#rgb` and `#rrggbb` (either case) and always renders as
/// lowercase `#rrggbb`.
///
/// # Examples
///
/// ```
/// use bilingual_theme::Rgb;
///
/// let accent: Rgb = "#D28885".parse().unwrap();
/// assert_eq!(accent, Rgb::new(0xd2, 0x88, 0x85));
/// assert_eq!(accent.to_string(), "#d28885");
///
/// let grey: Rgb = "#ccc".parse().unwrap();
/// assert_eq!(grey.to_string(), "#cccccc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
}

impl Rgb {
	/// Create a color from its channels
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Relative luminance per WCAG 2.x, in `0.0..=1.0`.
	pub fn relative_luminance(self) -> f64 {
		fn channel(c: u8) -> f64 {
			let c = f64::from(c) / 255.0;
			if c <= 0.039_28 {
				c / 12.92
			} else {
				((c + 0.055) / 1.055).powf(2.4)
			}
		}
		0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
	}

	/// WCAG contrast ratio against `other`, in `1.0..=21.0`.
	pub fn contrast_ratio(self, other: Rgb) -> f64 {
		let (a, b) = (self.relative_luminance(), other.relative_luminance());
		let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
		(lighter + 0.05) / (darker + 0.05)
	}
}

impl FromStr for Rgb {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ThemeError::InvalidColor(s.to_string());
		let hex = s.strip_prefix('#').ok_or_else(invalid)?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid());
		let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

		match hex.len() {
			3 => Ok(Self::new(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
			6 => Ok(Self::new(pair(0)?, pair(2)?, pair(4)?)),
			_ => Err(invalid()),
		}
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl Serialize for Rgb {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Rgb {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("#f8f5f1", Rgb::new(0xf8, 0xf5, 0xf1))]
	#[case("#333333", Rgb::new(0x33, 0x33, 0x33))]
	#[case("#333", Rgb::new(0x33, 0x33, 0x33))]
	#[case("#C3766E", Rgb::new(0xc3, 0x76, 0x6e))]
	fn test_parse(#[case] raw: &str, #[case] expected: Rgb) {
		assert_eq!(raw.parse::<Rgb>().unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("f8f5f1")]
	#[case("#f8f5f")]
	#[case("#f8f5f1ff")]
	#[case("#gggggg")]
	#[case("#+1+1+1")]
	#[case("#ééé")]
	fn test_parse_rejects(#[case] raw: &str) {
		assert!(matches!(raw.parse::<Rgb>(), Err(ThemeError::InvalidColor(_))));
	}

	#[rstest]
	fn test_contrast_ratio_bounds() {
		let black = Rgb::new(0, 0, 0);
		let white = Rgb::new(255, 255, 255);
		assert!((black.contrast_ratio(white) - 21.0).abs() < 1e-9);
		assert!((white.contrast_ratio(white) - 1.0).abs() < 1e-9);
	}

	#[rstest]
	fn test_serde_as_hex_string() {
		let json = serde_json::to_string(&Rgb::new(0xd0, 0xcf, 0xc8)).unwrap();
		assert_eq!(json, "\"#d0cfc8\"");

		let parsed: Rgb = serde_json::from_str("\"#CCC\"").unwrap();
		assert_eq!(parsed, Rgb::new(0xcc, 0xcc, 0xcc));

		assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
	}
}
