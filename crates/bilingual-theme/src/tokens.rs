//! Named design tokens and their renderings for the styling pipeline

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::color::Rgb;
use crate::error::{ThemeError, ThemeResult};

fn validate_token_name(name: &str) -> ThemeResult<()> {
	let valid = !name.is_empty()
		&& !name.starts_with('-')
		&& !name.ends_with('-')
		&& name
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
	if valid {
		Ok(())
	} else {
		Err(ThemeError::InvalidTokenName(name.to_string()))
	}
}

/// A named color, e.g. `brand-accent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
	/// Token name, rendered as `--color-<name>`.
	pub name: String,
	pub value: Rgb,
}

/// A named font stack, e.g. `handwritten`.
///
/// Families are kept verbatim (quotes included) and joined with `, ` when
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontToken {
	/// Token name, rendered as `--font-<name>`.
	pub name: String,
	/// Families in fallback order.
	pub stack: Vec<String>,
}

impl FontToken {
	/// CSS `font-family` value.
	pub fn css_value(&self) -> String {
		self.stack.join(", ")
	}
}

/// Ordered color and font tokens.
///
/// # Example
/// ```
/// use bilingual_theme::Theme;
///
/// let theme = Theme::site();
/// assert_eq!(theme.color("brand-accent").unwrap().to_string(), "#d28885");
/// assert!(theme.to_css_variables().contains("--font-sans: Open Sans, sans-serif;"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
	colors: Vec<ColorToken>,
	fonts: Vec<FontToken>,
}

impl Theme {
	/// Create an empty theme
	pub fn new() -> Self {
		Self::default()
	}

	/// The site palette and typography.
	pub fn site() -> Self {
		let colors = [
			("brand-bg", Rgb::new(0xf8, 0xf5, 0xf1)),
			("brand-accent", Rgb::new(0xd2, 0x88, 0x85)),
			("brand-accent-dark", Rgb::new(0xc3, 0x76, 0x6e)),
			("text-dark", Rgb::new(0x33, 0x33, 0x33)),
			("soft-border", Rgb::new(0xcc, 0xcc, 0xcc)),
			("form-bg", Rgb::new(0xd0, 0xcf, 0xc8)),
		];
		let fonts = [
			("sans", vec!["Open Sans", "sans-serif"]),
			("handwritten", vec!["\"Patrick Hand\"", "cursive"]),
		];

		Self {
			colors: colors
				.into_iter()
				.map(|(name, value)| ColorToken {
					name: name.to_string(),
					value,
				})
				.collect(),
			fonts: fonts
				.into_iter()
				.map(|(name, stack)| FontToken {
					name: name.to_string(),
					stack: stack.into_iter().map(str::to_string).collect(),
				})
				.collect(),
		}
	}

	/// Add or replace a color token; replacement keeps the original position.
	pub fn set_color(&mut self, name: &str, value: Rgb) -> ThemeResult<()> {
		validate_token_name(name)?;
		match self.colors.iter_mut().find(|t| t.name == name) {
			Some(token) => token.value = value,
			None => self.colors.push(ColorToken {
				name: name.to_string(),
				value,
			}),
		}
		Ok(())
	}

	/// Builder-style [`set_color`](Self::set_color) taking a hex string
	pub fn with_color(mut self, name: &str, hex: &str) -> ThemeResult<Self> {
		let value = hex.parse()?;
		self.set_color(name, value)?;
		Ok(self)
	}

	/// Add or replace a font token; replacement keeps the original position.
	pub fn set_font(&mut self, name: &str, stack: Vec<String>) -> ThemeResult<()> {
		validate_token_name(name)?;
		if stack.is_empty() {
			return Err(ThemeError::EmptyFontStack(name.to_string()));
		}
		match self.fonts.iter_mut().find(|t| t.name == name) {
			Some(token) => token.stack = stack,
			None => self.fonts.push(FontToken {
				name: name.to_string(),
				stack,
			}),
		}
		Ok(())
	}

	/// Color tokens in declaration order
	pub fn colors(&self) -> &[ColorToken] {
		&self.colors
	}

	/// Font tokens in declaration order
	pub fn fonts(&self) -> &[FontToken] {
		&self.fonts
	}

	/// Look up a color by token name
	pub fn color(&self, name: &str) -> Option<Rgb> {
		self.colors.iter().find(|t| t.name == name).map(|t| t.value)
	}

	/// Look up a font stack by token name
	pub fn font(&self, name: &str) -> Option<&FontToken> {
		self.fonts.iter().find(|t| t.name == name)
	}

	/// Render CSS custom properties on `:root`.
	///
	/// Colors become `--color-<name>`, fonts `--font-<name>`.
	pub fn to_css_variables(&self) -> String {
		let mut css = String::from(":root {\n");
		for token in &self.colors {
			css.push_str(&format!("\t--color-{}: {};\n", token.name, token.value));
		}
		for token in &self.fonts {
			css.push_str(&format!("\t--font-{}: {};\n", token.name, token.css_value()));
		}
		css.push_str("}\n");
		css
	}

	/// Render the `theme.extend` object consumed by utility-class generators:
	/// `{"colors": {...}, "fontFamily": {...}}`, keys in declaration order.
	pub fn to_json(&self) -> JsonValue {
		let colors: Map<String, JsonValue> = self
			.colors
			.iter()
			.map(|t| (t.name.clone(), JsonValue::String(t.value.to_string())))
			.collect();
		let fonts: Map<String, JsonValue> = self
			.fonts
			.iter()
			.map(|t| {
				let stack = t.stack.iter().cloned().map(JsonValue::String).collect();
				(t.name.clone(), JsonValue::Array(stack))
			})
			.collect();

		let mut extend = Map::new();
		extend.insert("colors".to_string(), JsonValue::Object(colors));
		extend.insert("fontFamily".to_string(), JsonValue::Object(fonts));
		JsonValue::Object(extend)
	}

	/// Pretty-printed [`to_json`](Self::to_json)
	pub fn to_json_string(&self) -> ThemeResult<String> {
		Ok(serde_json::to_string_pretty(&self.to_json())?)
	}
}
