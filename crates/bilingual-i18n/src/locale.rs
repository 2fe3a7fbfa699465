//! Locale table and URL-based locale resolution

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, I18nResult};

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
	/// Left-to-right (Latin scripts).
	#[default]
	Ltr,
	/// Right-to-left (Hebrew, Arabic).
	Rtl,
}

impl TextDirection {
	/// Value for the HTML `dir` attribute.
	pub fn as_str(&self) -> &'static str {
		match self {
			TextDirection::Ltr => "ltr",
			TextDirection::Rtl => "rtl",
		}
	}
}

/// A locale served by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Locale {
	/// Short language tag used in URLs, e.g. `he`.
	pub code: String,
	/// Human-readable name shown in the language switcher, e.g. `עברית`.
	pub name: String,
	/// Writing direction, `ltr` unless declared otherwise.
	#[serde(default)]
	pub direction: TextDirection,
}

impl Locale {
	/// Create a left-to-right locale.
	///
	/// # Examples
	///
	/// ```
	/// use bilingual_i18n::{Locale, TextDirection};
	///
	/// let locale = Locale::new("en", "English");
	/// assert_eq!(locale.code, "en");
	/// assert_eq!(locale.direction, TextDirection::Ltr);
	/// ```
	pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			name: name.into(),
			direction: TextDirection::Ltr,
		}
	}

	/// Set the writing direction.
	pub fn with_direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}
}

/// Validate locale code format
pub(crate) fn validate_locale_code(code: &str) -> I18nResult<()> {
	if code.is_empty() {
		return Err(I18nError::InvalidLocale(
			"Locale cannot be empty".to_string(),
		));
	}

	if !code
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
	{
		return Err(I18nError::InvalidLocale(code.to_string()));
	}

	Ok(())
}

/// Ordered set of served locales with one designated default.
///
/// Order is display order (the language switcher lists locales as declared).
///
/// # Example
/// ```
/// use bilingual_i18n::{Locale, LocaleTable};
///
/// let table = LocaleTable::new(
/// 	vec![Locale::new("en", "English"), Locale::new("he", "עברית")],
/// 	"en",
/// )
/// .unwrap();
///
/// assert_eq!(table.resolve_locale("/he/about"), "he");
/// assert_eq!(table.resolve_locale("/fr/about"), "en");
/// ```
#[derive(Debug, Clone)]
pub struct LocaleTable {
	locales: Vec<Locale>,
	default_index: usize,
}

impl LocaleTable {
	/// Build a table, checking codes, uniqueness, and default membership.
	pub fn new(locales: Vec<Locale>, default_locale: &str) -> I18nResult<Self> {
		for (i, locale) in locales.iter().enumerate() {
			validate_locale_code(&locale.code)?;
			if locales[..i].iter().any(|l| l.code == locale.code) {
				return Err(I18nError::DuplicateLocale(locale.code.clone()));
			}
		}

		let default_index = locales
			.iter()
			.position(|l| l.code == default_locale)
			.ok_or_else(|| I18nError::UnknownDefaultLocale(default_locale.to_string()))?;

		Ok(Self {
			locales,
			default_index,
		})
	}

	/// Build from parts already known to be valid.
	pub(crate) fn from_validated(locales: Vec<Locale>, default_index: usize) -> Self {
		debug_assert!(default_index < locales.len());
		Self {
			locales,
			default_index,
		}
	}

	/// The default locale.
	pub fn default_locale(&self) -> &Locale {
		&self.locales[self.default_index]
	}

	/// Code of the default locale.
	pub fn default_code(&self) -> &str {
		&self.default_locale().code
	}

	/// Look up a locale by exact code.
	pub fn get(&self, code: &str) -> Option<&Locale> {
		self.locales.iter().find(|l| l.code == code)
	}

	/// Whether `code` is a served locale.
	pub fn contains(&self, code: &str) -> bool {
		self.get(code).is_some()
	}

	/// Locales in display order.
	pub fn iter(&self) -> impl Iterator<Item = &Locale> {
		self.locales.iter()
	}

	/// Locale codes in display order.
	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.locales.iter().map(|l| l.code.as_str())
	}

	/// Number of served locales.
	pub fn len(&self) -> usize {
		self.locales.len()
	}

	/// Always false for a constructed table; present for API symmetry.
	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}

	/// Resolve the locale encoded in the first segment of a URL path.
	///
	/// The path is split on `/` and the segment at index 1 (after the empty
	/// segment produced by the leading slash) is checked against the table.
	/// Anything else, including `""` and `"/"`, yields the default locale.
	pub fn resolve_locale(&self, path: &str) -> &str {
		let segment = path.split('/').nth(1).unwrap_or("");
		match self.get(segment) {
			Some(locale) => &locale.code,
			None => self.default_code(),
		}
	}

	/// Resolve the locale of a request URI from its path component.
	///
	/// # Examples
	///
	/// ```
	/// use bilingual_i18n::LANGUAGES;
	///
	/// let uri: http::Uri = "https://example.com/he/contact?ref=nav".parse().unwrap();
	/// assert_eq!(LANGUAGES.resolve_locale_from_uri(&uri), "he");
	/// ```
	pub fn resolve_locale_from_uri(&self, uri: &http::Uri) -> &str {
		self.resolve_locale(uri.path())
	}

	/// Rewrite `path` so that it points at the same page in `target`.
	///
	/// A leading segment naming a served locale is replaced; otherwise the
	/// target prefix is prepended. Unknown targets use the default locale.
	///
	/// # Examples
	///
	/// ```
	/// use bilingual_i18n::LANGUAGES;
	///
	/// assert_eq!(LANGUAGES.localized_path("/he/about", "en"), "/en/about");
	/// assert_eq!(LANGUAGES.localized_path("/about", "he"), "/he/about");
	/// assert_eq!(LANGUAGES.localized_path("/", "he"), "/he/");
	/// ```
	pub fn localized_path(&self, path: &str, target: &str) -> String {
		let target = self
			.get(target)
			.map_or(self.default_code(), |l| l.code.as_str());
		let rest = path.strip_prefix('/').unwrap_or(path);
		let rest = match rest.split_once('/') {
			Some((first, tail)) if self.contains(first) => tail,
			None if self.contains(rest) => "",
			_ => rest,
		};
		format!("/{target}/{rest}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn table() -> LocaleTable {
		LocaleTable::new(
			vec![
				Locale::new("en", "English"),
				Locale::new("he", "עברית").with_direction(TextDirection::Rtl),
			],
			"en",
		)
		.unwrap()
	}

	#[rstest]
	#[case("/he/about", "he")]
	#[case("/en/", "en")]
	#[case("/he", "he")]
	#[case("/fr/about", "en")]
	#[case("/HE/about", "en")]
	#[case("/123/", "en")]
	#[case("//he", "en")]
	#[case("he/about", "en")]
	#[case("", "en")]
	#[case("/", "en")]
	fn test_resolve_locale(table: LocaleTable, #[case] path: &str, #[case] expected: &str) {
		// Act
		let resolved = table.resolve_locale(path);

		// Assert
		assert_eq!(resolved, expected, "path {path:?}");
	}

	#[rstest]
	#[case("")]
	#[case("en us")]
	#[case("he/IL")]
	fn test_invalid_locale_code_rejected(#[case] code: &str) {
		let result = LocaleTable::new(vec![Locale::new(code, "Broken")], code);
		assert!(matches!(result, Err(I18nError::InvalidLocale(_))));
	}

	#[rstest]
	fn test_duplicate_locale_rejected() {
		let result = LocaleTable::new(
			vec![Locale::new("en", "English"), Locale::new("en", "English (again)")],
			"en",
		);
		assert!(matches!(result, Err(I18nError::DuplicateLocale(code)) if code == "en"));
	}

	#[rstest]
	fn test_default_must_be_member() {
		let result = LocaleTable::new(vec![Locale::new("he", "עברית")], "en");
		assert!(matches!(result, Err(I18nError::UnknownDefaultLocale(code)) if code == "en"));
	}

	#[rstest]
	fn test_display_order_preserved(table: LocaleTable) {
		let codes: Vec<&str> = table.codes().collect();
		assert_eq!(codes, vec!["en", "he"]);
		assert_eq!(table.default_locale().name, "English");
		assert_eq!(table.get("he").unwrap().direction.as_str(), "rtl");
	}

	#[rstest]
	#[case("/he/about", "en", "/en/about")]
	#[case("/en/products/rings", "he", "/he/products/rings")]
	#[case("/about", "he", "/he/about")]
	#[case("/he", "en", "/en/")]
	#[case("/", "he", "/he/")]
	#[case("", "he", "/he/")]
	#[case("/he/about", "fr", "/en/about")]
	fn test_localized_path(
		table: LocaleTable,
		#[case] path: &str,
		#[case] target: &str,
		#[case] expected: &str,
	) {
		// Act
		let rewritten = table.localized_path(path, target);

		// Assert
		assert_eq!(rewritten, expected);
		assert_eq!(
			table.resolve_locale(&rewritten),
			table.get(target).map_or("en", |l| l.code.as_str())
		);
	}

	#[rstest]
	fn test_resolve_from_uri(table: LocaleTable) {
		let uri: http::Uri = "/he/contact?x=1".parse().unwrap();
		assert_eq!(table.resolve_locale_from_uri(&uri), "he");

		let bare: http::Uri = "https://example.com".parse().unwrap();
		assert_eq!(table.resolve_locale_from_uri(&bare), "en");
	}
}
