//! Locale-bound lookup with default-locale fallback

use serde::{Deserialize, Serialize};

use crate::catalog::StringTable;
use crate::error::{I18nError, I18nResult};

/// What to do when a key is in neither the requested nor the default catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
	/// Render the key itself so the gap is visible on the page.
	#[default]
	Placeholder,
	/// Report [`I18nError::MissingTranslation`] from [`Translator::translate`].
	Strict,
}

/// Lookup function bound to one locale of a [`StringTable`].
///
/// Resolution order: the requested locale's catalog, then the default
/// locale's catalog. A string present in the requested catalog always wins,
/// even if the default defines the same key differently.
///
/// # Example
/// ```
/// use bilingual_i18n::use_translations;
///
/// let t = use_translations("he");
/// assert_eq!(t.t("nav.home"), "בית");
/// assert_eq!(t.t("lang.switch"), "English");
/// ```
#[derive(Debug, Clone)]
pub struct Translator<'a> {
	table: &'a StringTable,
	locale: String,
}

impl<'a> Translator<'a> {
	pub(crate) fn new(table: &'a StringTable, locale: &str) -> Self {
		Self {
			table,
			locale: locale.to_string(),
		}
	}

	/// Locale this translator was created for.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Resolve `key`, or `None` if neither catalog defines it.
	pub fn lookup(&self, key: &str) -> Option<&'a str> {
		if let Some(message) = self.table.catalog(&self.locale).and_then(|c| c.get(key)) {
			return Some(message);
		}

		let fallback = self.table.default_catalog().and_then(|c| c.get(key));
		if fallback.is_some() && self.locale != self.table.default_locale() {
			tracing::debug!(
				locale = %self.locale,
				key,
				default_locale = %self.table.default_locale(),
				"using default locale string"
			);
		}
		fallback
	}

	/// Resolve `key`, rendering the key itself when no catalog defines it.
	///
	/// Never fails regardless of policy; a missing key is logged.
	pub fn t<'k>(&self, key: &'k str) -> &'k str
	where
		'a: 'k,
	{
		match self.lookup(key) {
			Some(message) => message,
			None => {
				tracing::warn!(locale = %self.locale, key, "missing translation");
				key
			}
		}
	}

	/// Resolve `key` according to the table's [`MissingKeyPolicy`].
	///
	/// Under [`MissingKeyPolicy::Placeholder`] this behaves like
	/// [`t`](Self::t); under [`MissingKeyPolicy::Strict`] a key missing from
	/// both catalogs is an error.
	pub fn translate<'k>(&self, key: &'k str) -> I18nResult<&'k str>
	where
		'a: 'k,
	{
		match (self.lookup(key), self.table.policy()) {
			(Some(message), _) => Ok(message),
			(None, MissingKeyPolicy::Placeholder) => Ok(self.t(key)),
			(None, MissingKeyPolicy::Strict) => Err(I18nError::MissingTranslation {
				locale: self.locale.clone(),
				key: key.to_string(),
			}),
		}
	}
}
