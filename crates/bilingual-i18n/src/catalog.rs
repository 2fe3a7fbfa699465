//! Message catalogs and the per-site string table

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{I18nError, I18nResult};
use crate::locale::{LocaleTable, validate_locale_code};
use crate::translator::{MissingKeyPolicy, Translator};

/// UI strings for a single locale, keyed by dotted message key.
///
/// # Example
/// ```
/// use bilingual_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("he");
/// catalog.add_translation("nav.home", "בית");
///
/// assert_eq!(catalog.get("nav.home"), Some("בית"));
/// assert_eq!(catalog.get("nav.blog"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create an empty catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation, replacing any previous value for the key
	pub fn add_translation(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Builder-style [`add_translation`](Self::add_translation)
	pub fn with(mut self, key: impl Into<String>, translation: impl Into<String>) -> Self {
		self.add_translation(key, translation);
		self
	}

	/// Get a translation
	pub fn get(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	/// Whether the catalog defines `key`
	pub fn contains(&self, key: &str) -> bool {
		self.messages.contains_key(key)
	}

	/// Number of messages
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog has no messages
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	/// Iterate over message keys (unordered)
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.messages.keys().map(String::as_str)
	}
}

/// All message catalogs of a site plus the default locale used for fallback.
///
/// Immutable once built; hand out [`Translator`]s with
/// [`translator`](Self::translator).
///
/// # Example
/// ```
/// use bilingual_i18n::{MessageCatalog, StringTable};
///
/// let mut table = StringTable::new("en");
/// table.add_catalog(MessageCatalog::new("en").with("nav.home", "Home").with("nav.blog", "Blog"));
/// table.add_catalog(MessageCatalog::new("he").with("nav.home", "בית"));
///
/// let t = table.translator("he");
/// assert_eq!(t.t("nav.home"), "בית");
/// assert_eq!(t.t("nav.blog"), "Blog");
/// ```
#[derive(Debug, Clone)]
pub struct StringTable {
	catalogs: HashMap<String, MessageCatalog>,
	default_locale: String,
	policy: MissingKeyPolicy,
}

impl StringTable {
	/// Create an empty table falling back to `default_locale`
	pub fn new(default_locale: &str) -> Self {
		Self {
			catalogs: HashMap::new(),
			default_locale: default_locale.to_string(),
			policy: MissingKeyPolicy::default(),
		}
	}

	/// Set the policy applied when a key is missing from every catalog
	pub fn with_policy(mut self, policy: MissingKeyPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Register a catalog, replacing any catalog for the same locale
	pub fn add_catalog(&mut self, catalog: MessageCatalog) {
		self.catalogs.insert(catalog.locale.clone(), catalog);
	}

	/// Parse a table from TOML, one table per locale:
	///
	/// ```toml
	/// [en]
	/// "nav.home" = "Home"
	///
	/// [he]
	/// "nav.home" = "בית"
	/// ```
	pub fn from_toml_str(content: &str, default_locale: &str) -> I18nResult<Self> {
		let parsed: BTreeMap<String, BTreeMap<String, String>> = toml::from_str(content)?;

		let mut table = Self::new(default_locale);
		for (locale, messages) in parsed {
			validate_locale_code(&locale)?;
			let mut catalog = MessageCatalog::new(&locale);
			for (key, value) in messages {
				catalog.add_translation(key, value);
			}
			table.add_catalog(catalog);
		}
		Ok(table)
	}

	/// Read and parse a TOML string table file
	pub fn from_file(path: &Path, default_locale: &str) -> I18nResult<Self> {
		let content = std::fs::read_to_string(path)?;
		let table = Self::from_toml_str(&content, default_locale)?;
		tracing::debug!(
			path = %path.display(),
			locales = table.catalogs.len(),
			"loaded string table"
		);
		Ok(table)
	}

	/// Code of the fallback locale
	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	/// Policy for keys missing from every catalog
	pub fn policy(&self) -> MissingKeyPolicy {
		self.policy
	}

	/// Catalog for `locale`, if registered
	pub fn catalog(&self, locale: &str) -> Option<&MessageCatalog> {
		self.catalogs.get(locale)
	}

	/// Catalog for the default locale, if registered
	pub fn default_catalog(&self) -> Option<&MessageCatalog> {
		self.catalogs.get(&self.default_locale)
	}

	/// Registered locale codes, sorted
	pub fn locales(&self) -> Vec<&str> {
		let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
		locales.sort_unstable();
		locales
	}

	/// Return a lookup bound to `locale`.
	///
	/// The locale is not checked; an unregistered locale falls back to the
	/// default catalog for every key.
	pub fn translator(&self, locale: &str) -> Translator<'_> {
		Translator::new(self, locale)
	}

	/// Keys defined by the default catalog but absent from `locale`, sorted.
	///
	/// These are the keys a visitor of `locale` sees in the default language.
	pub fn coverage(&self, locale: &str) -> Vec<&str> {
		let Some(default) = self.default_catalog() else {
			return Vec::new();
		};
		let target = self.catalog(locale);

		let mut missing: Vec<&str> = default
			.keys()
			.filter(|key| !target.is_some_and(|c| c.contains(key)))
			.collect();
		missing.sort_unstable();
		missing
	}

	/// Check the table against the served locales.
	///
	/// Fails when the default catalog is missing, when a catalog belongs to a
	/// locale that is not served, or when a non-default catalog defines a key
	/// the default catalog lacks (the default must cover every key).
	pub fn validate(&self, locales: &LocaleTable) -> I18nResult<()> {
		if !locales.contains(&self.default_locale) {
			return Err(I18nError::UnknownDefaultLocale(self.default_locale.clone()));
		}
		let default = self
			.default_catalog()
			.ok_or_else(|| I18nError::MissingDefaultCatalog(self.default_locale.clone()))?;

		for locale in self.locales() {
			if !locales.contains(locale) {
				return Err(I18nError::UnknownCatalogLocale(locale.to_string()));
			}
			let Some(catalog) = self.catalog(locale) else {
				continue;
			};
			let mut extra: Vec<&str> = catalog.keys().filter(|k| !default.contains(k)).collect();
			extra.sort_unstable();
			if let Some(key) = extra.first() {
				return Err(I18nError::KeyNotInDefault {
					locale: locale.to_string(),
					key: key.to_string(),
				});
			}
		}
		Ok(())
	}
}
