//! Error types for locale and translation handling.

use thiserror::Error;

/// Errors raised while building or checking locale and string tables.
///
/// Lookups themselves never fail; these errors surface from constructors,
/// loaders, build-time validation, and the fail-fast [`Translator::translate`]
/// entry point.
///
/// [`Translator::translate`]: crate::Translator::translate
#[derive(Debug, Error)]
pub enum I18nError {
	/// A locale code was empty or contained characters outside `[A-Za-z0-9_-]`.
	#[error("Invalid locale: {0}")]
	InvalidLocale(String),

	/// The same locale code was declared twice.
	#[error("Duplicate locale: {0}")]
	DuplicateLocale(String),

	/// The designated default locale is not a member of the locale table.
	#[error("Default locale '{0}' is not in the locale table")]
	UnknownDefaultLocale(String),

	/// A string catalog was registered for a locale the site does not serve.
	#[error("Catalog locale '{0}' is not in the locale table")]
	UnknownCatalogLocale(String),

	/// No catalog exists for the default locale.
	#[error("No string catalog for default locale '{0}'")]
	MissingDefaultCatalog(String),

	/// A key exists in neither the requested nor the default catalog.
	#[error("Missing translation for '{key}' in locale '{locale}'")]
	MissingTranslation {
		/// Requested locale.
		locale: String,
		/// Message key that was looked up.
		key: String,
	},

	/// A non-default catalog defines a key the default catalog lacks.
	#[error("Key '{key}' in locale '{locale}' is missing from the default locale")]
	KeyNotInDefault {
		/// Locale whose catalog defines the key.
		locale: String,
		/// Offending key.
		key: String,
	},

	/// A string table file could not be parsed.
	#[error("Parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A string table file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for i18n operations.
pub type I18nResult<T> = Result<T, I18nError>;
