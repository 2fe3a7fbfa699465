//! Settings errors

use std::path::PathBuf;

use bilingual_content::ContentError;
use bilingual_i18n::I18nError;
use bilingual_theme::ThemeError;
use thiserror::Error;

/// Errors raised while loading or applying site settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("Cannot read settings file {}: {source}", .path.display())]
	Io {
		/// Settings file path.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: std::io::Error,
	},

	/// The settings file is not valid TOML or has unknown keys.
	#[error("Invalid settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// Locale or string-table configuration is inconsistent.
	#[error(transparent)]
	I18n(#[from] I18nError),

	/// Content configuration is inconsistent.
	#[error(transparent)]
	Content(#[from] ContentError),

	/// Theme configuration is inconsistent.
	#[error(transparent)]
	Theme(#[from] ThemeError),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
