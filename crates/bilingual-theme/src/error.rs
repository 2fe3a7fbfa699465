//! Error types for theme construction and source scanning.

use thiserror::Error;

/// Errors that can occur while building a theme or scanning sources.
#[derive(Debug, Error)]
pub enum ThemeError {
	/// A color is not `#rgb` or `#rrggbb`.
	#[error("Invalid color: {0:?}")]
	InvalidColor(String),

	/// A token name is not lowercase kebab-case.
	#[error("Invalid token name: {0:?}")]
	InvalidTokenName(String),

	/// A font token has no families.
	#[error("Font token '{0}' has an empty stack")]
	EmptyFontStack(String),

	/// A source glob has an unmatched `{` or `}`.
	#[error("Unbalanced braces in pattern: {0}")]
	UnbalancedBraces(String),

	/// A source glob could not be compiled.
	#[error("Invalid pattern '{pattern}': {source}")]
	Pattern {
		/// Expanded pattern that failed.
		pattern: String,
		/// Underlying error.
		#[source]
		source: glob::PatternError,
	},

	/// Theme JSON could not be rendered.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Directory traversal failed.
	#[error("Walk error: {0}")]
	Walk(#[from] walkdir::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;
