//! Error types for content loading and validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single frontmatter field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
	/// A required field is absent.
	Required,
	/// The value is not a string; `found` names the YAML type that was given.
	ExpectedString {
		/// YAML type of the offending value.
		found: &'static str,
	},
	/// The field is not declared by the schema.
	Unrecognized,
}

/// A schema violation tied to one frontmatter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
	/// Offending field name.
	pub field: String,
	/// What was wrong with it.
	pub kind: IssueKind,
}

impl FieldIssue {
	pub(crate) fn new(field: impl Into<String>, kind: IssueKind) -> Self {
		Self {
			field: field.into(),
			kind,
		}
	}
}

impl fmt::Display for FieldIssue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.kind {
			IssueKind::Required => write!(f, "{}: Required", self.field),
			IssueKind::ExpectedString { found } => {
				write!(f, "{}: Expected string, received {}", self.field, found)
			}
			IssueKind::Unrecognized => write!(f, "{}: Unrecognized key", self.field),
		}
	}
}

/// Errors that abort loading a content store.
#[derive(Debug, Error)]
pub enum ContentError {
	/// A document's frontmatter does not match its collection's schema.
	#[error("{}: invalid frontmatter: {}", .document.display(), join_issues(.issues))]
	Validation {
		/// Path of the offending document.
		document: PathBuf,
		/// Every field that failed validation.
		issues: Vec<FieldIssue>,
	},

	/// The frontmatter block is not valid YAML.
	#[error("{}: YAML error: {source}", .document.display())]
	Yaml {
		/// Path of the offending document.
		document: PathBuf,
		/// Underlying parser error.
		#[source]
		source: serde_yaml::Error,
	},

	/// The frontmatter block parsed, but not to a mapping.
	#[error("{}: frontmatter must be a mapping, found {found}", .document.display())]
	NotAMapping {
		/// Path of the offending document.
		document: PathBuf,
		/// YAML type of the block.
		found: &'static str,
	},

	/// A collection name is not usable as a directory name.
	#[error("Invalid collection name: {0:?}")]
	InvalidCollection(String),

	/// Two documents in one collection map to the same slug.
	#[error("Duplicate slug '{slug}' in collection '{collection}'")]
	DuplicateSlug {
		/// Collection name.
		collection: String,
		/// Conflicting slug.
		slug: String,
	},

	/// A file or directory could not be read.
	#[error("IO error at {}: {source}", .path.display())]
	Io {
		/// Path being read.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: std::io::Error,
	},

	/// Directory traversal failed.
	#[error("Walk error: {0}")]
	Walk(#[from] walkdir::Error),
}

fn join_issues(issues: &[FieldIssue]) -> String {
	issues
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

/// Result type alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
