//! Content collections for the bilingual site
//!
//! Each served locale owns a collection of Markdown documents under
//! `<content root>/<locale>/`. Every document's YAML frontmatter is validated
//! against the page schema: a required string `title` plus optional string
//! `subtitle`, `description`, `primaryButton`, `primaryButtonLink`,
//! `secondaryButton`, and `secondaryButtonLink`. Undeclared fields are
//! rejected unless the schema is switched to [`UnknownFieldPolicy::Ignore`].
//!
//! A malformed document aborts [`ContentStore::load`] with an error naming
//! the document and each offending field.
//!
//! ```
//! use bilingual_content::{ContentCollection, ContentSchema};
//! use std::path::Path;
//!
//! let en = ContentCollection::new("en", ContentSchema::page()).unwrap();
//! let entry = en
//! 	.parse_entry(Path::new("en/index.md"), "index".into(), "---\ntitle: Hello\n---\n")
//! 	.unwrap();
//! assert_eq!(entry.data.title, "Hello");
//!
//! assert!(en.parse_entry(Path::new("en/x.md"), "x".into(), "---\nsubtitle: Hi\n---\n").is_err());
//! ```

pub mod collection;
pub mod entry;
pub mod error;
pub mod frontmatter;
pub mod schema;

pub use collection::{
	CONTENT_EXTENSIONS, ContentCollection, ContentStore, collections, site_collections,
};
pub use entry::{ContentEntry, PageFrontmatter};
pub use error::{ContentError, ContentResult, FieldIssue, IssueKind};
pub use schema::{ContentSchema, FieldSpec, UnknownFieldPolicy};
