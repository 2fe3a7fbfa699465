//! Per-locale content collections loaded from disk

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use bilingual_i18n::{LANGUAGES, LocaleTable};
use serde_yaml::Value;
use walkdir::WalkDir;

use crate::entry::{ContentEntry, PageFrontmatter};
use crate::error::{ContentError, ContentResult};
use crate::frontmatter;
use crate::schema::ContentSchema;

/// File extensions treated as content documents.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// A named set of documents validated against one schema.
///
/// The name doubles as the directory under the content root, so the `he`
/// collection lives in `<root>/he/`.
#[derive(Debug, Clone)]
pub struct ContentCollection {
	name: String,
	schema: ContentSchema,
}

impl ContentCollection {
	/// Create a collection; the name must be a single path segment made of
	/// ASCII alphanumerics, `-`, or `_`.
	pub fn new(name: &str, schema: ContentSchema) -> ContentResult<Self> {
		let valid = !name.is_empty()
			&& name
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
		if !valid {
			return Err(ContentError::InvalidCollection(name.to_string()));
		}
		Ok(Self {
			name: name.to_string(),
			schema,
		})
	}

	/// Collection name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Schema documents are validated against
	pub fn schema(&self) -> &ContentSchema {
		&self.schema
	}

	/// Parse and validate one document.
	///
	/// `path` labels errors and is recorded on the entry.
	pub fn parse_entry(
		&self,
		path: &Path,
		slug: String,
		source: &str,
	) -> ContentResult<ContentEntry> {
		let (raw, body) = frontmatter::parse(path, source)?;

		let cleaned = self
			.schema
			.clean(&raw)
			.map_err(|issues| ContentError::Validation {
				document: path.to_path_buf(),
				issues,
			})?;

		let data: PageFrontmatter = serde_yaml::from_value(Value::Mapping(cleaned)).map_err(
			|source| ContentError::Yaml {
				document: path.to_path_buf(),
				source,
			},
		)?;

		Ok(ContentEntry {
			collection: self.name.clone(),
			slug,
			path: path.to_path_buf(),
			data,
			body: body.to_string(),
		})
	}

	/// Load every document under `<root>/<name>/`, sorted by path.
	///
	/// A missing directory is an empty collection. The first invalid document
	/// aborts the load.
	pub fn load(&self, root: &Path) -> ContentResult<Vec<ContentEntry>> {
		let dir = root.join(&self.name);
		if !dir.is_dir() {
			tracing::warn!(
				collection = %self.name,
				dir = %dir.display(),
				"collection directory does not exist"
			);
			return Ok(Vec::new());
		}

		let mut entries = Vec::new();
		let mut slugs = HashSet::new();

		for entry in WalkDir::new(&dir).sort_by_file_name() {
			let entry = entry?;
			if !entry.file_type().is_file() {
				continue;
			}

			let path = entry.path();
			if !is_content_file(path) {
				tracing::debug!(path = %path.display(), "skipping non-content file");
				continue;
			}

			let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
				path: path.to_path_buf(),
				source,
			})?;

			let slug = slug_for(&dir, path);
			if !slugs.insert(slug.clone()) {
				return Err(ContentError::DuplicateSlug {
					collection: self.name.clone(),
					slug,
				});
			}

			entries.push(self.parse_entry(path, slug, &source)?);
		}

		tracing::debug!(
			collection = %self.name,
			count = entries.len(),
			"loaded content collection"
		);
		Ok(entries)
	}
}

fn is_content_file(path: &Path) -> bool {
	path.extension()
		.and_then(|e| e.to_str())
		.is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

fn slug_for(dir: &Path, path: &Path) -> String {
	let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");
	relative
		.components()
		.map(|c| c.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/")
}

/// One collection per served locale, all sharing `schema`.
pub fn collections(
	locales: &LocaleTable,
	schema: &ContentSchema,
) -> ContentResult<Vec<ContentCollection>> {
	locales
		.codes()
		.map(|code| ContentCollection::new(code, schema.clone()))
		.collect()
}

/// The site's `en` and `he` page collections.
pub fn site_collections() -> ContentResult<Vec<ContentCollection>> {
	collections(&LANGUAGES, &ContentSchema::page())
}

/// Every loaded collection, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
	collections: BTreeMap<String, Vec<ContentEntry>>,
}

impl ContentStore {
	/// Load every collection under `root`.
	pub fn load(root: &Path, collections: &[ContentCollection]) -> ContentResult<Self> {
		let mut store = Self::default();
		for collection in collections {
			let entries = collection.load(root)?;
			store.collections.insert(collection.name().to_string(), entries);
		}
		tracing::info!(
			root = %root.display(),
			collections = store.collections.len(),
			entries = store.len(),
			"content store loaded"
		);
		Ok(store)
	}

	/// Entries of a collection; empty for unknown names.
	pub fn collection(&self, name: &str) -> &[ContentEntry] {
		self.collections
			.get(name)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Entry by collection and slug.
	pub fn get(&self, collection: &str, slug: &str) -> Option<&ContentEntry> {
		self.collection(collection).iter().find(|e| e.slug == slug)
	}

	/// Collections in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[ContentEntry])> {
		self.collections
			.iter()
			.map(|(name, entries)| (name.as_str(), entries.as_slice()))
	}

	/// Total number of entries.
	pub fn len(&self) -> usize {
		self.collections.values().map(Vec::len).sum()
	}

	/// Whether no entries were loaded.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
