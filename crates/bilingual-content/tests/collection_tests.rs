//! Loading content collections from an on-disk tree

use std::fs;
use std::path::Path;

use bilingual_content::{
	ContentCollection, ContentError, ContentSchema, ContentStore, IssueKind, UnknownFieldPolicy,
	site_collections,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
	let path = root.join(relative);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

#[fixture]
fn content_root() -> TempDir {
	let dir = TempDir::new().unwrap();
	write(
		dir.path(),
		"en/index.md",
		"---\ntitle: Handmade by hand\nsubtitle: Jewelry and ceramics\nprimaryButton: Shop\nprimaryButtonLink: /en/products\n---\nWelcome!\n",
	);
	write(dir.path(), "en/about.md", "---\ntitle: About Me\n---\n");
	write(
		dir.path(),
		"en/products/rings.mdx",
		"---\ntitle: Rings\n---\n<Gallery />\n",
	);
	write(dir.path(), "en/notes.txt", "not content");
	write(dir.path(), "he/index.md", "---\ntitle: עבודת יד\n---\nברוכים הבאים\n");
	dir
}

#[rstest]
fn test_load_site_collections(content_root: TempDir) {
	// Arrange
	let collections = site_collections().unwrap();

	// Act
	let store = ContentStore::load(content_root.path(), &collections).unwrap();

	// Assert
	assert_eq!(store.len(), 4);
	let slugs: Vec<&str> = store.collection("en").iter().map(|e| e.slug.as_str()).collect();
	assert_eq!(slugs, vec!["about", "index", "products/rings"]);

	let home = store.get("en", "index").unwrap();
	assert_eq!(home.data.subtitle.as_deref(), Some("Jewelry and ceramics"));
	assert_eq!(home.data.primary_action(), Some(("Shop", "/en/products")));
	assert_eq!(home.body, "Welcome!\n");

	let he_home = store.get("he", "index").unwrap();
	assert_eq!(he_home.data.title, "עבודת יד");
	assert_eq!(he_home.collection, "he");
}

#[rstest]
fn test_missing_collection_directory_is_empty() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "en/index.md", "---\ntitle: Hi\n---\n");

	let store = ContentStore::load(dir.path(), &site_collections().unwrap()).unwrap();

	assert_eq!(store.collection("en").len(), 1);
	assert!(store.collection("he").is_empty());
	assert!(store.collection("fr").is_empty());
}

#[rstest]
fn test_invalid_document_aborts_load(content_root: TempDir) {
	// Arrange
	write(
		content_root.path(),
		"he/contact.md",
		"---\nsubtitle: צור קשר\nheroImage: /img.png\n---\n",
	);

	// Act
	let result = ContentStore::load(content_root.path(), &site_collections().unwrap());

	// Assert
	match result {
		Err(ContentError::Validation { document, issues }) => {
			assert!(document.ends_with("he/contact.md"));
			assert_eq!(issues.len(), 2);
			assert_eq!(issues[0].field, "title");
			assert_eq!(issues[0].kind, IssueKind::Required);
			assert_eq!(issues[1].field, "heroImage");
			assert_eq!(issues[1].kind, IssueKind::Unrecognized);
		}
		other => panic!("expected validation error, got {other:?}"),
	}
}

#[rstest]
fn test_unknown_fields_ignored_when_configured(content_root: TempDir) {
	// Arrange
	write(
		content_root.path(),
		"he/contact.md",
		"---\ntitle: צור קשר\nheroImage: /img.png\n---\n",
	);
	let schema = ContentSchema::page().with_unknown_fields(UnknownFieldPolicy::Ignore);
	let he = ContentCollection::new("he", schema).unwrap();

	// Act
	let entries = he.load(content_root.path()).unwrap();

	// Assert
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].slug, "contact");
}

#[rstest]
fn test_duplicate_slug_rejected(content_root: TempDir) {
	write(content_root.path(), "en/about.mdx", "---\ntitle: About again\n---\n");

	let result = ContentStore::load(content_root.path(), &site_collections().unwrap());

	assert!(matches!(
		result,
		Err(ContentError::DuplicateSlug { collection, slug }) if collection == "en" && slug == "about"
	));
}

#[rstest]
fn test_error_message_identifies_document_and_field(content_root: TempDir) {
	write(content_root.path(), "en/broken.md", "---\ntitle: 42\n---\n");

	let error = ContentStore::load(content_root.path(), &site_collections().unwrap()).unwrap_err();

	let message = error.to_string();
	assert!(message.contains("broken.md"), "{message}");
	assert!(message.contains("title: Expected string, received number"), "{message}");
}
