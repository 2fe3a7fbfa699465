//! Splitting documents into a YAML frontmatter block and a body

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{ContentError, ContentResult};
use crate::schema::yaml_type_name;

const FENCE: &str = "---";

fn is_fence(line: &str) -> bool {
	line.trim_end_matches(['\r', '\n']).trim_end() == FENCE
}

/// Split `source` into `(frontmatter, body)`.
///
/// The block must open on the first line with `---` and close with a line
/// holding only `---`. Returns `None` when there is no such block, including
/// when the opening fence is never closed; the whole document is then body.
///
/// # Examples
///
/// ```
/// use bilingual_content::frontmatter::split;
///
/// let (yaml, body) = split("---\ntitle: Hello\n---\n# Hi\n").unwrap();
/// assert_eq!(yaml, "title: Hello\n");
/// assert_eq!(body, "# Hi\n");
///
/// assert!(split("# No frontmatter").is_none());
/// ```
pub fn split(source: &str) -> Option<(&str, &str)> {
	let source = source.strip_prefix('\u{feff}').unwrap_or(source);

	let (first, after_open) = match source.split_once('\n') {
		Some((first, rest)) => (first, rest),
		None => return None,
	};
	if !is_fence(first) {
		return None;
	}

	let mut offset = 0;
	for line in after_open.split_inclusive('\n') {
		if is_fence(line) {
			let yaml = &after_open[..offset];
			let body = &after_open[offset + line.len()..];
			return Some((yaml, body));
		}
		offset += line.len();
	}
	None
}

/// Parse a document into its frontmatter mapping and body.
///
/// A missing or empty block yields an empty mapping. `document` is only used
/// to label errors.
pub fn parse<'s>(document: &Path, source: &'s str) -> ContentResult<(Mapping, &'s str)> {
	let Some((yaml, body)) = split(source) else {
		return Ok((Mapping::new(), source));
	};

	let value: Value = serde_yaml::from_str(yaml).map_err(|source| ContentError::Yaml {
		document: document.to_path_buf(),
		source,
	})?;

	match value {
		Value::Null => Ok((Mapping::new(), body)),
		Value::Mapping(mapping) => Ok((mapping, body)),
		other => Err(ContentError::NotAMapping {
			document: document.to_path_buf(),
			found: yaml_type_name(&other),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("---\ntitle: A\n---\nbody", "title: A\n", "body")]
	#[case("---\r\ntitle: A\r\n---\r\nbody", "title: A\r\n", "body")]
	#[case("\u{feff}---\ntitle: A\n---\n", "title: A\n", "")]
	#[case("---\n---\nbody", "", "body")]
	#[case("--- \ntitle: A\n---  \nbody", "title: A\n", "body")]
	#[case("---\ntitle: A\n---", "title: A\n", "")]
	fn test_split(#[case] source: &str, #[case] yaml: &str, #[case] body: &str) {
		assert_eq!(split(source), Some((yaml, body)));
	}

	#[rstest]
	#[case("")]
	#[case("---")]
	#[case("# Title\n---\ntitle: A\n---\n")]
	#[case("---\ntitle: A\nno closing fence\n")]
	#[case("----\ntitle: A\n----\n")]
	fn test_split_without_block(#[case] source: &str) {
		assert_eq!(split(source), None);
	}

	#[rstest]
	fn test_parse_mapping() {
		// Arrange
		let source = "---\ntitle: שלום\nsubtitle: עולם\n---\nתוכן\n";

		// Act
		let (frontmatter, body) = parse(Path::new("he/index.md"), source).unwrap();

		// Assert
		assert_eq!(frontmatter.len(), 2);
		assert_eq!(body, "תוכן\n");
	}

	#[rstest]
	fn test_parse_without_block_is_empty() {
		let (frontmatter, body) = parse(Path::new("en/a.md"), "# Just text").unwrap();
		assert!(frontmatter.is_empty());
		assert_eq!(body, "# Just text");
	}

	#[rstest]
	fn test_parse_rejects_sequence() {
		let result = parse(Path::new("en/a.md"), "---\n- a\n- b\n---\n");
		assert!(matches!(
			result,
			Err(ContentError::NotAMapping { found: "array", .. })
		));
	}

	#[rstest]
	fn test_parse_reports_yaml_syntax_error() {
		let result = parse(Path::new("en/a.md"), "---\ntitle: [unclosed\n---\n");
		match result {
			Err(ContentError::Yaml { document, .. }) => {
				assert_eq!(document, Path::new("en/a.md"));
			}
			other => panic!("expected YAML error, got {other:?}"),
		}
	}
}
