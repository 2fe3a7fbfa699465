//! Source-file globs scanned by the styling pipeline

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ThemeError, ThemeResult};

/// Default glob: every template, markup, and script file under `src/`.
pub const DEFAULT_CONTENT_GLOB: &str = "./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
	case_sensitive: true,
	require_literal_separator: true,
	require_literal_leading_dot: false,
};

/// Expand `{a,b}` alternatives (nesting allowed) into plain glob patterns.
fn expand_braces(pattern: &str) -> ThemeResult<Vec<String>> {
	let unbalanced = || ThemeError::UnbalancedBraces(pattern.to_string());

	let Some(open) = pattern.find('{') else {
		if pattern.contains('}') {
			return Err(unbalanced());
		}
		return Ok(vec![pattern.to_string()]);
	};
	if pattern[..open].contains('}') {
		return Err(unbalanced());
	}

	let mut depth = 0usize;
	let mut bounds = vec![open];
	let mut close = None;
	for (i, c) in pattern[open..].char_indices() {
		let i = open + i;
		match c {
			'{' => depth += 1,
			'}' => {
				depth -= 1;
				if depth == 0 {
					close = Some(i);
					break;
				}
			}
			',' if depth == 1 => bounds.push(i),
			_ => {}
		}
	}
	let close = close.ok_or_else(unbalanced)?;
	bounds.push(close);

	let prefix = &pattern[..open];
	let suffix = &pattern[close + 1..];
	let mut expanded = Vec::new();
	for window in bounds.windows(2) {
		let alternative = &pattern[window[0] + 1..window[1]];
		expanded.extend(expand_braces(&format!("{prefix}{alternative}{suffix}"))?);
	}
	Ok(expanded)
}

fn normalize(path: &str) -> &str {
	path.strip_prefix("./").unwrap_or(path)
}

/// Compiled set of source globs, relative to a project root.
///
/// # Example
/// ```
/// use bilingual_theme::ContentSources;
/// use std::path::Path;
///
/// let sources = ContentSources::site().unwrap();
/// assert!(sources.matches(Path::new("src/pages/index.astro")));
/// assert!(!sources.matches(Path::new("src/data/products.json")));
/// ```
#[derive(Debug, Clone)]
pub struct ContentSources {
	patterns: Vec<String>,
	compiled: Vec<Pattern>,
}

impl ContentSources {
	/// Compile the given globs, expanding brace alternatives.
	pub fn new<S: AsRef<str>>(patterns: &[S]) -> ThemeResult<Self> {
		let mut compiled = Vec::new();
		for pattern in patterns {
			for expanded in expand_braces(pattern.as_ref())? {
				let normalized = normalize(&expanded);
				let glob = Pattern::new(normalized).map_err(|source| ThemeError::Pattern {
					pattern: normalized.to_string(),
					source,
				})?;
				compiled.push(glob);
			}
		}

		Ok(Self {
			patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
			compiled,
		})
	}

	/// The site's single default glob.
	pub fn site() -> ThemeResult<Self> {
		Self::new(&[DEFAULT_CONTENT_GLOB])
	}

	/// Globs as given, before expansion
	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Whether a root-relative path matches any glob.
	pub fn matches(&self, relative: &Path) -> bool {
		let joined = relative
			.components()
			.map(|c| c.as_os_str().to_string_lossy())
			.collect::<Vec<_>>()
			.join("/");
		let candidate = normalize(&joined);
		self.compiled
			.iter()
			.any(|p| p.matches_with(candidate, MATCH_OPTIONS))
	}

	/// Root-relative paths of every matching file under `root`, sorted.
	///
	/// Hidden directories and `node_modules` are not descended into.
	pub fn scan(&self, root: &Path) -> ThemeResult<Vec<PathBuf>> {
		let mut files = Vec::new();
		let walker = WalkDir::new(root)
			.sort_by_file_name()
			.into_iter()
			.filter_entry(|e| e.depth() == 0 || !is_ignored_dir(e));

		for entry in walker {
			let entry = entry?;
			if !entry.file_type().is_file() {
				continue;
			}
			let Ok(relative) = entry.path().strip_prefix(root) else {
				continue;
			};
			if self.matches(relative) {
				files.push(relative.to_path_buf());
			}
		}

		tracing::debug!(root = %root.display(), count = files.len(), "scanned style sources");
		Ok(files)
	}
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
	if !entry.file_type().is_dir() {
		return false;
	}
	let name = entry.file_name().to_string_lossy();
	name == "node_modules" || name.starts_with('.')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("src/*.js", vec!["src/*.js"])]
	#[case("*.{md,mdx}", vec!["*.md", "*.mdx"])]
	#[case("{a,b}/{c,d}", vec!["a/c", "a/d", "b/c", "b/d"])]
	#[case("*.{j{s,sx},ts}", vec!["*.js", "*.jsx", "*.ts"])]
	#[case("x{}", vec!["x"])]
	fn test_expand_braces(#[case] pattern: &str, #[case] expected: Vec<&str>) {
		assert_eq!(expand_braces(pattern).unwrap(), expected);
	}

	#[rstest]
	#[case("*.{md")]
	#[case("*.md}")]
	#[case("}{")]
	fn test_expand_braces_unbalanced(#[case] pattern: &str) {
		assert!(matches!(
			expand_braces(pattern),
			Err(ThemeError::UnbalancedBraces(_))
		));
	}

	#[rstest]
	fn test_default_glob_expands_to_every_extension() {
		let expanded = expand_braces(DEFAULT_CONTENT_GLOB).unwrap();
		assert_eq!(expanded.len(), 10);
		assert_eq!(expanded[0], "./src/**/*.astro");
		assert_eq!(expanded[9], "./src/**/*.vue");
	}

	#[rstest]
	#[case("src/pages/index.astro", true)]
	#[case("./src/pages/he/about.astro", true)]
	#[case("src/components/nav/Header.tsx", true)]
	#[case("src/content/en/index.md", true)]
	#[case("src/data/products.json", false)]
	#[case("public/index.html", false)]
	#[case("src/pages/index.ASTRO", false)]
	fn test_site_matches(#[case] path: &str, #[case] expected: bool) {
		let sources = ContentSources::site().unwrap();
		assert_eq!(sources.matches(Path::new(path)), expected, "{path}");
	}

	#[rstest]
	fn test_invalid_glob_reported() {
		let result = ContentSources::new(&["src/[.js"]);
		assert!(matches!(result, Err(ThemeError::Pattern { .. })));
	}
}
