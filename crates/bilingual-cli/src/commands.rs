//! Subcommand implementations writing to any output stream

use std::io::Write;
use std::path::Path;

use anyhow::Context as _;
use bilingual_conf::SiteSettings;
use bilingual_content::ContentStore;
use colored::Colorize;

use crate::ThemeFormat;

pub(crate) fn resolve(
	settings: &SiteSettings,
	path: &str,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let locales = settings.locale_table()?;
	writeln!(out, "{}", locales.resolve_locale(path))?;
	Ok(())
}

pub(crate) fn translate(
	settings: &SiteSettings,
	locale: &str,
	key: &str,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let strings = settings.string_table()?;
	let translation = strings.translator(locale).translate(key)?;
	writeln!(out, "{translation}")?;
	Ok(())
}

pub(crate) fn check_i18n(settings: &SiteSettings, out: &mut impl Write) -> anyhow::Result<()> {
	let locales = settings.locale_table()?;
	let strings = settings.string_table().context("string table failed validation")?;
	let total = strings.default_catalog().map_or(0, |c| c.len());

	for locale in locales.iter() {
		let missing = strings.coverage(&locale.code);
		let covered = total - missing.len();
		let status = if missing.is_empty() {
			"ok".green()
		} else {
			"partial".yellow()
		};
		writeln!(
			out,
			"{} {} ({}, {}): {covered}/{total} keys",
			status,
			locale.code.bold(),
			locale.name,
			locale.direction.as_str()
		)?;
		for key in missing {
			writeln!(out, "    missing {key}")?;
		}
	}
	Ok(())
}

pub(crate) fn check_content(
	settings: &SiteSettings,
	dir: &Path,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let collections = settings.content_collections()?;
	let store = ContentStore::load(dir, &collections)
		.with_context(|| format!("content under {} failed validation", dir.display()))?;

	for (name, entries) in store.iter() {
		writeln!(out, "{} {}: {} entries", "ok".green(), name.bold(), entries.len())?;
		for entry in entries {
			writeln!(out, "    {} ({})", entry.slug, entry.data.title)?;
		}
	}
	writeln!(out, "{} entries in {} collections", store.len(), collections.len())?;
	Ok(())
}

pub(crate) fn theme(
	settings: &SiteSettings,
	format: ThemeFormat,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let theme = settings.theme()?;
	match format {
		ThemeFormat::Css => write!(out, "{}", theme.to_css_variables())?,
		ThemeFormat::Json => writeln!(out, "{}", theme.to_json_string()?)?,
	}
	Ok(())
}

pub(crate) fn sources(
	settings: &SiteSettings,
	root: &Path,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let sources = settings.content_sources()?;
	for path in sources.scan(root)? {
		writeln!(out, "{}", path.display())?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use bilingual_i18n::MissingKeyPolicy;
	use rstest::rstest;
	use std::fs;
	use tempfile::TempDir;

	fn output(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
		let mut buffer = Vec::new();
		run(&mut buffer).unwrap();
		String::from_utf8(buffer).unwrap()
	}

	#[rstest]
	#[case("/he/about", "he\n")]
	#[case("/about", "en\n")]
	#[case("/fr/", "en\n")]
	fn test_resolve(#[case] path: &str, #[case] expected: &str) {
		let settings = SiteSettings::default();
		assert_eq!(output(|out| resolve(&settings, path, out)), expected);
	}

	#[rstest]
	#[case("he", "nav.contact", "צור קשר\n")]
	#[case("en", "lang.switch", "עברית\n")]
	#[case("he", "nav.blog", "nav.blog\n")]
	fn test_translate(#[case] locale: &str, #[case] key: &str, #[case] expected: &str) {
		let settings = SiteSettings::default();
		assert_eq!(output(|out| translate(&settings, locale, key, out)), expected);
	}

	#[rstest]
	fn test_translate_strict_missing_fails() {
		let settings = SiteSettings::default().with_missing_translation(MissingKeyPolicy::Strict);
		let mut buffer = Vec::new();

		let result = translate(&settings, "he", "nav.blog", &mut buffer);

		let message = format!("{:#}", result.unwrap_err());
		assert!(message.contains("nav.blog"), "{message}");
		assert!(buffer.is_empty());
	}

	#[rstest]
	fn test_check_i18n_reports_full_coverage() {
		let report = output(|out| check_i18n(&SiteSettings::default(), out));
		assert!(report.contains("5/5 keys"), "{report}");
		assert!(!report.contains("missing"), "{report}");
	}

	#[rstest]
	fn test_check_content_summary_and_failure() {
		// Arrange
		let dir = TempDir::new().unwrap();
		fs::create_dir_all(dir.path().join("en")).unwrap();
		fs::write(dir.path().join("en/index.md"), "---\ntitle: Home\n---\n").unwrap();
		let settings = SiteSettings::default();

		// Act
		let report = output(|out| check_content(&settings, dir.path(), out));

		// Assert
		assert!(report.contains("index (Home)"), "{report}");
		assert!(report.ends_with("1 entries in 2 collections\n"), "{report}");

		fs::write(dir.path().join("en/bad.md"), "---\nsubtitle: x\n---\n").unwrap();
		let error = check_content(&settings, dir.path(), &mut Vec::new()).unwrap_err();
		let message = format!("{error:#}");
		assert!(message.contains("bad.md"), "{message}");
		assert!(message.contains("title: Required"), "{message}");
	}

	#[rstest]
	fn test_theme_formats() {
		let settings = SiteSettings::default();

		let css = output(|out| theme(&settings, ThemeFormat::Css, out));
		let json = output(|out| theme(&settings, ThemeFormat::Json, out));

		assert!(css.contains("--color-brand-bg: #f8f5f1;"), "{css}");
		assert!(json.contains("\"fontFamily\""), "{json}");
	}

	#[rstest]
	fn test_sources_lists_matching_files() {
		let dir = TempDir::new().unwrap();
		fs::create_dir_all(dir.path().join("src/pages")).unwrap();
		fs::write(dir.path().join("src/pages/index.astro"), "").unwrap();
		fs::write(dir.path().join("src/data.json"), "{}").unwrap();

		let listed = output(|out| sources(&SiteSettings::default(), dir.path(), out));

		assert_eq!(listed.trim(), Path::new("src/pages/index.astro").display().to_string());
	}
}
