//! `site.toml` settings

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bilingual_content::{ContentCollection, ContentSchema, UnknownFieldPolicy, collections};
use bilingual_i18n::{
	DEFAULT_LANG, LANGUAGES, Locale, LocaleTable, MissingKeyPolicy, StringTable, UI,
};
use bilingual_theme::{ContentSources, DEFAULT_CONTENT_GLOB, Rgb, Theme};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// `[i18n]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nSettings {
	/// What a lookup missing from every catalog yields.
	pub missing_translation: MissingKeyPolicy,
	/// String-table file; the built-in table is used when unset.
	pub strings: Option<PathBuf>,
}

/// `[content]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentSettings {
	/// Content root; one subdirectory per locale.
	pub dir: PathBuf,
	/// How undeclared frontmatter fields are treated.
	pub unknown_fields: UnknownFieldPolicy,
}

impl Default for ContentSettings {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("src/content"),
			unknown_fields: UnknownFieldPolicy::default(),
		}
	}
}

/// `[theme]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
	/// Globs scanned for class names.
	pub content: Vec<String>,
	/// Color overrides applied on top of the site palette.
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub colors: BTreeMap<String, Rgb>,
	/// Font-stack overrides applied on top of the site typography.
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub fonts: BTreeMap<String, Vec<String>>,
}

impl Default for ThemeSettings {
	fn default() -> Self {
		Self {
			content: vec![DEFAULT_CONTENT_GLOB.to_string()],
			colors: BTreeMap::new(),
			fonts: BTreeMap::new(),
		}
	}
}

/// Site settings.
///
/// Every key is optional; an empty file yields the built-in bilingual site.
///
/// # Example
/// ```
/// use bilingual_conf::SiteSettings;
///
/// let settings = SiteSettings::from_toml_str(
/// 	r##"
/// default_locale = "he"
///
/// [theme.colors]
/// brand-accent = "#aa0000"
/// "##,
/// )
/// .unwrap();
///
/// let locales = settings.locale_table().unwrap();
/// assert_eq!(locales.resolve_locale("/about"), "he");
/// assert_eq!(settings.theme().unwrap().color("brand-accent").unwrap().to_string(), "#aa0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
	/// Locale every lookup falls back to.
	pub default_locale: String,
	/// Served locales, in language-switcher order.
	pub languages: Vec<Locale>,
	pub i18n: I18nSettings,
	pub content: ContentSettings,
	pub theme: ThemeSettings,
	/// Directory relative paths are resolved against.
	#[serde(skip)]
	pub base_dir: PathBuf,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LANG.to_string(),
			languages: LANGUAGES.iter().cloned().collect(),
			i18n: I18nSettings::default(),
			content: ContentSettings::default(),
			theme: ThemeSettings::default(),
			base_dir: PathBuf::from("."),
		}
	}
}

impl SiteSettings {
	/// Create settings for the built-in site
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the default locale
	pub fn with_default_locale(mut self, code: impl Into<String>) -> Self {
		self.default_locale = code.into();
		self
	}

	/// Replace the served locales
	pub fn with_languages(mut self, languages: Vec<Locale>) -> Self {
		self.languages = languages;
		self
	}

	/// Set the missing-translation policy
	pub fn with_missing_translation(mut self, policy: MissingKeyPolicy) -> Self {
		self.i18n.missing_translation = policy;
		self
	}

	/// Set the unknown-frontmatter-field policy
	pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
		self.content.unknown_fields = policy;
		self
	}

	/// Set the directory relative paths resolve against
	pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.base_dir = dir.into();
		self
	}

	/// Parse and validate settings from TOML.
	pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a file; relative paths resolve against its directory.
	pub fn from_file(path: &Path) -> SettingsResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let base_dir = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
			_ => PathBuf::from("."),
		};
		let settings = Self::from_toml_str(&content)?.with_base_dir(base_dir);
		tracing::debug!(
			path = %path.display(),
			default_locale = %settings.default_locale,
			languages = settings.languages.len(),
			"loaded site settings"
		);
		Ok(settings)
	}

	/// Check the locale table, the theme overrides and the content globs.
	pub fn validate(&self) -> SettingsResult<()> {
		self.locale_table()?;
		self.theme()?;
		self.content_sources()?;
		Ok(())
	}

	/// Resolve `path` against [`base_dir`](Self::base_dir).
	pub fn resolve_path(&self, path: &Path) -> PathBuf {
		if path.is_absolute() {
			path.to_path_buf()
		} else {
			self.base_dir.join(path)
		}
	}

	/// Served locales
	pub fn locale_table(&self) -> SettingsResult<LocaleTable> {
		Ok(LocaleTable::new(self.languages.clone(), &self.default_locale)?)
	}

	/// String table from `[i18n] strings`, or the built-in catalogs of the
	/// served locales.
	///
	/// The table is checked against [`locale_table`](Self::locale_table).
	pub fn string_table(&self) -> SettingsResult<StringTable> {
		let locales = self.locale_table()?;
		let table = match &self.i18n.strings {
			Some(path) => StringTable::from_file(&self.resolve_path(path), &self.default_locale)?,
			None => {
				let mut table = StringTable::new(&self.default_locale);
				for catalog in locales.codes().filter_map(|code| UI.catalog(code)) {
					table.add_catalog(catalog.clone());
				}
				table
			}
		};
		let table = table.with_policy(self.i18n.missing_translation);
		table.validate(&locales)?;
		Ok(table)
	}

	/// Content root directory
	pub fn content_dir(&self) -> PathBuf {
		self.resolve_path(&self.content.dir)
	}

	/// Page schema with the configured unknown-field policy
	pub fn content_schema(&self) -> ContentSchema {
		ContentSchema::page().with_unknown_fields(self.content.unknown_fields)
	}

	/// One collection per served locale
	pub fn content_collections(&self) -> SettingsResult<Vec<ContentCollection>> {
		Ok(collections(&self.locale_table()?, &self.content_schema())?)
	}

	/// Site theme with overrides applied
	pub fn theme(&self) -> SettingsResult<Theme> {
		let mut theme = Theme::site();
		for (name, value) in &self.theme.colors {
			theme.set_color(name, *value)?;
		}
		for (name, stack) in &self.theme.fonts {
			theme.set_font(name, stack.clone())?;
		}
		Ok(theme)
	}

	/// Compiled content globs
	pub fn content_sources(&self) -> SettingsResult<ContentSources> {
		Ok(ContentSources::new(&self.theme.content)?)
	}
}
