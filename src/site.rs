//! Per-request view over the site's tables

use std::path::Path;

use bilingual_conf::{SettingsResult, SiteSettings};
use bilingual_content::ContentStore;
use bilingual_i18n::{Locale, LocaleTable, StringTable, TextDirection, Translator};
use bilingual_theme::Theme;

/// Locale table, string table and theme built from one [`SiteSettings`].
///
/// # Example
/// ```
/// use bilingual_site::{Site, SiteSettings, TextDirection};
///
/// let site = Site::from_settings(SiteSettings::default()).unwrap();
/// let page = site.page("/he/about");
///
/// assert_eq!(page.lang(), "he");
/// assert_eq!(page.direction(), TextDirection::Rtl);
/// assert_eq!(page.t("nav.about"), "אודות");
/// ```
#[derive(Debug, Clone)]
pub struct Site {
	settings: SiteSettings,
	locales: LocaleTable,
	strings: StringTable,
	theme: Theme,
}

impl Site {
	/// Build and validate every table
	pub fn from_settings(settings: SiteSettings) -> SettingsResult<Self> {
		let locales = settings.locale_table()?;
		let strings = settings.string_table()?;
		let theme = settings.theme()?;
		tracing::info!(
			default_locale = %locales.default_code(),
			locales = locales.len(),
			"site initialized"
		);
		Ok(Self {
			settings,
			locales,
			strings,
			theme,
		})
	}

	/// Load settings from `path` and build the site
	pub fn load(path: &Path) -> SettingsResult<Self> {
		Self::from_settings(SiteSettings::from_file(path)?)
	}

	/// Settings the tables were built from
	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	/// Served locales
	pub fn locales(&self) -> &LocaleTable {
		&self.locales
	}

	/// UI strings with the configured missing-key policy
	pub fn strings(&self) -> &StringTable {
		&self.strings
	}

	/// Design tokens with overrides applied
	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	/// View of the site as seen from request path `path`.
	pub fn page(&self, path: &str) -> Page<'_> {
		let code = self.locales.resolve_locale(path);
		let locale = self
			.locales
			.get(code)
			.unwrap_or_else(|| self.locales.default_locale());
		Page {
			path: path.to_string(),
			locale,
			locales: &self.locales,
			translator: self.strings.translator(&locale.code),
		}
	}

	/// Load every content collection from the configured content directory.
	pub fn load_content(&self) -> SettingsResult<ContentStore> {
		let collections = self.settings.content_collections()?;
		Ok(ContentStore::load(&self.settings.content_dir(), &collections)?)
	}
}

/// A request path with its resolved locale.
#[derive(Debug, Clone)]
pub struct Page<'a> {
	path: String,
	locale: &'a Locale,
	locales: &'a LocaleTable,
	translator: Translator<'a>,
}

impl<'a> Page<'a> {
	/// Request path as given
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Resolved locale
	pub fn locale(&self) -> &'a Locale {
		self.locale
	}

	/// Resolved locale code, for `<html lang>`
	pub fn lang(&self) -> &'a str {
		&self.locale.code
	}

	/// Writing direction, for `<html dir>`
	pub fn direction(&self) -> TextDirection {
		self.locale.direction
	}

	/// Translator bound to the resolved locale
	pub fn translator(&self) -> &Translator<'a> {
		&self.translator
	}

	/// Shorthand for [`Translator::t`]
	pub fn t<'k>(&self, key: &'k str) -> &'k str
	where
		'a: 'k,
	{
		self.translator.t(key)
	}

	/// Every other served locale with this page's path in that locale, in
	/// display order.
	pub fn alternates(&self) -> Vec<(&'a Locale, String)> {
		self.locales
			.iter()
			.filter(|l| l.code != self.locale.code)
			.map(|l| (l, self.locales.localized_path(&self.path, &l.code)))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn site() -> Site {
		Site::from_settings(SiteSettings::default()).unwrap()
	}

	#[rstest]
	#[case("/he/about", "he", TextDirection::Rtl)]
	#[case("/en/", "en", TextDirection::Ltr)]
	#[case("/about", "en", TextDirection::Ltr)]
	#[case("", "en", TextDirection::Ltr)]
	fn test_page_locale(
		site: Site,
		#[case] path: &str,
		#[case] lang: &str,
		#[case] direction: TextDirection,
	) {
		let page = site.page(path);
		assert_eq!(page.lang(), lang);
		assert_eq!(page.direction(), direction);
	}

	#[rstest]
	fn test_page_translations_follow_locale(site: Site) {
		// Act
		let he = site.page("/he/products");
		let en = site.page("/products");

		// Assert
		assert_eq!(he.t("nav.products"), "המוצרים שלי");
		assert_eq!(he.t("lang.switch"), "English");
		assert_eq!(en.t("lang.switch"), "עברית");
		assert_eq!(en.t("nav.unknown"), "nav.unknown");
	}

	#[rstest]
	fn test_alternates(site: Site) {
		let page = site.page("/he/about");

		let alternates: Vec<(&str, String)> = page
			.alternates()
			.into_iter()
			.map(|(l, path)| (l.code.as_str(), path))
			.collect();

		assert_eq!(alternates, vec![("en", "/en/about".to_string())]);
	}

	#[rstest]
	fn test_invalid_settings_rejected() {
		let settings = SiteSettings::default().with_default_locale("fr");
		assert!(Site::from_settings(settings).is_err());
	}
}
