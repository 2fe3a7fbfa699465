//! The site's own locales and UI strings.

use once_cell::sync::Lazy;

use crate::catalog::{MessageCatalog, StringTable};
use crate::locale::{Locale, LocaleTable, TextDirection};
use crate::translator::Translator;

/// Locale every lookup falls back to.
pub const DEFAULT_LANG: &str = "en";

/// Served locales, in language-switcher order.
pub static LANGUAGES: Lazy<LocaleTable> = Lazy::new(|| {
	LocaleTable::from_validated(
		vec![
			Locale::new("en", "English"),
			Locale::new("he", "עברית").with_direction(TextDirection::Rtl),
		],
		0,
	)
});

/// UI strings per locale.
pub static UI: Lazy<StringTable> = Lazy::new(|| {
	let mut table = StringTable::new(DEFAULT_LANG);
	table.add_catalog(
		MessageCatalog::new("en")
			.with("nav.home", "Home")
			.with("nav.about", "About Me")
			.with("nav.products", "My Products")
			.with("nav.contact", "Contact")
			.with("lang.switch", "עברית"),
	);
	table.add_catalog(
		MessageCatalog::new("he")
			.with("nav.home", "בית")
			.with("nav.about", "אודות")
			.with("nav.products", "המוצרים שלי")
			.with("nav.contact", "צור קשר")
			.with("lang.switch", "English"),
	);
	table
});

/// Locale encoded in `path`, or [`DEFAULT_LANG`].
///
/// # Examples
///
/// ```
/// use bilingual_i18n::get_lang_from_url;
///
/// assert_eq!(get_lang_from_url("/he/about"), "he");
/// assert_eq!(get_lang_from_url("/about"), "en");
/// ```
pub fn get_lang_from_url(path: &str) -> &'static str {
	LANGUAGES.resolve_locale(path)
}

/// Translator over [`UI`] for `lang`.
pub fn use_translations(lang: &str) -> Translator<'static> {
	UI.translator(lang)
}
