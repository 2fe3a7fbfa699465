//! # Bilingual Site
//!
//! Core of a statically built English/Hebrew content site.
//!
//! ## Crates
//!
//! - [`i18n`] - Locale table, URL-to-locale resolution, UI string tables
//!   with default-locale fallback
//! - [`content`] - Per-locale Markdown collections with validated YAML
//!   frontmatter
//! - [`theme`] - Color and font tokens, rendered as CSS variables or
//!   utility-generator JSON, and the source globs the generator scans
//! - [`conf`] - `site.toml` settings tying the three together
//!
//! [`Site`] bundles the validated tables built from one set of settings and
//! hands out a [`Page`] view per request path.
//!
//! ## Quick Example
//!
//! ```rust
//! use bilingual_site::prelude::*;
//!
//! let site = Site::from_settings(SiteSettings::default()).unwrap();
//! let page = site.page("/he/contact");
//!
//! assert_eq!(page.lang(), "he");
//! assert_eq!(page.direction().as_str(), "rtl");
//! assert_eq!(page.t("nav.contact"), "צור קשר");
//!
//! let (english, path) = &page.alternates()[0];
//! assert_eq!(english.code, "en");
//! assert_eq!(path, "/en/contact");
//! ```

pub mod conf;
pub mod content;
pub mod i18n;
mod site;
pub mod theme;

pub use bilingual_conf::{SettingsError, SettingsResult, SiteSettings};
pub use bilingual_content::{ContentEntry, ContentError, ContentStore, PageFrontmatter};
pub use bilingual_i18n::{
	I18nError, Locale, LocaleTable, MissingKeyPolicy, StringTable, TextDirection, Translator,
	get_lang_from_url, use_translations,
};
pub use bilingual_theme::{ContentSources, Rgb, Theme};
pub use site::{Page, Site};

/// Common imports
pub mod prelude {
	pub use crate::{
		ContentStore, Locale, MissingKeyPolicy, Page, SettingsError, Site, SiteSettings,
		TextDirection, Theme, Translator, get_lang_from_url, use_translations,
	};
}
