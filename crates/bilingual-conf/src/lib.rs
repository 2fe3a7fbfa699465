//! Settings for the bilingual site
//!
//! [`SiteSettings`] is read from a `site.toml` file. Every key is optional and
//! the defaults describe the built-in English/Hebrew site, so an empty file
//! (or no file at all) is a valid configuration.
//!
//! ```toml
//! default_locale = "en"
//!
//! [[languages]]
//! code = "en"
//! name = "English"
//!
//! [[languages]]
//! code = "he"
//! name = "עברית"
//! direction = "rtl"
//!
//! [i18n]
//! missing_translation = "placeholder"
//! strings = "strings.toml"
//!
//! [content]
//! dir = "src/content"
//! unknown_fields = "reject"
//!
//! [theme]
//! content = ["./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}"]
//! ```

pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{ContentSettings, I18nSettings, SiteSettings, ThemeSettings};
