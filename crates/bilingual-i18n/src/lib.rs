//! Internationalization for the bilingual site
//!
//! Two pure operations over immutable tables:
//!
//! - **Locale resolution**: the first path segment of a URL selects the
//!   locale when it names a served locale; anything else resolves to the
//!   default locale. Resolution never fails.
//! - **Translation**: a [`Translator`] bound to one locale looks a message key
//!   up in that locale's catalog and falls back to the default locale's
//!   catalog.
//!
//! The site's own tables are available as [`LANGUAGES`] and [`UI`];
//! [`LocaleTable`] and [`StringTable`] can also be built from settings.
//!
//! ```
//! use bilingual_i18n::{get_lang_from_url, use_translations};
//!
//! let lang = get_lang_from_url("/he/products");
//! let t = use_translations(lang);
//! assert_eq!(t.t("nav.products"), "המוצרים שלי");
//! ```

mod builtin;
pub mod catalog;
pub mod error;
pub mod locale;
pub mod translator;

pub use builtin::{DEFAULT_LANG, LANGUAGES, UI, get_lang_from_url, use_translations};
pub use catalog::{MessageCatalog, StringTable};
pub use error::{I18nError, I18nResult};
pub use locale::{Locale, LocaleTable, TextDirection};
pub use translator::{MissingKeyPolicy, Translator};
