//! Locale resolution and UI strings.
//!
//! # Examples
//!
//! ```rust
//! use bilingual_site::i18n::{get_lang_from_url, use_translations};
//!
//! assert_eq!(use_translations(get_lang_from_url("/he/")).t("nav.home"), "בית");
//! ```

pub use bilingual_i18n::*;
