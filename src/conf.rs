//! Site settings.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bilingual_site::conf::SiteSettings;
//! use std::path::Path;
//!
//! let settings = SiteSettings::from_file(Path::new("site.toml"))?;
//! # Ok::<(), bilingual_site::conf::SettingsError>(())
//! ```

pub use bilingual_conf::*;
