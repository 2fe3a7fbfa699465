//! Content collections and frontmatter validation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bilingual_site::content::{ContentStore, site_collections};
//! use std::path::Path;
//!
//! let store = ContentStore::load(Path::new("src/content"), &site_collections()?)?;
//! # Ok::<(), bilingual_site::content::ContentError>(())
//! ```

pub use bilingual_content::*;
