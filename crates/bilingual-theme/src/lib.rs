//! Design tokens for the bilingual site's styling pipeline
//!
//! The theme is a fixed palette of six named colors and two font stacks,
//! rendered either as CSS custom properties or as the `theme.extend` JSON a
//! utility-class generator consumes. [`ContentSources`] lists the files that
//! generator scans for class names.

pub mod color;
pub mod error;
pub mod sources;
pub mod tokens;

pub use color::Rgb;
pub use error::{ThemeError, ThemeResult};
pub use sources::{ContentSources, DEFAULT_CONTENT_GLOB};
pub use tokens::{ColorToken, FontToken, Theme};
