//! Design tokens and styling-pipeline source globs.

pub use bilingual_theme::*;
