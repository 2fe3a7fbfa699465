//! Typed page frontmatter and loaded content entries

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Validated frontmatter of a page document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrontmatter {
	/// Page heading and `<title>`.
	pub title: String,
	/// Hero line under the heading.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	/// Meta description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Label of the main call-to-action button.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub primary_button: Option<String>,
	/// Target of the main call-to-action button.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub primary_button_link: Option<String>,
	/// Label of the second button.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secondary_button: Option<String>,
	/// Target of the second button.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secondary_button_link: Option<String>,
}

impl PageFrontmatter {
	/// Primary call-to-action as `(label, link)`, when both are set.
	pub fn primary_action(&self) -> Option<(&str, &str)> {
		self.primary_button
			.as_deref()
			.zip(self.primary_button_link.as_deref())
	}

	/// Secondary call-to-action as `(label, link)`, when both are set.
	pub fn secondary_action(&self) -> Option<(&str, &str)> {
		self.secondary_button
			.as_deref()
			.zip(self.secondary_button_link.as_deref())
	}
}

/// A document loaded from a content collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
	/// Collection (locale code) the document belongs to.
	pub collection: String,
	/// Path relative to the collection directory, without extension, with `/` separators.
	pub slug: String,
	/// Path of the source file.
	pub path: PathBuf,
	/// Validated frontmatter.
	pub data: PageFrontmatter,
	/// Markdown after the frontmatter block.
	pub body: String,
}
