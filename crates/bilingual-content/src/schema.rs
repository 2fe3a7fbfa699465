//! Frontmatter schema: declared string fields and unknown-field handling

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{FieldIssue, IssueKind};

/// How fields not declared by the schema are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
	/// Undeclared fields fail validation.
	#[default]
	Reject,
	/// Undeclared fields are dropped from the cleaned frontmatter.
	Ignore,
}

/// A string-valued frontmatter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	/// Frontmatter key, e.g. `primaryButtonLink`.
	pub name: String,
	/// Whether an absent key is an issue.
	pub required: bool,
}

impl FieldSpec {
	/// Create an optional field with the given name
	///
	/// # Examples
	///
	/// ```
	/// use bilingual_content::FieldSpec;
	///
	/// let field = FieldSpec::new("subtitle");
	/// assert_eq!(field.name, "subtitle");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			required: false,
		}
	}

	/// Set the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Check one value; `None` means the key is absent.
	///
	/// An explicit YAML `null` is a type error, not an absent value.
	pub fn clean(&self, value: Option<&Value>) -> Result<Option<String>, IssueKind> {
		match value {
			None if self.required => Err(IssueKind::Required),
			None => Ok(None),
			Some(Value::String(s)) => Ok(Some(s.clone())),
			Some(other) => Err(IssueKind::ExpectedString {
				found: yaml_type_name(other),
			}),
		}
	}
}

/// Name of a YAML value's type, for error messages.
pub(crate) fn yaml_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Sequence(_) => "array",
		Value::Mapping(_) => "object",
		Value::Tagged(_) => "tagged value",
	}
}

/// Declared shape of a content document's frontmatter.
///
/// # Example
/// ```
/// use bilingual_content::ContentSchema;
///
/// let schema = ContentSchema::page();
/// let frontmatter: serde_yaml::Mapping = serde_yaml::from_str("title: Hello").unwrap();
///
/// let cleaned = schema.clean(&frontmatter).unwrap();
/// assert_eq!(cleaned.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSchema {
	fields: Vec<FieldSpec>,
	unknown_fields: UnknownFieldPolicy,
}

impl ContentSchema {
	/// Create a schema from field declarations, rejecting unknown fields
	pub fn new(fields: Vec<FieldSpec>) -> Self {
		Self {
			fields,
			unknown_fields: UnknownFieldPolicy::default(),
		}
	}

	/// Schema shared by every page collection: a required `title` plus
	/// optional hero text and two call-to-action buttons.
	pub fn page() -> Self {
		Self::new(vec![
			FieldSpec::new("title").required(),
			FieldSpec::new("subtitle"),
			FieldSpec::new("description"),
			FieldSpec::new("primaryButton"),
			FieldSpec::new("primaryButtonLink"),
			FieldSpec::new("secondaryButton"),
			FieldSpec::new("secondaryButtonLink"),
		])
	}

	/// Set the unknown-field policy
	pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
		self.unknown_fields = policy;
		self
	}

	/// Declared fields in declaration order
	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	/// Current unknown-field policy
	pub fn unknown_fields(&self) -> UnknownFieldPolicy {
		self.unknown_fields
	}

	/// Look up a field declaration by name
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Validate raw frontmatter and return only the declared, present fields.
	///
	/// Every problem is reported, declared fields first (in declaration
	/// order), then unknown fields in document order.
	pub fn clean(&self, frontmatter: &Mapping) -> Result<Mapping, Vec<FieldIssue>> {
		let mut cleaned = Mapping::new();
		let mut issues = Vec::new();

		for field in &self.fields {
			match field.clean(frontmatter.get(field.name.as_str())) {
				Ok(Some(value)) => {
					cleaned.insert(Value::String(field.name.clone()), Value::String(value));
				}
				Ok(None) => {}
				Err(kind) => issues.push(FieldIssue::new(field.name.clone(), kind)),
			}
		}

		if self.unknown_fields == UnknownFieldPolicy::Reject {
			for key in frontmatter.keys() {
				let declared = key.as_str().is_some_and(|k| self.field(k).is_some());
				if !declared {
					issues.push(FieldIssue::new(key_label(key), IssueKind::Unrecognized));
				}
			}
		}

		if issues.is_empty() {
			Ok(cleaned)
		} else {
			Err(issues)
		}
	}
}

impl Default for ContentSchema {
	fn default() -> Self {
		Self::page()
	}
}

fn key_label(key: &Value) -> String {
	match key {
		Value::String(s) => s.clone(),
		other => serde_yaml::to_string(other)
			.map(|s| s.trim_end().to_string())
			.unwrap_or_else(|_| yaml_type_name(other).to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn mapping(source: &str) -> Mapping {
		serde_yaml::from_str(source).unwrap()
	}

	#[rstest]
	fn test_title_only_is_valid() {
		// Arrange
		let schema = ContentSchema::page();

		// Act
		let cleaned = schema.clean(&mapping("title: Hello")).unwrap();

		// Assert
		assert_eq!(cleaned.get("title"), Some(&Value::String("Hello".into())));
		assert_eq!(cleaned.len(), 1);
	}

	#[rstest]
	fn test_all_fields() {
		let source = r#"
title: Handmade jewelry
subtitle: One piece at a time
description: Rings and necklaces
primaryButton: Shop
primaryButtonLink: /en/products
secondaryButton: Contact
secondaryButtonLink: /en/contact
"#;
		let cleaned = ContentSchema::page().clean(&mapping(source)).unwrap();
		assert_eq!(cleaned.len(), 7);
	}

	#[rstest]
	fn test_missing_title() {
		let issues = ContentSchema::page()
			.clean(&mapping("subtitle: Hi"))
			.unwrap_err();
		assert_eq!(issues, vec![FieldIssue::new("title", IssueKind::Required)]);
	}

	#[rstest]
	#[case("title: 123", "number")]
	#[case("title: ~", "null")]
	#[case("title: true", "boolean")]
	#[case("title: [a, b]", "array")]
	#[case("title: {en: Hello}", "object")]
	fn test_title_must_be_string(#[case] source: &str, #[case] found: &'static str) {
		let issues = ContentSchema::page().clean(&mapping(source)).unwrap_err();
		assert_eq!(
			issues,
			vec![FieldIssue::new("title", IssueKind::ExpectedString { found })]
		);
	}

	#[rstest]
	fn test_optional_field_null_is_rejected() {
		let issues = ContentSchema::page()
			.clean(&mapping("title: Hi\nsubtitle: null"))
			.unwrap_err();
		assert_eq!(issues[0].field, "subtitle");
	}

	#[rstest]
	fn test_unknown_field_rejected_by_default() {
		// Arrange
		let schema = ContentSchema::page();

		// Act
		let issues = schema
			.clean(&mapping("title: Hi\nheroImage: /a.png\n42: x"))
			.unwrap_err();

		// Assert
		assert_eq!(
			issues,
			vec![
				FieldIssue::new("heroImage", IssueKind::Unrecognized),
				FieldIssue::new("42", IssueKind::Unrecognized),
			]
		);
	}

	#[rstest]
	fn test_unknown_field_ignored_when_configured() {
		// Arrange
		let schema = ContentSchema::page().with_unknown_fields(UnknownFieldPolicy::Ignore);

		// Act
		let cleaned = schema
			.clean(&mapping("title: Hi\nheroImage: /a.png"))
			.unwrap();

		// Assert
		assert_eq!(cleaned.len(), 1);
		assert!(cleaned.get("heroImage").is_none());
	}

	#[rstest]
	fn test_all_issues_reported_together() {
		let issues = ContentSchema::page()
			.clean(&mapping("subtitle: 1\ndraft: true"))
			.unwrap_err();
		let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
		assert_eq!(fields, vec!["title", "subtitle", "draft"]);
	}

	#[rstest]
	fn test_page_declares_only_title_as_required() {
		let schema = ContentSchema::page();

		let declared: Vec<(&str, bool)> = schema
			.fields()
			.iter()
			.map(|f| (f.name.as_str(), f.required))
			.collect();

		assert_eq!(
			declared,
			vec![
				("title", true),
				("subtitle", false),
				("description", false),
				("primaryButton", false),
				("primaryButtonLink", false),
				("secondaryButton", false),
				("secondaryButtonLink", false),
			]
		);
		assert_eq!(schema.field("description"), Some(&FieldSpec::new("description")));
	}
}
