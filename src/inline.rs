//! Inline child editors
//!
//! An inline declares a child model edited within its parent's detail view.
//! The detail view uses the declaration to assemble one row per child
//! record; the editing lifecycle itself belongs to the hosting UI.

use crate::columns::DisplayColumn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Layout of an inline editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineType {
	/// Each child rendered as a stacked block
	Stacked,
	/// Children rendered as table rows
	Tabular,
}

/// Configuration for an inline child editor
///
/// # Examples
///
/// ```
/// use admission_admin::inline::{InlineModelAdmin, InlineType};
///
/// let inline = InlineModelAdmin::new("ApplicationFile", "application_files", "application_id")
/// 	.with_type(InlineType::Tabular)
/// 	.with_fields(["file", "uploaded_at"])
/// 	.with_readonly_fields(["uploaded_at"])
/// 	.with_extra(0);
///
/// assert_eq!(inline.model_name(), "ApplicationFile");
/// assert_eq!(inline.fk_field(), "application_id");
/// ```
#[derive(Clone)]
pub struct InlineModelAdmin {
	model_name: String,
	table_name: String,
	fk_field: String,
	inline_type: InlineType,
	fields: Vec<String>,
	readonly_fields: Vec<String>,
	extra: u64,
	display_columns: Vec<Arc<dyn DisplayColumn>>,
}

impl InlineModelAdmin {
	/// Create an inline for a child model keyed by a foreign-key field
	pub fn new(
		model_name: impl Into<String>,
		table_name: impl Into<String>,
		fk_field: impl Into<String>,
	) -> Self {
		Self {
			model_name: model_name.into(),
			table_name: table_name.into(),
			fk_field: fk_field.into(),
			inline_type: InlineType::Stacked,
			fields: Vec::new(),
			readonly_fields: Vec::new(),
			extra: 3,
			display_columns: Vec::new(),
		}
	}

	pub fn model_name(&self) -> &str {
		&self.model_name
	}

	pub fn table_name(&self) -> &str {
		&self.table_name
	}

	pub fn fk_field(&self) -> &str {
		&self.fk_field
	}

	pub fn with_type(mut self, inline_type: InlineType) -> Self {
		self.inline_type = inline_type;
		self
	}

	pub fn inline_type(&self) -> InlineType {
		self.inline_type
	}

	/// Set the fields shown per child row, in display order
	pub fn with_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fields = fields.into_iter().map(Into::into).collect();
		self
	}

	pub fn fields(&self) -> &[String] {
		&self.fields
	}

	pub fn with_readonly_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.readonly_fields = fields.into_iter().map(Into::into).collect();
		self
	}

	pub fn readonly_fields(&self) -> &[String] {
		&self.readonly_fields
	}

	/// Set the number of blank child forms offered by the editor
	pub fn with_extra(mut self, extra: u64) -> Self {
		self.extra = extra;
		self
	}

	pub fn extra(&self) -> u64 {
		self.extra
	}

	/// Add a computed column rendered per child row
	pub fn with_display_column(mut self, column: Arc<dyn DisplayColumn>) -> Self {
		self.display_columns.push(column);
		self
	}

	pub fn display_columns(&self) -> &[Arc<dyn DisplayColumn>] {
		&self.display_columns
	}
}
