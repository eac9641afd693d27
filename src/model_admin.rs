//! Model admin configuration trait
//!
//! This module defines how models are displayed and managed in the admin
//! interface. Implementations are declarative: field lists plus the handful
//! of behaviors (computed columns, actions, inlines) the changelist and
//! detail views consume.

use crate::actions::AdminAction;
use crate::columns::DisplayColumn;
use crate::inline::InlineModelAdmin;
use std::sync::Arc;

/// A named group of fields on the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fieldset {
	title: String,
	fields: Vec<String>,
}

impl Fieldset {
	/// Create a fieldset from a title and field names
	///
	/// # Examples
	///
	/// ```
	/// use admission_admin::model_admin::Fieldset;
	///
	/// let fs = Fieldset::new("Personal Information", ["full_name", "email"]);
	/// assert_eq!(fs.title(), "Personal Information");
	/// assert_eq!(fs.fields(), ["full_name", "email"]);
	/// ```
	pub fn new<I, S>(title: impl Into<String>, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			title: title.into(),
			fields: fields.into_iter().map(Into::into).collect(),
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn fields(&self) -> &[String] {
		&self.fields
	}
}

/// Trait for configuring model administration
///
/// Implement this trait to declare how a model is listed, searched,
/// filtered, and edited in the admin. Every method except `model_name` and
/// `table_name` has a default, so a minimal admin is a few lines.
pub trait ModelAdmin: Send + Sync {
	/// Model name used for registration and URL reversing
	fn model_name(&self) -> &str;

	/// Backing table name in the record store
	fn table_name(&self) -> &str;

	/// Primary key field name
	fn pk_field(&self) -> &str {
		"id"
	}

	/// Columns on the list view, in display order
	///
	/// Entries name either record fields or computed columns declared in
	/// [`display_columns`](Self::display_columns).
	fn list_display(&self) -> Vec<&str> {
		vec!["id"]
	}

	/// Fields accepted as list filters
	fn list_filter(&self) -> Vec<&str> {
		vec![]
	}

	/// Fields searched by the changelist search box
	fn search_fields(&self) -> Vec<&str> {
		vec![]
	}

	/// Fields editable in place from the list view
	fn list_editable(&self) -> Vec<&str> {
		vec![]
	}

	/// Read-only fields on the detail view
	fn readonly_fields(&self) -> Vec<&str> {
		vec![]
	}

	/// Default ordering (prefix with `-` for descending)
	fn ordering(&self) -> Vec<&str> {
		vec!["-id"]
	}

	/// Items per page (None = site default)
	fn list_per_page(&self) -> Option<u64> {
		None
	}

	/// Date field for drill-down navigation on the list view
	fn date_hierarchy(&self) -> Option<&str> {
		None
	}

	/// Field groupings for the detail view
	///
	/// Empty means a single unnamed group with every record field.
	fn fieldsets(&self) -> Vec<Fieldset> {
		vec![]
	}

	/// Computed columns referenced from [`list_display`](Self::list_display)
	fn display_columns(&self) -> Vec<Arc<dyn DisplayColumn>> {
		vec![]
	}

	/// Inline child editors shown on the detail view
	fn inlines(&self) -> Vec<InlineModelAdmin> {
		vec![]
	}

	/// Bulk actions offered on the list view
	fn actions(&self) -> Vec<Arc<dyn AdminAction>> {
		vec![]
	}
}

impl std::fmt::Debug for dyn ModelAdmin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ModelAdmin")
			.field("model_name", &self.model_name())
			.field("table_name", &self.table_name())
			.finish()
	}
}
