//! Metadata describing registered models and their list surfaces

use serde::{Deserialize, Serialize};

/// Column metadata for the list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
	/// Field or computed column name
	pub field: String,
	/// Header label
	pub label: String,
	/// Whether the list can be sorted by this column
	pub sortable: bool,
}

/// Filter metadata for the list view sidebar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterInfo {
	/// Field name accepted as a query parameter
	pub field: String,
	/// Display title
	pub title: String,
}

/// A registered model on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
	/// Model name
	pub name: String,
	/// Changelist URL
	pub url: String,
	/// Current record count
	pub count: u64,
}
