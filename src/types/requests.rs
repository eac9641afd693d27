//! Request types for the admin views

use serde::Deserialize;
use std::collections::HashMap;

/// Query parameters for the list view
#[derive(Debug, Deserialize, Default)]
pub struct ListQueryParams {
	/// Page number (1-indexed)
	pub page: Option<u64>,
	/// Items per page
	pub page_size: Option<u64>,
	/// Search query
	pub search: Option<String>,
	/// Sort field (prefix with "-" for descending)
	pub sort_by: Option<String>,
	/// Filter field=value pairs
	#[serde(flatten)]
	pub filters: HashMap<String, String>,
}

impl ListQueryParams {
	/// Params with a single filter set, the shape filtered cross-links produce
	pub fn filtered(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			filters: HashMap::from([(field.into(), value.into())]),
			..Self::default()
		}
	}
}

/// Request body for a bulk action
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
	/// Action identifier from the model's action list
	pub action: String,
	/// Selected record ids
	pub ids: Vec<i64>,
}
