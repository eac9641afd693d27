//! Response types for the admin views

use crate::actions::ActionResult;
use crate::inline::InlineType;
use crate::types::models::{ColumnInfo, FilterInfo, ModelInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use serde_json::Value;

/// Response for the dashboard view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
	/// Site name
	pub site_name: String,
	/// URL prefix
	pub url_prefix: String,
	/// Registered models in registration order
	pub models: Vec<ModelInfo>,
}

/// Response for the list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
	/// Model name
	pub model_name: String,
	/// Total count of matching items
	pub count: u64,
	/// Current page
	pub page: u64,
	/// Items per page
	pub page_size: u64,
	/// Total pages
	pub total_pages: u64,
	/// Rows on this page: raw field values plus rendered computed cells
	pub results: Vec<HashMap<String, Value>>,
	/// Available filters metadata
	#[serde(skip_serializing_if = "Option::is_none")]
	pub available_filters: Option<Vec<FilterInfo>>,
	/// Column definitions for list display
	#[serde(skip_serializing_if = "Option::is_none")]
	pub columns: Option<Vec<ColumnInfo>>,
	/// Date field for drill-down navigation, when the admin declares one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub date_hierarchy: Option<String>,
}

/// One field on the detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldData {
	/// Field name
	pub name: String,
	/// Display label
	pub label: String,
	/// Current value
	pub value: Value,
	/// Whether the field is read-only
	pub readonly: bool,
}

/// A rendered fieldset group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsetData {
	/// Group title (None for the implicit default group)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Fields in declaration order
	pub fields: Vec<FieldData>,
}

/// One child row inside an inline editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineRow {
	/// Child record id
	pub id: i64,
	/// Declared fields plus rendered computed cells, keyed by name
	pub cells: HashMap<String, Value>,
}

/// An assembled inline editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
	/// Child model name
	pub model_name: String,
	/// Foreign-key field pointing at the parent
	pub fk_field: String,
	/// Editor layout
	pub inline_type: InlineType,
	/// Declared fields per row, in display order
	pub fields: Vec<String>,
	/// Read-only fields
	pub readonly_fields: Vec<String>,
	/// Blank forms offered by the editor
	pub extra: u64,
	/// One row per existing child record
	pub rows: Vec<InlineRow>,
}

/// Response for the detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
	/// Model name
	pub model_name: String,
	/// Record id
	pub object_id: i64,
	/// Fieldset groups
	pub groups: Vec<FieldsetData>,
	/// Inline editors
	pub inlines: Vec<InlineData>,
}

/// Response for single-record mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
	/// Success status
	pub success: bool,
	/// Message
	pub message: String,
}

/// Response for a bulk action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
	/// Executed action name
	pub action: String,
	/// Outcome
	pub result: ActionResult,
}
