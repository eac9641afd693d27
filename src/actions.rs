//! Bulk actions for the list view
//!
//! Actions run against a user-selected set of rows. The admission admins
//! only need one shape, [`SetFieldAction`], which overwrites a single field
//! with a fixed value on every selected record.

use crate::store::AdminStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of executing an admin action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionResult {
	/// Action completed for all selected items
	Success {
		message: String,
		affected_count: u64,
	},
	/// Action completed with warnings
	Warning {
		message: String,
		affected_count: u64,
		warnings: Vec<String>,
	},
	/// Action failed
	Error { message: String, errors: Vec<String> },
}

impl ActionResult {
	pub fn is_success(&self) -> bool {
		matches!(
			self,
			ActionResult::Success { .. } | ActionResult::Warning { .. }
		)
	}

	pub fn affected_count(&self) -> u64 {
		match self {
			ActionResult::Success { affected_count, .. } => *affected_count,
			ActionResult::Warning { affected_count, .. } => *affected_count,
			ActionResult::Error { .. } => 0,
		}
	}

	pub fn message(&self) -> &str {
		match self {
			ActionResult::Success { message, .. } => message,
			ActionResult::Warning { message, .. } => message,
			ActionResult::Error { message, .. } => message,
		}
	}
}

/// Trait for bulk admin actions
#[async_trait]
pub trait AdminAction: Send + Sync {
	/// Action identifier, used in action requests
	fn name(&self) -> &str;

	/// Menu label shown to the operator
	fn short_description(&self) -> &str;

	/// Execute the action on the selected records
	async fn execute(
		&self,
		table: &str,
		pk_field: &str,
		ids: &[i64],
		store: &dyn AdminStore,
	) -> ActionResult;
}

/// Bulk action that overwrites one field with one fixed value
///
/// There is no validation of prior state: every selected record gets the
/// target value, whatever it held before.
///
/// # Examples
///
/// ```
/// use admission_admin::actions::{AdminAction, SetFieldAction};
/// use serde_json::json;
///
/// let action = SetFieldAction::new(
/// 	"mark_as_approved",
/// 	"Mark selected applications as Approved",
/// 	"status",
/// 	json!("approved"),
/// );
/// assert_eq!(action.name(), "mark_as_approved");
/// ```
pub struct SetFieldAction {
	name: String,
	short_description: String,
	field: String,
	value: Value,
}

impl SetFieldAction {
	pub fn new(
		name: impl Into<String>,
		short_description: impl Into<String>,
		field: impl Into<String>,
		value: Value,
	) -> Self {
		Self {
			name: name.into(),
			short_description: short_description.into(),
			field: field.into(),
			value,
		}
	}
}

#[async_trait]
impl AdminAction for SetFieldAction {
	fn name(&self) -> &str {
		&self.name
	}

	fn short_description(&self) -> &str {
		&self.short_description
	}

	async fn execute(
		&self,
		table: &str,
		pk_field: &str,
		ids: &[i64],
		store: &dyn AdminStore,
	) -> ActionResult {
		if ids.is_empty() {
			return ActionResult::Warning {
				message: "No items selected".to_string(),
				affected_count: 0,
				warnings: vec!["Select at least one item".to_string()],
			};
		}

		match store
			.bulk_update(table, pk_field, ids, &self.field, self.value.clone())
			.await
		{
			Ok(affected) => {
				tracing::info!(table, action = %self.name, affected, "bulk action applied");
				ActionResult::Success {
					message: format!("Updated {} item(s)", affected),
					affected_count: affected,
				}
			}
			Err(e) => ActionResult::Error {
				message: format!("Failed to update items: {}", e),
				errors: vec![e.to_string()],
			},
		}
	}
}
