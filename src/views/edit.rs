//! In-place editing from the list view

use crate::site::AdminSite;
use crate::store::AdminStore;
use crate::types::MutationResponse;
use crate::{AdminError, AdminResult};
use serde_json::Value;

/// Set one field on one record directly from the list view
///
/// Only fields the admin declares in `list_editable` are accepted;
/// read-only fields are rejected even if declared. The new value is written
/// as-is, with no transition validation.
#[tracing::instrument(skip_all, fields(model = model_name, id, field))]
pub async fn update_list_field(
	site: &AdminSite,
	store: &dyn AdminStore,
	model_name: &str,
	id: i64,
	field: &str,
	value: Value,
) -> AdminResult<MutationResponse> {
	let admin = site.get_model_admin(model_name)?;
	if !admin.list_editable().contains(&field) || admin.readonly_fields().contains(&field) {
		return Err(AdminError::FieldNotEditable(field.to_string()));
	}

	store
		.update_field(admin.table_name(), admin.pk_field(), id, field, value)
		.await?;

	Ok(MutationResponse {
		success: true,
		message: format!("Updated '{}' on {} {}", field, model_name, id),
	})
}
