//! Bulk action execution

use crate::site::AdminSite;
use crate::store::AdminStore;
use crate::types::{ActionRequest, ActionResponse};
use crate::{AdminError, AdminResult};

/// Execute one of the model's declared bulk actions on selected records
#[tracing::instrument(skip_all, fields(model = model_name, action = %request.action))]
pub async fn perform_action(
	site: &AdminSite,
	store: &dyn AdminStore,
	model_name: &str,
	request: &ActionRequest,
) -> AdminResult<ActionResponse> {
	let admin = site.get_model_admin(model_name)?;
	let action = admin
		.actions()
		.into_iter()
		.find(|action| action.name() == request.action)
		.ok_or_else(|| AdminError::InvalidAction(format!("Action '{}' not found", request.action)))?;

	let result = action
		.execute(admin.table_name(), admin.pk_field(), &request.ids, store)
		.await;

	Ok(ActionResponse {
		action: request.action.clone(),
		result,
	})
}
