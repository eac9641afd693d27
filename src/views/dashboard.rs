//! Dashboard view

use crate::site::AdminSite;
use crate::store::AdminStore;
use crate::types::{DashboardResponse, ModelInfo};
use crate::AdminResult;

/// List registered models with their changelist URLs and record counts
#[tracing::instrument(skip_all)]
pub async fn dashboard(site: &AdminSite, store: &dyn AdminStore) -> AdminResult<DashboardResponse> {
	let mut models = Vec::new();
	for name in site.model_names() {
		let admin = site.get_model_admin(&name)?;
		let count = store.count(admin.table_name(), None, &[]).await?;
		models.push(ModelInfo {
			name,
			url: site.changelist_url(admin.table_name()),
			count,
		});
	}

	Ok(DashboardResponse {
		site_name: site.site_name().to_string(),
		url_prefix: site.url_prefix().to_string(),
		models,
	})
}
