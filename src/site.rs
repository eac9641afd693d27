//! Admin site registry and URL reversing

use crate::model_admin::ModelAdmin;
use crate::{AdminError, AdminResult};
use dashmap::DashMap;
use parking_lot::Mutex;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::sync::Arc;

/// Registry of model admins plus site-level configuration
///
/// # Examples
///
/// ```
/// use admission_admin::site::AdminSite;
///
/// let site = AdminSite::new("Admission Admin").with_url_prefix("/backoffice");
/// assert_eq!(site.site_name(), "Admission Admin");
/// assert_eq!(site.changelist_url("departments"), "/backoffice/departments/");
/// ```
pub struct AdminSite {
	site_name: String,
	url_prefix: String,
	default_list_per_page: u64,
	models: DashMap<String, Arc<dyn ModelAdmin>>,
	registration_order: Mutex<Vec<String>>,
}

impl AdminSite {
	/// Create a site with the default `/admin` URL prefix
	pub fn new(site_name: impl Into<String>) -> Self {
		Self {
			site_name: site_name.into(),
			url_prefix: "/admin".to_string(),
			default_list_per_page: 25,
			models: DashMap::new(),
			registration_order: Mutex::new(Vec::new()),
		}
	}

	/// Set the URL prefix all reversed URLs start with
	pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.url_prefix = prefix.into();
		self
	}

	/// Set the page size used when a model admin declares none
	pub fn with_default_list_per_page(mut self, per_page: u64) -> Self {
		self.default_list_per_page = per_page;
		self
	}

	pub fn site_name(&self) -> &str {
		&self.site_name
	}

	pub fn url_prefix(&self) -> &str {
		&self.url_prefix
	}

	pub fn default_list_per_page(&self) -> u64 {
		self.default_list_per_page
	}

	/// Register a model admin
	///
	/// Registration order is preserved for the dashboard listing. A second
	/// registration under the same model name is rejected.
	pub fn register(&self, admin: impl ModelAdmin + 'static) -> AdminResult<()> {
		let name = admin.model_name().to_string();
		if self.models.contains_key(&name) {
			return Err(AdminError::ValidationError(format!(
				"Model '{}' is already registered",
				name
			)));
		}
		self.models.insert(name.clone(), Arc::new(admin));
		self.registration_order.lock().push(name);
		Ok(())
	}

	/// Look up a registered model admin by model name
	pub fn get_model_admin(&self, model_name: &str) -> AdminResult<Arc<dyn ModelAdmin>> {
		self.models
			.get(model_name)
			.map(|entry| Arc::clone(entry.value()))
			.ok_or_else(|| AdminError::ModelNotRegistered(model_name.to_string()))
	}

	/// Registered model names in registration order
	pub fn model_names(&self) -> Vec<String> {
		self.registration_order.lock().clone()
	}

	/// URL of a model's list view
	pub fn changelist_url(&self, table: &str) -> String {
		format!("{}/{}/", self.url_prefix, table)
	}

	/// URL of a model's list view pre-filtered on one field
	pub fn filtered_changelist_url(&self, table: &str, field: &str, value: &str) -> String {
		format!(
			"{}?{}={}",
			self.changelist_url(table),
			field,
			utf8_percent_encode(value, NON_ALPHANUMERIC)
		)
	}

	/// URL of a record's detail view
	pub fn change_url(&self, table: &str, id: i64) -> String {
		format!("{}/{}/{}/", self.url_prefix, table, id)
	}
}
