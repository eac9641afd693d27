//! Admin registrations for the admission app
//!
//! One [`ModelAdmin`] per record type, plus the computed columns and bulk
//! status actions the list views use. [`configure_admin`] assembles the
//! site.

use crate::actions::{AdminAction, SetFieldAction};
use crate::admission::models::{
	Application, ApplicationFile, ApplicationStatus, Department, Payment, PaymentStatus, Teacher,
};
use crate::columns::{AdminContext, DisplayColumn};
use crate::html::{Html, colored, format_link};
use crate::inline::{InlineModelAdmin, InlineType};
use crate::model_admin::{Fieldset, ModelAdmin};
use crate::query::{Filter, FilterValue};
use crate::site::AdminSite;
use crate::store::{Record, record_pk};
use crate::{AdminError, AdminResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

/// Build the admin site with every admission model registered
pub fn configure_admin() -> AdminResult<AdminSite> {
	let site = AdminSite::new("Admission Admin");
	site.register(DepartmentAdmin)?;
	site.register(TeacherAdmin)?;
	site.register(ApplicationAdmin)?;
	site.register(PaymentAdmin)?;
	Ok(site)
}

/// Department admin: seat/credit filters plus a linked application count
pub struct DepartmentAdmin;

impl ModelAdmin for DepartmentAdmin {
	fn model_name(&self) -> &str {
		"Department"
	}

	fn table_name(&self) -> &str {
		Department::TABLE
	}

	fn list_display(&self) -> Vec<&str> {
		vec![
			"code",
			"name",
			"seats",
			"total_credits",
			"per_credit_fee",
			"application_count",
		]
	}

	fn list_filter(&self) -> Vec<&str> {
		vec!["seats", "total_credits"]
	}

	fn search_fields(&self) -> Vec<&str> {
		vec!["code", "name"]
	}

	fn ordering(&self) -> Vec<&str> {
		vec!["code"]
	}

	fn display_columns(&self) -> Vec<Arc<dyn DisplayColumn>> {
		vec![Arc::new(ApplicationCountColumn)]
	}
}

/// Counts a department's applications, linked to the pre-filtered changelist
struct ApplicationCountColumn;

#[async_trait]
impl DisplayColumn for ApplicationCountColumn {
	fn name(&self) -> &str {
		"application_count"
	}

	fn short_description(&self) -> &str {
		"Applications"
	}

	async fn render(&self, record: &Record, ctx: &AdminContext<'_>) -> AdminResult<Html> {
		let id = record_pk(record, "id")?;
		let count = ctx
			.store
			.count(
				Application::TABLE,
				None,
				&[Filter::eq("department_id", FilterValue::Integer(id))],
			)
			.await?;
		let url =
			ctx.site
				.filtered_changelist_url(Application::TABLE, "department_id", &id.to_string());
		Ok(format_link(&url, &count.to_string()))
	}
}

/// Teacher admin with the active flag editable in place
pub struct TeacherAdmin;

impl ModelAdmin for TeacherAdmin {
	fn model_name(&self) -> &str {
		"Teacher"
	}

	fn table_name(&self) -> &str {
		Teacher::TABLE
	}

	fn list_display(&self) -> Vec<&str> {
		vec![
			"name",
			"department_id",
			"position",
			"email",
			"phone",
			"is_active",
		]
	}

	fn list_filter(&self) -> Vec<&str> {
		vec!["department_id", "position", "is_active"]
	}

	fn search_fields(&self) -> Vec<&str> {
		vec!["name", "email"]
	}

	fn list_editable(&self) -> Vec<&str> {
		vec!["is_active"]
	}

	fn ordering(&self) -> Vec<&str> {
		vec!["department_id", "name"]
	}
}

/// Application admin: payment/file columns, file inline, bulk status actions
pub struct ApplicationAdmin;

impl ModelAdmin for ApplicationAdmin {
	fn model_name(&self) -> &str {
		"Application"
	}

	fn table_name(&self) -> &str {
		Application::TABLE
	}

	fn list_display(&self) -> Vec<&str> {
		vec![
			"id",
			"full_name",
			"department_id",
			"program",
			"status",
			"applied_at",
			"has_payment",
			"file_count",
		]
	}

	fn list_filter(&self) -> Vec<&str> {
		vec!["department_id", "program", "status"]
	}

	fn search_fields(&self) -> Vec<&str> {
		vec!["full_name", "email", "phone"]
	}

	fn list_editable(&self) -> Vec<&str> {
		vec!["status"]
	}

	fn readonly_fields(&self) -> Vec<&str> {
		vec!["applied_at", "updated_at"]
	}

	fn date_hierarchy(&self) -> Option<&str> {
		Some("applied_at")
	}

	fn fieldsets(&self) -> Vec<Fieldset> {
		vec![
			Fieldset::new(
				"Personal Information",
				["full_name", "email", "phone", "address"],
			),
			Fieldset::new(
				"Academic Information",
				["department_id", "program", "previous_education", "cgpa"],
			),
			Fieldset::new(
				"Application Status",
				["status", "applied_at", "updated_at", "notes"],
			),
		]
	}

	fn display_columns(&self) -> Vec<Arc<dyn DisplayColumn>> {
		vec![Arc::new(HasPaymentColumn), Arc::new(FileCountColumn)]
	}

	fn inlines(&self) -> Vec<InlineModelAdmin> {
		vec![
			InlineModelAdmin::new(
				"ApplicationFile",
				ApplicationFile::TABLE,
				"application_id",
			)
			.with_type(InlineType::Tabular)
			.with_fields(["file", "uploaded_at"])
			.with_readonly_fields(["uploaded_at"])
			.with_extra(0)
			.with_display_column(Arc::new(FilePreviewColumn)),
		]
	}

	fn actions(&self) -> Vec<Arc<dyn AdminAction>> {
		[
			(ApplicationStatus::Pending, "Pending"),
			(ApplicationStatus::UnderReview, "Under Review"),
			(ApplicationStatus::Approved, "Approved"),
			(ApplicationStatus::Rejected, "Rejected"),
		]
		.into_iter()
		.map(|(status, label)| {
			Arc::new(SetFieldAction::new(
				format!("mark_as_{}", status.as_str()),
				format!("Mark selected applications as {}", label),
				"status",
				json!(status.as_str()),
			)) as Arc<dyn AdminAction>
		})
		.collect()
	}
}

/// Completed-payment indicator with the summed amount
struct HasPaymentColumn;

#[async_trait]
impl DisplayColumn for HasPaymentColumn {
	fn name(&self) -> &str {
		"has_payment"
	}

	fn short_description(&self) -> &str {
		"Payment"
	}

	async fn render(&self, record: &Record, ctx: &AdminContext<'_>) -> AdminResult<Html> {
		let id = record_pk(record, "id")?;
		let completed = [
			Filter::eq("application_id", FilterValue::Integer(id)),
			Filter::eq(
				"status",
				FilterValue::String(PaymentStatus::Completed.as_str().to_string()),
			),
		];
		let count = ctx.store.count(Payment::TABLE, None, &completed).await?;
		if count == 0 {
			return Ok(colored("red", "✗"));
		}
		let total = ctx
			.store
			.sum_where(Payment::TABLE, "amount", &completed)
			.await?;
		Ok(colored("green", &format!("✓ (${})", total.normalize())))
	}
}

/// Number of files uploaded with the application
struct FileCountColumn;

#[async_trait]
impl DisplayColumn for FileCountColumn {
	fn name(&self) -> &str {
		"file_count"
	}

	fn short_description(&self) -> &str {
		"Files"
	}

	async fn render(&self, record: &Record, ctx: &AdminContext<'_>) -> AdminResult<Html> {
		let id = record_pk(record, "id")?;
		let count = ctx
			.store
			.count(
				ApplicationFile::TABLE,
				None,
				&[Filter::eq("application_id", FilterValue::Integer(id))],
			)
			.await?;
		Ok(Html::text(count.to_string()))
	}
}

/// Link to the stored file, or a dash for empty upload slots
struct FilePreviewColumn;

#[async_trait]
impl DisplayColumn for FilePreviewColumn {
	fn name(&self) -> &str {
		"file_preview"
	}

	fn short_description(&self) -> &str {
		"Preview"
	}

	async fn render(&self, record: &Record, _ctx: &AdminContext<'_>) -> AdminResult<Html> {
		match record.get("file") {
			Some(Value::String(path)) if !path.is_empty() => Ok(format_link(path, "View File")),
			_ => Ok(Html::text("-")),
		}
	}
}

/// Payment admin with a link back to the owning application
pub struct PaymentAdmin;

impl ModelAdmin for PaymentAdmin {
	fn model_name(&self) -> &str {
		"Payment"
	}

	fn table_name(&self) -> &str {
		Payment::TABLE
	}

	fn list_display(&self) -> Vec<&str> {
		vec![
			"id",
			"application_link",
			"amount",
			"status",
			"payment_method",
			"paid_at",
			"transaction_id",
		]
	}

	fn list_filter(&self) -> Vec<&str> {
		vec!["status", "payment_method"]
	}

	fn search_fields(&self) -> Vec<&str> {
		vec!["transaction_id"]
	}

	fn list_editable(&self) -> Vec<&str> {
		vec!["status"]
	}

	fn readonly_fields(&self) -> Vec<&str> {
		vec!["paid_at", "created_at"]
	}

	fn date_hierarchy(&self) -> Option<&str> {
		Some("paid_at")
	}

	fn fieldsets(&self) -> Vec<Fieldset> {
		vec![
			Fieldset::new(
				"Payment Information",
				[
					"application_id",
					"amount",
					"currency",
					"status",
					"payment_method",
					"transaction_id",
				],
			),
			Fieldset::new("Timestamps", ["paid_at", "created_at"]),
		]
	}

	fn display_columns(&self) -> Vec<Arc<dyn DisplayColumn>> {
		vec![Arc::new(ApplicationLinkColumn)]
	}
}

/// Link to the owning application, labeled with the applicant's full name
struct ApplicationLinkColumn;

#[async_trait]
impl DisplayColumn for ApplicationLinkColumn {
	fn name(&self) -> &str {
		"application_link"
	}

	fn short_description(&self) -> &str {
		"Application"
	}

	async fn render(&self, record: &Record, ctx: &AdminContext<'_>) -> AdminResult<Html> {
		let application_id = record
			.get("application_id")
			.and_then(Value::as_i64)
			.ok_or_else(|| AdminError::UnknownField("application_id".to_string()))?;
		let application = ctx.store.get(Application::TABLE, "id", application_id).await?;
		let label = application
			.get("full_name")
			.and_then(Value::as_str)
			.unwrap_or_default();
		let url = ctx.site.change_url(Application::TABLE, application_id);
		Ok(format_link(&url, label))
	}
}
