//! List view
//!
//! Builds the changelist: search across the declared search fields,
//! declared filters only, ordering with the admin's default as fallback,
//! pagination, and one rendered cell per `list_display` entry.

use super::MAX_PAGE_SIZE;
use crate::columns::AdminContext;
use crate::query::{Filter, FilterCondition, FilterOperator, FilterValue};
use crate::site::AdminSite;
use crate::store::AdminStore;
use crate::text::humanize_field_name;
use crate::types::{ColumnInfo, FilterInfo, ListQueryParams, ListResponse};
use crate::{AdminError, AdminResult};
use serde_json::Value;
use std::collections::HashMap;

/// Get list view data with search, filters, sorting, and pagination
///
/// Search matches any of the admin's `search_fields` as a substring (OR).
/// Filter parameters are accepted only for fields declared in
/// `list_filter`; anything else is rejected rather than silently ignored.
#[tracing::instrument(skip_all, fields(model = model_name))]
pub async fn get_list(
	site: &AdminSite,
	store: &dyn AdminStore,
	model_name: &str,
	params: &ListQueryParams,
) -> AdminResult<ListResponse> {
	let admin = site.get_model_admin(model_name)?;

	// Search condition (OR across search fields)
	let mut condition: Option<FilterCondition> = None;
	if let Some(search) = params.search.as_ref() {
		let search_fields = admin.search_fields();
		if !search_fields.is_empty() && !search.is_empty() {
			let search_filters: Vec<FilterCondition> = search_fields
				.iter()
				.map(|field| {
					FilterCondition::Single(Filter::new(
						field.to_string(),
						FilterOperator::Contains,
						FilterValue::String(search.clone()),
					))
				})
				.collect();
			condition = Some(FilterCondition::Or(search_filters));
		}
	}

	// Additional filters (AND logic), declared fields only
	let allowed_filter_fields = admin.list_filter();
	let mut filters = Vec::new();
	for (field, value) in params.filters.iter() {
		if !allowed_filter_fields.contains(&field.as_str()) {
			return Err(AdminError::UnknownField(field.clone()));
		}
		filters.push(Filter::eq(
			field.clone(),
			FilterValue::String(value.clone()),
		));
	}

	// Sort field: explicit request, else the admin's default ordering
	let ordering = admin.ordering();
	let sort_by = params
		.sort_by
		.as_deref()
		.or_else(|| ordering.first().copied());

	// Pagination with upper bound enforcement
	let page = params.page.unwrap_or(1).max(1);
	let page_size = params
		.page_size
		.unwrap_or_else(|| {
			admin
				.list_per_page()
				.unwrap_or_else(|| site.default_list_per_page())
		})
		.clamp(1, MAX_PAGE_SIZE);
	let offset = (page - 1) * page_size;

	let records = store
		.list(
			admin.table_name(),
			condition.as_ref(),
			&filters,
			sort_by,
			offset,
			page_size,
		)
		.await?;
	let count = store
		.count(admin.table_name(), condition.as_ref(), &filters)
		.await?;
	let total_pages = if count > 0 { count.div_ceil(page_size) } else { 1 };

	// Assemble rows: raw fields plus rendered computed cells
	let ctx = AdminContext::new(site, store);
	let display_columns = admin.display_columns();
	let mut results = Vec::with_capacity(records.len());
	for record in &records {
		let mut cells: HashMap<String, Value> = HashMap::new();
		for name in admin.list_display() {
			match display_columns.iter().find(|c| c.name() == name) {
				Some(column) => {
					let rendered = column.render(record, &ctx).await?;
					cells.insert(name.to_string(), rendered.into());
				}
				None => {
					cells.insert(
						name.to_string(),
						record.get(name).cloned().unwrap_or(Value::Null),
					);
				}
			}
		}
		results.push(cells);
	}

	let columns = admin
		.list_display()
		.iter()
		.map(|name| match display_columns.iter().find(|c| c.name() == *name) {
			Some(column) => ColumnInfo {
				field: name.to_string(),
				label: column.short_description().to_string(),
				sortable: false,
			},
			None => ColumnInfo {
				field: name.to_string(),
				label: humanize_field_name(name),
				sortable: true,
			},
		})
		.collect();

	let available_filters = allowed_filter_fields
		.iter()
		.map(|field| FilterInfo {
			field: field.to_string(),
			title: humanize_field_name(field),
		})
		.collect();

	Ok(ListResponse {
		model_name: model_name.to_string(),
		count,
		page,
		page_size,
		total_pages,
		results,
		available_filters: Some(available_filters),
		columns: Some(columns),
		date_hierarchy: admin.date_hierarchy().map(str::to_string),
	})
}
