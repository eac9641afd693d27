//! Detail view
//!
//! Groups a record's fields by the admin's fieldsets and assembles the
//! declared inline editors with one row per child record.

use crate::columns::AdminContext;
use crate::query::{Filter, FilterValue};
use crate::site::AdminSite;
use crate::store::{AdminStore, Record, record_pk};
use crate::text::humanize_field_name;
use crate::types::{DetailResponse, FieldData, FieldsetData, InlineData, InlineRow};
use crate::AdminResult;
use serde_json::Value;
use std::collections::HashMap;

fn field_data(record: &Record, name: &str, readonly_fields: &[&str]) -> FieldData {
	FieldData {
		name: name.to_string(),
		label: humanize_field_name(name),
		value: record.get(name).cloned().unwrap_or(Value::Null),
		readonly: readonly_fields.contains(&name),
	}
}

/// Get detail view data for one record
#[tracing::instrument(skip_all, fields(model = model_name, id))]
pub async fn get_detail(
	site: &AdminSite,
	store: &dyn AdminStore,
	model_name: &str,
	id: i64,
) -> AdminResult<DetailResponse> {
	let admin = site.get_model_admin(model_name)?;
	let record = store.get(admin.table_name(), admin.pk_field(), id).await?;
	let readonly_fields = admin.readonly_fields();

	let fieldsets = admin.fieldsets();
	let groups = if fieldsets.is_empty() {
		// No declared grouping: one unnamed group with every field.
		let mut names: Vec<&String> = record.keys().collect();
		names.sort();
		vec![FieldsetData {
			title: None,
			fields: names
				.into_iter()
				.map(|name| field_data(&record, name, &readonly_fields))
				.collect(),
		}]
	} else {
		fieldsets
			.iter()
			.map(|fs| FieldsetData {
				title: Some(fs.title().to_string()),
				fields: fs
					.fields()
					.iter()
					.map(|name| field_data(&record, name, &readonly_fields))
					.collect(),
			})
			.collect()
	};

	let ctx = AdminContext::new(site, store);
	let mut inlines = Vec::new();
	for inline in admin.inlines() {
		let children = store
			.list(
				inline.table_name(),
				None,
				&[Filter::eq(inline.fk_field(), FilterValue::Integer(id))],
				Some("id"),
				0,
				u64::MAX,
			)
			.await?;

		let mut rows = Vec::with_capacity(children.len());
		for child in &children {
			let mut cells: HashMap<String, Value> = HashMap::new();
			for field in inline.fields() {
				cells.insert(
					field.clone(),
					child.get(field).cloned().unwrap_or(Value::Null),
				);
			}
			for column in inline.display_columns() {
				let rendered = column.render(child, &ctx).await?;
				cells.insert(column.name().to_string(), rendered.into());
			}
			rows.push(InlineRow {
				id: record_pk(child, "id")?,
				cells,
			});
		}

		inlines.push(InlineData {
			model_name: inline.model_name().to_string(),
			fk_field: inline.fk_field().to_string(),
			inline_type: inline.inline_type(),
			fields: inline.fields().to_vec(),
			readonly_fields: inline.readonly_fields().to_vec(),
			extra: inline.extra(),
			rows,
		});
	}

	Ok(DetailResponse {
		model_name: model_name.to_string(),
		object_id: id,
		groups,
		inlines,
	})
}
