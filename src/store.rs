//! Record store seam for admin operations
//!
//! The admin engine operates on dynamic records (JSON objects), not
//! statically-typed models. [`AdminStore`] is the seam the hosting
//! application implements against its storage engine; [`MemoryStore`] is the
//! in-process implementation used by this crate.

use crate::query::{Filter, FilterCondition, sort_records};
use crate::{AdminError, AdminResult};
use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

/// A dynamic record: field name to JSON value
pub type Record = HashMap<String, Value>;

/// Extract a record's integer primary key
pub fn record_pk(record: &Record, pk_field: &str) -> AdminResult<i64> {
	record
		.get(pk_field)
		.and_then(Value::as_i64)
		.ok_or_else(|| AdminError::UnknownField(pk_field.to_string()))
}

/// Storage operations the admin engine needs
///
/// Query methods take an optional composite condition (search) plus a list
/// of field filters combined with AND logic, matching the changelist query
/// shape.
#[async_trait]
pub trait AdminStore: Send + Sync {
	/// Insert a record, allocating a primary key when the record has none
	async fn insert(&self, table: &str, pk_field: &str, record: Record) -> AdminResult<i64>;

	/// Fetch a single record by primary key
	async fn get(&self, table: &str, pk_field: &str, id: i64) -> AdminResult<Record>;

	/// List records with filtering, ordering, and pagination
	async fn list(
		&self,
		table: &str,
		condition: Option<&FilterCondition>,
		filters: &[Filter],
		sort_by: Option<&str>,
		offset: u64,
		limit: u64,
	) -> AdminResult<Vec<Record>>;

	/// Count records matching the given filters
	async fn count(
		&self,
		table: &str,
		condition: Option<&FilterCondition>,
		filters: &[Filter],
	) -> AdminResult<u64>;

	/// Set one field on one record
	async fn update_field(
		&self,
		table: &str,
		pk_field: &str,
		id: i64,
		field: &str,
		value: Value,
	) -> AdminResult<()>;

	/// Set one field to one value on every listed record
	///
	/// Ids with no backing record are skipped; the returned count covers
	/// records actually written.
	async fn bulk_update(
		&self,
		table: &str,
		pk_field: &str,
		ids: &[i64],
		field: &str,
		value: Value,
	) -> AdminResult<u64>;

	/// Sum a decimal column over records matching the filters
	///
	/// Missing and null column values are ignored, so an empty match sums
	/// to zero.
	async fn sum_where(
		&self,
		table: &str,
		column: &str,
		filters: &[Filter],
	) -> AdminResult<Decimal>;
}

/// In-process record store
///
/// Tables are keyed by name, rows by primary key in ascending order, which
/// keeps unsorted listings deterministic.
///
/// # Examples
///
/// ```
/// use admission_admin::store::{AdminStore, MemoryStore};
/// use serde_json::json;
///
/// # async fn example() -> admission_admin::AdminResult<()> {
/// let store = MemoryStore::new();
/// let record = [("code".to_string(), json!("CSE"))].into_iter().collect();
/// let id = store.insert("departments", "id", record).await?;
/// assert_eq!(id, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MemoryStore {
	tables: DashMap<String, BTreeMap<i64, Record>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn matching_rows(
		&self,
		table: &str,
		condition: Option<&FilterCondition>,
		filters: &[Filter],
	) -> Vec<Record> {
		let Some(rows) = self.tables.get(table) else {
			return Vec::new();
		};
		rows.values()
			.filter(|record| condition.is_none_or(|c| c.matches(record)))
			.filter(|record| filters.iter().all(|f| f.matches(record)))
			.cloned()
			.collect()
	}
}

#[async_trait]
impl AdminStore for MemoryStore {
	async fn insert(&self, table: &str, pk_field: &str, mut record: Record) -> AdminResult<i64> {
		let mut rows = self.tables.entry(table.to_string()).or_default();
		let id = match record.get(pk_field).and_then(Value::as_i64) {
			Some(id) => id,
			None => rows.keys().next_back().copied().unwrap_or(0) + 1,
		};
		record.insert(pk_field.to_string(), Value::from(id));
		tracing::debug!(table, id, "insert record");
		rows.insert(id, record);
		Ok(id)
	}

	async fn get(&self, table: &str, pk_field: &str, id: i64) -> AdminResult<Record> {
		let _ = pk_field;
		self.tables
			.get(table)
			.and_then(|rows| rows.get(&id).cloned())
			.ok_or_else(|| AdminError::RecordNotFound {
				table: table.to_string(),
				id,
			})
	}

	async fn list(
		&self,
		table: &str,
		condition: Option<&FilterCondition>,
		filters: &[Filter],
		sort_by: Option<&str>,
		offset: u64,
		limit: u64,
	) -> AdminResult<Vec<Record>> {
		let mut records = self.matching_rows(table, condition, filters);
		if let Some(sort_by) = sort_by {
			sort_records(&mut records, sort_by);
		}
		Ok(records
			.into_iter()
			.skip(usize::try_from(offset).unwrap_or(usize::MAX))
			.take(usize::try_from(limit).unwrap_or(usize::MAX))
			.collect())
	}

	async fn count(
		&self,
		table: &str,
		condition: Option<&FilterCondition>,
		filters: &[Filter],
	) -> AdminResult<u64> {
		Ok(self.matching_rows(table, condition, filters).len() as u64)
	}

	async fn update_field(
		&self,
		table: &str,
		pk_field: &str,
		id: i64,
		field: &str,
		value: Value,
	) -> AdminResult<()> {
		let _ = pk_field;
		let mut rows = self
			.tables
			.get_mut(table)
			.ok_or_else(|| AdminError::RecordNotFound {
				table: table.to_string(),
				id,
			})?;
		let record = rows.get_mut(&id).ok_or_else(|| AdminError::RecordNotFound {
			table: table.to_string(),
			id,
		})?;
		tracing::debug!(table, id, field, "update field");
		record.insert(field.to_string(), value);
		Ok(())
	}

	async fn bulk_update(
		&self,
		table: &str,
		pk_field: &str,
		ids: &[i64],
		field: &str,
		value: Value,
	) -> AdminResult<u64> {
		let _ = pk_field;
		let Some(mut rows) = self.tables.get_mut(table) else {
			return Ok(0);
		};
		let mut affected = 0;
		for id in ids {
			if let Some(record) = rows.get_mut(id) {
				record.insert(field.to_string(), value.clone());
				affected += 1;
			}
		}
		tracing::debug!(table, field, affected, "bulk update");
		Ok(affected)
	}

	async fn sum_where(
		&self,
		table: &str,
		column: &str,
		filters: &[Filter],
	) -> AdminResult<Decimal> {
		let mut total = Decimal::ZERO;
		for record in self.matching_rows(table, None, filters) {
			match record.get(column) {
				None | Some(Value::Null) => {}
				Some(Value::String(s)) => {
					total += Decimal::from_str(s)
						.map_err(|e| anyhow::anyhow!("bad decimal in '{column}': {e}"))?;
				}
				Some(Value::Number(n)) => {
					total += Decimal::from_str(&n.to_string())
						.map_err(|e| anyhow::anyhow!("bad decimal in '{column}': {e}"))?;
				}
				Some(other) => {
					return Err(AdminError::StoreError(anyhow::anyhow!(
						"non-numeric value in '{column}': {other}"
					)));
				}
			}
		}
		Ok(total)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{FilterOperator, FilterValue};
	use serde_json::json;

	fn record(pairs: &[(&str, Value)]) -> Record {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect()
	}

	#[tokio::test]
	async fn test_insert_allocates_sequential_ids() {
		let store = MemoryStore::new();
		let first = store
			.insert("departments", "id", record(&[("code", json!("CSE"))]))
			.await
			.unwrap();
		let second = store
			.insert("departments", "id", record(&[("code", json!("EEE"))]))
			.await
			.unwrap();

		assert_eq!(first, 1);
		assert_eq!(second, 2);
	}

	#[tokio::test]
	async fn test_insert_respects_explicit_id() {
		let store = MemoryStore::new();
		store
			.insert(
				"departments",
				"id",
				record(&[("id", json!(7)), ("code", json!("CSE"))]),
			)
			.await
			.unwrap();
		let next = store
			.insert("departments", "id", record(&[("code", json!("EEE"))]))
			.await
			.unwrap();

		assert_eq!(next, 8);
	}

	#[tokio::test]
	async fn test_get_missing_record() {
		let store = MemoryStore::new();
		let err = store.get("departments", "id", 1).await.unwrap_err();
		assert!(matches!(err, AdminError::RecordNotFound { .. }));
	}

	#[tokio::test]
	async fn test_list_filters_sorts_and_paginates() {
		let store = MemoryStore::new();
		for (code, seats) in [("EEE", 40), ("CSE", 60), ("BBA", 90), ("LAW", 50)] {
			store
				.insert(
					"departments",
					"id",
					record(&[("code", json!(code)), ("seats", json!(seats))]),
				)
				.await
				.unwrap();
		}

		let filters = [Filter::new(
			"seats",
			FilterOperator::Gte,
			FilterValue::Integer(50),
		)];
		let page = store
			.list("departments", None, &filters, Some("code"), 0, 2)
			.await
			.unwrap();
		let codes: Vec<_> = page.iter().map(|r| r["code"].clone()).collect();
		assert_eq!(codes, vec![json!("BBA"), json!("CSE")]);

		let rest = store
			.list("departments", None, &filters, Some("code"), 2, 2)
			.await
			.unwrap();
		assert_eq!(rest.len(), 1);
		assert_eq!(rest[0]["code"], json!("LAW"));
	}

	#[tokio::test]
	async fn test_bulk_update_skips_missing_ids() {
		let store = MemoryStore::new();
		for status in ["pending", "approved"] {
			store
				.insert("applications", "id", record(&[("status", json!(status))]))
				.await
				.unwrap();
		}

		let affected = store
			.bulk_update("applications", "id", &[1, 2, 99], "status", json!("rejected"))
			.await
			.unwrap();
		assert_eq!(affected, 2);

		for id in [1, 2] {
			let rec = store.get("applications", "id", id).await.unwrap();
			assert_eq!(rec["status"], json!("rejected"));
		}
	}

	#[tokio::test]
	async fn test_sum_where_ignores_nulls() {
		let store = MemoryStore::new();
		for amount in [json!("100.00"), json!("50.50"), Value::Null] {
			store
				.insert("payments", "id", record(&[("amount", amount)]))
				.await
				.unwrap();
		}

		let total = store.sum_where("payments", "amount", &[]).await.unwrap();
		assert_eq!(total, Decimal::from_str("150.50").unwrap());
	}

	#[tokio::test]
	async fn test_sum_where_empty_match_is_zero() {
		let store = MemoryStore::new();
		let total = store.sum_where("payments", "amount", &[]).await.unwrap();
		assert_eq!(total, Decimal::ZERO);
	}
}
