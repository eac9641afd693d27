//! Filter and ordering model for admin list queries
//!
//! Filters are evaluated directly against dynamic records. The operator set
//! mirrors what the changelist surface needs: exact matches for declared
//! list filters, substring matches for search, range operators for derived
//! conditions.

use serde_json::Value;

/// A filter value, typed where the caller knows the type
///
/// Values arriving from query strings are `String`; comparison against
/// numeric or boolean record fields falls back to canonical string form.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
	String(String),
	Integer(i64),
	Float(f64),
	Boolean(bool),
	Null,
}

impl FilterValue {
	/// Canonical string form used for cross-type comparison
	pub fn as_canonical(&self) -> String {
		match self {
			FilterValue::String(s) => s.clone(),
			FilterValue::Integer(i) => i.to_string(),
			FilterValue::Float(f) => f.to_string(),
			FilterValue::Boolean(b) => b.to_string(),
			FilterValue::Null => String::new(),
		}
	}

	fn as_f64(&self) -> Option<f64> {
		match self {
			FilterValue::Integer(i) => Some(*i as f64),
			FilterValue::Float(f) => Some(*f),
			FilterValue::String(s) => s.parse().ok(),
			_ => None,
		}
	}
}

/// Comparison operator for a single filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
	Eq,
	Ne,
	Gt,
	Gte,
	Lt,
	Lte,
	Contains,
	StartsWith,
	EndsWith,
}

/// A single field comparison
#[derive(Debug, Clone)]
pub struct Filter {
	pub field: String,
	pub operator: FilterOperator,
	pub value: FilterValue,
}

impl Filter {
	pub fn new(field: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
		Self {
			field: field.into(),
			operator,
			value,
		}
	}

	/// Shorthand for an equality filter
	pub fn eq(field: impl Into<String>, value: FilterValue) -> Self {
		Self::new(field, FilterOperator::Eq, value)
	}

	/// Check whether a record satisfies this filter
	pub fn matches(&self, record: &crate::store::Record) -> bool {
		let actual = record.get(&self.field).unwrap_or(&Value::Null);
		matches_value(actual, self.operator, &self.value)
	}
}

/// Composite filter condition with AND/OR/NOT logic
#[derive(Debug, Clone)]
pub enum FilterCondition {
	Single(Filter),
	And(Vec<FilterCondition>),
	Or(Vec<FilterCondition>),
	Not(Box<FilterCondition>),
}

impl FilterCondition {
	/// Evaluate the condition against a record
	///
	/// Empty `And` matches everything, empty `Or` matches nothing.
	pub fn matches(&self, record: &crate::store::Record) -> bool {
		match self {
			FilterCondition::Single(filter) => filter.matches(record),
			FilterCondition::And(conditions) => conditions.iter().all(|c| c.matches(record)),
			FilterCondition::Or(conditions) => conditions.iter().any(|c| c.matches(record)),
			FilterCondition::Not(inner) => !inner.matches(record),
		}
	}
}

/// Canonical string form of a JSON value, without quoting
pub fn value_canonical(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

fn value_as_f64(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.parse().ok(),
		_ => None,
	}
}

fn matches_value(actual: &Value, operator: FilterOperator, expected: &FilterValue) -> bool {
	use FilterOperator::*;

	match operator {
		Eq => values_equal(actual, expected),
		Ne => !values_equal(actual, expected),
		Gt | Gte | Lt | Lte => compare_ordered(actual, operator, expected),
		Contains => value_canonical(actual).contains(&expected.as_canonical()),
		StartsWith => value_canonical(actual).starts_with(&expected.as_canonical()),
		EndsWith => value_canonical(actual).ends_with(&expected.as_canonical()),
	}
}

fn values_equal(actual: &Value, expected: &FilterValue) -> bool {
	match (actual, expected) {
		(Value::Null, FilterValue::Null) => true,
		(Value::Null, _) | (_, FilterValue::Null) => false,
		(Value::String(a), FilterValue::String(b)) => a == b,
		(Value::Bool(a), FilterValue::Boolean(b)) => a == b,
		(Value::Number(a), FilterValue::Integer(b)) => a.as_i64() == Some(*b),
		(Value::Number(a), FilterValue::Float(b)) => a.as_f64() == Some(*b),
		// Mixed types: the query string gives no type information, so
		// fall back to canonical string comparison.
		_ => value_canonical(actual) == expected.as_canonical(),
	}
}

fn compare_ordered(actual: &Value, operator: FilterOperator, expected: &FilterValue) -> bool {
	let ordering = match (value_as_f64(actual), expected.as_f64()) {
		(Some(a), Some(b)) => a.partial_cmp(&b),
		_ => Some(value_canonical(actual).cmp(&expected.as_canonical())),
	};
	let Some(ordering) = ordering else {
		return false;
	};
	match operator {
		FilterOperator::Gt => ordering.is_gt(),
		FilterOperator::Gte => ordering.is_ge(),
		FilterOperator::Lt => ordering.is_lt(),
		FilterOperator::Lte => ordering.is_le(),
		_ => false,
	}
}

/// Compare two record values for ordering purposes
///
/// Numbers order numerically, strings lexically, nulls sort last.
pub fn compare_values(a: &Value, b: &Value) -> std::cmp::Ordering {
	use std::cmp::Ordering;

	match (a, b) {
		(Value::Null, Value::Null) => Ordering::Equal,
		(Value::Null, _) => Ordering::Greater,
		(_, Value::Null) => Ordering::Less,
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		_ => match (value_as_f64(a), value_as_f64(b)) {
			(Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
			_ => value_canonical(a).cmp(&value_canonical(b)),
		},
	}
}

/// Sort records in place by a sort expression
///
/// A `-` prefix sorts descending. The sort is stable, so equal keys keep
/// their store order.
pub fn sort_records(records: &mut [crate::store::Record], sort_by: &str) {
	let (field, descending) = match sort_by.strip_prefix('-') {
		Some(field) => (field, true),
		None => (sort_by, false),
	};

	records.sort_by(|a, b| {
		let lhs = a.get(field).unwrap_or(&Value::Null);
		let rhs = b.get(field).unwrap_or(&Value::Null);
		let ordering = compare_values(lhs, rhs);
		if descending { ordering.reverse() } else { ordering }
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::Record;
	use serde_json::json;

	fn record(pairs: &[(&str, Value)]) -> Record {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect()
	}

	#[test]
	fn test_eq_filter_typed() {
		let rec = record(&[("seats", json!(60)), ("code", json!("CSE"))]);

		assert!(Filter::eq("seats", FilterValue::Integer(60)).matches(&rec));
		assert!(!Filter::eq("seats", FilterValue::Integer(61)).matches(&rec));
		assert!(Filter::eq("code", FilterValue::String("CSE".into())).matches(&rec));
	}

	#[test]
	fn test_eq_filter_string_coercion() {
		// Query-string filters arrive untyped.
		let rec = record(&[("department_id", json!(3)), ("is_active", json!(true))]);

		assert!(Filter::eq("department_id", FilterValue::String("3".into())).matches(&rec));
		assert!(Filter::eq("is_active", FilterValue::String("true".into())).matches(&rec));
		assert!(!Filter::eq("department_id", FilterValue::String("4".into())).matches(&rec));
	}

	#[test]
	fn test_missing_field_matches_null_only() {
		let rec = record(&[("code", json!("CSE"))]);

		assert!(Filter::eq("name", FilterValue::Null).matches(&rec));
		assert!(!Filter::eq("name", FilterValue::String("x".into())).matches(&rec));
	}

	#[test]
	fn test_contains_is_substring() {
		let rec = record(&[("full_name", json!("Ayesha Rahman"))]);

		let hit = Filter::new(
			"full_name",
			FilterOperator::Contains,
			FilterValue::String("Rah".into()),
		);
		let miss = Filter::new(
			"full_name",
			FilterOperator::Contains,
			FilterValue::String("rah".into()),
		);
		assert!(hit.matches(&rec));
		assert!(!miss.matches(&rec));
	}

	#[test]
	fn test_range_operators() {
		let rec = record(&[("cgpa", json!(4.5))]);

		assert!(Filter::new("cgpa", FilterOperator::Gte, FilterValue::Float(4.5)).matches(&rec));
		assert!(Filter::new("cgpa", FilterOperator::Gt, FilterValue::Integer(4)).matches(&rec));
		assert!(!Filter::new("cgpa", FilterOperator::Lt, FilterValue::Integer(4)).matches(&rec));
	}

	#[test]
	fn test_condition_or_and_not() {
		let rec = record(&[("status", json!("pending")), ("program", json!("BSc"))]);

		let or = FilterCondition::Or(vec![
			FilterCondition::Single(Filter::eq("status", FilterValue::String("approved".into()))),
			FilterCondition::Single(Filter::eq("status", FilterValue::String("pending".into()))),
		]);
		assert!(or.matches(&rec));

		let and = FilterCondition::And(vec![
			or.clone(),
			FilterCondition::Single(Filter::eq("program", FilterValue::String("MSc".into()))),
		]);
		assert!(!and.matches(&rec));

		assert!(FilterCondition::Not(Box::new(and)).matches(&rec));
	}

	#[test]
	fn test_empty_composites() {
		let rec = record(&[]);
		assert!(FilterCondition::And(vec![]).matches(&rec));
		assert!(!FilterCondition::Or(vec![]).matches(&rec));
	}

	#[test]
	fn test_sort_records_ascending_and_descending() {
		let mut records = vec![
			record(&[("code", json!("EEE")), ("seats", json!(40))]),
			record(&[("code", json!("BBA")), ("seats", json!(90))]),
			record(&[("code", json!("CSE")), ("seats", json!(60))]),
		];

		sort_records(&mut records, "code");
		let codes: Vec<_> = records.iter().map(|r| r["code"].clone()).collect();
		assert_eq!(codes, vec![json!("BBA"), json!("CSE"), json!("EEE")]);

		sort_records(&mut records, "-seats");
		let seats: Vec<_> = records.iter().map(|r| r["seats"].clone()).collect();
		assert_eq!(seats, vec![json!(90), json!(60), json!(40)]);
	}

	#[test]
	fn test_sort_records_nulls_last() {
		let mut records = vec![
			record(&[("paid_at", Value::Null)]),
			record(&[("paid_at", json!("2026-01-10T00:00:00Z"))]),
		];

		sort_records(&mut records, "paid_at");
		assert_eq!(records[0]["paid_at"], json!("2026-01-10T00:00:00Z"));
	}
}
