//! Admission domain records
//!
//! These types describe the records the admin console manages. The store
//! holds them as dynamic records; [`into_record`] conversions feed seeding
//! and tests. Status fields are closed enumerations: the admin reads and
//! writes their values but never invents new ones.
//!
//! [`into_record`]: Department::into_record

use crate::store::Record;
use crate::{AdminError, AdminResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
	Pending,
	UnderReview,
	Approved,
	Rejected,
}

impl ApplicationStatus {
	/// Wire form, as stored in records
	pub fn as_str(&self) -> &'static str {
		match self {
			ApplicationStatus::Pending => "pending",
			ApplicationStatus::UnderReview => "under_review",
			ApplicationStatus::Approved => "approved",
			ApplicationStatus::Rejected => "rejected",
		}
	}
}

/// Payment processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
	Pending,
	Completed,
	Failed,
	Refunded,
}

impl PaymentStatus {
	/// Wire form, as stored in records
	pub fn as_str(&self) -> &'static str {
		match self {
			PaymentStatus::Pending => "pending",
			PaymentStatus::Completed => "completed",
			PaymentStatus::Failed => "failed",
			PaymentStatus::Refunded => "refunded",
		}
	}
}

fn to_record<T: Serialize>(value: &T) -> AdminResult<Record> {
	let value = serde_json::to_value(value)
		.map_err(|e| AdminError::StoreError(anyhow::anyhow!("record serialization: {e}")))?;
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		other => Err(AdminError::StoreError(anyhow::anyhow!(
			"expected an object record, got {other}"
		))),
	}
}

/// An academic department offering admission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
	pub id: i64,
	pub code: String,
	pub name: String,
	pub seats: i64,
	pub total_credits: i64,
	pub per_credit_fee: Decimal,
}

impl Department {
	pub const TABLE: &'static str = "departments";

	pub fn into_record(self) -> AdminResult<Record> {
		to_record(&self)
	}
}

/// A faculty member attached to a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
	pub id: i64,
	pub name: String,
	pub department_id: i64,
	pub position: String,
	pub email: String,
	pub phone: String,
	pub is_active: bool,
}

impl Teacher {
	pub const TABLE: &'static str = "teachers";

	pub fn into_record(self) -> AdminResult<Record> {
		to_record(&self)
	}
}

/// An admission application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
	pub id: i64,
	pub full_name: String,
	pub email: String,
	pub phone: String,
	pub address: String,
	pub department_id: i64,
	pub program: String,
	pub previous_education: String,
	pub cgpa: f64,
	pub status: ApplicationStatus,
	pub applied_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
	pub notes: String,
}

impl Application {
	pub const TABLE: &'static str = "applications";

	pub fn into_record(self) -> AdminResult<Record> {
		to_record(&self)
	}
}

/// A document uploaded with an application
///
/// Rows never outlive their application; deletion cascades with the parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationFile {
	pub id: i64,
	pub application_id: i64,
	/// Stored file reference, None when the upload slot is empty
	pub file: Option<String>,
	pub uploaded_at: DateTime<Utc>,
}

impl ApplicationFile {
	pub const TABLE: &'static str = "application_files";

	pub fn into_record(self) -> AdminResult<Record> {
		to_record(&self)
	}
}

/// A payment made against an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
	pub id: i64,
	pub application_id: i64,
	pub amount: Decimal,
	pub currency: String,
	pub status: PaymentStatus,
	pub payment_method: String,
	pub transaction_id: String,
	pub paid_at: Option<DateTime<Utc>>,
	pub created_at: DateTime<Utc>,
}

impl Payment {
	pub const TABLE: &'static str = "payments";

	pub fn into_record(self) -> AdminResult<Record> {
		to_record(&self)
	}
}
