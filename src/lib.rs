//! # Admission Admin
//!
//! Admin console for a student admission platform.
//!
//! The crate has two halves:
//!
//! - A small model-admin engine: an [`AdminSite`] registry, the
//!   [`ModelAdmin`] trait, a dynamic record store, filter/search/ordering
//!   evaluation, computed display columns, bulk actions, and inline child
//!   editors.
//! - The admission app itself ([`admission`]): Department, Teacher,
//!   Application, ApplicationFile, and Payment registrations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use admission_admin::admission::configure_admin;
//! use admission_admin::store::MemoryStore;
//! use admission_admin::views;
//!
//! # async fn demo() -> admission_admin::AdminResult<()> {
//! let site = configure_admin()?;
//! let store = MemoryStore::new();
//!
//! let page = views::get_list(&site, &store, "Application", &Default::default()).await?;
//! println!("{} applications", page.count);
//! # Ok(())
//! # }
//! ```
//!
//! Authentication, routing, and page rendering belong to the hosting
//! application. This crate produces the data and HTML fragments the host
//! renders.

pub mod actions;
pub mod admission;
pub mod columns;
pub mod html;
pub mod inline;
pub mod model_admin;
pub mod query;
pub mod site;
pub mod store;
pub mod text;
pub mod types;
pub mod views;

pub use actions::{ActionResult, AdminAction, SetFieldAction};
pub use columns::{AdminContext, DisplayColumn};
pub use html::Html;
pub use inline::{InlineModelAdmin, InlineType};
pub use model_admin::{Fieldset, ModelAdmin};
pub use query::{Filter, FilterCondition, FilterOperator, FilterValue};
pub use site::AdminSite;
pub use store::{AdminStore, MemoryStore, Record};

/// Admin error types
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
	/// Model not registered with the admin site
	#[error("Model '{0}' is not registered with admin")]
	ModelNotRegistered(String),

	/// Record lookup failed
	#[error("Record '{id}' not found in '{table}'")]
	RecordNotFound { table: String, id: i64 },

	/// Field is not part of the record or not declared for the operation
	#[error("Unknown field '{0}'")]
	UnknownField(String),

	/// Field is not editable from the list view
	#[error("Field '{0}' is not editable")]
	FieldNotEditable(String),

	/// Invalid action
	#[error("Invalid action: {0}")]
	InvalidAction(String),

	/// Validation error
	#[error("Validation error: {0}")]
	ValidationError(String),

	/// Record store error
	#[error("Store error: {0}")]
	StoreError(#[from] anyhow::Error),
}

pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_admin_error_display() {
		let err = AdminError::ModelNotRegistered("Application".to_string());
		assert_eq!(
			err.to_string(),
			"Model 'Application' is not registered with admin"
		);

		let err = AdminError::RecordNotFound {
			table: "payments".to_string(),
			id: 42,
		};
		assert_eq!(err.to_string(), "Record '42' not found in 'payments'");

		let err = AdminError::FieldNotEditable("applied_at".to_string());
		assert_eq!(err.to_string(), "Field 'applied_at' is not editable");
	}
}
