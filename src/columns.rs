//! Computed list columns
//!
//! A computed column derives a cell from the record it belongs to, usually
//! by querying related rows: counting children, summing payments, or
//! building a cross-reference link.

use crate::html::Html;
use crate::site::AdminSite;
use crate::store::{AdminStore, Record};
use crate::AdminResult;
use async_trait::async_trait;

/// Rendering context handed to computed columns
///
/// Exposes the record store for related-row queries and the site for URL
/// reversing.
pub struct AdminContext<'a> {
	pub store: &'a dyn AdminStore,
	pub site: &'a AdminSite,
}

impl<'a> AdminContext<'a> {
	pub fn new(site: &'a AdminSite, store: &'a dyn AdminStore) -> Self {
		Self { store, site }
	}
}

/// A derived column on a list view or inline
///
/// The column's [`name`](Self::name) is referenced from
/// `ModelAdmin::list_display`; [`short_description`](Self::short_description)
/// is the column header.
#[async_trait]
pub trait DisplayColumn: Send + Sync {
	/// Column identifier referenced from `list_display`
	fn name(&self) -> &str;

	/// Column header label
	fn short_description(&self) -> &str;

	/// Render the cell for one record
	async fn render(&self, record: &Record, ctx: &AdminContext<'_>) -> AdminResult<Html>;
}
