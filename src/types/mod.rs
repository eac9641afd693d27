//! Request and response payloads for the admin views

pub mod models;
pub mod requests;
pub mod responses;

pub use models::{ColumnInfo, FilterInfo, ModelInfo};
pub use requests::{ActionRequest, ListQueryParams};
pub use responses::{
	ActionResponse, DashboardResponse, DetailResponse, FieldData, FieldsetData, InlineData,
	InlineRow, ListResponse, MutationResponse,
};
