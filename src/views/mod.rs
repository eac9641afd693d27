//! Admin view functions
//!
//! Each view is a plain async function over the site registry and the
//! record store. The hosting application wires them to its own routing and
//! authentication layers.

pub mod actions;
pub mod dashboard;
pub mod detail;
pub mod edit;
pub mod list;

pub use actions::perform_action;
pub use dashboard::dashboard;
pub use detail::get_detail;
pub use edit::update_list_field;
pub use list::get_list;

/// Upper bound on list page sizes, whatever the request asks for
pub const MAX_PAGE_SIZE: u64 = 100;
