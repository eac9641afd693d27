//! Admission app: entities and admin registrations
//!
//! Five record types make up the admission domain: departments, teachers,
//! applications, application files, and payments. [`configure_admin`] builds
//! the site with all of them registered.

pub mod admin;
pub mod models;

pub use admin::{
	ApplicationAdmin, DepartmentAdmin, PaymentAdmin, TeacherAdmin, configure_admin,
};
pub use models::{
	Application, ApplicationFile, ApplicationStatus, Department, Payment, PaymentStatus, Teacher,
};
