//! Shared fixtures: a configured site and a seeded store
//!
//! The seed covers the cases the suites assert on: a department with three
//! applications, one application with mixed-status payments and two file
//! slots, and a second department with a single rejected application.

#![allow(dead_code)]

use admission_admin::AdminResult;
use admission_admin::admission::{
	Application, ApplicationFile, ApplicationStatus, Department, Payment, PaymentStatus, Teacher,
	configure_admin,
};
use admission_admin::site::AdminSite;
use admission_admin::store::{AdminStore, MemoryStore};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

pub fn ts(day: u32, hour: u32) -> DateTime<Utc> {
	Utc.with_ymd_and_hms(2026, 1, day, hour, 0, 0).unwrap()
}

fn department(id: i64, code: &str, name: &str, seats: i64) -> Department {
	Department {
		id,
		code: code.to_string(),
		name: name.to_string(),
		seats,
		total_credits: 140,
		per_credit_fee: Decimal::new(5500, 2),
	}
}

fn application(id: i64, full_name: &str, department_id: i64, status: ApplicationStatus) -> Application {
	Application {
		id,
		full_name: full_name.to_string(),
		email: format!("applicant{}@example.com", id),
		phone: format!("+880170000000{}", id),
		address: "12 College Road, Dhaka".to_string(),
		department_id,
		program: "BSc".to_string(),
		previous_education: "HSC".to_string(),
		cgpa: 4.5,
		status,
		applied_at: ts(10, 9),
		updated_at: ts(10, 9),
		notes: String::new(),
	}
}

fn payment(
	id: i64,
	application_id: i64,
	amount: Decimal,
	status: PaymentStatus,
	paid_at: Option<DateTime<Utc>>,
) -> Payment {
	Payment {
		id,
		application_id,
		amount,
		currency: "USD".to_string(),
		status,
		payment_method: "card".to_string(),
		transaction_id: format!("TXN-100{}", id),
		paid_at,
		created_at: ts(11, 8),
	}
}

pub async fn seed(store: &MemoryStore) -> AdminResult<()> {
	for dept in [
		department(1, "CSE", "Computer Science", 60),
		department(2, "EEE", "Electrical Engineering", 40),
	] {
		store
			.insert(Department::TABLE, "id", dept.into_record()?)
			.await?;
	}

	for teacher in [
		Teacher {
			id: 1,
			name: "Farhana Akter".to_string(),
			department_id: 1,
			position: "Professor".to_string(),
			email: "farhana@example.edu".to_string(),
			phone: "+8801811111111".to_string(),
			is_active: true,
		},
		Teacher {
			id: 2,
			name: "Imran Hossain".to_string(),
			department_id: 2,
			position: "Lecturer".to_string(),
			email: "imran@example.edu".to_string(),
			phone: "+8801822222222".to_string(),
			is_active: false,
		},
	] {
		store
			.insert(Teacher::TABLE, "id", teacher.into_record()?)
			.await?;
	}

	for app in [
		application(1, "Ayesha Rahman", 1, ApplicationStatus::Pending),
		application(2, "Nabil Chowdhury", 1, ApplicationStatus::Approved),
		application(3, "Mitu Akhter", 1, ApplicationStatus::UnderReview),
		application(4, "Rashed Karim", 2, ApplicationStatus::Rejected),
	] {
		store
			.insert(Application::TABLE, "id", app.into_record()?)
			.await?;
	}

	for file in [
		ApplicationFile {
			id: 1,
			application_id: 1,
			file: Some("uploads/transcript-1.pdf".to_string()),
			uploaded_at: ts(12, 10),
		},
		ApplicationFile {
			id: 2,
			application_id: 1,
			file: None,
			uploaded_at: ts(12, 11),
		},
	] {
		store
			.insert(ApplicationFile::TABLE, "id", file.into_record()?)
			.await?;
	}

	for pay in [
		payment(1, 1, Decimal::new(10000, 2), PaymentStatus::Completed, Some(ts(13, 9))),
		payment(2, 1, Decimal::new(5000, 2), PaymentStatus::Completed, Some(ts(14, 9))),
		payment(3, 1, Decimal::new(7500, 2), PaymentStatus::Pending, None),
		payment(4, 4, Decimal::new(2500, 2), PaymentStatus::Failed, None),
	] {
		store
			.insert(Payment::TABLE, "id", pay.into_record()?)
			.await?;
	}

	Ok(())
}

/// Configured site plus a store seeded with the fixture data
pub async fn seeded() -> (AdminSite, MemoryStore) {
	let site = configure_admin().expect("site configuration");
	let store = MemoryStore::new();
	seed(&store).await.expect("seed data");
	(site, store)
}
