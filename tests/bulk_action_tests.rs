//! Bulk status actions on the application changelist

mod common;

use admission_admin::actions::ActionResult;
use admission_admin::admission::Application;
use admission_admin::store::AdminStore;
use admission_admin::types::ActionRequest;
use admission_admin::views::perform_action;
use admission_admin::AdminError;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("mark_as_pending", "pending")]
#[case("mark_as_under_review", "under_review")]
#[case("mark_as_approved", "approved")]
#[case("mark_as_rejected", "rejected")]
#[tokio::test]
async fn test_bulk_action_overwrites_selected_statuses(
	#[case] action: &str,
	#[case] expected: &str,
) {
	let (site, store) = common::seeded().await;

	let request = ActionRequest {
		action: action.to_string(),
		ids: vec![1, 2, 4],
	};
	let response = perform_action(&site, &store, "Application", &request)
		.await
		.unwrap();

	assert_eq!(response.action, action);
	assert!(response.result.is_success());
	assert_eq!(response.result.affected_count(), 3);

	// Every selected row carries the target value, whatever it held before.
	for id in [1, 2, 4] {
		let record = store.get(Application::TABLE, "id", id).await.unwrap();
		assert_eq!(record["status"], json!(expected));
	}

	// The unselected row is untouched.
	let record = store.get(Application::TABLE, "id", 3).await.unwrap();
	assert_eq!(record["status"], json!("under_review"));
}

#[tokio::test]
async fn test_bulk_action_permits_arbitrary_transitions() {
	let (site, store) = common::seeded().await;

	// approved (id 2) and rejected (id 4) both drop straight back to pending
	let request = ActionRequest {
		action: "mark_as_pending".to_string(),
		ids: vec![2, 4],
	};
	perform_action(&site, &store, "Application", &request)
		.await
		.unwrap();

	for id in [2, 4] {
		let record = store.get(Application::TABLE, "id", id).await.unwrap();
		assert_eq!(record["status"], json!("pending"));
	}
}

#[tokio::test]
async fn test_bulk_action_empty_selection_warns() {
	let (site, store) = common::seeded().await;

	let request = ActionRequest {
		action: "mark_as_approved".to_string(),
		ids: vec![],
	};
	let response = perform_action(&site, &store, "Application", &request)
		.await
		.unwrap();

	match response.result {
		ActionResult::Warning { affected_count, .. } => assert_eq!(affected_count, 0),
		other => panic!("expected Warning, got {:?}", other),
	}
}

#[tokio::test]
async fn test_bulk_action_skips_unknown_ids() {
	let (site, store) = common::seeded().await;

	let request = ActionRequest {
		action: "mark_as_rejected".to_string(),
		ids: vec![3, 42],
	};
	let response = perform_action(&site, &store, "Application", &request)
		.await
		.unwrap();

	assert_eq!(response.result.affected_count(), 1);
	let record = store.get(Application::TABLE, "id", 3).await.unwrap();
	assert_eq!(record["status"], json!("rejected"));
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
	let (site, store) = common::seeded().await;

	let request = ActionRequest {
		action: "mark_as_archived".to_string(),
		ids: vec![1],
	};
	let err = perform_action(&site, &store, "Application", &request)
		.await
		.unwrap_err();
	assert!(matches!(err, AdminError::InvalidAction(_)));
}

#[tokio::test]
async fn test_actions_are_scoped_to_their_model() {
	let (site, store) = common::seeded().await;

	// The status actions are declared on Application, not Payment.
	let request = ActionRequest {
		action: "mark_as_approved".to_string(),
		ids: vec![1],
	};
	let err = perform_action(&site, &store, "Payment", &request)
		.await
		.unwrap_err();
	assert!(matches!(err, AdminError::InvalidAction(_)));
}
