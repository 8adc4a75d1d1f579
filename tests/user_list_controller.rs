//! Controller integration tests against an in-process users endpoint.

mod support;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use user_management::client::controller::user_list::UserListController;
use user_management::client::models::collection_state::UserAction;
use user_management::client::models::errors::OperationFailure;
use user_management::client::models::user::UserRecord;
use user_management::client::services::users_service::UsersService;

use crate::support::{start_server, unreachable_base_url, MockUsersApi};

const FETCH_FAILED: &str = "Something went wrong while fetching users.";
const DELETE_FAILED: &str = "Something went wrong while deleting the user.";
const UPDATE_FAILED: &str = "Something went wrong while updating the user.";

fn ann() -> UserRecord {
    UserRecord::new("1", "Ann", "a@x.com")
}

fn bob() -> UserRecord {
    UserRecord::new("2", "Bob", "b@x.com")
}

async fn loaded_controller(mock: MockUsersApi) -> (UserListController, Arc<MockUsersApi>) {
    let mock = Arc::new(mock);
    let base = start_server(mock.clone()).await;
    let (mut controller, initial_load) = UserListController::init(UsersService::new(base));
    controller.apply(initial_load.await);
    (controller, mock)
}

#[tokio::test]
async fn initial_load_shows_records_in_response_order() {
    let (controller, mock) = loaded_controller(MockUsersApi::with_users(json!([
        { "id": "1", "name": "Ann", "email": "a@x.com" },
        { "id": 2, "name": "Bob", "username": "bob", "email": "b@x.com" }
    ])))
    .await;

    assert_eq!(controller.state().users(), &[ann(), bob()]);
    assert_eq!(controller.state().error(), None);
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn concrete_scenario_load_then_delete() {
    let (mut controller, _mock) =
        loaded_controller(MockUsersApi::with_users(json!([{ "id": "1", "name": "Ann", "email": "a@x.com" }]))).await;

    let labels: Vec<String> = controller.state().users().iter().map(UserRecord::display_label).collect();
    assert_eq!(labels, vec!["Ann (a@x.com)".to_string()]);

    assert_eq!(controller.delete("1").await, Ok(()));
    assert!(controller.state().users().is_empty());
}

#[tokio::test]
async fn load_failure_on_server_error_keeps_collection_empty() {
    let (controller, _mock) = loaded_controller(MockUsersApi {
        list_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..MockUsersApi::default()
    })
    .await;

    assert!(controller.state().users().is_empty());
    assert_eq!(controller.state().error(), Some(FETCH_FAILED));
}

#[tokio::test]
async fn load_failure_on_unexpected_body() {
    let (controller, _mock) = loaded_controller(MockUsersApi::with_users(json!({ "users": [] }))).await;

    assert!(controller.state().users().is_empty());
    assert_eq!(controller.state().error(), Some(FETCH_FAILED));
}

#[tokio::test]
async fn load_failure_when_endpoint_is_unreachable() {
    let base = unreachable_base_url().await;
    let (mut controller, _initial_load) = UserListController::init(UsersService::new(base));

    assert_eq!(controller.load().await, Err(OperationFailure::Fetch));
    assert!(controller.state().users().is_empty());
    assert_eq!(controller.state().error(), Some(FETCH_FAILED));
}

#[tokio::test]
async fn create_appends_without_any_request() {
    let (mut controller, mock) =
        loaded_controller(MockUsersApi::with_users(json!([{ "id": "1", "name": "Ann", "email": "a@x.com" }]))).await;
    let before = mock.requests().len();

    controller.create(bob());

    assert_eq!(controller.state().users(), &[ann(), bob()]);
    assert_eq!(mock.requests().len(), before);
}

#[tokio::test]
async fn delete_removes_only_the_matching_record() {
    let (mut controller, mock) = loaded_controller(MockUsersApi::with_users(json!([
        { "id": "1", "name": "Ann", "email": "a@x.com" },
        { "id": "2", "name": "Bob", "email": "b@x.com" }
    ])))
    .await;

    controller.delete("2").await.unwrap();

    assert_eq!(controller.state().users(), &[ann()]);
    let last = mock.requests().pop().unwrap();
    assert_eq!(last.method, "DELETE");
    assert_eq!(last.path, "/users/2");
}

#[tokio::test]
async fn delete_failure_keeps_collection_and_sets_error() {
    let (mut controller, _mock) = loaded_controller(MockUsersApi {
        delete_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..MockUsersApi::with_users(json!([{ "id": "1", "name": "Ann", "email": "a@x.com" }]))
    })
    .await;

    assert_eq!(controller.delete("1").await, Err(OperationFailure::Delete));
    assert_eq!(controller.state().users(), &[ann()]);
    assert_eq!(controller.state().error(), Some(DELETE_FAILED));
}

#[tokio::test]
async fn update_sends_json_and_replaces_with_server_record() {
    let (mut controller, mock) = loaded_controller(MockUsersApi {
        // il server risponde con id numerico, come quello reale
        update_body: Some(json!({ "id": 1, "name": "Annie", "email": "annie@x.com" })),
        ..MockUsersApi::with_users(json!([
            { "id": "1", "name": "Ann", "email": "a@x.com" },
            { "id": "2", "name": "Bob", "email": "b@x.com" }
        ]))
    })
    .await;

    controller.edit(ann());
    assert_eq!(controller.state().user_to_edit(), Some(&ann()));

    let edited = UserRecord::new("1", "Annie", "annie@x.com");
    controller.update(edited.clone()).await.unwrap();

    assert_eq!(controller.state().users(), &[edited, bob()]);
    assert_eq!(controller.state().user_to_edit(), None);

    let put = mock.requests().pop().unwrap();
    assert_eq!(put.method, "PUT");
    assert_eq!(put.path, "/users/1");
    assert_eq!(put.content_type.as_deref(), Some("application/json"));
    assert_eq!(put.body, Some(json!({ "id": "1", "name": "Annie", "email": "annie@x.com" })));
}

#[tokio::test]
async fn update_failure_keeps_collection_and_selection() {
    let (mut controller, _mock) = loaded_controller(MockUsersApi {
        update_status: StatusCode::NOT_FOUND,
        ..MockUsersApi::with_users(json!([{ "id": "1", "name": "Ann", "email": "a@x.com" }]))
    })
    .await;

    controller.edit(ann());
    let result = controller.update(UserRecord::new("1", "Annie", "annie@x.com")).await;

    assert_eq!(result, Err(OperationFailure::Update));
    assert_eq!(controller.state().users(), &[ann()]);
    assert_eq!(controller.state().user_to_edit(), Some(&ann()));
    assert_eq!(controller.state().error(), Some(UPDATE_FAILED));
}

#[tokio::test]
async fn stale_error_survives_later_success() {
    let (mut controller, _mock) = loaded_controller(MockUsersApi {
        delete_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..MockUsersApi::with_users(json!([{ "id": "1", "name": "Ann", "email": "a@x.com" }]))
    })
    .await;

    let _ = controller.delete("1").await;
    controller.create(bob());

    assert_eq!(controller.state().users(), &[ann(), bob()]);
    assert_eq!(controller.state().error(), Some(DELETE_FAILED));
}

#[tokio::test]
async fn tasks_can_complete_out_of_order() {
    let (mut controller, _mock) = loaded_controller(MockUsersApi::with_users(json!([
        { "id": "1", "name": "Ann", "email": "a@x.com" },
        { "id": "2", "name": "Bob", "email": "b@x.com" }
    ])))
    .await;

    let first = tokio::spawn(controller.delete_task("1".to_string()));
    let second = tokio::spawn(controller.delete_task("2".to_string()));

    let second_action = second.await.unwrap();
    assert_eq!(second_action, UserAction::Deleted("2".to_string()));
    controller.apply(second_action);
    controller.apply(first.await.unwrap());

    assert!(controller.state().users().is_empty());
}
