//! Integration tests for the account endpoints against a mock server

use apollo_client::AccountClient;
use apollo_core::Config;
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
  Config::default_with_key("test_key").with_base_url(server.uri())
}

fn obj(value: Value) -> Map<String, Value> {
  value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn create_account_posts_fields() {
  let server = MockServer::start().await;
  let fields = json!({"name": "IrishConvertizers Inc.", "domain": "irishconvertizers.ie"});
  let payload = json!({"account": {"id": "acc-1"}});

  Mock::given(method("POST"))
    .and(path("/accounts"))
    .and(header("x-api-key", "test_key"))
    .and(body_json(fields.clone()))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = AccountClient::new(&config_for(&server)).unwrap();
  let result = client.create_account(obj(fields)).await;

  assert_eq!(result.success(), Some(&payload));
}

#[tokio::test]
async fn update_account_puts_to_interpolated_path() {
  let server = MockServer::start().await;
  let payload = json!({"account": {"id": "id123", "name": "X"}});

  Mock::given(method("PUT"))
    .and(path("/accounts/id123"))
    .and(body_json(json!({"name": "X"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = AccountClient::new(&config_for(&server)).unwrap();
  let result = client.update_account("id123", obj(json!({"name": "X"}))).await;

  assert_eq!(result.success(), Some(&payload));
}

#[tokio::test]
async fn search_accounts_merges_pagination_with_overwrite() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/accounts/search"))
    .and(body_json(json!({
      "q_organization_name": "microsoft",
      "page": 3,
      "per_page": 50
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accounts": []})))
    .expect(1)
    .mount(&server)
    .await;

  let client = AccountClient::new(&config_for(&server)).unwrap();
  let result = client
    .search_accounts(
      obj(json!({"q_organization_name": "microsoft", "page": 7})),
      Some(3),
      Some(50),
    )
    .await;

  assert!(result.is_success());
}

#[tokio::test]
async fn bulk_update_account_stage_sends_ids_and_stage() {
  let server = MockServer::start().await;
  let ids = vec!["acc-1".to_string(), "acc-2".to_string()];

  Mock::given(method("POST"))
    .and(path("/accounts/bulk_update"))
    .and(body_json(json!({
      "account_ids": ["acc-1", "acc-2"],
      "account_stage_id": "stage-9"
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": 2})))
    .expect(1)
    .mount(&server)
    .await;

  let client = AccountClient::new(&config_for(&server)).unwrap();
  let result = client.bulk_update_account_stage(ids, "stage-9").await;

  assert!(result.is_success());
}

#[tokio::test]
async fn bulk_update_account_owner_sends_ids_and_owner() {
  let server = MockServer::start().await;
  let ids = vec!["acc-1".to_string()];

  Mock::given(method("POST"))
    .and(path("/accounts/update_owners"))
    .and(body_json(json!({
      "account_ids": ["acc-1"],
      "owner_id": "user-42"
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": 1})))
    .expect(1)
    .mount(&server)
    .await;

  let client = AccountClient::new(&config_for(&server)).unwrap();
  let result = client.bulk_update_account_owner(ids, "user-42").await;

  assert!(result.is_success());
}

#[tokio::test]
async fn list_account_stages_issues_bodiless_get() {
  let server = MockServer::start().await;
  let payload = json!({"account_stages": [{"id": "stage-1", "name": "Cold"}]});

  Mock::given(method("GET"))
    .and(path("/account_stages"))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = AccountClient::new(&config_for(&server)).unwrap();
  let result = client.list_account_stages().await;

  assert_eq!(result.success(), Some(&payload));

  let requests = server.received_requests().await.expect("request recording enabled");
  assert_eq!(requests.len(), 1);
  assert!(requests[0].body.is_empty());
}
