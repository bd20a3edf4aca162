//! Integration tests for the enrichment endpoints against a mock server

use apollo_client::EnrichmentClient;
use apollo_core::{Config, FaultKind};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
  Config::default_with_key("test_key").with_base_url(server.uri())
}

fn obj(value: Value) -> Map<String, Value> {
  value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn enrich_person_returns_decoded_payload() {
  let server = MockServer::start().await;
  let payload = json!({"person": {"id": "fake-id", "name": "Test Person"}});
  let fields = json!({"first_name": "Test", "domain": "example.com"});

  Mock::given(method("POST"))
    .and(path("/people/match"))
    .and(header("x-api-key", "test_key"))
    .and(body_json(fields.clone()))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result = client.enrich_person(obj(fields), false, false).await;

  assert_eq!(result.success(), Some(&payload));
}

#[tokio::test]
async fn enrich_person_sends_reveal_flags_as_string_query_params() {
  let server = MockServer::start().await;
  let fields = json!({"first_name": "Tim", "domain": "apollo.io"});

  Mock::given(method("POST"))
    .and(path("/people/match"))
    .and(query_param("reveal_personal_emails", "true"))
    .and(query_param("reveal_phone_number", "false"))
    .and(body_json(fields.clone()))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"person": null})))
    .expect(1)
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result = client.enrich_person(obj(fields), true, false).await;

  assert!(result.is_success());
}

#[tokio::test]
async fn bulk_enrich_people_wraps_list_in_people_key() {
  let server = MockServer::start().await;
  let people = vec![
    json!({"first_name": "Alice", "domain": "example.com"}),
    json!({"first_name": "Bob", "domain": "example.org"}),
  ];
  let payload = json!({"matches": [{"person": "Person A"}, {"person": "Person B"}]});

  Mock::given(method("POST"))
    .and(path("/people/bulk_match"))
    .and(body_json(json!({"people": people.clone()})))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result = client.bulk_enrich_people(people).await;

  assert_eq!(result.success(), Some(&payload));
}

#[tokio::test]
async fn enrich_organization_sends_fields_verbatim() {
  let server = MockServer::start().await;
  let fields = json!({"domain": "fakeorg.com"});
  let payload = json!({"organization": {"id": "org-123", "name": "Fake Org"}});

  Mock::given(method("POST"))
    .and(path("/organizations/enrich"))
    .and(body_json(fields.clone()))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result = client.enrich_organization(obj(fields)).await;

  assert_eq!(result.success(), Some(&payload));
}

#[tokio::test]
async fn bulk_enrich_organizations_uses_configured_base_url() {
  let server = MockServer::start().await;
  let payload = json!({"organizations": [{"domain": "a.com"}, {"domain": "b.com"}]});

  Mock::given(method("POST"))
    .and(path("/organizations/bulk_enrich"))
    .and(body_json(json!({"domains": ["a.com", "b.com"]})))
    .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result =
    client.bulk_enrich_organizations(vec!["a.com".to_string(), "b.com".to_string()]).await;

  assert_eq!(result.success(), Some(&payload));
}

#[tokio::test]
async fn unreachable_server_folds_into_transport_failure() {
  let server = MockServer::start().await;
  let config = config_for(&server);
  drop(server);

  let client = EnrichmentClient::new(&config).unwrap();
  let result = client.enrich_organization(obj(json!({"domain": "example.com"}))).await;

  let failure = result.failure().expect("expected a failure");
  assert_eq!(failure.kind, FaultKind::Transport);
  assert!(!failure.message.is_empty());
}

#[tokio::test]
async fn non_json_body_folds_into_decode_failure() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/people/match"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result = client.enrich_person(Map::new(), false, false).await;

  let failure = result.failure().expect("expected a failure");
  assert_eq!(failure.kind, FaultKind::Decode);
  assert!(!failure.message.is_empty());
}

#[tokio::test]
async fn error_status_folds_into_remote_failure() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/organizations/enrich"))
    .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let result = client.enrich_organization(Map::new()).await;

  let failure = result.failure().expect("expected a failure");
  assert_eq!(failure.kind, FaultKind::Remote);
  assert!(failure.message.contains("500"));
}

#[tokio::test]
async fn failure_collapses_to_legacy_error_shape() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/people/bulk_match"))
    .respond_with(ResponseTemplate::new(422).set_body_string("missing people"))
    .mount(&server)
    .await;

  let client = EnrichmentClient::new(&config_for(&server)).unwrap();
  let value = client.bulk_enrich_people(vec![]).await.into_value();

  assert_eq!(value["error"], json!(true));
  assert!(!value["message"].as_str().unwrap().is_empty());
}
