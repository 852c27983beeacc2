#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end intake flow: real router, real CRM client against a mock
//! server, in-memory `SQLite` backup store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use lead_intake::config::{ApiToken, CrmConfig, LeadIntakeConfig};
use lead_intake::infra::storage::entity::{self, Entity as FormSubmissionEntity};
use lead_intake::{LeadIntakeClientV1 as _, LeadIntakeError, LeadIntakeModule, ServedBy};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait};
use serde_json::{Value, json};
use tower::ServiceExt as _;

async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}

fn config(crm_base_url: String) -> LeadIntakeConfig {
    LeadIntakeConfig {
        crm: CrmConfig {
            api_base_url: crm_base_url,
            api_key: Some(ApiToken::new("integration-key")),
            timeout_ms: 5_000,
        },
        ..LeadIntakeConfig::default()
    }
}

fn payload() -> Value {
    json!({
        "firstName": "  Al ",
        "lastName": "Smith",
        "email": " A@B.com",
        "phone": "(330) 555-0100",
        "serviceType": "Drain Cleaning",
        "message": "My kitchen sink is clogged badly",
        "address": {"street": "1 Main St", "city": "Akron", "state": "OH", "zip": "44308"},
        "utmSource": "google",
        "utmCampaign": "spring-drains"
    })
}

fn post(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn rows(db: &DatabaseConnection) -> Vec<entity::Model> {
    FormSubmissionEntity::find().all(db).await.unwrap()
}

#[tokio::test]
async fn crm_lead_is_created_and_backed_up() {
    let crm = MockServer::start();
    let leads = crm.mock(|when, then| {
        when.method(POST)
            .path("/leads")
            .header("authorization", "Bearer integration-key");
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"id":"lead_777"}"#);
    });

    let db = memory_db().await;
    let module = LeadIntakeModule::init(&config(crm.base_url()), db.clone())
        .await
        .unwrap();
    let app = module.register_routes(Router::new());

    let response = app.oneshot(post(&payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["leadId"], "lead_777");

    leads.assert_calls(1);

    let rows = rows(&db).await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.form_type, "contact");
    assert_eq!(row.first_name, "Al");
    assert_eq!(row.email, "a@b.com");
    assert_eq!(row.phone, "3305550100");
    assert_eq!(row.service_interest, "Drain Cleaning");
    assert_eq!(row.preferred_contact, "phone");
    assert_eq!(row.source_page.as_deref(), Some("/contact"));
    assert_eq!(row.utm_source.as_deref(), Some("google"));
    assert_eq!(row.utm_medium, None);
    assert_eq!(row.utm_campaign.as_deref(), Some("spring-drains"));
    assert_eq!(row.crm_lead_id.as_deref(), Some("lead_777"));
}

#[tokio::test]
async fn crm_outage_falls_back_to_backup_row() {
    let crm = MockServer::start();
    let leads = crm.mock(|when, then| {
        when.method(POST).path("/leads");
        then.status(503).body("maintenance");
    });

    let db = memory_db().await;
    let module = LeadIntakeModule::init(&config(crm.base_url()), db.clone())
        .await
        .unwrap();
    let app = module.register_routes(Router::new());

    let response = app.oneshot(post(&payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json.get("leadId").is_none());

    leads.assert_calls(1);

    let rows = rows(&db).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].crm_lead_id, None);
}

#[tokio::test]
async fn invalid_submission_touches_nothing() {
    let crm = MockServer::start();
    let leads = crm.mock(|when, then| {
        when.method(POST).path("/leads");
        then.status(201).body(r#"{"id":"lead_777"}"#);
    });

    let db = memory_db().await;
    let module = LeadIntakeModule::init(&config(crm.base_url()), db.clone())
        .await
        .unwrap();
    let app = module.register_routes(Router::new());

    let mut body = payload();
    body["serviceType"] = json!("Pest Control");
    body["phone"] = json!("555-0100");

    let response = app.oneshot(post(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(
        json["errors"],
        json!([
            "A valid phone number is required (minimum 10 digits)",
            "Please select a valid service type"
        ])
    );

    leads.assert_calls(0);
    assert!(rows(&db).await.is_empty());
}

#[tokio::test]
async fn local_client_reports_served_by() {
    let crm = MockServer::start();
    crm.mock(|when, then| {
        when.method(POST).path("/leads");
        then.status(201).body(r#"{"id":"lead_888"}"#);
    });

    let db = memory_db().await;
    let module = LeadIntakeModule::init(&config(crm.base_url()), db)
        .await
        .unwrap();
    let client = module.client();

    let receipt = client.submit_contact(payload()).await.unwrap();
    assert_eq!(receipt.lead_id.as_deref(), Some("lead_888"));
    assert_eq!(receipt.served_by, ServedBy::Crm);

    let err = client.submit_contact(json!({})).await.unwrap_err();
    match err {
        LeadIntakeError::Validation { errors } => assert_eq!(errors.len(), 6),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_api_key_still_records_backup() {
    let db = memory_db().await;
    let mut cfg = LeadIntakeConfig::default();
    cfg.crm.api_key = None;

    let module = LeadIntakeModule::init(&cfg, db.clone()).await.unwrap();
    let receipt = module.client().submit_contact(payload()).await.unwrap();

    assert_eq!(receipt.served_by, ServedBy::Backup);
    assert_eq!(receipt.lead_id, None);
    assert_eq!(rows(&db).await.len(), 1);
}
