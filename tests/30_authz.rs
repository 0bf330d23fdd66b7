mod common;

use anyhow::Result;
use reqwest::StatusCode;
use uuid::Uuid;

use helpdesk_api::auth::{generate_jwt, Claims};
use helpdesk_api::database::models::{Field, Role};

// The test process and the spawned server share the development JWT secret,
// so tokens minted here are accepted by the server.
fn token_for(role: Role, field: Option<Field>) -> Result<String> {
    let claims = Claims::new(Uuid::new_v4(), "test-user".to_string(), role, field);
    Ok(generate_jwt(&claims)?)
}

#[tokio::test]
async fn valid_token_passes_verify() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/verify", server.base_url))
        .bearer_auth(token_for(Role::Employee, None)?)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], true);
    Ok(())
}

#[tokio::test]
async fn employee_cannot_use_technician_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = token_for(Role::Employee, None)?;

    // The queue needs a field on the account
    let res = client
        .get(format!("{}/api/technician/queue", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Everything else needs the technician role
    let res = client
        .get(format!("{}/api/technician/past-work", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .post(format!(
            "{}/api/technician/tickets/{}/claim",
            server.base_url,
            Uuid::new_v4()
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn claim_rejects_malformed_ticket_ids() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = token_for(Role::Technician, Some(Field::Hardware))?;

    let res = client
        .post(format!(
            "{}/api/technician/tickets/not-a-uuid/claim",
            server.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
