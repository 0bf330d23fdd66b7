mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_rejects_missing_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "name": "", "email": "", "password": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["email"].is_string());
    Ok(())
}

#[tokio::test]
async fn register_rejects_technician_without_field_domain() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({
            "name": "Bob",
            "email": "bob@gmail.com",
            "password": "hunter2",
            "isTechnician": true
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn protected_routes_require_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for (method, path) in [
        ("POST", "/api/auth/verify"),
        ("POST", "/api/employee/get-tickets"),
        ("GET", "/api/technician/queue"),
        ("GET", "/api/technician/past-work"),
    ] {
        let url = format!("{}{}", server.base_url, path);
        let req = match method {
            "GET" => client.get(&url),
            _ => client.post(&url).json(&json!({})),
        };
        let res = req.send().await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, path);
    }
    Ok(())
}

#[tokio::test]
async fn rejects_malformed_bearer_tokens() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Not a bearer header at all
    let res = client
        .post(format!("{}/api/auth/verify", server.base_url))
        .header("Authorization", "Basic abc")
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Bearer, but not a JWT
    let res = client
        .post(format!("{}/api/auth/verify", server.base_url))
        .bearer_auth("not.a.jwt")
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
