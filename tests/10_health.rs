mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn root_reports_service_info() -> Result<()> {
    if !common::db_configured() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("success").and_then(|v| v.as_bool()).unwrap_or(false), "success flag false or missing: {}", body);
    assert_eq!(body["data"]["name"], "Property API (Rust)");
    assert!(body["data"]["endpoints"]["rental_properties"].is_string(), "missing endpoint listing: {}", body);

    Ok(())
}

#[tokio::test]
async fn health_reports_database_ok() -> Result<()> {
    if !common::db_configured() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK, "expected healthy database, got {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "ok");

    Ok(())
}
