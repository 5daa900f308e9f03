//! Full HTTP round trips against a server bound to an ephemeral port, backed
//! by in-memory storage.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::auth::{ServerAuthConfig, ServerState, TOKEN_HEADER};
use server::{build_router, startup};
use service::auth::TokenService;
use service::storage::InMemoryAccountStorage;
use service::Account;

const SECRET: &str = "e2e-secret";

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::new(
        Arc::new(InMemoryAccountStorage::default()),
        TokenService::new(SECRET),
        ServerAuthConfig::default(),
    );
    let app = build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = startup::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_account_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/account", app.base_url))
        .json(&json!({"firstname": "Ada", "lastname": "Lovelace"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["balance"], 0);

    let res = c.get(format!("{}/account", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let all = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["number"], created["number"]);

    let token = TokenService::new(SECRET).issue(&Account::new("x", "y"))?;
    let res = c.get(format!("{}/account/1", app.base_url))
        .header(TOKEN_HEADER, token)
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["firstname"], "Ada");

    let res = c.delete(format!("{}/account/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Account with ID 1 deleted successfully");

    let res = c.get(format!("{}/account", app.base_url)).send().await?;
    assert!(res.json::<Vec<serde_json::Value>>().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_protected_without_token_denied() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/account/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"error": "Token is Invalid"}));
    Ok(())
}

#[tokio::test]
async fn e2e_transfer_echo() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/transfer", app.base_url))
        .json(&json!({"toAccount": 5, "amount": 100}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"toAccount": 5, "amount": 100}));
    Ok(())
}
