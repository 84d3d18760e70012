//! Example usage of the requestable builder against a local echo endpoint

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method as AxumMethod};
use axum::response::Json;
use requestable::{BasicAuth, ContentType, HttpClient, Method, RequestableBuilder};
use serde_json::{Value, json};

async fn echo(method: AxumMethod, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let headers: BTreeMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(json!({
        "headers": headers,
        "method": method.as_str(),
        "data": String::from_utf8_lossy(&body),
    }))
}

async fn start_echo_server() -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, Router::new().fallback(echo)).await {
            eprintln!("echo server stopped: {e}");
        }
    });
    Ok(addr)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let addr = start_echo_server().await?;
    let base_url = format!("http://{addr}/echo");

    // One client, owned here, shared by every request below
    let client = HttpClient::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    println!("🔍 GET with bearer auth");
    let raw = RequestableBuilder::with_client(&base_url, &client)
        .bearer_auth("mytoken")
        .header("x-request-id", "demo-1")
        .debug()
        .build()?
        .send()
        .await?;
    println!("{}", String::from_utf8_lossy(&raw));

    println!("🔍 POST JSON with basic auth");
    let request = RequestableBuilder::with_client(&base_url, &client)
        .method(Method::POST)
        .auth(BasicAuth::new("bob", "haspassword"))
        .content_type(ContentType::ApplicationJson)
        .message(r#"{"key": "value"}"#)
        .build()?;
    let echoed: Value = serde_json::from_slice(&request.send().await?)?;
    println!("server saw method={} data={}", echoed["method"], echoed["data"]);

    println!("🔍 Ignored inputs and validation failures");
    let unchanged = RequestableBuilder::with_client(&base_url, &client)
        .header("", "ignored")
        .content_type("")
        .build()?;
    println!("headers after ignored setters: {}", unchanged.headers().len());

    match RequestableBuilder::new(&base_url, None).build() {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("expected failure: {e}"),
    }
    match RequestableBuilder::new("", Some(&client)).build() {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("expected failure: {e}"),
    }

    Ok(())
}
