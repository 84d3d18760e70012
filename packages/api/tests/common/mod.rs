//! Shared fixtures: a local echo endpoint and scripted transports.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::any;
use futures::{future, stream};
use http_body::Frame;
use http_body_util::{BodyExt, Full, StreamBody};
use requestable::error::BoxError;
use requestable::{ResponseBody, Transport, TransportFuture};
use serde::{Deserialize, Serialize};

pub type Outcome = Result<http::Response<ResponseBody>, BoxError>;

/// What the echo endpoint saw.
#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub headers: BTreeMap<String, Vec<String>>,
    pub method: String,
    pub data: String,
}

impl Echo {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name).map(|values| values.join(""))
    }
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in &headers {
        seen.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    Json(Echo {
        headers: seen,
        method: method.to_string(),
        data: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn fail() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_millis(500)).await;
    "finally"
}

/// Start the echo endpoint on an ephemeral port and return its base URL.
pub async fn spawn_echo_server() -> String {
    env_logger::try_init().ok();

    let app = Router::new()
        .route("/fail", any(fail))
        .route("/slow", any(slow))
        .fallback(echo);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind echo listener");
    let addr = listener.local_addr().expect("echo listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("echo server");
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

/// A request as a transport received it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: Method,
    pub uri: http::Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Answers 200 "ok" and keeps every request it was handed.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Recorder {
    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().expect("recorder lock").clone()
    }
}

impl Transport for Recorder {
    fn execute(&self, request: http::Request<Bytes>) -> TransportFuture {
        let (parts, body) = request.into_parts();
        self.seen.lock().expect("recorder lock").push(Seen {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });
        let body: ResponseBody = Full::new(Bytes::from_static(b"ok"))
            .map_err(|never| match never {})
            .boxed();
        let outcome: Outcome = Ok(http::Response::new(body));
        Box::pin(future::ready(outcome))
    }
}

/// Sends a response head, then fails partway through the body.
#[derive(Debug)]
pub struct BrokenBody;

impl Transport for BrokenBody {
    fn execute(&self, _request: http::Request<Bytes>) -> TransportFuture {
        let frames: Vec<Result<Frame<Bytes>, BoxError>> = vec![
            Ok(Frame::data(Bytes::from_static(b"partial"))),
            Err("stream interrupted".into()),
        ];
        let body: ResponseBody = StreamBody::new(stream::iter(frames)).boxed();
        let outcome: Outcome = Ok(http::Response::new(body));
        Box::pin(future::ready(outcome))
    }
}

/// Sends a response head and one chunk, then never finishes the body.
#[derive(Debug)]
pub struct StalledBody;

impl Transport for StalledBody {
    fn execute(&self, _request: http::Request<Bytes>) -> TransportFuture {
        let first: Result<Frame<Bytes>, BoxError> =
            Ok(Frame::data(Bytes::from_static(b"partial")));
        let frames = futures::StreamExt::chain(stream::iter([first]), stream::pending());
        let body: ResponseBody = StreamBody::new(frames).boxed();
        let outcome: Outcome = Ok(http::Response::new(body));
        Box::pin(future::ready(outcome))
    }
}
