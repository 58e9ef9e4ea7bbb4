use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use hostpool::body;
use hostpool::{ClientBuilder, ClientSettings, HeaderSet, TransportCache, header_set, new_client};
use http::{Method, Request, StatusCode, header};

async fn whoami(headers: HeaderMap) -> String {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("anonymous")
        .to_owned()
}

async fn echo(body: String) -> String {
    body
}

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route("/whoami", get(whoami))
        .route("/echo", post(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn text(response: hostpool::HttpResponse) -> String {
    let bytes = body::to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn injected_headers_reach_the_server() {
    let addr = serve().await;
    let cache = TransportCache::with_settings(ClientSettings::default());
    let base = format!("http://{addr}");

    let alice = ClientBuilder::new(&base)
        .cache(&cache)
        .bearer_auth("alice")
        .build()
        .unwrap();
    let bob = ClientBuilder::new(format!("{base}/other"))
        .cache(&cache)
        .bearer_auth("bob")
        .build()
        .unwrap();
    assert!(Arc::ptr_eq(alice.transport(), bob.transport()));

    let response = alice.get("/whoami").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, "Bearer alice");

    let response = bob.get("/whoami").await.unwrap();
    assert_eq!(text(response).await, "Bearer bob");

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().constructions, 1);
}

#[tokio::test]
async fn request_body_is_transmitted_and_original_survives() {
    let addr = serve().await;
    let cache = TransportCache::new();
    let client = cache
        .client(&format!("http://{addr}"), None, HeaderSet::new())
        .unwrap();

    let mut request = Request::builder()
        .method(Method::POST)
        .uri(format!("http://{addr}/echo"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(body::full("ping"))
        .unwrap();
    let response = client.send(&mut request).await.unwrap();

    assert_eq!(text(response).await, "ping");
    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.headers()[header::CONTENT_TYPE], "text/plain");
}

#[tokio::test]
async fn global_client_round_trip() {
    let addr = serve().await;
    let headers = header_set([("authorization", "Bearer global")]).unwrap();
    let client = new_client(&format!("http://{addr}"), None, Some(headers)).unwrap();

    let response = client.get("/whoami").await.unwrap();
    assert_eq!(text(response).await, "Bearer global");
    assert!(hostpool::global_cache().contains(&format!("http://{addr}/whoami")));
}

#[tokio::test]
async fn refused_connection_is_a_connect_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cache = TransportCache::new();
    let client = cache
        .client(&format!("http://{addr}"), None, HeaderSet::new())
        .unwrap();

    let err = client.get("/").await.unwrap_err();
    assert!(err.is_connect(), "{err:?}");
    assert_eq!(err.url().map(|u| u.port()), Some(Some(addr.port())));
}
