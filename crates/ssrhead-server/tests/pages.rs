//! Page endpoints, called directly and through the router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use ssrhead_core::HeadTag;
use ssrhead_server::{app_state::AppState, config, page, router};

fn state() -> AppState {
    let cfg = config::load_from_str(
        r#"
version: 1
server:
  lang: "fr"
  root_id: "app"
routes:
  - path: "/about"
    metadata:
      long_title: "About"
      description: "Who we are"
  - path: "/café"
    metadata:
      long_title: "Cafe"
"#,
    )
    .unwrap();
    AppState::new(cfg).unwrap()
}

#[tokio::test]
async fn document_uses_site_metadata_for_unknown_paths() {
    let html = page::document(State(state()), "/some/deep/link".parse().unwrap())
        .await
        .unwrap()
        .0;
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
    assert!(html.contains("<title>Server Side Rendering Starter Pack ⚡</title>"));
    assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">"#));
    assert!(html.contains("<div id=\"app\"></div>"));
    assert_eq!(html.matches("<title>").count(), 1);
    assert_eq!(html.matches("<meta ").count(), 8);
}

#[tokio::test]
async fn document_uses_route_override() {
    let st = state();
    for path in ["/about", "/about/"] {
        let html = page::document(State(st.clone()), path.parse().unwrap())
            .await
            .unwrap()
            .0;
        assert!(html.contains("<title>About ⚡</title>"), "{path}");
        assert!(html.contains(r#"<meta name="description" content="Who we are">"#));
        assert!(html.contains(r#"<meta name="author" content="SSR Starter Pack">"#));
    }
}

#[tokio::test]
async fn encoded_request_path_matches_decoded_route() {
    let st = state();
    let html = page::document(State(st.clone()), "/caf%C3%A9".parse().unwrap())
        .await
        .unwrap()
        .0;
    assert!(html.contains("<title>Cafe ⚡</title>"));

    let q = page::HeadQuery { path: Some("/café".into()) };
    let tags = page::head_json(State(st), Query(q)).await.unwrap().0;
    assert_eq!(tags[0], HeadTag::title("Cafe ⚡"));
}

#[tokio::test]
async fn non_utf8_request_path_is_rejected() {
    let err = page::document(State(state()), "/%FF%FE".parse().unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn head_json_defaults_to_root() {
    let tags = page::head_json(State(state()), Query(page::HeadQuery::default()))
        .await
        .unwrap()
        .0;
    assert_eq!(tags.len(), 9);
    assert_eq!(tags[0], HeadTag::title("Server Side Rendering Starter Pack ⚡"));
}

#[tokio::test]
async fn head_json_rejects_relative_path() {
    let q = page::HeadQuery { path: Some("about".into()) };
    let err = page::head_json(State(state()), Query(q)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn router_serves_document_and_health() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router::build_router(state());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let get = move |path: &'static str| async move {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(req.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8(buf).unwrap()
    };

    let resp = get("/about").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
    assert!(resp.contains("text/html"));
    assert!(resp.contains("<title>About ⚡</title>"));

    let resp = get("/caf%C3%A9").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
    assert!(resp.contains("<title>Cafe ⚡</title>"));

    let resp = get("/healthz").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
    assert!(resp.ends_with("ok"));

    let resp = get("/api/head?path=/about").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
    assert!(resp.contains(r#""kind":"title""#));
    assert!(resp.contains(r#""text":"About ⚡""#));

    let resp = get("/api/head?path=nope").await;
    assert!(resp.starts_with("HTTP/1.1 400"));
    assert!(resp.contains("BAD_REQUEST"));
}
