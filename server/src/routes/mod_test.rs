use super::*;
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let res = base_routes().oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let res = base_routes().oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let req = Request::builder().method(Method::POST).uri("/healthz").body(Body::empty()).unwrap();
    let res = base_routes().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn layers_preserve_status_with_and_without_compression() {
    for compression in [true, false] {
        let req = Request::builder()
            .uri("/healthz")
            .header("accept-encoding", "gzip")
            .body(Body::empty())
            .unwrap();
        let res = with_layers(base_routes(), compression).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "compression={compression}");
    }
}
