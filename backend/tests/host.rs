use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use daanveer_host::{build_router, HostConfig, APK_DISPOSITION, APK_MIME, APK_ROUTE};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

const SHELL: &str = "<!DOCTYPE html><html><body>daanveer shell</body></html>";

struct Site {
    _dist: TempDir,
    config: HostConfig,
}

impl Site {
    fn new(with_apk: bool) -> Self {
        let dist = TempDir::new().unwrap();
        std::fs::write(dist.path().join("index.html"), SHELL).unwrap();
        std::fs::create_dir(dist.path().join("assets")).unwrap();
        std::fs::write(dist.path().join("assets/logo.svg"), "<svg></svg>").unwrap();

        let apk_path = dist.path().join("build/daanveer.apk");
        if with_apk {
            std::fs::create_dir(dist.path().join("build")).unwrap();
            std::fs::write(&apk_path, b"PK\x03\x04fake-apk").unwrap();
        }

        let config = HostConfig {
            dist_dir: dist.path().to_path_buf(),
            apk_path,
            addr: "127.0.0.1:0".parse().unwrap(),
        };
        Self { _dist: dist, config }
    }

    fn router(&self) -> Router {
        build_router(&self.config)
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn health_answers_ok() {
    let site = Site::new(true);
    let (status, _, body) = get(site.router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn client_routes_get_the_spa_shell() {
    let site = Site::new(true);
    for uri in ["/", "/privacy", "/features/local-discovery", "/features/does-not-exist"] {
        let (status, headers, body) = get(site.router(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, SHELL, "{uri}");
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}

#[tokio::test]
async fn existing_files_are_served_as_is() {
    let site = Site::new(true);
    let (status, headers, body) = get(site.router(), "/assets/logo.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<svg></svg>");
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}

#[tokio::test]
async fn apk_is_an_attachment_with_android_mime() {
    let site = Site::new(true);
    let (status, headers, body) = get(site.router(), APK_ROUTE).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], APK_MIME);
    assert_eq!(headers[header::CONTENT_DISPOSITION], APK_DISPOSITION);
    assert!(body.ends_with("fake-apk"));
}

#[tokio::test]
async fn missing_apk_is_not_found() {
    let site = Site::new(false);
    let (status, headers, _) = get(site.router(), APK_ROUTE).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers.get(header::CONTENT_DISPOSITION).is_none());
}
