//! End-to-end tests for the `postapi` binary

use assert_cmd::Command;
use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use predicates::prelude::*;
use serde_json::json;
use std::sync::mpsc;

/// `postapi` with a clean environment in an empty directory
fn postapi(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("postapi").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("POSTAPI_CONFIG")
        .env_remove("POSTAPI_USER_ID")
        .env_remove("POSTAPI_API_BASE_URL")
        .env_remove("POSTAPI_TIMEOUT_SECS")
        .env_remove("POSTAPI_THEME")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Serve a tiny backend on a background runtime and return its base URL
fn spawn_backend() -> String {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let app = Router::new()
                .route(
                    "/api/projects",
                    get(|headers: HeaderMap| async move {
                        match headers.get("User-Id").and_then(|v| v.to_str().ok()) {
                            Some("u1") => Ok(Json(json!([{
                                "id": "p1",
                                "name": "Shop",
                                "slug": "shop",
                                "status": "DRAFT"
                            }]))),
                            _ => Err(StatusCode::UNAUTHORIZED),
                        }
                    }),
                )
                .route(
                    "/api/projects/slug/{slug}",
                    get(|Path(slug): Path<String>| async move {
                        if slug != "shop" {
                            return Err(StatusCode::NOT_FOUND);
                        }
                        Ok(Json(json!({"id": "p1", "name": "Shop", "slug": "shop"})))
                    }),
                )
                .route(
                    "/api/projects/{id}/resources",
                    get(|Path(id): Path<String>| async move {
                        Json(json!([{
                            "id": "r1",
                            "projectId": id,
                            "name": "Products",
                            "slug": "products",
                            "enabledMethods": ["GET", "DELETE"],
                            "mockData": [{"id": 1, "name": "Lamp"}],
                            "primaryKey": "id"
                        }]))
                    }),
                );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

// ----------------------------------------------------------------------------
// Local tools
// ----------------------------------------------------------------------------

#[test]
fn test_slug() {
    let dir = tempfile::tempdir().unwrap();
    postapi(&dir)
        .args(["slug", "My", "Cool", "API"])
        .assert()
        .success()
        .stdout("my-cool-api\n");
}

#[test]
fn test_routes() {
    let dir = tempfile::tempdir().unwrap();
    postapi(&dir)
        .args(["routes", "products", "--methods", "GET,GET_BY_ID,DELETE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/products/{id}"))
        .stdout(predicate::str::contains("DELETE"))
        .stdout(predicate::str::contains("POST").not());
}

#[test]
fn test_routes_rejects_unknown_method() {
    let dir = tempfile::tempdir().unwrap();
    postapi(&dir)
        .args(["routes", "products", "--methods", "GET,PATCH"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("PATCH"));
}

#[test]
fn test_snippet_put_fills_id() {
    let dir = tempfile::tempdir().unwrap();
    postapi(&dir)
        .args([
            "snippet",
            "--method",
            "PUT",
            "--url",
            "http://localhost:8080/api/shop/products/{id}",
            "--body",
            r#"{"name":"Lamp"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/products/1"))
        .stdout(predicate::str::contains("Lamp"))
        .stdout(predicate::str::contains("{id}").not());
}

#[test]
fn test_validate_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("products.json");
    std::fs::write(
        &good,
        r#"{"name":"Products","methods":["GET","POST"],"primaryKey":"sku","mockData":[{"sku":"A1","price":9.99}]}"#,
    )
    .unwrap();
    postapi(&dir)
        .arg("validate")
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("sku"));

    let bad = dir.path().join("broken.json");
    std::fs::write(&bad, r#"{"name":"Products","methods":["GET"],"mockData":{"sku":"A1"}}"#)
        .unwrap();
    postapi(&dir)
        .arg("validate")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid"));
}

#[test]
fn test_sample() {
    let dir = tempfile::tempdir().unwrap();
    let output = postapi(&dir)
        .args(["sample", "user", "--count", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

// ----------------------------------------------------------------------------
// Backend commands
// ----------------------------------------------------------------------------

#[test]
fn test_online_command_needs_user() {
    let dir = tempfile::tempdir().unwrap();
    postapi(&dir)
        .args(["projects", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("POSTAPI_USER_ID"));
}

#[test]
fn test_projects_list_against_backend() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_backend();
    postapi(&dir)
        .args(["--user", "u1", "--api-url", &base, "projects", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shop"))
        .stdout(predicate::str::contains("p1"));
}

#[test]
fn test_user_from_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_backend();
    std::fs::write(dir.path().join(".env"), format!("POSTAPI_USER_ID=u1\nPOSTAPI_API_BASE_URL={base}\n"))
        .unwrap();
    postapi(&dir)
        .args(["projects", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shop"));
}

#[test]
fn test_docs_is_public() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_backend();
    postapi(&dir)
        .args(["--api-url", &base, "docs", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shop API"))
        .stdout(predicate::str::contains(format!("{base}/api/shop/products")));

    postapi(&dir)
        .args(["--api-url", &base, "docs", "nope"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_resources_list_against_backend() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_backend();
    postapi(&dir)
        .args(["--user", "u1", "--api-url", &base, "resources", "list", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Products"))
        .stdout(predicate::str::contains("/products/{id}"));
}

#[test]
fn test_docs_slug_cannot_escape_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_backend();
    postapi(&dir)
        .args(["--api-url", &base, "docs", "../../projects"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Shop").not());
}
