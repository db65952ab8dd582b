//! End-to-end page lifecycle over a real socket.

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_save_then_view_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;
    let client = common::client();

    let res = client
        .post(server.url("/save/Foo"))
        .form(&[("body", "Hello, world")])
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/view/Foo");

    let res = client.get(server.url("/view/Foo")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await.unwrap();
    assert!(html.contains("Foo"));
    assert!(html.contains("Hello, world"));
}

#[tokio::test]
async fn test_view_absent_page_redirects_to_edit() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;

    let res = common::client()
        .get(server.url("/view/NoSuchPage"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/edit/NoSuchPage");
}

#[tokio::test]
async fn test_edit_absent_page_shows_empty_form() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;

    let res = common::client()
        .get(server.url("/edit/Fresh"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await.unwrap();
    assert!(html.contains("Editing Fresh"));
    assert!(html.contains("action=\"/save/Fresh\""));
    assert!(html.contains("cols=\"80\"></textarea>"));
}

#[tokio::test]
async fn test_edit_existing_page_prefills_body() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Notes.txt"), "a < b & c").unwrap();
    let server = common::start_server(dir.path()).await;

    let html = common::client()
        .get(server.url("/edit/Notes"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("a &lt; b &amp; c"));
}

#[tokio::test]
async fn test_second_save_wins() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;
    let client = common::client();

    for body in ["first version", "second"] {
        let res = client
            .post(server.url("/save/Draft"))
            .form(&[("body", body)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FOUND);
    }

    assert_eq!(std::fs::read(dir.path().join("Draft.txt")).unwrap(), b"second");
    let html = client
        .get(server.url("/view/Draft"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("second"));
    assert!(!html.contains("first version"));
}

#[tokio::test]
async fn test_round_trip_preserves_body_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;
    let client = common::client();

    let body = "line one\r\nline two\n\ttabbed  spaces ünïcödé &=+%";
    client
        .post(server.url("/save/Exact"))
        .form(&[("body", body)])
        .send()
        .await
        .unwrap();

    let on_disk = std::fs::read(dir.path().join("Exact.txt")).unwrap();
    assert_eq!(on_disk, body.as_bytes());
}

#[tokio::test]
async fn test_invalid_titles_are_404_and_touch_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;
    let client = common::client();

    for path in [
        "/view/has.dot",
        "/edit/has%20space",
        "/view/a/b",
        "/edit/..%2F..%2Fetc%2Fpasswd",
        "/nothing/here",
        "/",
    ] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
        assert!(res.text().await.unwrap().is_empty(), "{path}");
    }

    let res = client
        .post(server.url("/save/bad.name"))
        .form(&[("body", "x")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;

    let res = common::client()
        .get(server.url("/edit/Foo"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "trace-me");
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;
    let url = server.url("/edit/Foo");
    let client = common::client();

    assert!(client.get(&url).send().await.is_ok());

    drop(server);
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert!(client.get(&url).send().await.is_err());
}

#[tokio::test]
async fn test_multipart_save() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;
    let client = common::client();

    let form = reqwest::multipart::Form::new().text("body", "Hello, world");
    let res = client
        .post(server.url("/save/Upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/view/Upload");
    assert_eq!(std::fs::read(dir.path().join("Upload.txt")).unwrap(), b"Hello, world");
}

#[tokio::test]
async fn test_bodyless_post_saves_empty_page() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;

    let res = common::client()
        .post(server.url("/save/Empty"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/view/Empty");
    assert!(std::fs::read(dir.path().join("Empty.txt")).unwrap().is_empty());
}
