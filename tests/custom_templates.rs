//! Serving with templates loaded from a directory.

use pagewiki::render::TemplateSet;
use pagewiki::WikiConfig;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_templates_from_directory() {
    let data = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    std::fs::write(templates.path().join("view.html"), "<main>{{.Title}}|{{.Body}}</main>").unwrap();
    std::fs::write(templates.path().join("edit.html"), "<form>{{.Title}}</form>").unwrap();
    std::fs::write(data.path().join("Home.txt"), "welcome").unwrap();

    let mut config = WikiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.storage.data_dir = data.path().to_path_buf();
    let server = common::start_with(config, TemplateSet::load_dir(templates.path()).unwrap()).await;

    let res = common::client().get(server.url("/view/Home")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "<main>Home|welcome</main>");
}

#[test]
fn test_malformed_template_fails_before_serving() {
    let templates = tempfile::tempdir().unwrap();
    std::fs::write(templates.path().join("view.html"), "{{.Title}").unwrap();
    std::fs::write(templates.path().join("edit.html"), "{{.Body}}").unwrap();

    assert!(TemplateSet::load_dir(templates.path()).is_err());
}
