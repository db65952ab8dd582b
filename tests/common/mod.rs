//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use pagewiki::render::TemplateSet;
use pagewiki::{Shutdown, WikiConfig, WikiServer};
use tokio::net::TcpListener;

/// A running server and the handle that stops it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server storing pages in `data_dir` on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(data_dir: &Path) -> TestServer {
    let mut config = WikiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.storage.data_dir = data_dir.to_path_buf();
    start_with(config, TemplateSet::builtin().unwrap()).await
}

/// Start a server with explicit configuration and templates.
pub async fn start_with(config: WikiConfig, templates: TemplateSet) -> TestServer {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = WikiServer::new(config, templates);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
