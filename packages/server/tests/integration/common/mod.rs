use std::sync::Arc;

use reqwest::multipart;
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpListener;

use ::common::storage::filesystem::FilesystemArtifactStore;
use server::config::{AppConfig, CorsConfig, ServerConfig, StorageConfig};
use server::state::AppState;
use server::store::RecordStore;

/// A running application instance bound to an ephemeral port, backed by a
/// temp data directory that lives as long as the `TestApp`.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    _data_dir: TempDir,
}

pub struct TestResponse {
    pub status: u16,
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let data_dir = tempfile::tempdir().expect("create temp data dir");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec!["*".to_string()],
                    max_age: 3600,
                },
            },
            storage: StorageConfig {
                data_dir: data_dir.path().to_path_buf(),
            },
            public_base_url: "http://127.0.0.1:8000".to_string(),
        };

        let artifacts = FilesystemArtifactStore::new(config.uploads_dir())
            .await
            .expect("init artifact store");
        let records = RecordStore::open(config.db_path())
            .await
            .expect("open record store");

        let state = AppState {
            config: Arc::new(config),
            records: Arc::new(records),
            artifacts: Arc::new(artifacts),
        };
        let app = server::build_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });

        TestApp {
            address: format!("http://{addr}"),
            client: reqwest::Client::new(),
            _data_dir: data_dir,
        }
    }

    /// POST a multipart submission to `/process`.
    pub async fn process(&self, form: multipart::Form) -> TestResponse {
        let res = self
            .client
            .post(format!("{}/process", self.address))
            .multipart(form)
            .send()
            .await
            .expect("send /process request");
        let status = res.status().as_u16();
        let body = res.json::<Value>().await.unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.address))
            .send()
            .await
            .expect("send GET request")
    }
}

/// Submission form with only the required name field.
pub fn submission_form(name: &str) -> multipart::Form {
    multipart::Form::new().text("product_name", name.to_string())
}

pub fn file_part(filename: &str, data: &[u8]) -> multipart::Part {
    multipart::Part::bytes(data.to_vec()).file_name(filename.to_string())
}
