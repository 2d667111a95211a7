#![allow(dead_code)]

use gismap_service::config::{DeepLinkConfig, GisMapConfig, ObservabilityConfig};
use gismap_service::services::Store;
use gismap_service::startup::Application;
use reqwest::Client;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Store,
    pub client: Client,
}

pub fn test_config() -> GisMapConfig {
    GisMapConfig {
        // Use random port for testing (port 0)
        common: CoreConfig { port: 0 },
        deep_link: DeepLinkConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);
        let store = app.store().clone();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers `name` and returns its id.
    pub async fn create_user(&self, name: &str) -> String {
        let response = self.post_json("/users", json!({ "name": name })).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["user"]["id"]
            .as_str()
            .expect("user id missing")
            .to_string()
    }

    pub async fn send(&self, sender_id: &str, user_ids: &[&str], message: &str) -> reqwest::Response {
        self.post_json(
            "/notifications",
            json!({ "senderId": sender_id, "userIds": user_ids, "message": message }),
        )
        .await
    }

    pub async fn inbox(&self, user_id: &str) -> Vec<Value> {
        let response = self.get(&format!("/notifications/{}", user_id)).await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Failed to parse response")
    }
}
