use std::sync::Arc;

use auth::FixedClock;
use auth::SystemClock;
use auth::TokenCodec;
use auth::TokenIssuer;
use chrono::Duration;
use chrono::Utc;
use identity_service::domain::identity::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::directory::InMemoryDirectory;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over the in-memory directory
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub directory: Arc<InMemoryDirectory>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(InMemoryDirectory::new());
        let codec = Arc::new(TokenCodec::new(TEST_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&directory),
            codec,
            Arc::new(SystemClock),
            Duration::minutes(720),
            Duration::days(7),
        ));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            directory,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register an identity and return the token payload under `data`
    pub async fn register(&self, email: &str, name: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "email": email,
                "name": name,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    /// Craft an access token for `subject` that expired long ago, signed with
    /// the server's key
    pub fn expired_access_token(&self, subject: &str) -> String {
        let codec = Arc::new(TokenCodec::new(TEST_SECRET));
        let clock = Arc::new(FixedClock::new(Utc::now() - Duration::days(2)));
        let issuer = TokenIssuer::new(codec, clock, Duration::minutes(720), Duration::days(7));
        issuer
            .issue_access(subject)
            .expect("Failed to issue expired token")
    }
}
