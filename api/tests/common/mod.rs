//! In-process harness: every test gets its own disposable store and router,
//! seeds it explicitly, and drops the data when done.

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use posts_api::{
    AppState, Config, fixtures,
    models::Post,
    store::{MemoryStore, PostStore},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    router: Router,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::spawn_with(&Config::default())
    }

    pub fn spawn_with(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let router = posts_api::app(AppState::new(store.clone()), config);
        Self { store, router }
    }

    /// Insert `count` randomly generated posts.
    pub async fn seed(&self, count: usize) -> Vec<Post> {
        self.store
            .insert_many(fixtures::random_posts(count))
            .await
            .expect("seeding failed")
    }

    /// Drop every document and confirm the store is empty.
    pub async fn teardown(self) {
        self.store.drop_all().await.expect("teardown failed");
        assert_eq!(self.store.count().await.unwrap(), 0);
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}
