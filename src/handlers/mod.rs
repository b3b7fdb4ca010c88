pub mod health;
pub mod posts;
pub mod users;
pub mod video;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::services::stats::FixedUsageStats;
    use crate::services::video::MockVideoProvider;
    use crate::store::MemoryStore;
    use crate::{build_router, AppState};

    pub struct TestApp {
        pub router: Router,
        pub store: Arc<MemoryStore>,
    }

    /// Seeded store, instant mock video provider, 75 minutes of usage today.
    pub fn app() -> TestApp {
        let store = Arc::new(MemoryStore::seeded());
        let state = AppState {
            store: store.clone(),
            config: Arc::new(Config::default()),
            video: Arc::new(MockVideoProvider::new(Duration::ZERO)),
            usage_stats: Arc::new(FixedUsageStats {
                today_minutes: 75,
                weekly_average: 40,
            }),
        };
        TestApp {
            router: build_router(state),
            store,
        }
    }

    impl TestApp {
        pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            self.send_raw(method, uri, body.map(|json| json.to_string())).await
        }

        /// Send `body` verbatim as `application/json`, valid or not.
        pub async fn send_raw(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            let body = match body {
                Some(raw) => {
                    builder = builder.header(CONTENT_TYPE, "application/json");
                    Body::from(raw)
                }
                None => Body::empty(),
            };

            let response = self
                .router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap();

            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, json)
        }

        pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Method::GET, uri, None).await
        }

        pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
            self.send(Method::POST, uri, Some(body)).await
        }
    }
}
