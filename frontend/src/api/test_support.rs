#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::{ApiClient, ApiError};
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    /// In-process stand-in for the HRMS API, wired into `ApiClient` by base URL.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        reply: Reply,
    }

    #[derive(Clone)]
    enum Reply {
        Respond(MockResponse),
        Fail(String),
    }

    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub content_type: Option<String>,
        pub body: Option<Value>,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    requests: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        pub fn client(&self) -> ApiClient {
            ApiClient::new_with_base_url(self.base_url())
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let reply = match then.failure {
                Some(message) => Reply::Fail(message),
                None => {
                    let response = match then.raw_body {
                        Some(raw) => MockResponse::raw(then.status.unwrap_or(200), raw),
                        None => MockResponse::json(
                            then.status.unwrap_or(200),
                            then.body.unwrap_or_else(|| serde_json::json!({})),
                        ),
                    };
                    Reply::Respond(response.delayed(then.delay))
                }
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                reply,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").requests.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.requests()
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path().to_string();
            let mut inner = self.inner.lock().map_err(|_| ApiError::network("mock lock"))?;

            inner.requests.push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                query: request.url().query().map(str::to_string),
                content_type: request
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .cloned();

            match route.map(|route| route.reply) {
                Some(Reply::Respond(response)) => Ok(response),
                Some(Reply::Fail(message)) => Err(ApiError::network(message)),
                None => Ok(MockResponse::json(
                    404,
                    serde_json::json!({ "detail": format!("No mock for {} {}", method, path) }),
                )),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw_body: Option<Vec<u8>>,
        failure: Option<String>,
        delay: Option<Duration>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, raw: &str) -> &mut Self {
            self.raw_body = Some(raw.as_bytes().to_vec());
            self
        }

        /// Replies only after `delay`, so later requests can overtake this one.
        pub fn delay(&mut self, delay: Duration) -> &mut Self {
            self.delay = Some(delay);
            self
        }

        pub fn network_error(&mut self, message: &str) -> &mut Self {
            self.failure = Some(message.to_string());
            self
        }
    }
}
