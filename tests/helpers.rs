/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use futures::future::BoxFuture;
use imgur::v3::{API_ORIGIN, ApiRequest, Client, Creds, ImgurError, Transport};
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Records every request and answers with canned `data` values keyed by
/// method and path. Unknown requests fail with a 404.
#[allow(dead_code)]
#[derive(Default)]
pub(crate) struct SpyTransport {
    responses: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<ApiRequest>>,
}

#[allow(dead_code)]
impl SpyTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, method: Method, path: &str, data: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(format!("{} {}", method, path), data);
    }

    pub(crate) fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Transport for SpyTransport {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, ImgurError>> {
        let key = format!("{} {}", request.method, request.url.path());
        let resp = self.responses.lock().unwrap().get(&key).cloned();
        self.calls.lock().unwrap().push(request);
        Box::pin(async move { resp.ok_or(ImgurError::ApiResponse(404, key)) })
    }
}

#[allow(dead_code)]
pub(crate) fn anonymous_client(spy: &Arc<SpyTransport>) -> Client {
    Client::with_transport(Creds::from_client_id("test-client"), API_ORIGIN, spy.clone())
}

#[allow(dead_code)]
pub(crate) fn authenticated_client(spy: &Arc<SpyTransport>) -> Client {
    Client::with_transport(
        Creds::from_access_token("test-client", "test-token"),
        API_ORIGIN,
        spy.clone(),
    )
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
