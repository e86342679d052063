/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use futures::future::BoxFuture;
use log::{debug, trace, warn};
use num_enum::TryFromPrimitive;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com";

// Version prefix every relative endpoint is resolved against
pub(crate) const API_VERSION_PATH: &str = "/3/";

/// Request body (POST/DELETE) or query parameters (GET) sent with a request.
pub type Payload = Map<String, Value>;

/// Serializes request properties into a [`Payload`], dropping unset fields
pub(crate) fn to_payload<T: Serialize>(props: &T) -> Result<Payload, ImgurError> {
    match serde_json::to_value(props)? {
        Value::Object(map) => Ok(map),
        _ => Err(ImgurError::JsonSerialization(
            "Request properties are not a JSON object".to_string(),
        )),
    }
}

// Unwraps a response that is expected to be a list
pub(crate) fn into_array(json: Value) -> Result<Vec<Value>, ImgurError> {
    match json {
        Value::Array(items) => Ok(items),
        _ => Err(ImgurError::ResponseMissing()),
    }
}

/// A fully resolved request handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub payload: Option<Payload>,
    /// Value for the `Authorization` header
    pub authorization: String,
}

/// Sends requests to the API and returns the decoded `data` member of the response.
///
/// [`HttpTransport`] is the default. Alternate implementations can be handed to
/// [`Client::with_transport`](crate::v3::Client::with_transport).
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, ImgurError>>;
}

/// Directly communicates with the API over HTTPS.
#[derive(Default, Clone)]
pub struct HttpTransport {
    https_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value, ImgurError> {
        debug!("{} {}", request.method, request.url);
        let ApiRequest {
            method,
            mut url,
            payload,
            authorization,
        } = request;

        let mut body = None;
        if let Some(payload) = payload {
            trace!("payload keys: {:?}", payload.keys().collect::<Vec<_>>());
            if method == Method::GET {
                let mut pairs = url.query_pairs_mut();
                for (k, v) in payload {
                    pairs.append_pair(&k, &query_value(v));
                }
            } else {
                body = Some(serde_json::to_vec(&payload)?);
            }
        }

        let mut builder = self
            .https_client
            .request(method, url)
            .header("Accept", "application/json")
            .header("Authorization", authorization);
        if let Some(body) = body {
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        // Rate limit headers are left alone; the service stopped reliably sending them
        let resp = builder.send().await?;
        let http_status = resp.status();
        let body = resp.text().await?;

        match serde_json::from_str::<ResponseBody>(&body) {
            Ok(body) => body.into_data(),
            Err(err) if !http_status.is_success() => {
                warn!("Api error {} with unparsable body: {:?}", http_status, err);
                Err(ImgurError::ApiResponse(
                    http_status.as_u16(),
                    http_status.canonical_reason().unwrap_or_default().to_string(),
                ))
            }
            Err(err) => Err(ImgurError::Deserialization(err)),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, ImgurError>> {
        Box::pin(self.execute(request))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

// Query strings want bare strings rather than JSON encoded ones
fn query_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Status codes per the Imgur API docs
#[derive(Debug, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiStatusCodes {
    // Good Codes
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,

    // Failing Codes
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    TooManyRequests = 429,
    InternalServerError = 500,
    ServiceUnavailable = 503,
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
struct ResponseBody {
    #[serde(default)]
    data: Option<Value>,

    success: bool,

    status: u16,
}

impl ResponseBody {
    /// Determine if the status returned in the response body is ok based on Imgur API docs
    fn is_status_ok(&self) -> Result<bool, ImgurError> {
        use ApiStatusCodes as S;
        match ApiStatusCodes::try_from(self.status)? {
            S::Ok | S::Created | S::Accepted | S::NoContent => Ok(true),
            _ => Ok(false),
        }
    }

    fn into_data(self) -> Result<Value, ImgurError> {
        if !self.success || !self.is_status_ok()? {
            let msg = self
                .data
                .as_ref()
                .and_then(|d| d.get("error"))
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_default();
            warn!("Api response error {}: {}", self.status, msg);
            return Err(ImgurError::ApiResponse(self.status, msg));
        }
        self.data.ok_or(ImgurError::ResponseMissing())
    }
}
