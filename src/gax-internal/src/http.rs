// Copyright 2025 AWS Cloud Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use gax::Result;
use gax::error::Error;

/// The HTTP transport shared by the generated clients.
///
/// Holds the connection pool, the resolved endpoint, and the credentials.
/// One instance per service client; clones share the pool.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: gax::credentials::Credentials,
    endpoint: String,
}

impl ReqwestClient {
    /// Creates a transport from the client configuration.
    ///
    /// `default_endpoint` is used when the configuration does not override
    /// the endpoint. Endpoints are configured without a trailing slash; the
    /// operation path supplies it.
    pub fn new(config: crate::options::ClientConfig, default_endpoint: &str) -> Self {
        let inner = reqwest::Client::new();
        let cred = config.cred.unwrap_or_default();
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Self {
            inner,
            cred,
            endpoint,
        }
    }

    /// Sends one operation request and decodes the response.
    ///
    /// The body is the payload assembled by the input message. An empty
    /// payload is sent as the literal `{}`: the JSON protocols require a
    /// body on every request. Unsuccessful statuses are returned as
    /// [Error::http] with the status, headers, and payload preserved.
    pub async fn execute<O>(
        &self,
        operation: crate::api::ApiOperation,
        body: serde_json::Map<String, serde_json::Value>,
        user_agent: &str,
    ) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let body = if body.is_empty() {
            "{}".to_string()
        } else {
            serde_json::to_string(&body).map_err(Error::ser)?
        };
        let mut builder = self
            .inner
            .post(format!("{}{}", self.endpoint, operation.path))
            .header(reqwest::header::CONTENT_TYPE, operation.content_type)
            .header("x-amz-target", operation.target)
            .header(reqwest::header::USER_AGENT, user_agent);
        let auth_headers = self.cred.headers().map_err(Error::authentication)?;
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        tracing::debug!(
            operation = operation.target,
            body_bytes = body.len(),
            "sending operation request"
        );
        let response = builder
            .body(body)
            .send()
            .await
            .map_err(Self::map_send_error)?;
        tracing::debug!(
            operation = operation.target,
            status = response.status().as_u16(),
            "received operation response"
        );
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let payload = response.bytes().await.map_err(Error::io)?;
    Err(Error::http(status_code, headers, payload))
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body and throws an EOF error if we try to parse
    // it with serde_json.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let body = response.bytes().await.map_err(Error::io)?;
    match body {
        content if content.is_empty() && no_content_status => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}
