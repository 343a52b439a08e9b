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

//! Credentials supply the authentication headers attached to each request.
//!
//! Credential resolution and request signing are performed outside this
//! library: a provider hands back fully formed headers, and the transport
//! attaches them verbatim. The built-in providers cover the two cases the
//! client libraries need on their own: no authentication at all (local
//! endpoints, tests) and a fixed set of precomputed headers.

use crate::error::CredentialsError;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;

/// The result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [CredentialsProvider][dynamic::CredentialsProvider].
///
/// Represents a source of authentication headers. The type is cheap to clone;
/// clones share the underlying provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl Credentials {
    /// Returns the headers to attach to the next request.
    pub fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers()
    }
}

impl<T> From<T> for Credentials
where
    T: dynamic::CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        anonymous::Builder::new().build()
    }
}

pub mod dynamic {
    /// The trait implemented by every source of authentication headers.
    ///
    /// Implement this trait to plug an external signer or token source into
    /// the client libraries.
    pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
        /// Returns the headers to attach to the next request.
        fn headers(&self) -> super::Result<http::HeaderMap>;
    }
}

pub mod anonymous {
    //! Anonymous credentials attach no authentication headers.

    use super::*;

    #[derive(Debug)]
    struct AnonymousCredentials;

    impl dynamic::CredentialsProvider for AnonymousCredentials {
        fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }

    /// A builder for anonymous credentials.
    #[derive(Debug, Default)]
    pub struct Builder {}

    impl Builder {
        /// Creates a new builder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a [Credentials] instance.
        pub fn build(self) -> Credentials {
            AnonymousCredentials.into()
        }
    }
}

pub mod static_headers {
    //! Credentials built from a fixed set of precomputed headers.
    //!
    //! Useful when a hosting system performs request signing ahead of time,
    //! or when talking to endpoints that accept long-lived tokens.

    use super::*;

    #[derive(Debug)]
    struct StaticHeaders {
        headers: HeaderMap,
    }

    impl dynamic::CredentialsProvider for StaticHeaders {
        fn headers(&self) -> Result<HeaderMap> {
            Ok(self.headers.clone())
        }
    }

    /// A builder for static header credentials.
    #[derive(Debug, Default)]
    pub struct Builder {
        headers: Vec<(String, String)>,
    }

    impl Builder {
        /// Creates a new builder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds one header to the set.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.headers.push((name.into(), value.into()));
            self
        }

        /// Returns a [Credentials] instance.
        ///
        /// Fails if any of the configured names or values is not a valid
        /// HTTP header. This failure is never transient.
        pub fn build(self) -> Result<Credentials> {
            let mut headers = HeaderMap::new();
            for (name, value) in self.headers {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| CredentialsError::new(false, e))?;
                let value =
                    HeaderValue::from_str(&value).map_err(|e| CredentialsError::new(false, e))?;
                headers.insert(name, value);
            }
            Ok(StaticHeaders { headers }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_headers_are_empty() -> anyhow::Result<()> {
        let credentials = anonymous::Builder::new().build();
        assert!(credentials.headers()?.is_empty());
        Ok(())
    }

    #[test]
    fn default_is_anonymous() -> anyhow::Result<()> {
        let credentials = Credentials::default();
        assert!(credentials.headers()?.is_empty());
        Ok(())
    }

    #[test]
    fn static_headers() -> anyhow::Result<()> {
        let credentials = static_headers::Builder::new()
            .with_header("authorization", "test-only-signature")
            .with_header("x-amz-security-token", "test-only-token")
            .build()?;
        let headers = credentials.headers()?;
        assert_eq!(
            headers.get("authorization").map(|v| v.as_bytes()),
            Some(b"test-only-signature".as_slice())
        );
        assert_eq!(
            headers.get("x-amz-security-token").map(|v| v.as_bytes()),
            Some(b"test-only-token".as_slice())
        );
        Ok(())
    }

    #[test]
    fn static_headers_invalid_name() {
        let result = static_headers::Builder::new()
            .with_header("not a header name", "value")
            .build();
        let err = result.err().unwrap();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[test]
    fn static_headers_invalid_value() {
        let result = static_headers::Builder::new()
            .with_header("authorization", "bad\nvalue")
            .build();
        assert!(result.is_err(), "{result:?}");
    }
}
