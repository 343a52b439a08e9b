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

/// The client configuration for [crate::http::ReqwestClient].
///
/// Service clients accept one of these at construction time. Unset fields
/// fall back to the service defaults: the service's public regional endpoint
/// and anonymous credentials.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Overrides the service endpoint, e.g. to target a local emulator or a
    /// different region.
    pub endpoint: Option<String>,
    /// The source of authentication headers for each request.
    pub cred: Option<gax::credentials::Credentials>,
}

impl ClientConfig {
    /// Creates a configuration with all the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [endpoint][ClientConfig::endpoint].
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the [credentials][ClientConfig::cred].
    pub fn set_credentials<T: Into<gax::credentials::Credentials>>(mut self, v: T) -> Self {
        self.cred = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert!(config.endpoint.is_none());
        assert!(config.cred.is_none());
    }

    #[test]
    fn setters() {
        let config = ClientConfig::new()
            .set_endpoint("http://localhost:8000")
            .set_credentials(gax::credentials::anonymous::Builder::new().build());
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8000"));
        assert!(config.cred.is_some());
    }
}
