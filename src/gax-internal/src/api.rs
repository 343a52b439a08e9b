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

//! Wire constants for the AWS JSON protocols.

/// The `Content-Type` for services speaking the JSON 1.0 protocol.
pub const AWS_JSON_1_0: &str = "application/x-amz-json-1.0";

/// The `Content-Type` for services speaking the JSON 1.1 protocol.
pub const AWS_JSON_1_1: &str = "application/x-amz-json-1.1";

/// The fixed wire constants for one operation.
///
/// The JSON protocols route every operation through a single path (usually
/// the service root) with a fixed HTTP method, and select the remote
/// operation with the `X-Amz-Target` header. Generated clients create one of
/// these per RPC and hand it to
/// [ReqwestClient::execute][crate::http::ReqwestClient::execute].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApiOperation {
    /// The `X-Amz-Target` value, e.g. `DynamoDB_20120810.DeleteItem`.
    pub target: &'static str,
    /// The `Content-Type` value, one of the protocol constants above.
    pub content_type: &'static str,
    /// The request path, `/` for every operation modeled so far.
    pub path: &'static str,
}

impl ApiOperation {
    /// Creates the constants for one operation at the service root.
    pub const fn new(target: &'static str, content_type: &'static str) -> Self {
        Self {
            target,
            content_type,
            path: "/",
        }
    }
}

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize (via [std::sync::LazyLock]) the `User-Agent` header
/// value.
#[derive(Debug, PartialEq)]
pub struct UserAgent {
    /// The short service name, e.g. `dynamodb`.
    pub name: &'static str,
    /// The version of the generated crate.
    pub version: &'static str,
}

impl UserAgent {
    /// Format the struct as needed for the `User-Agent` header.
    pub fn header_value(&self) -> String {
        let gax_version = env!("CARGO_PKG_VERSION");
        format!(
            "aws-cloud-rust/{gax_version} {}/{}",
            self.name, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn operation() {
        let op = ApiOperation::new("DynamoDB_20120810.DeleteItem", AWS_JSON_1_0);
        assert_eq!(op.target, "DynamoDB_20120810.DeleteItem");
        assert_eq!(op.content_type, "application/x-amz-json-1.0");
        assert_eq!(op.path, "/");
    }

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(" ")
            .filter_map(|v| v.find('/').map(|i| v.split_at(i)))
            .map(|(k, v)| (k.to_string(), v[1..].to_string()))
            .collect()
    }

    #[test]
    fn user_agent() {
        let header = UserAgent {
            name: "dynamodb",
            version: "1.2.3",
        };
        let fields = breakdown(header.header_value().as_str());

        let got = fields.get("dynamodb").map(String::to_owned);
        assert_eq!(got.as_deref(), Some("1.2.3"));

        let got = fields.get("aws-cloud-rust").map(String::to_owned);
        assert_eq!(got.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    }
}
