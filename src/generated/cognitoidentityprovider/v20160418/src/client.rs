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

use crate::model;
use std::sync::LazyLock;

const DEFAULT_HOST: &str = "https://cognito-idp.us-east-1.amazonaws.com";

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    gaxi::api::UserAgent {
        name: "cognitoidentityprovider",
        version: env!("CARGO_PKG_VERSION"),
    }
    .header_value()
});

/// Implements a client for Amazon Cognito Identity Provider.
///
/// Every operation takes an input message, validates it, and sends it as a
/// `POST` to the service root, selecting the remote operation with the
/// `X-Amz-Target` header. This service speaks the JSON 1.1 protocol and uses
/// an unversioned target prefix.
///
/// The client is cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct CognitoIdentityProvider {
    inner: gaxi::http::ReqwestClient,
}

impl CognitoIdentityProvider {
    /// Creates a new client from the given configuration.
    pub fn new(config: gaxi::options::ClientConfig) -> Self {
        Self {
            inner: gaxi::http::ReqwestClient::new(config, DEFAULT_HOST),
        }
    }

    /// Sets a user's MFA preferences with administrator credentials.
    pub async fn admin_set_user_mfa_preference(
        &self,
        req: model::AdminSetUserMfaPreferenceInput,
    ) -> gax::Result<model::AdminSetUserMfaPreferenceOutput> {
        self.inner
            .execute(
                gaxi::api::ApiOperation::new(
                    "AWSCognitoIdentityProviderService.AdminSetUserMFAPreference",
                    gaxi::api::AWS_JSON_1_1,
                ),
                req.request_body()?,
                &USER_AGENT,
            )
            .await
    }

    /// Sets the MFA preferences of the user who owns the supplied access
    /// token.
    ///
    /// If a factor is activated for a user and preferred, Amazon Cognito
    /// challenges the user with that factor at sign-in.
    pub async fn set_user_mfa_preference(
        &self,
        req: model::SetUserMfaPreferenceInput,
    ) -> gax::Result<model::SetUserMfaPreferenceOutput> {
        self.inner
            .execute(
                gaxi::api::ApiOperation::new(
                    "AWSCognitoIdentityProviderService.SetUserMFAPreference",
                    gaxi::api::AWS_JSON_1_1,
                ),
                req.request_body()?,
                &USER_AGENT,
            )
            .await
    }
}
