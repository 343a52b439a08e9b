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

//! AWS Client Libraries for Rust - Amazon Cognito Identity Provider
//!
//! Amazon Cognito Identity Provider manages user pools: directories of users
//! with sign-up and sign-in flows. This crate implements the MFA-preference
//! operations of the `2016-04-18` API.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use aws_cloud_cognitoidentityprovider_v20160418::client::CognitoIdentityProvider;
//! use aws_cloud_cognitoidentityprovider_v20160418::model::{
//!     SetUserMfaPreferenceInput, SoftwareTokenMfaSettingsType,
//! };
//!
//! let client = CognitoIdentityProvider::new(Default::default());
//! client
//!     .set_user_mfa_preference(
//!         SetUserMfaPreferenceInput::new()
//!             .set_access_token("eyJra...")
//!             .set_software_token_mfa_settings(
//!                 SoftwareTokenMfaSettingsType::new()
//!                     .set_enabled(true)
//!                     .set_preferred_mfa(true),
//!             ),
//!     )
//!     .await?;
//! # gax::Result::<()>::Ok(()) });
//! ```

/// The client for the service.
pub mod client;

/// The messages that are part of this client library.
pub mod model;

pub use client::CognitoIdentityProvider;
