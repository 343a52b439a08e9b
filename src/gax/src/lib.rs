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

//! AWS APIs helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the AWS Client Libraries for Rust. Applications interact
//! with these types through the generated service crates; only the error
//! types and the credentials facade are intended for direct use.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Credentials attach authentication headers to service requests.
pub mod credentials;

/// Implementation details shared by the generated clients.
#[doc(hidden)]
pub mod internal;
