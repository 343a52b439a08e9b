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

//! AWS Client Libraries for Rust - Amazon DynamoDB
//!
//! Amazon DynamoDB is a fully managed NoSQL database service. This crate
//! implements the item write operations of the `2012-08-10` API.
//!
//! Requests are modeled as input messages: plain mutable records configured
//! through chained setters. An input message accepts any combination of
//! fields; required fields and enum values are validated when the operation
//! is invoked, immediately before the request is sent.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use aws_cloud_dynamodb_v20120810::client::DynamoDb;
//! use aws_cloud_dynamodb_v20120810::model::DeleteItemInput;
//!
//! let client = DynamoDb::new(Default::default());
//! let output = client
//!     .delete_item(
//!         DeleteItemInput::new()
//!             .set_table_name("Orders")
//!             .set_key([("OrderId", "o-1234")]),
//!     )
//!     .await?;
//! println!("{output:?}");
//! # gax::Result::<()>::Ok(()) });
//! ```

/// The client for the service.
pub mod client;

/// The messages and enums that are part of this client library.
pub mod model;

pub use client::DynamoDb;
