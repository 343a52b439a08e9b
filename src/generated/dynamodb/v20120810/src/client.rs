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

const DEFAULT_HOST: &str = "https://dynamodb.us-east-1.amazonaws.com";

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    gaxi::api::UserAgent {
        name: "dynamodb",
        version: env!("CARGO_PKG_VERSION"),
    }
    .header_value()
});

/// Implements a client for Amazon DynamoDB.
///
/// Every operation takes an input message, validates it, and sends it as a
/// `POST` to the service root, selecting the remote operation with the
/// `X-Amz-Target` header. Input messages that fail validation (a required
/// field left unset, an unknown enum value) are reported as
/// [binding errors][gax::error::Error::is_binding] before any I/O takes
/// place.
///
/// The client is cheap to clone; clones share the connection pool.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// use aws_cloud_dynamodb_v20120810::client::DynamoDb;
/// use aws_cloud_dynamodb_v20120810::model::PutItemInput;
///
/// let client = DynamoDb::new(Default::default());
/// client
///     .put_item(
///         PutItemInput::new()
///             .set_table_name("Orders")
///             .set_item([("OrderId", "o-1234"), ("Status", "SHIPPED")]),
///     )
///     .await?;
/// # gax::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct DynamoDb {
    inner: gaxi::http::ReqwestClient,
}

impl DynamoDb {
    /// Creates a new client from the given configuration.
    ///
    /// With a default configuration the client targets the `us-east-1`
    /// public endpoint with anonymous credentials. Use
    /// [ClientConfig][gaxi::options::ClientConfig] to target a different
    /// region, a local emulator, or to attach authentication headers.
    pub fn new(config: gaxi::options::ClientConfig) -> Self {
        Self {
            inner: gaxi::http::ReqwestClient::new(config, DEFAULT_HOST),
        }
    }

    /// Deletes a single item in a table by primary key.
    ///
    /// You can perform a conditional delete operation that deletes the item
    /// if it exists, or if it has an expected attribute value.
    pub async fn delete_item(
        &self,
        req: model::DeleteItemInput,
    ) -> gax::Result<model::DeleteItemOutput> {
        self.inner
            .execute(
                gaxi::api::ApiOperation::new("DynamoDB_20120810.DeleteItem", gaxi::api::AWS_JSON_1_0),
                req.request_body()?,
                &USER_AGENT,
            )
            .await
    }

    /// Returns the current provisioned-capacity quotas for your account, in
    /// the current Region.
    pub async fn describe_limits(
        &self,
        req: model::DescribeLimitsInput,
    ) -> gax::Result<model::DescribeLimitsOutput> {
        self.inner
            .execute(
                gaxi::api::ApiOperation::new(
                    "DynamoDB_20120810.DescribeLimits",
                    gaxi::api::AWS_JSON_1_0,
                ),
                req.request_body()?,
                &USER_AGENT,
            )
            .await
    }

    /// Creates a new item, or replaces an old item with a new item.
    ///
    /// If an item that has the same primary key as the new item already
    /// exists in the specified table, the new item completely replaces the
    /// existing item.
    pub async fn put_item(&self, req: model::PutItemInput) -> gax::Result<model::PutItemOutput> {
        self.inner
            .execute(
                gaxi::api::ApiOperation::new("DynamoDB_20120810.PutItem", gaxi::api::AWS_JSON_1_0),
                req.request_body()?,
                &USER_AGENT,
            )
            .await
    }

    /// Edits an existing item's attributes, or adds a new item to the table
    /// if it does not already exist.
    pub async fn update_item(
        &self,
        req: model::UpdateItemInput,
    ) -> gax::Result<model::UpdateItemOutput> {
        self.inner
            .execute(
                gaxi::api::ApiOperation::new("DynamoDB_20120810.UpdateItem", gaxi::api::AWS_JSON_1_0),
                req.request_body()?,
                &USER_AGENT,
            )
            .await
    }
}
