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

//! Verifies the request assembly and response handling of the client.

use aws_cloud_dynamodb_v20120810::client::DynamoDb;
use aws_cloud_dynamodb_v20120810::model::{AttributeValue, DeleteItemInput, DescribeLimitsInput};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

fn test_client(server: &Server) -> DynamoDb {
    let config = gaxi::options::ClientConfig::new().set_endpoint(format!("http://{}", server.addr()));
    DynamoDb::new(config)
}

#[tokio::test]
async fn delete_item() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/"),
            request::headers(contains(("x-amz-target", "DynamoDB_20120810.DeleteItem"))),
            request::headers(contains(("content-type", "application/x-amz-json-1.0"))),
            request::body(json_decoded(eq(json!({
                "TableName": "Orders",
                "Key": {"OrderId": {"S": "o-1234"}},
                "ReturnValues": "ALL_OLD",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "Attributes": {"Status": {"S": "SHIPPED"}},
            "ConsumedCapacity": {"TableName": "Orders", "CapacityUnits": 1.0},
        }))),
    );

    let client = test_client(&server);
    let output = client
        .delete_item(
            DeleteItemInput::new()
                .set_table_name("Orders")
                .set_key([("OrderId", "o-1234")])
                .set_return_values("ALL_OLD"),
        )
        .await?;
    assert_eq!(
        output.attributes.get("Status"),
        Some(&AttributeValue::new().set_s("SHIPPED"))
    );
    let capacity = output.consumed_capacity.unwrap();
    assert_eq!(capacity.table_name.as_deref(), Some("Orders"));
    assert_eq!(capacity.capacity_units, Some(1.0));
    Ok(())
}

#[tokio::test]
async fn describe_limits_sends_literal_empty_object() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/"),
            request::headers(contains((
                "x-amz-target",
                "DynamoDB_20120810.DescribeLimits"
            ))),
            // The body is the literal two-character empty object, not absent.
            request::body("{}"),
        ])
        .respond_with(json_encoded(json!({
            "AccountMaxReadCapacityUnits": 80000,
            "AccountMaxWriteCapacityUnits": 80000,
            "TableMaxReadCapacityUnits": 40000,
            "TableMaxWriteCapacityUnits": 40000,
        }))),
    );

    let client = test_client(&server);
    let output = client.describe_limits(DescribeLimitsInput::new()).await?;
    assert_eq!(output.account_max_read_capacity_units, Some(80000));
    assert_eq!(output.table_max_write_capacity_units, Some(40000));
    Ok(())
}

#[tokio::test]
async fn binary_attributes_round_trip() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/")).respond_with(json_encoded(
            json!({"Attributes": {"Payload": {"B": "aGVsbG8="}}}),
        )),
    );

    let client = test_client(&server);
    let output = client
        .delete_item(
            DeleteItemInput::new()
                .set_table_name("Orders")
                .set_key([("OrderId", "o-1234")]),
        )
        .await?;
    let payload = output.attributes.get("Payload").unwrap();
    assert_eq!(
        payload.b.as_ref().map(|b| b.as_ref()),
        Some(b"hello".as_slice())
    );
    Ok(())
}

#[tokio::test]
async fn binding_errors_are_raised_before_any_io() {
    // Nothing listens on this endpoint; an invalid input must fail before
    // the transport is involved.
    let config = gaxi::options::ClientConfig::new().set_endpoint("http://127.0.0.1:1");
    let client = DynamoDb::new(config);
    let err = client
        .delete_item(DeleteItemInput::new().set_table_name("Orders"))
        .await
        .err()
        .unwrap();
    assert!(err.is_binding(), "{err:?}");
}

#[tokio::test]
async fn service_errors_surface_status_and_payload() -> anyhow::Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/")).respond_with(
            status_code(400)
                .body(r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException"}"#),
        ),
    );

    let client = test_client(&server);
    let err = client
        .delete_item(
            DeleteItemInput::new()
                .set_table_name("NoSuchTable")
                .set_key([("OrderId", "o-1234")]),
        )
        .await
        .err()
        .unwrap();
    assert_eq!(err.http_status_code(), Some(400));
    let payload = err.http_payload().unwrap();
    assert!(
        payload
            .windows(b"ResourceNotFoundException".len())
            .any(|w| w == b"ResourceNotFoundException"),
        "unexpected payload {payload:?}"
    );
    Ok(())
}
