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

//! Verifies the validation and payload-assembly behavior of the input
//! messages.

use aws_cloud_dynamodb_v20120810::model::{
    AttributeValue, AttributeValueUpdate, DeleteItemInput, DescribeLimitsInput,
    ExpectedAttributeValue, PutItemInput, UpdateItemInput,
};
use gax::error::BindingError;
use serde_json::{Value, json};

fn as_value(payload: serde_json::Map<String, Value>) -> Value {
    Value::Object(payload)
}

#[test]
fn construction_never_validates() {
    // Every combination of fields is representable; nothing fails until the
    // request body is assembled.
    let input = DeleteItemInput::new();
    assert!(input.table_name.is_none());
    assert!(input.key.is_empty());
    assert!(input.expected.is_empty());
    assert!(input.expression_attribute_names.is_empty());
    assert!(input.expression_attribute_values.is_empty());
}

#[test]
fn missing_required_scalar() {
    let input = DeleteItemInput::new().set_key([("OrderId", "o-1234")]);
    let err = input.request_body().err().unwrap();
    assert!(err.is_binding(), "{err:?}");
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing("TableName", "DeleteItemInput"))
    );
}

#[test]
fn missing_required_map() {
    let input = DeleteItemInput::new().set_table_name("Orders");
    let err = input.request_body().err().unwrap();
    assert!(err.is_binding(), "{err:?}");
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing("Key", "DeleteItemInput"))
    );
}

#[test]
fn validation_is_fail_fast() {
    // Both TableName and Key are missing; only the first failure is
    // reported.
    let input = DeleteItemInput::new();
    let err = input.request_body().err().unwrap();
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing("TableName", "DeleteItemInput"))
    );
}

#[test]
fn unknown_enum_value_is_rejected() {
    let input = DeleteItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")])
        .set_return_values("MAYBE");
    let err = input.request_body().err().unwrap();
    assert!(err.is_binding(), "{err:?}");
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::invalid_enum_value(
            "ReturnValues",
            "DeleteItemInput",
            "MAYBE",
            "ReturnValue"
        ))
    );
}

#[test]
fn known_enum_value_is_copied_verbatim() -> anyhow::Result<()> {
    let input = DeleteItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")])
        .set_return_values("ALL_OLD");
    let got = as_value(input.request_body()?);
    assert_eq!(got["ReturnValues"], json!("ALL_OLD"));
    Ok(())
}

#[test]
fn enum_check_skipped_when_unset() -> anyhow::Result<()> {
    // Absent optional enums are not validated at all.
    let input = DeleteItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")]);
    let got = as_value(input.request_body()?);
    assert_eq!(got.get("ReturnValues"), None);
    Ok(())
}

#[test]
fn delete_item_full_payload() -> anyhow::Result<()> {
    let input = DeleteItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", AttributeValue::new().set_s("o-1234"))])
        .set_condition_expression("attribute_exists(#s)")
        .set_expression_attribute_names([("#s", "Status")])
        .set_expression_attribute_values([(":status", AttributeValue::new().set_s("SHIPPED"))])
        .set_return_values("ALL_OLD");
    let got = as_value(input.request_body()?);
    let want = json!({
        "TableName": "Orders",
        "Key": {"OrderId": {"S": "o-1234"}},
        "ConditionExpression": "attribute_exists(#s)",
        "ExpressionAttributeNames": {"#s": "Status"},
        "ExpressionAttributeValues": {":status": {"S": "SHIPPED"}},
        "ReturnValues": "ALL_OLD",
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn optional_fields_are_omitted_not_null() -> anyhow::Result<()> {
    // The payload contains exactly the fields that were set: no null-valued
    // members, no empty objects for the unset maps.
    let input = DeleteItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")]);
    let got = as_value(input.request_body()?);
    let want = json!({
        "TableName": "Orders",
        "Key": {"OrderId": {"S": "o-1234"}},
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn describe_limits_is_an_empty_object() -> anyhow::Result<()> {
    let got = DescribeLimitsInput::new().request_body()?;
    assert!(got.is_empty());
    assert_eq!(serde_json::to_string(&got)?, "{}");
    Ok(())
}

#[test]
fn put_item_requires_item() {
    let err = PutItemInput::new()
        .set_table_name("Orders")
        .request_body()
        .err()
        .unwrap();
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing("Item", "PutItemInput"))
    );
}

#[test]
fn put_item_payload() -> anyhow::Result<()> {
    let input = PutItemInput::new().set_table_name("Orders").set_item([
        ("OrderId", AttributeValue::new().set_s("o-1234")),
        ("Total", AttributeValue::new().set_n("88.35")),
        ("Gift", AttributeValue::new().set_boolean(false)),
    ]);
    let got = as_value(input.request_body()?);
    let want = json!({
        "TableName": "Orders",
        "Item": {
            "OrderId": {"S": "o-1234"},
            "Total": {"N": "88.35"},
            "Gift": {"BOOL": false},
        },
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn update_item_with_legacy_parameters() -> anyhow::Result<()> {
    let input = UpdateItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")])
        .set_attribute_updates([(
            "Status",
            AttributeValueUpdate::new()
                .set_value(AttributeValue::new().set_s("SHIPPED"))
                .set_action("PUT"),
        )])
        .set_expected([(
            "Status",
            ExpectedAttributeValue::new()
                .set_comparison_operator("EQ")
                .set_attribute_value_list([AttributeValue::new().set_s("PENDING")]),
        )]);
    let got = as_value(input.request_body()?);
    let want = json!({
        "TableName": "Orders",
        "Key": {"OrderId": {"S": "o-1234"}},
        "AttributeUpdates": {
            "Status": {"Value": {"S": "SHIPPED"}, "Action": "PUT"},
        },
        "Expected": {
            "Status": {
                "ComparisonOperator": "EQ",
                "AttributeValueList": [{"S": "PENDING"}],
            },
        },
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn nested_enum_error_names_the_value_object() {
    let err = UpdateItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")])
        .set_attribute_updates([("Status", AttributeValueUpdate::new().set_action("UPSERT"))])
        .request_body()
        .err()
        .unwrap();
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::invalid_enum_value(
            "Action",
            "AttributeValueUpdate",
            "UPSERT",
            "AttributeAction"
        ))
    );
}

#[test]
fn attribute_value_recursion() -> anyhow::Result<()> {
    let value = AttributeValue::new().set_m([
        ("Name", AttributeValue::new().set_s("gadget")),
        (
            "Tags",
            AttributeValue::new().set_l([
                AttributeValue::from("red"),
                AttributeValue::new().set_n("7"),
            ]),
        ),
        ("Archived", AttributeValue::new().set_null(true)),
    ]);
    let got = as_value(value.request_body()?);
    let want = json!({
        "M": {
            "Name": {"S": "gadget"},
            "Tags": {"L": [{"S": "red"}, {"N": "7"}]},
            "Archived": {"NULL": true},
        },
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn attribute_value_binary_members() -> anyhow::Result<()> {
    let value = AttributeValue::new()
        .set_b(bytes::Bytes::from_static(b"hello"))
        .set_bs([bytes::Bytes::from_static(b"a"), bytes::Bytes::from_static(b"b")]);
    let got = as_value(value.request_body()?);
    let want = json!({"B": "aGVsbG8=", "BS": ["YQ==", "Yg=="]});
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn attribute_value_factory_is_idempotent() {
    // Converting an already-constructed value is the identity.
    let value = AttributeValue::new().set_s("o-1234");
    let converted: AttributeValue = value.clone().into();
    assert_eq!(converted, value);

    // Raw data and pre-built values produce the same message.
    let from_raw = DeleteItemInput::new().set_key([("OrderId", "o-1234")]);
    let from_value = DeleteItemInput::new().set_key([("OrderId", value)]);
    assert_eq!(from_raw, from_value);
}

#[test]
fn attribute_value_conversions() {
    assert_eq!(AttributeValue::from("x").s.as_deref(), Some("x"));
    assert_eq!(AttributeValue::from(String::from("x")).s.as_deref(), Some("x"));
    assert_eq!(AttributeValue::from(true).boolean, Some(true));
}

#[test]
fn serialization_does_not_mutate() -> anyhow::Result<()> {
    let input = DeleteItemInput::new()
        .set_table_name("Orders")
        .set_key([("OrderId", "o-1234")]);
    let before = input.clone();
    let _ = input.request_body()?;
    assert_eq!(input, before);
    // The input can be serialized again with the same result.
    assert_eq!(input.request_body()?, before.request_body()?);
    Ok(())
}
