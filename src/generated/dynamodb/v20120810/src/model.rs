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

//! The messages and enums that are part of this client library.
//!
//! Input messages never validate their fields when constructed or mutated.
//! The validation happens in `request_body()`, as the operation is invoked:
//! required fields must be set (for map-valued fields, non-empty), and
//! enumerated fields must hold a value from their closed set of known
//! values. Optional fields that are unset, and map- or list-valued fields
//! that are empty, are omitted from the payload entirely.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use gax::error::{BindingError, Error};
use serde_json::Value;
use std::collections::HashMap;

/// Represents the input of a `DeleteItem` operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteItemInput {
    /// The name of the table from which to delete the item. Required.
    pub table_name: Option<String>,

    /// A map of attribute names to [AttributeValue] objects, representing
    /// the primary key of the item to delete. Required.
    ///
    /// For the primary key, you must provide all of the key attributes. For
    /// example, with a simple primary key, you only need to provide a value
    /// for the partition key. For a composite primary key, you must provide
    /// values for both the partition key and the sort key.
    pub key: HashMap<String, AttributeValue>,

    /// This is a legacy parameter. Use
    /// [condition_expression][DeleteItemInput::condition_expression] instead.
    pub expected: HashMap<String, ExpectedAttributeValue>,

    /// This is a legacy parameter. Use
    /// [condition_expression][DeleteItemInput::condition_expression] instead.
    pub conditional_operator: Option<ConditionalOperator>,

    /// Use `ReturnValues` if you want to get the item attributes as they
    /// appeared before they were deleted. For `DeleteItem`, the valid values
    /// are `NONE` (the default) and `ALL_OLD`.
    pub return_values: Option<ReturnValue>,

    /// Determines the level of detail about throughput consumption that is
    /// returned in the response.
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Determines whether item collection metrics are returned.
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,

    /// A condition that must be satisfied in order for a conditional
    /// `DeleteItem` to succeed.
    pub condition_expression: Option<String>,

    /// One or more substitution tokens for attribute names in an expression.
    pub expression_attribute_names: HashMap<String, String>,

    /// One or more values that can be substituted in an expression.
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl DeleteItemInput {
    /// Creates a new input with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][DeleteItemInput::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the [table_name][DeleteItemInput::table_name] field.
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(|x| x.into());
        self
    }

    /// Sets the [key][DeleteItemInput::key] field.
    pub fn set_key<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [expected][DeleteItemInput::expected] field.
    pub fn set_expected<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExpectedAttributeValue>,
    {
        self.expected = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [conditional_operator][DeleteItemInput::conditional_operator] field.
    pub fn set_conditional_operator<T: Into<ConditionalOperator>>(mut self, v: T) -> Self {
        self.conditional_operator = Some(v.into());
        self
    }

    /// Sets the [return_values][DeleteItemInput::return_values] field.
    pub fn set_return_values<T: Into<ReturnValue>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets the [return_consumed_capacity][DeleteItemInput::return_consumed_capacity] field.
    pub fn set_return_consumed_capacity<T: Into<ReturnConsumedCapacity>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets the [return_item_collection_metrics][DeleteItemInput::return_item_collection_metrics] field.
    pub fn set_return_item_collection_metrics<T: Into<ReturnItemCollectionMetrics>>(
        mut self,
        v: T,
    ) -> Self {
        self.return_item_collection_metrics = Some(v.into());
        self
    }

    /// Sets the [condition_expression][DeleteItemInput::condition_expression] field.
    pub fn set_condition_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.condition_expression = Some(v.into());
        self
    }

    /// Sets the [expression_attribute_names][DeleteItemInput::expression_attribute_names] field.
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [expression_attribute_values][DeleteItemInput::expression_attribute_values] field.
    pub fn set_expression_attribute_values<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Assembles the wire payload, verifying required fields and enumerated
    /// values.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        let v = self
            .table_name
            .as_ref()
            .ok_or_else(|| Error::binding(BindingError::missing("TableName", "DeleteItemInput")))?;
        payload.insert("TableName".into(), Value::from(v.clone()));
        if self.key.is_empty() {
            return Err(Error::binding(BindingError::missing(
                "Key",
                "DeleteItemInput",
            )));
        }
        let mut map = serde_json::Map::new();
        for (name, item) in &self.key {
            map.insert(name.clone(), Value::Object(item.request_body()?));
        }
        payload.insert("Key".into(), Value::Object(map));
        if !self.expected.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expected {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("Expected".into(), Value::Object(map));
        }
        if let Some(v) = &self.conditional_operator {
            payload.insert(
                "ConditionalOperator".into(),
                v.wire_name("ConditionalOperator", "DeleteItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_values {
            payload.insert(
                "ReturnValues".into(),
                v.wire_name("ReturnValues", "DeleteItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_consumed_capacity {
            payload.insert(
                "ReturnConsumedCapacity".into(),
                v.wire_name("ReturnConsumedCapacity", "DeleteItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_item_collection_metrics {
            payload.insert(
                "ReturnItemCollectionMetrics".into(),
                v.wire_name("ReturnItemCollectionMetrics", "DeleteItemInput")?
                    .into(),
            );
        }
        if let Some(v) = &self.condition_expression {
            payload.insert("ConditionExpression".into(), Value::from(v.clone()));
        }
        if !self.expression_attribute_names.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expression_attribute_names {
                map.insert(name.clone(), Value::from(item.clone()));
            }
            payload.insert("ExpressionAttributeNames".into(), Value::Object(map));
        }
        if !self.expression_attribute_values.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expression_attribute_values {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("ExpressionAttributeValues".into(), Value::Object(map));
        }
        Ok(payload)
    }
}

/// Represents the input of a `DescribeLimits` operation. Has no content.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeLimitsInput {}

impl DescribeLimitsInput {
    /// Creates a new input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        Ok(serde_json::Map::new())
    }
}

/// Represents the input of a `PutItem` operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutItemInput {
    /// The name of the table to contain the item. Required.
    pub table_name: Option<String>,

    /// A map of attribute name/value pairs, one for each attribute. Required.
    ///
    /// Only the primary key attributes are required; you can optionally
    /// provide other attribute name-value pairs for the item. If you specify
    /// any attributes that are part of an index key, then the data types for
    /// those attributes must match those of the schema in the table's
    /// attribute definition.
    pub item: HashMap<String, AttributeValue>,

    /// This is a legacy parameter. Use
    /// [condition_expression][PutItemInput::condition_expression] instead.
    pub expected: HashMap<String, ExpectedAttributeValue>,

    /// Use `ReturnValues` if you want to get the item attributes as they
    /// appeared before they were updated with the `PutItem` request. For
    /// `PutItem`, the valid values are `NONE` (the default) and `ALL_OLD`.
    pub return_values: Option<ReturnValue>,

    /// Determines the level of detail about throughput consumption that is
    /// returned in the response.
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Determines whether item collection metrics are returned.
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,

    /// This is a legacy parameter. Use
    /// [condition_expression][PutItemInput::condition_expression] instead.
    pub conditional_operator: Option<ConditionalOperator>,

    /// A condition that must be satisfied in order for a conditional
    /// `PutItem` operation to succeed.
    pub condition_expression: Option<String>,

    /// One or more substitution tokens for attribute names in an expression.
    pub expression_attribute_names: HashMap<String, String>,

    /// One or more values that can be substituted in an expression.
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl PutItemInput {
    /// Creates a new input with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][PutItemInput::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the [table_name][PutItemInput::table_name] field.
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(|x| x.into());
        self
    }

    /// Sets the [item][PutItemInput::item] field.
    pub fn set_item<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.item = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [expected][PutItemInput::expected] field.
    pub fn set_expected<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExpectedAttributeValue>,
    {
        self.expected = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [return_values][PutItemInput::return_values] field.
    pub fn set_return_values<T: Into<ReturnValue>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets the [return_consumed_capacity][PutItemInput::return_consumed_capacity] field.
    pub fn set_return_consumed_capacity<T: Into<ReturnConsumedCapacity>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets the [return_item_collection_metrics][PutItemInput::return_item_collection_metrics] field.
    pub fn set_return_item_collection_metrics<T: Into<ReturnItemCollectionMetrics>>(
        mut self,
        v: T,
    ) -> Self {
        self.return_item_collection_metrics = Some(v.into());
        self
    }

    /// Sets the [conditional_operator][PutItemInput::conditional_operator] field.
    pub fn set_conditional_operator<T: Into<ConditionalOperator>>(mut self, v: T) -> Self {
        self.conditional_operator = Some(v.into());
        self
    }

    /// Sets the [condition_expression][PutItemInput::condition_expression] field.
    pub fn set_condition_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.condition_expression = Some(v.into());
        self
    }

    /// Sets the [expression_attribute_names][PutItemInput::expression_attribute_names] field.
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [expression_attribute_values][PutItemInput::expression_attribute_values] field.
    pub fn set_expression_attribute_values<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Assembles the wire payload, verifying required fields and enumerated
    /// values.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        let v = self
            .table_name
            .as_ref()
            .ok_or_else(|| Error::binding(BindingError::missing("TableName", "PutItemInput")))?;
        payload.insert("TableName".into(), Value::from(v.clone()));
        if self.item.is_empty() {
            return Err(Error::binding(BindingError::missing("Item", "PutItemInput")));
        }
        let mut map = serde_json::Map::new();
        for (name, item) in &self.item {
            map.insert(name.clone(), Value::Object(item.request_body()?));
        }
        payload.insert("Item".into(), Value::Object(map));
        if !self.expected.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expected {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("Expected".into(), Value::Object(map));
        }
        if let Some(v) = &self.return_values {
            payload.insert(
                "ReturnValues".into(),
                v.wire_name("ReturnValues", "PutItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_consumed_capacity {
            payload.insert(
                "ReturnConsumedCapacity".into(),
                v.wire_name("ReturnConsumedCapacity", "PutItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_item_collection_metrics {
            payload.insert(
                "ReturnItemCollectionMetrics".into(),
                v.wire_name("ReturnItemCollectionMetrics", "PutItemInput")?
                    .into(),
            );
        }
        if let Some(v) = &self.conditional_operator {
            payload.insert(
                "ConditionalOperator".into(),
                v.wire_name("ConditionalOperator", "PutItemInput")?.into(),
            );
        }
        if let Some(v) = &self.condition_expression {
            payload.insert("ConditionExpression".into(), Value::from(v.clone()));
        }
        if !self.expression_attribute_names.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expression_attribute_names {
                map.insert(name.clone(), Value::from(item.clone()));
            }
            payload.insert("ExpressionAttributeNames".into(), Value::Object(map));
        }
        if !self.expression_attribute_values.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expression_attribute_values {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("ExpressionAttributeValues".into(), Value::Object(map));
        }
        Ok(payload)
    }
}

/// Represents the input of an `UpdateItem` operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateItemInput {
    /// The name of the table containing the item to update. Required.
    pub table_name: Option<String>,

    /// The primary key of the item to be updated. Required.
    pub key: HashMap<String, AttributeValue>,

    /// This is a legacy parameter. Use
    /// [update_expression][UpdateItemInput::update_expression] instead.
    pub attribute_updates: HashMap<String, AttributeValueUpdate>,

    /// This is a legacy parameter. Use
    /// [condition_expression][UpdateItemInput::condition_expression] instead.
    pub expected: HashMap<String, ExpectedAttributeValue>,

    /// This is a legacy parameter. Use
    /// [condition_expression][UpdateItemInput::condition_expression] instead.
    pub conditional_operator: Option<ConditionalOperator>,

    /// Use `ReturnValues` if you want to get the item attributes as they
    /// appear before or after they are updated.
    pub return_values: Option<ReturnValue>,

    /// Determines the level of detail about throughput consumption that is
    /// returned in the response.
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Determines whether item collection metrics are returned.
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,

    /// An expression that defines one or more attributes to be updated, the
    /// action to be performed on them, and new values for them.
    pub update_expression: Option<String>,

    /// A condition that must be satisfied in order for a conditional update
    /// to succeed.
    pub condition_expression: Option<String>,

    /// One or more substitution tokens for attribute names in an expression.
    pub expression_attribute_names: HashMap<String, String>,

    /// One or more values that can be substituted in an expression.
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl UpdateItemInput {
    /// Creates a new input with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][UpdateItemInput::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the [table_name][UpdateItemInput::table_name] field.
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(|x| x.into());
        self
    }

    /// Sets the [key][UpdateItemInput::key] field.
    pub fn set_key<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [attribute_updates][UpdateItemInput::attribute_updates] field.
    pub fn set_attribute_updates<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValueUpdate>,
    {
        self.attribute_updates = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [expected][UpdateItemInput::expected] field.
    pub fn set_expected<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExpectedAttributeValue>,
    {
        self.expected = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [conditional_operator][UpdateItemInput::conditional_operator] field.
    pub fn set_conditional_operator<T: Into<ConditionalOperator>>(mut self, v: T) -> Self {
        self.conditional_operator = Some(v.into());
        self
    }

    /// Sets the [return_values][UpdateItemInput::return_values] field.
    pub fn set_return_values<T: Into<ReturnValue>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets the [return_consumed_capacity][UpdateItemInput::return_consumed_capacity] field.
    pub fn set_return_consumed_capacity<T: Into<ReturnConsumedCapacity>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets the [return_item_collection_metrics][UpdateItemInput::return_item_collection_metrics] field.
    pub fn set_return_item_collection_metrics<T: Into<ReturnItemCollectionMetrics>>(
        mut self,
        v: T,
    ) -> Self {
        self.return_item_collection_metrics = Some(v.into());
        self
    }

    /// Sets the [update_expression][UpdateItemInput::update_expression] field.
    pub fn set_update_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.update_expression = Some(v.into());
        self
    }

    /// Sets the [condition_expression][UpdateItemInput::condition_expression] field.
    pub fn set_condition_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.condition_expression = Some(v.into());
        self
    }

    /// Sets the [expression_attribute_names][UpdateItemInput::expression_attribute_names] field.
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [expression_attribute_values][UpdateItemInput::expression_attribute_values] field.
    pub fn set_expression_attribute_values<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Assembles the wire payload, verifying required fields and enumerated
    /// values.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        let v = self
            .table_name
            .as_ref()
            .ok_or_else(|| Error::binding(BindingError::missing("TableName", "UpdateItemInput")))?;
        payload.insert("TableName".into(), Value::from(v.clone()));
        if self.key.is_empty() {
            return Err(Error::binding(BindingError::missing(
                "Key",
                "UpdateItemInput",
            )));
        }
        let mut map = serde_json::Map::new();
        for (name, item) in &self.key {
            map.insert(name.clone(), Value::Object(item.request_body()?));
        }
        payload.insert("Key".into(), Value::Object(map));
        if !self.attribute_updates.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.attribute_updates {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("AttributeUpdates".into(), Value::Object(map));
        }
        if !self.expected.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expected {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("Expected".into(), Value::Object(map));
        }
        if let Some(v) = &self.conditional_operator {
            payload.insert(
                "ConditionalOperator".into(),
                v.wire_name("ConditionalOperator", "UpdateItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_values {
            payload.insert(
                "ReturnValues".into(),
                v.wire_name("ReturnValues", "UpdateItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_consumed_capacity {
            payload.insert(
                "ReturnConsumedCapacity".into(),
                v.wire_name("ReturnConsumedCapacity", "UpdateItemInput")?.into(),
            );
        }
        if let Some(v) = &self.return_item_collection_metrics {
            payload.insert(
                "ReturnItemCollectionMetrics".into(),
                v.wire_name("ReturnItemCollectionMetrics", "UpdateItemInput")?
                    .into(),
            );
        }
        if let Some(v) = &self.update_expression {
            payload.insert("UpdateExpression".into(), Value::from(v.clone()));
        }
        if let Some(v) = &self.condition_expression {
            payload.insert("ConditionExpression".into(), Value::from(v.clone()));
        }
        if !self.expression_attribute_names.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expression_attribute_names {
                map.insert(name.clone(), Value::from(item.clone()));
            }
            payload.insert("ExpressionAttributeNames".into(), Value::Object(map));
        }
        if !self.expression_attribute_values.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.expression_attribute_values {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("ExpressionAttributeValues".into(), Value::Object(map));
        }
        Ok(payload)
    }
}

/// Represents the output of a `DeleteItem` operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteItemOutput {
    /// A map of attribute names to [AttributeValue] objects, representing
    /// the item as it appeared before it was deleted. Only present if
    /// `ReturnValues` was `ALL_OLD` in the request.
    #[serde(rename = "Attributes")]
    pub attributes: HashMap<String, AttributeValue>,

    /// The capacity units consumed by the operation.
    #[serde(rename = "ConsumedCapacity")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl DeleteItemOutput {
    /// Creates a new output with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [attributes][DeleteItemOutput::attributes] field.
    pub fn set_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [consumed_capacity][DeleteItemOutput::consumed_capacity] field.
    pub fn set_consumed_capacity<T: Into<ConsumedCapacity>>(mut self, v: T) -> Self {
        self.consumed_capacity = Some(v.into());
        self
    }
}

/// Represents the output of a `DescribeLimits` operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeLimitsOutput {
    /// The maximum total read capacity units that your account allows you to
    /// provision across all of your tables in this Region.
    #[serde(rename = "AccountMaxReadCapacityUnits")]
    pub account_max_read_capacity_units: Option<i64>,

    /// The maximum total write capacity units that your account allows you
    /// to provision across all of your tables in this Region.
    #[serde(rename = "AccountMaxWriteCapacityUnits")]
    pub account_max_write_capacity_units: Option<i64>,

    /// The maximum read capacity units that your account allows you to
    /// provision for a new table that you are creating in this Region.
    #[serde(rename = "TableMaxReadCapacityUnits")]
    pub table_max_read_capacity_units: Option<i64>,

    /// The maximum write capacity units that your account allows you to
    /// provision for a new table that you are creating in this Region.
    #[serde(rename = "TableMaxWriteCapacityUnits")]
    pub table_max_write_capacity_units: Option<i64>,
}

impl DescribeLimitsOutput {
    /// Creates a new output with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [account_max_read_capacity_units][DescribeLimitsOutput::account_max_read_capacity_units] field.
    pub fn set_account_max_read_capacity_units(mut self, v: i64) -> Self {
        self.account_max_read_capacity_units = Some(v);
        self
    }

    /// Sets the [account_max_write_capacity_units][DescribeLimitsOutput::account_max_write_capacity_units] field.
    pub fn set_account_max_write_capacity_units(mut self, v: i64) -> Self {
        self.account_max_write_capacity_units = Some(v);
        self
    }

    /// Sets the [table_max_read_capacity_units][DescribeLimitsOutput::table_max_read_capacity_units] field.
    pub fn set_table_max_read_capacity_units(mut self, v: i64) -> Self {
        self.table_max_read_capacity_units = Some(v);
        self
    }

    /// Sets the [table_max_write_capacity_units][DescribeLimitsOutput::table_max_write_capacity_units] field.
    pub fn set_table_max_write_capacity_units(mut self, v: i64) -> Self {
        self.table_max_write_capacity_units = Some(v);
        self
    }
}

/// Represents the output of a `PutItem` operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PutItemOutput {
    /// The attribute values as they appeared before the `PutItem` operation.
    /// Only present if `ReturnValues` was `ALL_OLD` in the request.
    #[serde(rename = "Attributes")]
    pub attributes: HashMap<String, AttributeValue>,

    /// The capacity units consumed by the operation.
    #[serde(rename = "ConsumedCapacity")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl PutItemOutput {
    /// Creates a new output with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [attributes][PutItemOutput::attributes] field.
    pub fn set_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [consumed_capacity][PutItemOutput::consumed_capacity] field.
    pub fn set_consumed_capacity<T: Into<ConsumedCapacity>>(mut self, v: T) -> Self {
        self.consumed_capacity = Some(v.into());
        self
    }
}

/// Represents the output of an `UpdateItem` operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UpdateItemOutput {
    /// A map of attribute values as they appear before or after the
    /// `UpdateItem` operation, as determined by the `ReturnValues` parameter.
    #[serde(rename = "Attributes")]
    pub attributes: HashMap<String, AttributeValue>,

    /// The capacity units consumed by the operation.
    #[serde(rename = "ConsumedCapacity")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl UpdateItemOutput {
    /// Creates a new output with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [attributes][UpdateItemOutput::attributes] field.
    pub fn set_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [consumed_capacity][UpdateItemOutput::consumed_capacity] field.
    pub fn set_consumed_capacity<T: Into<ConsumedCapacity>>(mut self, v: T) -> Self {
        self.consumed_capacity = Some(v.into());
        self
    }
}

/// The capacity units consumed by an operation.
///
/// The data returned includes the total provisioned throughput consumed,
/// along with statistics for the table and any indexes involved in the
/// operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConsumedCapacity {
    /// The name of the table that was affected by the operation.
    #[serde(rename = "TableName")]
    pub table_name: Option<String>,

    /// The total number of capacity units consumed by the operation.
    #[serde(rename = "CapacityUnits")]
    pub capacity_units: Option<f64>,
}

impl ConsumedCapacity {
    /// Creates a new value with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [table_name][ConsumedCapacity::table_name] field.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets the [capacity_units][ConsumedCapacity::capacity_units] field.
    pub fn set_capacity_units(mut self, v: f64) -> Self {
        self.capacity_units = Some(v);
        self
    }
}

/// Represents the data for an attribute.
///
/// Each attribute value is described as a name-value pair. The name is the
/// data type, and the value is the data itself. Exactly one member should be
/// set; the others are omitted from the payload. Nothing enforces the
/// one-member rule client-side: the service rejects malformed values.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AttributeValue {
    /// An attribute of type String.
    #[serde(rename = "S")]
    pub s: Option<String>,

    /// An attribute of type Number. Numbers are sent across the network as
    /// strings, to maximize compatibility across languages and libraries.
    #[serde(rename = "N")]
    pub n: Option<String>,

    /// An attribute of type Binary. Base64-encoded on the wire.
    #[serde(rename = "B")]
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub b: Option<bytes::Bytes>,

    /// An attribute of type String Set.
    #[serde(rename = "SS")]
    pub ss: Vec<String>,

    /// An attribute of type Number Set.
    #[serde(rename = "NS")]
    pub ns: Vec<String>,

    /// An attribute of type Binary Set.
    #[serde(rename = "BS")]
    #[serde_as(as = "Vec<serde_with::base64::Base64>")]
    pub bs: Vec<bytes::Bytes>,

    /// An attribute of type Map.
    #[serde(rename = "M")]
    pub m: HashMap<String, AttributeValue>,

    /// An attribute of type List.
    #[serde(rename = "L")]
    pub l: Vec<AttributeValue>,

    /// An attribute of type Null.
    #[serde(rename = "NULL")]
    pub null: Option<bool>,

    /// An attribute of type Boolean.
    #[serde(rename = "BOOL")]
    pub boolean: Option<bool>,
}

impl AttributeValue {
    /// Creates a new value with all members unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [s][AttributeValue::s] member.
    pub fn set_s<T: Into<String>>(mut self, v: T) -> Self {
        self.s = Some(v.into());
        self
    }

    /// Sets the [n][AttributeValue::n] member.
    pub fn set_n<T: Into<String>>(mut self, v: T) -> Self {
        self.n = Some(v.into());
        self
    }

    /// Sets the [b][AttributeValue::b] member.
    pub fn set_b<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.b = Some(v.into());
        self
    }

    /// Sets the [ss][AttributeValue::ss] member.
    pub fn set_ss<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ss = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the [ns][AttributeValue::ns] member.
    pub fn set_ns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ns = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the [bs][AttributeValue::bs] member.
    pub fn set_bs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<bytes::Bytes>,
    {
        self.bs = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the [m][AttributeValue::m] member.
    pub fn set_m<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.m = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the [l][AttributeValue::l] member.
    pub fn set_l<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.l = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Sets the [null][AttributeValue::null] member.
    pub fn set_null(mut self, v: bool) -> Self {
        self.null = Some(v);
        self
    }

    /// Sets the [boolean][AttributeValue::boolean] member.
    pub fn set_boolean(mut self, v: bool) -> Self {
        self.boolean = Some(v);
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Assembles the wire payload. Only the members that are set (for lists
    /// and maps: non-empty) appear in the output.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = &self.s {
            payload.insert("S".into(), Value::from(v.clone()));
        }
        if let Some(v) = &self.n {
            payload.insert("N".into(), Value::from(v.clone()));
        }
        if let Some(v) = &self.b {
            payload.insert("B".into(), Value::from(STANDARD.encode(v)));
        }
        if !self.ss.is_empty() {
            payload.insert("SS".into(), Value::from(self.ss.clone()));
        }
        if !self.ns.is_empty() {
            payload.insert("NS".into(), Value::from(self.ns.clone()));
        }
        if !self.bs.is_empty() {
            let items = self
                .bs
                .iter()
                .map(|v| Value::from(STANDARD.encode(v)))
                .collect::<Vec<_>>();
            payload.insert("BS".into(), Value::Array(items));
        }
        if !self.m.is_empty() {
            let mut map = serde_json::Map::new();
            for (name, item) in &self.m {
                map.insert(name.clone(), Value::Object(item.request_body()?));
            }
            payload.insert("M".into(), Value::Object(map));
        }
        if !self.l.is_empty() {
            let items = self
                .l
                .iter()
                .map(|v| v.request_body().map(Value::Object))
                .collect::<gax::Result<Vec<_>>>()?;
            payload.insert("L".into(), Value::Array(items));
        }
        if let Some(v) = self.null {
            payload.insert("NULL".into(), Value::from(v));
        }
        if let Some(v) = self.boolean {
            payload.insert("BOOL".into(), Value::from(v));
        }
        Ok(payload)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::new().set_s(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::new().set_s(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::new().set_boolean(value)
    }
}

/// For the `UpdateItem` operation, represents the attributes to be modified,
/// the action to perform on each, and the new value for each.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AttributeValueUpdate {
    /// The new value, if applicable, for this attribute.
    pub value: Option<AttributeValue>,

    /// Specifies how to perform the update. Valid values are `PUT`
    /// (default), `DELETE`, and `ADD`.
    pub action: Option<AttributeAction>,
}

impl AttributeValueUpdate {
    /// Creates a new value with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [value][AttributeValueUpdate::value] field.
    pub fn set_value<T: Into<AttributeValue>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the [value][AttributeValueUpdate::value] field.
    pub fn set_or_clear_value<T: Into<AttributeValue>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }

    /// Sets the [action][AttributeValueUpdate::action] field.
    pub fn set_action<T: Into<AttributeAction>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = &self.value {
            payload.insert("Value".into(), Value::Object(v.request_body()?));
        }
        if let Some(v) = &self.action {
            payload.insert(
                "Action".into(),
                v.wire_name("Action", "AttributeValueUpdate")?.into(),
            );
        }
        Ok(payload)
    }
}

/// Represents a condition to be compared with an attribute value.
///
/// This is a legacy shape, used by the `Expected` parameter of the
/// conditional write operations.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExpectedAttributeValue {
    /// The attribute value to compare with.
    pub value: Option<AttributeValue>,

    /// Causes the condition to evaluate to true if the attribute exists
    /// (`true`) or does not exist (`false`).
    pub exists: Option<bool>,

    /// A comparator for evaluating attributes, such as equals, greater
    /// than, or less than.
    pub comparison_operator: Option<ComparisonOperator>,

    /// One or more values to evaluate against the supplied attribute. The
    /// number of values in the list depends on the comparison operator.
    pub attribute_value_list: Vec<AttributeValue>,
}

impl ExpectedAttributeValue {
    /// Creates a new value with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [value][ExpectedAttributeValue::value] field.
    pub fn set_value<T: Into<AttributeValue>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the [value][ExpectedAttributeValue::value] field.
    pub fn set_or_clear_value<T: Into<AttributeValue>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }

    /// Sets the [exists][ExpectedAttributeValue::exists] field.
    pub fn set_exists(mut self, v: bool) -> Self {
        self.exists = Some(v);
        self
    }

    /// Sets the [comparison_operator][ExpectedAttributeValue::comparison_operator] field.
    pub fn set_comparison_operator<T: Into<ComparisonOperator>>(mut self, v: T) -> Self {
        self.comparison_operator = Some(v.into());
        self
    }

    /// Sets the [attribute_value_list][ExpectedAttributeValue::attribute_value_list] field.
    pub fn set_attribute_value_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.attribute_value_list = v.into_iter().map(|x| x.into()).collect();
        self
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = &self.value {
            payload.insert("Value".into(), Value::Object(v.request_body()?));
        }
        if let Some(v) = self.exists {
            payload.insert("Exists".into(), Value::from(v));
        }
        if let Some(v) = &self.comparison_operator {
            payload.insert(
                "ComparisonOperator".into(),
                v.wire_name("ComparisonOperator", "ExpectedAttributeValue")?
                    .into(),
            );
        }
        if !self.attribute_value_list.is_empty() {
            let items = self
                .attribute_value_list
                .iter()
                .map(|v| v.request_body().map(Value::Object))
                .collect::<gax::Result<Vec<_>>>()?;
            payload.insert("AttributeValueList".into(), Value::Array(items));
        }
        Ok(payload)
    }
}

/// Specifies how to perform an attribute update in an `UpdateItem`
/// operation.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AttributeAction {
    /// Adds the value to an existing numeric or set attribute.
    Add,
    /// Replaces (or creates) the attribute with the new value.
    Put,
    /// Removes the attribute, or elements from a set attribute.
    Delete,
    /// If set, the enum value is unknown to this version of the library.
    ///
    /// Unknown values are rejected when the request is assembled.
    UnknownValue(attribute_action::UnknownValue),
}

#[doc(hidden)]
pub mod attribute_action {
    /// The value of an [AttributeAction][super::AttributeAction] outside the
    /// closed set of known values.
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) String);
}

impl AttributeAction {
    /// Gets the enum value name, including unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Add => "ADD",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::UnknownValue(u) => u.0.as_str(),
        }
    }

    pub(crate) fn wire_name(
        &self,
        field: &'static str,
        message: &'static str,
    ) -> gax::Result<&str> {
        match self {
            Self::UnknownValue(u) => Err(Error::binding(BindingError::invalid_enum_value(
                field,
                message,
                u.0.clone(),
                "AttributeAction",
            ))),
            _ => Ok(self.name()),
        }
    }
}

impl From<&str> for AttributeAction {
    fn from(value: &str) -> Self {
        match value {
            "ADD" => Self::Add,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::UnknownValue(attribute_action::UnknownValue(value.to_string())),
        }
    }
}

impl std::fmt::Display for AttributeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for AttributeAction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for AttributeAction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(gax::internal::EnumVisitor::<Self>::new("AttributeAction"))
    }
}

/// A comparator for evaluating attributes.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ComparisonOperator {
    Eq,
    Ne,
    In,
    Le,
    Lt,
    Ge,
    Gt,
    Between,
    NotNull,
    Null,
    Contains,
    NotContains,
    BeginsWith,
    /// If set, the enum value is unknown to this version of the library.
    UnknownValue(comparison_operator::UnknownValue),
}

#[doc(hidden)]
pub mod comparison_operator {
    /// The value of a [ComparisonOperator][super::ComparisonOperator]
    /// outside the closed set of known values.
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) String);
}

impl ComparisonOperator {
    /// Gets the enum value name, including unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::In => "IN",
            Self::Le => "LE",
            Self::Lt => "LT",
            Self::Ge => "GE",
            Self::Gt => "GT",
            Self::Between => "BETWEEN",
            Self::NotNull => "NOT_NULL",
            Self::Null => "NULL",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT_CONTAINS",
            Self::BeginsWith => "BEGINS_WITH",
            Self::UnknownValue(u) => u.0.as_str(),
        }
    }

    pub(crate) fn wire_name(
        &self,
        field: &'static str,
        message: &'static str,
    ) -> gax::Result<&str> {
        match self {
            Self::UnknownValue(u) => Err(Error::binding(BindingError::invalid_enum_value(
                field,
                message,
                u.0.clone(),
                "ComparisonOperator",
            ))),
            _ => Ok(self.name()),
        }
    }
}

impl From<&str> for ComparisonOperator {
    fn from(value: &str) -> Self {
        match value {
            "EQ" => Self::Eq,
            "NE" => Self::Ne,
            "IN" => Self::In,
            "LE" => Self::Le,
            "LT" => Self::Lt,
            "GE" => Self::Ge,
            "GT" => Self::Gt,
            "BETWEEN" => Self::Between,
            "NOT_NULL" => Self::NotNull,
            "NULL" => Self::Null,
            "CONTAINS" => Self::Contains,
            "NOT_CONTAINS" => Self::NotContains,
            "BEGINS_WITH" => Self::BeginsWith,
            _ => Self::UnknownValue(comparison_operator::UnknownValue(value.to_string())),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for ComparisonOperator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for ComparisonOperator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(gax::internal::EnumVisitor::<Self>::new("ComparisonOperator"))
    }
}

/// A logical operator applied to multiple conditions in the legacy
/// `Expected` parameter.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConditionalOperator {
    /// All of the conditions must evaluate to true.
    And,
    /// At least one of the conditions must evaluate to true.
    Or,
    /// If set, the enum value is unknown to this version of the library.
    UnknownValue(conditional_operator::UnknownValue),
}

#[doc(hidden)]
pub mod conditional_operator {
    /// The value of a [ConditionalOperator][super::ConditionalOperator]
    /// outside the closed set of known values.
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) String);
}

impl ConditionalOperator {
    /// Gets the enum value name, including unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::UnknownValue(u) => u.0.as_str(),
        }
    }

    pub(crate) fn wire_name(
        &self,
        field: &'static str,
        message: &'static str,
    ) -> gax::Result<&str> {
        match self {
            Self::UnknownValue(u) => Err(Error::binding(BindingError::invalid_enum_value(
                field,
                message,
                u.0.clone(),
                "ConditionalOperator",
            ))),
            _ => Ok(self.name()),
        }
    }
}

impl From<&str> for ConditionalOperator {
    fn from(value: &str) -> Self {
        match value {
            "AND" => Self::And,
            "OR" => Self::Or,
            _ => Self::UnknownValue(conditional_operator::UnknownValue(value.to_string())),
        }
    }
}

impl std::fmt::Display for ConditionalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for ConditionalOperator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for ConditionalOperator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(gax::internal::EnumVisitor::<Self>::new("ConditionalOperator"))
    }
}

/// Determines the level of detail about throughput consumption that is
/// returned in the response.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ReturnConsumedCapacity {
    /// The response includes the aggregate consumed capacity, together with
    /// the consumed capacity for each table and secondary index that was
    /// accessed.
    Indexes,
    /// The response includes only the aggregate consumed capacity.
    Total,
    /// No consumed capacity details are included in the response.
    None,
    /// If set, the enum value is unknown to this version of the library.
    UnknownValue(return_consumed_capacity::UnknownValue),
}

#[doc(hidden)]
pub mod return_consumed_capacity {
    /// The value of a [ReturnConsumedCapacity][super::ReturnConsumedCapacity]
    /// outside the closed set of known values.
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) String);
}

impl ReturnConsumedCapacity {
    /// Gets the enum value name, including unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Indexes => "INDEXES",
            Self::Total => "TOTAL",
            Self::None => "NONE",
            Self::UnknownValue(u) => u.0.as_str(),
        }
    }

    pub(crate) fn wire_name(
        &self,
        field: &'static str,
        message: &'static str,
    ) -> gax::Result<&str> {
        match self {
            Self::UnknownValue(u) => Err(Error::binding(BindingError::invalid_enum_value(
                field,
                message,
                u.0.clone(),
                "ReturnConsumedCapacity",
            ))),
            _ => Ok(self.name()),
        }
    }
}

impl From<&str> for ReturnConsumedCapacity {
    fn from(value: &str) -> Self {
        match value {
            "INDEXES" => Self::Indexes,
            "TOTAL" => Self::Total,
            "NONE" => Self::None,
            _ => Self::UnknownValue(return_consumed_capacity::UnknownValue(value.to_string())),
        }
    }
}

impl std::fmt::Display for ReturnConsumedCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for ReturnConsumedCapacity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for ReturnConsumedCapacity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(gax::internal::EnumVisitor::<Self>::new(
            "ReturnConsumedCapacity",
        ))
    }
}

/// Determines whether item collection metrics are returned.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ReturnItemCollectionMetrics {
    /// The response includes statistics about item collections, if any,
    /// that were modified during the operation.
    Size,
    /// No statistics are returned.
    None,
    /// If set, the enum value is unknown to this version of the library.
    UnknownValue(return_item_collection_metrics::UnknownValue),
}

#[doc(hidden)]
pub mod return_item_collection_metrics {
    /// The value of a
    /// [ReturnItemCollectionMetrics][super::ReturnItemCollectionMetrics]
    /// outside the closed set of known values.
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) String);
}

impl ReturnItemCollectionMetrics {
    /// Gets the enum value name, including unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Size => "SIZE",
            Self::None => "NONE",
            Self::UnknownValue(u) => u.0.as_str(),
        }
    }

    pub(crate) fn wire_name(
        &self,
        field: &'static str,
        message: &'static str,
    ) -> gax::Result<&str> {
        match self {
            Self::UnknownValue(u) => Err(Error::binding(BindingError::invalid_enum_value(
                field,
                message,
                u.0.clone(),
                "ReturnItemCollectionMetrics",
            ))),
            _ => Ok(self.name()),
        }
    }
}

impl From<&str> for ReturnItemCollectionMetrics {
    fn from(value: &str) -> Self {
        match value {
            "SIZE" => Self::Size,
            "NONE" => Self::None,
            _ => Self::UnknownValue(return_item_collection_metrics::UnknownValue(
                value.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for ReturnItemCollectionMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for ReturnItemCollectionMetrics {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for ReturnItemCollectionMetrics {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(gax::internal::EnumVisitor::<Self>::new(
            "ReturnItemCollectionMetrics",
        ))
    }
}

/// Determines which item attributes a write operation returns.
///
/// Not every value is valid for every operation; for example, `DeleteItem`
/// only accepts `NONE` and `ALL_OLD`. The service enforces the
/// per-operation restrictions.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ReturnValue {
    /// Nothing is returned. This is the default.
    None,
    /// The content of the old item is returned.
    AllOld,
    /// Only the updated attributes are returned, as they appeared before
    /// the update.
    UpdatedOld,
    /// All of the attributes of the new version of the item are returned.
    AllNew,
    /// Only the updated attributes are returned, as they appear after the
    /// update.
    UpdatedNew,
    /// If set, the enum value is unknown to this version of the library.
    UnknownValue(return_value::UnknownValue),
}

#[doc(hidden)]
pub mod return_value {
    /// The value of a [ReturnValue][super::ReturnValue] outside the closed
    /// set of known values.
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) String);
}

impl ReturnValue {
    /// Gets the enum value name, including unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::AllOld => "ALL_OLD",
            Self::UpdatedOld => "UPDATED_OLD",
            Self::AllNew => "ALL_NEW",
            Self::UpdatedNew => "UPDATED_NEW",
            Self::UnknownValue(u) => u.0.as_str(),
        }
    }

    pub(crate) fn wire_name(
        &self,
        field: &'static str,
        message: &'static str,
    ) -> gax::Result<&str> {
        match self {
            Self::UnknownValue(u) => Err(Error::binding(BindingError::invalid_enum_value(
                field,
                message,
                u.0.clone(),
                "ReturnValue",
            ))),
            _ => Ok(self.name()),
        }
    }
}

impl From<&str> for ReturnValue {
    fn from(value: &str) -> Self {
        match value {
            "NONE" => Self::None,
            "ALL_OLD" => Self::AllOld,
            "UPDATED_OLD" => Self::UpdatedOld,
            "ALL_NEW" => Self::AllNew,
            "UPDATED_NEW" => Self::UpdatedNew,
            _ => Self::UnknownValue(return_value::UnknownValue(value.to_string())),
        }
    }
}

impl std::fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for ReturnValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for ReturnValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(gax::internal::EnumVisitor::<Self>::new("ReturnValue"))
    }
}
