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

/// A failure to assemble the request body from an input message.
///
/// Input messages accept any combination of fields at construction and
/// mutation time, including incomplete or invalid combinations. The
/// validation happens when the operation is invoked, as the request body is
/// assembled, and before any I/O takes place. This type describes the two
/// ways that validation can fail.
///
/// # Example
/// ```
/// use aws_cloud_gax::error::BindingError;
/// let e = BindingError::invalid_enum_value(
///     "ReturnValues", "DeleteItemInput", "MAYBE", "ReturnValue");
/// assert!(format!("{e}").contains("MAYBE"));
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required field was unset when the request body was assembled.
    #[error("missing required parameter `{field}` for `{message}`: the value cannot be unset")]
    MissingRequiredParameter {
        /// The wire name of the missing field.
        field: &'static str,
        /// The name of the input message that owns the field.
        message: &'static str,
    },

    /// An enumerated field held a value outside the closed set of known
    /// values.
    ///
    /// Unknown values are storable, so applications can round-trip values
    /// introduced after this library was generated. They are rejected when a
    /// request is assembled because the target service would reject them
    /// anyway, without the field name to point at.
    #[error(
        "invalid parameter `{field}` for `{message}`: the value \"{value}\" is not a valid `{enumeration}`"
    )]
    InvalidEnumValue {
        /// The wire name of the offending field.
        field: &'static str,
        /// The name of the input message that owns the field.
        message: &'static str,
        /// The offending value.
        value: String,
        /// The name of the enumeration the value failed to match.
        enumeration: &'static str,
    },
}

impl BindingError {
    /// Creates a missing-required-parameter error.
    pub fn missing(field: &'static str, message: &'static str) -> Self {
        Self::MissingRequiredParameter { field, message }
    }

    /// Creates an invalid-enum-value error.
    pub fn invalid_enum_value<V: Into<String>>(
        field: &'static str,
        message: &'static str,
        value: V,
        enumeration: &'static str,
    ) -> Self {
        Self::InvalidEnumValue {
            field,
            message,
            value: value.into(),
            enumeration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_display() {
        let e = BindingError::missing("Key", "DeleteItemInput");
        let got = format!("{e}");
        assert!(got.contains("`Key`"), "{got}");
        assert!(got.contains("`DeleteItemInput`"), "{got}");
    }

    #[test]
    fn invalid_enum_value_display() {
        let e = BindingError::invalid_enum_value("ReturnValues", "PutItemInput", "MAYBE", "ReturnValue");
        let got = format!("{e}");
        assert!(got.contains("`ReturnValues`"), "{got}");
        assert!(got.contains("\"MAYBE\""), "{got}");
        assert!(got.contains("`ReturnValue`"), "{got}");
    }
}
