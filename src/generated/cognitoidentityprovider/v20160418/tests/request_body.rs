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

use aws_cloud_cognitoidentityprovider_v20160418::model::{
    AdminSetUserMfaPreferenceInput, SetUserMfaPreferenceInput, SmsMfaSettingsType,
    SoftwareTokenMfaSettingsType,
};
use gax::error::BindingError;
use serde_json::{Value, json};

fn as_value(payload: serde_json::Map<String, Value>) -> Value {
    Value::Object(payload)
}

#[test]
fn missing_access_token() {
    let input = SetUserMfaPreferenceInput::new()
        .set_software_token_mfa_settings(SoftwareTokenMfaSettingsType::new().set_enabled(true));
    let err = input.request_body().err().unwrap();
    assert!(err.is_binding(), "{err:?}");
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing(
            "AccessToken",
            "SetUserMfaPreferenceInput"
        ))
    );
}

#[test]
fn nested_settings_are_serialized_recursively() -> anyhow::Result<()> {
    let input = SetUserMfaPreferenceInput::new()
        .set_access_token("eyJra-test-only")
        .set_sms_mfa_settings(SmsMfaSettingsType::new().set_enabled(false))
        .set_software_token_mfa_settings(
            SoftwareTokenMfaSettingsType::new()
                .set_enabled(true)
                .set_preferred_mfa(true),
        );
    let got = as_value(input.request_body()?);
    let want = json!({
        "AccessToken": "eyJra-test-only",
        "SMSMfaSettings": {"Enabled": false},
        "SoftwareTokenMfaSettings": {"Enabled": true, "PreferredMfa": true},
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn unset_settings_are_omitted() -> anyhow::Result<()> {
    let input = SetUserMfaPreferenceInput::new().set_access_token("eyJra-test-only");
    let got = as_value(input.request_body()?);
    assert_eq!(got, json!({"AccessToken": "eyJra-test-only"}));
    Ok(())
}

#[test]
fn settings_with_no_fields_serialize_to_empty_objects() -> anyhow::Result<()> {
    // A nested value object that is present but empty still appears: present
    // means the caller asked for it.
    let input = SetUserMfaPreferenceInput::new()
        .set_access_token("eyJra-test-only")
        .set_sms_mfa_settings(SmsMfaSettingsType::new());
    let got = as_value(input.request_body()?);
    assert_eq!(
        got,
        json!({"AccessToken": "eyJra-test-only", "SMSMfaSettings": {}})
    );
    Ok(())
}

#[test]
fn admin_variant_requires_username_and_pool() {
    let err = AdminSetUserMfaPreferenceInput::new()
        .set_user_pool_id("us-east-1_EXAMPLE")
        .request_body()
        .err()
        .unwrap();
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing(
            "Username",
            "AdminSetUserMfaPreferenceInput"
        ))
    );

    let err = AdminSetUserMfaPreferenceInput::new()
        .set_username("alice")
        .request_body()
        .err()
        .unwrap();
    assert_eq!(
        err.as_inner::<BindingError>(),
        Some(&BindingError::missing(
            "UserPoolId",
            "AdminSetUserMfaPreferenceInput"
        ))
    );
}

#[test]
fn admin_variant_payload() -> anyhow::Result<()> {
    let input = AdminSetUserMfaPreferenceInput::new()
        .set_username("alice")
        .set_user_pool_id("us-east-1_EXAMPLE")
        .set_software_token_mfa_settings(SoftwareTokenMfaSettingsType::new().set_enabled(true));
    let got = as_value(input.request_body()?);
    let want = json!({
        "Username": "alice",
        "UserPoolId": "us-east-1_EXAMPLE",
        "SoftwareTokenMfaSettings": {"Enabled": true},
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn value_object_factory_is_idempotent() {
    let settings = SoftwareTokenMfaSettingsType::new().set_enabled(true);
    let converted: SoftwareTokenMfaSettingsType = settings.clone().into();
    assert_eq!(converted, settings);
}
