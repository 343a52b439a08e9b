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

//! The messages that are part of this client library.
//!
//! Input messages never validate their fields when constructed or mutated;
//! the validation happens in `request_body()` as the operation is invoked.

use gax::error::{BindingError, Error};
use serde_json::Value;

/// Represents the input of an `AdminSetUserMFAPreference` operation.
///
/// Sets a user's MFA preferences with administrator credentials, naming the
/// user rather than presenting an access token.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AdminSetUserMfaPreferenceInput {
    /// The SMS text message MFA settings.
    pub sms_mfa_settings: Option<SmsMfaSettingsType>,

    /// The time-based one-time password software token MFA settings.
    pub software_token_mfa_settings: Option<SoftwareTokenMfaSettingsType>,

    /// The name of the user whose MFA preference is set. Required.
    pub username: Option<String>,

    /// The ID of the user pool where the user exists. Required.
    pub user_pool_id: Option<String>,
}

impl AdminSetUserMfaPreferenceInput {
    /// Creates a new input with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [sms_mfa_settings][AdminSetUserMfaPreferenceInput::sms_mfa_settings] field.
    pub fn set_sms_mfa_settings<T: Into<SmsMfaSettingsType>>(mut self, v: T) -> Self {
        self.sms_mfa_settings = Some(v.into());
        self
    }

    /// Sets or clears the [sms_mfa_settings][AdminSetUserMfaPreferenceInput::sms_mfa_settings] field.
    pub fn set_or_clear_sms_mfa_settings<T: Into<SmsMfaSettingsType>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.sms_mfa_settings = v.map(|x| x.into());
        self
    }

    /// Sets the [software_token_mfa_settings][AdminSetUserMfaPreferenceInput::software_token_mfa_settings] field.
    pub fn set_software_token_mfa_settings<T: Into<SoftwareTokenMfaSettingsType>>(
        mut self,
        v: T,
    ) -> Self {
        self.software_token_mfa_settings = Some(v.into());
        self
    }

    /// Sets or clears the [software_token_mfa_settings][AdminSetUserMfaPreferenceInput::software_token_mfa_settings] field.
    pub fn set_or_clear_software_token_mfa_settings<T: Into<SoftwareTokenMfaSettingsType>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.software_token_mfa_settings = v.map(|x| x.into());
        self
    }

    /// Sets the [username][AdminSetUserMfaPreferenceInput::username] field.
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets the [user_pool_id][AdminSetUserMfaPreferenceInput::user_pool_id] field.
    pub fn set_user_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_pool_id = Some(v.into());
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Assembles the wire payload, verifying required fields.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = &self.sms_mfa_settings {
            payload.insert("SMSMfaSettings".into(), Value::Object(v.request_body()?));
        }
        if let Some(v) = &self.software_token_mfa_settings {
            payload.insert(
                "SoftwareTokenMfaSettings".into(),
                Value::Object(v.request_body()?),
            );
        }
        let v = self.username.as_ref().ok_or_else(|| {
            Error::binding(BindingError::missing(
                "Username",
                "AdminSetUserMfaPreferenceInput",
            ))
        })?;
        payload.insert("Username".into(), Value::from(v.clone()));
        let v = self.user_pool_id.as_ref().ok_or_else(|| {
            Error::binding(BindingError::missing(
                "UserPoolId",
                "AdminSetUserMfaPreferenceInput",
            ))
        })?;
        payload.insert("UserPoolId".into(), Value::from(v.clone()));
        Ok(payload)
    }
}

/// Represents the output of an `AdminSetUserMFAPreference` operation. Has no
/// content.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[non_exhaustive]
pub struct AdminSetUserMfaPreferenceOutput {}

impl AdminSetUserMfaPreferenceOutput {
    /// Creates a new output.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Represents the input of a `SetUserMFAPreference` operation.
///
/// Sets the MFA preferences of the user who owns the access token. Only the
/// settings that are present are changed; a settings object that is unset
/// leaves the corresponding factor untouched.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SetUserMfaPreferenceInput {
    /// The SMS text message MFA settings.
    pub sms_mfa_settings: Option<SmsMfaSettingsType>,

    /// The time-based one-time password software token MFA settings.
    pub software_token_mfa_settings: Option<SoftwareTokenMfaSettingsType>,

    /// A valid access token that Amazon Cognito issued to the user whose MFA
    /// preference is set. Required.
    pub access_token: Option<String>,
}

impl SetUserMfaPreferenceInput {
    /// Creates a new input with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [sms_mfa_settings][SetUserMfaPreferenceInput::sms_mfa_settings] field.
    pub fn set_sms_mfa_settings<T: Into<SmsMfaSettingsType>>(mut self, v: T) -> Self {
        self.sms_mfa_settings = Some(v.into());
        self
    }

    /// Sets or clears the [sms_mfa_settings][SetUserMfaPreferenceInput::sms_mfa_settings] field.
    pub fn set_or_clear_sms_mfa_settings<T: Into<SmsMfaSettingsType>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.sms_mfa_settings = v.map(|x| x.into());
        self
    }

    /// Sets the [software_token_mfa_settings][SetUserMfaPreferenceInput::software_token_mfa_settings] field.
    pub fn set_software_token_mfa_settings<T: Into<SoftwareTokenMfaSettingsType>>(
        mut self,
        v: T,
    ) -> Self {
        self.software_token_mfa_settings = Some(v.into());
        self
    }

    /// Sets or clears the [software_token_mfa_settings][SetUserMfaPreferenceInput::software_token_mfa_settings] field.
    pub fn set_or_clear_software_token_mfa_settings<T: Into<SoftwareTokenMfaSettingsType>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.software_token_mfa_settings = v.map(|x| x.into());
        self
    }

    /// Sets the [access_token][SetUserMfaPreferenceInput::access_token] field.
    pub fn set_access_token<T: Into<String>>(mut self, v: T) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Assembles the wire payload, verifying required fields.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = &self.sms_mfa_settings {
            payload.insert("SMSMfaSettings".into(), Value::Object(v.request_body()?));
        }
        if let Some(v) = &self.software_token_mfa_settings {
            payload.insert(
                "SoftwareTokenMfaSettings".into(),
                Value::Object(v.request_body()?),
            );
        }
        let v = self.access_token.as_ref().ok_or_else(|| {
            Error::binding(BindingError::missing(
                "AccessToken",
                "SetUserMfaPreferenceInput",
            ))
        })?;
        payload.insert("AccessToken".into(), Value::from(v.clone()));
        Ok(payload)
    }
}

/// Represents the output of a `SetUserMFAPreference` operation. Has no
/// content.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[non_exhaustive]
pub struct SetUserMfaPreferenceOutput {}

impl SetUserMfaPreferenceOutput {
    /// Creates a new output.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The SMS text message multi-factor authentication settings for a user.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SmsMfaSettingsType {
    /// Specifies whether SMS message MFA is activated.
    pub enabled: Option<bool>,

    /// Specifies whether SMS is the preferred MFA method.
    pub preferred_mfa: Option<bool>,
}

impl SmsMfaSettingsType {
    /// Creates a new value with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [enabled][SmsMfaSettingsType::enabled] field.
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }

    /// Sets or clears the [enabled][SmsMfaSettingsType::enabled] field.
    pub fn set_or_clear_enabled(mut self, v: Option<bool>) -> Self {
        self.enabled = v;
        self
    }

    /// Sets the [preferred_mfa][SmsMfaSettingsType::preferred_mfa] field.
    pub fn set_preferred_mfa(mut self, v: bool) -> Self {
        self.preferred_mfa = Some(v);
        self
    }

    /// Sets or clears the [preferred_mfa][SmsMfaSettingsType::preferred_mfa] field.
    pub fn set_or_clear_preferred_mfa(mut self, v: Option<bool>) -> Self {
        self.preferred_mfa = v;
        self
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = self.enabled {
            payload.insert("Enabled".into(), Value::from(v));
        }
        if let Some(v) = self.preferred_mfa {
            payload.insert("PreferredMfa".into(), Value::from(v));
        }
        Ok(payload)
    }
}

/// The time-based one-time password software token MFA settings for a user.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SoftwareTokenMfaSettingsType {
    /// Specifies whether software token MFA is activated.
    pub enabled: Option<bool>,

    /// Specifies whether software token MFA is the preferred MFA method.
    pub preferred_mfa: Option<bool>,
}

impl SoftwareTokenMfaSettingsType {
    /// Creates a new value with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [enabled][SoftwareTokenMfaSettingsType::enabled] field.
    pub fn set_enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }

    /// Sets or clears the [enabled][SoftwareTokenMfaSettingsType::enabled] field.
    pub fn set_or_clear_enabled(mut self, v: Option<bool>) -> Self {
        self.enabled = v;
        self
    }

    /// Sets the [preferred_mfa][SoftwareTokenMfaSettingsType::preferred_mfa] field.
    pub fn set_preferred_mfa(mut self, v: bool) -> Self {
        self.preferred_mfa = Some(v);
        self
    }

    /// Sets or clears the [preferred_mfa][SoftwareTokenMfaSettingsType::preferred_mfa] field.
    pub fn set_or_clear_preferred_mfa(mut self, v: Option<bool>) -> Self {
        self.preferred_mfa = v;
        self
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn request_body(&self) -> gax::Result<serde_json::Map<String, Value>> {
        let mut payload = serde_json::Map::new();
        if let Some(v) = self.enabled {
            payload.insert("Enabled".into(), Value::from(v));
        }
        if let Some(v) = self.preferred_mfa {
            payload.insert("PreferredMfa".into(), Value::from(v));
        }
        Ok(payload)
    }
}
