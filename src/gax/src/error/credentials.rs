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

use std::sync::Arc;

/// Represents an error creating or using [Credentials][crate::credentials::Credentials].
///
/// Problems creating credentials may include a badly formatted header name or
/// value. Problems using credentials may include a temporary failure in the
/// provider supplying them. The latter may succeed on a future attempt; the
/// [is_transient][CredentialsError::is_transient] predicate distinguishes the
/// two.
///
/// # Example
/// ```
/// use aws_cloud_gax::error::CredentialsError;
/// let e = CredentialsError::from_msg(true, "simulated transient failure");
/// assert!(e.is_transient());
/// assert!(format!("{e}").contains("simulated transient failure"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug)]
enum CredentialsErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping another error.
    pub fn new<T>(is_transient: bool, source: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            source: CredentialsErrorImpl::SimpleMessage(message.into()),
        }
    }

    /// If `true`, fetching the headers again may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let transient = if self.is_transient {
            "but future attempts may succeed"
        } else {
            "and future attempts will not succeed"
        };
        match &self.source {
            CredentialsErrorImpl::SimpleMessage(m) => {
                write!(f, "cannot create the auth headers ({transient}): {m}")
            }
            CredentialsErrorImpl::Source(e) => {
                write!(f, "cannot create the auth headers ({transient}): {e}")
            }
        }
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            CredentialsErrorImpl::SimpleMessage(_) => None,
            CredentialsErrorImpl::Source(e) => Some(e.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(is_transient: bool) {
        let e = CredentialsError::from_msg(is_transient, "test-only");
        assert_eq!(e.is_transient(), is_transient);
        assert!(format!("{e}").contains("test-only"), "{e}");
        assert!(e.source().is_none(), "{e:?}");
    }

    #[test]
    fn wrapping() {
        let inner = http::header::HeaderValue::from_bytes(b"\0invalid").unwrap_err();
        let e = CredentialsError::new(false, inner);
        assert!(!e.is_transient());
        assert!(e.source().is_some(), "{e:?}");
    }
}
